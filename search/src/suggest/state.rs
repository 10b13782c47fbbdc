use super::ranking::{Candidate, Suggestions};

/// Autocomplete list state.
///
/// Transitions consume the current state and return the next one, so they can
/// be exercised without any rendering surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SuggestionState {
    /// Nothing shown.
    #[default]
    Hidden,
    /// Candidates shown, none highlighted.
    Listing(Suggestions),
    /// Candidates shown, one highlighted.
    Selected(Suggestions, usize),
}

impl SuggestionState {
    /// Freshly computed candidates always start unselected.
    pub fn from_suggestions(suggestions: Option<Suggestions>) -> Self {
        match suggestions {
            Some(suggestions) if !suggestions.is_empty() => Self::Listing(suggestions),
            _ => Self::Hidden,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn suggestions(&self) -> Option<&Suggestions> {
        match self {
            Self::Hidden => None,
            Self::Listing(suggestions) | Self::Selected(suggestions, _) => Some(suggestions),
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        self.suggestions()
            .map(|suggestions| suggestions.candidates.as_slice())
            .unwrap_or_default()
    }

    /// `None` while nothing is highlighted.
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Self::Selected(_, index) => Some(*index),
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<&Candidate> {
        match self {
            Self::Selected(suggestions, index) => suggestions.candidates.get(*index),
            _ => None,
        }
    }

    /// Arrow-down: `(index + 1) mod len`, starting from -1 when unselected.
    pub fn select_next(self) -> Self {
        self.step(1)
    }

    /// Arrow-up: `(index - 1 + len) mod len`, starting from -1 when unselected.
    pub fn select_prev(self) -> Self {
        self.step(-1)
    }

    pub fn hide(self) -> Self {
        Self::Hidden
    }

    fn step(self, delta: isize) -> Self {
        let (suggestions, index) = match self {
            Self::Hidden => return Self::Hidden,
            Self::Listing(suggestions) => (suggestions, -1),
            Self::Selected(suggestions, index) => (suggestions, index as isize),
        };
        let len = suggestions.len() as isize;
        if len == 0 {
            return Self::Hidden;
        }
        let next = (index + delta + len).rem_euclid(len) as usize;
        Self::Selected(suggestions, next)
    }
}
