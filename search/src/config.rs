use crate::sort::SortState;
use songbook_core::types::AppConfig;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of autocomplete candidates.
    pub suggestion_limit: usize,
    pub default_sort: SortState,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: 50,
            default_sort: SortState::default(),
        }
    }
}

impl From<&AppConfig> for SearchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            suggestion_limit: config.search.suggestion_limit,
            default_sort: config.sort.into(),
        }
    }
}
