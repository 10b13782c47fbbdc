use crate::types::field::Field;
use crate::types::language::LanguageCode;
use crate::types::listen::ListenLink;
use crate::types::release::ReleaseDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use tracing::warn;

/// One song. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub artist: String,
    pub title: String,
    pub release: ReleaseDate,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Blank or malformed codes load as `None`.
    #[serde(
        default,
        deserialize_with = "deserialize_language",
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<LanguageCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Country code, shared by every song of the artist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub listen: Vec<ListenLink>,
}

impl Record {
    pub fn new(
        artist: impl Into<String>,
        title: impl Into<String>,
        release: impl Into<String>,
    ) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            release: ReleaseDate::new(release),
            tags: Vec::new(),
            language: None,
            note: None,
            nationality: None,
            listen: Vec::new(),
        }
    }

    /// Note text, empty when absent.
    pub fn note_or_empty(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }

    pub fn language_str(&self) -> Option<&str> {
        self.language.as_ref().map(|code| code.as_str())
    }

    /// Plain-text value of a field. Tags are joined with `,`, absent values are empty.
    pub fn field_text(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::Artist => Cow::Borrowed(&self.artist),
            Field::Title => Cow::Borrowed(&self.title),
            Field::Release => Cow::Borrowed(self.release.as_str()),
            Field::Tags => Cow::Owned(self.tags.join(",")),
            Field::Note => Cow::Borrowed(self.note_or_empty()),
            Field::Language => Cow::Borrowed(self.language_str().unwrap_or("")),
        }
    }

    /// Trims and lowercases tags, dropping empty ones.
    pub(crate) fn normalize_tags(&mut self) {
        self.tags = self
            .tags
            .iter()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();
    }
}

fn deserialize_language<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<LanguageCode>, D::Error> {
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    match LanguageCode::try_new(raw.as_str()) {
        Ok(code) => Ok(Some(code)),
        Err(error) => {
            warn!(language = %raw, %error, "ignoring invalid language code");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests;
