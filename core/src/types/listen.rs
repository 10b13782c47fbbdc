//! Listening links attached to a song.
//!
//! In catalog files each link is a single-entry map such as `{ORG: <url>}` or
//! `{"RX(Slowed)": <url>}`. The key is kept verbatim so links survive a
//! YAML → JSON export unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct ListenLink {
    pub key: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenKind {
    Original,
    /// `RX` or `RX(<label>)`.
    Remix(Option<String>),
    Nightcore,
    Other(String),
}

#[derive(Debug, Error)]
pub enum ListenLinkError {
    #[error("listen entry must have exactly one key, found {0}")]
    EntryCount(usize),
}

impl ListenLink {
    pub fn new(key: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            url: url.into(),
        }
    }

    pub fn kind(&self) -> ListenKind {
        let key = self.key.trim();
        if key == "ORG" {
            return ListenKind::Original;
        }
        if key == "NCR" {
            return ListenKind::Nightcore;
        }
        if key.starts_with("RX") {
            let label = key
                .find('(')
                .zip(key.rfind(')'))
                .filter(|(open, close)| open < close)
                .map(|(open, close)| key[open + 1..close].to_string());
            return ListenKind::Remix(label);
        }
        ListenKind::Other(key.to_string())
    }

    /// Hover text for the link, if its kind is known.
    pub fn description(&self) -> Option<String> {
        match self.kind() {
            ListenKind::Original => Some("Listen to the original song".to_string()),
            ListenKind::Remix(None) => Some("Listen to the remix version".to_string()),
            ListenKind::Remix(Some(label)) => {
                Some(format!("Listen to the remix version ({label})"))
            }
            ListenKind::Nightcore => Some("Listen to the nightcore version".to_string()),
            ListenKind::Other(_) => None,
        }
    }
}

impl TryFrom<BTreeMap<String, String>> for ListenLink {
    type Error = ListenLinkError;

    fn try_from(entry: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        if entry.len() != 1 {
            return Err(ListenLinkError::EntryCount(entry.len()));
        }
        let (key, url) = entry
            .into_iter()
            .next()
            .ok_or(ListenLinkError::EntryCount(0))?;
        Ok(Self { key, url })
    }
}

impl From<ListenLink> for BTreeMap<String, String> {
    fn from(link: ListenLink) -> Self {
        BTreeMap::from([(link.key, link.url)])
    }
}
