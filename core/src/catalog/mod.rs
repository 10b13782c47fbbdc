//! Song catalog loading.
//!
//! Sources:
//! - A directory of per-artist YAML files. Each file holds a list of songs and
//!   the file stem is the artist name (a song may still override `artist`).
//! - The flattened `search.json` array produced by [`Catalog::to_json`].
//!
//! The catalog is loaded once per session and never mutated afterwards.

mod error;
mod index;

pub use error::CatalogError;
pub use index::{CountIndex, SuggestionSources};

use crate::types::Record;
use serde_yaml::{Mapping, Value as YamlValue};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
}

/// Create operations.
impl Catalog {
    pub fn from_records(records: Vec<Record>) -> Self {
        let records = records
            .into_iter()
            .map(|mut record| {
                record.normalize_tags();
                record
            })
            .collect();
        Self { records }
    }

    /// Loads every `*.yml` / `*.yaml` file in `dir`, in file name order.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let entries = std::fs::read_dir(dir).map_err(|source| CatalogError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| CatalogError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?
                .path();
            if is_song_file(&path) {
                files.push(path);
            }
        }
        files.sort();

        let mut records = Vec::new();
        for path in &files {
            let songs = load_artist_file(path)?;
            debug!(path = %path.display(), songs = songs.len(), "loaded artist file");
            records.extend(songs);
        }

        info!(
            dir = %dir.display(),
            files = files.len(),
            records = records.len(),
            "catalog loaded"
        );
        Ok(Self::from_records(records))
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    pub fn load_json(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), records = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

/// Read operations.
impl Catalog {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serializes the flattened record list (`search.json`).
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    pub fn count_index(&self) -> CountIndex {
        CountIndex::from_records(&self.records)
    }

    pub fn suggestion_sources(&self) -> SuggestionSources {
        SuggestionSources::from_records(&self.records)
    }

    /// Songs per lowercase country code, sorted by code.
    pub fn nationality_counts(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for nationality in self.records.iter().filter_map(|r| r.nationality.as_deref()) {
            let code = nationality.trim().to_lowercase();
            if code.is_empty() {
                continue;
            }
            *counts.entry(code).or_insert(0) += 1;
        }
        counts.into_iter().collect()
    }
}

fn is_song_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "yml" || ext == "yaml")
}

fn load_artist_file(path: &Path) -> Result<Vec<Record>, CatalogError> {
    let io_error = |source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    };
    let yaml_error = |source| CatalogError::Yaml {
        path: path.to_path_buf(),
        source,
    };

    let artist = artist_name(path);
    let content = std::fs::read_to_string(path).map_err(io_error)?;
    let songs: Option<Vec<Mapping>> = serde_yaml::from_str(&content).map_err(yaml_error)?;

    songs
        .unwrap_or_default()
        .into_iter()
        .map(|mut song| {
            let artist_key = YamlValue::String("artist".to_string());
            if !song.contains_key(&artist_key) {
                song.insert(artist_key, YamlValue::String(artist.clone()));
            }
            serde_yaml::from_value::<Record>(YamlValue::Mapping(song)).map_err(yaml_error)
        })
        .collect()
}

fn artist_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests;
