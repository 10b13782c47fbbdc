use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Release date exactly as written in the catalog.
///
/// The raw text is what the `release:` criterion fuzzy-matches against, so it
/// is never normalized. Parsing to a calendar date happens on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReleaseDate(String);

/// Catalog files may leave a bare year unquoted.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRelease {
    Text(String),
    Year(i64),
}

impl<'de> Deserialize<'de> for ReleaseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawRelease::deserialize(deserializer)? {
            RawRelease::Text(raw) => Self(raw),
            RawRelease::Year(year) => Self(year.to_string()),
        })
    }
}

impl ReleaseDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses `YYYY-MM-DD`, `YYYY-MM` (first of month) or `YYYY` (January 1st).
    pub fn date(&self) -> Option<NaiveDate> {
        let raw = self.0.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }

        let is_number = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        let parts: Vec<&str> = raw.split('-').collect();
        match parts.as_slice() {
            [year] if year.len() == 4 && is_number(year) => {
                NaiveDate::from_ymd_opt(year.parse().ok()?, 1, 1)
            }
            [year, month] if year.len() == 4 && is_number(year) && is_number(month) => {
                NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
            }
            _ => None,
        }
    }

    /// Time elapsed between the release and `today`.
    pub fn age_on(&self, today: NaiveDate) -> Option<ReleaseAge> {
        let date = self.date()?;
        Some(ReleaseAge {
            days: (today - date).num_days(),
        })
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReleaseDate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseAge {
    pub days: i64,
}

impl ReleaseAge {
    pub fn years(&self) -> f64 {
        self.days as f64 / 365.25
    }

    /// Tooltip text: `"<days> days ago\n(<years> years ago)"`.
    pub fn describe(&self) -> String {
        format!("{} days ago\n({:.2} years ago)", self.days, self.years())
    }
}

#[cfg(test)]
mod tests;
