pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, CatalogConfig, SearchSettings, SortConfig};

pub(crate) mod field;
pub use field::{Field, FieldParseError, SortDirection};

pub(crate) mod language;
pub use language::{LanguageCode, LanguageCodeError, LanguageLabel, language_label};

pub(crate) mod listen;
pub use listen::{ListenKind, ListenLink, ListenLinkError};

pub(crate) mod record;
pub use record::Record;

pub(crate) mod release;
pub use release::{ReleaseAge, ReleaseDate};
