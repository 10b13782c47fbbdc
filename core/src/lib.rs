pub mod catalog;
pub mod types;

pub use catalog::{Catalog, CatalogError, CountIndex, SuggestionSources};
pub use types::{Field, LanguageCode, Record, ReleaseDate, SortDirection};
