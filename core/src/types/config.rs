pub(crate) mod app;
pub use app::{AppConfig, AppConfigError, CatalogConfig, SearchSettings, SortConfig};
