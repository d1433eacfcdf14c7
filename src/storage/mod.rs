pub mod json_backend;

use crate::{catalog::Catalog, errors::FinmexError};

pub type Result<T> = std::result::Result<T, FinmexError>;

/// Abstraction over persistence backends capable of storing the card catalog.
pub trait CatalogStore {
    /// Loads the catalog, creating an empty persisted one on first use.
    fn load_or_init(&self) -> Result<Catalog>;

    /// Persists the whole catalog, replacing whatever was stored before.
    fn save(&self, catalog: &Catalog) -> Result<()>;
}

pub use json_backend::{JsonCatalog, DEFAULT_CATALOG_FILE};
