use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::catalog::Catalog;

use super::{CatalogStore, Result};

/// Catalog file name used when the user does not pass `--file`. Kept from
/// the original tool so existing catalogs are picked up unchanged.
pub const DEFAULT_CATALOG_FILE: &str = "tarjetas.json";

const TMP_SUFFIX: &str = "tmp";

/// File-backed catalog store holding one pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn new_default() -> Self {
        Self::new(DEFAULT_CATALOG_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonCatalog {
    fn load_or_init(&self) -> Result<Catalog> {
        if !self.path.exists() {
            let catalog = Catalog::new();
            write_catalog(&self.path, &catalog)?;
            tracing::info!(path = %self.path.display(), "initialized empty catalog");
            return Ok(catalog);
        }

        let data = fs::read_to_string(&self.path)?;
        let catalog: Catalog = serde_json::from_str(&data)?;
        tracing::debug!(
            path = %self.path.display(),
            debit = catalog.debit.len(),
            credit = catalog.credit.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn save(&self, catalog: &Catalog) -> Result<()> {
        write_catalog(&self.path, catalog)?;
        tracing::debug!(path = %self.path.display(), "saved catalog");
        Ok(())
    }
}

/// Writes the catalog atomically by staging to a temporary sibling file.
fn write_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(catalog)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DebitCard;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonCatalog, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonCatalog::new(temp.path().join("tarjetas.json"));
        (store, temp)
    }

    #[test]
    fn first_load_creates_an_empty_catalog_file() {
        let (store, _guard) = store_with_temp_dir();
        let catalog = store.load_or_init().expect("load catalog");
        assert!(catalog.is_empty());
        assert!(store.path().exists());

        let raw = fs::read_to_string(store.path()).expect("read file");
        assert!(raw.contains("\"debito\""));
        assert!(raw.contains("\"credito\""));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (store, _guard) = store_with_temp_dir();
        let mut catalog = store.load_or_init().expect("load catalog");
        catalog.add_debit(DebitCard {
            yield_rate: 0.05,
            ..DebitCard::new("Nomina", "BBVA")
        });
        store.save(&catalog).expect("save catalog");

        let loaded = store.load_or_init().expect("reload catalog");
        assert_eq!(loaded.debit.len(), 1);
        assert_eq!(loaded.debit[0].name, "Nomina");
        assert_eq!(loaded.debit[0].yield_rate, 0.05);
    }

    #[test]
    fn malformed_catalog_surfaces_a_decode_error() {
        let (store, _guard) = store_with_temp_dir();
        fs::write(store.path(), "{not json").expect("write garbage");
        assert!(store.load_or_init().is_err());
    }
}
