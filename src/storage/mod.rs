mod types;

pub use types::{Catalog, CATALOG_VERSION};

use crate::scoring::Weights;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Default catalog file path (~/.config/boligscore/properties.json)
pub fn get_catalog_path() -> PathBuf {
    crate::config::get_config_dir().join("properties.json")
}

/// Default weights file path (~/.config/boligscore/weights.json)
pub fn get_weights_path() -> PathBuf {
    crate::config::get_config_dir().join("weights.json")
}

/// Load the property catalog from a JSON file.
///
/// If the file doesn't exist, returns a new empty catalog.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Ok(Catalog::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open catalog file at {}", path.display()))?;

    let catalog: Catalog = serde_json::from_reader(file).context("Failed to load catalog")?;

    if catalog.version != CATALOG_VERSION {
        anyhow::bail!("Unsupported catalog version: {}", catalog.version);
    }

    Ok(catalog)
}

/// Save the property catalog to a JSON file atomically.
///
/// Uses atomic-write-file so the file is never left in a corrupted state.
/// Creates the config directory if it doesn't exist.
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    crate::config::ensure_config_dir()?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, catalog).context("Failed to serialize catalog")?;

    file.commit().context("Failed to save catalog")?;

    Ok(())
}

/// Load the user's weight table. A missing file yields the default table.
pub fn load_weights(path: &Path) -> Result<Weights> {
    if !path.exists() {
        return Ok(Weights::default());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open weights file at {}", path.display()))?;

    let weights: Weights = serde_json::from_reader(file).context("Failed to load weights")?;

    Ok(weights)
}

/// Save the user's weight table atomically.
pub fn save_weights(path: &Path, weights: &Weights) -> Result<()> {
    crate::config::ensure_config_dir()?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, weights).context("Failed to serialize weights")?;

    file.commit().context("Failed to save weights")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::Property;
    use crate::scoring::Criterion;
    use std::env;
    use uuid::Uuid;

    #[test]
    fn test_load_missing_catalog_returns_empty() {
        let temp_path = env::temp_dir().join("boligscore_test_missing_catalog.json");
        let _ = std::fs::remove_file(&temp_path);

        let catalog = load_catalog(&temp_path).unwrap();
        assert_eq!(catalog.version, CATALOG_VERSION);
        assert!(catalog.properties.is_empty());
    }

    #[test]
    fn test_catalog_save_and_load_roundtrip() {
        let temp_path = env::temp_dir().join("boligscore_test_catalog_roundtrip.json");
        let _ = std::fs::remove_file(&temp_path);

        let mut catalog = Catalog::new();
        let mut property = Property::default();
        property.id = Uuid::new_v4();
        property.address = "Granveien 12".to_string();
        property.price = 4_500_000.0;
        property.area = 95.0;
        catalog.add(property.clone());

        save_catalog(&temp_path, &catalog).unwrap();
        let loaded = load_catalog(&temp_path).unwrap();

        assert_eq!(loaded.properties.len(), 1);
        assert_eq!(loaded.properties[0], property);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_unsupported_catalog_version_rejected() {
        let temp_path = env::temp_dir().join("boligscore_test_catalog_version.json");
        std::fs::write(&temp_path, r#"{"version": 99, "properties": []}"#).unwrap();

        let result = load_catalog(&temp_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("version"));

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_missing_weights_returns_defaults() {
        let temp_path = env::temp_dir().join("boligscore_test_missing_weights.json");
        let _ = std::fs::remove_file(&temp_path);

        let weights = load_weights(&temp_path).unwrap();
        assert_eq!(weights, Weights::default());
    }

    #[test]
    fn test_weights_save_and_load_roundtrip() {
        let temp_path = env::temp_dir().join("boligscore_test_weights_roundtrip.json");
        let _ = std::fs::remove_file(&temp_path);

        let mut weights = Weights::default();
        weights.set(Criterion::Garden, 12);
        weights.set(Criterion::Age, 0);

        save_weights(&temp_path, &weights).unwrap();
        let loaded = load_weights(&temp_path).unwrap();

        assert_eq!(loaded, weights);

        let _ = std::fs::remove_file(&temp_path);
    }
}
