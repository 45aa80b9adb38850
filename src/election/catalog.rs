//! Position catalog persistence and first-run bootstrap

use crate::Result;
use crate::config::StorageConfig;
use crate::types::Catalog;
use std::path::PathBuf;

/// Loader for the persisted position catalog
///
/// Owns the catalog file exclusively. No update or delete operation is
/// exposed: within this crate the catalog is append-only-at-bootstrap, and
/// changes after that happen only through out-of-band edits to the file.
#[derive(Debug, Clone)]
pub struct PositionCatalog {
    path: PathBuf,
}

impl PositionCatalog {
    /// Create a loader for the catalog file named by the storage config
    pub fn open(storage: &StorageConfig) -> Self {
        Self {
            path: storage.catalog_path(),
        }
    }

    /// Load the persisted catalog, seeding the default set on first run
    ///
    /// If the file exists it is parsed and returned; a malformed file
    /// surfaces as a serialization error. If it does not exist, the fixed
    /// default catalog is persisted and returned, so a second call yields
    /// the same catalog from disk.
    pub fn load(&self) -> Result<Catalog> {
        if self.path.exists() {
            let raw = std::fs::read_to_string(&self.path)?;
            let catalog = serde_json::from_str(&raw)?;
            return Ok(catalog);
        }

        let catalog = Self::default_catalog();
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&catalog)?)?;
        tracing::info!(
            path = %self.path.display(),
            positions = catalog.len(),
            "seeded default position catalog"
        );
        Ok(catalog)
    }

    /// The fixed first-run catalog: 8 positions, 3 candidates each
    pub fn default_catalog() -> Catalog {
        let positions: &[(&str, [&str; 3])] = &[
            ("President", ["Alex Smith", "Jamie Johnson", "Taylor Brown"]),
            (
                "Vice President",
                ["Morgan Lee", "Casey Wilson", "Jordan Miller"],
            ),
            ("Secretary", ["Riley Davis", "Quinn Thomas", "Avery Martin"]),
            (
                "Treasurer",
                ["Sam Roberts", "Drew Anderson", "Sydney Clark"],
            ),
            (
                "Academic Officer",
                ["Charlie Robinson", "Skyler Adams", "Harper White"],
            ),
            (
                "Social Chair",
                ["Dakota Green", "Reese Murphy", "Parker Young"],
            ),
            (
                "Sports Representative",
                ["Jordan Hall", "Cameron Evans", "Taylor King"],
            ),
            (
                "Media Officer",
                ["Alex James", "Morgan Hayes", "Riley Carter"],
            ),
        ];

        positions
            .iter()
            .map(|(position, candidates)| {
                (
                    position.to_string(),
                    candidates.iter().map(|c| c.to_string()).collect(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = PositionCatalog::default_catalog();

        assert_eq!(catalog.len(), 8);
        for (_, candidates) in catalog.iter() {
            assert_eq!(candidates.len(), 3);
        }
        assert!(catalog.contains("President", "Alex Smith"));
        assert!(catalog.contains("Media Officer", "Riley Carter"));
    }
}
