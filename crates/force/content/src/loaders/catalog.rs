//! Faction catalog loader.

use std::path::Path;

use force_core::{CannonType, Catalog, CatalogOracle, FactionDef};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub cannon_types: Vec<CannonType>,
    pub factions: Vec<FactionDef>,
}

impl CatalogFile {
    /// Indexes the parsed data into a lookup-ready [`Catalog`].
    pub fn into_catalog(self) -> LoadResult<Catalog> {
        Catalog::new(self.factions, self.cannon_types)
            .map_err(|e| anyhow::anyhow!("Invalid catalog: {}", e))
    }
}

/// Loader for the faction catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and index a catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a [`CatalogFile`]
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        let catalog = Self::parse(&content)?;
        tracing::info!(
            path = %path.display(),
            factions = catalog.factions().len(),
            cannon_types = catalog.cannon_types().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse and index a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;
        file.into_catalog()
    }
}
