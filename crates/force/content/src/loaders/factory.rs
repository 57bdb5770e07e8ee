//! Content factory for loading everything a session needs from a data directory.

use std::path::{Path, PathBuf};

use force_core::{Catalog, RosterConfig};

use crate::loaders::{BuildScript, CatalogLoader, ConfigLoader, LoadResult, ScriptLoader};

/// Content factory that loads all force data from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── catalog.ron
/// ├── config.toml
/// └── builds/
///     └── sample.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load and index the catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        CatalogLoader::load(&self.data_dir.join("catalog.ron"))
    }

    /// Load roster defaults from `config.toml`, falling back to the built-in
    /// defaults when the file does not exist.
    pub fn load_config(&self) -> LoadResult<RosterConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(RosterConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a build script from `builds/{name}.ron`.
    pub fn load_build(&self, name: &str) -> LoadResult<BuildScript> {
        ScriptLoader::load(&self.build_path(name))
    }

    /// Names of the bundled build scripts, sorted.
    pub fn build_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.data_dir.join("builds");
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;
        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron")
                && let Some(stem) = path.file_stem()
            {
                names.push(stem.to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn build_path(&self, name: &str) -> PathBuf {
        self.data_dir.join("builds").join(format!("{}.ron", name))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
