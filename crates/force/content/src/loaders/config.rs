//! Roster defaults loader.

use std::path::Path;

use force_core::RosterConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for roster configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys left out of the file keep their [`RosterConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<RosterConfig> {
        let content = read_file(path)?;
        let config: RosterConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "default_points_limit = 500\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.default_points_limit, 500);
        assert_eq!(config.min_points_limit, RosterConfig::MIN_POINTS_LIMIT);
        assert_eq!(config.default_faction.as_str(), RosterConfig::DEFAULT_FACTION);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "default_points_limit = \"lots\"\n").unwrap();

        let error = ConfigLoader::load(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to parse config TOML"));
    }
}
