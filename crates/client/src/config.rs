//! Command-line configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Settings for one `force-builder` invocation.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub log_to_file: bool,
    pub session_id: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            log_to_file: false,
            session_id: None,
        }
    }
}

impl CliConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "./data";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FORCE_DATA_DIR` - Directory holding catalog, config and builds (default: ./data)
    /// - `FORCE_LOG_FILE` - Also write logs to a per-session file (default: false)
    /// - `FORCE_SESSION_ID` - Session identifier for the log directory (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("FORCE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(enable) = read_env::<bool>("FORCE_LOG_FILE") {
            config.log_to_file = enable;
        } else if env::var("FORCE_LOG_FILE").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.log_to_file = true;
        }

        config.session_id = env::var("FORCE_SESSION_ID").ok();

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
