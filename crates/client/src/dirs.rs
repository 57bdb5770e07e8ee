//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific log directory for force-builder
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/force-builder/logs`
/// - Linux: `~/.cache/force-builder/logs` (or `$XDG_CACHE_HOME/force-builder/logs`)
/// - Windows: `%LOCALAPPDATA%\force-builder\logs`
/// - Fallback: `/tmp/force-builder/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "force-builder")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/force-builder"));

    base_dir.join("logs")
}
