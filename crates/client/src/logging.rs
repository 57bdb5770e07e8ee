//! Tracing subscriber setup.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::dirs;

/// Installs the global subscriber.
///
/// Logs always go to stderr so stdout stays clean for rosters and JSON. When
/// file logging is enabled, a copy goes to `<log dir>/<session>/force-builder.log`;
/// the returned guard must stay alive until exit to flush it.
pub fn setup_logging(config: &CliConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if !config.log_to_file {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    }

    let session_id = config.session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let session_log_dir = dirs::log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "force-builder.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!(session = %session_id, "logging initialized");
    tracing::info!("Log file: {}/force-builder.log", session_log_dir.display());

    Ok(Some(guard))
}
