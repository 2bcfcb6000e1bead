use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

use super::formatter::bracketed_layer;

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(if verbose { "debug" } else { "info" })
}

/// Timestamped log file name, e.g. `reorganize_20240101_120000.log`
pub fn log_file_name(now: chrono::DateTime<chrono::Local>) -> String {
    format!("reorganize_{}.log", now.format("%Y%m%d_%H%M%S"))
}

/// Install the global subscriber. Logs always go to stdout; when `log_dir` is
/// given they are also written to a new timestamped file there, whose path is
/// returned.
pub fn setup_logging(verbose: bool, log_dir: Option<&Path>) -> io::Result<Option<PathBuf>> {
    let (file_layer, log_path) = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let log_path = dir.join(log_file_name(chrono::Local::now()));
            let file = fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&log_path)?;

            (
                Some(bracketed_layer(std::sync::Mutex::new(file))),
                Some(log_path),
            )
        }
        None => (None, None),
    };

    let stdout_layer = bracketed_layer(io::stdout);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose)))
        .with(file_layer)
        .with(stdout_layer)
        .init();

    if let Some(path) = &log_path {
        info!("Log file created at: {:?}", path);
    }

    Ok(log_path)
}
