//! Logging setup for quotefix

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Log file path in `dir`, unique per working directory, PID and timestamp
pub fn get_log_file_path(dir: &Path) -> Result<PathBuf, BoxError> {
    let current_dir = std::env::current_dir()?;
    let folder_name = current_dir
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("unknown"))
        .to_string_lossy();

    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let pid = std::process::id();

    std::fs::create_dir_all(dir)?;

    Ok(dir.join(format!("{folder_name}_{pid}_{timestamp}.log")))
}

/// Create log file with proper options
pub fn create_log_file(dir: &Path) -> Result<std::fs::File, BoxError> {
    let log_path = get_log_file_path(dir)?;

    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    eprintln!("Log file created: {}", log_path.display());

    Ok(log_file)
}

/// Install the global subscriber.
///
/// Console output goes to stderr, filtered by `RUST_LOG` (default `info`),
/// so stdout stays free for the JSON report. With `log_dir`, a second layer
/// writes everything at `debug` to a file.
pub fn init(log_dir: Option<&Path>) -> Result<(), BoxError> {
    let file_layer = match log_dir {
        Some(dir) => Some(
            fmt::layer()
                .with_writer(create_log_file(dir)?)
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_filter(EnvFilter::new("debug")),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                ),
        )
        .with(file_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_shape() {
        let dir = std::env::temp_dir().join("quotefix-log-test");
        let path = get_log_file_path(&dir).unwrap();

        assert_eq!(path.parent(), Some(dir.as_path()));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with(".log"));
        assert!(name.contains(&format!("_{}_", std::process::id())));
    }
}
