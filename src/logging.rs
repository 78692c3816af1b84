//! Log file setup
//!
//! Every line carries a timestamp and level. `RUST_LOG` overrides the
//! default filter.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "arcadm=debug";

/// Where log lines end up
#[derive(Debug)]
pub enum LogTarget {
    File(File),
    /// The log file couldn't be opened; keeps the reason for the warning
    Stderr(io::Error),
}

impl LogTarget {
    /// Open `log_file` for appending, or fall back to stderr.
    pub fn open(log_file: &Path) -> Self {
        match OpenOptions::new().create(true).append(true).open(log_file) {
            Ok(file) => LogTarget::File(file),
            Err(e) => LogTarget::Stderr(e),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, appending to `log_file`.
pub fn init_logging(log_file: &Path) {
    match LogTarget::open(log_file) {
        LogTarget::File(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        LogTarget::Stderr(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .init();
            tracing::warn!(
                "Could not open log file {}: {}, logging to stderr",
                log_file.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_file_is_appended() {
        let path = std::env::temp_dir().join(format!("arcadm-log-{}.log", std::process::id()));
        std::fs::write(&path, "first\n").unwrap();

        match LogTarget::open(&path) {
            LogTarget::File(mut file) => writeln!(file, "second").unwrap(),
            LogTarget::Stderr(e) => panic!("expected log file, got {}", e),
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_unopenable_log_file_falls_back_to_stderr() {
        // A directory can't be opened as a log file
        let dir = std::env::temp_dir();
        assert!(matches!(LogTarget::open(&dir), LogTarget::Stderr(_)));

        let missing_parent = Path::new("/nonexistent/arcadm/desktop_env.log");
        assert!(matches!(LogTarget::open(missing_parent), LogTarget::Stderr(_)));
    }
}
