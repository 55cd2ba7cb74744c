//! File logging bootstrap.
//!
//! # Invariants
//! - Logging is initialized at most once per process.
//! - Initialization never panics; callers decide whether a failure matters.
//! - Re-initialization with a different directory or level is rejected.

use crate::infrastructure::config::normalize_log_level;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "anxlog";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Start rotating file logs under `log_dir` at `level`.
///
/// Calling again with the same arguments is a no-op.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), String> {
    let level = normalize_log_level(level).map_err(|e| e.to_string())?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        std::fs::create_dir_all(log_dir).map_err(|err| {
            format!(
                "failed to create log directory `{}`: {err}",
                log_dir.display()
            )
        })?;

        let logger = Logger::try_with_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::Direct)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        info!(
            "event=logging_init module=logging status=ok level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level,
            log_dir: log_dir.to_path_buf(),
            _logger: logger,
        })
    })?;

    if state.log_dir != log_dir {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }
    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Logging state is process-global, so all assertions live in one test.
    #[test]
    fn test_init_is_idempotent_and_rejects_changes() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("logs");

        assert!(init_logging("verbose", &dir).is_err());

        init_logging("debug", &dir).unwrap();
        init_logging("DEBUG", &dir).unwrap();
        assert!(dir.is_dir());

        let written: String = std::fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().starts_with(LOG_FILE_BASENAME))
                    .unwrap_or(false)
            })
            .map(|p| std::fs::read_to_string(p).unwrap())
            .collect();
        assert!(written.contains("event=logging_init module=logging status=ok level=debug"));

        assert!(init_logging("info", &dir).is_err());
        assert!(init_logging("debug", &temp.path().join("elsewhere")).is_err());
    }
}
