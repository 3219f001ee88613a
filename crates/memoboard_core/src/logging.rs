//! Logging bootstrap for memo board processes.
//!
//! # Responsibility
//! - Start the rolling file logger once per process.
//! - Capture panics into the log with a sanitized payload.
//!
//! # Invariants
//! - Initialization never panics.
//! - Re-initialization is accepted only with identical level and directory.
//! - Log lines carry metadata (`event=... module=... status=...`), never memo
//!   content.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const LOG_FILE_BASENAME: &str = "memoboard";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: LogLevel,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Supported log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(LoggingError::UnsupportedLevel(other.to_string())),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging bootstrap failures.
#[derive(Debug)]
pub enum LoggingError {
    UnsupportedLevel(String),
    RelativeLogDir(PathBuf),
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    Backend(flexi_logger::FlexiLoggerError),
    /// Logging is already running with a different configuration.
    Conflict {
        active: String,
        requested: String,
    },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(value) => write!(
                f,
                "unsupported log level `{value}`; expected trace|debug|info|warn|error"
            ),
            Self::RelativeLogDir(path) => write!(
                f,
                "log_dir must be an absolute path, got `{}`",
                path.display()
            ),
            Self::CreateDir { path, source } => write!(
                f,
                "failed to create log directory `{}`: {source}",
                path.display()
            ),
            Self::Backend(err) => write!(f, "failed to start logger: {err}"),
            Self::Conflict { active, requested } => write!(
                f,
                "logging already initialized with {active}; refusing to switch to {requested}"
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

/// Starts file logging under `log_dir` at `level`.
///
/// # Errors
/// - `log_dir` is relative or cannot be created.
/// - Logging already runs with another level or directory.
/// - The flexi_logger backend fails to start.
pub fn init_logging(level: LogLevel, log_dir: &Path) -> Result<(), LoggingError> {
    if !log_dir.is_absolute() {
        return Err(LoggingError::RelativeLogDir(log_dir.to_path_buf()));
    }

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, log_dir))?;

    if state.log_dir != log_dir {
        return Err(LoggingError::Conflict {
            active: format!("directory `{}`", state.log_dir.display()),
            requested: format!("`{}`", log_dir.display()),
        });
    }
    if state.level != level {
        return Err(LoggingError::Conflict {
            active: format!("level `{}`", state.level),
            requested: format!("`{level}`"),
        });
    }
    Ok(())
}

fn start_logger(level: LogLevel, log_dir: &Path) -> Result<LoggingState, LoggingError> {
    std::fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let logger = Logger::try_with_str(level.as_str())
        .map_err(LoggingError::Backend)?
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
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(LoggingError::Backend)?;

    install_panic_hook_once();

    info!(
        "event=app_start module=core status=ok platform={} build_mode={} version={}",
        std::env::consts::OS,
        build_mode(),
        env!("CARGO_PKG_VERSION")
    );
    info!(
        "event=logging_init module=core status=ok level={} log_dir={}",
        level,
        log_dir.display()
    );

    Ok(LoggingState {
        level,
        log_dir: log_dir.to_path_buf(),
        _logger: logger,
    })
}

/// Returns `(level, log_dir)` of the active logger, if any.
pub fn logging_status() -> Option<(LogLevel, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> LogLevel {
    if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

fn build_mode() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_payload_summary(panic_info);
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location, payload
        );
        previous_hook(panic_info);
    }));
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

/// Flattens newlines and caps length so one log record stays one line.
fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, sanitize_message, LogLevel, LoggingError};
    use std::path::Path;

    #[test]
    fn log_level_parses_aliases_and_rejects_unknown() {
        assert_eq!(" INFO ".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!(matches!(
            "verbose".parse::<LogLevel>(),
            Err(LoggingError::UnsupportedLevel(_))
        ));
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let err = init_logging(LogLevel::Info, Path::new("logs/dev")).unwrap_err();
        assert!(matches!(err, LoggingError::RelativeLogDir(_)));
    }

    #[test]
    fn sanitize_message_flattens_and_truncates() {
        let sanitized = sanitize_message("line1\nline2\rline3", 8);
        assert!(!sanitized.contains('\n'));
        assert!(!sanitized.contains('\r'));
        assert!(sanitized.ends_with("..."));
    }

    #[test]
    fn init_is_idempotent_and_rejects_conflicts() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();

        init_logging(LogLevel::Info, first.path()).expect("first init should succeed");
        init_logging(LogLevel::Info, first.path()).expect("same config should be idempotent");

        let level_err = init_logging(LogLevel::Debug, first.path()).unwrap_err();
        assert!(level_err.to_string().contains("refusing to switch"));
        let dir_err = init_logging(LogLevel::Info, second.path()).unwrap_err();
        assert!(dir_err.to_string().contains("refusing to switch"));

        let (level, dir) = logging_status().expect("logging should be active");
        assert_eq!(level, LogLevel::Info);
        assert_eq!(dir, first.path());
    }
}
