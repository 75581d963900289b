//! Logging bootstrap and safety policy for the core crate.
//!
//! # Responsibility
//! - Initialize rolling file logs exactly once per process.
//! - Capture panics as sanitized, metadata-only log events.
//!
//! # Invariants
//! - Initialization is idempotent for an identical configuration.
//! - Reconfiguration with a different level or directory is rejected.
//! - No path through this module panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "meditrack";
const ROTATE_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_FILES: usize = 5;
const PANIC_PAYLOAD_CAP: usize = 160;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogging {
    level: &'static str,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Initializes core logging.
///
/// `level` is one of `trace|debug|info|warn|error` (case-insensitive) and
/// `log_dir` must be an absolute directory path.
///
/// # Contract
/// - Repeat calls with the same configuration succeed (idempotent).
/// - Calls that would change the level or directory return an error.
/// - Never panics; failures come back as human-readable strings.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = canonical_level(level)?;
    let dir = canonical_dir(log_dir)?;

    let state = ACTIVE.get_or_try_init(|| start_logger(level, dir.clone()))?;

    if state.dir != dir {
        return Err(format!(
            "logging already writes to `{}`; refusing to switch to `{}`",
            state.dir.display(),
            dir.display()
        ));
    }
    if state.level != level {
        return Err(format!(
            "logging already active at level `{}`; refusing to switch to `{}`",
            state.level, level
        ));
    }
    Ok(())
}

/// Returns `(level, log_dir)` when logging is active, `None` otherwise.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE.get().map(|state| (state.level, state.dir.clone()))
}

/// Default log level for the current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: &'static str, dir: PathBuf) -> Result<ActiveLogging, String> {
    std::fs::create_dir_all(&dir).map_err(|err| {
        format!("failed to create log directory `{}`: {err}", dir.display())
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(FileSpec::default().directory(dir.as_path()).basename(LOG_BASENAME))
        .rotate(
            Criterion::Size(ROTATE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        // detailed_format carries timestamp + source location so log lines
        // stay parseable as `[timestamp] LEVEL [module] file:line: message`.
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook();

    info!(
        "event=app_start module=core status=ok platform={} build_mode={} version={}",
        std::env::consts::OS,
        build_mode(),
        env!("CARGO_PKG_VERSION")
    );
    info!(
        "event=core_init module=core status=ok level={} log_dir={}",
        level,
        dir.display()
    );

    Ok(ActiveLogging {
        level,
        dir,
        _handle: handle,
    })
}

fn canonical_level(raw: &str) -> Result<&'static str, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn canonical_dir(raw: &str) -> Result<PathBuf, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn build_mode() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Panic payloads can include user-entered text; cap and strip
        // newlines before the payload reaches the log file.
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            panic_summary(panic_info)
        );
        previous_hook(panic_info);
    }));
}

fn panic_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };
    sanitize(&payload, PANIC_PAYLOAD_CAP)
}

fn sanitize(value: &str, cap: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut clipped = flattened.chars().take(cap).collect::<String>();
    if flattened.chars().count() > cap {
        clipped.push_str("...");
    }
    clipped
}
