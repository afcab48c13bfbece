//! Append-only run log.
//!
//! Each run of the tool appends to
//! `~/.config/headless-monitor/logs/headless-monitor.log`, starting with a
//! header line. An oversized log is moved to `headless-monitor.log.1` when
//! the logger starts, so a single run is never split across two files.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Logger> = OnceLock::new();

const LOG_FILE_NAME: &str = "headless-monitor.log";
const BACKUP_FILE_NAME: &str = "headless-monitor.log.1";

/// `[logging]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Off by default; the console output is the primary report.
    pub enabled: bool,
    /// Minimum level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Size in megabytes above which the log is moved aside at startup.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Unknown names fall back to `Info`.
    fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

struct Logger {
    file: File,
    min_level: Level,
}

/// Returns the log directory: `~/.config/headless-monitor/logs/`.
pub fn log_dir() -> Option<PathBuf> {
    crate::config::config_dir().map(|d| d.join("logs"))
}

/// Starts file logging for this run.
///
/// Does nothing if logging is disabled or the file cannot be opened; a
/// broken log never stops the monitor from being configured.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = log_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }

    let _ = rotate_if_oversized(&dir, config.max_file_mb * 1024 * 1024);
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
    else {
        return;
    };

    let _ = (&file).write_all(session_header(&timestamp()).as_bytes());
    let _ = LOGGER.set(Logger {
        file,
        min_level: Level::parse(&config.level),
    });
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(logger) = LOGGER.get() else {
        return;
    };
    if level < logger.min_level {
        return;
    }
    let line = format_line(&timestamp(), level, args);
    let _ = (&logger.file).write_all(line.as_bytes());
}

/// Moves the log in `dir` to its backup name if it exceeds `max_bytes`.
///
/// Returns `true` if the file was moved. An existing backup is replaced.
fn rotate_if_oversized(dir: &Path, max_bytes: u64) -> io::Result<bool> {
    let current = dir.join(LOG_FILE_NAME);
    let len = match fs::metadata(&current) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= max_bytes {
        return Ok(false);
    }
    fs::rename(&current, dir.join(BACKUP_FILE_NAME))?;
    Ok(true)
}

fn session_header(time: &str) -> String {
    format!(
        "{time} ---- headless-monitor v{} (pid {}) ----\n",
        env!("CARGO_PKG_VERSION"),
        std::process::id()
    )
}

fn format_line(time: &str, level: Level, args: fmt::Arguments<'_>) -> String {
    format!("{time} [{lvl}] {args}\n", lvl = level.as_str())
}

fn timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format_utc(secs)
}

/// Formats seconds since the Unix epoch as `YYYY-MM-DD HH:MM:SS` (UTC).
fn format_utc(secs: u64) -> String {
    let (days, rem) = (secs / 86_400, secs % 86_400);
    let (h, m, s) = (rem / 3600, rem / 60 % 60, rem % 60);

    // Days-to-civil conversion over 400-year eras, with March as month 0.
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z % 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = era * 400 + yoe + u64::from(month <= 2);

    format!("{year:04}-{month:02}-{day:02} {h:02}:{m:02}:{s:02}")
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}
