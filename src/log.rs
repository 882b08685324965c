// Author: Dustin Pilgrim
// License: MIT

use std::fmt::Arguments;
use std::fs::{OpenOptions, create_dir_all, metadata, remove_file};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

use chrono::Local;
use once_cell::sync::Lazy;

/// Log file is dropped and restarted past this size (10 MB).
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum LogLevel {
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl LogLevel {
    fn color(self) -> &'static str {
        match self {
            LogLevel::Error => "\x1b[31m",
            LogLevel::Warn => "\x1b[33m",
            LogLevel::Info => "\x1b[36m",
            LogLevel::Debug => "\x1b[90m",
        }
    }

    fn short(self) -> &'static str {
        match self {
            LogLevel::Error => "ERR",
            LogLevel::Warn => "WRN",
            LogLevel::Info => "INF",
            LogLevel::Debug => "DBG",
        }
    }
}

const RESET_COLOR: &str = "\x1b[0m";

pub struct Config {
    pub level: LogLevel,
    pub use_colors: bool,
    /// Only the daemon writes the log file; client commands and tests don't.
    pub file_output: bool,
}

pub static GLOBAL_CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| {
    Mutex::new(Config {
        level: LogLevel::Info,
        use_colors: std::io::stdout().is_terminal(),
        file_output: false,
    })
});

static SESSION_SEPARATOR: Once = Once::new();

fn config() -> std::sync::MutexGuard<'static, Config> {
    GLOBAL_CONFIG.lock().unwrap_or_else(|e| e.into_inner())
}

/// Debug level, and echo everything to the console.
pub fn set_verbose(enabled: bool) {
    config().level = if enabled { LogLevel::Debug } else { LogLevel::Info };
}

pub fn enable_file_output() {
    config().file_output = true;
}

pub fn log_message(level: LogLevel, prefix: &str, args: Arguments) {
    let cfg = config();

    if level > cfg.level {
        return;
    }

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let file_line = format!("[{}][{}][{}] {}", timestamp, level.short(), prefix, args);

    let console_line = if cfg.use_colors {
        format!("{}●{} [{}][{}] {}", level.color(), RESET_COLOR, timestamp, prefix, args)
    } else {
        file_line.clone()
    };

    if cfg.file_output {
        if let Err(e) = write_line_to_log(&file_line) {
            eprintln!("Failed to write log: {}", e);
        }
    }

    if cfg.level == LogLevel::Debug || level <= LogLevel::Warn {
        match level {
            LogLevel::Error | LogLevel::Warn => eprintln!("{}", console_line),
            _ => println!("{}", console_line),
        }
    }
}

#[macro_export]
macro_rules! slog {
    ($level:expr, $prefix:expr, $($arg:tt)*) => {
        $crate::log::log_message($level, $prefix, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! sinfo {
    ($prefix:expr, $($arg:tt)*) => { $crate::slog!($crate::log::LogLevel::Info, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! swarn {
    ($prefix:expr, $($arg:tt)*) => { $crate::slog!($crate::log::LogLevel::Warn, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! serror {
    ($prefix:expr, $($arg:tt)*) => { $crate::slog!($crate::log::LogLevel::Error, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! sdebug {
    ($prefix:expr, $($arg:tt)*) => { $crate::slog!($crate::log::LogLevel::Debug, $prefix, $($arg)*) };
}

/// `~/.cache/spellwatch/spellwatch.log`
pub fn log_path() -> PathBuf {
    let mut path = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    path.push("spellwatch");
    if !path.exists() {
        let _ = create_dir_all(&path);
    }
    path.push("spellwatch.log");
    path
}

fn rotate_log_if_needed(path: &Path) {
    if let Ok(meta) = metadata(path) {
        if meta.len() >= MAX_LOG_SIZE {
            let _ = remove_file(path);
        }
    }
}

/// Blank line between daemon runs.
fn ensure_session_newline_once(path: &Path) {
    SESSION_SEPARATOR.call_once(|| {
        if let Ok(meta) = metadata(path) {
            if meta.len() > 0 {
                if let Ok(mut file) = OpenOptions::new().append(true).open(path) {
                    let _ = writeln!(file);
                }
            }
        }
    });
}

fn write_line_to_log(line: &str) -> std::io::Result<()> {
    let path = log_path();
    rotate_log_if_needed(&path);
    ensure_session_newline_once(&path);

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}
