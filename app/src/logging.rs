//! FILENAME: app/src/logging.rs
// PURPOSE: Unified logging system for the application.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use once_cell::sync::Lazy;

// ============================================================================
// UNIFIED LOGGING SYSTEM
// ============================================================================

const DEFAULT_LOG_FILE: &str = "apura.log";

/// Global sequence counter so interleaved lines keep a stable order.
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Global log file handle.
pub static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Get next sequence number.
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Initialize the log file. With no explicit path the log lands next to
/// the working directory as `apura.log`.
pub fn init_log_file(path: Option<&Path>) -> Result<PathBuf, String> {
    let log_path = match path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(DEFAULT_LOG_FILE),
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| format!("Failed to open log file {:?}: {}", log_path, e))?;

    let mut log_file = LOG_FILE
        .lock()
        .map_err(|e| format!("Lock error: {}", e))?;
    *log_file = Some(file);

    Ok(log_path)
}

/// Write a log line in unified format. Lines always reach stderr; the log
/// file is written too once initialized.
pub fn write_log(level: &str, category: &str, message: &str) {
    let seq = next_seq();
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let line = format!("{}|{}|{}|{}|{}", seq, timestamp, level, category, message);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            if let Err(e) = writeln!(file, "{}", line) {
                eprintln!("[LOG_ERROR] Failed to write: {}", e);
            }
            let _ = file.flush();
        }
    }

    eprintln!("{}", line);
}

// ============================================================================
// MACRO DEFINITIONS & EXPORTS
// ============================================================================

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("D", $cat, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("I", $cat, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("W", $cat, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("E", $cat, &format!($($arg)*))
    };
}

pub use log_debug;
pub use log_error;
pub use log_info;
pub use log_warn;
