use std::fs::OpenOptions;
use std::io::{stderr, Write};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static LOG_FILE: OnceLock<Mutex<std::fs::File>> = OnceLock::new();

const LOG_FILE_NAME: &str = "notepad-log.log";

/// Diagnostic line for the crate itself. Never routed to the editor window.
#[macro_export]
macro_rules! app_log {
    ($($arg:tt)*) => {{
        $crate::logger::log_line(format!($($arg)*));
    }};
}

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Mirror diagnostic lines into an append-only file in the temp directory.
/// Safe to call more than once; only the first successful call opens the file.
pub fn init_file_logger() {
    if LOG_FILE.get().is_some() {
        return;
    }

    let path = log_path();
    let file = OpenOptions::new().create(true).append(true).open(&path);

    if let Ok(file) = file {
        let _ = LOG_FILE.set(Mutex::new(file));
        log_line(format!("[logger] file logger ready: {}", path.display()));
    }
}

pub fn log_line(message: String) {
    let _ = writeln!(stderr(), "{message}");

    if let Some(lock) = LOG_FILE.get() {
        if let Ok(mut file) = lock.lock() {
            let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "{stamp} {message}");
        }
    }
}
