//! File logging for the demo host.
//!
//! Nothing is written until [`init`] (or [`init_in`]) has opened a log file,
//! so library users and tests get a silent no-op.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::Result;

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Default log directory, `~/.carousel/logs`
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".carousel")
        .join("logs")
}

/// Start logging to a fresh timestamped file in [`log_dir`].
pub fn init() -> Result<PathBuf> {
    init_in(&log_dir())
}

pub fn init_in(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("carousel_{}.log", stamp));
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    if let Ok(mut slot) = LOG_FILE.lock() {
        *slot = Some(file);
    }
    log("=== carousel started ===");

    Ok(path)
}

fn write_line(line: &str) {
    let Ok(mut slot) = LOG_FILE.lock() else {
        return;
    };
    if let Some(file) = slot.as_mut() {
        let _ = writeln!(file, "[{}] {}", Local::now().format("%H:%M:%S%.3f"), line);
        let _ = file.flush();
    }
}

pub fn log(msg: &str) {
    write_line(msg);
}

pub fn log_event(event: &str) {
    write_line(&format!("[EVENT] {}", event));
}

/// Log a value as one line of JSON.
pub fn log_state<T: Serialize>(label: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => write_line(&format!("[STATE] {} {}", label, json)),
        Err(e) => write_line(&format!("[STATE] {} <unserializable: {}>", label, e)),
    }
}

/// Record panics in the log file before the previous hook runs.
///
/// Hosts that own the terminal install their restore hook first, so it runs
/// after the panic has been logged.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        write_line(&format!("[PANIC] {}", info));
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_in_writes_lines() {
        let dir = std::env::temp_dir().join(format!("carousel-log-test-{}", std::process::id()));
        let path = init_in(&dir).unwrap();

        log_event("next");
        log_state("edges", &crate::edge::EdgeVisibility::BOTH);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("=== carousel started ==="));
        assert!(contents.contains("[EVENT] next"));
        assert!(contents.contains(r#"[STATE] edges {"start":true,"end":true}"#));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_init_in_reports_io_error() {
        // a regular file where the directory should be
        let blocker = std::env::temp_dir().join(format!("carousel-log-blocker-{}", std::process::id()));
        std::fs::write(&blocker, b"").unwrap();

        let result = init_in(&blocker.join("logs"));
        assert!(matches!(result, Err(crate::error::SliderError::Io(_))));

        let _ = std::fs::remove_file(&blocker);
    }
}
