//! Console Logger
//!
//! `log` backend for the browser console.
//! Every emitted line is also kept in a circular buffer of recent lines,
//! so the app can show or copy what happened without opening devtools.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of lines kept by `init`
pub const DEFAULT_CAPACITY: usize = 200;

/// Fixed-size buffer of the most recent log lines (oldest evicted first)
#[derive(Debug, Clone)]
pub struct RecentLines {
    capacity: usize,
    lines: VecDeque<String>,
}

impl RecentLines {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Lines in emission order, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Logger writing to `console.error/warn/info/debug/log` by level
pub struct ConsoleLogger {
    level: LevelFilter,
    recent: Mutex<RecentLines>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            recent: Mutex::new(RecentLines::new(capacity)),
        }
    }

    pub fn recent_lines(&self) -> Vec<String> {
        self.recent
            .lock()
            .map(|recent| recent.lines())
            .unwrap_or_default()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        write_console(record.level(), &line);
        if let Ok(mut recent) = self.recent.lock() {
            recent.push(format!("{} {}", timestamp(), line));
        }
    }

    fn flush(&self) {}
}

/// `LEVEL target: message`
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("{:<5} {}: {}", level, target, message)
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Install the console logger as the global `log` backend
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    init_with_capacity(level, DEFAULT_CAPACITY)
}

pub fn init_with_capacity(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines of the global logger (empty before `init`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent_lines).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug => web_sys::console::debug_1(&value),
        Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(target_arch = "wasm32")]
fn timestamp() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_lines_evicts_oldest() {
        let mut recent = RecentLines::new(3);
        for i in 0..5 {
            recent.push(format!("line {}", i));
        }
        assert_eq!(recent.len(), 3);
        assert_eq!(recent.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut recent = RecentLines::new(0);
        recent.push("dropped".to_string());
        assert!(recent.is_empty());
    }

    #[test]
    fn test_format_line() {
        let line = format_line(Level::Warn, "cafe::menu", "[MENU] empty catalog");
        assert_eq!(line, "WARN  cafe::menu: [MENU] empty catalog");
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 10);
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("test")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("test")
                .args(format_args!("shown"))
                .build(),
        );

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("ERROR test: shown"));
    }
}
