//! Rolling Logger
//!
//! A `log` backend that keeps the most recent lines in a circular buffer and
//! forwards every line to the browser console (stderr off the web).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 256;

/// Bounded ring of formatted log lines, oldest first
#[derive(Debug)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a line, dropping the oldest one when full
    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

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

/// `HH:MM:SS.mmm LEVEL [target] message`
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{timestamp} {level:<5} [{target}] {message}")
}

pub struct RollingLogger {
    level: LevelFilter,
    buffer: Mutex<LogBuffer>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(LogBuffer::new(capacity)),
        }
    }

    pub fn recent_lines(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.lines(),
            Err(poisoned) => poisoned.into_inner().lines(),
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, record.level(), record.target(), &record.args().to_string());
        emit(record.level(), &line);
        match self.buffer.lock() {
            Ok(mut buffer) => buffer.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }

    fn flush(&self) {}
}

/// Write one line straight to the output, bypassing the logger and its buffer
#[cfg(target_arch = "wasm32")]
pub fn emit(level: Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::log_1(&line),
    }
}

/// Write one line straight to the output, bypassing the logger and its buffer
#[cfg(not(target_arch = "wasm32"))]
pub fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Fails if a logger was already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    init_with_capacity(level, DEFAULT_CAPACITY)
}

pub fn init_with_capacity(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines kept by the installed logger, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::recent_lines).unwrap_or_default()
}

/// `header` followed by the buffered lines, for crash reports
pub fn recent_report(header: &str, lines: &[String]) -> String {
    let mut report = format!("{header} ({} recent log lines)", lines.len());
    for line in lines {
        report.push_str("\n  ");
        report.push_str(line);
    }
    report
}

/// Emit the buffered lines at error level, e.g. from a panic hook
pub fn dump_recent(header: &str) {
    emit(Level::Error, &recent_report(header, &recent_lines()));
}
