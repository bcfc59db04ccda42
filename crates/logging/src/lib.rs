use chrono::Local;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

/// Records kept in memory; older ones are dropped first.
pub const MAX_RECORDS: usize = 1000;

// Most recent records, regardless of the console level
static RECORDS: Lazy<Mutex<VecDeque<Record>>> = Lazy::new(|| Mutex::new(VecDeque::new()));

static LOG_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Info));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Debug => "🔍",
            LogLevel::Info => "ℹ️",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }
}

/// A single diagnostic, stamped with the wall-clock time it was emitted at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: LogLevel,
    pub timestamp: String,
    pub message: String,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}",
            self.timestamp,
            self.level.prefix(),
            self.message
        )
    }
}

pub fn set_log_level(level: LogLevel) {
    if let Ok(mut current_level) = LOG_LEVEL.lock() {
        *current_level = level;
    }
}

pub fn get_log_level() -> LogLevel {
    match LOG_LEVEL.lock() {
        Ok(level) => *level,
        Err(_) => LogLevel::Info,
    }
}

pub fn log(level: LogLevel, message: &str) {
    let record = Record {
        level,
        timestamp: Local::now().format("%H:%M:%S").to_string(),
        message: message.to_string(),
    };

    // Only echo when at or above the current level; the buffer keeps everything
    if level >= get_log_level() {
        match level {
            LogLevel::Error | LogLevel::Warning => eprintln!("{}", record),
            _ => println!("{}", record),
        }
    }

    if let Ok(mut records) = RECORDS.lock() {
        push_capped(&mut records, record, MAX_RECORDS);
    }
}

fn push_capped(records: &mut VecDeque<Record>, record: Record, cap: usize) {
    while records.len() >= cap {
        records.pop_front();
    }
    records.push_back(record);
}

/// Formatted lines for the buffered records, oldest first.
pub fn get_logs() -> Vec<String> {
    match RECORDS.lock() {
        Ok(records) => records.iter().map(ToString::to_string).collect(),
        Err(_) => {
            let timestamp = Local::now().format("%H:%M:%S").to_string();
            vec![format!("[{}] ❌ Error accessing logs", timestamp)]
        }
    }
}

/// Records at `level` or above.
pub fn records_at_least(level: LogLevel) -> Vec<Record> {
    match RECORDS.lock() {
        Ok(records) => records
            .iter()
            .filter(|record| record.level >= level)
            .cloned()
            .collect(),
        Err(_) => Vec::new(),
    }
}

pub fn clear_logs() {
    if let Ok(mut records) = RECORDS.lock() {
        records.clear();
    }
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}
