use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use lazy_static::lazy_static;

#[macro_export]
macro_rules! log {
    (ERROR, $($arg:tt)*) => {
        if $crate::log::enabled($crate::log::LogLevel::ERROR) { $crate::log::log_error(&format!($($arg)*)) }
    };
    (INFO, $($arg:tt)*) => {
        if $crate::log::enabled($crate::log::LogLevel::INFO) { $crate::log::log_info(&format!($($arg)*)) }
    };
    (VERBOSE, $($arg:tt)*) => {
        if $crate::log::enabled($crate::log::LogLevel::VERBOSE) { $crate::log::log_verbose(&format!($($arg)*)) }
    };
    ($($arg:tt)*) => { $crate::log!(VERBOSE, $($arg)*) };
}

#[macro_export]
macro_rules! log_level {
    ($l:ident) => { $crate::log::set_log_level($crate::log::LogLevel::$l) };
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    NONE,
    ERROR,
    INFO,
    VERBOSE,
}

impl LogLevel {
    pub fn value(&self) -> u8 {
        match *self {
            LogLevel::NONE => 3,
            LogLevel::ERROR => 2,
            LogLevel::INFO => 1,
            LogLevel::VERBOSE => 0,
        }
    }

    pub fn from_value(value: u8) -> Self {
        match value {
            0 => LogLevel::VERBOSE,
            1 => LogLevel::INFO,
            2 => LogLevel::ERROR,
            _ => LogLevel::NONE,
        }
    }

    pub fn allows(&self, message_level: LogLevel) -> bool {
        message_level != LogLevel::NONE && message_level.value() >= self.value()
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(LogLevel::NONE),
            "error" => Ok(LogLevel::ERROR),
            "info" => Ok(LogLevel::INFO),
            "verbose" => Ok(LogLevel::VERBOSE),
            other => Err(format!("LogLevel::from_str: unknown log level \"{}\"", other)),
        }
    }
}

pub const LOG_LEVEL_VARIABLE: &str = "EMBER_LOG";

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::INFO;

lazy_static! {
    // Checked before any message is formatted, so reading it must not lock or allocate.
    static ref LOG_LEVEL: AtomicU8 = AtomicU8::new(initial_log_level().value());
}

fn initial_log_level() -> LogLevel {
    match env::var(LOG_LEVEL_VARIABLE) {
        Ok(value) => match value.parse() {
            Ok(level) => level,
            Err(message) => {
                // The level isn't built yet, so this can't go through log!.
                eprintln!("E {}: {} (from {})", TAG, message, LOG_LEVEL_VARIABLE);
                DEFAULT_LOG_LEVEL
            },
        },
        Err(_) => DEFAULT_LOG_LEVEL,
    }
}

pub fn log_level() -> LogLevel {
    LogLevel::from_value(LOG_LEVEL.load(Ordering::Relaxed))
}

pub fn set_log_level(level: LogLevel) {
    LOG_LEVEL.store(level.value(), Ordering::Relaxed);
}

pub fn enabled(message_level: LogLevel) -> bool {
    log_level().allows(message_level)
}

const TAG: &str = "ember";

pub fn log_error(string: &str) {
    if log_level().allows(LogLevel::ERROR) {
        eprintln!("E {}: {}", TAG, string);
    }
}

pub fn log_info(string: &str) {
    if log_level().allows(LogLevel::INFO) {
        println!("I {}: {}", TAG, string);
    }
}

pub fn log_verbose(string: &str) {
    if log_level().allows(LogLevel::VERBOSE) {
        println!("V {}: {}", TAG, string);
    }
}
