//! Browser Logger
//!
//! A `log` backend for the WASM front-end. Records go to the browser
//! console with the matching severity (`console.error`, `console.warn`,
//! ...); native builds and tests write to stderr instead.
//!
//! ```ignore
//! browser_logger::init(log::LevelFilter::Debug);
//! log::info!("[APP] started");
//! ```

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Console logger with a single level threshold
pub struct BrowserLogger {
    level: LevelFilter,
}

impl BrowserLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

/// One console line: `HH:MM:SS.mmm LEVEL target: message`
pub fn format_record(at: DateTime<Utc>, level: Level, target: &str, message: &str) -> String {
    format!(
        "{} {:<5} {}: {}",
        at.format("%H:%M:%S%.3f"),
        level,
        target,
        message
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug => web_sys::console::log_1(&value),
        Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

impl Log for BrowserLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(
            Utc::now(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        emit(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the logger globally. Fails if a logger is already set.
pub fn try_init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(BrowserLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Install the logger, ignoring a second call
pub fn init(level: LevelFilter) {
    if try_init(level).is_err() {
        log::debug!("[LOGGER] already initialized");
    }
}
