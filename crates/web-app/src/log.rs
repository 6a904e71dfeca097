use std::{collections::VecDeque, sync::OnceLock};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

static REPOSITORY: OnceLock<Box<dyn Repository>> = OnceLock::new();
static LOGGER: Logger = Logger;

#[allow(clippy::missing_errors_doc)]
pub trait Service {
    fn get_log_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn add_log_entry(&self, entry: Entry) -> Result<(), Error>;
    fn clear_log_entries(&self) -> Result<(), Error>;
}

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
    fn clear_entries(&self) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

impl Entry {
    fn new(record: &Record) -> Self {
        Self {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Sends log records to the browser console and keeps a copy in the given repository.
///
/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(repository: Box<dyn Repository>, level: LevelFilter) -> Result<(), SetLoggerError> {
    let _ = REPOSITORY.set(repository);
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        match record.level() {
            Level::Error => gloo_console::error!(message),
            Level::Warn => gloo_console::warn!(message),
            Level::Info => gloo_console::info!(message),
            Level::Debug | Level::Trace => gloo_console::debug!(message),
        }

        if let Some(repository) = REPOSITORY.get() {
            if let Err(err) = repository.write_entry(Entry::new(record)) {
                gloo_console::error!(format!("failed to store log entry: {err}"));
            }
        }
    }

    fn flush(&self) {}
}
