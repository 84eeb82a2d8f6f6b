use dbsdk_rs::db;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// `log` backend writing to the DreamBox debug console
struct DbLogger;

impl Log for DbLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            db::log(format!("[{}] {}: {}", record.level(), record.target(), record.args()).as_str());
        }
    }

    fn flush(&self) {
    }
}

static LOGGER: DbLogger = DbLogger;

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
