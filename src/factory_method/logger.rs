use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoggerKind {
    #[default]
    File,
    Database,
}

impl fmt::Display for LoggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerKind::File => f.write_str("file"),
            LoggerKind::Database => f.write_str("database"),
        }
    }
}

pub trait Logger {
    fn kind(&self) -> LoggerKind;

    fn write_log(&mut self, message: &str) -> Result<()>;
}

pub trait LoggerFactory {
    fn create_logger(&self) -> Box<dyn Logger>;
}

/// Appends one line per message to a file.
#[derive(Debug)]
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileLogger { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Logger for FileLogger {
    fn kind(&self) -> LoggerKind {
        LoggerKind::File
    }

    fn write_log(&mut self, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{message}")?;
        info!(path = %self.path.display(), "file log written");
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub id: u64,
    pub table: String,
    pub message: String,
}

/// Stores log rows in an in-memory table standing in for a database.
#[derive(Debug)]
pub struct DatabaseLogger {
    table: String,
    records: Vec<LogRecord>,
}

impl DatabaseLogger {
    pub fn new(table: impl Into<String>) -> Self {
        DatabaseLogger {
            table: table.into(),
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }
}

impl Logger for DatabaseLogger {
    fn kind(&self) -> LoggerKind {
        LoggerKind::Database
    }

    fn write_log(&mut self, message: &str) -> Result<()> {
        let id = self.records.len() as u64 + 1;
        self.records.push(LogRecord {
            id,
            table: self.table.clone(),
            message: message.to_string(),
        });
        info!(table = %self.table, id, "database log written");
        Ok(())
    }
}

pub struct FileLoggerFactory {
    path: PathBuf,
}

impl FileLoggerFactory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileLoggerFactory { path: path.into() }
    }
}

impl LoggerFactory for FileLoggerFactory {
    fn create_logger(&self) -> Box<dyn Logger> {
        Box::new(FileLogger::new(self.path.clone()))
    }
}

pub struct DatabaseLoggerFactory {
    table: String,
}

impl DatabaseLoggerFactory {
    pub const DEFAULT_TABLE: &'static str = "logs";

    pub fn new(table: impl Into<String>) -> Self {
        DatabaseLoggerFactory {
            table: table.into(),
        }
    }
}

impl Default for DatabaseLoggerFactory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TABLE)
    }
}

impl LoggerFactory for DatabaseLoggerFactory {
    fn create_logger(&self) -> Box<dyn Logger> {
        Box::new(DatabaseLogger::new(self.table.clone()))
    }
}

/// Chooses the concrete creator. This is the only place the logger kind is
/// inspected; the creators themselves never branch.
pub fn factory_for(kind: LoggerKind, log_path: &Path) -> Box<dyn LoggerFactory> {
    debug!(%kind, "selecting logger factory");
    match kind {
        LoggerKind::File => Box::new(FileLoggerFactory::new(log_path)),
        LoggerKind::Database => Box::new(DatabaseLoggerFactory::default()),
    }
}
