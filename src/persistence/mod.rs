use crate::Task;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Io(io::Error),
    Csv(csv::Error),
    Serialization(SerdeJsonError),
    MalformedRow(String),
    InvalidEffort(String),
    InvalidDate(String),
    InvalidRange(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            PersistenceError::Csv(err) => write!(f, "csv error: {err}"),
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::MalformedRow(msg) => write!(f, "malformed row: {msg}"),
            PersistenceError::InvalidEffort(msg) => write!(f, "invalid effort: {msg}"),
            PersistenceError::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            PersistenceError::InvalidRange(msg) => write!(f, "invalid range: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

pub fn validate_tasks(tasks: &[Task]) -> PersistenceResult<()> {
    for task in tasks {
        if task.name.is_empty() {
            return Err(PersistenceError::MalformedRow(
                "task name must be non-empty".to_string(),
            ));
        }
        if task.effort_days < 0 {
            return Err(PersistenceError::InvalidEffort(format!(
                "task '{}' has negative effort {}",
                task.name, task.effort_days
            )));
        }
    }
    Ok(())
}

pub mod file;

pub use file::{
    DATE_FORMAT, load_days_off_from_csv, load_tasks_from_csv, save_plan_to_csv, save_plan_to_json,
};
