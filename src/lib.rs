//! Shared types and the results model for vdbbench.
//!
//! The crate splits into the task/config data model (`task`, `clients`),
//! the measured-outcome record (`metric`), and the persistence plus
//! reporting layer (`results`). Database drivers and the execution loop
//! that produces metrics live outside this crate; they consume assembled
//! [`TaskConfig`]s and hand back [`CaseResult`]s.

pub mod clients;
pub mod config;
pub mod metric;
pub mod results;
pub mod task;

use std::path::PathBuf;

pub use clients::{Db, DbCaseConfig, DbConfig, IndexType, MetricType, SecretStr};
pub use metric::Metric;
pub use results::{CaseResult, TestResult};
pub use task::{CaseConfig, CaseType, ResultLabel, TaskConfig, TaskStage};

pub type BenchResult<T> = std::result::Result<T, BenchError>;

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no such result file: {0}")]
    FileNotFound(PathBuf),

    #[error("no config registered for `{0}`")]
    ConfigNotFound(String),

    #[error("invalid result document: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for BenchError {
    fn from(e: serde_json::Error) -> Self {
        BenchError::Validation(e.to_string())
    }
}
