//! Error types for Penny progression.
//!
//! The engine itself never fails on counters. These errors only come from the
//! edges: reading snapshots, parsing milestone ids and validating catalogs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProgressError {
    #[error("Unknown milestone: {0}")]
    UnknownMilestone(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProgressError {
    /// Process exit code used by the CLI for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ProgressError::UnknownMilestone(_) => 2,
            ProgressError::Catalog(_) => 3,
            ProgressError::Snapshot(_) => 4,
            ProgressError::Io(_) => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProgressError>;
