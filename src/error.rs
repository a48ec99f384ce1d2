//! Error handling for pos2neoden
//!
//! This module provides unified error handling using anyhow for better error propagation
//! and context information throughout the application.

use anyhow::Context;
use std::path::Path;

pub type Result<T> = anyhow::Result<T>;

/// Extension trait for Results to add context with file paths
pub trait ResultExt<T> {
    /// Add context with file path information
    fn with_path_context<P: AsRef<Path>>(self, operation: &str, path: P) -> Result<T>;

    /// Add context naming the input record being processed
    fn with_record_context(self, designator: &str, line: usize) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<anyhow::Error> + Send + Sync + 'static,
{
    fn with_path_context<P: AsRef<Path>>(self, operation: &str, path: P) -> Result<T> {
        self.map_err(|e| e.into())
            .with_context(|| format!("Failed to {} file: {}", operation, path.as_ref().display()))
    }

    fn with_record_context(self, designator: &str, line: usize) -> Result<T> {
        self.map_err(|e| e.into())
            .with_context(|| format!("Error in record '{}' (line {})", designator, line))
    }
}

/// Specific error types for pos2neoden operations
#[derive(Debug, thiserror::Error)]
pub enum PosConvertError {
    #[error("Input file not found or unreadable: {path}")]
    FileNotFound { path: String },

    #[error("Required column missing from input header: {field}")]
    MissingField { field: String },

    #[error("Field {field} is not a valid number: {value:?}")]
    InvalidNumber { field: String, value: String },
}
