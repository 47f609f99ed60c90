//! Error types for the regression test framework

use thiserror::Error;

/// Errors raised while running regression tests
#[derive(Debug, Error)]
pub enum TestError {
    /// Filesystem error while reading or writing test artifacts
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Golden file missing in compare mode
    #[error("golden file not found: {path}")]
    GoldenMissing { path: String },
}

/// Result type for regression test operations
pub type TestResult<T> = Result<T, TestError>;
