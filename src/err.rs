//! Errors that can occur while recording and reporting exams.
use std::collections::TryReserveError;
use thiserror::Error;

/// Enumeration of errors that can happen in an exam.
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't allocate room for a new record.
    ///
    /// When this is returned, the exam is exactly as it was before the call.
    #[error("couldn't allocate record")]
    Alloc(#[from] TryReserveError),

    /// We couldn't write a report.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Shorthand for a result over [Error]s.
pub type Result<T> = std::result::Result<T, Error>;
