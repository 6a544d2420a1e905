//! # Error Types
//!
//! Failures are surfaced to the caller as a single wrapped error carrying a
//! short summary and the original cause. Report generation either fully
//! succeeds or fully fails; partial reports are never produced.

use thiserror::Error;

/// Errors produced while reading a repository or writing a report.
#[derive(Debug, Error)]
pub enum Error {
    /// The repository could not be opened at the given path.
    #[error("unable to open Git repository")]
    Open(#[source] git2::Error),

    /// Reading the current branch failed.
    #[error("unable to read Git branch")]
    Branch(#[source] git2::Error),

    /// Reading commit information for the single-commit facts failed.
    #[error("unable to read Git commit information")]
    Commit(#[source] git2::Error),

    /// Walking the commit history for the contributors report failed.
    #[error("unable to read contributors from Git")]
    Contributors(#[source] git2::Error),

    /// Writing report lines to the output sink failed.
    #[error("unable to write report output")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
