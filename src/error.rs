//! Error types for export runs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an export run.
///
/// A subdirectory whose contents cannot be listed is not represented here:
/// the walker degrades it to a single marker line in the output and keeps
/// going (see [`crate::tree::TreeWalker`]).
#[derive(Debug, Error)]
pub enum ExportError {
    /// The start path does not exist or is not a directory. Reported before
    /// the output file is touched.
    #[error("'{}' is not a valid directory", .0.display())]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}
