//! Error types for the FFIScope scan pipeline.
//!
//! Parse and validation failures are fail-fast: the first fatal error aborts
//! the scan with no partial results. Vocabulary warnings are not errors and
//! never appear here — they ride along on the [`crate::types::CheckReport`].

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CheckError>;

#[derive(Error, Debug)]
pub enum CheckError {
    /// The input file could not be opened or read. Distinct from parse
    /// errors so callers can tell a missing file from a broken one.
    #[error("cannot read {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A candidate declaration had no `fn … (` pattern, no parseable
    /// argument list, or an argument fragment with no type annotation.
    #[error("malformed declaration: {0}")]
    MalformedDeclaration(String),

    /// A normalized type name matched neither the libc vocabulary nor the
    /// Rust primitive vocabulary.
    #[error("`{0}` is not a recognized libc or Rust type")]
    UnknownType(String),
}
