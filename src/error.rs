//! Domain error types
//!
//! The services layer returns these typed errors; the app layer wraps
//! them in `anyhow` or turns them into dialog text.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions while loading the font manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("manifest is malformed: {0}")]
    Malformed(String),
}

/// Fatal conditions for a whole export run
///
/// Per-font failures are tallied in `ExportOutcome` instead.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot prepare destination folder {}: {source}", .path.display())]
    Destination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
