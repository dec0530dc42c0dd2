use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced to callers of the playlist builder and folder differ.
///
/// Undecodable audio files are not errors; they are logged and skipped.
#[derive(Error, Debug)]
pub enum Error {
    /// A path that must be an existing directory is missing or is a file.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A required input was left empty.
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the playlist failed; the file may be truncated.
    #[error("failed to write playlist {}: {source}", path.display())]
    PlaylistWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Copying stopped at this file; earlier copies are kept.
    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("operation cancelled")]
    Cancelled,
}
