use thiserror::Error;

/// Why a file could not be decoded.
///
/// These never abort a batch: the registry logs them and reports the file as
/// undecodable.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// No decoder is registered for the extension and content sniffing failed.
    #[error("unsupported format: {0}")]
    Unsupported(String),
    /// The container was recognized but its header is inconsistent.
    #[error("malformed header: {0}")]
    Malformed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Lofty(#[from] lofty::error::LoftyError),
}
