use std::path::PathBuf;

use datauri_codec::DataUriError;

/// Errors that can occur while loading a payload from a source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The path is not a regular file, or the URL could not be fetched.
    #[error("{0} does not exist or could not be retrieved")]
    NotFound(String),

    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The loaded payload was rejected by the codec.
    #[error(transparent)]
    DataUri(#[from] DataUriError),
}

pub type Result<T> = std::result::Result<T, SourceError>;
