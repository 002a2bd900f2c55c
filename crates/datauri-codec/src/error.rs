/// Errors that can occur while constructing or parsing a data URI.
#[derive(Debug, thiserror::Error)]
pub enum DataUriError {
    /// The input does not match the data URI grammar, or its base64 payload
    /// could not be decoded.
    #[error("malformed data URI: {0}")]
    Malformed(String),

    /// The payload exceeds the limit of the active length mode.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, DataUriError>;
