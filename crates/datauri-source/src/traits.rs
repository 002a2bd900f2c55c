use bytes::Bytes;
use datauri_codec::{CodecConfig, DataUri, Parameters};

use crate::error::Result;

/// Raw bytes retrieved from a source, with whatever type information it offered.
#[derive(Debug, Clone, Default)]
pub struct SourcePayload {
    pub bytes: Bytes,
    /// Media type hint. `None` lets the codec fall back to `text/plain`.
    pub media_type: Option<String>,
    /// Parameters that accompanied the media type hint.
    pub parameters: Parameters,
}

impl SourcePayload {
    pub fn new(bytes: impl Into<Bytes>, media_type: Option<String>) -> Self {
        Self {
            bytes: bytes.into(),
            media_type,
            parameters: Parameters::new(),
        }
    }

    /// Build a data URI from this payload.
    ///
    /// The extension is not resolved here; only the parser does that.
    pub fn into_data_uri(self, config: &CodecConfig) -> Result<DataUri> {
        let uri = DataUri::with_config(
            self.bytes,
            self.media_type.as_deref(),
            self.parameters,
            config,
        )?;
        Ok(uri)
    }
}

/// Anything that can deliver payload bytes for a location (path, URL, ...).
pub trait PayloadSource {
    /// Retrieve the payload at `location`.
    fn load(&self, location: &str) -> Result<SourcePayload>;

    /// Retrieve the payload at `location` and build a data URI from it.
    fn load_data_uri(&self, location: &str, config: &CodecConfig) -> Result<DataUri> {
        self.load(location)?.into_data_uri(config)
    }
}
