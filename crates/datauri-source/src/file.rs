use std::path::Path;

use datauri_codec::{CodecConfig, DataUri};
use datauri_mime::media_type_by_extension;
use tracing::{debug, info};

use crate::error::{Result, SourceError};
use crate::traits::{PayloadSource, SourcePayload};

/// Reads payloads from the local filesystem.
///
/// The media type is inferred from the file extension through the bundled
/// table; unknown extensions leave it unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl FileSource {
    pub fn new() -> Self {
        Self
    }

    /// Read a regular file.
    pub fn read(&self, path: &Path) -> Result<SourcePayload> {
        let is_file = std::fs::metadata(path)
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(SourceError::NotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let media_type = guess_media_type(path);
        info!(?path, size = bytes.len(), media_type = ?media_type, "loaded file payload");
        Ok(SourcePayload::new(bytes, media_type))
    }
}

impl PayloadSource for FileSource {
    fn load(&self, location: &str) -> Result<SourcePayload> {
        self.read(Path::new(location))
    }
}

/// Build a data URI from a regular file.
pub fn from_file(path: impl AsRef<Path>, config: &CodecConfig) -> Result<DataUri> {
    FileSource.read(path.as_ref())?.into_data_uri(config)
}

fn guess_media_type(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?;
    let media_type = media_type_by_extension(extension);
    if media_type.is_none() {
        debug!(extension, "unknown file extension, media type left unset");
    }
    media_type.map(str::to_string)
}
