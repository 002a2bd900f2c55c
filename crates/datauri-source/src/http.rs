use datauri_codec::{CodecConfig, DataUri};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use tracing::{debug, info};

use crate::config::SourceConfig;
use crate::content_type::split_content_type;
use crate::error::{Result, SourceError};
use crate::traits::{PayloadSource, SourcePayload};

/// Fetches payloads over HTTP(S) with a blocking client.
///
/// Redirects are followed. Only a `200 OK` counts as success; every other
/// status and every transport failure is reported as [`SourceError::NotFound`].
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        Self::with_config(SourceConfig::default())
    }

    pub fn with_config(config: SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .map_err(|err| SourceError::NotFound(format!("http client: {err}")))?;
        Ok(Self { client })
    }

    /// Fetch a URL.
    pub fn fetch(&self, url: &str) -> Result<SourcePayload> {
        let response = self.client.get(url).send().map_err(|err| {
            debug!(url, error = %err, "http request failed");
            SourceError::NotFound(url.to_string())
        })?;

        if response.status() != StatusCode::OK {
            debug!(url, status = %response.status(), "http request did not succeed");
            return Err(SourceError::NotFound(url.to_string()));
        }

        let (media_type, parameters) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(split_content_type)
            .unwrap_or_default();

        let bytes = response.bytes().map_err(|err| {
            debug!(url, error = %err, "http body read failed");
            SourceError::NotFound(url.to_string())
        })?;

        info!(url, size = bytes.len(), media_type = ?media_type, "fetched remote payload");
        Ok(SourcePayload {
            bytes,
            media_type,
            parameters,
        })
    }
}

impl PayloadSource for HttpSource {
    fn load(&self, location: &str) -> Result<SourcePayload> {
        self.fetch(location)
    }
}

/// Build a data URI from a remote resource.
pub fn from_url(url: &str, config: &CodecConfig) -> Result<DataUri> {
    HttpSource::new()?.fetch(url)?.into_data_uri(config)
}
