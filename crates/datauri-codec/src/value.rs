use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use indexmap::IndexMap;

use crate::config::{CodecConfig, LengthPolicy};
use crate::encoding::{base64_encode, percent_encode_raw};
use crate::error::{DataUriError, Result};
use crate::parser::{parse_with_config, BASE64_TOKEN};

/// Media type assumed when none is supplied.
pub const DEFAULT_MEDIA_TYPE: &str = "text/plain";

/// Charset parameter injected alongside [`DEFAULT_MEDIA_TYPE`].
pub const DEFAULT_CHARSET: &str = "US-ASCII";

/// Ordered parameter map. Insertion order is serialization order.
pub type Parameters = IndexMap<String, String>;

/// Read access to embedded content.
pub trait EmbeddedData {
    /// The decoded payload bytes.
    fn payload(&self) -> &[u8];
    /// The effective media type.
    fn media_type(&self) -> &str;
    /// Parameters in insertion order.
    fn parameters(&self) -> &Parameters;
    /// Whether the payload is serialized as base64.
    fn is_binary(&self) -> bool;
    /// File extension, when one has been resolved or set.
    fn extension(&self) -> Option<&str>;
}

/// A decoded data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    payload: Bytes,
    media_type: String,
    parameters: Parameters,
    is_binary: bool,
    extension: Option<String>,
}

impl DataUri {
    /// Construct a data URI value.
    ///
    /// An absent or empty `media_type` becomes `text/plain` and adds
    /// `charset=US-ASCII` to `parameters`. The binary flag is true unless the
    /// media type starts with `text/`. Fails with
    /// [`DataUriError::PayloadTooLarge`] when `policy` rejects the payload.
    pub fn new(
        payload: impl Into<Bytes>,
        media_type: Option<&str>,
        parameters: Parameters,
        policy: LengthPolicy,
    ) -> Result<Self> {
        let payload = payload.into();
        let mut parameters = parameters;

        let media_type = match media_type {
            Some(media_type) if !media_type.is_empty() => media_type.to_string(),
            _ => {
                parameters.insert("charset".to_string(), DEFAULT_CHARSET.to_string());
                DEFAULT_MEDIA_TYPE.to_string()
            }
        };
        let is_binary = !media_type.starts_with("text/");

        policy.check(payload.len())?;

        Ok(Self {
            payload,
            media_type,
            parameters,
            is_binary,
            extension: None,
        })
    }

    /// Construct with the given codec configuration's length policy.
    pub fn with_config(
        payload: impl Into<Bytes>,
        media_type: Option<&str>,
        parameters: Parameters,
        config: &CodecConfig,
    ) -> Result<Self> {
        Self::new(payload, media_type, parameters, config.length_policy())
    }

    /// Force base64 serialization. Never clears the flag.
    pub fn mark_binary(&mut self) -> &mut Self {
        self.is_binary = true;
        self
    }

    pub fn set_extension(&mut self, extension: Option<impl Into<String>>) -> &mut Self {
        self.extension = extension.map(Into::into);
        self
    }

    /// Insert a parameter, replacing any existing value with the same name in place.
    pub fn add_parameter(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Alias of [`DataUri::payload`].
    pub fn raw_data(&self) -> &[u8] {
        &self.payload
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    pub fn is_binary(&self) -> bool {
        self.is_binary
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Serialize to `data:<media type>[;name=value]*[;base64],<payload>`.
    ///
    /// Binary payloads are standard base64 with padding. Text payloads are
    /// percent-encoded, escaping everything outside `A-Z a-z 0-9 - _ . ~`.
    pub fn to_encoded_string(&self) -> String {
        let mut out = String::with_capacity(self.encoded_len_hint());
        out.push_str("data:");
        out.push_str(&self.media_type);
        for (name, value) in &self.parameters {
            out.push(';');
            out.push_str(name);
            out.push('=');
            out.push_str(value);
        }
        if self.is_binary {
            out.push(';');
            out.push_str(BASE64_TOKEN);
        }
        out.push(',');
        if self.is_binary {
            out.push_str(&base64_encode(&self.payload));
        } else {
            out.push_str(&percent_encode_raw(&self.payload));
        }
        out
    }

    fn encoded_len_hint(&self) -> usize {
        let params: usize = self
            .parameters
            .iter()
            .map(|(name, value)| name.len() + value.len() + 2)
            .sum();
        // base64 grows by 4/3, percent-encoding by up to 3x; take the base64 bound.
        "data:".len() + self.media_type.len() + params + 8 + self.payload.len().div_ceil(3) * 4
    }
}

impl EmbeddedData for DataUri {
    fn payload(&self) -> &[u8] {
        DataUri::payload(self)
    }

    fn media_type(&self) -> &str {
        DataUri::media_type(self)
    }

    fn parameters(&self) -> &Parameters {
        DataUri::parameters(self)
    }

    fn is_binary(&self) -> bool {
        DataUri::is_binary(self)
    }

    fn extension(&self) -> Option<&str> {
        DataUri::extension(self)
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_encoded_string())
    }
}

impl FromStr for DataUri {
    type Err = DataUriError;

    fn from_str(s: &str) -> Result<Self> {
        parse_with_config(s, &CodecConfig::default())
    }
}
