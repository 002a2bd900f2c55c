//! Data URI value type, length policy, parser, and serializer.
//!
//! A data URI embeds its payload directly in the URI text:
//!
//! ```text
//! data:<media type>[;<name>=<value>]*[;base64],<payload>
//! ```
//!
//! [`DataUri`] owns the decoded payload. [`parse`] turns text into a value and
//! [`DataUri::to_encoded_string`] (or `Display`) turns it back. Payload length
//! is checked once, at construction, against the configured [`LengthPolicy`].

pub mod config;
pub mod encoding;
pub mod error;
pub mod parser;
pub mod value;

pub use config::{CodecConfig, LengthMode, LengthPolicy, ATTRIBUTE_TAG_LIMIT, LITERAL_LIMIT};
pub use error::{DataUriError, Result};
pub use parser::{parse, parse_with_config, BASE64_TOKEN};
pub use value::{DataUri, EmbeddedData, Parameters, DEFAULT_CHARSET, DEFAULT_MEDIA_TYPE};
