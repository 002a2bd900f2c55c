//! Encode and decode `data:` URIs.
//!
//! A data URI carries its media type, parameters, and payload inline:
//! `data:text/plain;charset=US-ASCII,Hello`.
//!
//! # Crate Structure
//!
//! - [`mime`] — Static extension / media-type table and lookups
//! - [`codec`] — `DataUri` value, length policy, parser, and serializer
//! - [`source`] — File and HTTP payload sources (behind `source` feature)

pub use datauri_codec::{parse, parse_with_config, CodecConfig, DataUri, DataUriError, LengthMode};

/// Re-export media-type table types.
pub mod mime {
    pub use datauri_mime::*;
}

/// Re-export codec types.
pub mod codec {
    pub use datauri_codec::*;
}

/// Re-export source types (requires `source` feature).
#[cfg(feature = "source")]
pub mod source {
    pub use datauri_source::*;
}
