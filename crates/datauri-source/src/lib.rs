//! Payload sources for data URIs.
//!
//! A source produces raw bytes plus an optional media-type hint; the codec
//! layer turns that pair into a [`DataUri`](datauri_codec::DataUri).
//! - [`FileSource`] reads a regular file and infers the media type from its extension.
//! - [`HttpSource`] fetches a URL (behind the `http` feature).

pub mod config;
pub mod content_type;
pub mod error;
pub mod file;
#[cfg(feature = "http")]
pub mod http;
pub mod traits;

pub use config::SourceConfig;
pub use content_type::split_content_type;
pub use error::{Result, SourceError};
pub use file::{from_file, FileSource};
#[cfg(feature = "http")]
pub use http::{from_url, HttpSource};
pub use traits::{PayloadSource, SourcePayload};
