//! Static file-extension / media-type table.
//!
//! This is the lowest layer of datauri. The table is process-wide immutable
//! data shared by every caller; no lookup allocates or mutates it.
//!
//! Two lookups are provided, and they are deliberately asymmetric:
//! - [`media_type_by_extension`] matches the extension exactly.
//! - [`extension_by_media_type`] matches the first entry whose media type
//!   *contains* the query, so a truncated media type still resolves.

pub mod lookup;
pub mod table;

pub use lookup::{extension_by_media_type, media_type_by_extension};
pub use table::{MediaTypeEntry, MEDIA_TYPES};
