use tracing::debug;

use crate::table::MEDIA_TYPES;

/// Look up the media type registered for a file extension.
///
/// The extension is normalized to carry a leading `.` and compared exactly
/// (case-sensitive) against the table. The first entry in declaration order
/// wins, so `"xml"` resolves to `application/xml` even though `text/xml` is
/// also listed.
pub fn media_type_by_extension(extension: &str) -> Option<&'static str> {
    let normalized = if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    };

    let found = MEDIA_TYPES
        .iter()
        .find(|entry| entry.extension == normalized)
        .map(|entry| entry.media_type);

    if found.is_none() {
        debug!(extension = %normalized, "no media type registered for extension");
    }
    found
}

/// Look up the extension (without leading `.`) for a media type.
///
/// Matching is by substring containment, not equality: the first entry whose
/// stored media type contains `media_type` wins. A truncated query such as
/// `application/vnd.openxmlformats-officedocument.wordprocessingml` therefore
/// resolves to `docx`. An empty query never matches.
pub fn extension_by_media_type(media_type: &str) -> Option<&'static str> {
    if media_type.is_empty() {
        return None;
    }

    let found = MEDIA_TYPES
        .iter()
        .find(|entry| entry.media_type.contains(media_type))
        .map(|entry| entry.bare_extension());

    if found.is_none() {
        debug!(media_type, "no extension registered for media type");
    }
    found
}
