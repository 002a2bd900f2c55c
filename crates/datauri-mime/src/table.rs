//! Bundled extension / media-type pairs.
//!
//! Order is significant: both lookups return the first match. Several Office
//! formats appear twice, once with the registered media type and once with the
//! punctuation stripped, because some clients send the stripped form.

/// A single `(extension, media type)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaTypeEntry {
    /// File extension, normally with a leading `.`.
    pub extension: &'static str,
    /// Media type string.
    pub media_type: &'static str,
}

impl MediaTypeEntry {
    const fn new(extension: &'static str, media_type: &'static str) -> Self {
        Self {
            extension,
            media_type,
        }
    }

    /// Extension without its leading `.`.
    pub fn bare_extension(&self) -> &'static str {
        self.extension.strip_prefix('.').unwrap_or(self.extension)
    }
}

/// Known extensions and media types, in lookup order.
pub static MEDIA_TYPES: &[MediaTypeEntry] = &[
    MediaTypeEntry::new(".aac", "audio/aac"),
    MediaTypeEntry::new(".abw", "application/x-abiword"),
    MediaTypeEntry::new(".arc", "application/x-freearc"),
    MediaTypeEntry::new(".avi", "video/x-msvideo"),
    MediaTypeEntry::new(".azw", "application/vnd.amazon.ebook"),
    MediaTypeEntry::new(".bin", "application/octet-stream"),
    MediaTypeEntry::new(".bmp", "image/bmp"),
    MediaTypeEntry::new(".bz", "application/x-bzip"),
    MediaTypeEntry::new(".bz2", "application/x-bzip2"),
    MediaTypeEntry::new(".csh", "application/x-csh"),
    MediaTypeEntry::new(".css", "text/css"),
    MediaTypeEntry::new(".csv", "text/csv"),
    MediaTypeEntry::new(".doc", "application/msword"),
    MediaTypeEntry::new(
        ".docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    MediaTypeEntry::new(
        ".docx",
        "application/vndopenxmlformats-officedocumentwordprocessingmldocument",
    ),
    MediaTypeEntry::new(".eot", "application/vnd.ms-fontobject"),
    MediaTypeEntry::new(".epub", "application/epub+zip"),
    MediaTypeEntry::new(".gz", "application/gzip"),
    MediaTypeEntry::new(".gif", "image/gif"),
    MediaTypeEntry::new(".html", "text/html"),
    MediaTypeEntry::new(".htm", "text/html"),
    MediaTypeEntry::new(".ico", "image/vnd.microsoft.icon"),
    MediaTypeEntry::new(".ics", "text/calendar"),
    MediaTypeEntry::new(".jar", "application/java-archive"),
    MediaTypeEntry::new(".jpg", "image/jpg"),
    MediaTypeEntry::new(".jpeg", "image/jpeg"),
    MediaTypeEntry::new(".js", "text/javascript"),
    MediaTypeEntry::new(".json", "application/json"),
    MediaTypeEntry::new(".jsonld", "application/ld+json"),
    MediaTypeEntry::new("midi", "audio/x-midi"),
    MediaTypeEntry::new(".mid", "audio/midi"),
    MediaTypeEntry::new(".mjs", "text/javascript"),
    MediaTypeEntry::new(".mp3", "audio/mpeg"),
    MediaTypeEntry::new(".mpeg", "video/mpeg"),
    MediaTypeEntry::new(".mpkg", "application/vnd.apple.installer+xml"),
    MediaTypeEntry::new(".odp", "application/vnd.oasis.opendocument.presentation"),
    MediaTypeEntry::new(".ods", "application/vnd.oasis.opendocument.spreadsheet"),
    MediaTypeEntry::new(".odt", "application/vnd.oasis.opendocument.text"),
    MediaTypeEntry::new(".oga", "audio/ogg"),
    MediaTypeEntry::new(".ogv", "video/ogg"),
    MediaTypeEntry::new(".ogx", "application/ogg"),
    MediaTypeEntry::new(".opus", "audio/opus"),
    MediaTypeEntry::new(".otf", "font/otf"),
    MediaTypeEntry::new(".png", "image/png"),
    MediaTypeEntry::new(".pdf", "application/pdf"),
    MediaTypeEntry::new(".php", "application/x-httpd-php"),
    MediaTypeEntry::new(".ppt", "application/vnd.ms-powerpoint"),
    MediaTypeEntry::new(
        ".pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    MediaTypeEntry::new(
        ".pptx",
        "application/vndopenxmlformats-officedocumentpresentationmlpresentation",
    ),
    MediaTypeEntry::new(".rar", "application/vnd.rar"),
    MediaTypeEntry::new(".rtf", "application/rtf"),
    MediaTypeEntry::new(".sh", "application/x-sh"),
    MediaTypeEntry::new(".svg", "image/svg+xml"),
    MediaTypeEntry::new(".swf", "application/x-shockwave-flash"),
    MediaTypeEntry::new(".tar", "application/x-tar"),
    MediaTypeEntry::new(".tiff", "image/tiff"),
    MediaTypeEntry::new(".tif", "image/tiff"),
    MediaTypeEntry::new(".ts", "video/mp2t"),
    MediaTypeEntry::new(".ttf", "font/ttf"),
    MediaTypeEntry::new(".txt", "text/plain"),
    MediaTypeEntry::new(".vsd", "application/vnd.visio"),
    MediaTypeEntry::new(".wav", "audio/wav"),
    MediaTypeEntry::new(".weba", "audio/webm"),
    MediaTypeEntry::new(".webm", "video/webm"),
    MediaTypeEntry::new(".webp", "image/webp"),
    MediaTypeEntry::new(".woff", "font/woff"),
    MediaTypeEntry::new(".woff2", "font/woff2"),
    MediaTypeEntry::new(".xhtml", "application/xhtml+xml"),
    MediaTypeEntry::new(".xls", "application/vnd.ms-excel"),
    MediaTypeEntry::new(
        ".xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    MediaTypeEntry::new(".xlsx", "application/vndopenxmlformats-officedocumentspreadsheetmlsheet"),
    MediaTypeEntry::new(".xml", "application/xml"),
    MediaTypeEntry::new(".xml", "text/xml"),
    MediaTypeEntry::new(".xul", "application/vnd.mozilla.xul+xml"),
    MediaTypeEntry::new(".zip", "application/zip"),
    MediaTypeEntry::new(".3gp", "video/3gpp"),
    MediaTypeEntry::new(".3g2", "video/3gpp2"),
    MediaTypeEntry::new(".7z", "application/x-7z-compressed"),
];
