//! Content-Type header splitting for source media-type hints.

use datauri_codec::Parameters;
use tracing::debug;

/// Characters a parameter may carry and still re-parse as a data URI.
fn is_parameter_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'-' | b'_' | b'.' | b'+')
}

/// Split a `Content-Type` value into a media type and its parameters.
///
/// `text/html; charset="UTF-8"` becomes `(Some("text/html"), {charset: UTF-8})`.
/// Quoted values are unquoted. Parameters that could not appear in a data URI
/// parameter block are dropped. An empty type yields `None`.
pub fn split_content_type(value: &str) -> (Option<String>, Parameters) {
    let mut parts = value.split(';');
    let media_type = parts
        .next()
        .map(|t| t.trim().to_ascii_lowercase())
        .filter(|t| !t.is_empty());

    let mut parameters = Parameters::new();
    for part in parts {
        let Some((name, raw_value)) = part.split_once('=') else {
            continue;
        };
        let name = name.trim().to_ascii_lowercase();
        let raw_value = raw_value.trim();
        let unquoted = raw_value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(raw_value);

        let valid = !name.is_empty()
            && name.bytes().all(is_parameter_char)
            && unquoted.bytes().all(is_parameter_char);
        if !valid {
            debug!(parameter = part.trim(), "dropping content-type parameter");
            continue;
        }
        parameters.insert(name, unquoted.to_string());
    }

    (media_type, parameters)
}
