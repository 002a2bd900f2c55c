use std::sync::LazyLock;

use datauri_mime::extension_by_media_type;
use regex::Regex;
use tracing::debug;

use crate::config::CodecConfig;
use crate::encoding::{base64_decode, percent_decode_raw};
use crate::error::{DataUriError, Result};
use crate::value::{DataUri, Parameters};

/// Parameter token marking a base64 payload.
pub const BASE64_TOKEN: &str = "base64";

/// Capture groups:
/// 1. media type
/// 2. parameter block (including the `;base64` flag)
/// 3. payload, everything after the first comma
static DATA_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^data:([A-Za-z0-9\-/+.]*)([A-Za-z0-9\-_;=.+]*),(.*)$")
        .expect("data URI grammar is a valid regex")
});

/// Parse a data URI with the default (lenient, tag-length) configuration.
pub fn parse(input: &str) -> Result<DataUri> {
    parse_with_config(input, &CodecConfig::default())
}

/// Parse a data URI.
///
/// Base64 payloads are decoded, others are percent-decoded. The extension is
/// resolved from the bundled media-type table and may be absent.
pub fn parse_with_config(input: &str, config: &CodecConfig) -> Result<DataUri> {
    let captures = DATA_URI.captures(input).ok_or_else(|| {
        DataUriError::Malformed("could not parse the data URI scheme".to_string())
    })?;

    let media_type = captures.get(1).map(|m| m.as_str()).filter(|m| !m.is_empty());
    let params_block = captures.get(2).map_or("", |m| m.as_str());
    let raw_payload = captures.get(3).map_or("", |m| m.as_str());

    let (parameters, is_base64) = parse_parameters(params_block);

    let payload = if is_base64 {
        base64_decode(raw_payload, config.strict).map_err(|err| {
            debug!(error = %err, strict = config.strict, "base64 payload rejected");
            DataUriError::Malformed("base64 decoding failed".to_string())
        })?
    } else {
        percent_decode_raw(raw_payload)
    };

    let mut uri = DataUri::with_config(payload, media_type, parameters, config)?;
    if is_base64 {
        uri.mark_binary();
    }
    let extension = extension_by_media_type(uri.media_type());
    uri.set_extension(extension);

    debug!(
        media_type = uri.media_type(),
        size = uri.payload().len(),
        binary = uri.is_binary(),
        extension = ?uri.extension(),
        "parsed data URI"
    );
    Ok(uri)
}

/// Split the parameter block into ordered `name=value` pairs and the base64 flag.
///
/// Values keep any `=` after the first one. Tokens without `=` other than
/// `base64` are ignored.
fn parse_parameters(block: &str) -> (Parameters, bool) {
    let mut parameters = Parameters::new();
    let mut is_base64 = false;

    for token in block.split(';').filter(|token| !token.is_empty()) {
        match token.split_once('=') {
            Some((name, value)) => {
                parameters.insert(name.to_string(), value.to_string());
            }
            None if token == BASE64_TOKEN => is_base64 = true,
            None => debug!(token, "ignoring bare parameter token"),
        }
    }

    (parameters, is_base64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LengthMode;

    #[test]
    fn parse_percent_encoded_text() {
        let uri = parse("data:text/plain;charset=US-ASCII,Hello%20World").unwrap();
        assert_eq!(uri.payload(), b"Hello World");
        assert_eq!(uri.media_type(), "text/plain");
        assert!(!uri.is_binary());
        assert_eq!(uri.parameters().len(), 1);
        assert_eq!(uri.parameter("charset"), Some("US-ASCII"));
        assert_eq!(uri.extension(), Some("txt"));
    }

    #[test]
    fn parse_base64_octet_stream() {
        let uri = parse("data:application/octet-stream;base64,SGVsbG8=").unwrap();
        assert_eq!(uri.payload(), b"Hello");
        assert!(uri.is_binary());
        assert_eq!(uri.extension(), Some("bin"));
        assert!(uri.parameters().is_empty());
    }

    #[test]
    fn parse_rejects_non_data_uri() {
        let err = parse("not-a-data-uri").unwrap_err();
        assert!(matches!(err, DataUriError::Malformed(_)));
    }

    #[test]
    fn parse_rejects_missing_comma() {
        assert!(matches!(
            parse("data:text/plain;charset=US-ASCII"),
            Err(DataUriError::Malformed(_))
        ));
    }

    #[test]
    fn parse_rejects_disallowed_characters_before_comma() {
        assert!(matches!(
            parse("data:text/plain;name=a b,x"),
            Err(DataUriError::Malformed(_))
        ));
        assert!(matches!(
            parse("data:text/plain;name=\"a\",x"),
            Err(DataUriError::Malformed(_))
        ));
    }

    #[test]
    fn parse_rejects_leading_text() {
        assert!(parse("xdata:,hello").is_err());
    }

    #[test]
    fn parse_minimal_uri_defaults_media_type() {
        let uri = parse("data:,A%20brief%20note").unwrap();
        assert_eq!(uri.payload(), b"A brief note");
        assert_eq!(uri.media_type(), "text/plain");
        assert_eq!(uri.parameter("charset"), Some("US-ASCII"));
        assert!(!uri.is_binary());
    }

    #[test]
    fn base64_flag_forces_binary_for_default_media_type() {
        let uri = parse("data:;base64,SGVsbG8=").unwrap();
        assert_eq!(uri.media_type(), "text/plain");
        assert_eq!(uri.payload(), b"Hello");
        assert!(uri.is_binary());
    }

    #[test]
    fn base64_flag_forces_binary_for_text_media_type() {
        let uri = parse("data:text/html;base64,PGI+aGk8L2I+").unwrap();
        assert_eq!(uri.payload(), b"<b>hi</b>");
        assert!(uri.is_binary());
        assert_eq!(uri.extension(), Some("html"));
    }

    #[test]
    fn payload_may_contain_commas() {
        let uri = parse("data:text/csv,a,b,c").unwrap();
        assert_eq!(uri.payload(), b"a,b,c");
        assert_eq!(uri.extension(), Some("csv"));
    }

    #[test]
    fn parameter_value_keeps_extra_equals() {
        let uri = parse("data:text/plain;token=a=b=c,x").unwrap();
        assert_eq!(uri.parameter("token"), Some("a=b=c"));
    }

    #[test]
    fn repeated_parameter_overwrites_in_place() {
        let uri = parse("data:image/png;a=1;b=2;a=3;base64,").unwrap();
        let names: Vec<&str> = uri.parameters().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(uri.parameter("a"), Some("3"));
    }

    #[test]
    fn bare_tokens_are_ignored() {
        let uri = parse("data:text/plain;flag;x=1,abc").unwrap();
        assert_eq!(uri.parameters().len(), 1);
        assert!(!uri.is_binary());
    }

    #[test]
    fn plus_is_not_a_space() {
        let uri = parse("data:text/plain,a+b").unwrap();
        assert_eq!(uri.payload(), b"a+b");
    }

    #[test]
    fn strict_base64_failure_is_malformed() {
        let config = CodecConfig::strict(LengthMode::Tag);
        let err = parse_with_config("data:image/png;base64,@@@@", &config).unwrap_err();
        match err {
            DataUriError::Malformed(message) => assert_eq!(message, "base64 decoding failed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn strict_base64_accepts_unpadded_and_spaced_payloads() {
        let config = CodecConfig::strict(LengthMode::Tag);
        let uri = parse_with_config("data:image/png;base64,SGVsbG8", &config).unwrap();
        assert_eq!(uri.payload(), b"Hello");
        assert!(uri.is_binary());
        let uri = parse_with_config("data:image/png;base64,SGVs bG8=", &config).unwrap();
        assert_eq!(uri.payload(), b"Hello");
    }

    #[test]
    fn lenient_base64_skips_invalid_characters() {
        let uri = parse("data:image/png;base64,SGVs%bG8=").unwrap();
        assert_eq!(uri.payload(), b"Hello");
    }

    #[test]
    fn strict_literal_mode_checks_decoded_length() {
        let payload = "a".repeat(1025);
        let input = format!("data:text/plain,{payload}");
        let config = CodecConfig::strict(LengthMode::Literal);
        assert!(matches!(
            parse_with_config(&input, &config),
            Err(DataUriError::PayloadTooLarge {
                size: 1025,
                max: 1024
            })
        ));
        assert!(parse_with_config(&input, &CodecConfig::strict(LengthMode::Attribute)).is_ok());
    }

    #[test]
    fn office_media_type_resolves_extension() {
        let uri = parse(
            "data:application/vnd.openxmlformats-officedocument.wordprocessingml.document;base64,UEsDBA==",
        )
        .unwrap();
        assert_eq!(
            uri.media_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert!(uri.is_binary());
        assert_eq!(uri.extension(), Some("docx"));
    }

    #[test]
    fn unknown_media_type_has_no_extension() {
        let uri = parse("data:application/x-unknown;base64,AA==").unwrap();
        assert_eq!(uri.extension(), None);
    }

    #[test]
    fn from_str_uses_default_config() {
        let uri: DataUri = "data:image/gif;base64,R0lGODlh".parse().unwrap();
        assert_eq!(uri.payload(), b"GIF89a");
        assert_eq!(uri.extension(), Some("gif"));
    }

    #[test]
    fn round_trip_binary() {
        let original = DataUri::new(
            vec![0u8, 1, 2, 254, 255],
            Some("image/png"),
            Parameters::new(),
            Default::default(),
        )
        .unwrap();
        let parsed = parse(&original.to_encoded_string()).unwrap();
        assert_eq!(parsed.payload(), original.payload());
        assert_eq!(parsed.media_type(), original.media_type());
        assert_eq!(parsed.is_binary(), original.is_binary());
    }

    #[test]
    fn round_trip_text_with_parameters() {
        let mut params = Parameters::new();
        params.insert("charset".to_string(), "utf-8".to_string());
        params.insert("name".to_string(), "notes.txt".to_string());
        let original = DataUri::new(
            "héllo, wörld ~ 100%".as_bytes().to_vec(),
            Some("text/plain"),
            params,
            Default::default(),
        )
        .unwrap();
        let encoded = original.to_encoded_string();
        let parsed = parse(&encoded).unwrap();
        assert_eq!(parsed.payload(), original.payload());
        assert_eq!(parsed.media_type(), "text/plain");
        assert!(!parsed.is_binary());
        assert_eq!(parsed.parameters(), original.parameters());
        assert_eq!(parsed.to_encoded_string(), encoded);
    }
}
