//! Payload encodings used by the textual data URI form.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use percent_encoding::{percent_decode_str, percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the unreserved set `A-Z a-z 0-9 - _ . ~` is escaped.
/// Space becomes `%20`, never `+`.
const RAW_URL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Standard alphabet, padding optional, trailing bits tolerated.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Standard alphabet, padding optional, canonical trailing bits.
const STRICT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Percent-encode bytes with uppercase hex escapes.
pub fn percent_encode_raw(payload: &[u8]) -> String {
    percent_encode(payload, RAW_URL).to_string()
}

/// Percent-decode text. `+` is left as-is.
pub fn percent_decode_raw(text: &str) -> Vec<u8> {
    percent_decode_str(text).collect()
}

/// Standard base64 with padding.
pub fn base64_encode(payload: &[u8]) -> String {
    STANDARD.encode(payload)
}

/// Decode base64 text.
///
/// Padding is optional in both modes. Strict mode skips ASCII whitespace and
/// rejects any other byte outside the standard alphabet; otherwise such bytes
/// are discarded.
pub fn base64_decode(text: &str, strict: bool) -> Result<Vec<u8>, base64::DecodeError> {
    if strict {
        let compact: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
        return STRICT.decode(compact);
    }
    let filtered: Vec<u8> = text
        .bytes()
        .filter(|b| b.is_ascii_alphanumeric() || *b == b'+' || *b == b'/')
        .collect();
    LENIENT.decode(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_encode_space_is_percent_20() {
        assert_eq!(percent_encode_raw(b"Hello World"), "Hello%20World");
    }

    #[test]
    fn percent_encode_keeps_unreserved() {
        assert_eq!(percent_encode_raw(b"a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(percent_encode_raw(b"a+b/c,d"), "a%2Bb%2Fc%2Cd");
        assert_eq!(percent_encode_raw(&[0x00, 0xff]), "%00%FF");
    }

    #[test]
    fn percent_decode_leaves_plus() {
        assert_eq!(percent_decode_raw("a+b%20c"), b"a+b c");
    }

    #[test]
    fn percent_decode_passes_bad_escapes_through() {
        assert_eq!(percent_decode_raw("100%"), b"100%");
        assert_eq!(percent_decode_raw("%zz"), b"%zz");
    }

    #[test]
    fn base64_strict_rejects_noise() {
        assert_eq!(base64_decode("SGVsbG8=", true).unwrap(), b"Hello");
        assert!(base64_decode("SGVs*bG8=", true).is_err());
        assert!(base64_decode("SGVs%bG8=", true).is_err());
    }

    #[test]
    fn base64_strict_accepts_missing_padding_and_whitespace() {
        assert_eq!(base64_decode("SGVsbG8", true).unwrap(), b"Hello");
        assert_eq!(base64_decode("SGVs bG8=", true).unwrap(), b"Hello");
        assert_eq!(base64_decode("SGVs\r\nbG8=\n", true).unwrap(), b"Hello");
    }

    #[test]
    fn base64_lenient_skips_noise_and_padding() {
        assert_eq!(base64_decode("SGVs*bG8=", false).unwrap(), b"Hello");
        assert_eq!(base64_decode("SGVsbG8", false).unwrap(), b"Hello");
        assert_eq!(base64_decode("SGVs\nbG8=\n", false).unwrap(), b"Hello");
    }

    #[test]
    fn base64_empty_is_empty() {
        assert!(base64_decode("", true).unwrap().is_empty());
        assert!(base64_decode("", false).unwrap().is_empty());
    }
}
