use crate::error::{DataUriError, Result};

/// Maximum payload length for [`LengthMode::Literal`].
pub const LITERAL_LIMIT: usize = 1024;

/// Maximum payload length for [`LengthMode::Attribute`] and [`LengthMode::Tag`].
pub const ATTRIBUTE_TAG_LIMIT: usize = 2100;

/// Named payload-length ceilings used by strict validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthMode {
    /// Literal length (1024 bytes).
    Literal,
    /// Sum of attribute value specifications in a tag (2100 bytes).
    Attribute,
    /// Overall length of a tag (2100 bytes).
    #[default]
    Tag,
}

impl LengthMode {
    /// The byte limit for this mode.
    pub fn limit(self) -> usize {
        match self {
            LengthMode::Literal => LITERAL_LIMIT,
            LengthMode::Attribute | LengthMode::Tag => ATTRIBUTE_TAG_LIMIT,
        }
    }

    /// Lowercase name, matching the CLI `--mode` values.
    pub fn as_str(self) -> &'static str {
        match self {
            LengthMode::Literal => "literal",
            LengthMode::Attribute => "attribute",
            LengthMode::Tag => "tag",
        }
    }
}

/// Payload length rule applied once during [`DataUri`](crate::DataUri) construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LengthPolicy {
    pub mode: LengthMode,
    /// When false, length is never checked.
    pub strict: bool,
}

impl LengthPolicy {
    pub fn new(mode: LengthMode, strict: bool) -> Self {
        Self { mode, strict }
    }

    /// Check a payload length against this policy.
    ///
    /// The literal ceiling is tested first and the shared 2100-byte ceiling
    /// second, for every mode.
    pub fn check(&self, len: usize) -> Result<()> {
        if !self.strict {
            return Ok(());
        }
        if self.mode == LengthMode::Literal && len > LITERAL_LIMIT {
            return Err(DataUriError::PayloadTooLarge {
                size: len,
                max: LITERAL_LIMIT,
            });
        }
        if len > ATTRIBUTE_TAG_LIMIT {
            return Err(DataUriError::PayloadTooLarge {
                size: len,
                max: ATTRIBUTE_TAG_LIMIT,
            });
        }
        Ok(())
    }
}

/// Controls parsing and construction behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecConfig {
    /// Enforce payload length limits and reject base64 outside the alphabet.
    pub strict: bool,
    /// Length ceiling used when `strict` is set. Default: [`LengthMode::Tag`].
    pub mode: LengthMode,
}

impl CodecConfig {
    /// Strict configuration for the given mode.
    pub fn strict(mode: LengthMode) -> Self {
        Self { strict: true, mode }
    }

    /// Length policy derived from this configuration.
    pub fn length_policy(&self) -> LengthPolicy {
        LengthPolicy::new(self.mode, self.strict)
    }
}
