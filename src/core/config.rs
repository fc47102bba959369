//! Set configuration.
//!
//! `SetConfig` names a domino set: its maximum face value and scoring
//! variant. Building from a config is permissive by default; `validate` and
//! `try_build` add an opt-in range check for callers that want one.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{Result, TokenError};
use crate::generator::{pair_count, TokenSet};
use crate::tokens::Variant;

/// Description of a domino set to generate.
///
/// ## Example
///
/// ```
/// use domino_tokens::core::SetConfig;
/// use domino_tokens::tokens::Variant;
///
/// let config = SetConfig::double_nine().with_variant(Variant::Doubled);
/// assert_eq!(config.expected_len(), 55);
///
/// let set = config.try_build().unwrap();
/// assert_eq!(set.len(), 55);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetConfig {
    /// Highest face value in the set (6 for double-six).
    pub max_face_value: i32,

    /// Scoring variant applied to every generated token.
    #[serde(default)]
    pub variant: Variant,
}

impl SetConfig {
    /// Largest maximum face value accepted by `validate`.
    pub const MAX_SUPPORTED_FACE: i32 = 20;

    /// Create a standard-variant config.
    #[must_use]
    pub const fn new(max_face_value: i32) -> Self {
        Self {
            max_face_value,
            variant: Variant::Standard,
        }
    }

    /// Double-six set: 28 tokens.
    #[must_use]
    pub const fn double_six() -> Self {
        Self::new(6)
    }

    /// Double-nine set: 55 tokens.
    #[must_use]
    pub const fn double_nine() -> Self {
        Self::new(9)
    }

    /// Double-twelve set: 91 tokens.
    #[must_use]
    pub const fn double_twelve() -> Self {
        Self::new(12)
    }

    /// Set the scoring variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Number of tokens this config generates.
    #[must_use]
    pub fn expected_len(&self) -> usize {
        pair_count(self.max_face_value)
    }

    /// Check that the maximum face value is in `0..=MAX_SUPPORTED_FACE`.
    pub fn validate(&self) -> Result<()> {
        if self.max_face_value < 0 {
            return Err(TokenError::NegativeMaxFace {
                max_face_value: self.max_face_value,
            });
        }
        if self.max_face_value > Self::MAX_SUPPORTED_FACE {
            return Err(TokenError::MaxFaceTooLarge {
                max_face_value: self.max_face_value,
                limit: Self::MAX_SUPPORTED_FACE,
            });
        }
        Ok(())
    }

    /// Generate the set without validation. Negative values give an empty set.
    #[must_use]
    pub fn build(&self) -> TokenSet {
        TokenSet::from_config(self)
    }

    /// Validate, then generate.
    pub fn try_build(&self) -> Result<TokenSet> {
        if let Err(err) = self.validate() {
            warn!(
                max_face_value = self.max_face_value,
                variant = %self.variant,
                "rejected set config: {}",
                err
            );
            return Err(err);
        }
        Ok(self.build())
    }
}

impl Default for SetConfig {
    fn default() -> Self {
        Self::double_six()
    }
}
