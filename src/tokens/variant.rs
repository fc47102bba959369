//! Scoring variants.
//!
//! The variant is the single axis along which tokens differ: it decides how
//! a face pair is scored and what an unset token displays as. The set is
//! closed, so every dispatch is an exhaustive `match`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::faces::Faces;
use super::token::Token;
use crate::core::error::TokenError;
use crate::generator;

/// Face value that scores nothing under `Variant::SixUnvaluable`.
pub const UNVALUABLE_FACE: i32 = 6;

/// Scoring rule attached to every token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Sum of both faces.
    #[default]
    Standard,
    /// Sum of both faces, where a face showing six counts as zero.
    SixUnvaluable,
    /// Twice the standard value.
    Doubled,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 3] = [Variant::Standard, Variant::SixUnvaluable, Variant::Doubled];

    /// Score a face pair under this variant.
    ///
    /// Total over all inputs, including negative faces. Computed in `i64`.
    ///
    /// ```
    /// use domino_tokens::tokens::{Faces, Variant};
    ///
    /// assert_eq!(Variant::Standard.value(Faces::new(3, 5)), 8);
    /// assert_eq!(Variant::SixUnvaluable.value(Faces::new(6, 2)), 2);
    /// assert_eq!(Variant::Doubled.value(Faces::new(3, 4)), 14);
    /// ```
    #[must_use]
    pub fn value(self, faces: Faces) -> i64 {
        match self {
            Variant::Standard => i64::from(faces.left()) + i64::from(faces.right()),
            Variant::SixUnvaluable => [faces.left(), faces.right()]
                .into_iter()
                .filter(|&face| face != UNVALUABLE_FACE)
                .map(i64::from)
                .sum(),
            Variant::Doubled => 2 * Variant::Standard.value(faces),
        }
    }

    /// Placeholder shown by a token of this variant that has no faces.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Variant::Standard => "Domino Token",
            Variant::SixUnvaluable => "Six Unvaluable Domino Token",
            Variant::Doubled => "Doubled Value Domino Token",
        }
    }

    /// Short kebab-case name, as used by `Display`, `FromStr` and serde.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::SixUnvaluable => "six-unvaluable",
            Variant::Doubled => "doubled",
        }
    }

    /// Generate the full token set of this variant.
    ///
    /// Shorthand for [`generator::generate_tokens`].
    #[must_use]
    pub fn generate_tokens(self, max_face_value: i32) -> Vec<Token> {
        generator::generate_tokens(max_face_value, self)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TokenError::UnknownVariant(s.to_string()))
    }
}
