//! Domino tokens.
//!
//! A `Token` pairs a scoring `Variant` with its faces. Faces are optional:
//! an unset token has none, and every face-dependent query returns `None`
//! for it instead of computing on placeholder numbers.

use serde::{Deserialize, Serialize};

use super::faces::Faces;
use super::variant::Variant;

/// A single domino piece tagged with its scoring variant.
///
/// Immutable once constructed.
///
/// ## Example
///
/// ```
/// use domino_tokens::tokens::{Token, Variant};
///
/// let token = Token::new(Variant::Doubled, 3, 4);
/// assert_eq!(token.value(), Some(14));
/// assert_eq!(token.to_string(), "(3 | 4)");
///
/// let unset = Token::unset(Variant::Doubled);
/// assert_eq!(unset.value(), None);
/// assert_eq!(unset.to_string(), "Doubled Value Domino Token");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    variant: Variant,
    faces: Option<Faces>,
}

impl Token {
    /// Create a token with concrete faces. No range validation.
    ///
    /// Negative faces are ordinary values here: `Token::new(v, -1, 3)`
    /// displays as `(-1 | 3)` and scores normally. Only `unset` tokens show
    /// the variant label.
    #[must_use]
    pub const fn new(variant: Variant, left: i32, right: i32) -> Self {
        Self::with_faces(variant, Faces::new(left, right))
    }

    /// Create a token from an existing face pair.
    #[must_use]
    pub const fn with_faces(variant: Variant, faces: Faces) -> Self {
        Self {
            variant,
            faces: Some(faces),
        }
    }

    /// Create a token with no faces.
    #[must_use]
    pub const fn unset(variant: Variant) -> Self {
        Self {
            variant,
            faces: None,
        }
    }

    /// Scoring variant of this token.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Face values, or `None` for an unset token.
    #[must_use]
    pub const fn faces(&self) -> Option<Faces> {
        self.faces
    }

    /// True for a token created with `unset`.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.faces.is_none()
    }

    /// Whether both faces match. `None` for an unset token.
    #[must_use]
    pub fn is_double(&self) -> Option<bool> {
        self.faces.map(Faces::is_double)
    }

    /// Point value under this token's variant. `None` for an unset token.
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        self.faces.map(|faces| self.variant.value(faces))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.faces {
            Some(faces) => write!(f, "{}", faces),
            None => f.write_str(self.variant.label()),
        }
    }
}
