//! Set generation.
//!
//! `generate_tokens` is the single entry point that turns a maximum face
//! value and a variant into the complete, non-redundant token set. Pair
//! enumeration lives in `pairs`; `TokenSet` wraps the result for callers
//! that want set-level queries.
//!
//! Generation is pure: identical arguments always produce element-wise
//! equal output, and a negative maximum produces an empty set.

pub mod pairs;
pub mod set;

pub use pairs::{face_pairs, pair_count, FacePairs};
pub use set::TokenSet;

use tracing::debug;

use crate::tokens::{Token, Variant};

/// Generate every token of `variant` for faces `0..=max_face_value`.
///
/// Order follows [`face_pairs`]. Returns `(N+1)(N+2)/2` tokens, or none for
/// a negative maximum.
///
/// ```
/// use domino_tokens::generator::generate_tokens;
/// use domino_tokens::tokens::Variant;
///
/// let set = generate_tokens(6, Variant::SixUnvaluable);
/// assert_eq!(set.len(), 28);
/// assert_eq!(set.iter().filter(|t| t.is_double() == Some(true)).count(), 7);
/// ```
#[must_use]
pub fn generate_tokens(max_face_value: i32, variant: Variant) -> Vec<Token> {
    let tokens: Vec<Token> = face_pairs(max_face_value)
        .map(|faces| Token::with_faces(variant, faces))
        .collect();

    debug!(
        max_face_value,
        %variant,
        count = tokens.len(),
        "generated token set"
    );
    tokens
}
