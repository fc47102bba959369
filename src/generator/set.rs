//! Generated token collections.
//!
//! `TokenSet` holds the ordered output of the generator together with the
//! parameters that produced it. Storage is an `im::Vector`, so cloning a set
//! to hand it to another owner (a boneyard, a player's hand) is O(1).

use rustc_hash::FxHashMap;

use super::generate_tokens;
use crate::core::config::SetConfig;
use crate::tokens::{Faces, Token, Variant};

/// The complete token set for one maximum face value and variant.
///
/// ## Example
///
/// ```
/// use domino_tokens::generator::TokenSet;
/// use domino_tokens::tokens::{Faces, Variant};
///
/// let set = TokenSet::generate(6, Variant::Standard);
/// assert_eq!(set.len(), 28);
/// assert!(set.contains(Faces::new(5, 2)));
/// assert_eq!(set.doubles().count(), 7);
/// assert_eq!(set.total_value(), 168);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenSet {
    max_face_value: i32,
    variant: Variant,
    tokens: im::Vector<Token>,
}

impl TokenSet {
    /// Generate the set for `max_face_value` and `variant`.
    #[must_use]
    pub fn generate(max_face_value: i32, variant: Variant) -> Self {
        Self {
            max_face_value,
            variant,
            tokens: generate_tokens(max_face_value, variant).into_iter().collect(),
        }
    }

    /// Generate the set described by a config. No validation is applied.
    #[must_use]
    pub fn from_config(config: &SetConfig) -> Self {
        Self::generate(config.max_face_value, config.variant)
    }

    /// Maximum face value the set was generated for.
    #[must_use]
    pub fn max_face_value(&self) -> i32 {
        self.max_face_value
    }

    /// Scoring variant shared by every token.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the set has no tokens (negative maximum).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index` in generation order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Iterate tokens in generation order.
    pub fn iter(&self) -> im::vector::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Copy the tokens out into a `Vec`.
    #[must_use]
    pub fn tokens(&self) -> Vec<Token> {
        self.tokens.iter().copied().collect()
    }

    /// Is this face pair in the set? Orientation is ignored.
    #[must_use]
    pub fn contains(&self, faces: Faces) -> bool {
        let wanted = faces.normalized();
        self.faces().any(|f| f.normalized() == wanted)
    }

    /// Iterate the doubles, in generation order.
    pub fn doubles(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().filter(|t| t.is_double() == Some(true))
    }

    /// Sum of all token values under the set's variant.
    #[must_use]
    pub fn total_value(&self) -> i64 {
        self.faces().map(|f| self.variant.value(f)).sum()
    }

    /// For each face value, the number of tokens showing it.
    ///
    /// A double is counted once for its suit. In a full set every suit
    /// appears on `N + 2` tokens.
    #[must_use]
    pub fn suit_counts(&self) -> FxHashMap<i32, usize> {
        let mut counts = FxHashMap::default();
        for faces in self.faces() {
            for suit in faces.suits() {
                *counts.entry(suit).or_insert(0) += 1;
            }
        }
        counts
    }

    fn faces(&self) -> impl Iterator<Item = Faces> + '_ {
        self.tokens.iter().filter_map(Token::faces)
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a Token;
    type IntoIter = im::vector::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
