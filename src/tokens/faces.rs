//! Face pairs - the two numbers printed on a domino.
//!
//! `Faces` is a plain value with no range checks. Negative or oversized
//! values are accepted and flow through value computation and display
//! unchanged.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::error::TokenError;

/// The two face values of a domino token.
///
/// ## Example
///
/// ```
/// use domino_tokens::tokens::Faces;
///
/// let faces = Faces::new(2, 3);
/// assert_eq!(faces.as_tuple(), (2, 3));
/// assert!(!faces.is_double());
/// assert_eq!(faces.to_string(), "(2 | 3)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Faces {
    left: i32,
    right: i32,
}

impl Faces {
    /// Create a face pair.
    #[must_use]
    pub const fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }

    /// Left face value.
    #[must_use]
    pub const fn left(self) -> i32 {
        self.left
    }

    /// Right face value.
    #[must_use]
    pub const fn right(self) -> i32 {
        self.right
    }

    /// Both faces as `(left, right)`.
    #[must_use]
    pub const fn as_tuple(self) -> (i32, i32) {
        (self.left, self.right)
    }

    /// True iff both faces are equal.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.left == self.right
    }

    /// Same pair with the smaller face on the left.
    ///
    /// A domino has no orientation, so `(4 | 1)` and `(1 | 4)` normalize to
    /// the same value.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.left <= self.right {
            self
        } else {
            Self::new(self.right, self.left)
        }
    }

    /// Does either face show `value`?
    #[must_use]
    pub const fn contains_face(self, value: i32) -> bool {
        self.left == value || self.right == value
    }

    /// Distinct face values on this token. A double has one suit.
    #[must_use]
    pub fn suits(self) -> SmallVec<[i32; 2]> {
        if self.is_double() {
            smallvec![self.left]
        } else {
            smallvec![self.left, self.right]
        }
    }
}

impl From<(i32, i32)> for Faces {
    fn from((left, right): (i32, i32)) -> Self {
        Self::new(left, right)
    }
}

impl std::fmt::Display for Faces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} | {})", self.left, self.right)
    }
}

impl FromStr for Faces {
    type Err = TokenError;

    /// Parse the display form `"(left | right)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TokenError::MalformedFaces(s.to_string());

        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;
        let (left, right) = inner.split_once('|').ok_or_else(malformed)?;

        let left = left.trim().parse::<i32>().map_err(|_| malformed())?;
        let right = right.trim().parse::<i32>().map_err(|_| malformed())?;
        Ok(Self::new(left, right))
    }
}
