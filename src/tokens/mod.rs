//! Token model: faces, scoring variants, and tokens.
//!
//! ## Key Types
//!
//! - `Faces`: The two numbers on a domino
//! - `Variant`: Scoring rule (standard, six-unvaluable, doubled)
//! - `Token`: A domino tagged with its variant, optionally unset

pub mod faces;
pub mod token;
pub mod variant;

pub use faces::Faces;
pub use token::Token;
pub use variant::{Variant, UNVALUABLE_FACE};
