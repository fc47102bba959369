//! # domino-tokens
//!
//! Value objects for domino tokens, their scoring variants, and full-set
//! generation.
//!
//! ## Design Principles
//!
//! 1. **Closed Variants**: Scoring rules are a fixed enum (`Variant`) matched
//!    exhaustively. A token carries its variant for life.
//!
//! 2. **Explicit Absence**: A token without faces is `Token::unset`, and
//!    face-dependent queries return `Option` instead of scoring placeholders.
//!
//! 3. **Permissive Core**: Construction, scoring and generation are total.
//!    Validation is opt-in through `SetConfig::validate`.
//!
//! ## Modules
//!
//! - `tokens`: Faces, variants, tokens
//! - `generator`: Canonical pair enumeration, set generation, `TokenSet`
//! - `core`: Set configuration and errors
//!
//! ## Example
//!
//! ```
//! use domino_tokens::{generate_tokens, Variant};
//!
//! let tokens = generate_tokens(2, Variant::Standard);
//! let shown: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
//! assert_eq!(
//!     shown,
//!     ["(0 | 0)", "(0 | 1)", "(0 | 2)", "(1 | 1)", "(1 | 2)", "(2 | 2)"]
//! );
//! ```

pub mod core;
pub mod generator;
pub mod tokens;

// Re-export commonly used types
pub use crate::core::{Result, SetConfig, TokenError};

pub use crate::generator::{face_pairs, generate_tokens, pair_count, FacePairs, TokenSet};

pub use crate::tokens::{Faces, Token, Variant};
