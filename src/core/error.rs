//! Error type for the opt-in validated paths.
//!
//! Token construction, value computation, and set generation are total and
//! never produce these. Only parsing and `SetConfig::validate` do.

use thiserror::Error;

/// Errors raised by parsing and configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("max face value must not be negative, got {max_face_value}")]
    NegativeMaxFace { max_face_value: i32 },

    #[error("max face value {max_face_value} exceeds supported limit {limit}")]
    MaxFaceTooLarge { max_face_value: i32, limit: i32 },

    #[error("unknown token variant: {0:?}")]
    UnknownVariant(String),

    #[error("malformed faces, expected \"(left | right)\": {0:?}")]
    MalformedFaces(String),
}

pub type Result<T> = std::result::Result<T, TokenError>;
