//! Token set generation tests.
//!
//! These tests cover the observable contract of the generator:
//! - Set size and canonical order
//! - Doubles
//! - Per-variant scoring of generated tokens
//! - Display of set and unset tokens
//! - Config builds and their log output

use std::io;
use std::sync::{Arc, Mutex};

use domino_tokens::core::SetConfig;
use domino_tokens::generator::{generate_tokens, TokenSet};
use domino_tokens::tokens::{Faces, Token, Variant};

fn face_tuples(tokens: &[Token]) -> Vec<(i32, i32)> {
    tokens
        .iter()
        .map(|t| t.faces().expect("generated tokens have faces").as_tuple())
        .collect()
}

// =============================================================================
// Size and Order
// =============================================================================

#[test]
fn test_conventional_set_sizes() {
    for (max, expected) in [(6, 28), (9, 55), (12, 91)] {
        for variant in Variant::ALL {
            assert_eq!(generate_tokens(max, variant).len(), expected);
        }
    }
}

#[test]
fn test_canonical_order_for_two() {
    let tokens = generate_tokens(2, Variant::SixUnvaluable);
    assert_eq!(
        face_tuples(&tokens),
        vec![(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)]
    );
}

#[test]
fn test_first_and_last_of_double_six() {
    let tokens = generate_tokens(6, Variant::Standard);
    assert_eq!(tokens.first(), Some(&Token::new(Variant::Standard, 0, 0)));
    assert_eq!(tokens.last(), Some(&Token::new(Variant::Standard, 6, 6)));
    // Row for left face 0 has seven tokens, so (1 | 1) follows (0 | 6).
    assert_eq!(tokens[6].to_string(), "(0 | 6)");
    assert_eq!(tokens[7].to_string(), "(1 | 1)");
}

#[test]
fn test_negative_max_is_empty_not_error() {
    for variant in Variant::ALL {
        assert!(generate_tokens(-1, variant).is_empty());
        assert!(generate_tokens(i32::MIN, variant).is_empty());
    }
}

#[test]
fn test_generation_is_repeatable() {
    let first = generate_tokens(9, Variant::Doubled);
    let second = generate_tokens(9, Variant::Doubled);
    assert_eq!(first, second);
}

// =============================================================================
// Doubles
// =============================================================================

#[test]
fn test_doubles_for_two() {
    let tokens = generate_tokens(2, Variant::Standard);
    let doubles: Vec<_> = tokens
        .into_iter()
        .filter(|t| t.is_double() == Some(true))
        .collect();
    assert_eq!(face_tuples(&doubles), vec![(0, 0), (1, 1), (2, 2)]);
}

#[test]
fn test_double_count_is_max_plus_one() {
    for max in 0..=12 {
        let set = TokenSet::generate(max, Variant::Standard);
        assert_eq!(set.doubles().count(), (max + 1) as usize);
    }
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_generated_tokens_score_with_their_variant() {
    let standard = generate_tokens(6, Variant::Standard);
    let six = generate_tokens(6, Variant::SixUnvaluable);
    let doubled = generate_tokens(6, Variant::Doubled);

    for ((s, u), d) in standard.iter().zip(&six).zip(&doubled) {
        let faces = s.faces().expect("faces");
        assert_eq!(s.value(), Some(i64::from(faces.left() + faces.right())));
        assert_eq!(d.value().zip(s.value()).map(|(d, s)| d - 2 * s), Some(0));
        if !faces.contains_face(6) {
            assert_eq!(u.value(), s.value());
        }
    }

    let double_six = six.last().expect("double six is last");
    assert_eq!(double_six.value(), Some(0));
}

#[test]
fn test_spec_scoring_examples() {
    assert_eq!(Token::new(Variant::Standard, 3, 5).value(), Some(8));
    assert_eq!(Token::new(Variant::SixUnvaluable, 6, 6).value(), Some(0));
    assert_eq!(Token::new(Variant::SixUnvaluable, 6, 2).value(), Some(2));
    assert_eq!(Token::new(Variant::SixUnvaluable, 6, 0).value(), Some(0));
    assert_eq!(Token::new(Variant::Doubled, 3, 4).value(), Some(14));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn test_display_set_and_unset() {
    for variant in Variant::ALL {
        assert_eq!(Token::new(variant, 2, 3).to_string(), "(2 | 3)");
        assert_eq!(Token::unset(variant).to_string(), variant.label());
    }
}

#[test]
fn test_display_parses_back_to_faces() {
    for token in generate_tokens(6, Variant::Doubled) {
        let parsed: Faces = token.to_string().parse().expect("display form parses");
        assert_eq!(Some(parsed), token.faces());
    }
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_config_builds_matching_set() {
    let config = SetConfig::double_nine().with_variant(Variant::SixUnvaluable);
    let set = config.try_build().expect("double-nine is valid");

    assert_eq!(set.len(), config.expected_len());
    assert_eq!(set.tokens(), generate_tokens(9, Variant::SixUnvaluable));
}

/// Log sink shared between the subscriber and the test body.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn take(&self) -> String {
        let mut buf = self.0.lock().expect("log buffer poisoned");
        String::from_utf8(std::mem::take(&mut *buf)).expect("logs are utf-8")
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_config_builds_emit_logs() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert!(SetConfig::new(-4).try_build().is_err());
        let out = logs.take();
        assert!(out.contains("WARN"), "{}", out);
        assert!(out.contains("rejected set config"), "{}", out);
        assert!(out.contains("max_face_value=-4"), "{}", out);
        assert!(!out.contains("generated token set"), "{}", out);

        assert!(SetConfig::new(99).try_build().is_err());
        let out = logs.take();
        assert!(out.contains("exceeds supported limit 20"), "{}", out);

        assert_eq!(SetConfig::new(3).try_build().map(|s| s.len()), Ok(10));
        let out = logs.take();
        assert!(out.contains("DEBUG"), "{}", out);
        assert!(out.contains("generated token set"), "{}", out);
        assert!(out.contains("max_face_value=3"), "{}", out);
        assert!(out.contains("count=10"), "{}", out);
        assert!(!out.contains("rejected set config"), "{}", out);
    });
}
