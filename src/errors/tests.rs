//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '$' },
        Position::new(1, 10),
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::InconsistentIndentation { width: 2 },
        Position::new(42, 3),
    );

    assert_eq!(error.get_position().line, 42);
    assert_eq!(error.get_position().column, 3);
}

#[test]
fn test_inconsistent_indentation_error() {
    let error = Error::new(
        ErrorImpl::InconsistentIndentation { width: 2 },
        Position::new(3, 3),
    );

    assert_eq!(error.get_error_name(), "InconsistentIndentation");
    assert_eq!(error.to_string(), "inconsistent indentation on line 3");
    assert_eq!(error.get_kind(), &ErrorImpl::InconsistentIndentation { width: 2 });
}

#[test]
fn test_unexpected_character_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '$' },
        Position::new(2, 5),
    );

    assert_eq!(error.to_string(), "unexpected character '$' on line 2, column 5");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '?' },
        Position::new(1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_for_quote() {
    for quote in ['"', '\''] {
        let error = Error::new(
            ErrorImpl::UnexpectedCharacter { character: quote },
            Position::new(1, 1),
        );

        match error.get_tip() {
            ErrorTip::Suggestion(tip) => assert_eq!(tip, "unterminated string literal?"),
            _ => panic!("Expected suggestion tip"),
        }
    }
}

#[test]
fn test_error_tip_for_indentation() {
    let error = Error::new(
        ErrorImpl::InconsistentIndentation { width: 6 },
        Position::new(4, 7),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "dedent to width 6 does not match any outer indentation level"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_is_std_error() {
    fn assert_std_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_std_error::<Error>();
}
