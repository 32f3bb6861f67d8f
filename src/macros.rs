//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_LITERAL_HANDLER!` - Creates a pattern handler for literals that need
//!   no post-processing
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's value (anything convertible into a TokenValue)
/// * `$line` - The 1-based line the token starts on
/// * `$column` - The 1-based, tab-expanded column the token starts at
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42", 1, 5);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr, $column:expr) => {
        Token {
            kind: $kind,
            value: TokenValue::from($value),
            line: $line,
            column: $column,
        }
    };
}

/// Creates a pattern handler that emits the matched lexeme as a single token
/// of the given kind and advances past it.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^[0-9]+").unwrap(),
///     handler: MK_LITERAL_HANDLER!(TokenKind::Number),
/// }
/// ```
#[macro_export]
macro_rules! MK_LITERAL_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, lexeme: String| {
            lexer.push_lexeme($kind, lexeme);
        }
    };
}
