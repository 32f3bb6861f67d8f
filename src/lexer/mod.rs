//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code of a
//! Python-like language into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, numbers, strings, operators and
//!   delimiters
//! - Significant indentation, synthesized as INDENT / DEDENT tokens
//! - Token line/column tracking with tab expansion
//! - Comments and whitespace handling

pub mod column;
pub mod indent;
pub mod lexer;
pub mod tokens;
