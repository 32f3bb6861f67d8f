//! Error types and error handling for the lexer.
//!
//! This module defines the errors a scan can fail with. It includes:
//!
//! - Error structures with source position information
//! - The two fatal lexical error variants
//! - Error names and suggestions used by the diagnostic renderer

pub mod errors;

#[cfg(test)]
mod tests;
