use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InconsistentIndentation { .. } => "InconsistentIndentation",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InconsistentIndentation { width } => ErrorTip::Suggestion(format!(
                "dedent to width {} does not match any outer indentation level",
                width
            )),
            ErrorImpl::UnexpectedCharacter { character: '"' | '\'' } => {
                ErrorTip::Suggestion(String::from("unterminated string literal?"))
            }
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.internal_error {
            ErrorImpl::InconsistentIndentation { .. } => {
                write!(f, "{} on line {}", self.internal_error, self.position.line)
            }
            ErrorImpl::UnexpectedCharacter { .. } => write!(
                f,
                "{} on line {}, column {}",
                self.internal_error, self.position.line, self.position.column
            ),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("inconsistent indentation")]
    InconsistentIndentation { width: usize },
    #[error("unexpected character {character:?}")]
    UnexpectedCharacter { character: char },
}
