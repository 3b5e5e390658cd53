use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A syntax diagnostic. Never fatal: the parser records it and keeps going.
#[derive(Debug, Clone, PartialEq)]
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

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedSymbol { .. } => "UnexpectedSymbol",
            ErrorImpl::ExpectedVariableList => "ExpectedVariableList",
            ErrorImpl::UnmatchedClosingBrace { .. } => "UnmatchedClosingBrace",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedSymbol { lexeme, expected } if lexeme.is_empty() => {
                ErrorTip::Suggestion(format!("Reached end of input, expected a {}", expected))
            }
            ErrorImpl::UnexpectedSymbol { lexeme, expected } => ErrorTip::Suggestion(format!(
                "Unexpected symbol `{}`, expected a {}",
                lexeme, expected
            )),
            ErrorImpl::ExpectedVariableList => ErrorTip::Suggestion(String::from(
                "`let` and `const` need at least one variable name",
            )),
            ErrorImpl::UnmatchedClosingBrace { .. } => ErrorTip::None,
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Split the construct up, at most {} levels of nesting are parsed",
                limit
            )),
        }
    }
}

/// `ERROR(<line>:<col>): <message>`
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ERROR({}): {}", self.position, self.internal_error)
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unexpected symbol \"{lexeme}\". Expected \"{expected}\".")]
    UnexpectedSymbol { lexeme: String, expected: TokenKind },
    #[error("Expected variable list.")]
    ExpectedVariableList,
    #[error("Unexpected symbol \"{lexeme}\". No open block to close.")]
    UnmatchedClosingBrace { lexeme: String },
    #[error("Nesting deeper than {limit} levels.")]
    NestingTooDeep { limit: usize },
}
