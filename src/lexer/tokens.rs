use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    /// Words that lex as operators rather than identifiers.
    pub static ref OPERATOR_KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("has");
        set.insert("is");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    End,
    Other,
    Identifier,
    String,
    Char,
    Number,
    Semicolon,
}

/// The label used in "Expected ..." diagnostics.
impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TokenKind::End => "EOF",
            TokenKind::Other => "Symbol",
            TokenKind::Identifier => "Identifier",
            TokenKind::String => "String",
            TokenKind::Char => "Character",
            TokenKind::Number => "Number",
            TokenKind::Semicolon => "Semicolon",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Str(String),
    Char(char),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
    pub literal: Option<Literal>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.kind, &self.literal) {
            (TokenKind::End, _) => write!(f, "END"),
            (TokenKind::Identifier, _) => write!(f, "ID({})", self.lexeme),
            (TokenKind::Number, Some(Literal::Number(value))) => write!(f, "NUM({})", value),
            (TokenKind::Char, Some(Literal::Char(value))) => write!(f, "CHR('{}')", value),
            (TokenKind::String, Some(Literal::Str(value))) => write!(f, "STR(\"{}\")", value),
            (TokenKind::Semicolon, _) => write!(f, ";"),
            _ => write!(f, "{}", self.lexeme),
        }
    }
}

impl Token {
    pub fn number_value(&self) -> Option<f64> {
        match self.literal {
            Some(Literal::Number(value)) => Some(value),
            _ => None,
        }
    }

    pub fn string_value(&self) -> Option<&str> {
        match &self.literal {
            Some(Literal::Str(value)) => Some(value),
            _ => None,
        }
    }

    pub fn char_value(&self) -> Option<char> {
        match self.literal {
            Some(Literal::Char(value)) => Some(value),
            _ => None,
        }
    }

    /// True for an `Other` token whose lexeme is exactly `symbol`.
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Other && self.lexeme == symbol
    }

    /// True for an `Identifier` token whose lexeme is exactly `word`.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Identifier && self.lexeme == word
    }
}
