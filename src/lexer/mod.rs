//! Lexical analysis module for the front end.
//!
//! This module contains the tokenizer that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Character-level access to the source through a cursor
//! - Classification of identifiers, operator keywords, literals and symbols
//! - Line/column tracking for diagnostics
//! - Silently skipping characters that belong to no token class

pub mod cursor;
pub mod lexer;
pub mod tokens;
