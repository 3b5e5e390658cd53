//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. Expressions are parsed by precedence
//! climbing over a fixed cascade of levels; statements by recursive
//! descent over keyword-led and assignment-led forms.
//!
//! - Statement parsing (declarations, functions, control flow, assignments)
//! - Expression parsing (ternary, logical, bitwise, relational, arithmetic, postfix)
//! - Non-fatal error reporting: diagnostics are collected, never thrown
//!
//! Statement and operator dispatch go through lexeme lookup tables so the
//! precedence table stays data-driven.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
