use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{
        ast::Node,
        expressions::{BinaryOperator, UnaryOperator},
    },
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::*};

/// Binary precedence levels, loosest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Or,
    And,
    Comparison,
    BitOr,
    BitXor,
    BitAnd,
    Shift,
    Additive,
    Multiplicative,
    Power,
}

impl BindingPower {
    /// The next tighter binary level, if operands of this level are themselves
    /// binary expressions. `And` is followed by `!` before `Comparison`;
    /// `Multiplicative` and `Power` operands are unary factors.
    pub fn tighter(self) -> Option<BindingPower> {
        match self {
            BindingPower::Or => Some(BindingPower::And),
            BindingPower::And => Some(BindingPower::Comparison),
            BindingPower::Comparison => Some(BindingPower::BitOr),
            BindingPower::BitOr => Some(BindingPower::BitXor),
            BindingPower::BitXor => Some(BindingPower::BitAnd),
            BindingPower::BitAnd => Some(BindingPower::Shift),
            BindingPower::Shift => Some(BindingPower::Additive),
            BindingPower::Additive => Some(BindingPower::Multiplicative),
            BindingPower::Multiplicative | BindingPower::Power => None,
        }
    }
}

pub type StmtHandler = fn(&mut Parser) -> Option<Node>;

lazy_static! {
    /// Binary operator lexeme -> (level, operator).
    pub static ref BINARY_LOOKUP: HashMap<&'static str, (BindingPower, BinaryOperator)> = {
        let mut map = HashMap::new();
        map.insert("||", (BindingPower::Or, BinaryOperator::Or));
        map.insert("&&", (BindingPower::And, BinaryOperator::And));

        // Comparison
        map.insert("<=", (BindingPower::Comparison, BinaryOperator::LessEquals));
        map.insert(">=", (BindingPower::Comparison, BinaryOperator::GreaterEquals));
        map.insert("!=", (BindingPower::Comparison, BinaryOperator::NotEquals));
        map.insert("==", (BindingPower::Comparison, BinaryOperator::Equals));
        map.insert("is", (BindingPower::Comparison, BinaryOperator::Is));
        map.insert("has", (BindingPower::Comparison, BinaryOperator::Has));
        map.insert(">", (BindingPower::Comparison, BinaryOperator::Greater));
        map.insert("<", (BindingPower::Comparison, BinaryOperator::Less));

        // Bitwise
        map.insert("|", (BindingPower::BitOr, BinaryOperator::BitOr));
        map.insert("^", (BindingPower::BitXor, BinaryOperator::BitXor));
        map.insert("&", (BindingPower::BitAnd, BinaryOperator::BitAnd));
        map.insert(">>", (BindingPower::Shift, BinaryOperator::ShiftRight));
        map.insert("<<", (BindingPower::Shift, BinaryOperator::ShiftLeft));

        // Additive and multiplicative
        map.insert("+", (BindingPower::Additive, BinaryOperator::Add));
        map.insert("-", (BindingPower::Additive, BinaryOperator::Subtract));
        map.insert("*", (BindingPower::Multiplicative, BinaryOperator::Multiply));
        map.insert("/", (BindingPower::Multiplicative, BinaryOperator::Divide));
        map.insert("%", (BindingPower::Multiplicative, BinaryOperator::Modulo));

        map.insert("**", (BindingPower::Power, BinaryOperator::Power));
        map
    };

    /// Prefix operators of the `factor` rule. `!` lives one level up, on `notTest`.
    pub static ref FACTOR_PREFIX_LOOKUP: HashMap<&'static str, UnaryOperator> = {
        let mut map = HashMap::new();
        map.insert("+", UnaryOperator::Plus);
        map.insert("-", UnaryOperator::Minus);
        map.insert("~", UnaryOperator::BitNot);
        map
    };

    /// Compound assignment lexeme -> operator applied before assigning.
    pub static ref COMPOUND_ASSIGNMENT_LOOKUP: HashMap<&'static str, BinaryOperator> = {
        let mut map = HashMap::new();
        map.insert("+=", BinaryOperator::Add);
        map.insert("-=", BinaryOperator::Subtract);
        map.insert("*=", BinaryOperator::Multiply);
        map.insert("/=", BinaryOperator::Divide);
        map.insert("%=", BinaryOperator::Modulo);
        map.insert("&=", BinaryOperator::BitAnd);
        map.insert("|=", BinaryOperator::BitOr);
        map.insert("^=", BinaryOperator::BitXor);
        map.insert("<<=", BinaryOperator::ShiftLeft);
        map.insert(">>=", BinaryOperator::ShiftRight);
        map.insert("**=", BinaryOperator::Power);
        map
    };

    /// Statement-leading lexeme -> (token kind it must have, handler).
    /// Anything not listed falls through to the expression statement.
    pub static ref STMT_LOOKUP: HashMap<&'static str, (TokenKind, StmtHandler)> = {
        let mut map: HashMap<&'static str, (TokenKind, StmtHandler)> = HashMap::new();
        map.insert(";", (TokenKind::Semicolon, parse_empty_stmt));
        map.insert("break", (TokenKind::Identifier, parse_break_stmt));
        map.insert("continue", (TokenKind::Identifier, parse_continue_stmt));
        map.insert("return", (TokenKind::Identifier, parse_return_stmt));
        map.insert("++", (TokenKind::Other, parse_prefix_step_stmt));
        map.insert("--", (TokenKind::Other, parse_prefix_step_stmt));
        map.insert("if", (TokenKind::Identifier, parse_if_stmt));
        map.insert("pub", (TokenKind::Identifier, parse_pub_stmt));
        map.insert("let", (TokenKind::Identifier, parse_let_stmt));
        map.insert("const", (TokenKind::Identifier, parse_let_stmt));
        map.insert("for", (TokenKind::Identifier, parse_for_stmt));
        map.insert("while", (TokenKind::Identifier, parse_while_stmt));
        map.insert("func", (TokenKind::Identifier, parse_func_def_stmt));
        map
    };
}

/// Returns the statement handler for the current token, if it starts a
/// keyword- or symbol-led statement.
pub fn stmt_handler(parser: &Parser) -> Option<StmtHandler> {
    let token = parser.current_token();
    STMT_LOOKUP
        .get(token.lexeme.as_str())
        .filter(|(kind, _)| *kind == token.kind)
        .map(|(_, handler)| *handler)
}
