use std::fmt::Display;

use super::ast::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,

    // Bitwise
    ShiftLeft,
    ShiftRight,
    BitAnd,
    BitXor,
    BitOr,

    // Comparison
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,
    NotEquals,
    Is,
    Has,

    // Logical
    And,
    Or,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Power => "**",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitXor => "^",
            BinaryOperator::BitOr => "|",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEquals => ">=",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::Is => "is",
            BinaryOperator::Has => "has",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Plus,
    Minus,
    BitNot,
    Not,
}

impl UnaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::BitNot => "~",
            UnaryOperator::Not => "!",
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary Operation
/// `left op right` at any binary precedence level, including `**`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinOp {
    pub left: Box<Node>,
    pub right: Box<Node>,
    pub op: BinaryOperator,
}

impl BinOp {
    pub fn new(left: Node, right: Node, op: BinaryOperator) -> Self {
        BinOp {
            left: Box::new(left),
            right: Box::new(right),
            op,
        }
    }
}

/// Unary Operation
#[derive(Debug, Clone, PartialEq)]
pub struct UnOp {
    pub operand: Box<Node>,
    pub op: UnaryOperator,
}

impl UnOp {
    pub fn new(operand: Node, op: UnaryOperator) -> Self {
        UnOp {
            operand: Box::new(operand),
            op,
        }
    }
}

/// Ternary Operation
/// `cond ? then_branch : else_branch`
#[derive(Debug, Clone, PartialEq)]
pub struct TernaryOp {
    pub cond: Box<Node>,
    pub then_branch: Box<Node>,
    pub else_branch: Box<Node>,
}

/// Call Expression
/// Arguments are kept in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Node>,
    pub args: Vec<Node>,
}

/// `from .. to`, only produced as the iterable of a `for` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeExpr {
    pub from: Box<Node>,
    pub to: Box<Node>,
}
