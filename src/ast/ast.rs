use std::slice::Iter;

use super::{
    expressions::{BinOp, CallExpr, RangeExpr, TernaryOp, UnOp},
    statements::{
        AssignmentStmt, ForStmt, FuncDefStmt, IfStmt, LetStmt, Param, ReturnStmt, StepStmt,
        WhileStmt,
    },
};

/// Every kind of node the parser can build.
///
/// Each node owns its children; the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Atoms
    Bool(bool),
    Identifier(String),
    Number(f64),
    String(String),
    Char(char),
    /// Placeholder for "no node produced". Never stored in a statement list.
    Eof,

    // Expressions
    BinOp(BinOp),
    UnOp(UnOp),
    Ternary(TernaryOp),
    Call(CallExpr),
    Range(RangeExpr),

    // Statements
    Semicolon,
    Break,
    Continue,
    Assignment(AssignmentStmt),
    Increment(StepStmt),
    Decrement(StepStmt),
    If(IfStmt),
    Param(Param),
    Let(LetStmt),
    FuncDef(FuncDefStmt),
    Return(ReturnStmt),
    For(ForStmt),
    While(WhileStmt),
}

impl Node {
    pub fn is_eof(&self) -> bool {
        matches!(self, Node::Eof)
    }

    /// Short name of the variant, for logs and test messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Bool(_) => "Bool",
            Node::Identifier(_) => "Identifier",
            Node::Number(_) => "Number",
            Node::String(_) => "String",
            Node::Char(_) => "Char",
            Node::Eof => "Eof",
            Node::BinOp(_) => "BinOp",
            Node::UnOp(_) => "UnOp",
            Node::Ternary(_) => "TernaryOp",
            Node::Call(_) => "Call",
            Node::Range(_) => "Range",
            Node::Semicolon => "Semicolon",
            Node::Break => "Break",
            Node::Continue => "Continue",
            Node::Assignment(_) => "Assignment",
            Node::Increment(_) => "Increment",
            Node::Decrement(_) => "Decrement",
            Node::If(_) => "If",
            Node::Param(_) => "Param",
            Node::Let(_) => "Let",
            Node::FuncDef(_) => "FuncDef",
            Node::Return(_) => "Return",
            Node::For(_) => "For",
            Node::While(_) => "While",
        }
    }
}

/// The tree root: top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Node>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Node> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Node;
    type IntoIter = Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
