use super::ast::Node;

/// `target = value;`. Compound forms arrive here desugared:
/// `x += 1;` is stored as `x = x + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: Box<Node>,
    pub value: Box<Node>,
}

/// Payload of `Increment` and `Decrement`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepStmt {
    pub operand: Box<Node>,
    pub prefix: bool,
}

/// An `if` block. The same shape is reused for each `else if` arm and for
/// the trailing `else`, which is the only arm without a condition.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub cond: Option<Box<Node>>,
    pub body: Vec<Node>,
    pub else_ifs: Vec<IfStmt>,
    pub else_body: Option<Box<IfStmt>>,
}

impl IfStmt {
    pub fn new(cond: Option<Node>, body: Vec<Node>) -> Self {
        IfStmt {
            cond: cond.map(Box::new),
            body,
            else_ifs: vec![],
            else_body: None,
        }
    }
}

/// `name [= default]`
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub default: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub bindings: Vec<Param>,
    pub is_public: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDefStmt {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Vec<Node>,
    pub is_public: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Box<Node>>,
}

/// `for a, b in iterable { ... }`. Each loop variable is a `Node::Param`
/// without a default; `iterable` is a `Node::Range` when written `x .. y`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub loop_vars: Vec<Node>,
    pub iterable: Box<Node>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub cond: Box<Node>,
    pub body: Vec<Node>,
}
