//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Variable and function declarations
//! - Expressions and the per-level single operator application
//! - Control flow statements
//! - Assignments, compound assignments and steps
//! - Diagnostics and recovery

use crate::{
    ast::{
        ast::Node,
        expressions::{BinOp, BinaryOperator, CallExpr, RangeExpr, TernaryOp, UnOp, UnaryOperator},
        statements::{
            AssignmentStmt, ForStmt, FuncDefStmt, IfStmt, LetStmt, Param, ReturnStmt, StepStmt,
            WhileStmt,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
    MK_TOKEN,
};

use super::{
    lookups::{BindingPower, BINARY_LOOKUP},
    parser::{parse, parse_source, Parser, MAX_NESTING},
};

fn parse_ok(source: &str) -> Vec<Node> {
    let result = parse_source(source);
    assert!(
        result.is_ok(),
        "unexpected diagnostics for {:?}: {:?}",
        source,
        result.diagnostics
    );
    result.program.statements
}

fn token(kind: TokenKind, lexeme: &str) -> Token {
    MK_TOKEN!(kind, lexeme.to_string(), 0, 0, None)
}

fn id(name: &str) -> Node {
    Node::Identifier(name.to_string())
}

fn num(value: f64) -> Node {
    Node::Number(value)
}

fn bin(left: Node, right: Node, op: BinaryOperator) -> Node {
    Node::BinOp(BinOp::new(left, right, op))
}

fn param(name: &str, default: Option<Node>) -> Param {
    Param {
        name: name.to_string(),
        default: default.map(Box::new),
    }
}

#[test]
fn test_parse_let_with_string_default() {
    let statements = parse_ok("let foo = \"x\";");

    assert_eq!(
        statements,
        vec![Node::Let(LetStmt {
            bindings: vec![param("foo", Some(Node::String("x".to_string())))],
            is_public: false,
        })]
    );
}

#[test]
fn test_parse_let_binding_list() {
    let statements = parse_ok("pub const a = 1, b;");

    assert_eq!(
        statements,
        vec![Node::Let(LetStmt {
            bindings: vec![param("a", Some(num(1.0))), param("b", None)],
            is_public: true,
        })]
    );
}

#[test]
fn test_parse_function_definition() {
    let statements = parse_ok("func add(a, b) { return a + b; }");

    assert_eq!(
        statements,
        vec![Node::FuncDef(FuncDefStmt {
            name: "add".to_string(),
            params: vec![param("a", None), param("b", None)],
            body: vec![Node::Return(ReturnStmt {
                value: Some(Box::new(bin(id("a"), id("b"), BinaryOperator::Add))),
            })],
            is_public: false,
        })]
    );
}

#[test]
fn test_parse_public_functions() {
    let statements = parse_ok("pub func f() {} func pub g() {}");

    assert_eq!(statements.len(), 2);
    for (stmt, expected) in statements.iter().zip(["f", "g"]) {
        match stmt {
            Node::FuncDef(func) => {
                assert_eq!(func.name, expected);
                assert!(func.is_public);
                assert!(func.params.is_empty());
                assert!(func.body.is_empty());
            }
            other => panic!("expected FuncDef, got {}", other.kind_name()),
        }
    }
}

#[test]
fn test_parse_bare_return() {
    let statements = parse_ok("func f() { return; }");

    match &statements[0] {
        Node::FuncDef(func) => {
            assert_eq!(func.body, vec![Node::Return(ReturnStmt { value: None })]);
        }
        other => panic!("expected FuncDef, got {}", other.kind_name()),
    }
}

#[test]
fn test_parse_call_statement() {
    let statements = parse_ok("add(2.5, 10);");

    assert_eq!(
        statements,
        vec![Node::Call(CallExpr {
            callee: Box::new(id("add")),
            args: vec![num(2.5), num(10.0)],
        })]
    );
}

#[test]
fn test_parse_call_without_arguments() {
    let statements = parse_ok("f();");

    assert_eq!(
        statements,
        vec![Node::Call(CallExpr {
            callee: Box::new(id("f")),
            args: vec![],
        })]
    );
}

#[test]
fn chained_operators_stop_after_one_application() {
    // Each level applies its operator once; the trailing `+ c` becomes a
    // second statement holding a unary plus.
    let statements = parse_ok("a + b + c;");

    assert_eq!(
        statements,
        vec![
            bin(id("a"), id("b"), BinaryOperator::Add),
            Node::UnOp(UnOp::new(id("c"), UnaryOperator::Plus)),
        ]
    );

    let statements = parse_ok("a - b - c;");
    assert_eq!(
        statements,
        vec![
            bin(id("a"), id("b"), BinaryOperator::Subtract),
            Node::UnOp(UnOp::new(id("c"), UnaryOperator::Minus)),
        ]
    );
}

#[test]
fn test_parse_precedence_levels() {
    let statements = parse_ok("x = 1 + 2 * 3;");

    assert_eq!(
        statements,
        vec![Node::Assignment(AssignmentStmt {
            target: Box::new(id("x")),
            value: Box::new(bin(
                num(1.0),
                bin(num(2.0), num(3.0), BinaryOperator::Multiply),
                BinaryOperator::Add
            )),
        })]
    );
}

#[test]
fn test_parse_parenthesized_expression() {
    let statements = parse_ok("(a + b) * c;");

    assert_eq!(
        statements,
        vec![bin(
            bin(id("a"), id("b"), BinaryOperator::Add),
            id("c"),
            BinaryOperator::Multiply
        )]
    );
}

#[test]
fn test_parse_logical_operators() {
    let statements = parse_ok("a || b && !c;");

    assert_eq!(
        statements,
        vec![bin(
            id("a"),
            bin(
                id("b"),
                Node::UnOp(UnOp::new(id("c"), UnaryOperator::Not)),
                BinaryOperator::And
            ),
            BinaryOperator::Or
        )]
    );
}

#[test]
fn test_parse_operator_keywords() {
    assert_eq!(
        parse_ok("x is y;"),
        vec![bin(id("x"), id("y"), BinaryOperator::Is)]
    );
    assert_eq!(
        parse_ok("list has item;"),
        vec![bin(id("list"), id("item"), BinaryOperator::Has)]
    );
}

#[test]
fn test_parse_bitwise_and_shift() {
    assert_eq!(
        parse_ok("a | b & c;"),
        vec![bin(
            id("a"),
            bin(id("b"), id("c"), BinaryOperator::BitAnd),
            BinaryOperator::BitOr
        )]
    );
    assert_eq!(
        parse_ok("a << 2;"),
        vec![bin(id("a"), num(2.0), BinaryOperator::ShiftLeft)]
    );
}

#[test]
fn test_parse_power_binds_tighter_than_unary() {
    let statements = parse_ok("-x ** 2;");

    assert_eq!(
        statements,
        vec![Node::UnOp(UnOp::new(
            bin(id("x"), num(2.0), BinaryOperator::Power),
            UnaryOperator::Minus
        ))]
    );
}

#[test]
fn test_parse_ternary() {
    let statements = parse_ok("a ? b : c;");

    assert_eq!(
        statements,
        vec![Node::Ternary(TernaryOp {
            cond: Box::new(id("a")),
            then_branch: Box::new(id("b")),
            else_branch: Box::new(id("c")),
        })]
    );
}

#[test]
fn test_parse_bool_atoms() {
    assert_eq!(parse_ok("true;"), vec![Node::Bool(true)]);
    assert_eq!(parse_ok("false;"), vec![Node::Bool(false)]);
}

#[test]
fn test_index_keeps_only_inner_expression() {
    assert_eq!(parse_ok("a[b];"), vec![id("b")]);
}

#[test]
fn test_member_access_keeps_trailing_atom() {
    let tokens = vec![
        token(TokenKind::Identifier, "a"),
        token(TokenKind::Other, "."),
        token(TokenKind::Identifier, "x"),
        token(TokenKind::Identifier, "y"),
        token(TokenKind::Semicolon, ";"),
    ];
    let result = parse(tokens);

    assert!(result.is_ok());
    assert_eq!(result.program.statements, vec![id("y")]);
}

#[test]
fn test_parse_if_else_chain() {
    let statements = parse_ok("if a { b; } else if c { d; } else { e; }");

    let mut expected = IfStmt::new(Some(id("a")), vec![id("b")]);
    expected.else_ifs = vec![IfStmt::new(Some(id("c")), vec![id("d")])];
    expected.else_body = Some(Box::new(IfStmt::new(None, vec![id("e")])));

    assert_eq!(statements, vec![Node::If(expected)]);
}

#[test]
fn test_parse_if_without_condition() {
    let statements = parse_ok("if { x; }");

    assert_eq!(
        statements,
        vec![Node::If(IfStmt::new(None, vec![id("x")]))]
    );
}

#[test]
fn test_parse_nested_blocks() {
    let statements = parse_ok("func f() { if a { b; } c; }");

    match &statements[0] {
        Node::FuncDef(func) => {
            assert_eq!(
                func.body,
                vec![Node::If(IfStmt::new(Some(id("a")), vec![id("b")])), id("c")]
            );
        }
        other => panic!("expected FuncDef, got {}", other.kind_name()),
    }
}

#[test]
fn test_parse_for_over_expression() {
    let statements = parse_ok("for k, v in items { print(k); }");

    assert_eq!(
        statements,
        vec![Node::For(ForStmt {
            loop_vars: vec![Node::Param(param("k", None)), Node::Param(param("v", None))],
            iterable: Box::new(id("items")),
            body: vec![Node::Call(CallExpr {
                callee: Box::new(id("print")),
                args: vec![id("k")],
            })],
        })]
    );
}

#[test]
fn test_parse_for_over_range() {
    // `0..10` lexes as one number, so the range operator is fed in directly.
    let tokens = vec![
        token(TokenKind::Identifier, "for"),
        token(TokenKind::Identifier, "i"),
        token(TokenKind::Identifier, "in"),
        token(TokenKind::Number, "0"),
        token(TokenKind::Other, ".."),
        token(TokenKind::Number, "10"),
        token(TokenKind::Other, "{"),
        token(TokenKind::Other, "}"),
        token(TokenKind::End, ""),
    ];
    let result = parse(tokens);

    assert!(result.is_ok());
    assert_eq!(
        result.program.statements,
        vec![Node::For(ForStmt {
            loop_vars: vec![Node::Param(param("i", None))],
            iterable: Box::new(Node::Range(RangeExpr {
                from: Box::new(num(0.0)),
                to: Box::new(num(10.0)),
            })),
            body: vec![],
        })]
    );
}

#[test]
fn test_parse_while_with_compound_assignment() {
    let statements = parse_ok("while i < 10 { i += 1; }");

    assert_eq!(
        statements,
        vec![Node::While(WhileStmt {
            cond: Box::new(bin(id("i"), num(10.0), BinaryOperator::Less)),
            body: vec![Node::Assignment(AssignmentStmt {
                target: Box::new(id("i")),
                value: Box::new(bin(id("i"), num(1.0), BinaryOperator::Add)),
            })],
        })]
    );
}

#[test]
fn test_compound_assignment_desugars() {
    let statements = parse_ok("x <<= 2; y **= 3;");

    assert_eq!(
        statements,
        vec![
            Node::Assignment(AssignmentStmt {
                target: Box::new(id("x")),
                value: Box::new(bin(id("x"), num(2.0), BinaryOperator::ShiftLeft)),
            }),
            Node::Assignment(AssignmentStmt {
                target: Box::new(id("y")),
                value: Box::new(bin(id("y"), num(3.0), BinaryOperator::Power)),
            }),
        ]
    );
}

#[test]
fn test_parse_increment_and_decrement() {
    let statements = parse_ok("x++; --y;");

    assert_eq!(
        statements,
        vec![
            Node::Increment(StepStmt {
                operand: Box::new(id("x")),
                prefix: false,
            }),
            Node::Decrement(StepStmt {
                operand: Box::new(id("y")),
                prefix: true,
            }),
        ]
    );
}

#[test]
fn test_parse_simple_statements() {
    let statements = parse_ok("; break; continue;");

    assert_eq!(statements, vec![Node::Semicolon, Node::Break, Node::Continue]);
}

#[test]
fn test_empty_let_reports_variable_list() {
    let result = parse_source("let;");

    assert_eq!(result.program.statements, vec![Node::Semicolon]);
    assert_eq!(result.diagnostics.len(), 2);
    assert_eq!(
        result.diagnostics[0].to_string(),
        "ERROR(0:3): Unexpected symbol \";\". Expected \"Identifier\"."
    );
    assert_eq!(
        result.diagnostics[1].to_string(),
        "ERROR(0:3): Expected variable list."
    );
}

#[test]
fn test_missing_semicolon_after_assignment() {
    let result = parse_source("x = 1");

    assert!(result.program.is_empty());
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(
        result.diagnostics[0].get_impl(),
        &ErrorImpl::UnexpectedSymbol {
            lexeme: String::new(),
            expected: TokenKind::Semicolon,
        }
    );
}

#[test]
fn test_error_does_not_stop_later_statements() {
    let result = parse_source("break x; y;");

    // `break` is dropped; `x;` after it still parses.
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.program.statements, vec![id("x"), id("y")]);
}

#[test]
fn test_stray_closing_brace_is_skipped() {
    let result = parse_source("} x;");

    assert_eq!(result.program.statements, vec![id("x")]);
    assert_eq!(
        result.diagnostics,
        vec![crate::errors::errors::Error::new(
            ErrorImpl::UnmatchedClosingBrace {
                lexeme: "}".to_string()
            },
            crate::Position::new(0, 0)
        )]
    );
}

#[test]
fn test_unclosed_block_reports_and_keeps_body() {
    let result = parse_source("while x { y;");

    assert_eq!(
        result.program.statements,
        vec![Node::While(WhileStmt {
            cond: Box::new(id("x")),
            body: vec![id("y")],
        })]
    );
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(
        result.diagnostics[0].get_impl(),
        &ErrorImpl::UnexpectedSymbol {
            lexeme: String::new(),
            expected: TokenKind::Other,
        }
    );
}

#[test]
fn test_parser_appends_missing_end() {
    let tokens = vec![token(TokenKind::Identifier, "x"), token(TokenKind::Semicolon, ";")];
    let result = parse(tokens);

    assert!(result.is_ok());
    assert_eq!(result.program.statements, vec![id("x")]);
}

#[test]
fn test_advance_stops_at_end() {
    let mut parser = Parser::new(vec![token(TokenKind::Identifier, "x")]);

    assert_eq!(parser.advance().lexeme, "x");
    assert!(!parser.has_tokens());
    assert_eq!(parser.advance().kind, TokenKind::End);
    assert_eq!(parser.current_token_kind(), TokenKind::End);

    parser.step_back();
    assert_eq!(parser.current_token().lexeme, "x");
}

#[test]
fn test_accept_operator_requires_symbol_token() {
    let mut parser = Parser::new(vec![
        token(TokenKind::String, "+"),
        token(TokenKind::Other, "+"),
    ]);

    assert_eq!(parser.accept_operator(&BINARY_LOOKUP), None);
    parser.advance();
    assert_eq!(
        parser.accept_operator(&BINARY_LOOKUP),
        Some((BindingPower::Additive, BinaryOperator::Add))
    );
}

#[test]
fn test_binding_power_cascade() {
    let mut level = Some(BindingPower::Or);
    let mut seen = vec![];
    while let Some(current) = level {
        seen.push(current);
        level = current.tighter();
    }

    assert_eq!(seen.len(), 9);
    assert_eq!(seen.last(), Some(&BindingPower::Multiplicative));
    assert_eq!(BindingPower::Power.tighter(), None);
}

fn reports_nesting(source: &str) -> bool {
    parse_source(source).diagnostics.iter().any(|error| {
        error.get_impl() == &ErrorImpl::NestingTooDeep { limit: MAX_NESTING }
    })
}

#[test]
fn test_moderate_nesting_parses() {
    let source = format!("x = {}1{};", "(".repeat(40), ")".repeat(40));

    assert_eq!(
        parse_ok(&source),
        vec![Node::Assignment(AssignmentStmt {
            target: Box::new(id("x")),
            value: Box::new(num(1.0)),
        })]
    );
}

#[test]
fn test_deep_parentheses_are_reported() {
    let source = format!("x = {}1{};", "(".repeat(3_000), ")".repeat(3_000));

    assert!(reports_nesting(&source));
}

#[test]
fn test_deep_unary_chain_is_reported() {
    let source = format!("{}x;", "- ".repeat(3_000));

    assert!(reports_nesting(&source));
}

#[test]
fn test_deep_blocks_are_reported() {
    let source = format!("{}{}", "if a { ".repeat(3_000), "} ".repeat(3_000));

    assert!(reports_nesting(&source));
}
