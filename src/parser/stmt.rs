use crate::{
    ast::{
        ast::Node,
        expressions::{BinOp, RangeExpr},
        statements::{
            AssignmentStmt, ForStmt, FuncDefStmt, IfStmt, LetStmt, Param, ReturnStmt, StepStmt,
            WhileStmt,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_test,
    lookups::{stmt_handler, COMPOUND_ASSIGNMENT_LOOKUP},
    parser::Parser,
};

/// Parses one statement.
///
/// Returns `None` without consuming anything when the current token is `}`,
/// so the enclosing block can close. `Some(Node::Eof)` means tokens were
/// consumed but nothing usable was built.
pub fn parse_stmt(parser: &mut Parser) -> Option<Node> {
    if parser.check_symbol("}") {
        return None;
    }

    if let Some(handler) = stmt_handler(parser) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_empty_stmt(parser: &mut Parser) -> Option<Node> {
    parser.advance();
    Some(Node::Semicolon)
}

pub fn parse_break_stmt(parser: &mut Parser) -> Option<Node> {
    parser.advance();
    parser.expect(TokenKind::Semicolon)?;
    Some(Node::Break)
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Option<Node> {
    parser.advance();
    parser.expect(TokenKind::Semicolon)?;
    Some(Node::Continue)
}

/// `return [test] ;`
pub fn parse_return_stmt(parser: &mut Parser) -> Option<Node> {
    parser.advance();

    let value = if parser.check(TokenKind::Semicolon) {
        None
    } else {
        parse_test(parser)
    };
    parser.expect(TokenKind::Semicolon)?;

    Some(Node::Return(ReturnStmt {
        value: value.map(Box::new),
    }))
}

/// `++ test ;` and `-- test ;`
pub fn parse_prefix_step_stmt(parser: &mut Parser) -> Option<Node> {
    let is_increment = parser.advance().lexeme == "++";
    let operand = parse_test(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    let step = StepStmt {
        operand: Box::new(operand),
        prefix: true,
    };
    Some(if is_increment {
        Node::Increment(step)
    } else {
        Node::Decrement(step)
    })
}

/// Parses an optional condition. When nothing could be parsed the token the
/// attempt swallowed (usually the `{`) is given back.
fn parse_optional_cond(parser: &mut Parser) -> Option<Node> {
    let start = parser.position();
    let cond = parse_test(parser);
    if cond.is_none() && parser.position() > start {
        parser.step_back();
    }
    cond
}

/// `if [test] block (else if [test] block)* (else block)?`
///
/// A missing condition is accepted; the block then has `cond == None`
/// exactly like a bare `else`.
pub fn parse_if_stmt(parser: &mut Parser) -> Option<Node> {
    parser.advance();

    let cond = parse_optional_cond(parser);
    let body = parse_block(parser)?;

    let mut else_ifs = vec![];
    let mut else_body = None;
    while parser.accept_keyword("else") {
        if parser.accept_keyword("if") {
            let cond = parse_optional_cond(parser);
            let body = parse_block(parser)?;
            else_ifs.push(IfStmt::new(cond, body));
        } else {
            let body = parse_block(parser)?;
            else_body = Some(Box::new(IfStmt::new(None, body)));
            break;
        }
    }

    let mut stmt = IfStmt::new(cond, body);
    stmt.else_ifs = else_ifs;
    stmt.else_body = else_body;
    Some(Node::If(stmt))
}

/// `pub` in front of `let`, `const` or `func`. Anywhere else it is dropped
/// and the rest is read as an expression statement.
pub fn parse_pub_stmt(parser: &mut Parser) -> Option<Node> {
    parser.advance();

    if parser.check_keyword("let") || parser.check_keyword("const") {
        parse_let_decl(parser, true)
    } else if parser.check_keyword("func") {
        parse_func_def_decl(parser, true)
    } else {
        parse_expression_stmt(parser)
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Node> {
    parse_let_decl(parser, false)
}

/// `(let|const) param (',' param)* [;]`
fn parse_let_decl(parser: &mut Parser, is_public: bool) -> Option<Node> {
    parser.advance();

    let bindings = parse_param_list(parser, true);
    if bindings.is_empty() {
        parser.report(ErrorImpl::ExpectedVariableList);
        return None;
    }
    parser.accept(TokenKind::Semicolon);

    Some(Node::Let(LetStmt {
        bindings,
        is_public,
    }))
}

/// `for name (',' name)* in test ['..' test] block`
pub fn parse_for_stmt(parser: &mut Parser) -> Option<Node> {
    parser.advance();

    let loop_vars: Vec<Node> = parse_param_list(parser, false)
        .into_iter()
        .map(Node::Param)
        .collect();
    parser.expect_keyword("in")?;

    let from = parse_test(parser)?;
    let iterable = if parser.accept_symbol("..") {
        let to = parse_test(parser)?;
        Node::Range(RangeExpr {
            from: Box::new(from),
            to: Box::new(to),
        })
    } else {
        from
    };
    let body = parse_block(parser).unwrap_or_default();

    Some(Node::For(ForStmt {
        loop_vars,
        iterable: Box::new(iterable),
        body,
    }))
}

/// `while test block`
pub fn parse_while_stmt(parser: &mut Parser) -> Option<Node> {
    parser.advance();

    let cond = parse_test(parser)?;
    let body = parse_block(parser).unwrap_or_default();

    Some(Node::While(WhileStmt {
        cond: Box::new(cond),
        body,
    }))
}

pub fn parse_func_def_stmt(parser: &mut Parser) -> Option<Node> {
    parse_func_def_decl(parser, false)
}

/// `func [pub] name '(' params? ')' block`
fn parse_func_def_decl(parser: &mut Parser, is_public: bool) -> Option<Node> {
    parser.advance();
    let is_public = parser.accept_keyword("pub") || is_public;

    let name = parser.expect(TokenKind::Identifier)?.lexeme;
    parser.expect_symbol("(")?;
    let params = if parser.check_symbol(")") {
        vec![]
    } else {
        parse_param_list(parser, true)
    };
    parser.expect_symbol(")");
    let body = parse_block(parser).unwrap_or_default();

    Some(Node::FuncDef(FuncDefStmt {
        name,
        params,
        body,
        is_public,
    }))
}

/// `name ['=' test]`. The default is only read when `with_default` is set.
fn parse_param(parser: &mut Parser, with_default: bool) -> Option<Param> {
    let name = parser.expect(TokenKind::Identifier)?.lexeme;

    let default = if with_default && parser.accept_symbol("=") {
        parse_test(parser).map(Box::new)
    } else {
        None
    };

    Some(Param { name, default })
}

fn parse_param_list(parser: &mut Parser, with_default: bool) -> Vec<Param> {
    let mut params = vec![];
    let Some(first) = parse_param(parser, with_default) else {
        return params;
    };
    params.push(first);

    while parser.accept_symbol(",") {
        if let Some(param) = parse_param(parser, with_default) {
            params.push(param);
        }
    }

    params
}

/// `'{' stmt* '}'`
///
/// Statements are read until a brace counter, bumped by every `{` and
/// dropped by every `}` seen between statements, falls to zero; then the
/// closing `}` is consumed. Returns `None` when the opening `{` is missing
/// or blocks are nested too deeply.
pub fn parse_block(parser: &mut Parser) -> Option<Vec<Node>> {
    parser.expect_symbol("{")?;

    parser.enter()?;
    let body = parse_block_body(parser);
    parser.leave();
    Some(body)
}

fn parse_block_body(parser: &mut Parser) -> Vec<Node> {

    let mut body = vec![];
    let mut depth = 1;
    while depth > 0 {
        if !parser.has_tokens() {
            parser.report_expected(TokenKind::Other);
            return body;
        }

        if let Some(stmt) = parse_stmt(parser).filter(|node| !node.is_eof()) {
            body.push(stmt);
        }

        if parser.check_symbol("{") {
            depth += 1;
        } else if parser.check_symbol("}") {
            depth -= 1;
        }
    }
    parser.advance();

    body
}

/// Assignment, compound assignment, postfix step, or a bare expression.
///
/// `x op= v;` is stored as `x = x op v`.
pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Node> {
    let target = parse_test(parser);

    if parser.accept_symbol("=") {
        let value = parse_test(parser)?;
        let target = target?;
        parser.expect(TokenKind::Semicolon)?;

        return Some(Node::Assignment(AssignmentStmt {
            target: Box::new(target),
            value: Box::new(value),
        }));
    }

    if let Some(op) = parser.accept_operator(&COMPOUND_ASSIGNMENT_LOOKUP) {
        let value = parse_test(parser)?;
        let target = target?;
        parser.expect(TokenKind::Semicolon)?;

        let desugared = BinOp::new(target.clone(), value, op);
        return Some(Node::Assignment(AssignmentStmt {
            target: Box::new(target),
            value: Box::new(Node::BinOp(desugared)),
        }));
    }

    let Some(target) = target else {
        return Some(Node::Eof);
    };

    if parser.check_symbol("++") || parser.check_symbol("--") {
        let is_increment = parser.advance().lexeme == "++";
        parser.expect(TokenKind::Semicolon)?;

        let step = StepStmt {
            operand: Box::new(target),
            prefix: false,
        };
        return Some(if is_increment {
            Node::Increment(step)
        } else {
            Node::Decrement(step)
        });
    }

    parser.accept(TokenKind::Semicolon);
    Some(target)
}
