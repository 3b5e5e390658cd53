//! Expression grammar.
//!
//! Every function returns `None` when it produced no node. A `None` from any
//! operand abandons the whole enclosing expression; nodes are only built
//! once all of their children exist.

use crate::{
    ast::{
        ast::Node,
        expressions::{BinOp, BinaryOperator, CallExpr, TernaryOp, UnOp, UnaryOperator},
    },
    lexer::{lexer::parse_number, tokens::TokenKind},
};

use super::{
    lookups::{BindingPower, BINARY_LOOKUP, FACTOR_PREFIX_LOOKUP},
    parser::Parser,
};

/// `test := orTest ('?' test ':' test)?`
pub fn parse_test(parser: &mut Parser) -> Option<Node> {
    parser.enter()?;
    let node = parse_ternary(parser);
    parser.leave();
    node
}

fn parse_ternary(parser: &mut Parser) -> Option<Node> {
    let cond = parse_binary_expr(parser, BindingPower::Or)?;

    if !parser.accept_symbol("?") {
        return Some(cond);
    }

    let then_branch = parse_test(parser)?;
    parser.expect_symbol(":")?;
    let else_branch = parse_test(parser)?;

    Some(Node::Ternary(TernaryOp {
        cond: Box::new(cond),
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    }))
}

/// Parses one binary level: `operand (op operand)?`.
///
/// NOTE: the operator is applied at most once per level. There is no loop
/// folding `a - b - c` into a left-associative chain; the parse stops after
/// `a - b` and leaves `- c` to whoever called the expression parser. This is
/// relied on, see `chained_operators_stop_after_one_application` in the tests.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Option<Node> {
    let left = parse_operand(parser, bp)?;

    let Some(op) = accept_binary(parser, bp) else {
        return Some(left);
    };
    let right = parse_operand(parser, bp)?;

    Some(Node::BinOp(BinOp::new(left, right, op)))
}

fn parse_operand(parser: &mut Parser, bp: BindingPower) -> Option<Node> {
    match (bp, bp.tighter()) {
        (BindingPower::And, _) => parse_not_test(parser),
        (_, Some(tighter)) => parse_binary_expr(parser, tighter),
        (_, None) => parse_factor(parser),
    }
}

/// Consumes the current token if it is a binary operator of level `bp`.
fn accept_binary(parser: &mut Parser, bp: BindingPower) -> Option<BinaryOperator> {
    let token = parser.current_token();
    if token.kind != TokenKind::Other {
        return None;
    }

    let (level, op) = *BINARY_LOOKUP.get(token.lexeme.as_str())?;
    if level != bp {
        return None;
    }

    parser.advance();
    Some(op)
}

/// `notTest := '!' comparison | comparison`
pub fn parse_not_test(parser: &mut Parser) -> Option<Node> {
    if parser.accept_symbol("!") {
        let operand = parse_binary_expr(parser, BindingPower::Comparison)?;
        return Some(Node::UnOp(UnOp::new(operand, UnaryOperator::Not)));
    }

    parse_binary_expr(parser, BindingPower::Comparison)
}

/// `factor := ('+'|'-'|'~') factor | power`
pub fn parse_factor(parser: &mut Parser) -> Option<Node> {
    parser.enter()?;
    let node = parse_prefixed(parser);
    parser.leave();
    node
}

fn parse_prefixed(parser: &mut Parser) -> Option<Node> {
    match parser.accept_operator(&FACTOR_PREFIX_LOOKUP) {
        Some(op) => {
            let operand = parse_factor(parser)?;
            Some(Node::UnOp(UnOp::new(operand, op)))
        }
        None => parse_power(parser),
    }
}

/// `power := atom (call | index | member)? ('**' factor)?`
///
/// Index and member access keep only the inner expression; the base atom
/// is parsed and dropped.
pub fn parse_power(parser: &mut Parser) -> Option<Node> {
    let base = parse_atom(parser)?;

    if parser.accept_symbol("(") {
        let args = if parser.check_symbol(")") {
            vec![]
        } else {
            parse_arg_list(parser)
        };
        parser.expect_symbol(")")?;

        return Some(Node::Call(CallExpr {
            callee: Box::new(base),
            args,
        }));
    }

    if parser.accept_symbol("[") {
        let index = parse_test(parser)?;
        parser.expect_symbol("]")?;
        return Some(index);
    }

    if parser.accept_symbol(".") {
        // The member name has to be there, but the atom after it is what
        // gets kept.
        parser.expect(TokenKind::Identifier);
        return parse_atom(parser);
    }

    if parser.accept_symbol("**") {
        let exponent = parse_factor(parser)?;
        return Some(Node::BinOp(BinOp::new(base, exponent, BinaryOperator::Power)));
    }

    Some(base)
}

/// Literals, identifiers, `true`/`false` and parenthesised tests.
/// Any other token is consumed and produces nothing.
pub fn parse_atom(parser: &mut Parser) -> Option<Node> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Number => {
            parser.advance();
            let value = token
                .number_value()
                .or_else(|| parse_number(&token.lexeme))
                .unwrap_or(0.0);
            Some(Node::Number(value))
        }
        TokenKind::String => {
            parser.advance();
            let value = token.string_value().unwrap_or(&token.lexeme);
            Some(Node::String(value.to_string()))
        }
        TokenKind::Char => {
            parser.advance();
            let value = token
                .char_value()
                .or_else(|| token.lexeme.chars().next())
                .unwrap_or('\0');
            Some(Node::Char(value))
        }
        TokenKind::Identifier => {
            parser.advance();
            let node = match token.lexeme.as_str() {
                "true" => Node::Bool(true),
                "false" => Node::Bool(false),
                name => Node::Identifier(name.to_string()),
            };
            Some(node)
        }
        TokenKind::Other if token.lexeme == "(" => {
            parser.advance();
            let inner = parse_test(parser);
            parser.expect_symbol(")");
            inner
        }
        _ => {
            parser.advance();
            None
        }
    }
}

/// `argList := test (',' test)*`. Arguments that fail to parse are skipped.
pub fn parse_arg_list(parser: &mut Parser) -> Vec<Node> {
    let mut args = vec![];
    let Some(first) = parse_test(parser) else {
        return args;
    };
    args.push(first);

    while parser.accept_symbol(",") {
        if let Some(arg) = parse_test(parser) {
            args.push(arg);
        }
    }

    args
}
