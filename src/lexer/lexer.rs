use crate::{MK_SINGLE_HANDLER, MK_TOKEN};

use super::{
    cursor::SourceCursor,
    tokens::{Literal, Token, TokenKind, OPERATOR_KEYWORDS},
};

pub type LexHandler = fn(&mut Lexer);

/// One tokenizer rule: the handler runs when `matches` accepts the current character.
/// Rules are tried in table order and the first match wins.
#[derive(Clone)]
pub struct LexPattern {
    matches: fn(char) -> bool,
    handler: LexHandler,
}

pub struct Lexer {
    patterns: Vec<LexPattern>,
    tokens: Vec<Token>,
    cursor: SourceCursor,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            patterns: vec![
                LexPattern { matches: is_ident_start, handler: identifier_handler },
                LexPattern { matches: is_number_start, handler: number_handler },
                LexPattern { matches: is_quote, handler: string_handler },
                LexPattern { matches: is_whitespace, handler: whitespace_handler },
                LexPattern { matches: |c| c == ';', handler: MK_SINGLE_HANDLER!(TokenKind::Semicolon) },
                LexPattern { matches: is_bracket, handler: MK_SINGLE_HANDLER!(TokenKind::Other) },
                LexPattern { matches: is_symbol, handler: symbol_handler },
            ],
            tokens: vec![],
            cursor: SourceCursor::new(source),
            line: 0,
            column: 0,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Consumes the longest run of characters accepted by `class`.
    fn take_while(&mut self, class: fn(char) -> bool) -> String {
        let mut result = String::new();
        while self.cursor.has_next() && class(self.cursor.current()) {
            result.push(self.cursor.next());
        }
        result
    }

    fn skip(&mut self) {
        self.cursor.next();
        self.column += 1;
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_number_start(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

// Loose: hex digits and exponent signs are swallowed anywhere in the run.
fn is_number_char(c: char) -> bool {
    c.is_ascii_hexdigit() || matches!(c, '.' | 'x' | 'X' | '+' | '-')
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

fn is_bracket(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '{' | '}')
}

// Brackets are in the operator alphabet too but never join a run.
fn is_symbol(c: char) -> bool {
    matches!(
        c,
        '-' | '!' | '$' | '%' | '^' | '&' | '*' | '_' | '+' | '|' | '~' | '=' | '`'
            | ':' | '<' | '>' | '?' | ',' | '.' | '/' | '\\'
    )
}

fn unescape(c: char) -> Option<char> {
    match c {
        'b' => Some('\x08'),
        'n' => Some('\n'),
        't' => Some('\t'),
        'f' => Some('\x0c'),
        'r' => Some('\r'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}

fn identifier_handler(lexer: &mut Lexer) {
    let column = lexer.column;
    let word = lexer.take_while(is_ident_continue);

    let kind = if OPERATOR_KEYWORDS.contains(word.as_str()) {
        TokenKind::Other
    } else {
        TokenKind::Identifier
    };

    lexer.column += word.chars().count() as u32;
    lexer.push(MK_TOKEN!(kind, word, lexer.line, column, None));
}

fn number_handler(lexer: &mut Lexer) {
    let column = lexer.column;
    let lexeme = lexer.take_while(is_number_char);

    let value = parse_number(&lexeme).unwrap_or_else(|| {
        tracing::warn!(lexeme = %lexeme, line = lexer.line, "numeric literal has no parseable prefix");
        0.0
    });

    lexer.column += lexeme.len() as u32;
    lexer.push(MK_TOKEN!(TokenKind::Number, lexeme, lexer.line, column, Some(Literal::Number(value))));
}

fn string_handler(lexer: &mut Lexer) {
    let column = lexer.column;
    let is_char = lexer.cursor.next() == '\'';

    // Either quote character ends the literal, whichever one opened it.
    let mut value = String::new();
    while lexer.cursor.has_next() && !is_quote(lexer.cursor.current()) {
        let ch = lexer.cursor.next();
        if ch == '\\' {
            if let Some(escaped) = unescape(lexer.cursor.next()) {
                value.push(escaped);
            }
        } else {
            value.push(ch);
        }
    }
    lexer.cursor.next();

    lexer.column += value.chars().count() as u32 + 2;

    let (kind, literal) = if is_char {
        (TokenKind::Char, Literal::Char(value.chars().next().unwrap_or('\0')))
    } else {
        (TokenKind::String, Literal::Str(value.clone()))
    };
    lexer.push(MK_TOKEN!(kind, value, lexer.line, column, Some(literal)));
}

fn whitespace_handler(lexer: &mut Lexer) {
    if lexer.cursor.next() == '\n' {
        lexer.line += 1;
        lexer.column = 0;
    } else {
        lexer.column += 1;
    }
}

fn symbol_handler(lexer: &mut Lexer) {
    let column = lexer.column;
    let symbol = lexer.take_while(is_symbol);

    lexer.column += symbol.len() as u32;
    lexer.push(MK_TOKEN!(TokenKind::Other, symbol, lexer.line, column, None));
}

/// Reads a numeric lexeme the way C's `strtod` does: hexadecimal after a
/// `0x` prefix, otherwise the longest prefix that is a valid decimal float.
pub fn parse_number(lexeme: &str) -> Option<f64> {
    let hex = lexeme.strip_prefix("0x").or_else(|| lexeme.strip_prefix("0X"));
    if let Some(value) = hex.and_then(parse_hex) {
        return Some(value);
    }

    let end = decimal_prefix_len(lexeme);
    if end == 0 {
        return None;
    }
    lexeme[..end].parse::<f64>().ok()
}

/// Byte length of the longest `[+-]digits[.digits][(e|E)[+-]digits]` prefix,
/// with at least one mantissa digit. Zero when there is none.
fn decimal_prefix_len(lexeme: &str) -> usize {
    let bytes = lexeme.as_bytes();
    let digits_from = |start: usize| {
        start + bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let mut end = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    end
}

fn parse_hex(digits: &str) -> Option<f64> {
    let mut chars = digits.chars().peekable();
    let mut value = 0.0;
    let mut seen_digit = false;

    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(16)) {
        value = value * 16.0 + digit as f64;
        seen_digit = true;
        chars.next();
    }

    if chars.peek() == Some(&'.') {
        chars.next();
        let mut scale = 1.0 / 16.0;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(16)) {
            value += digit as f64 * scale;
            scale /= 16.0;
            seen_digit = true;
            chars.next();
        }
    }

    seen_digit.then_some(value)
}

/// Converts source text into tokens. Never fails: characters that start no
/// token are skipped. The result always ends with exactly one `End` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);

    while lex.cursor.has_next() {
        let current = lex.cursor.current();
        let handler = lex
            .patterns
            .iter()
            .find(|pattern| (pattern.matches)(current))
            .map(|pattern| pattern.handler);

        match handler {
            Some(handler) => handler(&mut lex),
            None => lex.skip(),
        }
    }

    let end = MK_TOKEN!(TokenKind::End, String::new(), lex.line + 1, 0, None);
    lex.push(end);
    tracing::debug!(token_count = lex.tokens.len(), "tokenized");
    lex.tokens
}
