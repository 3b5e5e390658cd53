//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SINGLE_HANDLER!` - Creates a lexer handler for one-character tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's text
/// * `$line` - Line the token starts on
/// * `$column` - Column the token starts at
/// * `$literal` - Optional decoded literal value
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 0, 4, Some(Literal::Number(42.0)));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr, $column:expr, $literal:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            line: $line,
            column: $column,
            literal: $literal,
        }
    };
}

/// Creates a lexer handler that emits the current character as a token of
/// the given kind and steps past it.
///
/// # Example
///
/// ```ignore
/// LexPattern {
///     matches: |c| c == ';',
///     handler: MK_SINGLE_HANDLER!(TokenKind::Semicolon),
/// }
/// ```
#[macro_export]
macro_rules! MK_SINGLE_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer| {
            let ch = lexer.cursor.next();
            lexer.push($crate::MK_TOKEN!($kind, ch.to_string(), lexer.line, lexer.column, None));
            lexer.column += 1;
        }
    };
}
