#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A line/column pair. Both are counted from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the given (0-based) line, without its line terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth(line as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{Error, ErrorImpl};
    use crate::lexer::tokens::TokenKind;
    use crate::Position;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\r\n\nTesting { }\n";

        assert_eq!(super::get_line_at_position(source, 0), Some("Hello, world!"));
        assert_eq!(super::get_line_at_position(source, 1), Some("second"));
        assert_eq!(super::get_line_at_position(source, 2), Some(""));
        assert_eq!(super::get_line_at_position(source, 3), Some("Testing { }"));
        assert_eq!(super::get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_format_error_points_at_column() {
        let source = "let a = 1;\n  b = #;\n";
        let error = Error::new(
            ErrorImpl::UnexpectedSymbol {
                lexeme: String::from("#"),
                expected: TokenKind::Semicolon,
            },
            Position::new(1, 6),
        );

        let rendered = super::format_error(&error, source, "main.lang");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedSymbol (Unexpected symbol `#`, expected a Semicolon)");
        assert_eq!(lines[1], "-> main.lang");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | b = #;");
        assert_eq!(lines[4], "  | ----^");
    }
}

/// Renders a diagnostic with the offending source line and a caret under its column.
///
/// ```text
/// Error: UnexpectedSymbol (Unexpected symbol `#`, expected a Semicolon)
/// -> main.lang
///   |
/// 1 | b = #;
///   | ----^
/// ```
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    let position = error.get_position();
    let line_text = get_line_at_position(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    match error.get_tip() {
        ErrorTip::None => out.push_str(&format!("Error: {}\n", error.get_error_name())),
        tip => out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), tip)),
    }
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}
