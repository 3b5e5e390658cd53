/// Random-access view over the source text.
///
/// Reads never fail: positions outside the text yield `'\0'`.
#[derive(Debug, Clone)]
pub struct SourceCursor {
    source: Vec<char>,
    pos: usize,
}

impl SourceCursor {
    pub fn new(source: &str) -> Self {
        SourceCursor {
            source: source.chars().collect(),
            pos: 0,
        }
    }

    /// The character under the cursor. Check `has_next` first.
    pub fn current(&self) -> char {
        self.source.get(self.pos).copied().unwrap_or('\0')
    }

    /// Returns the current character and steps past it.
    pub fn next(&mut self) -> char {
        match self.source.get(self.pos) {
            Some(ch) => {
                self.pos += 1;
                *ch
            }
            None => '\0',
        }
    }

    /// The character after the current one, without moving.
    pub fn peek(&self) -> char {
        self.source.get(self.pos + 1).copied().unwrap_or('\0')
    }

    /// The character just stepped past, without moving.
    pub fn prev(&self) -> char {
        match self.pos.checked_sub(1) {
            Some(pos) => self.source.get(pos).copied().unwrap_or('\0'),
            None => '\0',
        }
    }

    pub fn has_next(&self) -> bool {
        self.pos < self.source.len()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }
}
