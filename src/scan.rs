use std::fmt::{Debug, Display};

/// A position inside a source buffer. Lines and columns are 1-based.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Loc {
    byte: usize,
    line: usize,
    col: usize,
}

impl Loc {
    pub fn init() -> Self {
        Loc {
            byte: 0,
            line: 1,
            col: 1,
        }
    }

    fn next(&self, ch: u8) -> Self {
        let (line, col) = if ch == b'\n' {
            (self.line + 1, 1)
        } else {
            (self.line, self.col + 1)
        };
        Self {
            byte: self.byte + 1,
            line,
            col,
        }
    }

    /// locate the byte at `offset`, counting newlines from the start of `src`
    pub fn at(src: &[u8], offset: usize) -> Self {
        src.iter()
            .take(offset)
            .fold(Self::init(), |loc, &ch| loc.next(ch))
    }

    #[cfg(test)]
    pub fn byte(&self) -> usize {
        self.byte
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line(), self.col())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    Block,
}

/// Lexical class of the byte under the cursor. Only the scanners compute this;
/// nothing downstream stores classified tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Identifier,
    Keyword,
    Preprocessor,
    StringLiteral,
    CharLiteral,
    Punctuator,
    Whitespace,
    Comment(CommentKind),
    Other,
}

pub fn is_ident(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_'
}

/// whitespace as collapsed after identifiers and keywords
pub fn is_space(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r')
}

/// whitespace as collapsed after `;` and `,`, which leaves carriage returns
/// for the general whitespace rule
pub fn is_trailing_space(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n')
}

/// A bounds-checked byte cursor. Every lookahead past the end yields `None`,
/// so scanners can never read beyond the buffer.
pub struct Cursor<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self { src, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    pub fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.src.get(self.pos + ahead).copied()
    }

    pub fn bump(&mut self) -> Option<u8> {
        let next = self.peek();
        if next.is_some() {
            self.pos += 1;
        }
        next
    }

    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.src.len());
    }

    /// consume bytes while `pred` holds and return them
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    /// consume bytes up to, not including, the first `stop` byte. Returns `None`
    /// and leaves the cursor at the end if `stop` never appears.
    pub fn eat_until(&mut self, stop: u8) -> Option<&'a [u8]> {
        let start = self.pos;
        match self.src[start..].iter().position(|&ch| ch == stop) {
            Some(len) => {
                self.pos = start + len;
                Some(&self.src[start..self.pos])
            }
            None => {
                self.pos = self.src.len();
                None
            }
        }
    }

    /// consume up to and past the first occurrence of `pat`
    pub fn skip_past(&mut self, pat: &[u8]) -> bool {
        match self.src[self.pos..]
            .windows(pat.len())
            .position(|window| window == pat)
        {
            Some(offset) => {
                self.pos += offset + pat.len();
                true
            }
            None => {
                self.pos = self.src.len();
                false
            }
        }
    }

    pub fn loc(&self, offset: usize) -> Loc {
        Loc::at(self.src, offset)
    }
}

impl Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("rest", &String::from_utf8_lossy(&self.src[self.pos..]))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cursor, Loc};

    #[test]
    fn loc_counts_lines() {
        let src = b"int x;\n  /* open";
        let loc = Loc::at(src, 9);
        assert_eq!(2, loc.line());
        assert_eq!(3, loc.col());
        assert_eq!(9, loc.byte());
        assert_eq!("2:3", loc.to_string());
    }

    #[test]
    fn cursor_is_bounded() {
        let mut cursor = Cursor::new(b"ab");
        assert_eq!(Some(b'a'), cursor.bump());
        assert_eq!(Some(b'b'), cursor.peek());
        assert_eq!(None, cursor.peek_at(1));
        assert_eq!(Some(b'b'), cursor.bump());
        assert_eq!(None, cursor.bump());
        assert!(cursor.is_eof());
        cursor.advance(4);
        assert_eq!(2, cursor.pos());
    }

    #[test]
    fn eat_until_missing_stop() {
        let mut cursor = Cursor::new(b"abc");
        assert_eq!(None, cursor.eat_until(b'\''));
        assert!(cursor.is_eof());

        let mut cursor = Cursor::new(b"ab'c");
        assert_eq!(Some(&b"ab"[..]), cursor.eat_until(b'\''));
        assert_eq!(Some(b'\''), cursor.peek());
    }

    #[test]
    fn skip_past_pattern() {
        let mut cursor = Cursor::new(b" a */x");
        assert!(cursor.skip_past(b"*/"));
        assert_eq!(Some(b'x'), cursor.peek());

        let mut cursor = Cursor::new(b" a *");
        assert!(!cursor.skip_past(b"*/"));
        assert!(cursor.is_eof());
    }
}
