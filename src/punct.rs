#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuator {
    /// (
    LRnd,
    /// )
    RRnd,
    /// {
    LCur,
    /// }
    RCur,
    /// ;
    Semi,
    /// ,
    Comma,
}

impl Punctuator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LRnd => "(",
            Self::RRnd => ")",
            Self::LCur => "{",
            Self::RCur => "}",
            Self::Semi => ";",
            Self::Comma => ",",
        }
    }

    pub fn as_byte(&self) -> u8 {
        self.as_str().as_bytes()[0]
    }

    pub fn all() -> &'static [Self] {
        use Punctuator::*;
        &[LRnd, RRnd, LCur, RCur, Semi, Comma]
    }

    pub fn from_byte(ch: u8) -> Option<Self> {
        Self::all().iter().find(|p| p.as_byte() == ch).copied()
    }

    /// separators after which any following space, tab or newline is dropped
    pub fn collapses_trailing(&self) -> bool {
        matches!(self, Self::Semi | Self::Comma)
    }
}

/// Two-byte C punctuators. Whitespace between their halves must survive
/// minification, or two tokens would be read as one.
const DOUBLES: [&[u8; 2]; 19] = [
    b"->", b"++", b"--", b"<<", b">>", b"<=", b">=", b"==", b"!=", b"&&", b"||", b"*=", b"/=",
    b"%=", b"+=", b"-=", b"&=", b"^=", b"|=",
];

/// whether `left` directly followed by `right` would lex as a single longer
/// token (a two-byte punctuator or a comment opener)
pub fn fuses(left: u8, right: u8) -> bool {
    let pair = [left, right];
    DOUBLES.iter().any(|double| **double == pair)
        || matches!(&pair, b"//" | b"/*")
}

#[cfg(test)]
mod tests {
    use super::{fuses, Punctuator};

    #[test]
    fn check_lengths() {
        for punct in Punctuator::all() {
            assert_eq!(1, punct.as_str().len());
        }
    }

    #[test]
    fn from_byte() {
        assert_eq!(Some(Punctuator::Semi), Punctuator::from_byte(b';'));
        assert_eq!(Some(Punctuator::LCur), Punctuator::from_byte(b'{'));
        assert_eq!(None, Punctuator::from_byte(b'['));
        assert!(Punctuator::Comma.collapses_trailing());
        assert!(!Punctuator::RRnd.collapses_trailing());
    }

    #[test]
    fn fusing_pairs() {
        assert!(fuses(b'-', b'-'));
        assert!(fuses(b'/', b'*'));
        assert!(fuses(b'&', b'&'));
        assert!(!fuses(b'=', b'-'));
        assert!(!fuses(b'*', b'/'));
        assert!(!fuses(b'x', b'+'));
    }
}
