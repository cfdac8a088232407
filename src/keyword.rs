use std::fmt::Display;

/// Reserved words that always keep a trailing separator, unless the next
/// non-whitespace byte is `(`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Typedef,
    Return,
    Sizeof,
    Int,
    Long,
    If,
    Else,
    Float,
    Double,
    Char,
    Bool,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Typedef => "typedef",
            Self::Return => "return",
            Self::Sizeof => "sizeof",
            Self::Int => "int",
            Self::Long => "long",
            Self::If => "if",
            Self::Else => "else",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
            Self::Bool => "bool",
        }
    }

    pub fn all() -> &'static [Self] {
        use Keyword::*;
        &[
            Typedef, Return, Sizeof, Int, Long, If, Else, Float, Double, Char, Bool,
        ]
    }

    pub fn from_id(id: &[u8]) -> Option<Self> {
        Self::all()
            .iter()
            .find(|k| k.as_str().as_bytes() == id)
            .copied()
    }

    /// every entry of the table requires a separator, except before `(`
    pub fn needs_separator(&self, next: Option<u8>) -> bool {
        next != Some(b'(')
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
