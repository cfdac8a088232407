use std::{collections::TryReserveError, fmt::Display, io::Error, path::PathBuf};

use thiserror::Error;

use crate::scan::Loc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    pub fn from_byte(ch: u8) -> Option<Self> {
        match ch {
            b'\'' => Some(Self::Single),
            b'"' => Some(Self::Double),
            _ => None,
        }
    }

    pub fn as_byte(&self) -> u8 {
        match self {
            Self::Single => b'\'',
            Self::Double => b'"',
        }
    }
}

impl Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "character literal"),
            Self::Double => write!(f, "string literal"),
        }
    }
}

#[derive(Error, Debug)]
pub enum MinifyError {
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: Error,
    },
    #[error("memory allocation failed ({requested} bytes)")]
    AllocationFailure {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("cannot write '{dest}': {source}")]
    OutputWriteFailure {
        dest: String,
        #[source]
        source: Error,
    },
    #[error("{at}: unterminated block comment")]
    UnterminatedComment { at: Loc },
    #[error("{at}: unterminated {quote}")]
    UnterminatedLiteral { quote: Quote, at: Loc },
    #[error("{0}")]
    Usage(String),
    /// an error raised while processing the named source
    #[error("{origin}:{inner}")]
    InSource {
        origin: String,
        inner: Box<MinifyError>,
    },
}

impl MinifyError {
    pub fn alloc(requested: usize, source: TryReserveError) -> Self {
        Self::AllocationFailure { requested, source }
    }

    /// attach the source origin to positional errors; other errors already
    /// carry their paths
    pub fn in_source(self, origin: &str) -> Self {
        match self {
            Self::UnterminatedComment { .. } | Self::UnterminatedLiteral { .. } => {
                Self::InSource {
                    origin: origin.to_owned(),
                    inner: Box::new(self),
                }
            }
            other => other,
        }
    }

    /// strip any origin decoration
    pub fn root(&self) -> &Self {
        match self {
            Self::InSource { inner, .. } => inner.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, MinifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_errors_get_origin() {
        let err = MinifyError::UnterminatedLiteral {
            quote: Quote::Double,
            at: Loc::at(b"a\n \"x", 3),
        }
        .in_source("main.c");
        assert_eq!("main.c:2:2: unterminated string literal", err.to_string());
        assert!(matches!(
            err.root(),
            MinifyError::UnterminatedLiteral {
                quote: Quote::Double,
                ..
            }
        ));
    }

    #[test]
    fn path_errors_keep_their_message() {
        let err = MinifyError::FileNotFound {
            path: PathBuf::from("missing.c"),
        }
        .in_source("missing.c");
        assert_eq!("file not found: missing.c", err.to_string());
    }
}
