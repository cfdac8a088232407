use std::{
    fmt::{Debug, Display},
    fs::File,
    io::{ErrorKind, Read},
    path::Path,
    rc::Rc,
};

use crate::error::{MinifyError, Result};

/// An owned buffer of C source bytes, either read from a file or built by one of
/// the passes. The bytes are never mutated after construction; passes consume a
/// buffer and build a fresh one.
#[derive(Clone, Eq)]
pub struct SourceBuffer {
    origin: Rc<String>,
    src: Vec<u8>,
}

impl PartialEq for SourceBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.src == other.src
    }
}

impl Debug for SourceBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceBuffer")
            .field("origin", &self.origin)
            .field("src", &String::from_utf8_lossy(&self.src))
            .finish()
    }
}

#[cfg(test)]
const PATH_INLINE: &str = "<inline>";

impl SourceBuffer {
    fn new(origin: Rc<String>, src: Vec<u8>) -> Self {
        Self { origin, src }
    }

    pub fn origin(&self) -> &str {
        self.origin.as_str()
    }

    #[cfg(test)]
    pub fn inline(input: &str) -> Self {
        Self::new(Rc::new(PATH_INLINE.to_owned()), input.as_bytes().to_vec())
    }

    /// read the whole file into memory
    pub fn open(path: &Path) -> Result<Self> {
        let mut file = File::open(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => MinifyError::FileNotFound {
                path: path.to_owned(),
            },
            _ => MinifyError::Io {
                path: path.to_owned(),
                source: err,
            },
        })?;
        let io_err = |source| MinifyError::Io {
            path: path.to_owned(),
            source,
        };
        let size = file.metadata().map_err(io_err)?.len() as usize;

        let mut src = Vec::new();
        src.try_reserve_exact(size)
            .map_err(|err| MinifyError::alloc(size, err))?;
        file.read_to_end(&mut src).map_err(io_err)?;

        log::debug!("read {} bytes from {}", src.len(), path.display());
        Ok(Self::new(Rc::new(path.display().to_string()), src))
    }

    /// a new buffer sharing this buffer's origin
    pub fn derive(&self, src: Vec<u8>) -> Self {
        Self::new(self.origin.clone(), src)
    }

    pub fn stream(&self) -> &[u8] {
        self.src.as_slice()
    }

    pub fn len(&self) -> usize {
        self.src.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }
}

/// an empty output buffer with room for `capacity` bytes, failing instead of
/// aborting when the allocation is refused
pub(crate) fn reserve(capacity: usize) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve(capacity)
        .map_err(|err| MinifyError::alloc(capacity, err))?;
    Ok(out)
}

impl std::ops::Index<std::ops::Range<usize>> for SourceBuffer {
    type Output = [u8];

    fn index(&self, index: std::ops::Range<usize>) -> &Self::Output {
        &self.stream()[index]
    }
}

impl std::ops::Index<std::ops::RangeTo<usize>> for SourceBuffer {
    type Output = [u8];

    fn index(&self, index: std::ops::RangeTo<usize>) -> &Self::Output {
        &self.stream()[index]
    }
}

impl std::ops::Index<std::ops::RangeFrom<usize>> for SourceBuffer {
    type Output = [u8];

    fn index(&self, index: std::ops::RangeFrom<usize>) -> &Self::Output {
        &self.stream()[index]
    }
}

impl std::ops::Index<std::ops::RangeFull> for SourceBuffer {
    type Output = [u8];

    fn index(&self, _index: std::ops::RangeFull) -> &Self::Output {
        self.stream()
    }
}

impl Display for SourceBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.stream()))
    }
}
