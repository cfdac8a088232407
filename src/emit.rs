use std::{
    ffi::OsStr,
    fmt::Display,
    fs::File,
    io::{Error, Write},
    path::PathBuf,
};

use crate::{
    error::{MinifyError, Result},
    source::file::SourceBuffer,
};

/// Where the minified source goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    /// created, or truncated if it exists
    File(PathBuf),
}

impl Destination {
    pub fn from_arg(arg: Option<&OsStr>) -> Self {
        match arg {
            Some(path) => Self::File(PathBuf::from(path)),
            None => Self::Stdout,
        }
    }

    fn write_to(&self, writer: &mut dyn Write, bytes: &[u8]) -> std::result::Result<(), Error> {
        writer.write_all(bytes)?;
        writer.flush()
    }

    fn write(&self, bytes: &[u8]) -> std::result::Result<(), Error> {
        match self {
            Self::Stdout => self.write_to(&mut std::io::stdout().lock(), bytes),
            Self::File(path) => self.write_to(&mut File::create(path)?, bytes),
        }
    }
}

impl Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => write!(f, "<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Write every byte of `buffer` to `dest`.
pub fn emit(dest: &Destination, buffer: SourceBuffer) -> Result<()> {
    dest.write(buffer.stream())
        .map_err(|source| MinifyError::OutputWriteFailure {
            dest: dest.to_string(),
            source,
        })?;
    log::debug!("wrote {} bytes to {}", buffer.len(), dest);
    Ok(())
}
