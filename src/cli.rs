use std::{ffi::OsString, path::PathBuf};

use crate::{
    emit::Destination,
    error::{MinifyError, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagStart {
    Dash,
    Long,
}

impl FlagStart {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dash => "-",
            Self::Long => "--",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Long, Self::Dash]
    }

    /// the longest prefix of `arg` that starts a flag. A lone `-` is an
    /// ordinary argument.
    pub fn parse(arg: &str) -> Option<Self> {
        if arg == Self::Dash.as_str() {
            return None;
        }
        Self::all()
            .into_iter()
            .find(|fs| arg.starts_with(fs.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    start: FlagStart,
    name: String,
}

impl Flag {
    pub fn new(name: &str, start: FlagStart) -> Self {
        Self {
            start,
            name: name.to_owned(),
        }
    }

    pub fn parse(arg: &str) -> Option<Self> {
        FlagStart::parse(arg).map(|start| Flag::new(&arg[start.as_str().len()..], start))
    }

    fn is(&self, short: &str, long: &str) -> bool {
        match self.start {
            FlagStart::Dash => self.name == short,
            FlagStart::Long => self.name == long,
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.start.as_str(), self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputArg {
    Flag(Flag),
    Arg(OsString),
}

impl InputArg {
    /// Arguments that are not valid UTF-8 can only be paths.
    fn parse(full_arg: OsString) -> Self {
        match full_arg.to_str().and_then(Flag::parse) {
            Some(flag) => Self::Flag(flag),
            None => Self::Arg(full_arg),
        }
    }

    /// classify every argument; everything after a bare `--` is an ordinary
    /// argument
    pub fn parse_all<I: IntoIterator<Item = OsString>>(args: I) -> Vec<Self> {
        let mut flags_done = false;
        args.into_iter()
            .filter_map(|arg| {
                if flags_done {
                    Some(Self::Arg(arg))
                } else if arg == FlagStart::Long.as_str() {
                    flags_done = true;
                    None
                } else {
                    Some(Self::parse(arg))
                }
            })
            .collect()
    }
}

/// What one run of the tool should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub input: PathBuf,
    pub output: Destination,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Minify(Invocation),
    Help,
    Version,
}

/// Parse the arguments that follow the program name.
pub fn parse<I: IntoIterator<Item = OsString>>(args: I) -> Result<Command> {
    let mut positional = Vec::new();
    for arg in InputArg::parse_all(args) {
        match arg {
            InputArg::Flag(flag) if flag.is("h", "help") => return Ok(Command::Help),
            InputArg::Flag(flag) if flag.is("V", "version") => return Ok(Command::Version),
            InputArg::Flag(flag) => {
                return Err(MinifyError::Usage(format!("unknown flag '{flag}'")))
            }
            InputArg::Arg(arg) => positional.push(arg),
        }
    }

    match positional.as_slice() {
        [] => Err(MinifyError::Usage("missing input file".to_owned())),
        [input] => Ok(Command::Minify(Invocation {
            input: PathBuf::from(input),
            output: Destination::Stdout,
        })),
        [input, output] => Ok(Command::Minify(Invocation {
            input: PathBuf::from(input),
            output: Destination::from_arg(Some(output.as_os_str())),
        })),
        [_, _, extra, ..] => Err(MinifyError::Usage(format!(
            "unexpected argument '{}'",
            extra.to_string_lossy()
        ))),
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <input-file> [output-file]\n\
         \n\
         Strips comments and redundant whitespace from a C source file.\n\
         The result goes to output-file, or to stdout when none is given.\n\
         \n\
         Options:\n\
         \x20 -h, --help     print this message\n\
         \x20 -V, --version  print the version\n"
    )
}

pub fn version() -> String {
    format!("{} {}\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
