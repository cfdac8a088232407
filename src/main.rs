mod cli;
mod emit;
mod error;
mod keyword;
mod logging;
mod minify;
mod pipeline;
mod punct;
mod scan;
mod source;

use std::process::ExitCode;

use cli::{Command, Invocation};
use error::MinifyError;
use source::file::SourceBuffer;

fn run(invocation: &Invocation) -> error::Result<()> {
    let source = SourceBuffer::open(&invocation.input)?;
    let minified = pipeline::run(source)?;
    emit::emit(&invocation.output, minified.into_buffer())
}

fn main() -> ExitCode {
    logging::init();

    let mut args = std::env::args_os();
    let program = args
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned());

    match cli::parse(args) {
        Ok(Command::Help) => {
            print!("{}", cli::usage(&program));
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            print!("{}", cli::version());
            ExitCode::SUCCESS
        }
        Ok(Command::Minify(invocation)) => match run(&invocation) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                log::error!("{:?}", err.root());
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
        Err(MinifyError::Usage(msg)) => {
            eprintln!("error: {msg}");
            print!("{}", cli::usage(&program));
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
