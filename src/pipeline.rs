//! Strip, then minify. Each pass consumes the previous pass's buffer.

use crate::{
    error::Result,
    minify::minify,
    source::{comment::strip, file::SourceBuffer},
};

/// A minified buffer along with the size of the source it came from.
#[derive(Debug, Clone)]
pub struct Minified {
    buffer: SourceBuffer,
    pub original_len: usize,
    pub minified_len: usize,
}

impl Minified {
    pub fn reduction_pct(&self) -> f64 {
        if self.original_len == 0 {
            return 0.0;
        }
        (self.original_len as f64 - self.minified_len as f64) / self.original_len as f64 * 100.0
    }

    pub fn into_buffer(self) -> SourceBuffer {
        self.buffer
    }
}

pub fn run(source: SourceBuffer) -> Result<Minified> {
    let origin = source.origin().to_owned();
    let original_len = source.len();

    let buffer = strip(source)
        .and_then(minify)
        .map_err(|err| err.in_source(&origin))?;

    let minified = Minified {
        original_len,
        minified_len: buffer.len(),
        buffer,
    };
    log::info!(
        "{}: {} -> {} bytes ({:.1}% smaller)",
        origin,
        minified.original_len,
        minified.minified_len,
        minified.reduction_pct()
    );
    Ok(minified)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use crate::{
        error::{MinifyError, Result},
        source::file::SourceBuffer,
    };

    use super::run;

    #[test]
    fn hello_world() -> Result<()> {
        let minified = run(SourceBuffer::open(Path::new("tests/hello_world.c"))?)?;
        assert_eq!(
            "#include <stdio.h>\n#define GREETING \"hello,  world\"\nint main(int argc,char **argv){if(argc>1){printf(\"%s\\n\",argv[1]);return 0;}printf(GREETING\"\\n\");return(0);}",
            minified.clone().into_buffer().to_string()
        );
        assert!(minified.minified_len < minified.original_len);
        assert!(minified.reduction_pct() > 0.0);
        Ok(())
    }

    #[test]
    fn empty_source() -> Result<()> {
        let minified = run(SourceBuffer::inline(""))?;
        assert_eq!(0.0, minified.reduction_pct());
        assert_eq!(0, minified.minified_len);
        assert!(minified.into_buffer().is_empty());
        Ok(())
    }

    #[test]
    fn errors_name_the_source() {
        let err = run(SourceBuffer::inline("int x; /* open")).unwrap_err();
        assert_eq!("<inline>:1:8: unterminated block comment", err.to_string());
        assert!(matches!(err.root(), MinifyError::UnterminatedComment { .. }));
    }

    #[test]
    fn idempotent() -> Result<()> {
        let once = run(SourceBuffer::open(Path::new("tests/hello_world.c"))?)?.into_buffer();
        let twice = run(once.clone())?.into_buffer();
        assert_eq!(once.to_string(), twice.to_string());
        Ok(())
    }
}
