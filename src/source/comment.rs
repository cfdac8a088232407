use crate::{
    error::{MinifyError, Result},
    scan::{Class, CommentKind, Cursor},
};

use super::file::{reserve, SourceBuffer};

/// Removes `//` and `/* */` comments, copying every other byte as-is.
///
/// String and character literals are not recognized here, so a comment marker
/// inside a literal still opens a comment.
pub struct CommentFilter<'a> {
    iter: Cursor<'a>,
    out: Vec<u8>,
}

impl<'a> CommentFilter<'a> {
    fn new(src: &'a [u8], out: Vec<u8>) -> Self {
        Self {
            iter: Cursor::new(src),
            out,
        }
    }

    fn state(&self) -> Class {
        match (self.iter.peek(), self.iter.peek_at(1)) {
            (Some(b'/'), Some(b'/')) => Class::Comment(CommentKind::Line),
            (Some(b'/'), Some(b'*')) => Class::Comment(CommentKind::Block),
            _ => Class::Other,
        }
    }

    /// the newline itself is left for the next iteration to copy
    fn iter_until_newline(&mut self) {
        let _ = self.iter.eat_until(b'\n');
    }

    fn iter_until_blockend(&mut self) -> Result<()> {
        let start = self.iter.pos();
        self.iter.advance(2);
        if self.iter.skip_past(b"*/") {
            Ok(())
        } else {
            Err(MinifyError::UnterminatedComment {
                at: self.iter.loc(start),
            })
        }
    }

    fn run(mut self) -> Result<Vec<u8>> {
        while !self.iter.is_eof() {
            match self.state() {
                Class::Comment(CommentKind::Line) => self.iter_until_newline(),
                Class::Comment(CommentKind::Block) => self.iter_until_blockend()?,
                _ => {
                    if let Some(ch) = self.iter.bump() {
                        self.out.push(ch);
                    }
                }
            }
        }
        Ok(self.out)
    }
}

/// Strip all comments from `input`, consuming it.
pub fn strip(input: SourceBuffer) -> Result<SourceBuffer> {
    let out = reserve(input.len())?;
    let stripped = CommentFilter::new(input.stream(), out).run()?;
    log::debug!(
        "{}: stripped comments, {} -> {} bytes",
        input.origin(),
        input.len(),
        stripped.len()
    );
    Ok(input.derive(stripped))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        error::{MinifyError, Result},
        source::file::SourceBuffer,
    };

    use super::strip;

    fn stripped(input: &str) -> Result<String> {
        strip(SourceBuffer::inline(input)).map(|src| src.to_string())
    }

    #[test]
    fn line_comment_keeps_newline() -> Result<()> {
        assert_eq!("\ncode();", stripped("// comment\ncode();")?);
        assert_eq!("int x; \nint y;", stripped("int x; // trailing\nint y;")?);
        Ok(())
    }

    #[test]
    fn line_comment_at_eof() -> Result<()> {
        assert_eq!("x;", stripped("x;// done")?);
        Ok(())
    }

    #[test]
    fn block_comment() -> Result<()> {
        assert_eq!("int x;", stripped("/* multi\nline */int x;")?);
        assert_eq!("a  b", stripped("a /* one */ b")?);
        assert_eq!("ab", stripped("a/***/b")?);
        Ok(())
    }

    #[test]
    fn block_comment_is_not_nested() -> Result<()> {
        assert_eq!(" b */", stripped("/* a /* inner */ b */")?);
        assert_eq!("x", stripped("/* // */x")?);
        Ok(())
    }

    #[test]
    fn lone_slashes_survive() -> Result<()> {
        assert_eq!("a / b", stripped("a / b")?);
        assert_eq!("/", stripped("/")?);
        Ok(())
    }

    #[test]
    fn markers_inside_literals_still_open_comments() -> Result<()> {
        assert_eq!("char *u = \"http:", stripped("char *u = \"http://host\";")?);
        Ok(())
    }

    #[test]
    fn unterminated_block() {
        let err = stripped("int x;\n  /* never closed *").unwrap_err();
        match err {
            MinifyError::UnterminatedComment { at } => {
                assert_eq!(2, at.line());
                assert_eq!(3, at.col());
                assert_eq!(9, at.byte());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty() -> Result<()> {
        assert_eq!("", stripped("")?);
        Ok(())
    }
}
