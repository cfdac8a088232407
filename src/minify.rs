use crate::{
    error::{MinifyError, Quote, Result},
    keyword::Keyword,
    punct::{fuses, Punctuator},
    scan::{is_ident, is_space, is_trailing_space, Class, Cursor},
    source::file::{reserve, SourceBuffer},
};

/// Collapses whitespace in comment-free C source.
///
/// A separator survives only where dropping it would merge two tokens: between
/// two identifier runs, after a reserved [`Keyword`] not followed by `(`, and
/// between operator bytes that [`fuses`] says would join. Preprocessor lines are
/// whitespace-sensitive and pass through untouched on a line of their own.
/// Literal contents are copied verbatim; escapes are not interpreted, so a
/// literal ends at the next matching quote byte.
pub struct Minifier<'a> {
    iter: Cursor<'a>,
    out: Vec<u8>,
}

impl<'a> Minifier<'a> {
    fn new(src: &'a [u8], out: Vec<u8>) -> Self {
        Self {
            iter: Cursor::new(src),
            out,
        }
    }

    pub fn classify(ch: u8) -> Class {
        match ch {
            ch if is_ident(ch) => Class::Identifier,
            b'#' => Class::Preprocessor,
            ch if is_space(ch) => Class::Whitespace,
            b'\'' => Class::CharLiteral,
            b'"' => Class::StringLiteral,
            ch if Punctuator::from_byte(ch).is_some() => Class::Punctuator,
            _ => Class::Other,
        }
    }

    fn separate(&mut self) {
        self.out.push(b' ');
    }

    fn identifier(&mut self) {
        let id = self.iter.eat_while(is_ident);
        self.out.extend_from_slice(id);
        let spaced = !self.iter.eat_while(is_space).is_empty();

        let keyword = Keyword::from_id(id);
        let class = if keyword.is_some() {
            Class::Keyword
        } else {
            Class::Identifier
        };
        log::trace!("{:?} `{}`", class, String::from_utf8_lossy(id));

        let next = self.iter.peek();
        let needs_separator = match keyword {
            Some(keyword) => keyword.needs_separator(next),
            None => next.is_some_and(is_ident) || (spaced && ends_exponent(id, next)),
        };
        if needs_separator {
            self.separate();
        }
    }

    fn directive(&mut self) {
        if self.out.last().is_some_and(|&ch| ch != b'\n') {
            self.out.push(b'\n');
        }
        let line = self.iter.eat_while(|ch| ch != b'\n');
        self.out.extend_from_slice(line);
        self.out.push(b'\n');
    }

    fn whitespace(&mut self) {
        self.iter.eat_while(is_space);
        let last = self.out.last().copied();
        if let (Some(last), Some(next)) = (last, self.iter.peek()) {
            if fuses(last, next) {
                self.separate();
            }
        }
    }

    fn punctuator(&mut self, punct: Punctuator) {
        self.iter.bump();
        self.out.push(punct.as_byte());
        if punct.collapses_trailing() {
            self.iter.eat_while(is_trailing_space);
        }
    }

    fn literal(&mut self, quote: Quote) -> Result<()> {
        let start = self.iter.pos();
        let q = quote.as_byte();
        self.iter.bump();
        match self.iter.eat_until(q) {
            Some(body) => {
                self.iter.bump();
                self.out.push(q);
                self.out.extend_from_slice(body);
                self.out.push(q);
                Ok(())
            }
            None => Err(MinifyError::UnterminatedLiteral {
                quote,
                at: self.iter.loc(start),
            }),
        }
    }

    fn run(mut self) -> Result<Vec<u8>> {
        while let Some(ch) = self.iter.peek() {
            match Self::classify(ch) {
                Class::Identifier => self.identifier(),
                Class::Preprocessor => self.directive(),
                Class::Whitespace => self.whitespace(),
                Class::CharLiteral | Class::StringLiteral => {
                    if let Some(quote) = Quote::from_byte(ch) {
                        self.literal(quote)?;
                    }
                }
                Class::Punctuator => {
                    if let Some(punct) = Punctuator::from_byte(ch) {
                        self.punctuator(punct);
                    }
                }
                _ => {
                    self.iter.bump();
                    self.out.push(ch);
                }
            }
        }
        Ok(self.out)
    }
}

/// A number ending in an exponent letter directly followed by a sign lexes as
/// one pp-number (`0x1e+2`), so the sign must stay apart from it.
fn ends_exponent(id: &[u8], next: Option<u8>) -> bool {
    id.first().is_some_and(u8::is_ascii_digit)
        && id.last().is_some_and(|&ch| matches!(ch, b'e' | b'E' | b'p' | b'P'))
        && matches!(next, Some(b'+' | b'-'))
}

/// Minify comment-free source, consuming it.
pub fn minify(input: SourceBuffer) -> Result<SourceBuffer> {
    let out = reserve(input.len())?;
    let minified = Minifier::new(input.stream(), out).run()?;
    log::debug!(
        "{}: minified, {} -> {} bytes",
        input.origin(),
        input.len(),
        minified.len()
    );
    Ok(input.derive(minified))
}
