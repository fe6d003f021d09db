/// A borrowed view into the original input buffer, stored as an offset and a
/// length rather than a slice so that `Token`/AST nodes stay `Copy` and the
/// lexer never has to fight the borrow checker over overlapping mutable
/// access to `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: u32,
    pub len: u32,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Span {
            start: start as u32,
            len: len as u32,
        }
    }

    pub fn from_range(start: usize, end: usize) -> Self {
        Span::new(start, end.saturating_sub(start))
    }

    pub fn end(&self) -> usize {
        self.start as usize + self.len as usize
    }

    /// resolves this span against `source`, returning the raw (still quoted,
    /// still escaped) bytes it covers.
    pub fn bytes<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        &source[self.start as usize..self.end()]
    }

    /// resolves this span as UTF-8 text. the grammar guarantees every span
    /// that isn't an opaque captured expression is ASCII, so this never
    /// panics on well-formed input; non-ASCII bytes inside quoted content
    /// still round-trip correctly through `bytes()`.
    pub fn text<'a>(&self, source: &'a [u8]) -> &'a str {
        std::str::from_utf8(self.bytes(source)).unwrap_or("")
    }
}
