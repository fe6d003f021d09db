use crate::error::{ErrorCode, ParseError};
use crate::keyword::Keyword;
use crate::quoting;
use crate::span::Span;

#[cfg(test)]
mod tests;

/// quoting style an `Identifier` token was lexed from. `Bare` identifiers
/// need no escape reversal; the other three double their closing delimiter
/// to escape a literal occurrence of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Bare,
    Double,
    Backtick,
    Bracket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punct {
    LParen,
    RParen,
    Comma,
    Semicolon,
    Dot,
    Plus,
    Minus,
}

/// A token never owns text: `Identifier`/`StringLiteral` carry a `content`
/// span that has already had the surrounding quote characters stripped but
/// not yet had escapes reversed (see [`crate::quoting::unescape`]) — reversal
/// is deferred to whoever consumes the token, since most callers never need
/// it (bare identifiers, which are the overwhelming majority, have nothing
/// to reverse).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier { content: Span, quote: Quote },
    Keyword(Keyword),
    StringLiteral { content: Span },
    NumericLiteral,
    Punct(Punct),
    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// span of the whole token as written, quote characters included.
    pub span: Span,
}

impl Token {
    /// resolves an `Identifier` token's content with escapes reversed.
    /// panics if called on a non-identifier token — callers only invoke
    /// this after matching on `TokenKind::Identifier`.
    pub fn ident_bytes<'a>(&self, source: &'a [u8]) -> std::borrow::Cow<'a, [u8]> {
        match self.kind {
            TokenKind::Identifier { content, quote } => {
                let raw = content.bytes(source);
                match quote {
                    Quote::Bare => std::borrow::Cow::Borrowed(raw),
                    Quote::Double => quoting::unescape(raw, b'"'),
                    Quote::Backtick => quoting::unescape(raw, b'`'),
                    Quote::Bracket => quoting::unescape(raw, b']'),
                }
            }
            _ => panic!("ident_bytes called on a non-identifier token"),
        }
    }

    /// resolves a `StringLiteral` token's content with `''` escapes
    /// reversed.
    pub fn string_bytes<'a>(&self, source: &'a [u8]) -> std::borrow::Cow<'a, [u8]> {
        match self.kind {
            TokenKind::StringLiteral { content } => quoting::unescape(content.bytes(source), b'\''),
            _ => panic!("string_bytes called on a non-string token"),
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

/// Byte-level tokeniser over the input slice. Skips whitespace and both
/// comment styles, never copies: every produced token refers back into
/// `source` via a [`Span`].
pub struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
    peeked: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Lexer {
            source,
            pos: 0,
            peeked: None,
        }
    }

    /// returns the next token without consuming it. cheap: the parser is
    /// free to call this as often as it likes, it only ever drives the
    /// scanner once per position.
    pub fn peek(&mut self) -> Result<Token, ParseError> {
        if self.peeked.is_none() {
            self.peeked = Some(self.scan()?);
        }
        Ok(self.peeked.unwrap())
    }

    pub fn next(&mut self) -> Result<Token, ParseError> {
        if let Some(tok) = self.peeked.take() {
            return Ok(tok);
        }
        self.scan()
    }

    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match self.source.get(self.pos) {
                Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => self.pos += 1,
                Some(b'-') if self.source.get(self.pos + 1) == Some(&b'-') => {
                    self.pos = quoting::skip_line_comment(self.source, self.pos);
                }
                Some(b'/') if self.source.get(self.pos + 1) == Some(&b'*') => {
                    self.pos = quoting::skip_block_comment(self.source, self.pos)?;
                }
                _ => return Ok(()),
            }
        }
    }

    fn punct(&self, p: Punct, start: usize) -> Token {
        Token {
            kind: TokenKind::Punct(p),
            span: Span::from_range(start, self.pos),
        }
    }

    fn scan(&mut self) -> Result<Token, ParseError> {
        self.skip_trivia()?;
        let start = self.pos;
        let Some(&c) = self.source.get(self.pos) else {
            return Ok(Token {
                kind: TokenKind::Eof,
                span: Span::new(start, 0),
            });
        };

        match c {
            b'(' => {
                self.pos += 1;
                Ok(self.punct(Punct::LParen, start))
            }
            b')' => {
                self.pos += 1;
                Ok(self.punct(Punct::RParen, start))
            }
            b',' => {
                self.pos += 1;
                Ok(self.punct(Punct::Comma, start))
            }
            b';' => {
                self.pos += 1;
                Ok(self.punct(Punct::Semicolon, start))
            }
            b'+' => {
                self.pos += 1;
                Ok(self.punct(Punct::Plus, start))
            }
            b'-' => {
                self.pos += 1;
                Ok(self.punct(Punct::Minus, start))
            }
            b'.' if self.source.get(self.pos + 1).is_some_and(u8::is_ascii_digit) => {
                self.scan_number(start)
            }
            b'.' => {
                self.pos += 1;
                Ok(self.punct(Punct::Dot, start))
            }
            b'0'..=b'9' => self.scan_number(start),
            b'\'' => self.scan_string(start),
            b'"' => self.scan_quoted_ident(start, Quote::Double, b'"'),
            b'`' => self.scan_quoted_ident(start, Quote::Backtick, b'`'),
            b'[' => self.scan_bracket_ident(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.scan_word(start),
            _ => Err(ParseError::new(
                ErrorCode::SyntaxError,
                start,
                format!("unexpected character '{}'", c as char),
                "not valid at this point in the CREATE/ALTER TABLE grammar",
            )),
        }
    }

    fn scan_number(&mut self, start: usize) -> Result<Token, ParseError> {
        while self.source.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        if self.source.get(self.pos) == Some(&b'.') {
            self.pos += 1;
            while self.source.get(self.pos).is_some_and(u8::is_ascii_digit) {
                self.pos += 1;
            }
        }
        Ok(Token {
            kind: TokenKind::NumericLiteral,
            span: Span::from_range(start, self.pos),
        })
    }

    fn scan_word(&mut self, start: usize) -> Result<Token, ParseError> {
        while self
            .source
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'$')
        {
            self.pos += 1;
        }
        let span = Span::from_range(start, self.pos);
        let kind = match Keyword::from_str(span.text(self.source)) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Identifier {
                content: span,
                quote: Quote::Bare,
            },
        };
        Ok(Token { kind, span })
    }

    fn scan_string(&mut self, start: usize) -> Result<Token, ParseError> {
        let end = quoting::scan_quoted(self.source, self.pos, b'\'')?;
        self.pos = end;
        Ok(Token {
            kind: TokenKind::StringLiteral {
                content: Span::from_range(start + 1, end - 1),
            },
            span: Span::from_range(start, end),
        })
    }

    fn scan_quoted_ident(&mut self, start: usize, quote: Quote, qc: u8) -> Result<Token, ParseError> {
        let end = quoting::scan_quoted(self.source, self.pos, qc)?;
        self.pos = end;
        Ok(Token {
            kind: TokenKind::Identifier {
                content: Span::from_range(start + 1, end - 1),
                quote,
            },
            span: Span::from_range(start, end),
        })
    }

    fn scan_bracket_ident(&mut self, start: usize) -> Result<Token, ParseError> {
        let end = quoting::scan_bracket(self.source, self.pos)?;
        self.pos = end;
        Ok(Token {
            kind: TokenKind::Identifier {
                content: Span::from_range(start + 1, end - 1),
                quote: Quote::Bracket,
            },
            span: Span::from_range(start, end),
        })
    }

    /// exposes the cursor's byte offset for the parenthesised-expression
    /// capturer, which takes over raw scanning after the parser consumes an
    /// opening `(`.
    pub fn pos(&self) -> usize {
        debug_assert!(self.peeked.is_none(), "capture must start with no pending peek");
        self.pos
    }

    /// reseats the cursor, used by the parser after a capture hands back
    /// control past the matching `)`.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
        self.peeked = None;
    }

    pub fn source(&self) -> &'a [u8] {
        self.source
    }
}
