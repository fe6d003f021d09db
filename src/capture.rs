//! The parenthesised-expression capturer (distilled spec §4.2). Invoked
//! right after the parser has consumed the `(` opening a `DEFAULT (...)`,
//! `CHECK (...)`, or `GENERATED ALWAYS AS (...)` clause. Scans forward
//! balancing parens while treating quoted runs and comments as opaque, and
//! hands back the verbatim byte range strictly inside the outer
//! parentheses — never re-lexed, because the grammar does not bound the
//! internal expression language.

use crate::error::{ErrorCode, ParseError};
use crate::quoting;
use crate::span::Span;

/// `start` is the byte offset immediately after the opening `(` that the
/// parser already consumed (so this function starts at depth 1). Returns
/// the span of the captured inner text and the byte offset immediately
/// after the matching closing `)`.
pub fn capture(source: &[u8], start: usize) -> Result<(Span, usize), ParseError> {
    let mut pos = start;
    let mut depth: usize = 1;

    while pos < source.len() {
        match source[pos] {
            b'(' => {
                depth += 1;
                pos += 1;
            }
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((Span::from_range(start, pos), pos + 1));
                }
                pos += 1;
            }
            b'\'' => pos = quoting::scan_quoted(source, pos, b'\'')?,
            b'"' => pos = quoting::scan_quoted(source, pos, b'"')?,
            b'`' => pos = quoting::scan_quoted(source, pos, b'`')?,
            b'[' => pos = quoting::scan_bracket(source, pos)?,
            b'-' if source.get(pos + 1) == Some(&b'-') => {
                pos = quoting::skip_line_comment(source, pos);
            }
            b'/' if source.get(pos + 1) == Some(&b'*') => {
                pos = quoting::skip_block_comment(source, pos)?;
            }
            _ => pos += 1,
        }
    }

    Err(ParseError::new(
        ErrorCode::UnterminatedLiteral,
        start,
        "unterminated parenthesised expression",
        "reached end of input before the matching ')'",
    ))
}
