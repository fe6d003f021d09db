use std::fmt;

/// stable, externally-visible error taxonomy. discriminants start at 1 so a
/// C shim built on top of this crate can reserve `0` for success without
/// renumbering anything here.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// allocation failure. unreachable with ordinary `Vec`/`String` (those
    /// abort the process instead of returning), kept for ABI parity with
    /// the distilled spec's error taxonomy.
    MemoryError = 1,
    SyntaxError = 2,
    UnsupportedStatement = 3,
    UnterminatedLiteral = 4,
    UnterminatedComment = 5,
}

impl ErrorCode {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::MemoryError => "MemoryError",
            ErrorCode::SyntaxError => "SyntaxError",
            ErrorCode::UnsupportedStatement => "UnsupportedStatement",
            ErrorCode::UnterminatedLiteral => "UnterminatedLiteral",
            ErrorCode::UnterminatedComment => "UnterminatedComment",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// one error per parse: DDL parsing is all-or-nothing, no recovery is
/// attempted past the first mismatch (see distilled spec §4.3 Failure
/// semantics), so there is never more than one of these per `parse()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    pub msg: String,
    pub note: String,
    /// byte offset into the original input where the error was detected.
    pub pos: usize,
}

impl ParseError {
    pub fn new(code: ErrorCode, pos: usize, msg: impl Into<String>, note: impl Into<String>) -> Self {
        ParseError {
            code,
            msg: msg.into(),
            note: note.into(),
            pos,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}: {}", self.code, self.pos, self.msg)?;
        if !self.note.is_empty() {
            write!(f, " ({})", self.note)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
