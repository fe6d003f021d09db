//! The recursive-descent parser (distilled spec §4.3). Consumes tokens one
//! at a time from a [`Lexer`], turning parenthesised expressions over to
//! [`capture`] instead of re-lexing their contents, and builds the tagged
//! [`crate::model`] values directly — there is no intermediate parse tree.
//!
//! Grammar mismatches all resolve to a single [`ParseError`] (distilled spec
//! §4.3 Failure semantics: DDL parsing is all-or-nothing, no error recovery
//! is attempted past the first one).

#[cfg(test)]
mod tests;

use std::borrow::Cow;

#[cfg(feature = "trace")]
use proc::trace;

use crate::capture::capture;
use crate::error::{ErrorCode, ParseError};
use crate::keyword::Keyword;
use crate::lexer::{Lexer, Punct, Quote, Token, TokenKind};
use crate::model::*;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    source: &'a [u8],
}

pub fn parse(source: &[u8]) -> Result<Model<'_>, ParseError> {
    let mut parser = Parser::new(source);
    let tok = parser.peek()?;
    match tok.kind {
        TokenKind::Keyword(Keyword::CREATE) => Ok(Model::Table(parser.parse_create_table()?)),
        TokenKind::Keyword(Keyword::ALTER) => Ok(Model::Alter(parser.parse_alter_table()?)),
        TokenKind::Eof => Err(ParseError::new(
            ErrorCode::SyntaxError,
            0,
            "empty input",
            "expected a CREATE TABLE or ALTER TABLE statement",
        )),
        _ => Err(ParseError::new(
            ErrorCode::UnsupportedStatement,
            tok.span.start as usize,
            "unsupported statement",
            "only CREATE TABLE and ALTER TABLE are recognised",
        )),
    }
}

impl<'a> Parser<'a> {
    fn new(source: &'a [u8]) -> Self {
        Parser {
            lexer: Lexer::new(source),
            source,
        }
    }

    // --- token-stream primitives -----------------------------------------

    fn peek(&mut self) -> Result<Token, ParseError> {
        self.lexer.peek()
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        self.lexer.next()
    }

    fn err(&self, pos: usize, msg: impl Into<String>, note: impl Into<String>) -> ParseError {
        ParseError::new(ErrorCode::SyntaxError, pos, msg, note)
    }

    fn is_keyword(&mut self, kw: Keyword) -> Result<bool, ParseError> {
        Ok(matches!(self.peek()?.kind, TokenKind::Keyword(k) if k == kw))
    }

    fn is_punct(&mut self, p: Punct) -> Result<bool, ParseError> {
        Ok(matches!(self.peek()?.kind, TokenKind::Punct(pp) if pp == p))
    }

    fn eat_keyword(&mut self, kw: Keyword) -> Result<bool, ParseError> {
        if self.is_keyword(kw)? {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn eat_punct(&mut self, p: Punct) -> Result<bool, ParseError> {
        if self.is_punct(p)? {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect_keyword(&mut self, kw: Keyword) -> Result<Token, ParseError> {
        let tok = self.advance()?;
        match tok.kind {
            TokenKind::Keyword(k) if k == kw => Ok(tok),
            _ => Err(self.err(
                tok.span.start as usize,
                format!("expected keyword {}", kw.name()),
                format!("found {:?} instead", tok.kind),
            )),
        }
    }

    fn expect_punct(&mut self, p: Punct, what: &str) -> Result<Token, ParseError> {
        let tok = self.advance()?;
        match tok.kind {
            TokenKind::Punct(pp) if pp == p => Ok(tok),
            _ => Err(self.err(
                tok.span.start as usize,
                format!("expected {what}"),
                format!("found {:?} instead", tok.kind),
            )),
        }
    }

    /// quoted-identifier content is only ever invalid UTF-8 for input that
    /// isn't valid UTF-8 to begin with (the quoting/escape machinery never
    /// introduces a bad byte sequence on its own), so this is reported as a
    /// distinct, accurately-worded syntax error rather than silently
    /// collapsing to an empty string and misreporting as "empty identifier".
    fn decode_ident(&self, tok: &Token) -> Result<Ident<'a>, ParseError> {
        match tok.ident_bytes(self.source) {
            Cow::Borrowed(b) => std::str::from_utf8(b).map(Cow::Borrowed).map_err(|_| self.invalid_utf8(tok)),
            Cow::Owned(v) => String::from_utf8(v).map(Cow::Owned).map_err(|_| self.invalid_utf8(tok)),
        }
    }

    fn decode_string(&self, tok: &Token) -> Result<Ident<'a>, ParseError> {
        match tok.string_bytes(self.source) {
            Cow::Borrowed(b) => std::str::from_utf8(b).map(Cow::Borrowed).map_err(|_| self.invalid_utf8(tok)),
            Cow::Owned(v) => String::from_utf8(v).map(Cow::Owned).map_err(|_| self.invalid_utf8(tok)),
        }
    }

    fn invalid_utf8(&self, tok: &Token) -> ParseError {
        self.err(
            tok.span.start as usize,
            "invalid UTF-8 in quoted content",
            "quoted identifiers and string literals must be valid UTF-8",
        )
    }

    /// accepts anything the grammar might legally treat as a name at this
    /// position: a plain identifier, a keyword reinterpreted as an
    /// identifier (a column can be named `key`), or — a documented SQLite
    /// quirk the `original_source` test corpus exercises directly
    /// (`CONSTRAINT 'PrimaryKey'`) — a single-quoted string literal.
    fn consume_name(&mut self) -> Result<Ident<'a>, ParseError> {
        let tok = self.advance()?;
        let ident = match tok.kind {
            TokenKind::Identifier { .. } => self.decode_ident(&tok)?,
            TokenKind::Keyword(_) => Cow::Borrowed(tok.span.text(self.source)),
            TokenKind::StringLiteral { .. } => self.decode_string(&tok)?,
            _ => {
                return Err(self.err(
                    tok.span.start as usize,
                    "expected an identifier",
                    format!("found {:?} instead", tok.kind),
                ));
            }
        };
        if ident.is_empty() {
            return Err(self.err(tok.span.start as usize, "empty identifier", "identifiers must contain at least one character"));
        }
        Ok(ident)
    }

    fn parse_ident_list(&mut self) -> Result<Vec<Ident<'a>>, ParseError> {
        let mut out = vec![self.consume_name()?];
        while self.eat_punct(Punct::Comma)? {
            out.push(self.consume_name()?);
        }
        Ok(out)
    }

    fn parse_qualified_name(&mut self) -> Result<(Option<Ident<'a>>, Ident<'a>), ParseError> {
        let first = self.consume_name()?;
        if self.eat_punct(Punct::Dot)? {
            let second = self.consume_name()?;
            Ok((Some(first), second))
        } else {
            Ok((None, first))
        }
    }

    // --- CREATE TABLE -------------------------------------------------

    #[cfg_attr(feature = "trace", trace)]
    fn parse_create_table(&mut self) -> Result<Table<'a>, ParseError> {
        self.expect_keyword(Keyword::CREATE)?;
        let is_temp = if self.eat_keyword(Keyword::TEMP)? {
            true
        } else {
            self.eat_keyword(Keyword::TEMPORARY)?
        };
        self.expect_keyword(Keyword::TABLE)?;
        let if_not_exists = if self.eat_keyword(Keyword::IF)? {
            self.expect_keyword(Keyword::NOT)?;
            self.expect_keyword(Keyword::EXISTS)?;
            true
        } else {
            false
        };
        let (schema, name) = self.parse_qualified_name()?;
        self.expect_punct(Punct::LParen, "'(' to open the column list")?;

        let mut columns = Vec::new();
        let mut table_constraints = Vec::new();
        loop {
            if self.starts_table_constraint()? {
                table_constraints.push(self.parse_table_constraint()?);
            } else {
                columns.push(self.parse_column_def()?);
            }
            if !self.eat_punct(Punct::Comma)? {
                break;
            }
        }
        self.expect_punct(Punct::RParen, "')' to close the column list")?;
        let (without_rowid, strict) = self.parse_table_options()?;
        self.eat_punct(Punct::Semicolon)?;

        Ok(Table {
            schema,
            name,
            is_temp,
            if_not_exists,
            without_rowid,
            strict,
            columns,
            table_constraints,
        })
    }

    /// `CONSTRAINT` is fully reserved at this position: a column cannot be
    /// bare-named `constraint` (it would lex as the keyword), so seeing it,
    /// or one of the four table-constraint starters, is unambiguous.
    fn starts_table_constraint(&mut self) -> Result<bool, ParseError> {
        let tok = self.peek()?;
        Ok(matches!(
            tok.kind,
            TokenKind::Keyword(Keyword::CONSTRAINT)
                | TokenKind::Keyword(Keyword::PRIMARY)
                | TokenKind::Keyword(Keyword::UNIQUE)
                | TokenKind::Keyword(Keyword::CHECK)
                | TokenKind::Keyword(Keyword::FOREIGN)
        ))
    }

    fn parse_table_options(&mut self) -> Result<(bool, bool), ParseError> {
        let mut without_rowid = false;
        let mut strict = false;
        loop {
            let matched = if self.eat_keyword(Keyword::WITHOUT)? {
                self.expect_keyword(Keyword::ROWID)?;
                without_rowid = true;
                true
            } else if self.eat_keyword(Keyword::STRICT)? {
                strict = true;
                true
            } else {
                false
            };
            if !matched || !self.eat_punct(Punct::Comma)? {
                break;
            }
        }
        Ok((without_rowid, strict))
    }

    // --- column_def -----------------------------------------------------

    #[cfg_attr(feature = "trace", trace)]
    fn parse_column_def(&mut self) -> Result<Column<'a>, ParseError> {
        let name = self.consume_name()?;
        let type_name = self.parse_type_name()?;
        let constraints = self.parse_column_constraints()?;
        Ok(Column { name, type_name, constraints })
    }

    /// the type name is either absent (next token is `,`, `)`, `CONSTRAINT`,
    /// or a column-constraint starter) or one or more bare identifiers
    /// optionally followed by a verbatim `(...)` size specifier.
    #[cfg_attr(feature = "trace", trace)]
    fn parse_type_name(&mut self) -> Result<Option<&'a str>, ParseError> {
        let start_tok = self.peek()?;
        let start = start_tok.span.start as usize;
        let mut end = start;
        let mut had_any = false;
        loop {
            let tok = self.peek()?;
            match tok.kind {
                TokenKind::Identifier { quote: Quote::Bare, .. } => {
                    had_any = true;
                    end = tok.span.end();
                    self.advance()?;
                }
                _ => break,
            }
        }
        if !had_any {
            return Ok(None);
        }
        if self.is_punct(Punct::LParen)? {
            let open = self.advance()?;
            let (_, after) = capture(self.source, open.span.end())?;
            self.lexer.seek(after);
            end = after;
        }
        Ok(Some(std::str::from_utf8(&self.source[start..end]).unwrap_or("")))
    }

    #[cfg_attr(feature = "trace", trace)]
    fn parse_column_constraints(&mut self) -> Result<Vec<ColumnConstraint<'a>>, ParseError> {
        let mut out = Vec::new();
        loop {
            let tok = self.peek()?;
            if matches!(tok.kind, TokenKind::Punct(Punct::Comma) | TokenKind::Punct(Punct::RParen)) {
                break;
            }
            let name = if self.eat_keyword(Keyword::CONSTRAINT)? {
                Some(self.consume_name()?)
            } else {
                None
            };
            let kind = self.parse_column_constraint_kind()?;
            out.push(ColumnConstraint { name, kind });
        }
        Ok(out)
    }

    #[cfg_attr(feature = "trace", trace)]
    fn parse_column_constraint_kind(&mut self) -> Result<ColumnConstraintKind<'a>, ParseError> {
        let tok = self.peek()?;
        match tok.kind {
            TokenKind::Keyword(Keyword::PRIMARY) => {
                self.advance()?;
                self.expect_keyword(Keyword::KEY)?;
                let order = if self.eat_keyword(Keyword::ASC)? {
                    Order::Asc
                } else if self.eat_keyword(Keyword::DESC)? {
                    Order::Desc
                } else {
                    Order::Unspecified
                };
                let conflict = self.parse_conflict_clause()?;
                let autoincrement = self.eat_keyword(Keyword::AUTOINCREMENT)?;
                Ok(ColumnConstraintKind::PrimaryKey { order, conflict, autoincrement })
            }
            TokenKind::Keyword(Keyword::NOT) => {
                self.advance()?;
                self.expect_keyword(Keyword::NULL)?;
                let conflict = self.parse_conflict_clause()?;
                Ok(ColumnConstraintKind::NotNull { conflict })
            }
            TokenKind::Keyword(Keyword::UNIQUE) => {
                self.advance()?;
                let conflict = self.parse_conflict_clause()?;
                Ok(ColumnConstraintKind::Unique { conflict })
            }
            TokenKind::Keyword(Keyword::CHECK) => {
                self.advance()?;
                let open = self.expect_punct(Punct::LParen, "'(' to open the check expression")?;
                let (span, after) = capture(self.source, open.span.end())?;
                self.lexer.seek(after);
                Ok(ColumnConstraintKind::Check { expr: span.text(self.source) })
            }
            TokenKind::Keyword(Keyword::DEFAULT) => {
                self.advance()?;
                let value = self.parse_default_value()?;
                Ok(ColumnConstraintKind::Default { value })
            }
            TokenKind::Keyword(Keyword::COLLATE) => {
                self.advance()?;
                let name = self.consume_name()?;
                Ok(ColumnConstraintKind::Collate { name })
            }
            TokenKind::Keyword(Keyword::REFERENCES) => {
                let fk = self.parse_foreign_key_clause()?;
                Ok(ColumnConstraintKind::References { fk })
            }
            TokenKind::Keyword(Keyword::GENERATED) | TokenKind::Keyword(Keyword::AS) => self.parse_generated_clause(),
            _ => Err(self.err(
                tok.span.start as usize,
                "expected a column constraint",
                "expected PRIMARY KEY, NOT NULL, UNIQUE, CHECK, DEFAULT, COLLATE, REFERENCES, or GENERATED AS",
            )),
        }
    }

    #[cfg_attr(feature = "trace", trace)]
    fn parse_generated_clause(&mut self) -> Result<ColumnConstraintKind<'a>, ParseError> {
        if self.eat_keyword(Keyword::GENERATED)? {
            self.expect_keyword(Keyword::ALWAYS)?;
        }
        self.expect_keyword(Keyword::AS)?;
        let open = self.expect_punct(Punct::LParen, "'(' to start a generated column expression")?;
        let (span, after) = capture(self.source, open.span.end())?;
        self.lexer.seek(after);
        let storage = if self.eat_keyword(Keyword::STORED)? {
            GeneratedStorage::Stored
        } else {
            self.eat_keyword(Keyword::VIRTUAL)?;
            GeneratedStorage::Virtual
        };
        Ok(ColumnConstraintKind::Generated { expr: span.text(self.source), storage })
    }

    #[cfg_attr(feature = "trace", trace)]
    fn parse_default_value(&mut self) -> Result<DefaultValue<'a>, ParseError> {
        let tok = self.peek()?;
        match tok.kind {
            TokenKind::Punct(Punct::Plus) | TokenKind::Punct(Punct::Minus) => {
                let sign = self.advance()?;
                let num = self.advance()?;
                match num.kind {
                    TokenKind::NumericLiteral => {
                        let raw = std::str::from_utf8(&self.source[sign.span.start as usize..num.span.end()]).unwrap_or("");
                        Ok(DefaultValue::Number { raw_text: raw })
                    }
                    _ => Err(self.err(
                        num.span.start as usize,
                        "expected a numeric literal after a sign",
                        format!("found {:?} instead", num.kind),
                    )),
                }
            }
            TokenKind::NumericLiteral => {
                self.advance()?;
                Ok(DefaultValue::Number { raw_text: tok.span.text(self.source) })
            }
            TokenKind::StringLiteral { .. } => {
                self.advance()?;
                Ok(DefaultValue::Literal { text: self.decode_string(&tok)?, is_string_quoted: true })
            }
            // SQLite quirk: inside DEFAULT, a double-quoted run is treated
            // as a string literal rather than a quoted identifier.
            TokenKind::Identifier { quote: Quote::Double, .. } => {
                self.advance()?;
                Ok(DefaultValue::Literal { text: self.decode_ident(&tok)?, is_string_quoted: true })
            }
            TokenKind::Identifier { .. } => {
                self.advance()?;
                Ok(DefaultValue::Literal { text: self.decode_ident(&tok)?, is_string_quoted: false })
            }
            TokenKind::Keyword(Keyword::NULL) => {
                self.advance()?;
                Ok(DefaultValue::Keyword(DefaultKeyword::Null))
            }
            TokenKind::Keyword(Keyword::TRUE) => {
                self.advance()?;
                Ok(DefaultValue::Keyword(DefaultKeyword::True))
            }
            TokenKind::Keyword(Keyword::FALSE) => {
                self.advance()?;
                Ok(DefaultValue::Keyword(DefaultKeyword::False))
            }
            TokenKind::Keyword(Keyword::CURRENT_TIME) => {
                self.advance()?;
                Ok(DefaultValue::Keyword(DefaultKeyword::CurrentTime))
            }
            TokenKind::Keyword(Keyword::CURRENT_DATE) => {
                self.advance()?;
                Ok(DefaultValue::Keyword(DefaultKeyword::CurrentDate))
            }
            TokenKind::Keyword(Keyword::CURRENT_TIMESTAMP) => {
                self.advance()?;
                Ok(DefaultValue::Keyword(DefaultKeyword::CurrentTimestamp))
            }
            TokenKind::Punct(Punct::LParen) => {
                let open = self.advance()?;
                let (span, after) = capture(self.source, open.span.end())?;
                self.lexer.seek(after);
                Ok(DefaultValue::Expression { text: span.text(self.source) })
            }
            _ => Err(self.err(
                tok.span.start as usize,
                "expected a default value",
                format!("found {:?} instead", tok.kind),
            )),
        }
    }

    fn parse_conflict_clause(&mut self) -> Result<ConflictClause, ParseError> {
        if !self.eat_keyword(Keyword::ON)? {
            return Ok(ConflictClause::None);
        }
        self.expect_keyword(Keyword::CONFLICT)?;
        let tok = self.advance()?;
        match tok.kind {
            TokenKind::Keyword(Keyword::ROLLBACK) => Ok(ConflictClause::Rollback),
            TokenKind::Keyword(Keyword::ABORT) => Ok(ConflictClause::Abort),
            TokenKind::Keyword(Keyword::FAIL) => Ok(ConflictClause::Fail),
            TokenKind::Keyword(Keyword::IGNORE) => Ok(ConflictClause::Ignore),
            TokenKind::Keyword(Keyword::REPLACE) => Ok(ConflictClause::Replace),
            _ => Err(self.err(
                tok.span.start as usize,
                "expected a conflict action",
                "expected ROLLBACK, ABORT, FAIL, IGNORE, or REPLACE",
            )),
        }
    }

    // --- table_constraint -------------------------------------------------

    #[cfg_attr(feature = "trace", trace)]
    fn parse_table_constraint(&mut self) -> Result<TableConstraint<'a>, ParseError> {
        let name = if self.eat_keyword(Keyword::CONSTRAINT)? {
            Some(self.consume_name()?)
        } else {
            None
        };
        let tok = self.peek()?;
        let kind = match tok.kind {
            TokenKind::Keyword(Keyword::PRIMARY) => {
                self.advance()?;
                self.expect_keyword(Keyword::KEY)?;
                self.expect_punct(Punct::LParen, "'(' to open the primary key column list")?;
                let indexed_columns = self.parse_indexed_column_list()?;
                self.expect_punct(Punct::RParen, "')' to close the primary key column list")?;
                let conflict = self.parse_conflict_clause()?;
                TableConstraintKind::PrimaryKey { indexed_columns, conflict }
            }
            TokenKind::Keyword(Keyword::UNIQUE) => {
                self.advance()?;
                self.expect_punct(Punct::LParen, "'(' to open the unique column list")?;
                let indexed_columns = self.parse_indexed_column_list()?;
                self.expect_punct(Punct::RParen, "')' to close the unique column list")?;
                let conflict = self.parse_conflict_clause()?;
                TableConstraintKind::Unique { indexed_columns, conflict }
            }
            TokenKind::Keyword(Keyword::CHECK) => {
                self.advance()?;
                let open = self.expect_punct(Punct::LParen, "'(' to open the check expression")?;
                let (span, after) = capture(self.source, open.span.end())?;
                self.lexer.seek(after);
                TableConstraintKind::Check { expr: span.text(self.source) }
            }
            TokenKind::Keyword(Keyword::FOREIGN) => {
                self.advance()?;
                self.expect_keyword(Keyword::KEY)?;
                self.expect_punct(Punct::LParen, "'(' to open the foreign key column list")?;
                let local_columns = self.parse_ident_list()?;
                self.expect_punct(Punct::RParen, "')' to close the foreign key column list")?;
                let fk = self.parse_foreign_key_clause()?;
                TableConstraintKind::ForeignKey { local_columns, fk }
            }
            _ => {
                return Err(self.err(
                    tok.span.start as usize,
                    "expected a table constraint",
                    "expected PRIMARY KEY, UNIQUE, CHECK, or FOREIGN KEY",
                ));
            }
        };
        Ok(TableConstraint { name, kind })
    }

    #[cfg_attr(feature = "trace", trace)]
    fn parse_indexed_column_list(&mut self) -> Result<Vec<IndexedColumn<'a>>, ParseError> {
        let mut out = vec![self.parse_indexed_column()?];
        while self.eat_punct(Punct::Comma)? {
            out.push(self.parse_indexed_column()?);
        }
        Ok(out)
    }

    fn parse_indexed_column(&mut self) -> Result<IndexedColumn<'a>, ParseError> {
        let name = self.consume_name()?;
        let mut collate = None;
        let mut order = Order::Unspecified;
        let mut autoincrement = false;
        loop {
            if self.eat_keyword(Keyword::COLLATE)? {
                collate = Some(self.consume_name()?);
            } else if self.eat_keyword(Keyword::ASC)? {
                order = Order::Asc;
            } else if self.eat_keyword(Keyword::DESC)? {
                order = Order::Desc;
            } else if self.eat_keyword(Keyword::AUTOINCREMENT)? {
                // only meaningful on a PRIMARY KEY list; recorded
                // permissively here regardless (see DESIGN.md).
                autoincrement = true;
            } else {
                break;
            }
        }
        Ok(IndexedColumn { name, collate, order, autoincrement })
    }

    // --- foreign key clause -----------------------------------------------

    #[cfg_attr(feature = "trace", trace)]
    fn parse_foreign_key_clause(&mut self) -> Result<ForeignKeyClause<'a>, ParseError> {
        self.expect_keyword(Keyword::REFERENCES)?;
        let referenced_table = self.consume_name()?;
        let mut referenced_columns = Vec::new();
        if self.eat_punct(Punct::LParen)? {
            referenced_columns = self.parse_ident_list()?;
            self.expect_punct(Punct::RParen, "')' to close the referenced column list")?;
        }

        let mut on_delete = FkAction::None;
        let mut on_update = FkAction::None;
        let mut match_name = None;
        let mut deferrable = Deferrable::Unspecified;
        let mut initially = Initially::Unspecified;

        loop {
            if self.is_keyword(Keyword::ON)? {
                self.advance()?;
                let which = self.advance()?;
                let action = self.parse_fk_action()?;
                match which.kind {
                    TokenKind::Keyword(Keyword::DELETE) => on_delete = action,
                    TokenKind::Keyword(Keyword::UPDATE) => on_update = action,
                    _ => {
                        return Err(self.err(
                            which.span.start as usize,
                            "expected DELETE or UPDATE after ON",
                            format!("found {:?} instead", which.kind),
                        ));
                    }
                }
            } else if self.is_keyword(Keyword::MATCH)? {
                self.advance()?;
                match_name = Some(self.consume_name()?);
            } else if self.is_keyword(Keyword::NOT)? || self.is_keyword(Keyword::DEFERRABLE)? {
                let not = self.eat_keyword(Keyword::NOT)?;
                self.expect_keyword(Keyword::DEFERRABLE)?;
                deferrable = if not { Deferrable::NotDeferrable } else { Deferrable::Deferrable };
                if self.eat_keyword(Keyword::INITIALLY)? {
                    let tok = self.advance()?;
                    initially = match tok.kind {
                        TokenKind::Keyword(Keyword::DEFERRED) => Initially::Deferred,
                        TokenKind::Keyword(Keyword::IMMEDIATE) => Initially::Immediate,
                        _ => {
                            return Err(self.err(
                                tok.span.start as usize,
                                "expected DEFERRED or IMMEDIATE after INITIALLY",
                                format!("found {:?} instead", tok.kind),
                            ));
                        }
                    };
                }
            } else {
                break;
            }
        }

        Ok(ForeignKeyClause {
            referenced_table,
            referenced_columns,
            on_delete,
            on_update,
            match_name,
            deferrable,
            initially,
        })
    }

    fn parse_fk_action(&mut self) -> Result<FkAction, ParseError> {
        let tok = self.advance()?;
        match tok.kind {
            TokenKind::Keyword(Keyword::SET) => {
                let tok2 = self.advance()?;
                match tok2.kind {
                    TokenKind::Keyword(Keyword::NULL) => Ok(FkAction::SetNull),
                    TokenKind::Keyword(Keyword::DEFAULT) => Ok(FkAction::SetDefault),
                    _ => Err(self.err(
                        tok2.span.start as usize,
                        "expected NULL or DEFAULT after SET",
                        format!("found {:?} instead", tok2.kind),
                    )),
                }
            }
            TokenKind::Keyword(Keyword::CASCADE) => Ok(FkAction::Cascade),
            TokenKind::Keyword(Keyword::RESTRICT) => Ok(FkAction::Restrict),
            TokenKind::Keyword(Keyword::NO) => {
                self.expect_keyword(Keyword::ACTION)?;
                Ok(FkAction::NoAction)
            }
            _ => Err(self.err(
                tok.span.start as usize,
                "expected a foreign key action",
                "expected SET NULL, SET DEFAULT, CASCADE, RESTRICT, or NO ACTION",
            )),
        }
    }

    // --- ALTER TABLE --------------------------------------------------

    #[cfg_attr(feature = "trace", trace)]
    fn parse_alter_table(&mut self) -> Result<AlterTable<'a>, ParseError> {
        self.expect_keyword(Keyword::ALTER)?;
        self.expect_keyword(Keyword::TABLE)?;
        let (schema, name) = self.parse_qualified_name()?;
        let kind = self.parse_alter_action()?;
        self.eat_punct(Punct::Semicolon)?;
        Ok(AlterTable { schema, name, kind })
    }

    #[cfg_attr(feature = "trace", trace)]
    fn parse_alter_action(&mut self) -> Result<AlterTableKind<'a>, ParseError> {
        let tok = self.peek()?;
        match tok.kind {
            TokenKind::Keyword(Keyword::RENAME) => {
                self.advance()?;
                if self.eat_keyword(Keyword::TO)? {
                    let new_name = self.consume_name()?;
                    Ok(AlterTableKind::RenameTable { new_name })
                } else {
                    self.eat_keyword(Keyword::COLUMN)?;
                    let old_name = self.consume_name()?;
                    self.expect_keyword(Keyword::TO)?;
                    let new_name = self.consume_name()?;
                    Ok(AlterTableKind::RenameColumn { old_name, new_name })
                }
            }
            TokenKind::Keyword(Keyword::ADD) => {
                self.advance()?;
                self.eat_keyword(Keyword::COLUMN)?;
                let column = self.parse_column_def()?;
                Ok(AlterTableKind::AddColumn { column })
            }
            TokenKind::Keyword(Keyword::DROP) => {
                self.advance()?;
                self.eat_keyword(Keyword::COLUMN)?;
                let name = self.consume_name()?;
                Ok(AlterTableKind::DropColumn { name })
            }
            _ => Err(self.err(
                tok.span.start as usize,
                "expected a RENAME, ADD, or DROP clause",
                format!("found {:?} instead", tok.kind),
            )),
        }
    }
}
