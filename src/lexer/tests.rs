use super::*;

fn tokens(sql: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(sql.as_bytes());
    let mut out = Vec::new();
    loop {
        let tok = lexer.next().expect("expected a valid token stream");
        if tok.is_eof() {
            break;
        }
        out.push(tok.kind);
    }
    out
}

#[test]
fn keywords_are_case_insensitive() {
    let a = tokens("CREATE TABLE");
    let b = tokens("create TABLE");
    let c = tokens("Create Table");
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(a, vec![TokenKind::Keyword(Keyword::CREATE), TokenKind::Keyword(Keyword::TABLE)]);
}

#[test]
fn bare_word_not_in_keyword_set_is_an_identifier() {
    let toks = tokens("widgets");
    assert_eq!(toks, vec![TokenKind::Identifier { content: Span::new(0, 7), quote: Quote::Bare }]);
}

#[test]
fn double_quoted_identifier_strips_quotes_from_content_span() {
    let sql = r#""My Table""#;
    let toks = tokens(sql);
    match toks[0] {
        TokenKind::Identifier { content, quote } => {
            assert_eq!(quote, Quote::Double);
            assert_eq!(content.text(sql.as_bytes()), "My Table");
        }
        other => panic!("unexpected token: {other:?}"),
    }
}

#[test]
fn doubled_double_quote_escape_reverses_to_one_quote() {
    let sql = r#""a""b""#;
    let lexer_tok = {
        let mut l = Lexer::new(sql.as_bytes());
        l.next().unwrap()
    };
    assert_eq!(lexer_tok.ident_bytes(sql.as_bytes()).as_ref(), b"a\"b");
}

#[test]
fn backtick_identifier() {
    let sql = "`col one`";
    let toks = tokens(sql);
    match toks[0] {
        TokenKind::Identifier { content, quote } => {
            assert_eq!(quote, Quote::Backtick);
            assert_eq!(content.text(sql.as_bytes()), "col one");
        }
        other => panic!("unexpected token: {other:?}"),
    }
}

#[test]
fn bracket_identifier_with_doubled_bracket_escape() {
    let sql = "[a]]b]";
    let mut l = Lexer::new(sql.as_bytes());
    let tok = l.next().unwrap();
    assert_eq!(tok.ident_bytes(sql.as_bytes()).as_ref(), b"a]b");
}

#[test]
fn string_literal_with_doubled_quote_escape() {
    let sql = "'it''s'";
    let mut l = Lexer::new(sql.as_bytes());
    let tok = l.next().unwrap();
    assert_eq!(tok.string_bytes(sql.as_bytes()).as_ref(), b"it's");
}

#[test]
fn integer_and_decimal_numeric_literals() {
    let toks = tokens("123 4.5 .25");
    assert_eq!(toks, vec![TokenKind::NumericLiteral, TokenKind::NumericLiteral, TokenKind::NumericLiteral]);
}

#[test]
fn sign_is_a_separate_punctuation_token_not_part_of_the_number() {
    let toks = tokens("-1");
    assert_eq!(toks, vec![TokenKind::Punct(Punct::Minus), TokenKind::NumericLiteral]);
}

#[test]
fn line_comment_is_skipped_as_trivia() {
    let toks = tokens("a -- this is a comment\nb");
    assert_eq!(toks.len(), 2);
}

#[test]
fn block_comment_is_skipped_as_trivia() {
    let toks = tokens("a /* comment\nspanning lines */ b");
    assert_eq!(toks.len(), 2);
}

#[test]
fn unterminated_string_is_an_error() {
    let mut l = Lexer::new(b"'unterminated");
    let err = l.next().unwrap_err();
    assert_eq!(err.code, ErrorCode::UnterminatedLiteral);
}

#[test]
fn unterminated_block_comment_is_an_error() {
    let mut l = Lexer::new(b"/* never closed");
    let err = l.next().unwrap_err();
    assert_eq!(err.code, ErrorCode::UnterminatedComment);
}

#[test]
fn peek_does_not_advance_the_cursor() {
    let mut l = Lexer::new(b"a b");
    let peeked = l.peek().unwrap();
    let next = l.next().unwrap();
    assert_eq!(peeked, next);
    assert_eq!(l.next().unwrap().kind, TokenKind::Identifier { content: Span::new(2, 1), quote: Quote::Bare });
}

#[test]
fn punctuation_tokens() {
    let toks = tokens("(),;.");
    assert_eq!(
        toks,
        vec![
            TokenKind::Punct(Punct::LParen),
            TokenKind::Punct(Punct::RParen),
            TokenKind::Punct(Punct::Comma),
            TokenKind::Punct(Punct::Semicolon),
            TokenKind::Punct(Punct::Dot),
        ]
    );
}
