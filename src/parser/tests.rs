//! Table-driven parser tests. Each case asserts the typed [`crate::model`]
//! value directly with `pretty_assertions::assert_eq!` rather than comparing
//! serialized dumps — there is no JSON debug layer in this crate (see
//! DESIGN.md). Grouped into one module per grammar area, same idea as the
//! teacher's `test_group_pass_assert!` groupings, minus the macro (nothing
//! here needs to work around an AST that can't derive `PartialEq`).

use super::parse;
use crate::error::ErrorCode;
use crate::model::*;
use std::borrow::Cow;

fn ok_table(sql: &str) -> Table<'_> {
    match parse(sql.as_bytes()) {
        Ok(Model::Table(t)) => t,
        Ok(Model::Alter(_)) => panic!("expected a CREATE TABLE statement"),
        Err(e) => panic!("expected to parse, got {e}"),
    }
}

fn ok_alter(sql: &str) -> AlterTable<'_> {
    match parse(sql.as_bytes()) {
        Ok(Model::Alter(a)) => a,
        Ok(Model::Table(_)) => panic!("expected an ALTER TABLE statement"),
        Err(e) => panic!("expected to parse, got {e}"),
    }
}

fn err_code(sql: &str) -> ErrorCode {
    parse(sql.as_bytes()).unwrap_err().code
}

fn ident(s: &str) -> Ident<'_> {
    Cow::Borrowed(s)
}

mod create_table {
    use super::*;

    #[test]
    fn minimal_two_column_table() {
        let t = ok_table("CREATE TABLE t(a INTEGER, b TEXT);");
        pretty_assertions::assert_eq!(t.name, ident("t"));
        pretty_assertions::assert_eq!(t.columns.len(), 2);
        pretty_assertions::assert_eq!(t.columns[0].name, ident("a"));
        pretty_assertions::assert_eq!(t.columns[0].type_name, Some("INTEGER"));
        pretty_assertions::assert_eq!(t.columns[1].type_name, Some("TEXT"));
        pretty_assertions::assert_eq!(t.without_rowid, false);
        pretty_assertions::assert_eq!(t.strict, false);
    }

    #[test]
    fn temp_if_not_exists_schema_qualified() {
        let t = ok_table("CREATE TEMP TABLE IF NOT EXISTS main.widgets(id INTEGER);");
        pretty_assertions::assert_eq!(t.is_temp, true);
        pretty_assertions::assert_eq!(t.if_not_exists, true);
        pretty_assertions::assert_eq!(t.schema, Some(ident("main")));
        pretty_assertions::assert_eq!(t.name, ident("widgets"));
    }

    #[test]
    fn typeless_column_has_no_type_name() {
        let t = ok_table("CREATE TABLE t(a, b INTEGER);");
        pretty_assertions::assert_eq!(t.columns[0].type_name, None);
        pretty_assertions::assert_eq!(t.columns[1].type_name, Some("INTEGER"));
    }

    #[test]
    fn sized_type_name_is_captured_verbatim() {
        let t = ok_table("CREATE TABLE employee(first VARCHAR(15), salary DECIMAL(10,2));");
        pretty_assertions::assert_eq!(t.columns[0].type_name, Some("VARCHAR(15)"));
        pretty_assertions::assert_eq!(t.columns[1].type_name, Some("DECIMAL(10,2)"));
    }

    #[test]
    fn without_rowid_and_strict_in_any_order() {
        let t = ok_table("CREATE TABLE t(a INTEGER) STRICT, WITHOUT ROWID;");
        pretty_assertions::assert_eq!(t.strict, true);
        pretty_assertions::assert_eq!(t.without_rowid, true);
    }

    #[test]
    fn garbage_after_statement_is_ignored() {
        let t = ok_table("CREATE TABLE t(a INTEGER); garbage that is never looked at");
        pretty_assertions::assert_eq!(t.name, ident("t"));
    }
}

mod quoting {
    use super::*;

    #[test]
    fn four_quoting_styles_for_identifiers() {
        let t = ok_table(r#"CREATE TABLE "My Table"(`col one` INTEGER, [col two] INTEGER, plain INTEGER);"#);
        pretty_assertions::assert_eq!(t.name, ident("My Table"));
        pretty_assertions::assert_eq!(t.columns[0].name, ident("col one"));
        pretty_assertions::assert_eq!(t.columns[1].name, ident("col two"));
        pretty_assertions::assert_eq!(t.columns[2].name, ident("plain"));
    }

    #[test]
    fn doubled_quote_escape_is_reversed() {
        let t = ok_table(r#"CREATE TABLE "a""b"(c INTEGER);"#);
        pretty_assertions::assert_eq!(t.name, ident(r#"a"b"#));
    }

    #[test]
    fn column_literally_named_key_is_accepted_as_an_identifier() {
        let t = ok_table("CREATE TABLE t(key INTEGER);");
        pretty_assertions::assert_eq!(t.columns[0].name, ident("key"));
    }
}

mod comments {
    use super::*;

    #[test]
    fn column_comment_and_table_comment_are_trivia() {
        let t = ok_table(
            "CREATE TABLE t1(id INTEGER PRIMARY KEY ASC, name TEXT DEFAULT (upper('x')), c TEXT CHECK((c IS NOT NULL)) -- col comment\n) -- table comment",
        );
        pretty_assertions::assert_eq!(t.columns.len(), 3);
    }
}

mod column_constraints {
    use super::*;

    #[test]
    fn default_numeric_with_explicit_sign() {
        let t = ok_table("CREATE TABLE t(a INTEGER DEFAULT -1, b INTEGER DEFAULT +2);");
        match &t.columns[0].constraints[0].kind {
            ColumnConstraintKind::Default { value: DefaultValue::Number { raw_text } } => {
                pretty_assertions::assert_eq!(*raw_text, "-1");
            }
            other => panic!("unexpected constraint: {other:?}"),
        }
        match &t.columns[1].constraints[0].kind {
            ColumnConstraintKind::Default { value: DefaultValue::Number { raw_text } } => {
                pretty_assertions::assert_eq!(*raw_text, "+2");
            }
            other => panic!("unexpected constraint: {other:?}"),
        }
    }

    #[test]
    fn default_expression_keeps_nested_parens_and_string_with_closing_paren() {
        let t = ok_table("CREATE TABLE t(a TEXT DEFAULT ((1+2) || '))'));");
        match &t.columns[0].constraints[0].kind {
            ColumnConstraintKind::Default { value: DefaultValue::Expression { text } } => {
                pretty_assertions::assert_eq!(*text, "(1+2) || '))'");
            }
            other => panic!("unexpected constraint: {other:?}"),
        }
    }

    #[test]
    fn double_quoted_default_is_a_string_not_an_identifier() {
        let t = ok_table(r#"CREATE TABLE t(a TEXT DEFAULT "hello");"#);
        match &t.columns[0].constraints[0].kind {
            ColumnConstraintKind::Default { value: DefaultValue::Literal { text, is_string_quoted } } => {
                pretty_assertions::assert_eq!(text, &ident("hello"));
                pretty_assertions::assert_eq!(*is_string_quoted, true);
            }
            other => panic!("unexpected constraint: {other:?}"),
        }
    }

    #[test]
    fn generated_always_as_stored_and_shorthand_virtual() {
        let t = ok_table("CREATE TABLE t(a INTEGER, b INTEGER GENERATED ALWAYS AS (a*2) STORED, c INTEGER AS (a+1));");
        match &t.columns[1].constraints[0].kind {
            ColumnConstraintKind::Generated { expr, storage } => {
                pretty_assertions::assert_eq!(*expr, "a*2");
                pretty_assertions::assert_eq!(*storage, GeneratedStorage::Stored);
            }
            other => panic!("unexpected constraint: {other:?}"),
        }
        match &t.columns[2].constraints[0].kind {
            ColumnConstraintKind::Generated { expr, storage } => {
                pretty_assertions::assert_eq!(*expr, "a+1");
                pretty_assertions::assert_eq!(*storage, GeneratedStorage::Virtual);
            }
            other => panic!("unexpected constraint: {other:?}"),
        }
    }

    #[test]
    fn named_column_constraints() {
        let t = ok_table("CREATE TABLE t(pk INTEGER CONSTRAINT 'PrimaryKey' PRIMARY KEY CONSTRAINT 'NotNull' NOT NULL);");
        pretty_assertions::assert_eq!(t.columns[0].constraints[0].name, Some(ident("PrimaryKey")));
        pretty_assertions::assert_eq!(t.columns[0].constraints[1].name, Some(ident("NotNull")));
    }

    #[test]
    fn column_level_references_with_match_deferrable_initially() {
        let t = ok_table("CREATE TABLE t(a INTEGER REFERENCES parent(id) MATCH SIMPLE NOT DEFERRABLE INITIALLY IMMEDIATE);");
        match &t.columns[0].constraints[0].kind {
            ColumnConstraintKind::References { fk } => {
                pretty_assertions::assert_eq!(fk.match_name, Some(ident("SIMPLE")));
                pretty_assertions::assert_eq!(fk.deferrable, Deferrable::NotDeferrable);
                pretty_assertions::assert_eq!(fk.initially, Initially::Immediate);
            }
            other => panic!("unexpected constraint: {other:?}"),
        }
    }

    /// grounded on `original_source/test/main.c`'s `ConflictTest` case.
    #[test]
    fn on_conflict_rollback_abort_replace_on_column_constraints() {
        let t = ok_table(
            "CREATE TABLE ConflictTest(a INT PRIMARY KEY ON CONFLICT ROLLBACK, b INT NOT NULL ON CONFLICT ABORT, c INT UNIQUE ON CONFLICT REPLACE);",
        );
        match &t.columns[0].constraints[0].kind {
            ColumnConstraintKind::PrimaryKey { conflict, .. } => pretty_assertions::assert_eq!(*conflict, ConflictClause::Rollback),
            other => panic!("unexpected constraint: {other:?}"),
        }
        match &t.columns[1].constraints[0].kind {
            ColumnConstraintKind::NotNull { conflict } => pretty_assertions::assert_eq!(*conflict, ConflictClause::Abort),
            other => panic!("unexpected constraint: {other:?}"),
        }
        match &t.columns[2].constraints[0].kind {
            ColumnConstraintKind::Unique { conflict } => pretty_assertions::assert_eq!(*conflict, ConflictClause::Replace),
            other => panic!("unexpected constraint: {other:?}"),
        }
    }
}

mod table_constraints {
    use super::*;

    #[test]
    fn table_level_primary_key_composite_with_collate_and_order() {
        let t = ok_table("CREATE TABLE t(a INTEGER, b TEXT, PRIMARY KEY (a DESC, b COLLATE NOCASE ASC));");
        pretty_assertions::assert_eq!(t.table_constraints.len(), 1);
        match &t.table_constraints[0].kind {
            TableConstraintKind::PrimaryKey { indexed_columns, .. } => {
                pretty_assertions::assert_eq!(indexed_columns[0].name, ident("a"));
                pretty_assertions::assert_eq!(indexed_columns[0].order, Order::Desc);
                pretty_assertions::assert_eq!(indexed_columns[1].collate, Some(ident("NOCASE")));
                pretty_assertions::assert_eq!(indexed_columns[1].order, Order::Asc);
            }
            other => panic!("unexpected constraint: {other:?}"),
        }
    }

    #[test]
    fn autoincrement_on_composite_primary_key_is_accepted() {
        let t = ok_table("CREATE TABLE t(a INTEGER, b INTEGER, PRIMARY KEY (a AUTOINCREMENT, b));");
        match &t.table_constraints[0].kind {
            TableConstraintKind::PrimaryKey { indexed_columns, .. } => {
                pretty_assertions::assert_eq!(indexed_columns[0].autoincrement, true);
            }
            other => panic!("unexpected constraint: {other:?}"),
        }
    }

    /// grounded on `original_source/test/main.c`'s `ConflictPK` case.
    #[test]
    fn on_conflict_ignore_on_table_level_primary_key() {
        let t = ok_table("CREATE TABLE ConflictPK(a INT, b INT, PRIMARY KEY (a, b) ON CONFLICT IGNORE);");
        match &t.table_constraints[0].kind {
            TableConstraintKind::PrimaryKey { conflict, .. } => pretty_assertions::assert_eq!(*conflict, ConflictClause::Ignore),
            other => panic!("unexpected constraint: {other:?}"),
        }
    }

    /// grounded on `original_source/test/main.c`'s `ConflictUniq` case.
    #[test]
    fn on_conflict_fail_on_table_level_unique_with_named_constraint() {
        let t = ok_table("CREATE TABLE ConflictUniq(a INT, CONSTRAINT 'uniq1' UNIQUE (a) ON CONFLICT FAIL);");
        pretty_assertions::assert_eq!(t.table_constraints[0].name, Some(ident("uniq1")));
        match &t.table_constraints[0].kind {
            TableConstraintKind::Unique { conflict, .. } => pretty_assertions::assert_eq!(*conflict, ConflictClause::Fail),
            other => panic!("unexpected constraint: {other:?}"),
        }
    }
}

mod foreign_key {
    use super::*;

    #[test]
    fn table_level_foreign_key_with_actions() {
        let t = ok_table("CREATE TABLE t(a INTEGER, FOREIGN KEY (a) REFERENCES other(id) ON DELETE CASCADE ON UPDATE SET NULL);");
        match &t.table_constraints[0].kind {
            TableConstraintKind::ForeignKey { local_columns, fk } => {
                pretty_assertions::assert_eq!(local_columns[0], ident("a"));
                pretty_assertions::assert_eq!(fk.referenced_table, ident("other"));
                pretty_assertions::assert_eq!(fk.referenced_columns, vec![ident("id")]);
                pretty_assertions::assert_eq!(fk.on_delete, FkAction::Cascade);
                pretty_assertions::assert_eq!(fk.on_update, FkAction::SetNull);
            }
            other => panic!("unexpected constraint: {other:?}"),
        }
    }
}

mod case_insensitivity {
    use super::*;

    #[test]
    fn case_insensitive_keywords() {
        let t = ok_table("create table t(a integer primary key);");
        pretty_assertions::assert_eq!(t.name, ident("t"));
        match &t.columns[0].constraints[0].kind {
            ColumnConstraintKind::PrimaryKey { .. } => {}
            other => panic!("unexpected constraint: {other:?}"),
        }
    }
}

mod alter_table {
    use super::*;

    #[test]
    fn alter_table_rename_table() {
        let a = ok_alter("ALTER TABLE t RENAME TO t2;");
        match a.kind {
            AlterTableKind::RenameTable { new_name } => pretty_assertions::assert_eq!(new_name, ident("t2")),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn alter_table_rename_column_with_optional_column_keyword() {
        let a = ok_alter("ALTER TABLE t RENAME COLUMN old TO new;");
        match a.kind {
            AlterTableKind::RenameColumn { old_name, new_name } => {
                pretty_assertions::assert_eq!(old_name, ident("old"));
                pretty_assertions::assert_eq!(new_name, ident("new"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn alter_table_add_column() {
        let a = ok_alter("ALTER TABLE t ADD COLUMN c TEXT DEFAULT 'x';");
        match a.kind {
            AlterTableKind::AddColumn { column } => {
                pretty_assertions::assert_eq!(column.name, ident("c"));
                pretty_assertions::assert_eq!(column.type_name, Some("TEXT"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn alter_table_drop_column() {
        let a = ok_alter("ALTER TABLE t DROP COLUMN c;");
        match a.kind {
            AlterTableKind::DropColumn { name } => pretty_assertions::assert_eq!(name, ident("c")),
            other => panic!("unexpected action: {other:?}"),
        }
    }
}

mod errors {
    use super::*;

    #[test]
    fn empty_identifier_is_rejected() {
        pretty_assertions::assert_eq!(err_code(r#"CREATE TABLE ""(a INTEGER);"#), ErrorCode::SyntaxError);
    }

    #[test]
    fn unsupported_statement_is_its_own_error_code() {
        pretty_assertions::assert_eq!(err_code("SELECT * FROM t;"), ErrorCode::UnsupportedStatement);
    }

    #[test]
    fn unterminated_check_expression_is_its_own_error_code() {
        pretty_assertions::assert_eq!(err_code("CREATE TABLE t(a INTEGER CHECK (a > 0"), ErrorCode::UnterminatedLiteral);
    }
}
