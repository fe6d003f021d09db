//! The output data model (distilled spec §3). Every identifier-shaped field
//! is a `Cow<'a, str>`: the overwhelmingly common case — a bare identifier —
//! borrows directly from the input buffer with zero copies, and only
//! quoted identifiers that actually contain a doubled escape allocate.
//! Captured expressions and raw type/number text are never escaped, so
//! those stay plain `&'a str` slices.
//!
//! There is no separate arena or destructor: `Table`/`AlterTable` own their
//! child `Vec`s directly, so an ordinary drop releases the whole tree in one
//! operation (see DESIGN.md, §9 Design Notes).

use std::borrow::Cow;

pub type Ident<'a> = Cow<'a, str>;

#[derive(Debug, Clone, PartialEq)]
pub enum Model<'a> {
    Table(Table<'a>),
    Alter(AlterTable<'a>),
}

impl<'a> Model<'a> {
    pub fn as_table(&self) -> Option<&Table<'a>> {
        match self {
            Model::Table(t) => Some(t),
            Model::Alter(_) => None,
        }
    }

    pub fn as_alter(&self) -> Option<&AlterTable<'a>> {
        match self {
            Model::Alter(a) => Some(a),
            Model::Table(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table<'a> {
    pub schema: Option<Ident<'a>>,
    pub name: Ident<'a>,
    pub is_temp: bool,
    pub if_not_exists: bool,
    pub without_rowid: bool,
    pub strict: bool,
    pub columns: Vec<Column<'a>>,
    pub table_constraints: Vec<TableConstraint<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column<'a> {
    pub name: Ident<'a>,
    /// raw type name, verbatim including any `(...)` size specifier (e.g.
    /// `VARCHAR(15)`). `None` when the column declares no type at all.
    pub type_name: Option<&'a str>,
    pub constraints: Vec<ColumnConstraint<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictClause {
    None,
    Rollback,
    Abort,
    Fail,
    Ignore,
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratedStorage {
    Stored,
    Virtual,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnConstraint<'a> {
    pub name: Option<Ident<'a>>,
    pub kind: ColumnConstraintKind<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnConstraintKind<'a> {
    PrimaryKey {
        order: Order,
        conflict: ConflictClause,
        autoincrement: bool,
    },
    NotNull {
        conflict: ConflictClause,
    },
    Unique {
        conflict: ConflictClause,
    },
    Check {
        expr: &'a str,
    },
    Default {
        value: DefaultValue<'a>,
    },
    Collate {
        name: Ident<'a>,
    },
    References {
        fk: ForeignKeyClause<'a>,
    },
    Generated {
        expr: &'a str,
        storage: GeneratedStorage,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultKeyword {
    CurrentTime,
    CurrentDate,
    CurrentTimestamp,
    Null,
    True,
    False,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue<'a> {
    /// a quoted string, or a bare identifier captured as-is (§4.3
    /// `default_value`'s "bare identifier" arm). `is_string_quoted`
    /// distinguishes the two.
    Literal { text: Ident<'a>, is_string_quoted: bool },
    Number { raw_text: &'a str },
    Keyword(DefaultKeyword),
    Expression { text: &'a str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableConstraint<'a> {
    pub name: Option<Ident<'a>>,
    pub kind: TableConstraintKind<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraintKind<'a> {
    PrimaryKey {
        indexed_columns: Vec<IndexedColumn<'a>>,
        conflict: ConflictClause,
    },
    Unique {
        indexed_columns: Vec<IndexedColumn<'a>>,
        conflict: ConflictClause,
    },
    Check {
        expr: &'a str,
    },
    ForeignKey {
        local_columns: Vec<Ident<'a>>,
        fk: ForeignKeyClause<'a>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexedColumn<'a> {
    pub name: Ident<'a>,
    pub collate: Option<Ident<'a>>,
    pub order: Order,
    /// `AUTOINCREMENT` is only meaningful on a primary-key indexed-column
    /// list; it is still recorded here even on a `UNIQUE` list because the
    /// source accepts it there too (open question, see DESIGN.md).
    pub autoincrement: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FkAction {
    None,
    SetNull,
    SetDefault,
    Cascade,
    Restrict,
    NoAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferrable {
    Unspecified,
    Deferrable,
    NotDeferrable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initially {
    Unspecified,
    Deferred,
    Immediate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyClause<'a> {
    pub referenced_table: Ident<'a>,
    pub referenced_columns: Vec<Ident<'a>>,
    pub on_delete: FkAction,
    pub on_update: FkAction,
    /// captured verbatim, never validated — see DESIGN.md open questions.
    pub match_name: Option<Ident<'a>>,
    pub deferrable: Deferrable,
    pub initially: Initially,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterTable<'a> {
    pub schema: Option<Ident<'a>>,
    pub name: Ident<'a>,
    pub kind: AlterTableKind<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterTableKind<'a> {
    RenameTable { new_name: Ident<'a> },
    RenameColumn { old_name: Ident<'a>, new_name: Ident<'a> },
    AddColumn { column: Column<'a> },
    DropColumn { name: Ident<'a> },
}
