/// Closed set of keywords recognised by the CREATE/ALTER TABLE grammar, see:
/// https://www.sqlite.org/lang_keywords.html
///
/// Anything not in this set but otherwise a bare word lexes as an
/// `Identifier` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum Keyword {
    CREATE,
    TABLE,
    TEMP,
    TEMPORARY,
    IF,
    NOT,
    EXISTS,
    WITHOUT,
    ROWID,
    STRICT,
    PRIMARY,
    KEY,
    UNIQUE,
    CHECK,
    DEFAULT,
    COLLATE,
    REFERENCES,
    FOREIGN,
    ON,
    DELETE,
    UPDATE,
    NO,
    ACTION,
    CASCADE,
    RESTRICT,
    SET,
    NULL,
    MATCH,
    DEFERRABLE,
    INITIALLY,
    DEFERRED,
    IMMEDIATE,
    AUTOINCREMENT,
    ASC,
    DESC,
    CONSTRAINT,
    CONFLICT,
    ROLLBACK,
    ABORT,
    FAIL,
    IGNORE,
    REPLACE,
    GENERATED,
    ALWAYS,
    AS,
    STORED,
    VIRTUAL,
    ALTER,
    RENAME,
    TO,
    ADD,
    COLUMN,
    DROP,
    CURRENT_TIME,
    CURRENT_DATE,
    CURRENT_TIMESTAMP,
    TRUE,
    FALSE,
    AND,
    OR,
}

impl Keyword {
    /// case-insensitive lookup against the closed keyword set.
    pub fn from_str(s: &str) -> Option<Keyword> {
        Some(match_ascii_case_insensitive(s)?)
    }

    pub fn name(&self) -> &'static str {
        use Keyword::*;
        match self {
            CREATE => "CREATE",
            TABLE => "TABLE",
            TEMP => "TEMP",
            TEMPORARY => "TEMPORARY",
            IF => "IF",
            NOT => "NOT",
            EXISTS => "EXISTS",
            WITHOUT => "WITHOUT",
            ROWID => "ROWID",
            STRICT => "STRICT",
            PRIMARY => "PRIMARY",
            KEY => "KEY",
            UNIQUE => "UNIQUE",
            CHECK => "CHECK",
            DEFAULT => "DEFAULT",
            COLLATE => "COLLATE",
            REFERENCES => "REFERENCES",
            FOREIGN => "FOREIGN",
            ON => "ON",
            DELETE => "DELETE",
            UPDATE => "UPDATE",
            NO => "NO",
            ACTION => "ACTION",
            CASCADE => "CASCADE",
            RESTRICT => "RESTRICT",
            SET => "SET",
            NULL => "NULL",
            MATCH => "MATCH",
            DEFERRABLE => "DEFERRABLE",
            INITIALLY => "INITIALLY",
            DEFERRED => "DEFERRED",
            IMMEDIATE => "IMMEDIATE",
            AUTOINCREMENT => "AUTOINCREMENT",
            ASC => "ASC",
            DESC => "DESC",
            CONSTRAINT => "CONSTRAINT",
            CONFLICT => "CONFLICT",
            ROLLBACK => "ROLLBACK",
            ABORT => "ABORT",
            FAIL => "FAIL",
            IGNORE => "IGNORE",
            REPLACE => "REPLACE",
            GENERATED => "GENERATED",
            ALWAYS => "ALWAYS",
            AS => "AS",
            STORED => "STORED",
            VIRTUAL => "VIRTUAL",
            ALTER => "ALTER",
            RENAME => "RENAME",
            TO => "TO",
            ADD => "ADD",
            COLUMN => "COLUMN",
            DROP => "DROP",
            CURRENT_TIME => "CURRENT_TIME",
            CURRENT_DATE => "CURRENT_DATE",
            CURRENT_TIMESTAMP => "CURRENT_TIMESTAMP",
            TRUE => "TRUE",
            FALSE => "FALSE",
            AND => "AND",
            OR => "OR",
        }
    }
}

/// table-driven so adding a keyword never needs touching the lexer's match
/// arms for identifier-vs-keyword classification.
fn match_ascii_case_insensitive(s: &str) -> Option<Keyword> {
    use Keyword::*;
    const KEYWORDS: &[(&str, Keyword)] = &[
        ("CREATE", CREATE),
        ("TABLE", TABLE),
        ("TEMP", TEMP),
        ("TEMPORARY", TEMPORARY),
        ("IF", IF),
        ("NOT", NOT),
        ("EXISTS", EXISTS),
        ("WITHOUT", WITHOUT),
        ("ROWID", ROWID),
        ("STRICT", STRICT),
        ("PRIMARY", PRIMARY),
        ("KEY", KEY),
        ("UNIQUE", UNIQUE),
        ("CHECK", CHECK),
        ("DEFAULT", DEFAULT),
        ("COLLATE", COLLATE),
        ("REFERENCES", REFERENCES),
        ("FOREIGN", FOREIGN),
        ("ON", ON),
        ("DELETE", DELETE),
        ("UPDATE", UPDATE),
        ("NO", NO),
        ("ACTION", ACTION),
        ("CASCADE", CASCADE),
        ("RESTRICT", RESTRICT),
        ("SET", SET),
        ("NULL", NULL),
        ("MATCH", MATCH),
        ("DEFERRABLE", DEFERRABLE),
        ("INITIALLY", INITIALLY),
        ("DEFERRED", DEFERRED),
        ("IMMEDIATE", IMMEDIATE),
        ("AUTOINCREMENT", AUTOINCREMENT),
        ("ASC", ASC),
        ("DESC", DESC),
        ("CONSTRAINT", CONSTRAINT),
        ("CONFLICT", CONFLICT),
        ("ROLLBACK", ROLLBACK),
        ("ABORT", ABORT),
        ("FAIL", FAIL),
        ("IGNORE", IGNORE),
        ("REPLACE", REPLACE),
        ("GENERATED", GENERATED),
        ("ALWAYS", ALWAYS),
        ("AS", AS),
        ("STORED", STORED),
        ("VIRTUAL", VIRTUAL),
        ("ALTER", ALTER),
        ("RENAME", RENAME),
        ("TO", TO),
        ("ADD", ADD),
        ("COLUMN", COLUMN),
        ("DROP", DROP),
        ("CURRENT_TIME", CURRENT_TIME),
        ("CURRENT_DATE", CURRENT_DATE),
        ("CURRENT_TIMESTAMP", CURRENT_TIMESTAMP),
        ("TRUE", TRUE),
        ("FALSE", FALSE),
        ("AND", AND),
        ("OR", OR),
    ];
    KEYWORDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, kw)| *kw)
}
