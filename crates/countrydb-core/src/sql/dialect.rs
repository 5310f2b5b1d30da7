// crates/countrydb-core/src/sql/dialect.rs
use super::schema::ColumnType;
use super::value::quote_literal;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Target database engine.
///
/// Only syntax differs between dialects; row data, IDs and ordering are the
/// same for all of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Oracle, run through SQL*Plus / SQLcl.
    #[default]
    Oracle,
    /// PostgreSQL, run through `psql`.
    Postgres,
    /// SQLite, run through the `sqlite3` shell.
    Sqlite,
    /// MySQL / MariaDB, run through the `mysql` client.
    MySql,
    /// Microsoft SQL Server 2016 or later, run through `sqlcmd`.
    SqlServer,
}

#[derive(Debug, Error)]
#[error("unknown SQL dialect '{0}' (expected oracle, postgres, sqlite, mysql or sqlserver)")]
pub struct ParseDialectError(String);

impl Dialect {
    pub const ALL: [Dialect; 5] = [
        Dialect::Oracle,
        Dialect::Postgres,
        Dialect::Sqlite,
        Dialect::MySql,
        Dialect::SqlServer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Oracle => "Oracle",
            Dialect::Postgres => "PostgreSQL",
            Dialect::Sqlite => "SQLite",
            Dialect::MySql => "MySQL",
            Dialect::SqlServer => "SQL Server",
        }
    }

    pub fn column_type(self, ty: ColumnType) -> String {
        match (self, ty) {
            (Dialect::Oracle, ColumnType::Integer) => "NUMBER".into(),
            (Dialect::Oracle, ColumnType::Flag) => "NUMBER(1)".into(),
            (Dialect::Oracle, ColumnType::Decimal) => "NUMBER".into(),
            (Dialect::Oracle, ColumnType::Varchar(n)) => format!("VARCHAR2({n})"),
            (Dialect::Oracle, ColumnType::Char(n)) => format!("CHAR({n})"),
            (Dialect::Oracle, ColumnType::CreatedAt) => "DATE DEFAULT SYSDATE".into(),

            (Dialect::Postgres, ColumnType::Integer) => "INTEGER".into(),
            (Dialect::Postgres, ColumnType::Flag) => "SMALLINT".into(),
            (Dialect::Postgres, ColumnType::Decimal) => "NUMERIC".into(),
            (Dialect::Postgres, ColumnType::Varchar(n)) => format!("VARCHAR({n})"),
            (Dialect::Postgres, ColumnType::Char(n)) => format!("CHAR({n})"),
            (Dialect::Postgres, ColumnType::CreatedAt) => {
                "TIMESTAMP DEFAULT CURRENT_TIMESTAMP".into()
            }

            (Dialect::Sqlite, ColumnType::Integer | ColumnType::Flag) => "INTEGER".into(),
            (Dialect::Sqlite, ColumnType::Decimal) => "REAL".into(),
            (Dialect::Sqlite, ColumnType::Varchar(_) | ColumnType::Char(_)) => "TEXT".into(),
            (Dialect::Sqlite, ColumnType::CreatedAt) => "TEXT DEFAULT CURRENT_TIMESTAMP".into(),

            (Dialect::MySql, ColumnType::Integer) => "INT".into(),
            (Dialect::MySql, ColumnType::Flag) => "TINYINT(1)".into(),
            (Dialect::MySql, ColumnType::Decimal) => "DECIMAL(15,2)".into(),
            (Dialect::MySql, ColumnType::Varchar(n)) => format!("VARCHAR({n})"),
            (Dialect::MySql, ColumnType::Char(n)) => format!("CHAR({n})"),
            (Dialect::MySql, ColumnType::CreatedAt) => {
                "TIMESTAMP DEFAULT CURRENT_TIMESTAMP".into()
            }

            (Dialect::SqlServer, ColumnType::Integer) => "INT".into(),
            (Dialect::SqlServer, ColumnType::Flag) => "BIT".into(),
            (Dialect::SqlServer, ColumnType::Decimal) => "DECIMAL(15,2)".into(),
            (Dialect::SqlServer, ColumnType::Varchar(n)) => format!("NVARCHAR({n})"),
            (Dialect::SqlServer, ColumnType::Char(n)) => format!("NCHAR({n})"),
            (Dialect::SqlServer, ColumnType::CreatedAt) => "DATETIME DEFAULT GETDATE()".into(),
        }
    }

    pub fn drop_table(self, table: &str) -> String {
        match self {
            Dialect::Oracle => format!("DROP TABLE {table} CASCADE CONSTRAINTS;"),
            Dialect::Postgres => format!("DROP TABLE IF EXISTS {table} CASCADE;"),
            Dialect::Sqlite | Dialect::MySql | Dialect::SqlServer => {
                format!("DROP TABLE IF EXISTS {table};")
            }
        }
    }

    /// Statement opening an explicit transaction. Oracle sessions are
    /// always in one, so it gets none.
    pub fn begin(self) -> Option<&'static str> {
        match self {
            Dialect::Oracle => None,
            Dialect::Postgres | Dialect::Sqlite => Some("BEGIN;"),
            Dialect::MySql => Some("START TRANSACTION;"),
            Dialect::SqlServer => Some("BEGIN TRANSACTION;"),
        }
    }

    pub fn commit(self) -> &'static str {
        "COMMIT;"
    }

    /// Whether `COMMENT ON TABLE/COLUMN` exists; otherwise comments become
    /// `--` lines in the DDL.
    pub fn supports_comment_on(self) -> bool {
        matches!(self, Dialect::Oracle | Dialect::Postgres)
    }

    /// Text literals need the `N'...'` form to keep non-Latin characters.
    pub fn national_text(self) -> bool {
        matches!(self, Dialect::SqlServer)
    }

    /// Row-limiting clause placed after `ORDER BY`; `None` where the engine
    /// uses [`Dialect::top`] instead.
    pub fn limit(self, rows: u32) -> Option<String> {
        match self {
            Dialect::Oracle | Dialect::Postgres => Some(format!("FETCH FIRST {rows} ROWS ONLY")),
            Dialect::Sqlite | Dialect::MySql => Some(format!("LIMIT {rows}")),
            Dialect::SqlServer => None,
        }
    }

    /// Row-limiting prefix placed right after `SELECT`, with trailing space.
    pub fn top(self, rows: u32) -> Option<String> {
        match self {
            Dialect::SqlServer => Some(format!("TOP {rows} ")),
            _ => None,
        }
    }

    /// Table needed to `SELECT` scalar sub-queries without a real source.
    pub fn dual(self) -> Option<&'static str> {
        match self {
            Dialect::Oracle => Some("FROM dual"),
            Dialect::Postgres | Dialect::Sqlite | Dialect::MySql | Dialect::SqlServer => None,
        }
    }

    /// Client command printing `message`; an empty message prints a blank line.
    pub fn echo(self, message: &str) -> String {
        match self {
            Dialect::Oracle => prefixed("PROMPT", message),
            Dialect::Postgres => prefixed("\\echo", message),
            Dialect::Sqlite => prefixed(".print", message),
            Dialect::MySql => format!("SELECT {} AS '';", quote_literal(message)),
            Dialect::SqlServer => format!("PRINT {};", quote_literal(message)),
        }
    }

    /// Client command running another script relative to the current one.
    pub fn include(self, file: &str) -> String {
        match self {
            Dialect::Oracle => format!("@@{file}"),
            Dialect::Postgres => format!("\\ir {file}"),
            Dialect::Sqlite => format!(".read {file}"),
            Dialect::MySql => format!("SOURCE {file};"),
            Dialect::SqlServer => format!(":r {file}"),
        }
    }
}

fn prefixed(cmd: &str, message: &str) -> String {
    if message.is_empty() {
        cmd.to_owned()
    } else {
        format!("{cmd} {message}")
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Dialect::Oracle => "oracle",
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
            Dialect::MySql => "mysql",
            Dialect::SqlServer => "sqlserver",
        };
        f.write_str(s)
    }
}

impl FromStr for Dialect {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oracle" => Ok(Dialect::Oracle),
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            "sqlserver" | "mssql" | "tsql" => Ok(Dialect::SqlServer),
            _ => Err(ParseDialectError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("oracle".parse::<Dialect>().unwrap(), Dialect::Oracle);
        assert_eq!("PostgreSQL".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!(" sqlite3 ".parse::<Dialect>().unwrap(), Dialect::Sqlite);
        assert_eq!("MariaDB".parse::<Dialect>().unwrap(), Dialect::MySql);
        assert_eq!("mssql".parse::<Dialect>().unwrap(), Dialect::SqlServer);
        assert!("db2".parse::<Dialect>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for d in Dialect::ALL {
            assert_eq!(d.to_string().parse::<Dialect>().unwrap(), d);
        }
    }

    #[test]
    fn client_commands() {
        assert_eq!(Dialect::Oracle.include("01_create_tables.sql"), "@@01_create_tables.sql");
        assert_eq!(Dialect::Postgres.echo("Done"), "\\echo Done");
        assert_eq!(Dialect::Sqlite.echo(""), ".print");
        assert_eq!(Dialect::MySql.include("02_insert_regions.sql"), "SOURCE 02_insert_regions.sql;");
        assert_eq!(Dialect::MySql.echo("It's done"), "SELECT 'It''s done' AS '';");
        assert_eq!(Dialect::SqlServer.include("03_insert_subregions.sql"), ":r 03_insert_subregions.sql");
        assert_eq!(Dialect::SqlServer.echo(""), "PRINT '';");
    }

    #[test]
    fn row_limits_go_before_or_after() {
        assert_eq!(Dialect::MySql.limit(10).as_deref(), Some("LIMIT 10"));
        assert_eq!(Dialect::Oracle.limit(5).as_deref(), Some("FETCH FIRST 5 ROWS ONLY"));
        assert_eq!(Dialect::SqlServer.limit(10), None);
        assert_eq!(Dialect::SqlServer.top(10).as_deref(), Some("TOP 10 "));
        for d in Dialect::ALL {
            assert!(d.limit(1).is_some() != d.top(1).is_some(), "{d}");
        }
    }

    #[test]
    fn column_types_per_engine() {
        assert_eq!(Dialect::MySql.column_type(ColumnType::Flag), "TINYINT(1)");
        assert_eq!(Dialect::MySql.column_type(ColumnType::Decimal), "DECIMAL(15,2)");
        assert_eq!(Dialect::SqlServer.column_type(ColumnType::Flag), "BIT");
        assert_eq!(Dialect::SqlServer.column_type(ColumnType::Varchar(100)), "NVARCHAR(100)");
        assert_eq!(
            Dialect::SqlServer.column_type(ColumnType::CreatedAt),
            "DATETIME DEFAULT GETDATE()"
        );
        assert_eq!(Dialect::MySql.drop_table("regions"), "DROP TABLE IF EXISTS regions;");
        assert_eq!(Dialect::SqlServer.begin(), Some("BEGIN TRANSACTION;"));
        assert!(!Dialect::MySql.supports_comment_on());
    }
}
