// crates/countrydb-core/src/sql/value.rs
use serde_json::Number;
use std::fmt;

/// A typed SQL literal.
///
/// Every value that ends up in a generated statement goes through the
/// [`Display`](fmt::Display) impl below, which is the only place where
/// quoting and NULL rendering happen. The alternate form (`{:#}`) writes
/// text as a national literal, `N'...'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Null,
    Int(i64),
    /// A numeric literal kept in its source spelling (e.g. `0.44`, `83871`).
    Numeric(String),
    /// Always rendered quoted, even when empty.
    Text(String),
}

impl SqlValue {
    /// A string that is rendered quoted even when empty.
    pub fn text(s: impl Into<String>) -> Self {
        SqlValue::Text(s.into())
    }

    /// A string where empty means absent: `""` renders as `NULL`.
    pub fn nullable_text(s: &str) -> Self {
        if s.is_empty() {
            SqlValue::Null
        } else {
            SqlValue::Text(s.to_owned())
        }
    }

    /// `Some("")` and `None` both render as `NULL`.
    pub fn optional_text(s: Option<&str>) -> Self {
        s.map_or(SqlValue::Null, Self::nullable_text)
    }

    /// Booleans are stored as `1` / `0`.
    pub fn flag(b: bool) -> Self {
        SqlValue::Int(i64::from(b))
    }

    pub fn id(id: u32) -> Self {
        SqlValue::Int(i64::from(id))
    }

    /// Foreign keys: `None` renders as `NULL`.
    pub fn optional_id(id: Option<u32>) -> Self {
        id.map_or(SqlValue::Null, Self::id)
    }

    pub fn number(n: &Number) -> Self {
        SqlValue::Numeric(n.to_string())
    }
}

/// Wraps `s` in single quotes, doubling any embedded single quote.
pub fn quote_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Int(i) => write!(f, "{i}"),
            SqlValue::Numeric(n) => f.write_str(n),
            SqlValue::Text(s) if f.alternate() => write!(f, "N{}", quote_literal(s)),
            SqlValue::Text(s) => f.write_str(&quote_literal(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(
            SqlValue::text("O'Brien's Land").to_string(),
            "'O''Brien''s Land'"
        );
    }

    #[test]
    fn empty_or_absent_optional_text_is_null() {
        assert_eq!(SqlValue::nullable_text("").to_string(), "NULL");
        assert_eq!(SqlValue::optional_text(None).to_string(), "NULL");
        assert_eq!(SqlValue::optional_text(Some("")).to_string(), "NULL");
        assert_eq!(SqlValue::optional_text(Some("AT")).to_string(), "'AT'");
    }

    #[test]
    fn required_text_stays_quoted_when_empty() {
        assert_eq!(SqlValue::text("").to_string(), "''");
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(SqlValue::text("Åland 🇦🇽").to_string(), "'Åland 🇦🇽'");
    }

    #[test]
    fn alternate_form_marks_national_text() {
        assert_eq!(format!("{:#}", SqlValue::text("Åland")), "N'Åland'");
        assert_eq!(format!("{:#}", SqlValue::text("it's")), "N'it''s'");
        assert_eq!(format!("{:#}", SqlValue::Null), "NULL");
        assert_eq!(format!("{:#}", SqlValue::flag(true)), "1");
    }

    #[test]
    fn numbers_and_flags() {
        assert_eq!(SqlValue::flag(true).to_string(), "1");
        assert_eq!(SqlValue::flag(false).to_string(), "0");
        assert_eq!(SqlValue::optional_id(None).to_string(), "NULL");
        assert_eq!(SqlValue::optional_id(Some(7)).to_string(), "7");
        let n: Number = serde_json::from_str("0.44").unwrap();
        assert_eq!(SqlValue::number(&n).to_string(), "0.44");
    }
}
