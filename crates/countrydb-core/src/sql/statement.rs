// crates/countrydb-core/src/sql/statement.rs
use super::schema::{TableSchema, COUNTRIES, REGIONS, SUBREGIONS};
use super::value::SqlValue;
use crate::model::{CountryRow, Region, Subregion};
use std::fmt;

/// How an INSERT is laid out in the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Whole statement on one line.
    Inline,
    /// Column list wrapped, one value per line.
    Expanded,
}

/// Column names per line in the expanded column list.
const COLUMNS_PER_LINE: usize = 6;

/// One `INSERT INTO ... VALUES (...)` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: &'static str,
    pub columns: Vec<&'static str>,
    pub values: Vec<SqlValue>,
    pub layout: Layout,
}

/// A model row that maps onto one table.
pub trait SqlRow {
    const LAYOUT: Layout = Layout::Inline;

    fn table() -> &'static TableSchema;

    /// Values in the order of [`TableSchema::insert_columns`].
    fn values(&self) -> Vec<SqlValue>;

    fn to_insert(&self) -> Insert {
        let table = Self::table();
        let columns = table.insert_columns();
        let values = self.values();
        debug_assert_eq!(columns.len(), values.len(), "{}", table.name);
        Insert {
            table: table.name,
            columns,
            values,
            layout: Self::LAYOUT,
        }
    }
}

impl SqlRow for Region {
    fn table() -> &'static TableSchema {
        &REGIONS
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![SqlValue::id(self.id), SqlValue::text(self.name.as_str())]
    }
}

impl SqlRow for Subregion {
    fn table() -> &'static TableSchema {
        &SUBREGIONS
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::id(self.id),
            SqlValue::text(self.name.as_str()),
            SqlValue::id(self.region_id),
        ]
    }
}

impl SqlRow for CountryRow {
    const LAYOUT: Layout = Layout::Expanded;

    fn table() -> &'static TableSchema {
        &COUNTRIES
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::id(self.id),
            SqlValue::text(self.common_name.as_str()),
            SqlValue::nullable_text(&self.official_name),
            SqlValue::nullable_text(&self.cca2),
            SqlValue::nullable_text(&self.cca3),
            SqlValue::nullable_text(&self.ccn3),
            SqlValue::nullable_text(&self.cioc),
            SqlValue::flag(self.independent),
            SqlValue::nullable_text(&self.status),
            SqlValue::flag(self.un_member),
            SqlValue::nullable_text(&self.un_regional_group),
            SqlValue::optional_id(self.region_id),
            SqlValue::optional_id(self.subregion_id),
            SqlValue::nullable_text(&self.capital),
            SqlValue::nullable_text(&self.latlng),
            SqlValue::flag(self.landlocked),
            SqlValue::nullable_text(&self.borders),
            SqlValue::number(&self.area),
            SqlValue::nullable_text(&self.tld),
            SqlValue::optional_text(self.currencies.as_deref()),
            SqlValue::optional_text(self.languages.as_deref()),
            SqlValue::nullable_text(&self.alt_spellings),
            SqlValue::nullable_text(&self.flag_emoji),
        ]
    }
}

/// `{:#}` renders text values as national literals (see [`SqlValue`]).
impl fmt::Display for Insert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let national = f.alternate();
        let literal = |v: &SqlValue| {
            if national {
                format!("{v:#}")
            } else {
                v.to_string()
            }
        };
        match self.layout {
            Layout::Inline => {
                let values: Vec<String> = self.values.iter().map(literal).collect();
                write!(
                    f,
                    "INSERT INTO {} ({}) VALUES ({});",
                    self.table,
                    self.columns.join(", "),
                    values.join(", ")
                )
            }
            Layout::Expanded => {
                writeln!(f, "INSERT INTO {} (", self.table)?;
                let lines: Vec<String> = self
                    .columns
                    .chunks(COLUMNS_PER_LINE)
                    .map(|chunk| format!("    {}", chunk.join(", ")))
                    .collect();
                writeln!(f, "{}", lines.join(",\n"))?;
                writeln!(f, ") VALUES (")?;
                let values: Vec<String> = self
                    .values
                    .iter()
                    .map(|v| format!("    {}", literal(v)))
                    .collect();
                writeln!(f, "{}", values.join(",\n"))?;
                f.write_str(");")
            }
        }
    }
}
