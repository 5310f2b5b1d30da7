// crates/countrydb-core/src/sql/schema.rs

//! Table schema definitions for the three generated tables.
//!
//! The DDL and the INSERT column lists are both derived from these
//! descriptions, so the two cannot drift apart.

use super::dialect::Dialect;
use super::value::quote_literal;

/// Engine-neutral column type; [`Dialect::column_type`] spells it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    /// 0/1 boolean.
    Flag,
    Decimal,
    Varchar(u16),
    Char(u8),
    /// Row creation time, filled by the database.
    CreatedAt,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
    pub primary_key: bool,
    pub not_null: bool,
    pub unique: bool,
    pub default: Option<&'static str>,
    pub comment: Option<&'static str>,
}

impl Column {
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            primary_key: false,
            not_null: false,
            unique: false,
            default: None,
            comment: None,
        }
    }

    pub const fn primary_key(self) -> Self {
        Self {
            primary_key: true,
            ..self
        }
    }

    pub const fn not_null(self) -> Self {
        Self {
            not_null: true,
            ..self
        }
    }

    pub const fn unique(self) -> Self {
        Self {
            unique: true,
            ..self
        }
    }

    pub const fn default_value(self, value: &'static str) -> Self {
        Self {
            default: Some(value),
            ..self
        }
    }

    pub const fn comment(self, text: &'static str) -> Self {
        Self {
            comment: Some(text),
            ..self
        }
    }

    /// Columns the generator supplies values for.
    pub fn is_insertable(&self) -> bool {
        self.ty != ColumnType::CreatedAt
    }

    fn definition(&self, dialect: Dialect) -> String {
        let mut def = format!("{} {}", self.name, dialect.column_type(self.ty));
        if let Some(default) = self.default {
            def.push_str(" DEFAULT ");
            def.push_str(default);
        }
        if self.primary_key {
            def.push_str(" PRIMARY KEY");
        }
        if self.not_null {
            def.push_str(" NOT NULL");
        }
        if self.unique {
            def.push_str(" UNIQUE");
        }
        def
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ForeignKey {
    pub name: &'static str,
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct UniqueKey {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Index {
    pub name: &'static str,
    pub column: &'static str,
}

#[derive(Debug)]
pub struct TableSchema {
    pub name: &'static str,
    pub comment: &'static str,
    pub columns: &'static [Column],
    pub unique_keys: &'static [UniqueKey],
    pub foreign_keys: &'static [ForeignKey],
    pub indexes: &'static [Index],
}

impl TableSchema {
    /// Names of the columns an INSERT lists, in table order.
    pub fn insert_columns(&self) -> Vec<&'static str> {
        self.columns
            .iter()
            .filter(|c| c.is_insertable())
            .map(|c| c.name)
            .collect()
    }

    pub fn create_table(&self, dialect: Dialect) -> String {
        let inline_comments = !dialect.supports_comment_on();
        let mut parts: Vec<String> = Vec::new();

        for col in self.columns {
            let mut part = String::new();
            if let (true, Some(comment)) = (inline_comments, col.comment) {
                part.push_str(&format!("    -- {comment}\n"));
            }
            part.push_str("    ");
            part.push_str(&col.definition(dialect));
            parts.push(part);
        }
        for fk in self.foreign_keys {
            parts.push(format!(
                "    CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {}({})",
                fk.name, fk.column, fk.references_table, fk.references_column
            ));
        }
        for uk in self.unique_keys {
            parts.push(format!(
                "    CONSTRAINT {} UNIQUE ({})",
                uk.name,
                uk.columns.join(", ")
            ));
        }

        let mut out = String::new();
        if inline_comments {
            out.push_str(&format!("-- {}: {}\n", self.name, self.comment));
        }
        out.push_str(&format!(
            "CREATE TABLE {} (\n{}\n);\n",
            self.name,
            parts.join(",\n")
        ));
        out
    }

    pub fn create_indexes(&self) -> Vec<String> {
        self.indexes
            .iter()
            .map(|idx| format!("CREATE INDEX {} ON {}({});", idx.name, self.name, idx.column))
            .collect()
    }

    /// `COMMENT ON` statements; empty for dialects without them.
    pub fn comment_statements(&self, dialect: Dialect) -> Vec<String> {
        if !dialect.supports_comment_on() {
            return Vec::new();
        }
        let table = format!(
            "COMMENT ON TABLE {} IS {};",
            self.name,
            quote_literal(self.comment)
        );
        std::iter::once(table)
            .chain(self.columns.iter().filter_map(|col| {
                col.comment.map(|text| {
                    format!(
                        "COMMENT ON COLUMN {}.{} IS {};",
                        self.name,
                        col.name,
                        quote_literal(text)
                    )
                })
            }))
            .collect()
    }
}

pub static REGIONS: TableSchema = TableSchema {
    name: "regions",
    comment: "World regions (continents)",
    columns: &[
        Column::new("region_id", ColumnType::Integer).primary_key(),
        Column::new("region_name", ColumnType::Varchar(100))
            .not_null()
            .unique(),
        Column::new("created_date", ColumnType::CreatedAt),
    ],
    unique_keys: &[],
    foreign_keys: &[],
    indexes: &[],
};

pub static SUBREGIONS: TableSchema = TableSchema {
    name: "subregions",
    comment: "World subregions within continents",
    columns: &[
        Column::new("subregion_id", ColumnType::Integer).primary_key(),
        Column::new("subregion_name", ColumnType::Varchar(100)).not_null(),
        Column::new("region_id", ColumnType::Integer),
        Column::new("created_date", ColumnType::CreatedAt),
    ],
    unique_keys: &[UniqueKey {
        name: "uk_subregion_name",
        columns: &["subregion_name", "region_id"],
    }],
    foreign_keys: &[ForeignKey {
        name: "fk_subregion_region",
        column: "region_id",
        references_table: "regions",
        references_column: "region_id",
    }],
    indexes: &[Index {
        name: "idx_subregions_region",
        column: "region_id",
    }],
};

pub static COUNTRIES: TableSchema = TableSchema {
    name: "countries",
    comment: "World countries and territories based on ISO 3166-1",
    columns: &[
        Column::new("country_id", ColumnType::Integer).primary_key(),
        Column::new("common_name", ColumnType::Varchar(100))
            .not_null()
            .comment("Common name in English"),
        Column::new("official_name", ColumnType::Varchar(200)).comment("Official name in English"),
        Column::new("cca2", ColumnType::Char(2))
            .unique()
            .comment("ISO 3166-1 alpha-2 code"),
        Column::new("cca3", ColumnType::Char(3))
            .unique()
            .comment("ISO 3166-1 alpha-3 code"),
        Column::new("ccn3", ColumnType::Char(3)).comment("ISO 3166-1 numeric code"),
        Column::new("cioc", ColumnType::Char(3)).comment("International Olympic Committee code"),
        Column::new("independent", ColumnType::Flag)
            .default_value("0")
            .comment("1 if independent sovereign state, 0 otherwise"),
        Column::new("status", ColumnType::Varchar(50)).comment("ISO 3166-1 assignment status"),
        Column::new("un_member", ColumnType::Flag)
            .default_value("0")
            .comment("1 if UN member, 0 otherwise"),
        Column::new("un_regional_group", ColumnType::Varchar(100)),
        Column::new("region_id", ColumnType::Integer),
        Column::new("subregion_id", ColumnType::Integer),
        Column::new("capital", ColumnType::Varchar(500)).comment("Capital cities, comma-separated"),
        Column::new("latlng", ColumnType::Varchar(50)).comment("Latitude and longitude as \"lat, lng\""),
        Column::new("landlocked", ColumnType::Flag)
            .default_value("0")
            .comment("1 if landlocked, 0 otherwise"),
        Column::new("borders", ColumnType::Varchar(1000))
            .comment("Alpha-3 codes of bordering countries, comma-separated"),
        Column::new("area", ColumnType::Decimal).comment("Area in square kilometers"),
        Column::new("tld", ColumnType::Varchar(200)).comment("Top-level domains, comma-separated"),
        Column::new("currencies", ColumnType::Varchar(1000))
            .comment("JSON object of currencies keyed by ISO 4217 code"),
        Column::new("languages", ColumnType::Varchar(1000))
            .comment("JSON object of languages keyed by ISO 639-3 code"),
        Column::new("alt_spellings", ColumnType::Varchar(1000))
            .comment("Alternative spellings, comma-separated"),
        Column::new("flag_emoji", ColumnType::Varchar(10)).comment("Unicode flag emoji"),
        Column::new("created_date", ColumnType::CreatedAt),
    ],
    unique_keys: &[],
    foreign_keys: &[
        ForeignKey {
            name: "fk_country_region",
            column: "region_id",
            references_table: "regions",
            references_column: "region_id",
        },
        ForeignKey {
            name: "fk_country_subregion",
            column: "subregion_id",
            references_table: "subregions",
            references_column: "subregion_id",
        },
    ],
    // cca2 / cca3 are already indexed through their UNIQUE constraints.
    indexes: &[
        Index {
            name: "idx_countries_region",
            column: "region_id",
        },
        Index {
            name: "idx_countries_subregion",
            column: "subregion_id",
        },
        Index {
            name: "idx_countries_independent",
            column: "independent",
        },
        Index {
            name: "idx_countries_un_member",
            column: "un_member",
        },
    ],
};

/// Tables in creation order (parents before children).
pub static TABLES: [&TableSchema; 3] = [&REGIONS, &SUBREGIONS, &COUNTRIES];

/// The complete `01_create_tables.sql` body, without file header.
pub fn create_tables_script(dialect: Dialect) -> String {
    let mut out = String::new();

    out.push_str("-- Drop tables if they exist (children first)\n");
    for table in TABLES.iter().rev() {
        out.push_str(&dialect.drop_table(table.name));
        out.push('\n');
    }
    out.push('\n');

    if let Some(begin) = dialect.begin() {
        out.push_str(begin);
        out.push_str("\n\n");
    }

    for table in TABLES {
        out.push_str(&table.create_table(dialect));
        out.push('\n');
    }

    out.push_str("-- Indexes\n");
    for table in TABLES {
        for stmt in table.create_indexes() {
            out.push_str(&stmt);
            out.push('\n');
        }
    }

    let comments: Vec<String> = TABLES
        .iter()
        .flat_map(|t| t.comment_statements(dialect))
        .collect();
    if !comments.is_empty() {
        out.push_str("\n-- Table and column comments\n");
        for stmt in comments {
            out.push_str(&stmt);
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(dialect.commit());
    out.push('\n');
    out
}
