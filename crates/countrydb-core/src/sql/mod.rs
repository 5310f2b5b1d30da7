// crates/countrydb-core/src/sql/mod.rs

//! # SQL Rendering
//!
//! Turns a [`CountryDb`](crate::model::CountryDb) into the six load scripts.
//!
//! * [`schema`]: static table descriptions shared by DDL and INSERTs.
//! * [`statement`]: the INSERT model and the row-to-values mapping.
//! * [`value`]: typed literals; the single place where quoting happens.
//! * [`dialect`]: engine-specific syntax.
//! * [`scripts`]: file assembly.

pub mod dialect;
pub mod schema;
pub mod scripts;
pub mod statement;
pub mod value;

pub use dialect::{Dialect, ParseDialectError};
pub use schema::{ColumnType, TableSchema, COUNTRIES, REGIONS, SUBREGIONS};
pub use scripts::{render_scripts, RenderOptions, ScriptKind, SqlScript};
pub use statement::{Insert, Layout, SqlRow};
pub use value::{quote_literal, SqlValue};
