// crates/countrydb-core/src/lib.rs

//! # countrydb-core
//!
//! Two batch pipelines over the [mledoze/countries] dataset:
//!
//! * [`membership::annotate`] stamps `euMember` / `eftaMember` /
//!   `eeaMember` onto every country record.
//! * [`export::export`] normalizes the dataset into `regions`,
//!   `subregions` and `countries` tables and writes SQL load scripts.
//!
//! [mledoze/countries]: https://github.com/mledoze/countries

pub mod common;
pub mod error;
pub mod export;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod loader;
pub mod membership;
pub mod model;
pub mod prelude;
// Raw input records, as deserialized from the dataset.
#[doc(hidden)]
pub mod raw;
pub mod sql;

// Re-exports
pub use crate::common::{DbStats, MembershipCounts};
pub use crate::error::{CountryDbError, Result};
pub use crate::export::{export, ExportConfig, ExportReport};
pub use crate::membership::{annotate, AnnotateConfig, Bloc, Membership};
pub use crate::model::{CountryDb, CountryRow, Region, Subregion};
pub use crate::sql::{render_scripts, Dialect, RenderOptions, SqlScript};
