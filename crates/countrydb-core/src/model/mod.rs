// crates/countrydb-core/src/model/mod.rs

//! # Relational Model
//!
//! The normalized `regions` / `subregions` / `countries` tables built from
//! the raw dataset, with deterministic surrogate keys.

pub mod convert;
pub mod domain;

pub use convert::{assign_ids, join_list, json_text, subregion_owners};
pub use domain::{CountryDb, CountryRow, Region, Subregion};
