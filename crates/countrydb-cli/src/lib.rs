//! countrydb-cli
//! =============
//!
//! Command-line interface for `countrydb-core`.
//!
//! The binary (`countrydb`) is the primary deliverable; this library target
//! exposes the argument and logging setup so they can be tested.
//!
//! Quick start
//! -----------
//!
//! ```text
//! countrydb annotate
//! countrydb export
//! countrydb export --dialect postgres --output-dir SQLs/postgres --summary
//! countrydb -v export --input data/countries.json.gz
//! ```
//!
//! Without flags each command uses the fixed relative paths of the dataset
//! layout (`data/countries.json` for `annotate`, `countries.json` and
//! `SQLs/` for `export`).
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod logging;
