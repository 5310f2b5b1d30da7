//! Workspace crate: re-exports `countrydb-core` for the demos.

pub use countrydb_core::*;
