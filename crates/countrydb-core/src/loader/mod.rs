// crates/countrydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and hands the parsed
//! payload to the annotator (untyped records) or the exporter (typed
//! [`CountryRaw`] records).

use crate::error::{CountryDbError, Result};
use crate::raw::{CountriesRaw, CountryRaw};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

pub mod common_io;

pub use common_io::{open_stream, write_atomic};

/// Where the source dataset lives upstream.
pub const DATA_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/mledoze/countries/master/countries.json";

/// Project page of the dataset, quoted in generated file headers.
pub const DATA_PROJECT_URL: &str = "https://github.com/mledoze/countries";

/// Loads the dataset as untyped JSON objects, in input order.
///
/// Fails with [`CountryDbError::InputParse`] on invalid JSON and with
/// [`CountryDbError::InputShape`] unless the document is an array of objects.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    let doc: Value = serde_json::from_reader(reader).map_err(|source| CountryDbError::InputParse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Array(records) = doc else {
        return Err(CountryDbError::InputShape {
            path: path.to_path_buf(),
            reason: "top-level value is not an array".into(),
        });
    };

    if let Some(index) = records.iter().position(|r| !r.is_object()) {
        return Err(CountryDbError::InputShape {
            path: path.to_path_buf(),
            reason: format!("element #{index} is not an object"),
        });
    }

    debug!(path = %path.display(), records = records.len(), "dataset parsed");
    Ok(records)
}

/// Loads the dataset as typed country records, in input order.
pub fn load_countries(path: impl AsRef<Path>) -> Result<CountriesRaw> {
    load_records(path)?
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<CountryRaw>(value)
                .map_err(|source| CountryDbError::FieldShape { index, source })
        })
        .collect()
}
