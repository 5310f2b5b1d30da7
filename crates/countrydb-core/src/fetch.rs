// crates/countrydb-core/src/fetch.rs

//! Downloads the upstream dataset (feature `fetch`).

use crate::error::{CountryDbError, Result};
use crate::loader::write_atomic;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Fetches `url` and stores it at `dest`, returning the byte count.
///
/// The body must be a JSON array; anything else is rejected before `dest`
/// is touched.
pub fn fetch_dataset(url: &str, dest: &Path) -> Result<u64> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

    debug!(url, "downloading dataset");
    let body = client
        .get(url)
        .header(
            USER_AGENT,
            format!("countrydb/{}", env!("CARGO_PKG_VERSION")),
        )
        .send()?
        .error_for_status()?
        .bytes()?;

    let doc: Value = serde_json::from_slice(&body).map_err(|source| CountryDbError::InputParse {
        path: dest.to_path_buf(),
        source,
    })?;
    if !doc.is_array() {
        return Err(CountryDbError::InputShape {
            path: dest.to_path_buf(),
            reason: format!("{url} did not return a JSON array"),
        });
    }

    write_atomic(dest, &body)?;
    let len = body.len() as u64;
    info!(dest = %dest.display(), bytes = len, "dataset downloaded");
    Ok(len)
}
