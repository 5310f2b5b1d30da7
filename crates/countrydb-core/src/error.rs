// crates/countrydb-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort an annotate or export run.
///
/// There is no partial success: any of these stops the whole pipeline and
/// leaves previously generated outputs untouched.
#[derive(Debug, Error)]
pub enum CountryDbError {
    /// The source dataset does not exist at the configured path.
    #[error("dataset not found at {}; download it from {url}", path.display())]
    InputNotFound { path: PathBuf, url: &'static str },

    /// The source is not valid JSON, or not an array of objects.
    #[error("failed to parse {}: {source}", path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top-level JSON parsed but has the wrong shape.
    #[error("unexpected dataset layout in {}: {reason}", path.display())]
    InputShape { path: PathBuf, reason: String },

    /// A single record has a field of the wrong type (e.g. `currencies` is not a map).
    #[error("record #{index} has an unexpected field shape: {source}")]
    FieldShape {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// One subregion name was observed under two different regions.
    #[error("subregion '{subregion}' belongs to both '{first}' and '{second}'")]
    AmbiguousSubregion {
        subregion: String,
        first: String,
        second: String,
    },

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "fetch")]
    #[error("download failed: {0}")]
    Fetch(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, CountryDbError>;
