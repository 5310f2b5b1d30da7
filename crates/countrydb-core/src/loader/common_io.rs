// crates/countrydb-core/src/loader/common_io.rs
use crate::error::{CountryDbError, Result};
use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

use super::DATA_SOURCE_URL;

/// Opens a dataset file, buffers it, and unwraps gzip when the name ends in `.gz`.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CountryDbError::InputNotFound {
            path: path.to_path_buf(),
            url: DATA_SOURCE_URL,
        },
        _ => CountryDbError::Io(e),
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if is_gzip(path) {
        return Ok(Box::new(BufReader::new(GzDecoder::new(reader))));
    }

    Ok(Box::new(reader))
}

#[cfg(feature = "compact")]
fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Writes `contents` next to `path` in a temp file and renames it into place.
///
/// The destination either keeps its previous content or holds the complete
/// new content; a failed run never leaves a truncated file behind.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path).map_err(|e| CountryDbError::Io(e.error))?;
    Ok(())
}
