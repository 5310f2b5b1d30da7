//! Error handling example for countrydb-rs
//!
//! This example demonstrates how the pipelines report bad input.

use countrydb_rs::prelude::*;
use std::fs;

fn main() -> Result<()> {
    println!("=== countrydb-rs Error Handling Example ===\n");

    let dir = tempfile::tempdir()?;

    // Example 1: Missing dataset
    println!("--- Example 1: Missing input file ---");
    let config = ExportConfig {
        input: dir.path().join("countries.json"),
        output_dir: dir.path().join("SQLs"),
        ..ExportConfig::default()
    };
    match export(&config) {
        Ok(_) => println!("  unexpected success"),
        Err(CountryDbError::InputNotFound { path, url }) => {
            println!("  ✗ {} is missing", path.display());
            println!("    download it from {url}");
        }
        Err(e) => return Err(e),
    }
    println!();

    // Example 2: Not an array
    println!("--- Example 2: Wrong top-level shape ---");
    let wrong_shape = dir.path().join("object.json");
    fs::write(&wrong_shape, r#"{ "countries": [] }"#)?;
    match load_records(&wrong_shape) {
        Err(e @ CountryDbError::InputShape { .. }) => println!("  ✗ {e}"),
        other => println!("  unexpected: {other:?}"),
    }
    println!();

    // Example 3: A single malformed record aborts the run
    println!("--- Example 3: Malformed record ---");
    let bad_record = dir.path().join("bad.json");
    fs::write(
        &bad_record,
        r#"[{ "name": { "common": "Ok" } }, { "name": { "common": "Broken" }, "languages": "English" }]"#,
    )?;
    match load_countries(&bad_record) {
        Err(CountryDbError::FieldShape { index, source }) => {
            println!("  ✗ record #{index}: {source}");
        }
        other => println!("  unexpected: {other:?}"),
    }
    println!();

    // Example 4: Subregion listed under two regions
    println!("--- Example 4: Ambiguous subregion ---");
    let ambiguous = dir.path().join("ambiguous.json");
    fs::write(
        &ambiguous,
        r#"[{ "region": "Europe", "subregion": "Caucasus" }, { "region": "Asia", "subregion": "Caucasus" }]"#,
    )?;
    match load_countries(&ambiguous).and_then(CountryDb::from_raw) {
        Err(e @ CountryDbError::AmbiguousSubregion { .. }) => println!("  ✗ {e}"),
        other => println!("  unexpected: {other:?}"),
    }

    Ok(())
}
