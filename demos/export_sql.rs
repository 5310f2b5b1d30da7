//! SQL export example for countrydb-rs
//!
//! This example demonstrates how to:
//! - Normalize a handful of country records into a `CountryDb`
//! - Inspect the generated IDs
//! - Render the load scripts for every dialect
//!
//! Run with `cargo run --example export_sql`.

use countrydb_rs::prelude::*;
use countrydb_rs::raw::CountriesRaw;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== countrydb-rs SQL Export Example ===\n");

    let raw: CountriesRaw = serde_json::from_value(json!([
        { "name": { "common": "Portugal" }, "cca3": "PRT", "region": "Europe", "subregion": "Southern Europe", "area": 92090 },
        { "name": { "common": "Chile" }, "cca3": "CHL", "region": "Americas", "subregion": "South America", "capital": ["Santiago"] },
        { "name": { "common": "Cook Islands" }, "cca3": "COK", "region": "Oceania", "subregion": "Polynesia" },
        { "name": { "common": "Bouvet Island" }, "cca3": "BVT", "region": "Antarctic" }
    ]))
    .map_err(|source| CountryDbError::FieldShape { index: 0, source })?;

    // Example 1: Normalize
    println!("--- Example 1: Normalize ---");
    let db = CountryDb::from_raw(raw)?;
    for region in &db.regions {
        println!("  region {:>2}  {}", region.id, region.name);
    }
    for sub in &db.subregions {
        println!("  subregion {:>2}  {} (region {})", sub.id, sub.name, sub.region_id);
    }
    println!();

    // Example 2: Render every dialect
    println!("--- Example 2: Render scripts ---");
    for dialect in Dialect::ALL {
        let opts = RenderOptions {
            dialect,
            generated_on: None,
        };
        let scripts = render_scripts(&db, &opts);
        let total: usize = scripts.iter().map(|s| s.contents.len()).sum();
        println!("  {:<10} {} files, {} bytes", dialect.name(), scripts.len(), total);
    }
    println!();

    // Example 3: Show the countries INSERTs
    println!("--- Example 3: Countries file (SQLite) ---");
    let scripts = render_scripts(
        &db,
        &RenderOptions {
            dialect: Dialect::Sqlite,
            generated_on: None,
        },
    );
    if let Some(countries) = scripts
        .iter()
        .find(|s| s.kind == ScriptKind::InsertCountries)
    {
        println!("{}", countries.contents);
    }

    Ok(())
}
