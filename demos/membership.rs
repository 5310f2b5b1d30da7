//! Membership lookup example for countrydb-rs
//!
//! Shows the EU / EFTA / EEA tables and annotates records in memory.

use countrydb_rs::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== countrydb-rs Membership Example ===\n");

    println!("--- Example 1: Lookups by alpha-3 code ---");
    for code in ["DEU", "NOR", "CHE", "GBR", ""] {
        let m = Membership::of(code);
        println!(
            "  {:<4} eu={:<5} efta={:<5} eea={}",
            if code.is_empty() { "-" } else { code },
            m.eu_member,
            m.efta_member,
            m.eea_member
        );
    }
    println!();

    println!("--- Example 2: Bloc sizes ---");
    for bloc in Bloc::ALL {
        println!("  {:<11} {}", bloc.json_key(), bloc.members().len());
    }
    println!();

    println!("--- Example 3: Annotate records ---");
    let mut records = vec![
        json!({ "name": { "common": "Iceland" }, "cca3": "ISL" }),
        json!({ "name": { "common": "Liechtenstein" }, "cca3": "LIE" }),
        json!({ "name": { "common": "Japan" }, "cca3": "JPN" }),
    ];
    let counts = annotate_records(&mut records)?;
    for record in &records {
        println!("  {record}");
    }
    println!("  eu={} efta={} eea={}", counts.eu, counts.efta, counts.eea);

    Ok(())
}
