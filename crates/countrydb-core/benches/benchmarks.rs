//! Criterion benchmarks for normalization and SQL rendering.
//!
//! Run with:
//! ```bash
//! cargo bench --package countrydb-core
//! ```

use countrydb_core::membership::annotate_records;
use countrydb_core::raw::CountriesRaw;
use countrydb_core::sql::{render_scripts, Dialect, RenderOptions};
use countrydb_core::CountryDb;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};
use std::hint::black_box;

/// Dataset sizes; the real dataset has about 250 records.
const SIZES: &[usize] = &[250, 1_000];

const REGIONS: &[(&str, &[&str])] = &[
    ("Africa", &["Eastern Africa", "Northern Africa", "Western Africa"]),
    ("Americas", &["Caribbean", "South America"]),
    ("Asia", &["Eastern Asia", "Southern Asia"]),
    ("Europe", &["Northern Europe", "Southern Europe", "Western Europe"]),
    ("Oceania", &["Polynesia"]),
];

fn synthetic_records(n: usize) -> Vec<Value> {
    let pairs: Vec<(&str, &str)> = REGIONS
        .iter()
        .flat_map(|(region, subs)| subs.iter().map(move |s| (*region, *s)))
        .collect();
    (0..n)
        .map(|i| {
            let (region, subregion) = pairs[i % pairs.len()];
            json!({
                "name": { "common": format!("Country {i:04}"), "official": format!("Republic of {i}") },
                "cca2": format!("{:02}", i % 100),
                "cca3": if i % 7 == 0 { "DEU".to_owned() } else { format!("X{:02}", i % 100) },
                "independent": i % 3 != 0,
                "unMember": i % 2 == 0,
                "region": region,
                "subregion": subregion,
                "capital": ["Capital", "Second City"],
                "latlng": [12.5, -70.0],
                "borders": ["AAA", "BBB"],
                "area": 1234.5,
                "tld": [".xx"],
                "currencies": { "EUR": { "name": "Euro", "symbol": "€" } },
                "languages": { "eng": "English", "fra": "French" },
                "altSpellings": ["C'Land"],
                "flag": "🏳"
            })
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for &size in SIZES {
        let raw: CountriesRaw = serde_json::from_value(Value::Array(synthetic_records(size)))
            .expect("synthetic records deserialize");
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &raw, |b, raw| {
            b.iter(|| CountryDb::from_raw(black_box(raw.clone())).expect("normalize"));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_scripts");
    let raw: CountriesRaw = serde_json::from_value(Value::Array(synthetic_records(250)))
        .expect("synthetic records deserialize");
    let db = CountryDb::from_raw(raw).expect("normalize");
    for dialect in Dialect::ALL {
        let opts = RenderOptions {
            dialect,
            generated_on: None,
        };
        group.bench_with_input(BenchmarkId::from_parameter(dialect), &opts, |b, opts| {
            b.iter(|| render_scripts(black_box(&db), opts));
        });
    }
    group.finish();
}

fn bench_annotate(c: &mut Criterion) {
    let records = synthetic_records(250);
    c.bench_function("annotate_records", |b| {
        b.iter(|| {
            let mut batch = records.clone();
            annotate_records(black_box(&mut batch)).expect("annotate")
        });
    });
}

criterion_group!(benches, bench_normalize, bench_render, bench_annotate);
criterion_main!(benches);
