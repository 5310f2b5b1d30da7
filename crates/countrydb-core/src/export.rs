// crates/countrydb-core/src/export.rs

//! # Relational Exporter
//!
//! Load, normalize, render, write. Every output is rendered in memory
//! before the first file is touched, so a bad record never leaves a
//! half-generated directory behind.

use crate::common::DbStats;
use crate::error::{CountryDbError, Result};
use crate::loader::{load_countries, write_atomic, DATA_SOURCE_URL};
use crate::model::CountryDb;
use crate::sql::{render_scripts, Dialect, RenderOptions};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// File name of the optional JSON report.
pub const SUMMARY_FILE: &str = "countries_summary.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub dialect: Dialect,
    /// Stamped into every file header when set.
    pub generated_on: Option<NaiveDateTime>,
    /// Also write [`SUMMARY_FILE`].
    pub write_summary: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("countries.json"),
            output_dir: PathBuf::from("SQLs"),
            dialect: Dialect::default(),
            generated_on: None,
            write_summary: false,
        }
    }
}

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub stats: DbStats,
    /// Written files, in generation order.
    pub files: Vec<PathBuf>,
    /// `(region name, country count)` sorted by name.
    pub countries_by_region: Vec<(String, usize)>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_countries: usize,
    pub total_regions: usize,
    pub total_subregions: usize,
    pub regions: Vec<RegionSummary>,
    pub subregions: Vec<SubregionSummary>,
    pub countries_by_region: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize)]
pub struct RegionSummary {
    pub id: u32,
    pub name: String,
    pub countries: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubregionSummary {
    pub id: u32,
    pub name: String,
    pub region_id: u32,
    pub region_name: String,
}

impl Summary {
    pub fn from_db(db: &CountryDb) -> Self {
        let regions: Vec<RegionSummary> = db
            .regions
            .iter()
            .map(|r| RegionSummary {
                id: r.id,
                name: r.name.clone(),
                countries: db.countries_in_region(r.id).count(),
            })
            .collect();

        let subregions = db
            .subregions
            .iter()
            .map(|s| SubregionSummary {
                id: s.id,
                name: s.name.clone(),
                region_id: s.region_id,
                region_name: db
                    .region(s.region_id)
                    .map(|r| r.name.clone())
                    .unwrap_or_default(),
            })
            .collect();

        let countries_by_region = regions
            .iter()
            .map(|r| (r.name.clone(), r.countries))
            .collect();

        let stats = db.stats();
        Summary {
            total_countries: stats.countries,
            total_regions: stats.regions,
            total_subregions: stats.subregions,
            regions,
            subregions,
            countries_by_region,
        }
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        let mut text =
            serde_json::to_string_pretty(self).map_err(|source| CountryDbError::Serialize {
                what: "summary report",
                source,
            })?;
        text.push('\n');
        Ok(text)
    }
}

/// Runs the whole export described by `config`.
pub fn export(config: &ExportConfig) -> Result<ExportReport> {
    if !config.input.exists() {
        return Err(CountryDbError::InputNotFound {
            path: config.input.clone(),
            url: DATA_SOURCE_URL,
        });
    }

    info!(input = %config.input.display(), dialect = %config.dialect, "exporting");
    let raw = load_countries(&config.input)?;
    let db = CountryDb::from_raw(raw)?;

    let opts = RenderOptions {
        dialect: config.dialect,
        generated_on: config.generated_on,
    };
    let mut outputs: Vec<(PathBuf, String)> = render_scripts(&db, &opts)
        .into_iter()
        .map(|script| (config.output_dir.join(script.file_name()), script.contents))
        .collect();

    let summary = Summary::from_db(&db);
    if config.write_summary {
        outputs.push((config.output_dir.join(SUMMARY_FILE), summary.to_pretty_json()?));
    }

    let mut files = Vec::with_capacity(outputs.len());
    for (path, contents) in outputs {
        write_atomic(&path, contents.as_bytes())?;
        debug!(file = %path.display(), bytes = contents.len(), "written");
        files.push(path);
    }

    info!(
        files = files.len(),
        output_dir = %config.output_dir.display(),
        "export complete"
    );
    Ok(ExportReport {
        stats: db.stats(),
        files,
        countries_by_region: summary.countries_by_region.into_iter().collect(),
    })
}
