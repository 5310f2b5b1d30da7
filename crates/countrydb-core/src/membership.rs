// crates/countrydb-core/src/membership.rs

//! # Supranational membership
//!
//! Static EU / EFTA / EEA membership tables keyed by ISO 3166-1 alpha-3
//! code, and the annotator that stamps `euMember`, `eftaMember` and
//! `eeaMember` onto every record of the dataset.
//!
//! The tables are maintained by hand. EEA is derived once from EU plus the
//! three EFTA states that joined the EEA agreement (Switzerland did not).

use crate::common::MembershipCounts;
use crate::error::{CountryDbError, Result};
use crate::loader::{load_records, write_atomic};
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// EU member states (27 since 2020-02-01).
pub const EU_MEMBERS: [&str; 27] = [
    "AUT", "BEL", "BGR", "HRV", "CYP", "CZE", "DNK", "EST", "FIN", "FRA", "DEU", "GRC", "HUN",
    "IRL", "ITA", "LVA", "LTU", "LUX", "MLT", "NLD", "POL", "PRT", "ROU", "SVK", "SVN", "ESP",
    "SWE",
];

/// EFTA member states.
pub const EFTA_MEMBERS: [&str; 4] = ["ISL", "LIE", "NOR", "CHE"];

/// EFTA states that are also party to the EEA agreement.
pub const EEA_EFTA_MEMBERS: [&str; 3] = ["ISL", "LIE", "NOR"];

static EU: Lazy<BTreeSet<&'static str>> = Lazy::new(|| EU_MEMBERS.into_iter().collect());
static EFTA: Lazy<BTreeSet<&'static str>> = Lazy::new(|| EFTA_MEMBERS.into_iter().collect());
static EEA: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    EU_MEMBERS
        .into_iter()
        .chain(EEA_EFTA_MEMBERS)
        .collect()
});

/// A supranational grouping with a fixed membership table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bloc {
    Eu,
    Efta,
    Eea,
}

impl Bloc {
    pub const ALL: [Bloc; 3] = [Bloc::Eu, Bloc::Efta, Bloc::Eea];

    /// The alpha-3 codes of all members.
    pub fn members(self) -> &'static BTreeSet<&'static str> {
        match self {
            Bloc::Eu => Lazy::force(&EU),
            Bloc::Efta => Lazy::force(&EFTA),
            Bloc::Eea => Lazy::force(&EEA),
        }
    }

    /// Membership test; empty codes are never members.
    pub fn contains(self, cca3: &str) -> bool {
        !cca3.is_empty() && self.members().contains(cca3)
    }

    /// Field name written into annotated records.
    pub fn json_key(self) -> &'static str {
        match self {
            Bloc::Eu => "euMember",
            Bloc::Efta => "eftaMember",
            Bloc::Eea => "eeaMember",
        }
    }
}

/// The three membership flags of one country.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub eu_member: bool,
    pub efta_member: bool,
    pub eea_member: bool,
}

impl Membership {
    pub fn of(cca3: &str) -> Self {
        Self {
            eu_member: Bloc::Eu.contains(cca3),
            efta_member: Bloc::Efta.contains(cca3),
            eea_member: Bloc::Eea.contains(cca3),
        }
    }

    pub fn get(&self, bloc: Bloc) -> bool {
        match bloc {
            Bloc::Eu => self.eu_member,
            Bloc::Efta => self.efta_member,
            Bloc::Eea => self.eea_member,
        }
    }
}

/// Paths used by [`annotate`]. Defaults match the dataset repository layout.
#[derive(Debug, Clone)]
pub struct AnnotateConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// One-time verbatim copy of `input`; `None` disables the backup.
    pub backup: Option<PathBuf>,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/countries.json"),
            output: PathBuf::from("data/countries_amended.json"),
            backup: Some(PathBuf::from("data/countries_original.json")),
        }
    }
}

/// Adds the three flags to one record, overwriting them if already present.
pub fn annotate_record(record: &mut Map<String, Value>) -> Membership {
    let cca3 = record.get("cca3").and_then(Value::as_str).unwrap_or("");
    let membership = Membership::of(cca3);
    for bloc in Bloc::ALL {
        record.insert(bloc.json_key().to_owned(), Value::Bool(membership.get(bloc)));
    }
    membership
}

/// Annotates every record in place and tallies the flags.
///
/// Every element must be a JSON object.
pub fn annotate_records(records: &mut [Value]) -> Result<MembershipCounts> {
    let mut counts = MembershipCounts::default();
    for (index, record) in records.iter_mut().enumerate() {
        let Value::Object(map) = record else {
            return Err(CountryDbError::FieldShape {
                index,
                source: serde::de::Error::custom("record is not an object"),
            });
        };
        counts.add(annotate_record(map));
    }
    Ok(counts)
}

/// Copies `input` to `backup` unless the backup already exists.
///
/// Returns `true` when a copy was made. A missing `input` is not an error
/// here; the subsequent load reports it.
pub fn ensure_backup(input: &Path, backup: &Path) -> Result<bool> {
    if backup.exists() || !input.exists() {
        return Ok(false);
    }
    if let Some(parent) = backup.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::copy(input, backup)?;
    info!(backup = %backup.display(), "created backup of original dataset");
    Ok(true)
}

/// Renders records the way the annotated file is stored: 4-space indent,
/// UTF-8 kept as-is, trailing newline.
pub fn to_pretty_json(records: &[Value]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .map_err(|source| CountryDbError::Serialize {
            what: "annotated dataset",
            source,
        })?;
    buf.push(b'\n');
    Ok(buf)
}

/// Runs the membership annotator: backup, load, flag, write.
pub fn annotate(config: &AnnotateConfig) -> Result<MembershipCounts> {
    if let Some(backup) = &config.backup {
        ensure_backup(&config.input, backup)?;
    }

    let mut records = load_records(&config.input)?;
    let counts = annotate_records(&mut records)?;
    write_atomic(&config.output, &to_pretty_json(&records)?)?;

    info!(
        output = %config.output.display(),
        countries = records.len(),
        eu = counts.eu,
        efta = counts.efta,
        eea = counts.eea,
        "membership fields added"
    );
    Ok(counts)
}
