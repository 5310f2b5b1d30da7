// crates/countrydb-core/src/model/convert.rs
use crate::error::{CountryDbError, Result};
use crate::model::domain::{CountryDb, CountryRow, Region, Subregion};
use crate::raw::{CountriesRaw, CountryRaw};
use serde_json::{Map, Value};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;
use tracing::{info, warn};

/// Assigns dense 1-based IDs to the distinct non-empty names, in ordinal
/// (byte-wise) name order.
///
/// The result depends only on the *set* of names, never on input order or
/// multiplicity.
pub fn assign_ids<'a, I>(names: I) -> BTreeMap<String, u32>
where
    I: IntoIterator<Item = &'a str>,
{
    let distinct: BTreeSet<&str> = names.into_iter().filter(|n| !n.is_empty()).collect();
    distinct
        .into_iter()
        .zip(1u32..)
        .map(|(name, id)| (name.to_owned(), id))
        .collect()
}

/// Maps each subregion to the one region it appears under.
///
/// Records with an empty region or subregion contribute nothing. A subregion
/// seen under two regions is an error.
pub fn subregion_owners(raw: &[CountryRaw]) -> Result<BTreeMap<&str, &str>> {
    let mut owners = BTreeMap::new();
    for c in raw {
        if c.region.is_empty() || c.subregion.is_empty() {
            continue;
        }
        match owners.entry(c.subregion.as_str()) {
            Entry::Vacant(slot) => {
                slot.insert(c.region.as_str());
            }
            Entry::Occupied(slot) if *slot.get() != c.region => {
                return Err(CountryDbError::AmbiguousSubregion {
                    subregion: c.subregion.clone(),
                    first: (*slot.get()).to_owned(),
                    second: c.region.clone(),
                });
            }
            Entry::Occupied(_) => {}
        }
    }
    Ok(owners)
}

/// `["Alpha", "Beta"]` -> `"Alpha, Beta"`; empty list -> `""`.
pub fn join_list<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compact JSON text for a non-empty map, `None` for an empty one.
pub fn json_text(map: &Map<String, Value>) -> Result<Option<String>> {
    if map.is_empty() {
        return Ok(None);
    }
    serde_json::to_string(map)
        .map(Some)
        .map_err(|source| CountryDbError::Serialize {
            what: "nested country field",
            source,
        })
}

impl CountryDb {
    /// **Standard Converter:** Raw -> Normalized.
    ///
    /// Runs the ID-assignment steps in their required order: regions first,
    /// then subregions (which reference region IDs), then countries (which
    /// reference both).
    pub fn from_raw(raw: CountriesRaw) -> Result<Self> {
        // 1. Regions
        let region_ids = assign_ids(raw.iter().map(|c| c.region.as_str()));

        // 2. Subregions
        let owners = subregion_owners(&raw)?;
        let subregion_ids = assign_ids(owners.keys().copied());

        let orphans: BTreeSet<&str> = raw
            .iter()
            .map(|c| c.subregion.as_str())
            .filter(|s| !s.is_empty() && !owners.contains_key(s))
            .collect();
        for name in orphans {
            warn!(subregion = name, "subregion has no region; countries will reference NULL");
        }

        let regions: Vec<Region> = region_ids
            .iter()
            .map(|(name, &id)| Region {
                id,
                name: name.clone(),
            })
            .collect();

        let subregions: Vec<Subregion> = subregion_ids
            .iter()
            .filter_map(|(name, &id)| {
                let region_id = owners
                    .get(name.as_str())
                    .and_then(|region| region_ids.get(*region))?;
                Some(Subregion {
                    id,
                    name: name.clone(),
                    region_id: *region_id,
                })
            })
            .collect();

        // 3. Countries: by common name, ties by input position
        let mut order: Vec<usize> = (0..raw.len()).collect();
        order.sort_by(|&a, &b| {
            raw[a]
                .name
                .common
                .cmp(&raw[b].name.common)
                .then(a.cmp(&b))
        });

        let countries = order
            .into_iter()
            .zip(1u32..)
            .map(|(index, id)| {
                let c = &raw[index];
                Ok(CountryRow {
                    id,
                    common_name: c.name.common.clone(),
                    official_name: c.name.official.clone(),
                    cca2: c.cca2.clone(),
                    cca3: c.cca3.clone(),
                    ccn3: c.ccn3.clone(),
                    cioc: c.cioc.clone(),
                    independent: c.independent,
                    status: c.status.clone(),
                    un_member: c.un_member,
                    un_regional_group: c.un_regional_group.clone(),
                    region_id: region_ids.get(&c.region).copied(),
                    subregion_id: subregion_ids.get(&c.subregion).copied(),
                    capital: join_list(&c.capital),
                    latlng: join_list(&c.latlng),
                    landlocked: c.landlocked,
                    borders: join_list(&c.borders),
                    area: c.area_or_zero(),
                    tld: join_list(&c.tld),
                    currencies: json_text(&c.currencies)?,
                    languages: json_text(&c.languages)?,
                    alt_spellings: join_list(&c.alt_spellings),
                    flag_emoji: c.flag.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let db = CountryDb {
            regions,
            subregions,
            countries,
        };
        let stats = db.stats();
        info!(
            countries = stats.countries,
            regions = stats.regions,
            subregions = stats.subregions,
            "dataset normalized"
        );
        Ok(db)
    }
}
