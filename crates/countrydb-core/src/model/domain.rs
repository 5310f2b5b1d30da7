// crates/countrydb-core/src/model/domain.rs
use crate::common::DbStats;
use serde::Serialize;
use serde_json::Number;

/// The normalized database: three tables with surrogate keys.
///
/// All vectors are sorted by ID, and IDs are dense (`1..=len`).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CountryDb {
    /// Sorted by name; `id` is the 1-based rank.
    pub regions: Vec<Region>,
    /// Sorted by name; `id` is the 1-based rank.
    pub subregions: Vec<Subregion>,
    /// Sorted by common name, then input position.
    pub countries: Vec<CountryRow>,
}

/// A Region row (a continent in the dataset's terms).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Region {
    pub id: u32,
    pub name: String,
}

/// A Subregion row. Always owned by exactly one region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Subregion {
    pub id: u32,
    pub name: String,
    pub region_id: u32,
}

/// A Country row, ready to be rendered as an INSERT.
///
/// List-valued fields are already joined with `", "` and map-valued fields
/// already serialized to compact JSON. Empty strings stand for "absent".
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CountryRow {
    pub id: u32,
    pub common_name: String,
    pub official_name: String,
    pub cca2: String,
    pub cca3: String,
    pub ccn3: String,
    pub cioc: String,

    pub independent: bool,
    pub status: String,
    pub un_member: bool,
    pub un_regional_group: String,

    pub region_id: Option<u32>,
    pub subregion_id: Option<u32>,
    pub capital: String,
    pub latlng: String,
    pub landlocked: bool,
    pub borders: String,
    /// Square kilometres, `0` when the source had none.
    pub area: Number,

    pub tld: String,
    /// `None` when the source map was empty.
    pub currencies: Option<String>,
    /// `None` when the source map was empty.
    pub languages: Option<String>,
    pub alt_spellings: String,
    pub flag_emoji: String,
}

impl CountryDb {
    pub fn stats(&self) -> DbStats {
        DbStats {
            regions: self.regions.len(),
            subregions: self.subregions.len(),
            countries: self.countries.len(),
        }
    }

    pub fn region(&self, id: u32) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn subregion(&self, id: u32) -> Option<&Subregion> {
        self.subregions.iter().find(|s| s.id == id)
    }

    pub fn find_region_by_name(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Countries referencing the given region.
    pub fn countries_in_region(&self, region_id: u32) -> impl Iterator<Item = &CountryRow> {
        self.countries
            .iter()
            .filter(move |c| c.region_id == Some(region_id))
    }
}
