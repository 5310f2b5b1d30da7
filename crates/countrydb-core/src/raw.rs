// crates/countrydb-core/src/raw.rs
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Treats an explicit JSON `null` exactly like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `name` sub-object of a country record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CountryNameRaw {
    #[serde(deserialize_with = "null_as_default")]
    pub common: String,
    #[serde(deserialize_with = "null_as_default")]
    pub official: String,
}

/// Raw country structure as it comes from `countries.json`.
///
/// NOTE: This type mirrors the external mledoze/countries dataset. Only the
/// fields the exporter reads are declared; everything else is ignored.
/// Missing and `null` fields fall back to the empty value of their type, so
/// call sites never deal with absence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CountryRaw {
    #[serde(deserialize_with = "null_as_default")]
    pub name: CountryNameRaw,
    #[serde(deserialize_with = "null_as_default")]
    pub cca2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cca3: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ccn3: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cioc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub independent: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub un_member: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub un_regional_group: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subregion: String,
    #[serde(deserialize_with = "null_as_default")]
    pub capital: Vec<String>,
    /// `[lat, lng]`, numbers or strings.
    #[serde(deserialize_with = "null_as_default")]
    pub latlng: Vec<Coordinate>,
    #[serde(deserialize_with = "null_as_default")]
    pub landlocked: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub borders: Vec<String>,
    /// Square kilometres. `None` when absent or `null`.
    pub area: Option<Number>,
    #[serde(deserialize_with = "null_as_default")]
    pub tld: Vec<String>,
    /// `{ "EUR": { "name": "Euro", "symbol": "€" } }`, input key order kept.
    #[serde(deserialize_with = "null_as_default")]
    pub currencies: Map<String, Value>,
    /// `{ "deu": "German" }`, input key order kept.
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Map<String, Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub alt_spellings: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub flag: String,
}

pub type CountriesRaw = Vec<CountryRaw>;

/// One `latlng` item. Numbers print exactly as parsed, strings as given.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(Number),
    Text(String),
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Number(n) => write!(f, "{n}"),
            Coordinate::Text(s) => f.write_str(s),
        }
    }
}

impl CountryRaw {
    /// Area with the dataset's "missing means zero" rule applied.
    pub fn area_or_zero(&self) -> Number {
        match &self.area {
            Some(n) if n.as_f64().is_some_and(|v| v != 0.0) => n.clone(),
            _ => Number::from(0u8),
        }
    }
}
