// crates/countrydb-core/src/prelude.rs
pub use crate::error::{CountryDbError, Result};
pub use crate::export::{export, ExportConfig, ExportReport, Summary};
pub use crate::loader::{load_countries, load_records, DATA_SOURCE_URL};
pub use crate::membership::{annotate, annotate_records, AnnotateConfig, Bloc, Membership};
pub use crate::model::{CountryDb, CountryRow, Region, Subregion};
pub use crate::sql::{render_scripts, Dialect, RenderOptions, ScriptKind, SqlScript};
pub use crate::{DbStats, MembershipCounts};

#[cfg(feature = "fetch")]
pub use crate::fetch::fetch_dataset;
