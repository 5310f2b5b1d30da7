use crate::membership::Membership;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a normalized database.
///
/// Returned by [`CountryDb::stats`](crate::model::CountryDb::stats); these
/// counts are the row counts of the three generated tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub regions: usize,
    pub subregions: usize,
    pub countries: usize,
}

/// Number of records flagged `true` for each bloc.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipCounts {
    pub eu: usize,
    pub efta: usize,
    pub eea: usize,
}

impl MembershipCounts {
    pub fn add(&mut self, m: Membership) {
        self.eu += usize::from(m.eu_member);
        self.efta += usize::from(m.efta_member);
        self.eea += usize::from(m.eea_member);
    }
}
