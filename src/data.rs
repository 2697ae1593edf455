// src/data.rs
//
// Rank records and the scope vocabulary they are keyed by.
//
// - Scope: breadth of a ranking, one per table row on the university page.
// - ScopeRank: what the page spec reads for one scope (no name, no year).
// - RankRecord: one output row; built by the collector, never mutated.

use std::fmt;

use crate::config::consts::COUNTRY_LABEL;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    World,
    Asia,
    Country,
    City,
}

impl Scope {
    pub fn label(&self) -> &'static str {
        match self {
            Scope::World => "World",
            Scope::Asia => "Asia",
            Scope::Country => COUNTRY_LABEL,
            Scope::City => "City",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScopeRank {
    pub scope: Scope,
    pub rank: Option<u32>,
    pub total_ranked: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankRecord {
    pub university: String,
    pub year: i32,
    pub scope: Scope,
    pub rank: Option<u32>,
    pub total_ranked: Option<u32>,
}

impl RankRecord {
    pub fn new(university: &str, year: i32, sr: ScopeRank) -> Self {
        Self {
            university: s!(university),
            year,
            scope: sr.scope,
            rank: sr.rank,
            total_ranked: sr.total_ranked,
        }
    }

    /// Cells in header order; absent values are empty strings.
    pub fn to_row(&self) -> Vec<String> {
        fn opt(v: Option<u32>) -> String {
            v.map(|n| n.to_string()).unwrap_or_default()
        }
        vec![
            self.university.clone(),
            self.year.to_string(),
            s!(self.scope.label()),
            opt(self.rank),
            opt(self.total_ranked),
        ]
    }
}
