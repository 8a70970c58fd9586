pub mod indel;
pub mod resolver;

use serde::Serialize;
use std::collections::HashSet;

use crate::core::{PlayerId, SeasonRecord, WeekRecord};
use crate::error::Result;

pub use indel::IndelRanker;
pub use resolver::{NameMatch, NameResolver};

/// Trait for fuzzy name scoring implementations
pub trait Ranker: Send + Sync {
    /// Score every candidate against the query (0-100), highest first
    fn rank(&self, query: &str, candidates: &[NameCandidate]) -> Result<Vec<RankedCandidate>>;

    /// Get ranker name for logging
    fn name(&self) -> &str;
}

/// Candidate index into the pool with its similarity score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate {
    pub index: usize,
    pub score: f64,
}

impl RankedCandidate {
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }
}

/// One entry of a name pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCandidate {
    pub player_id: PlayerId,
    pub name: String,
}

impl NameCandidate {
    pub fn new(player_id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            name: name.into(),
        }
    }

    /// Pool of one entry per season record, nameless records excluded
    pub fn from_seasons<'a>(records: impl IntoIterator<Item = &'a SeasonRecord>) -> Vec<Self> {
        records
            .into_iter()
            .filter_map(|r| Self::named(&r.player_id, r.name.as_deref()))
            .collect()
    }

    /// Pool of one entry per distinct player in the week records
    pub fn from_weeks<'a>(records: impl IntoIterator<Item = &'a WeekRecord>) -> Vec<Self> {
        let mut seen = HashSet::new();
        records
            .into_iter()
            .filter(|r| seen.insert(r.player_id.clone()))
            .filter_map(|r| Self::named(&r.player_id, r.name.as_deref()))
            .collect()
    }

    fn named(player_id: &PlayerId, name: Option<&str>) -> Option<Self> {
        let name = name.map(str::trim).filter(|n| !n.is_empty())?;
        Some(Self::new(player_id.clone(), name))
    }
}
