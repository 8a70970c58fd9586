//! Read-only queries over one snapshot.
//!
//! A [`Query`] borrows a single snapshot for its whole lifetime, so every
//! lookup it performs sees the same load cycle.

pub mod availability;
pub mod compare;
pub mod filter;
pub mod player;
pub mod roster;

use serde::Serialize;

use crate::config::EngineOptions;
use crate::core::{PlayerId, Position, SeasonRecord};
use crate::error::{Result, StatEngineError};
use crate::ranking::{NameCandidate, NameMatch, NameResolver};
use crate::store::Snapshot;

pub use availability::{Availability, AvailabilityStatus};
pub use compare::{ComparedPlayer, Comparison, StatGroup, Winner};
pub use filter::{FilterResult, FilterRow};
pub use player::{PlayerStats, WeekSnapshot};
pub use roster::{Roster, RosterGroup, ROSTER_ORDER};

/// Name pool a lookup matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Seasons,
    Weeks,
}

/// Identity of a resolved player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub player_id: PlayerId,
    pub name: String,
    pub position: Position,
}

pub struct Query<'a> {
    snapshot: &'a Snapshot,
    resolver: &'a NameResolver,
    options: &'a EngineOptions,
}

impl<'a> Query<'a> {
    pub fn new(snapshot: &'a Snapshot, resolver: &'a NameResolver, options: &'a EngineOptions) -> Self {
        Self {
            snapshot,
            resolver,
            options,
        }
    }

    /// Resolve a name against the season or week pool of the query season
    pub fn resolve(&self, input: &str, pool: Pool) -> Result<NameMatch> {
        let candidates = match pool {
            Pool::Seasons => NameCandidate::from_seasons(self.season_rows()?),
            Pool::Weeks => NameCandidate::from_weeks(
                self.snapshot.weeks()?.for_season(self.options.season),
            ),
        };
        self.resolver.resolve(input, &candidates)
    }

    /// Season records of the query season, in load order
    fn season_rows(&self) -> Result<Vec<&'a SeasonRecord>> {
        Ok(self.snapshot.seasons()?.for_season(self.options.season))
    }

    /// Resolves a name to its season record
    fn resolve_season(&self, input: &str) -> Result<(NameMatch, &'a SeasonRecord)> {
        let rows = self.season_rows()?;
        let matched = self
            .resolver
            .resolve(input, &NameCandidate::from_seasons(rows.iter().copied()))?;

        let record = rows
            .into_iter()
            .find(|r| r.player_id == matched.player_id)
            .ok_or_else(|| {
                StatEngineError::Other(format!("resolved player {} has no season row", matched.player_id))
            })?;
        Ok((matched, record))
    }
}

impl PlayerSummary {
    fn from_match(matched: &NameMatch, position: &Position) -> Self {
        Self {
            player_id: matched.player_id.clone(),
            name: matched.name.clone(),
            position: position.clone(),
        }
    }
}
