use serde::Serialize;

use crate::core::StatTotals;
use crate::error::{Result, StatEngineError};
use crate::ranking::NameCandidate;
use crate::stats::{derive, round2, DerivedStats, StatKey};

use super::{PlayerSummary, Query};

/// Season per-game line for one player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub player: PlayerSummary,
    pub season: u16,
    /// Name-match similarity 0-100
    pub score: f64,
    pub stats: DerivedStats,
    /// Stats relevant to the player's position, fantasy PPG last
    pub featured: Vec<StatKey>,
}

impl PlayerStats {
    /// Featured stats paired with their values
    pub fn featured_values(&self) -> Vec<(StatKey, f64)> {
        self.featured
            .iter()
            .map(|&key| (key, self.stats.get(key)))
            .collect()
    }
}

/// One player's raw line for a single week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSnapshot {
    pub player: PlayerSummary,
    pub season: u16,
    pub week: u32,
    pub score: f64,
    pub opponent: String,
    pub totals: StatTotals,
    /// PPR points, rounded to two decimals
    pub fantasy_points: f64,
}

impl<'a> Query<'a> {
    /// Per-game season stats for a fuzzy-matched player
    pub fn season_stats(&self, input: &str) -> Result<PlayerStats> {
        let (matched, record) = self.resolve_season(input)?;
        let stats = derive(record, self.options.min_games)?;

        let mut featured = record.position.featured_stats().to_vec();
        featured.push(StatKey::FantasyPpg);

        Ok(PlayerStats {
            player: PlayerSummary::from_match(&matched, &record.position),
            season: record.season,
            score: matched.score,
            stats,
            featured,
        })
    }

    /// A player's totals for one week of the query season.
    ///
    /// Names are matched against everyone who appears in the weekly table,
    /// not only players with a row for `week`.
    pub fn week_stats(&self, input: &str, week: u32) -> Result<WeekSnapshot> {
        let rows = self.snapshot.weeks()?.for_season(self.options.season);
        let matched = self
            .resolver
            .resolve(input, &NameCandidate::from_weeks(rows.iter().copied()))?;

        let record = rows
            .into_iter()
            .find(|r| r.player_id == matched.player_id && r.week == week)
            .ok_or_else(|| StatEngineError::NoWeekData {
                player: matched.name.clone(),
                week,
            })?;

        Ok(WeekSnapshot {
            player: PlayerSummary::from_match(&matched, &record.position),
            season: record.season,
            week,
            score: matched.score,
            opponent: record.opponent.clone(),
            totals: record.totals,
            fantasy_points: round2(record.totals.fantasy_points_ppr),
        })
    }
}
