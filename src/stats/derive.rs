use serde::{Deserialize, Serialize};

use crate::core::{SeasonRecord, StatTotals};
use crate::error::{Result, StatEngineError};
use crate::stats::StatKey;

/// Rounds half-up to two decimals.
///
/// The small bias absorbs binary representation error so that values
/// like `x.xx5` computed by division still round up.
pub fn round2(value: f64) -> f64 {
    ((value * 100.0) + 0.5 + 1e-6).floor() / 100.0
}

/// Per-game rate of a cumulative total, rounded to two decimals.
///
/// Callers guarantee `games > 0`.
pub fn per_game(total: f64, games: u32) -> f64 {
    round2(total / f64::from(games))
}

/// Per-game rates for one player-season
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub games: u32,
    pub passing_ypg: f64,
    pub rushing_ypg: f64,
    pub receiving_ypg: f64,
    pub receptions_pg: f64,
    pub pass_td_pg: f64,
    pub total_td_pg: f64,
    pub fantasy_ppg: f64,
}

impl DerivedStats {
    /// Each rate is rounded on its own, never from another rounded rate
    fn from_totals(totals: &StatTotals, games: u32) -> Self {
        let rate = |key: StatKey| per_game(key.total(totals), games);
        Self {
            games,
            passing_ypg: rate(StatKey::PassingYpg),
            rushing_ypg: rate(StatKey::RushingYpg),
            receiving_ypg: rate(StatKey::ReceivingYpg),
            receptions_pg: rate(StatKey::ReceptionsPerGame),
            pass_td_pg: rate(StatKey::PassingTdPerGame),
            total_td_pg: rate(StatKey::TotalTdPerGame),
            fantasy_ppg: rate(StatKey::FantasyPpg),
        }
    }

    pub fn get(&self, key: StatKey) -> f64 {
        match key {
            StatKey::PassingYpg => self.passing_ypg,
            StatKey::RushingYpg => self.rushing_ypg,
            StatKey::ReceivingYpg => self.receiving_ypg,
            StatKey::ReceptionsPerGame => self.receptions_pg,
            StatKey::PassingTdPerGame => self.pass_td_pg,
            StatKey::TotalTdPerGame => self.total_td_pg,
            StatKey::FantasyPpg => self.fantasy_ppg,
        }
    }
}

/// Converts season totals into per-game rates.
///
/// Returns `InsufficientGames` without dividing when the player has fewer
/// than `min_games` games. A `min_games` of zero is treated as one.
pub fn derive(record: &SeasonRecord, min_games: u32) -> Result<DerivedStats> {
    let required = min_games.max(1);
    if record.games < required {
        return Err(StatEngineError::InsufficientGames {
            player: record.display_name().to_string(),
            games: record.games,
            required: min_games,
        });
    }

    Ok(DerivedStats::from_totals(&record.totals, record.games))
}
