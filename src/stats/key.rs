use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::StatTotals;
use crate::error::StatEngineError;

/// Per-game quantity that can be derived from season totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    PassingYpg,
    RushingYpg,
    ReceivingYpg,
    ReceptionsPerGame,
    PassingTdPerGame,
    /// Rushing plus receiving touchdowns per game
    TotalTdPerGame,
    /// PPR fantasy points per game
    FantasyPpg,
}

impl StatKey {
    pub const ALL: [StatKey; 7] = [
        StatKey::PassingYpg,
        StatKey::RushingYpg,
        StatKey::ReceivingYpg,
        StatKey::ReceptionsPerGame,
        StatKey::PassingTdPerGame,
        StatKey::TotalTdPerGame,
        StatKey::FantasyPpg,
    ];

    /// Maps free-form user input to a stat key.
    ///
    /// Input is lower-cased and spaces become underscores, then keyword
    /// rules apply in order:
    /// - `ypg` / `yards_per_game` with `pass`, `rush`, or `rec`/`receiv`
    /// - `tdpg` / `td_per_game`: passing with `pass`, otherwise rushing + receiving
    /// - `fppg` / `fantasy`
    /// - `rec/g` / `receptions_per_game`
    ///
    /// Anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let stat = input.trim().to_lowercase().replace(' ', "_");

        if stat.contains("ypg") || stat.contains("yards_per_game") {
            if stat.contains("pass") {
                Some(StatKey::PassingYpg)
            } else if stat.contains("rush") {
                Some(StatKey::RushingYpg)
            } else if stat.contains("rec") || stat.contains("receiv") {
                Some(StatKey::ReceivingYpg)
            } else {
                None
            }
        } else if stat.contains("tdpg") || stat.contains("td_per_game") {
            if stat.contains("pass") {
                Some(StatKey::PassingTdPerGame)
            } else {
                Some(StatKey::TotalTdPerGame)
            }
        } else if stat.contains("fppg") || stat.contains("fantasy") {
            Some(StatKey::FantasyPpg)
        } else if stat.contains("rec/g") || stat.contains("receptions_per_game") {
            Some(StatKey::ReceptionsPerGame)
        } else {
            None
        }
    }

    /// Cumulative total this key divides by games played
    pub fn total(self, totals: &StatTotals) -> f64 {
        match self {
            StatKey::PassingYpg => totals.passing_yards,
            StatKey::RushingYpg => totals.rushing_yards,
            StatKey::ReceivingYpg => totals.receiving_yards,
            StatKey::ReceptionsPerGame => totals.receptions,
            StatKey::PassingTdPerGame => totals.passing_tds,
            StatKey::TotalTdPerGame => totals.scrimmage_tds(),
            StatKey::FantasyPpg => totals.fantasy_points_ppr,
        }
    }

    /// Canonical keyword; `parse` maps it back to the same key
    pub fn as_str(self) -> &'static str {
        match self {
            StatKey::PassingYpg => "passing_ypg",
            StatKey::RushingYpg => "rushing_ypg",
            StatKey::ReceivingYpg => "receiving_ypg",
            StatKey::ReceptionsPerGame => "rec/g",
            StatKey::PassingTdPerGame => "pass_tdpg",
            StatKey::TotalTdPerGame => "tdpg",
            StatKey::FantasyPpg => "fppg",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            StatKey::PassingYpg => "Passing YPG",
            StatKey::RushingYpg => "Rushing YPG",
            StatKey::ReceivingYpg => "Receiving YPG",
            StatKey::ReceptionsPerGame => "Receptions/G",
            StatKey::PassingTdPerGame => "Pass TD/G",
            StatKey::TotalTdPerGame => "Total TD/G",
            StatKey::FantasyPpg => "Fantasy PPG (PPR)",
        }
    }
}

impl FromStr for StatKey {
    type Err = StatEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatKey::parse(s).ok_or_else(|| StatEngineError::UnknownStat {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
