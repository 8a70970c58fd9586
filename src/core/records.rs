use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerId, Position};
use crate::core::raw::RawTotals;

/// Cumulative totals with missing values already defaulted to zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatTotals {
    pub passing_yards: f64,
    pub passing_tds: f64,
    pub rushing_yards: f64,
    pub rushing_tds: f64,
    pub receiving_yards: f64,
    pub receiving_tds: f64,
    pub receptions: f64,
    pub fantasy_points_ppr: f64,
}

impl StatTotals {
    /// Rushing plus receiving touchdowns
    pub fn scrimmage_tds(&self) -> f64 {
        self.rushing_tds + self.receiving_tds
    }
}

fn or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

impl From<&RawTotals> for StatTotals {
    fn from(raw: &RawTotals) -> Self {
        Self {
            passing_yards: or_zero(raw.passing_yards),
            passing_tds: or_zero(raw.passing_tds),
            rushing_yards: or_zero(raw.rushing_yards),
            rushing_tds: or_zero(raw.rushing_tds),
            receiving_yards: or_zero(raw.receiving_yards),
            receiving_tds: or_zero(raw.receiving_tds),
            receptions: or_zero(raw.receptions),
            fantasy_points_ppr: or_zero(raw.fantasy_points_ppr),
        }
    }
}

/// One player's regular-season totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub player_id: PlayerId,
    /// Canonical name from the ID crosswalk, if the player is in it
    pub name: Option<String>,
    pub position: Position,
    pub season: u16,
    pub games: u32,
    pub totals: StatTotals,
}

impl SeasonRecord {
    /// Name for messages; falls back to the raw ID
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.player_id.as_str())
    }
}

/// One player's totals for a single week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekRecord {
    pub player_id: PlayerId,
    pub name: Option<String>,
    pub position: Position,
    pub season: u16,
    pub week: u32,
    /// Opponent team code, `N/A` when absent
    pub opponent: String,
    pub totals: StatTotals,
}

/// Team membership for one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub season: u16,
    pub team: String,
    pub position: Position,
}
