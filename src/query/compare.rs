use serde::Serialize;
use std::collections::HashSet;

use crate::core::SeasonRecord;
use crate::error::{Result, Side, StatEngineError};
use crate::ranking::NameMatch;
use crate::stats::{derive, DerivedStats, StatKey};

use super::{PlayerSummary, Query};

/// Block of stats shown in a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatGroup {
    /// Shown when either player is a QB
    Passing,
    /// Shown when either player is an RB, WR or TE
    Skill,
}

impl StatGroup {
    pub fn keys(self) -> &'static [StatKey] {
        match self {
            StatGroup::Passing => &[
                StatKey::PassingYpg,
                StatKey::RushingYpg,
                StatKey::PassingTdPerGame,
            ],
            StatGroup::Skill => &[
                StatKey::ReceivingYpg,
                StatKey::ReceptionsPerGame,
                StatKey::RushingYpg,
                StatKey::TotalTdPerGame,
            ],
        }
    }
}

/// Higher fantasy points per game wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    First,
    Second,
    Tie,
}

impl Winner {
    pub fn decide(first_fppg: f64, second_fppg: f64) -> Self {
        if first_fppg > second_fppg {
            Winner::First
        } else if second_fppg > first_fppg {
            Winner::Second
        } else {
            Winner::Tie
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparedPlayer {
    pub player: PlayerSummary,
    pub score: f64,
    pub stats: DerivedStats,
}

/// Side-by-side season comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub first: ComparedPlayer,
    pub second: ComparedPlayer,
    pub groups: Vec<StatGroup>,
    pub winner: Winner,
}

impl Comparison {
    /// Winning player's name, or `Tie`
    pub fn winner_name(&self) -> &str {
        match self.winner {
            Winner::First => &self.first.player.name,
            Winner::Second => &self.second.player.name,
            Winner::Tie => "Tie",
        }
    }

    /// `(stat, first, second)` for every displayed group, fantasy PPG last.
    ///
    /// A key shared by two groups appears once, at its first position.
    pub fn rows(&self) -> Vec<(StatKey, f64, f64)> {
        let mut seen = HashSet::new();
        self.groups
            .iter()
            .flat_map(|g| g.keys().iter().copied())
            .chain(std::iter::once(StatKey::FantasyPpg))
            .filter(|key| seen.insert(*key))
            .map(|key| (key, self.first.stats.get(key), self.second.stats.get(key)))
            .collect()
    }
}

impl<'a> Query<'a> {
    /// Compare two players' per-game season stats.
    ///
    /// Both names are resolved before either player's games are checked,
    /// and errors name the side they refer to.
    pub fn compare(&self, first: &str, second: &str) -> Result<Comparison> {
        let first_match = self.resolve_side(first, Side::First)?;
        let second_match = self.resolve_side(second, Side::Second)?;

        let first = self.derive_side(first_match, Side::First)?;
        let second = self.derive_side(second_match, Side::Second)?;

        let positions = [&first.player.position, &second.player.position];
        let mut groups = Vec::new();
        if positions.iter().any(|p| p.is_quarterback()) {
            groups.push(StatGroup::Passing);
        }
        if positions.iter().any(|p| p.is_skill()) {
            groups.push(StatGroup::Skill);
        }

        let winner = Winner::decide(first.stats.fantasy_ppg, second.stats.fantasy_ppg);

        Ok(Comparison {
            first,
            second,
            groups,
            winner,
        })
    }

    fn resolve_side(&self, input: &str, side: Side) -> Result<(NameMatch, &'a SeasonRecord)> {
        self.resolve_season(input).map_err(|e| match e {
            StatEngineError::NotFound { input } => StatEngineError::PlayerNotFound { side, input },
            other => other,
        })
    }

    fn derive_side(
        &self,
        (matched, record): (NameMatch, &'a SeasonRecord),
        side: Side,
    ) -> Result<ComparedPlayer> {
        let stats = derive(record, self.options.min_games).map_err(|e| match e {
            StatEngineError::InsufficientGames {
                player,
                games,
                required,
            } => StatEngineError::PlayerInsufficientGames {
                side,
                player,
                games,
                required,
            },
            other => other,
        })?;

        Ok(ComparedPlayer {
            player: PlayerSummary::from_match(&matched, &record.position),
            score: matched.score,
            stats,
        })
    }
}
