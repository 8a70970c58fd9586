use serde::Serialize;

use crate::error::Result;

use super::{PlayerSummary, Query};

/// How much of the regular season a player was available for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    FullSeason,
    /// 14 or more games
    MostlyAvailable,
    /// 10 to 13 games
    SignificantTimeMissed,
    /// 6 to 9 games
    MajorAvailabilityIssues,
    /// Fewer than 6 games
    LongTermAbsence,
}

impl AvailabilityStatus {
    pub fn classify(games_played: u32, season_games: u32) -> Self {
        match games_played {
            g if g >= season_games => AvailabilityStatus::FullSeason,
            g if g >= 14 => AvailabilityStatus::MostlyAvailable,
            g if g >= 10 => AvailabilityStatus::SignificantTimeMissed,
            g if g >= 6 => AvailabilityStatus::MajorAvailabilityIssues,
            _ => AvailabilityStatus::LongTermAbsence,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AvailabilityStatus::FullSeason => "played the full season",
            AvailabilityStatus::MostlyAvailable => "mostly available",
            AvailabilityStatus::SignificantTimeMissed => "significant time missed",
            AvailabilityStatus::MajorAvailabilityIssues => "major availability issues",
            AvailabilityStatus::LongTermAbsence => "season-ending or long-term injury",
        }
    }
}

/// Games-played report for one season
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Availability {
    pub player: PlayerSummary,
    pub season: u16,
    pub score: f64,
    pub games_played: u32,
    pub season_games: u32,
    pub missed: u32,
    pub status: AvailabilityStatus,
}

impl<'a> Query<'a> {
    /// Historical availability; no games floor applies
    pub fn availability(&self, input: &str) -> Result<Availability> {
        let (matched, record) = self.resolve_season(input)?;
        let season_games = self.options.season_games;

        Ok(Availability {
            player: PlayerSummary::from_match(&matched, &record.position),
            season: record.season,
            score: matched.score,
            games_played: record.games,
            season_games,
            missed: season_games.saturating_sub(record.games),
            status: AvailabilityStatus::classify(record.games, season_games),
        })
    }
}
