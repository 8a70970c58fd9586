use serde::Serialize;

use crate::core::{PlayerId, SeasonRecord};
use crate::error::{Result, StatEngineError};
use crate::stats::{per_game, StatKey};

use super::Query;

/// One qualifying player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterRow {
    pub player_id: PlayerId,
    pub name: String,
    /// Per-game value, rounded to two decimals
    pub value: f64,
    pub games: u32,
}

/// Ranked players at a position meeting a per-game threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterResult {
    pub position: String,
    pub stat: StatKey,
    pub threshold: f64,
    /// Highest value first, at most `max_filter_results` rows
    pub rows: Vec<FilterRow>,
    /// Number of players that qualified before truncation
    pub total_matches: usize,
    /// More players qualified than `rows` holds
    pub truncated: bool,
}

impl<'a> Query<'a> {
    /// Position + games + threshold filter over the query season.
    ///
    /// Steps run in a fixed order: position (empty → no players), games
    /// floor, stat keyword (unrecognized → `UnknownStat`), threshold
    /// (empty → `NoMatch`), stable descending sort, truncation.
    pub fn filter_by_stat(&self, position: &str, stat: &str, threshold: f64) -> Result<FilterResult> {
        let position = position.trim().to_uppercase();

        let at_position: Vec<&SeasonRecord> = self
            .season_rows()?
            .into_iter()
            .filter(|r| r.name.is_some() && r.position.matches(&position))
            .collect();
        if at_position.is_empty() {
            return Err(StatEngineError::NoPlayersAtPosition { position });
        }

        let games_floor = self.options.min_games.max(1);
        let eligible = at_position.into_iter().filter(|r| r.games >= games_floor);

        let key: StatKey = stat.parse()?;

        let mut rows: Vec<FilterRow> = eligible
            .filter_map(|r| {
                let value = per_game(key.total(&r.totals), r.games);
                (value >= threshold).then(|| FilterRow {
                    player_id: r.player_id.clone(),
                    name: r.display_name().to_string(),
                    value,
                    games: r.games,
                })
            })
            .collect();

        if rows.is_empty() {
            return Err(StatEngineError::NoMatch {
                position,
                stat: stat.to_string(),
                threshold,
            });
        }

        // Stable: equal values keep population order
        rows.sort_by(|a, b| b.value.total_cmp(&a.value));

        let total_matches = rows.len();
        let truncated = total_matches > self.options.max_filter_results;
        rows.truncate(self.options.max_filter_results);

        tracing::debug!(
            "filter {} {} >= {}: {} matches, {} shown",
            position,
            key,
            threshold,
            total_matches,
            rows.len()
        );

        Ok(FilterResult {
            position,
            stat: key,
            threshold,
            rows,
            total_matches,
            truncated,
        })
    }
}
