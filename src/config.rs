use serde::{Deserialize, Serialize};

/// Minimum similarity (0-100) for a name to count as a match.
///
/// Business rule shared by every lookup, deliberately not configurable.
pub const MATCH_THRESHOLD: f64 = 60.0;

/// Query options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Games played below which per-game rates are not reported
    pub min_games: u32,
    /// Rows returned by a stat filter before truncation
    pub max_filter_results: usize,
    /// Regular-season length used by the availability report
    pub season_games: u32,
    /// Season to query; `None` means the latest season present in each table
    pub season: Option<u16>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            min_games: 6,
            max_filter_results: 15,
            season_games: 17,
            season: None,
        }
    }
}

impl EngineOptions {
    /// Defaults overlaid with `STATSNAP_*` environment variables.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            let raw = lookup(key)?;
            match raw.trim().parse::<T>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid {}={:?}", key, raw);
                    None
                }
            }
        }

        let defaults = Self::default();
        Self {
            min_games: parsed(&lookup, "STATSNAP_MIN_GAMES").unwrap_or(defaults.min_games),
            max_filter_results: parsed(&lookup, "STATSNAP_MAX_RESULTS")
                .unwrap_or(defaults.max_filter_results),
            season_games: parsed(&lookup, "STATSNAP_SEASON_GAMES")
                .unwrap_or(defaults.season_games),
            season: parsed(&lookup, "STATSNAP_SEASON").or(defaults.season),
        }
    }
}
