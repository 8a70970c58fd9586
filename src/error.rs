use std::fmt;

use thiserror::Error;

/// Which side of a two-player comparison an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// Record collection a query depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    /// No snapshot has been installed yet
    Snapshot,
    Seasons,
    Weeks,
    Rosters,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dataset::Snapshot => f.write_str("player"),
            Dataset::Seasons => f.write_str("season"),
            Dataset::Weeks => f.write_str("weekly"),
            Dataset::Rosters => f.write_str("roster"),
        }
    }
}

/// Message category a presentation layer renders for an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InsufficientGames,
    UnknownStat,
    NoMatch,
    LoadError,
    NotLoaded,
}

/// Main error type for the stats engine
#[derive(Error, Debug)]
pub enum StatEngineError {
    /// No candidate name scored at or above the match threshold
    #[error("Could not find player: {input}")]
    NotFound { input: String },

    /// One side of a comparison could not be resolved
    #[error("Could not find {side} player: {input}")]
    PlayerNotFound { side: Side, input: String },

    /// Player resolved but played too few games for per-game rates
    #[error("{player} has only played {games} games (minimum {required} required)")]
    InsufficientGames {
        player: String,
        games: u32,
        required: u32,
    },

    /// One side of a comparison played too few games
    #[error("{player} ({side} player) has played fewer than {required} games ({games})")]
    PlayerInsufficientGames {
        side: Side,
        player: String,
        games: u32,
        required: u32,
    },

    /// Stat keyword not recognized
    #[error("Unknown stat: {input}. Try: passing_ypg, rushing_ypg, receiving_ypg, tdpg, fppg, rec/g")]
    UnknownStat { input: String },

    /// Nobody at the position met the threshold
    #[error("No {position} players with {stat} >= {threshold}")]
    NoMatch {
        position: String,
        stat: String,
        threshold: f64,
    },

    /// Position filter produced an empty population
    #[error("No players found for position: {position}")]
    NoPlayersAtPosition { position: String },

    /// Player resolved but has no row for the requested week
    #[error("No data found for {player} in week {week}")]
    NoWeekData { player: String, week: u32 },

    /// No roster rows for the team code
    #[error("No roster found for team: {team}")]
    TeamNotFound { team: String },

    /// Query issued before the collection it needs was loaded
    #[error("{0} data is still loading")]
    NotLoaded(Dataset),

    /// Required source missing or empty
    #[error("Load error: {0}")]
    Load(String),

    /// Duplicate-key or other structural violation in loaded tables
    #[error("Integrity violation: {0}")]
    Integrity(String),

    /// JSON decoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl StatEngineError {
    /// Category used by callers to pick the user-facing message
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. }
            | Self::PlayerNotFound { .. }
            | Self::NoWeekData { .. }
            | Self::TeamNotFound { .. } => ErrorKind::NotFound,
            Self::InsufficientGames { .. } | Self::PlayerInsufficientGames { .. } => {
                ErrorKind::InsufficientGames
            }
            Self::UnknownStat { .. } => ErrorKind::UnknownStat,
            Self::NoMatch { .. } | Self::NoPlayersAtPosition { .. } => ErrorKind::NoMatch,
            Self::NotLoaded(_) => ErrorKind::NotLoaded,
            Self::Load(_)
            | Self::Integrity(_)
            | Self::Json(_)
            | Self::Io(_)
            | Self::Other(_) => ErrorKind::LoadError,
        }
    }
}

impl From<String> for StatEngineError {
    fn from(s: String) -> Self {
        StatEngineError::Other(s)
    }
}

impl From<&str> for StatEngineError {
    fn from(s: &str) -> Self {
        StatEngineError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, StatEngineError>;
