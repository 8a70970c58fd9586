use serde::{Deserialize, Serialize};
use std::fmt;

use crate::stats::StatKey;

/// Stable upstream identifier for a person (nflverse `gsis_id`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Roster position code, always upper-case. `N/A` when no source had one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(String);

impl Position {
    pub const UNKNOWN: &'static str = "N/A";

    /// Normalizes a raw position code; blank input yields `None`
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_uppercase()))
        }
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        self.0 != Self::UNKNOWN
    }

    pub fn is_quarterback(&self) -> bool {
        self.0 == "QB"
    }

    /// RB, WR or TE
    pub fn is_skill(&self) -> bool {
        matches!(self.0.as_str(), "RB" | "WR" | "TE")
    }

    /// Case-insensitive comparison against user input
    pub fn matches(&self, input: &str) -> bool {
        self.0.eq_ignore_ascii_case(input.trim())
    }

    /// Per-game stats worth showing for this position, fantasy PPG excluded
    pub fn featured_stats(&self) -> &'static [StatKey] {
        match self.0.as_str() {
            "QB" => &[
                StatKey::PassingYpg,
                StatKey::RushingYpg,
                StatKey::PassingTdPerGame,
                StatKey::TotalTdPerGame,
            ],
            "RB" | "WR" => &[
                StatKey::ReceivingYpg,
                StatKey::ReceptionsPerGame,
                StatKey::RushingYpg,
                StatKey::TotalTdPerGame,
            ],
            "TE" => &[
                StatKey::ReceivingYpg,
                StatKey::ReceptionsPerGame,
                StatKey::TotalTdPerGame,
            ],
            _ => &[],
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parse() {
        assert_eq!(Position::parse(" qb ").unwrap().as_str(), "QB");
        assert!(Position::parse("   ").is_none());
        assert!(!Position::unknown().is_known());
    }

    #[test]
    fn test_position_groups() {
        let qb = Position::parse("QB").unwrap();
        let te = Position::parse("TE").unwrap();
        let k = Position::parse("K").unwrap();

        assert!(qb.is_quarterback());
        assert!(!qb.is_skill());
        assert!(te.is_skill());
        assert!(qb.matches("qb"));

        assert_eq!(qb.featured_stats()[0], StatKey::PassingYpg);
        assert_eq!(te.featured_stats().len(), 3);
        assert!(k.featured_stats().is_empty());
    }
}
