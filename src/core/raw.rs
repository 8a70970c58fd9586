//! Raw, already-parsed upstream tables as handed over by a loader.
//!
//! Column names follow the nflverse exports (`import_ids`,
//! `import_seasonal_data`, `import_weekly_data`, `import_seasonal_rosters`).
//! Every column is optional; defaults are applied once, when the snapshot
//! is built.

use serde::{Deserialize, Serialize};

/// Deserialize a number from int, float, numeric string or null (pandas compatibility)
fn deserialize_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberValue {
        Int(i64),
        Float(f64),
        String(String),
        Null,
    }

    match Option::<NumberValue>::deserialize(deserializer)? {
        Some(NumberValue::Int(i)) => Ok(Some(i as f64)),
        Some(NumberValue::Float(f)) if f.is_nan() => Ok(None),
        Some(NumberValue::Float(f)) => Ok(Some(f)),
        Some(NumberValue::String(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberValue::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| Error::custom(format!("Invalid numeric string: {}", s))),
        Some(NumberValue::Null) | None => Ok(None),
    }
}

/// Row of the player ID crosswalk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawIdRow {
    #[serde(default)]
    pub gsis_id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub position: Option<String>,
}

/// Cumulative stat columns shared by season and week rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTotals {
    #[serde(default, deserialize_with = "deserialize_number")]
    pub passing_yards: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_number")]
    pub passing_tds: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_number")]
    pub rushing_yards: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_number")]
    pub rushing_tds: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_number")]
    pub receiving_yards: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_number")]
    pub receiving_tds: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_number")]
    pub receptions: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_number")]
    pub fantasy_points_ppr: Option<f64>,
}

/// Position columns as they may appear after an upstream join
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPositions {
    #[serde(default)]
    pub position: Option<String>,

    #[serde(default)]
    pub position_x: Option<String>,

    #[serde(default)]
    pub position_y: Option<String>,
}

/// One player-season row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSeasonRow {
    #[serde(default)]
    pub player_id: Option<String>,

    #[serde(default, deserialize_with = "deserialize_number")]
    pub season: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_number")]
    pub games: Option<f64>,

    #[serde(flatten)]
    pub positions: RawPositions,

    #[serde(flatten)]
    pub totals: RawTotals,
}

/// One player-week row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWeekRow {
    #[serde(default)]
    pub player_id: Option<String>,

    #[serde(default, deserialize_with = "deserialize_number")]
    pub season: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_number")]
    pub week: Option<f64>,

    #[serde(default)]
    pub opponent_team: Option<String>,

    #[serde(flatten)]
    pub positions: RawPositions,

    #[serde(flatten)]
    pub totals: RawTotals,
}

/// One seasonal roster row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRosterRow {
    #[serde(default)]
    pub player_id: Option<String>,

    #[serde(default, deserialize_with = "deserialize_number")]
    pub season: Option<f64>,

    #[serde(default)]
    pub team: Option<String>,

    #[serde(default)]
    pub position: Option<String>,
}

/// Everything one load cycle hands to the record store.
///
/// `ids` is required. The record tables are independently optional.
#[derive(Debug, Clone, Default)]
pub struct RawTables {
    pub ids: Vec<RawIdRow>,
    pub seasons: Option<Vec<RawSeasonRow>>,
    pub weeks: Option<Vec<RawWeekRow>>,
    pub rosters: Option<Vec<RawRosterRow>>,
}
