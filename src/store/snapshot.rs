use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::core::{
    PlayerId, Position, RawIdRow, RawRosterRow, RawSeasonRow, RawTables, RawWeekRow, RosterEntry,
    SeasonRecord, StatTotals, WeekRecord,
};
use crate::error::{Dataset, Result, StatEngineError};

/// Crosswalk entry for one player
#[derive(Debug, Clone)]
struct IdEntry {
    name: String,
    position: Option<Position>,
}

/// Records that belong to a season
pub trait Seasonal {
    fn season(&self) -> u16;
}

impl Seasonal for SeasonRecord {
    fn season(&self) -> u16 {
        self.season
    }
}

impl Seasonal for WeekRecord {
    fn season(&self) -> u16 {
        self.season
    }
}

impl Seasonal for RosterEntry {
    fn season(&self) -> u16 {
        self.season
    }
}

/// One loaded record collection
#[derive(Debug, Clone)]
pub struct Table<T> {
    records: Vec<T>,
    latest_season: u16,
}

impl<T: Seasonal> Table<T> {
    fn new(records: Vec<T>) -> Option<Self> {
        let latest_season = records.iter().map(Seasonal::season).max()?;
        Some(Self {
            records,
            latest_season,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn latest_season(&self) -> u16 {
        self.latest_season
    }

    /// Records of `season` (latest when `None`), in load order
    pub fn for_season(&self, season: Option<u16>) -> Vec<&T> {
        let season = season.unwrap_or(self.latest_season);
        self.records.iter().filter(|r| r.season() == season).collect()
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }
}

/// Record counts and identity of a snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotInfo {
    pub generation: u64,
    pub loaded_at: DateTime<Utc>,
    pub players: usize,
    pub season_records: Option<usize>,
    pub week_records: Option<usize>,
    pub roster_entries: Option<usize>,
}

/// One complete, internally consistent load of every record collection.
///
/// Immutable once built; replaced as a whole by [`super::SnapshotStore`].
#[derive(Debug)]
pub struct Snapshot {
    generation: u64,
    loaded_at: DateTime<Utc>,
    names: HashMap<PlayerId, String>,
    seasons: Option<Table<SeasonRecord>>,
    weeks: Option<Table<WeekRecord>>,
    rosters: Option<Table<RosterEntry>>,
}

impl Snapshot {
    /// Merges raw tables into normalized records.
    ///
    /// Fails with `Load` when the ID table is missing or every record table
    /// is absent, and with `Integrity` on duplicate keys.
    pub fn build(raw: &RawTables, generation: u64) -> Result<Self> {
        let index = build_id_index(&raw.ids)?;

        let seasons = match non_empty(raw.seasons.as_deref(), Dataset::Seasons) {
            Some(rows) => Table::new(build_seasons(rows, &index)?),
            None => None,
        };
        let weeks = match non_empty(raw.weeks.as_deref(), Dataset::Weeks) {
            Some(rows) => Table::new(build_weeks(rows, &index)?),
            None => None,
        };
        let rosters = match non_empty(raw.rosters.as_deref(), Dataset::Rosters) {
            Some(rows) => Table::new(build_rosters(rows, &index)),
            None => None,
        };

        if seasons.is_none() && weeks.is_none() && rosters.is_none() {
            return Err(StatEngineError::Load(
                "no season, weekly or roster records supplied".to_string(),
            ));
        }

        let names = index
            .into_iter()
            .map(|(id, entry)| (id, entry.name))
            .collect();

        Ok(Self {
            generation,
            loaded_at: Utc::now(),
            names,
            seasons,
            weeks,
            rosters,
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Canonical name for an ID
    pub fn name_of(&self, id: &PlayerId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn seasons(&self) -> Result<&Table<SeasonRecord>> {
        self.seasons
            .as_ref()
            .ok_or(StatEngineError::NotLoaded(Dataset::Seasons))
    }

    pub fn weeks(&self) -> Result<&Table<WeekRecord>> {
        self.weeks
            .as_ref()
            .ok_or(StatEngineError::NotLoaded(Dataset::Weeks))
    }

    pub fn rosters(&self) -> Result<&Table<RosterEntry>> {
        self.rosters
            .as_ref()
            .ok_or(StatEngineError::NotLoaded(Dataset::Rosters))
    }

    pub fn info(&self) -> SnapshotInfo {
        SnapshotInfo {
            generation: self.generation,
            loaded_at: self.loaded_at,
            players: self.names.len(),
            season_records: self.seasons.as_ref().map(Table::len),
            week_records: self.weeks.as_ref().map(Table::len),
            roster_entries: self.rosters.as_ref().map(Table::len),
        }
    }
}

fn non_empty<T>(rows: Option<&[T]>, dataset: Dataset) -> Option<&[T]> {
    match rows {
        Some(rows) if !rows.is_empty() => Some(rows),
        Some(_) => {
            tracing::warn!("{} table is empty, treating it as not loaded", dataset);
            None
        }
        None => {
            tracing::warn!("{} table not supplied", dataset);
            None
        }
    }
}

fn clean(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn season_of(raw: Option<f64>) -> Option<u16> {
    raw.filter(|s| s.is_finite() && *s >= 0.0 && *s <= f64::from(u16::MAX))
        .map(|s| s.round() as u16)
}

fn count_of(raw: Option<f64>) -> Option<u32> {
    raw.filter(|v| v.is_finite())
        .map(|v| v.max(0.0).round().min(f64::from(u32::MAX)) as u32)
}

/// First usable position in precedence order, else `N/A`.
///
/// Season and week rows pass their candidates as
/// `[position_y, crosswalk position, position_x, position]`: the two
/// joined-in columns win over the row's own, and `position_y` (the
/// crosswalk side of an upstream join) wins over `position_x`.
pub fn resolve_position(candidates: &[Option<&str>]) -> Position {
    candidates
        .iter()
        .filter_map(|c| c.and_then(Position::parse))
        .next()
        .unwrap_or_default()
}

fn build_id_index(rows: &[RawIdRow]) -> Result<HashMap<PlayerId, IdEntry>> {
    if rows.is_empty() {
        return Err(StatEngineError::Load("player ID table is empty".to_string()));
    }

    let mut index: HashMap<PlayerId, IdEntry> = HashMap::new();
    for row in rows {
        let (Some(id), Some(name)) = (clean(row.gsis_id.as_deref()), clean(row.name.as_deref()))
        else {
            continue;
        };
        let position = clean(row.position.as_deref()).and_then(Position::parse);

        match index.entry(PlayerId::new(id)) {
            Entry::Vacant(slot) => {
                slot.insert(IdEntry {
                    name: name.to_string(),
                    position,
                });
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                if existing.name != name {
                    return Err(StatEngineError::Integrity(format!(
                        "player id {} maps to both '{}' and '{}'",
                        id, existing.name, name
                    )));
                }
                if existing.position.is_none() {
                    existing.position = position;
                }
            }
        }
    }

    if index.is_empty() {
        return Err(StatEngineError::Load(
            "player ID table has no rows with both an id and a name".to_string(),
        ));
    }
    Ok(index)
}

fn build_seasons(
    rows: &[RawSeasonRow],
    index: &HashMap<PlayerId, IdEntry>,
) -> Result<Vec<SeasonRecord>> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for row in rows {
        let (Some(id), Some(season)) = (clean(row.player_id.as_deref()), season_of(row.season))
        else {
            skipped += 1;
            continue;
        };
        let player_id = PlayerId::new(id);

        if !seen.insert((player_id.clone(), season)) {
            return Err(StatEngineError::Integrity(format!(
                "duplicate season row for player {} in {}",
                player_id, season
            )));
        }

        let entry = index.get(&player_id);
        let position = resolve_position(&[
            row.positions.position_y.as_deref(),
            entry.and_then(|e| e.position.as_ref()).map(Position::as_str),
            row.positions.position_x.as_deref(),
            row.positions.position.as_deref(),
        ]);

        records.push(SeasonRecord {
            name: entry.map(|e| e.name.clone()),
            player_id,
            position,
            season,
            games: count_of(row.games).unwrap_or(0),
            totals: StatTotals::from(&row.totals),
        });
    }

    if skipped > 0 {
        tracing::warn!("Skipped {} season rows without player id or season", skipped);
    }
    Ok(records)
}

fn build_weeks(rows: &[RawWeekRow], index: &HashMap<PlayerId, IdEntry>) -> Result<Vec<WeekRecord>> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for row in rows {
        let (Some(id), Some(season), Some(week)) = (
            clean(row.player_id.as_deref()),
            season_of(row.season),
            count_of(row.week),
        ) else {
            skipped += 1;
            continue;
        };
        let player_id = PlayerId::new(id);

        if !seen.insert((player_id.clone(), season, week)) {
            return Err(StatEngineError::Integrity(format!(
                "duplicate week row for player {} in {} week {}",
                player_id, season, week
            )));
        }

        let entry = index.get(&player_id);
        let position = resolve_position(&[
            row.positions.position_y.as_deref(),
            entry.and_then(|e| e.position.as_ref()).map(Position::as_str),
            row.positions.position_x.as_deref(),
            row.positions.position.as_deref(),
        ]);

        records.push(WeekRecord {
            name: entry.map(|e| e.name.clone()),
            player_id,
            position,
            season,
            week,
            opponent: clean(row.opponent_team.as_deref())
                .map(str::to_uppercase)
                .unwrap_or_else(|| Position::UNKNOWN.to_string()),
            totals: StatTotals::from(&row.totals),
        });
    }

    if skipped > 0 {
        tracing::warn!("Skipped {} week rows without player id, season or week", skipped);
    }
    Ok(records)
}

fn roster_entry(row: &RawRosterRow, index: &HashMap<PlayerId, IdEntry>) -> Option<RosterEntry> {
    let player_id = PlayerId::new(clean(row.player_id.as_deref())?);
    let season = season_of(row.season)?;
    let team = clean(row.team.as_deref())?.to_uppercase();
    let position = resolve_position(&[
        row.position.as_deref(),
        index
            .get(&player_id)
            .and_then(|e| e.position.as_ref())
            .map(Position::as_str),
    ]);

    Some(RosterEntry {
        player_id,
        season,
        team,
        position,
    })
}

fn build_rosters(rows: &[RawRosterRow], index: &HashMap<PlayerId, IdEntry>) -> Vec<RosterEntry> {
    let records: Vec<RosterEntry> = rows
        .iter()
        .filter_map(|row| roster_entry(row, index))
        .collect();

    let skipped = rows.len() - records.len();
    if skipped > 0 {
        tracing::warn!("Skipped {} roster rows without player id, season or team", skipped);
    }
    records
}
