use serde::Serialize;

use crate::core::Position;
use crate::error::{Result, StatEngineError};

use super::Query;

/// Display order of position groups; other positions follow in first-seen order
pub const ROSTER_ORDER: [&str; 10] = ["QB", "RB", "WR", "TE", "OL", "DL", "LB", "DB", "K", "P"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterGroup {
    pub position: Position,
    pub players: Vec<String>,
}

impl RosterGroup {
    /// First `limit` names and how many were left out
    pub fn preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.players.len().min(limit);
        (&self.players[..shown], self.players.len() - shown)
    }
}

/// A team's players for the query season, grouped by position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roster {
    pub team: String,
    pub season: u16,
    pub groups: Vec<RosterGroup>,
}

impl Roster {
    pub fn player_count(&self) -> usize {
        self.groups.iter().map(|g| g.players.len()).sum()
    }
}

impl<'a> Query<'a> {
    pub fn roster(&self, team: &str) -> Result<Roster> {
        let team = team.trim().to_uppercase();
        let table = self.snapshot.rosters()?;
        let season = self.options.season.unwrap_or(table.latest_season());

        let entries: Vec<_> = table
            .for_season(Some(season))
            .into_iter()
            .filter(|e| e.team == team)
            .collect();
        if entries.is_empty() {
            return Err(StatEngineError::TeamNotFound { team });
        }

        let mut groups: Vec<RosterGroup> = ROSTER_ORDER
            .iter()
            .filter_map(|code| Position::parse(code))
            .map(|position| RosterGroup {
                position,
                players: Vec::new(),
            })
            .collect();

        for entry in entries {
            // Players missing from the ID crosswalk have no name to show
            let Some(name) = self.snapshot.name_of(&entry.player_id) else {
                continue;
            };

            let index = match groups.iter().position(|g| g.position == entry.position) {
                Some(index) => index,
                None => {
                    groups.push(RosterGroup {
                        position: entry.position.clone(),
                        players: Vec::new(),
                    });
                    groups.len() - 1
                }
            };
            groups[index].players.push(name.to_string());
        }

        groups.retain(|g| !g.players.is_empty());
        if groups.is_empty() {
            return Err(StatEngineError::TeamNotFound { team });
        }

        Ok(Roster {
            team,
            season,
            groups,
        })
    }
}
