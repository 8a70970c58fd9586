use std::sync::Arc;
use std::time::Instant;

use crate::config::EngineOptions;
use crate::core::RawTables;
use crate::error::Result;
use crate::query::{
    Availability, Comparison, FilterResult, PlayerStats, Pool, Query, Roster, WeekSnapshot,
};
use crate::ranking::{NameMatch, NameResolver, Ranker};
use crate::source::TableSource;
use crate::store::{SnapshotInfo, SnapshotStore};

/// Main stats engine: owns the current snapshot and answers queries.
///
/// Every query takes the installed snapshot once and runs against it
/// alone, so queries may run in parallel with each other and with a reload.
pub struct StatEngine {
    store: SnapshotStore,
    resolver: NameResolver,
    options: EngineOptions,
}

impl StatEngine {
    /// Create an engine with the default Indel ranker and no data loaded
    pub fn new(options: EngineOptions) -> Self {
        Self {
            store: SnapshotStore::new(),
            resolver: NameResolver::default(),
            options,
        }
    }

    /// Replace the name scorer
    pub fn with_ranker(mut self, ranker: Arc<dyn Ranker>) -> Self {
        self.resolver = NameResolver::new(ranker);
        self
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Build and install a new snapshot from raw tables.
    ///
    /// On error the previously installed snapshot stays current.
    pub fn load(&self, raw: &RawTables) -> Result<SnapshotInfo> {
        let start = Instant::now();
        let snapshot = self.store.load(raw)?;
        tracing::debug!(
            "Snapshot {} built in {:.2}ms",
            snapshot.generation(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(snapshot.info())
    }

    /// Fetch tables from a source and load them
    pub async fn refresh(&self, source: &dyn TableSource) -> Result<SnapshotInfo> {
        tracing::info!("Refreshing tables from {} source", source.name());
        let raw = source.fetch().await?;
        self.load(&raw)
    }

    pub fn snapshot_info(&self) -> Result<SnapshotInfo> {
        Ok(self.store.current()?.info())
    }

    fn with_query<T>(&self, run: impl FnOnce(&Query<'_>) -> Result<T>) -> Result<T> {
        let snapshot = self.store.current()?;
        let query = Query::new(&snapshot, &self.resolver, &self.options);
        run(&query)
    }

    /// Fuzzy-match a name against the season or week pool
    pub fn resolve_player(&self, name: &str, pool: Pool) -> Result<NameMatch> {
        self.with_query(|q| q.resolve(name, pool))
    }

    /// Per-game season stats (`InsufficientGames` below the games floor)
    pub fn season_stats(&self, name: &str) -> Result<PlayerStats> {
        self.with_query(|q| q.season_stats(name))
    }

    /// One week's totals for a player
    pub fn week_stats(&self, name: &str, week: u32) -> Result<WeekSnapshot> {
        self.with_query(|q| q.week_stats(name, week))
    }

    /// Players at a position whose per-game stat meets a threshold
    pub fn filter_by_stat(&self, position: &str, stat: &str, threshold: f64) -> Result<FilterResult> {
        self.with_query(|q| q.filter_by_stat(position, stat, threshold))
    }

    /// Team roster grouped by position
    pub fn roster(&self, team: &str) -> Result<Roster> {
        self.with_query(|q| q.roster(team))
    }

    /// Side-by-side comparison with a fantasy-points winner
    pub fn compare(&self, first: &str, second: &str) -> Result<Comparison> {
        self.with_query(|q| q.compare(first, second))
    }

    /// Games-played availability report
    pub fn availability(&self, name: &str) -> Result<Availability> {
        self.with_query(|q| q.availability(name))
    }
}

impl Default for StatEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Dataset, StatEngineError};

    #[test]
    fn test_engine_creation() {
        let engine = StatEngine::default();
        assert_eq!(engine.options().min_games, 6);
        assert!(matches!(
            engine.season_stats("Josh Allen"),
            Err(StatEngineError::NotLoaded(Dataset::Snapshot))
        ));
        assert!(engine.snapshot_info().is_err());
    }
}
