pub mod snapshot;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::core::RawTables;
use crate::error::{Dataset, Result, StatEngineError};

pub use snapshot::{resolve_position, Seasonal, Snapshot, SnapshotInfo, Table};

/// Holds the current snapshot and swaps it atomically on reload.
///
/// Readers take an `Arc` to one snapshot and keep it for the whole query,
/// so a concurrent load is never observed half-applied. A failed load
/// leaves the previous snapshot installed.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Option<Arc<Snapshot>>>,
    next_generation: AtomicU64,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from raw tables and installs it
    pub fn load(&self, raw: &RawTables) -> Result<Arc<Snapshot>> {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst) + 1;

        // Built outside the lock; readers keep using the old snapshot meanwhile
        let snapshot = match Snapshot::build(raw, generation) {
            Ok(snapshot) => Arc::new(snapshot),
            Err(e) => {
                tracing::warn!("Load {} rejected, keeping previous snapshot: {}", generation, e);
                return Err(e);
            }
        };

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(installed) = current.as_ref() {
            // A slower, older load must not overwrite a newer one
            if installed.generation() > generation {
                tracing::warn!(
                    "Discarding load {}, generation {} already installed",
                    generation,
                    installed.generation()
                );
                return Ok(Arc::clone(installed));
            }
        }
        *current = Some(Arc::clone(&snapshot));
        drop(current);

        let info = snapshot.info();
        tracing::info!(
            "Installed snapshot {}: {} players, seasons={:?} weeks={:?} rosters={:?}",
            info.generation,
            info.players,
            info.season_records,
            info.week_records,
            info.roster_entries
        );
        Ok(snapshot)
    }

    /// Current snapshot, or `NotLoaded` before the first successful load
    pub fn current(&self) -> Result<Arc<Snapshot>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(StatEngineError::NotLoaded(Dataset::Snapshot))
    }

    /// Generation of the installed snapshot (0 when none)
    pub fn generation(&self) -> u64 {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or(0, |s| s.generation())
    }
}
