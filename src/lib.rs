//! # StatSnap Engine
//!
//! NFL player lookup and per-game statistics engine with:
//! - Fuzzy player-name resolution (rapidfuzz Indel ratio, 60% floor)
//! - Per-game rates derived from season totals
//! - Position/stat filters, rosters, head-to-head comparisons
//! - Atomically swapped, immutable data snapshots
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use statsnap_engine::{EngineOptions, StatEngine, source::JsonTableSource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = StatEngine::new(EngineOptions::default());
//!     engine.refresh(&JsonTableSource::new("data/2024")).await?;
//!
//!     let stats = engine.season_stats("mahomes")?;
//!     println!("{}: {} FPPG", stats.player.name, stats.stats.fantasy_ppg);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod query;
pub mod ranking;
pub mod source;
pub mod stats;
pub mod store;

// Re-export primary types
pub use config::{EngineOptions, MATCH_THRESHOLD};
pub use crate::core::{PlayerId, Position, RawTables};
pub use engine::StatEngine;
pub use error::{Dataset, ErrorKind, Result, Side, StatEngineError};
pub use query::{Availability, Comparison, FilterResult, PlayerStats, Pool, Roster, WeekSnapshot, Winner};
pub use ranking::NameMatch;
pub use stats::{DerivedStats, StatKey};
pub use store::SnapshotInfo;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
