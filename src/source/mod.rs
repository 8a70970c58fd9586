pub mod json;

use async_trait::async_trait;

use crate::core::RawTables;
use crate::error::Result;

pub use json::JsonTableSource;

/// Trait for loaders that hand raw tables to the engine (files, HTTP, ...)
///
/// Scheduling and retries belong to the caller; a source is asked once per
/// refresh cycle.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Fetch every table for one load cycle
    async fn fetch(&self) -> Result<RawTables>;

    /// Get source name for logging
    fn name(&self) -> &str;
}
