use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::{RawIdRow, RawTables};
use crate::error::{Result, StatEngineError};
use crate::source::TableSource;

pub const IDS_FILE: &str = "ids.json";
pub const SEASONAL_FILE: &str = "seasonal.json";
pub const WEEKLY_FILE: &str = "weekly.json";
pub const ROSTERS_FILE: &str = "rosters.json";

/// Reads nflverse tables exported as JSON arrays of records.
///
/// Layout of `dir`:
/// - `ids.json` (required)
/// - `seasonal.json`, `weekly.json`, `rosters.json` (each optional)
pub struct JsonTableSource {
    dir: PathBuf,
}

impl JsonTableSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `None` when the file does not exist
    async fn read_table<T: DeserializeOwned>(&self, file: &str) -> Result<Option<Vec<T>>> {
        let path = self.dir.join(file);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("{} not present", path.display());
                return Ok(None);
            }
            Err(e) => return Err(StatEngineError::Io(e)),
        };

        let rows: Vec<T> = serde_json::from_slice(&bytes)?;
        tracing::debug!("Read {} rows from {}", rows.len(), path.display());
        Ok(Some(rows))
    }
}

#[async_trait]
impl TableSource for JsonTableSource {
    async fn fetch(&self) -> Result<RawTables> {
        let ids: Vec<RawIdRow> = self.read_table(IDS_FILE).await?.ok_or_else(|| {
            StatEngineError::Load(format!(
                "{} missing from {}",
                IDS_FILE,
                self.dir.display()
            ))
        })?;

        Ok(RawTables {
            ids,
            seasons: self.read_table(SEASONAL_FILE).await?,
            weeks: self.read_table(WEEKLY_FILE).await?,
            rosters: self.read_table(ROSTERS_FILE).await?,
        })
    }

    fn name(&self) -> &str {
        "json"
    }
}
