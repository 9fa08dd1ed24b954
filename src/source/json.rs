//! JSON-file journey source

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::traits::{JourneySource, SourceResult};
use crate::flow::JourneyRow;
use crate::query::StatsQuery;

/// Reads journey rows from a JSON file.
///
/// The file holds a finite JSON array in the shape of a
/// `/stats/journey` response body. Exports are produced per query, so
/// the file is treated as already scoped; the query is logged with the
/// fetch but applies no further filtering here.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from the given file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path this source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl JourneySource for JsonFileSource {
    async fn fetch_journey(&self, query: &StatsQuery) -> SourceResult<Vec<JourneyRow>> {
        debug!(path = %self.path.display(), ?query, "loading journey rows");
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let rows: Vec<JourneyRow> = serde_json::from_str(&raw)?;
        debug!(rows = rows.len(), "journey rows loaded");
        Ok(rows)
    }
}
