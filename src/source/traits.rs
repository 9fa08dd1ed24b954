//! Journey source trait: the contract row producers implement

use crate::flow::JourneyRow;
use crate::query::StatsQuery;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching journey rows
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// The contract journey-row producers implement.
///
/// A source stands in for the stats backend: given a query it returns a
/// finite batch of rows, already scoped to the query's window and
/// filters. Fetching may suspend on I/O; the rows themselves are plain
/// data handed to the synchronous flow builder afterwards.
///
/// Implementations must be thread-safe (`Send + Sync`) so a view can
/// refresh from multiple tasks.
#[async_trait]
pub trait JourneySource: Send + Sync {
    /// Fetch the journey rows for one query
    async fn fetch_journey(&self, query: &StatsQuery) -> SourceResult<Vec<JourneyRow>>;
}
