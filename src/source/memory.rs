//! In-memory journey source for tests and local wiring

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::traits::{JourneySource, SourceError, SourceResult};
use crate::flow::JourneyRow;
use crate::query::StatsQuery;

/// Canned journey rows behind the source seam.
///
/// Serves a fixed batch with an optional artificial delay, and records
/// every query it answers so callers can assert the scope that was
/// requested. The delay makes request-ordering races reproducible when
/// exercising the view coordinator.
#[derive(Debug, Default)]
pub struct StaticSource {
    rows: Vec<JourneyRow>,
    delay: Option<Duration>,
    fail: bool,
    served: Mutex<Vec<StatsQuery>>,
}

impl StaticSource {
    /// A source answering every fetch with the given rows
    pub fn new(rows: Vec<JourneyRow>) -> Self {
        Self {
            rows,
            delay: None,
            fail: false,
            served: Mutex::new(Vec::new()),
        }
    }

    /// Sleep this long before answering each fetch
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Answer every fetch with `SourceError::Unavailable`
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Queries served so far, in arrival order
    pub async fn served(&self) -> Vec<StatsQuery> {
        self.served.lock().await.clone()
    }
}

#[async_trait]
impl JourneySource for StaticSource {
    async fn fetch_journey(&self, query: &StatsQuery) -> SourceResult<Vec<JourneyRow>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.served.lock().await.push(query.clone());
        if self.fail {
            return Err(SourceError::Unavailable("static source set to fail".to_string()));
        }
        Ok(self.rows.clone())
    }
}
