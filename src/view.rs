//! Journey view: fetch sequencing between a row source and the renderer
//!
//! The flow builder is pure and stateless; this layer owns the ordering
//! around it. A view issues monotonically increasing refresh generations
//! and commits a completed fetch only if no later fetch has committed
//! already, so a late-arriving stale result can never overwrite a newer
//! one (rapid filter changes race their fetches in exactly this way).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use crate::flow::{FlowBuilder, FlowGraph};
use crate::query::StatsQuery;
use crate::source::{JourneySource, SourceError};

/// Errors surfaced by a view refresh
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] SourceError),
}

/// Result type for view operations
pub type ViewResult<T> = Result<T, ViewError>;

/// What the renderer should show right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// A fetch is in flight and no newer result has settled
    Loading,
    /// The latest fetch produced no rows
    Empty,
    /// A graph is ready to render
    Ready(FlowGraph),
}

impl ViewState {
    /// True while a fetch is outstanding
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// The graph, when one is ready
    pub fn graph(&self) -> Option<&FlowGraph> {
        match self {
            ViewState::Ready(graph) => Some(graph),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    /// Highest generation that finished, successfully or not
    settled: u64,
    /// Generation of the result currently held
    committed: u64,
    /// Latest committed graph; `None` until a fetch succeeds
    graph: Option<FlowGraph>,
}

/// Sequencing glue between one [`JourneySource`] and one renderer.
///
/// Safe to share across tasks; every refresh is tagged with a fresh
/// generation and the newest settled result wins.
pub struct JourneyView {
    source: Arc<dyn JourneySource>,
    issued: AtomicU64,
    inner: Mutex<Inner>,
}

impl JourneyView {
    /// Create a view over a row source
    pub fn new(source: Arc<dyn JourneySource>) -> Self {
        Self {
            source,
            issued: AtomicU64::new(0),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Fetch rows for `query`, rebuild the graph, and commit it unless a
    /// newer refresh has already committed.
    ///
    /// Returns the view state after this refresh settled, which may
    /// reflect a newer generation's result. A fetch error leaves the
    /// previously committed graph in place.
    pub async fn refresh(&self, query: &StatsQuery) -> ViewResult<ViewState> {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, ?query, "journey refresh started");

        let fetched = self.source.fetch_journey(query).await;

        let mut inner = self.inner.lock().await;
        inner.settled = inner.settled.max(generation);
        match fetched {
            Ok(rows) => {
                if generation > inner.committed {
                    let mut builder = FlowBuilder::new();
                    builder.push_rows(&rows);
                    if builder.rejected() > 0 {
                        debug!(
                            generation,
                            rejected = builder.rejected(),
                            "incomplete rows dropped during aggregation"
                        );
                    }
                    inner.committed = generation;
                    inner.graph = Some(builder.finish());
                } else {
                    debug!(generation, committed = inner.committed, "discarding stale journey result");
                }
                Ok(Self::derive_state(&inner, self.issued.load(Ordering::SeqCst)))
            }
            Err(err) => {
                debug!(generation, %err, "journey refresh failed");
                Err(ViewError::Fetch(err))
            }
        }
    }

    /// Current display state
    pub async fn state(&self) -> ViewState {
        let inner = self.inner.lock().await;
        Self::derive_state(&inner, self.issued.load(Ordering::SeqCst))
    }

    fn derive_state(inner: &Inner, issued: u64) -> ViewState {
        if inner.settled < issued {
            return ViewState::Loading;
        }
        match &inner.graph {
            Some(graph) if !graph.is_empty() => ViewState::Ready(graph.clone()),
            _ => ViewState::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::JourneyRow;
    use crate::source::{SourceResult, StaticSource};
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio_test::assert_ok;

    fn rows_for(source_label: &str) -> Vec<JourneyRow> {
        vec![JourneyRow::new(source_label, "coupon", "purchase", 5)]
    }

    /// Answers per-advertiser, with slower responses for lower ids
    /// (the shape of the stale-result race). Advertiser 3 always fails.
    struct KeyedSource;

    #[async_trait]
    impl JourneySource for KeyedSource {
        async fn fetch_journey(&self, query: &StatsQuery) -> SourceResult<Vec<JourneyRow>> {
            match query.advertiser_id {
                Some(1) => {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Ok(rows_for("slow-advertiser"))
                }
                Some(2) => {
                    tokio::time::sleep(Duration::from_millis(5)).await;
                    Ok(rows_for("fast-advertiser"))
                }
                Some(3) => Err(SourceError::Unavailable("backend offline".to_string())),
                _ => Ok(Vec::new()),
            }
        }
    }

    #[tokio::test]
    async fn refresh_commits_a_ready_graph() {
        let source = Arc::new(StaticSource::new(rows_for("instagram")));
        let view = JourneyView::new(source);

        let state = assert_ok!(view.refresh(&StatsQuery::new()).await);
        let graph = state.graph().expect("graph should be ready");
        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(view.state().await, state);
    }

    #[tokio::test]
    async fn empty_fetch_commits_the_empty_state() {
        let source = Arc::new(StaticSource::new(Vec::new()));
        let view = JourneyView::new(source);

        let state = view.refresh(&StatsQuery::new()).await.unwrap();
        assert_eq!(state, ViewState::Empty);
    }

    #[tokio::test]
    async fn fetch_error_keeps_previous_graph() {
        let view = JourneyView::new(Arc::new(KeyedSource));
        view.refresh(&StatsQuery::new().with_advertiser(2)).await.unwrap();

        let result = view.refresh(&StatsQuery::new().with_advertiser(3)).await;
        assert!(matches!(result, Err(ViewError::Fetch(_))));

        let state = view.state().await;
        let graph = state.graph().expect("previous graph should survive the failure");
        assert_eq!(graph.nodes[0].id, "fast-advertiser");
    }

    #[tokio::test]
    async fn failing_source_with_no_history_reads_empty() {
        let failing = Arc::new(StaticSource::new(Vec::new()).failing());
        let view = JourneyView::new(failing);
        assert!(view.refresh(&StatsQuery::new()).await.is_err());
        assert_eq!(view.state().await, ViewState::Empty);
    }

    #[tokio::test(start_paused = true)]
    async fn state_is_loading_while_a_fetch_is_outstanding() {
        let source = Arc::new(StaticSource::new(rows_for("instagram")).with_delay(Duration::from_millis(20)));
        let view = Arc::new(JourneyView::new(source));

        let bg = {
            let view = Arc::clone(&view);
            tokio::spawn(async move { view.refresh(&StatsQuery::new()).await })
        };
        tokio::task::yield_now().await;
        assert!(view.state().await.is_loading());

        bg.await.unwrap().unwrap();
        assert!(!view.state().await.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn newer_result_is_not_overwritten_by_stale_one() {
        let view = Arc::new(JourneyView::new(Arc::new(KeyedSource)));

        // Old fetch first (slow), newer fetch second (fast).
        let old = {
            let view = Arc::clone(&view);
            tokio::spawn(async move { view.refresh(&StatsQuery::new().with_advertiser(1)).await })
        };
        tokio::task::yield_now().await;
        let new = {
            let view = Arc::clone(&view);
            tokio::spawn(async move { view.refresh(&StatsQuery::new().with_advertiser(2)).await })
        };

        old.await.unwrap().unwrap();
        new.await.unwrap().unwrap();

        let state = view.state().await;
        let graph = state.graph().expect("newest result should be committed");
        assert_eq!(graph.nodes[0].id, "fast-advertiser");
    }
}
