//! Flow graph construction: journey rows in, deduplicated layered graph out

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::node::{FlowLink, FlowNode, Layer};
use super::row::JourneyRow;

/// A three-layer directed flow graph ready for a Sankey-style renderer.
///
/// Nodes are ordered by layer (discovery order within a layer), links in
/// first-contribution order. The graph is a pure derivation of its input
/// rows: it is rebuilt from scratch on every fetch and never mutated
/// incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowGraph {
    /// Deduplicated nodes, lower layers first
    pub nodes: Vec<FlowNode>,
    /// Aggregated directed edges
    pub links: Vec<FlowLink>,
}

impl FlowGraph {
    /// Build a graph from a batch of rows
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a JourneyRow>) -> Self {
        let mut builder = FlowBuilder::new();
        builder.push_rows(rows);
        builder.finish()
    }

    /// True when the graph holds no nodes, the renderer's "no data" signal
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes assigned to a layer
    pub fn layer_count(&self, layer: Layer) -> usize {
        self.nodes.iter().filter(|n| n.layer == layer).count()
    }

    /// Sum of all aggregated link values
    pub fn total_flow(&self) -> u64 {
        self.links.iter().map(|l| l.value).sum()
    }
}

/// Incremental aggregation of journey rows into a [`FlowGraph`].
///
/// Maintains two insertion-ordered maps: label → layer (first discovery
/// wins) and (source, target) → accumulated value. Edge keys are label
/// tuples, never joined strings: backend labels such as
/// "Direct / Organic" contain arbitrary punctuation.
#[derive(Debug, Clone, Default)]
pub struct FlowBuilder {
    layers: IndexMap<String, Layer>,
    values: IndexMap<(String, String), u64>,
    rejected: usize,
}

impl FlowBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one row into the aggregation.
    ///
    /// A row missing a label (or carrying an empty one) is dropped and
    /// counted in [`rejected`](Self::rejected); one bad row never aborts
    /// the batch.
    pub fn push_row(&mut self, row: &JourneyRow) {
        let Some((source, method, event_type)) = row.labels() else {
            debug!(?row, "dropping incomplete journey row");
            self.rejected += 1;
            return;
        };
        let outcome = outcome_label(event_type);

        self.register(source, Layer::Source);
        self.register(method, Layer::Method);
        self.register(&outcome, Layer::Outcome);

        self.accumulate(source, method, row.count);
        self.accumulate(method, &outcome, row.count);
    }

    /// Fold a batch of rows into the aggregation
    pub fn push_rows<'a>(&mut self, rows: impl IntoIterator<Item = &'a JourneyRow>) {
        for row in rows {
            self.push_row(row);
        }
    }

    /// Rows dropped so far for missing or empty labels
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Emit the finished graph.
    ///
    /// Nodes are stable-sorted by layer, so discovery order is preserved
    /// within each column; links keep first-contribution order.
    pub fn finish(self) -> FlowGraph {
        let mut nodes: Vec<FlowNode> = self
            .layers
            .into_iter()
            .map(|(id, layer)| FlowNode { id, layer })
            .collect();
        nodes.sort_by_key(|n| n.layer);

        let links = self
            .values
            .into_iter()
            .map(|((source, target), value)| FlowLink {
                source,
                target,
                value,
            })
            .collect();

        FlowGraph { nodes, links }
    }

    fn register(&mut self, label: &str, layer: Layer) {
        if !self.layers.contains_key(label) {
            self.layers.insert(label.to_string(), layer);
        }
    }

    fn accumulate(&mut self, source: &str, target: &str, count: u64) {
        *self
            .values
            .entry((source.to_string(), target.to_string()))
            .or_insert(0) += count;
    }
}

/// Display label for an outcome node.
///
/// Uppercases the first character and preserves the remainder, matching
/// the upstream convention for lowercase event names ("purchase" →
/// "Purchase"). Already-capitalized input passes through unchanged, so
/// "purchase" and "Purchase" collapse to one node; fully uppercase input
/// does not. The remainder is deliberately not lowercased; see the
/// normalization note in DESIGN.md before changing this.
pub fn outcome_label(event_type: &str) -> String {
    let mut chars = event_type.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
