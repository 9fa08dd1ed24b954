//! Rendering support for the flow graph
//!
//! Colors and legend copy are a presentation concern layered on top of
//! the core contract; only the layer integer travels with the graph
//! data. The plain-text renderer here backs the CLI summary and stands
//! in for the graphical Sankey, which is out of scope.

use crate::flow::{FlowGraph, Layer};
use crate::view::ViewState;

/// Copy shown while a fetch is outstanding
pub const LOADING_MESSAGE: &str = "Loading journey data...";

/// Copy shown when the window holds no rows
pub const EMPTY_MESSAGE: &str = "No journey data available for this period";

/// Node color for a layer, as the dashboard renders it
pub fn layer_color(layer: Layer) -> &'static str {
    match layer {
        Layer::Source => "#3b82f6",
        Layer::Method => "#a855f7",
        Layer::Outcome => "#10b981",
    }
}

/// Legend label for a layer
pub fn layer_label(layer: Layer) -> &'static str {
    match layer {
        Layer::Source => "Traffic Source",
        Layer::Method => "Attribution Method",
        Layer::Outcome => "Event Outcome",
    }
}

/// Render a view state as plain text
pub fn render_state(state: &ViewState) -> String {
    match state {
        ViewState::Loading => LOADING_MESSAGE.to_string(),
        ViewState::Empty => EMPTY_MESSAGE.to_string(),
        ViewState::Ready(graph) => render_summary(graph),
    }
}

/// Plain-text summary: per-layer node counts followed by the link table
pub fn render_summary(graph: &FlowGraph) -> String {
    let mut out = String::new();

    for layer in [Layer::Source, Layer::Method, Layer::Outcome] {
        out.push_str(&format!(
            "{:<20} {:>4} nodes\n",
            layer_label(layer),
            graph.layer_count(layer)
        ));
    }

    out.push('\n');
    out.push_str(&format!("{:<28} {:<28} {:>8}\n", "SOURCE", "TARGET", "VALUE"));
    out.push_str(&format!("{}\n", "-".repeat(66)));
    for link in &graph.links {
        out.push_str(&format!(
            "{:<28} {:<28} {:>8}\n",
            link.source, link.target, link.value
        ));
    }
    out.push_str(&format!("\nTotal flow: {}\n", graph.total_flow()));

    out
}
