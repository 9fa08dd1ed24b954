//! End-to-end: JSON export → source → view → renderer JSON
//!
//! Drives the full path a dashboard refresh takes: filter selection
//! lowers into a query, the source produces rows, the view commits a
//! graph, and the graph serializes to the renderer contract.

use std::io::Write;
use std::sync::Arc;

use attriflow::{
    DashboardFilters, FilterAction, FlowGraph, JourneyView, JsonFileSource, ViewState,
};
use serde_json::json;
use tempfile::NamedTempFile;

fn journey_export() -> NamedTempFile {
    let body = json!([
        {"source": "Tracking Link", "method": "Coupon Code", "event_type": "purchase", "count": 42},
        {"source": "Tracking Link", "method": "Ref Code", "event_type": "purchase", "count": 17},
        {"source": "Direct / Organic", "method": "Coupon Code", "event_type": "signup", "count": 9},
        {"method": "Ref Code", "event_type": "purchase", "count": 3}
    ]);
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", body).unwrap();
    file
}

#[tokio::test]
async fn refresh_builds_renderer_ready_graph_from_export() {
    let file = journey_export();

    let mut filters = DashboardFilters::new();
    filters.apply(FilterAction::SelectAdvertiser(7));
    filters.apply(FilterAction::SelectCampaign(Some(12)));

    let view = JourneyView::new(Arc::new(JsonFileSource::new(file.path())));
    let state = view.refresh(&filters.query()).await.unwrap();

    let graph = state.graph().expect("graph should be ready");

    // The partial row is dropped; the rest aggregate.
    assert_eq!(graph.nodes.len(), 2 + 2 + 2);
    assert_eq!(graph.total_flow(), 2 * (42 + 17 + 9));

    // Renderer contract: integer layers, nodes ordered by layer.
    let rendered = serde_json::to_value(graph).unwrap();
    assert_eq!(rendered["nodes"][0]["layer"], 0);
    assert_eq!(
        rendered["nodes"].as_array().unwrap().last().unwrap()["layer"],
        2
    );
    let purchase_edge = rendered["links"]
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["source"] == "Coupon Code" && l["target"] == "Purchase")
        .expect("coupon -> Purchase edge");
    assert_eq!(purchase_edge["value"], 42);
}

#[tokio::test]
async fn empty_export_reads_as_the_empty_state() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[]").unwrap();

    let view = JourneyView::new(Arc::new(JsonFileSource::new(file.path())));
    let state = view.refresh(&DashboardFilters::new().query()).await.unwrap();

    assert_eq!(state, ViewState::Empty);
    assert_eq!(
        attriflow::render::render_state(&state),
        attriflow::render::EMPTY_MESSAGE
    );
}

#[tokio::test]
async fn same_export_rebuilds_an_identical_graph() {
    let file = journey_export();
    let view = JourneyView::new(Arc::new(JsonFileSource::new(file.path())));

    let query = DashboardFilters::new().query();
    let first = view.refresh(&query).await.unwrap();
    let second = view.refresh(&query).await.unwrap();

    let first_graph: &FlowGraph = first.graph().unwrap();
    assert_eq!(first_graph, second.graph().unwrap());
}
