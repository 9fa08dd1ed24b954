//! Attriflow: Attribution Journey Aggregation Engine
//!
//! Turns flat attribution event rows from an influencer-marketing stats
//! backend into the deduplicated, layered flow graph a Sankey-style
//! renderer consumes.
//!
//! # Core Concepts
//!
//! - **Rows**: Aggregated (source, method, outcome) observations scoped
//!   to a query window
//! - **Flow graph**: Three layers (source → method → outcome) with edge
//!   weights summed across contributing rows
//! - **Views**: Last-request-wins sequencing between a row source and
//!   the renderer
//!
//! # Example
//!
//! ```
//! use attriflow::{FlowGraph, JourneyRow};
//!
//! let rows = vec![JourneyRow::new("instagram", "coupon", "purchase", 5)];
//! let graph = FlowGraph::from_rows(&rows);
//! assert_eq!(graph.nodes.len(), 3);
//! ```

mod flow;
pub mod query;
pub mod render;
pub mod source;
mod view;

pub use flow::{outcome_label, FlowBuilder, FlowGraph, FlowLink, FlowNode, JourneyRow, Layer};
pub use query::{DashboardFilters, FilterAction, StatsQuery};
pub use source::{JourneySource, JsonFileSource, SourceError, SourceResult, StaticSource};
pub use view::{JourneyView, ViewError, ViewResult, ViewState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
