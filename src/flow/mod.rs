//! Core flow graph: rows in, layered Sankey data out

mod builder;
mod node;
mod row;


pub use builder::{outcome_label, FlowBuilder, FlowGraph};
pub use node::{FlowLink, FlowNode, Layer};
pub use row::JourneyRow;
