//! Node and link types for the attribution flow graph

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Column position of a node in the flow diagram.
///
/// Serializes as the plain integer the renderer expects: 0 (source),
/// 1 (method), 2 (outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    /// Acquisition channel column
    Source,
    /// Attribution method column
    Method,
    /// Event outcome column
    Outcome,
}

impl Layer {
    /// Integer position of this layer (0, 1, or 2)
    pub fn index(self) -> u8 {
        match self {
            Layer::Source => 0,
            Layer::Method => 1,
            Layer::Outcome => 2,
        }
    }

    /// Layer for an integer position, if valid
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Layer::Source),
            1 => Some(Layer::Method),
            2 => Some(Layer::Outcome),
            _ => None,
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl Serialize for Layer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index())
    }
}

impl<'de> Deserialize<'de> for Layer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = u8::deserialize(deserializer)?;
        Layer::from_index(index)
            .ok_or_else(|| de::Error::custom(format!("invalid layer index: {}", index)))
    }
}

/// A node in the flow graph
///
/// Identity is the display label. The layer is assigned on first
/// discovery and never overwritten; it positions the rendered column
/// and selects the node color, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    /// Display label, unique across the graph
    pub id: String,
    /// Column position (0 = source, 1 = method, 2 = outcome)
    pub layer: Layer,
}

/// A directed edge between two labeled nodes
///
/// The value is the sum of `count` over every input row that produced
/// this (source, target) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowLink {
    /// Label of the upstream node
    pub source: String,
    /// Label of the downstream node
    pub target: String,
    /// Aggregated event count
    pub value: u64,
}
