//! Journey row: one aggregated observation from the stats backend

use serde::{Deserialize, Serialize};

/// One row of journey data as returned by the `/stats/journey` endpoint.
///
/// Each row records how many events flowed through a particular
/// (source, method, event_type) triplet within the query window. The
/// backend groups and counts; the row is already an aggregate, not a
/// single event.
///
/// Label fields are optional on the wire. Partial rows do occur in
/// backend exports, and one incomplete row must not abort
/// deserialization of the whole batch; the builder drops it instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyRow {
    /// Acquisition channel, e.g. "Tracking Link" or "Direct / Organic"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Attribution method, e.g. "Coupon Code", "Ref Code", "Unattributed"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Lowercase event name, e.g. "purchase", "signup"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Occurrences of this combination within the query window
    #[serde(default)]
    pub count: u64,
}

impl JourneyRow {
    /// Create a complete row
    pub fn new(
        source: impl Into<String>,
        method: impl Into<String>,
        event_type: impl Into<String>,
        count: u64,
    ) -> Self {
        Self {
            source: Some(source.into()),
            method: Some(method.into()),
            event_type: Some(event_type.into()),
            count,
        }
    }

    /// Borrow the three labels if the row is complete.
    ///
    /// Returns `None` when any label is missing or empty. Empty labels
    /// are rejected so a degenerate ""-node can never enter the graph.
    pub fn labels(&self) -> Option<(&str, &str, &str)> {
        match (&self.source, &self.method, &self.event_type) {
            (Some(source), Some(method), Some(event_type))
                if !source.is_empty() && !method.is_empty() && !event_type.is_empty() =>
            {
                Some((source, method, event_type))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_row_exposes_labels() {
        let row = JourneyRow::new("instagram", "coupon", "purchase", 5);
        assert_eq!(row.labels(), Some(("instagram", "coupon", "purchase")));
    }

    #[test]
    fn missing_field_yields_no_labels() {
        let row = JourneyRow {
            source: None,
            method: Some("coupon".to_string()),
            event_type: Some("purchase".to_string()),
            count: 5,
        };
        assert_eq!(row.labels(), None);
    }

    #[test]
    fn empty_field_yields_no_labels() {
        let row = JourneyRow::new("instagram", "coupon", "", 5);
        assert_eq!(row.labels(), None);
    }

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{"source":"Tracking Link","method":"Coupon Code","event_type":"purchase","count":12}"#;
        let row: JourneyRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.labels(), Some(("Tracking Link", "Coupon Code", "purchase")));
        assert_eq!(row.count, 12);
    }

    #[test]
    fn deserializes_partial_row_without_error() {
        // A row the backend emitted without a method column must still parse
        let json = r#"{"source":"Direct / Organic","event_type":"signup"}"#;
        let row: JourneyRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.method, None);
        assert_eq!(row.count, 0);
        assert_eq!(row.labels(), None);
    }
}
