//! MetaValue - Typed scalar values for open metadata mappings
//!
//! Celestial objects and sessions carry a free-form annotation mapping
//! (originating mood, duration, task linkage, seed markers). The value side
//! is a closed set of scalars rather than an untyped blob.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Open annotation mapping attached to domain records
pub type Metadata = BTreeMap<String, MetaValue>;

/// A single metadata scalar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum MetaValue {
    Bool(bool),
    Number(f64),
    Timestamp(DateTime<Utc>),
    String(String),
}

impl From<bool> for MetaValue {
    fn from(v: bool) -> Self {
        MetaValue::Bool(v)
    }
}

impl From<f64> for MetaValue {
    fn from(v: f64) -> Self {
        MetaValue::Number(v)
    }
}

impl From<DateTime<Utc>> for MetaValue {
    fn from(v: DateTime<Utc>) -> Self {
        MetaValue::Timestamp(v)
    }
}

impl From<&str> for MetaValue {
    fn from(v: &str) -> Self {
        MetaValue::String(v.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(v: String) -> Self {
        MetaValue::String(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_serialization() {
        let mut meta = Metadata::new();
        meta.insert("duration_minutes".to_string(), MetaValue::Number(45.0));
        meta.insert("mood".to_string(), MetaValue::from("focus"));
        meta.insert("seed".to_string(), MetaValue::Bool(true));

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["duration_minutes"], 45.0);
        assert_eq!(json["mood"], "focus");
        assert_eq!(json["seed"], true);
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut meta = Metadata::new();
        meta.insert("task_id".to_string(), MetaValue::from("abc-123"));
        meta.insert("minutes".to_string(), MetaValue::Number(7.5));

        let json = serde_json::to_string(&meta).unwrap();
        let back: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meta);
    }
}
