//! Reading edge lists from JSON files.
//!
//! Accepted shapes: a top-level array of edge objects, or an object holding
//! such an array under `links` or `edges`. Endpoints may be strings, numbers,
//! or node objects carrying an `id`; they are all compared as strings. Any
//! other field on an edge object is ignored.

use std::path::Path;

use serde_json::Value;

use crate::types::{GraphError, GraphResult, PathStep};

/// Read and parse an edge list file.
pub fn read_edge_list(path: &Path) -> GraphResult<Vec<PathStep<String>>> {
    let data = std::fs::read_to_string(path)?;
    parse_edge_list(&data)
}

/// Parse an edge list from JSON text.
pub fn parse_edge_list(data: &str) -> GraphResult<Vec<PathStep<String>>> {
    let parsed: Value = serde_json::from_str(data)?;

    let records = match &parsed {
        Value::Array(records) => records,
        Value::Object(map) => map
            .get("links")
            .or_else(|| map.get("edges"))
            .and_then(|v| v.as_array())
            .ok_or_else(|| GraphError::Json("expected a `links` or `edges` array".into()))?,
        _ => return Err(GraphError::Json("expected an array of edges".into())),
    };

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let source = record.get("source").and_then(endpoint_key);
            let target = record.get("target").and_then(endpoint_key);
            match (source, target) {
                (Some(source), Some(target)) => Ok(PathStep::new(source, target)),
                _ => Err(GraphError::MalformedEdge(index)),
            }
        })
        .collect()
}

/// String key for an endpoint value.
fn endpoint_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map.get("id").and_then(endpoint_key),
        _ => None,
    }
}
