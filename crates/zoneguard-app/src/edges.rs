//! The `zoneguard.edges.v1` input document: the edge stream produced by an
//! external walker (AST scanner, build-graph exporter, test harness).

use anyhow::Context;
use serde::{Deserialize, Serialize};
use zoneguard_types::SCHEMA_EDGES_V1;

/// One import statement as reported by the edge producer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Absolute path of the importing file. Relative paths are a caller error.
    pub source_file: String,
    /// The import specifier exactly as written in source.
    pub import: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeFileV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// Parse an edge stream document. An unexpected schema string is rejected;
/// a missing one is tolerated.
pub fn parse_edges_json(input: &str) -> anyhow::Result<EdgeFileV1> {
    let file: EdgeFileV1 = serde_json::from_str(input).context("parse edges json")?;
    if let Some(schema) = file.schema.as_deref()
        && schema != SCHEMA_EDGES_V1
    {
        anyhow::bail!("unsupported edges schema: {schema} (expected {SCHEMA_EDGES_V1})");
    }
    Ok(file)
}
