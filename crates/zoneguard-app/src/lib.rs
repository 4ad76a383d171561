//! Use case orchestration for zoneguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, domain, and render layers. It is intentionally thin and delegates
//! heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod edges;
mod explain;
mod render;
mod report;

pub use check::{run_check, verdict_exit_code, CheckInput, CheckOutput};
pub use edges::{parse_edges_json, EdgeFileV1, EdgeRecord};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use render::{
    parse_report_json, render_annotations, render_markdown, serialize_report, to_renderable,
};
pub use report::runtime_error_report;
