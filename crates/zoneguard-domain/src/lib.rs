//! Pure policy evaluation (no IO).
//!
//! Input: a validated policy model and a stream of import edges constructed
//! elsewhere. Output: violations + verdict + summary data. Every edge is
//! evaluated independently; the engine holds no state across edges beyond the
//! immutable policy.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;
pub mod zones;

mod engine;
mod fingerprint;
pub mod rules;

#[cfg(test)]
mod proptest;
#[cfg(test)]
pub(crate) mod test_support;

pub use engine::{evaluate, evaluate_edge};
