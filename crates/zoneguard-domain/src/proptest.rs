//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Path normalization and the ancestor-or-self boundary
//! - Evaluation determinism and ordering

use crate::engine::evaluate;
use crate::model::ImportEdge;
use crate::test_support::{config_all_rules, model_with_zones, zone};
use proptest::prelude::*;
use zoneguard_types::{Severity, SourcePath};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for a single path segment (no separators, no dots).
fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_-]{0,11}").unwrap()
}

/// Strategy for an absolute path with 1..=5 segments.
fn arb_abs_path() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..=5).prop_map(|segs| format!("/{}", segs.join("/")))
}

/// Strategy for a messy spelling of a path: redundant `.` segments, doubled
/// separators, backslashes. Normalization must erase the mess.
fn arb_messy_spelling() -> impl Strategy<Value = (String, String)> {
    (prop::collection::vec(arb_segment(), 1..=4), any::<u8>()).prop_map(|(segs, salt)| {
        let clean = format!("/{}", segs.join("/"));
        let mut messy = String::new();
        for (i, seg) in segs.iter().enumerate() {
            messy.push(if salt.is_multiple_of(2) && i == 0 { '\\' } else { '/' });
            if salt.is_multiple_of(3) {
                messy.push_str("./");
            }
            messy.push_str(seg);
            if salt.is_multiple_of(5) && i + 1 < segs.len() {
                messy.push('/');
            }
        }
        (clean, messy)
    })
}

// ============================================================================
// Property tests: normalization
// ============================================================================

proptest! {
    /// Normalization is idempotent: re-normalizing a canonical path is a no-op.
    #[test]
    fn normalization_is_idempotent(path in arb_abs_path()) {
        let once = SourcePath::new(&path);
        let twice = SourcePath::new(once.as_str());
        prop_assert_eq!(once, twice);
    }

    /// Messy spellings collapse to the clean canonical form.
    #[test]
    fn messy_spellings_normalize_to_canonical((clean, messy) in arb_messy_spelling()) {
        let normalized = SourcePath::new(&messy);
        prop_assert_eq!(normalized.as_str(), clean.as_str());
    }

    /// Resolving `..` out of a directory and back in is the identity.
    #[test]
    fn dot_dot_round_trip(path in arb_abs_path(), seg in arb_segment()) {
        let base = SourcePath::new(&path);
        let round_tripped = SourcePath::resolve(&base, &format!("{seg}/../"));
        prop_assert_eq!(base, round_tripped);
    }
}

// ============================================================================
// Property tests: ancestor-or-self boundary
// ============================================================================

proptest! {
    /// A path is always its own ancestor, and an ancestor of any extension
    /// at a separator boundary.
    #[test]
    fn ancestor_holds_for_self_and_children(root in arb_abs_path(), seg in arb_segment()) {
        let root = SourcePath::new(&root);
        let child = SourcePath::new(format!("{}/{}", root.as_str(), seg));
        prop_assert!(root.is_ancestor_or_self(&root));
        prop_assert!(root.is_ancestor_or_self(&child));
    }

    /// Extending the last segment without a separator never creates an
    /// ancestor relationship: `/src/com` is not an ancestor of `/src/common`.
    #[test]
    fn ancestor_requires_separator_boundary(root in arb_abs_path(), suffix in arb_segment()) {
        let root = SourcePath::new(&root);
        let sibling = SourcePath::new(format!("{}{}", root.as_str(), suffix));
        prop_assert!(!root.is_ancestor_or_self(&sibling));

        let nested_sibling = SourcePath::new(format!("{}{}/x", root.as_str(), suffix));
        prop_assert!(!root.is_ancestor_or_self(&nested_sibling));
    }

    /// Ancestor-or-self is antisymmetric below the root: a strict child is
    /// never an ancestor of its parent.
    #[test]
    fn strict_child_is_not_an_ancestor(root in arb_abs_path(), seg in arb_segment()) {
        let root = SourcePath::new(&root);
        let child = SourcePath::new(format!("{}/{}", root.as_str(), seg));
        prop_assert!(!child.is_ancestor_or_self(&root));
    }
}

// ============================================================================
// Property tests: engine invariants
// ============================================================================

proptest! {
    /// Same edges, same policy: byte-identical violation sequences.
    #[test]
    fn evaluation_is_deterministic(
        sources in prop::collection::vec(arb_abs_path(), 1..8),
        target in arb_segment(),
    ) {
        let model = model_with_zones(vec![zone("guarded", &["/guarded"], &["/allowed"])]);
        let edges: Vec<ImportEdge> = sources
            .iter()
            .map(|s| ImportEdge::resolve(
                SourcePath::new(format!("/guarded{s}")),
                &format!("/elsewhere/{target}"),
                None,
                None,
            ))
            .collect();
        let cfg = config_all_rules(Severity::Error);

        let first = evaluate(&edges, &model, &cfg);
        let second = evaluate(&edges, &model, &cfg);
        prop_assert_eq!(first.violations, second.violations);
    }

    /// An import into the zone's own paths is never flagged, whatever the
    /// shape of `uses`.
    #[test]
    fn self_imports_are_always_permitted(
        file in arb_segment(),
        uses_root in arb_abs_path(),
    ) {
        let model = model_with_zones(vec![zone("z", &["/zone"], &[uses_root.as_str()])]);
        let edges = vec![ImportEdge::resolve(
            SourcePath::new(format!("/zone/a/{file}.x")),
            "../sibling.x",
            None,
            None,
        )];
        let cfg = config_all_rules(Severity::Error);

        let report = evaluate(&edges, &model, &cfg);
        prop_assert!(report.violations.is_empty(), "got {:?}", report.violations);
    }

    /// Emitted violations never exceed max_findings, and the totals add up.
    #[test]
    fn truncation_respects_max_findings(
        n_edges in 1usize..30,
        max_findings in 1usize..40,
    ) {
        let model = model_with_zones(vec![zone("z", &["/zone"], &[])]);
        let edges: Vec<ImportEdge> = (0..n_edges)
            .map(|i| ImportEdge::resolve(
                SourcePath::new(format!("/zone/f{i}.x")),
                "/outside/x.x",
                None,
                None,
            ))
            .collect();

        let mut cfg = config_all_rules(Severity::Error);
        cfg.max_findings = max_findings;

        let report = evaluate(&edges, &model, &cfg);
        prop_assert!(report.violations.len() <= max_findings);
        prop_assert_eq!(report.data.violations_total as usize, n_edges);
        prop_assert_eq!(report.data.violations_emitted as usize, report.violations.len());
    }
}
