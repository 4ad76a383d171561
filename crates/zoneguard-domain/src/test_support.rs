use crate::model::{ImportEdge, PolicyModel, RestrictedPath, Zone, ZonePrivateRule};
use crate::policy::{EffectiveConfig, FailOn, RulePolicy};
use regex::Regex;
use std::collections::BTreeMap;
use zoneguard_types::{ids, Severity, SourcePath};

pub fn zone(name: &str, paths: &[&str], uses: &[&str]) -> Zone {
    Zone {
        name: name.to_string(),
        paths: paths.iter().map(SourcePath::new).collect(),
        uses: uses.iter().map(SourcePath::new).collect(),
    }
}

pub fn restricted(root: &str, allow_from: &[&str]) -> RestrictedPath {
    RestrictedPath {
        root: SourcePath::new(root),
        allow_from: allow_from.iter().map(SourcePath::new).collect(),
    }
}

pub fn zone_private_rule(name: &str, src: &[&str], patterns: &[&str]) -> ZonePrivateRule {
    ZonePrivateRule {
        name: name.to_string(),
        src: src.iter().map(SourcePath::new).collect(),
        patterns: compile_patterns(patterns),
    }
}

pub fn compile_patterns(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("test pattern"))
        .collect()
}

pub fn edge(source_file: &str, specifier: &str) -> ImportEdge {
    ImportEdge::resolve(SourcePath::new(source_file), specifier, Some(1), None)
}

pub fn model_with_zones(zones: Vec<Zone>) -> PolicyModel {
    PolicyModel {
        base: SourcePath::new("/"),
        zones,
        ..PolicyModel::default()
    }
}

pub fn config_with_rule(rule_id: &str, severity: Severity) -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    rules.insert(rule_id.to_string(), RulePolicy::enabled(severity));
    EffectiveConfig {
        fail_on: FailOn::Error,
        max_findings: 200,
        rules,
    }
}

pub fn config_all_rules(severity: Severity) -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    for rule_id in [
        ids::RULE_CROSS_ZONE,
        ids::RULE_RESTRICTED_PATH,
        ids::RULE_DIRECTORY_PRIVATE,
        ids::RULE_ZONE_PRIVATE,
    ] {
        rules.insert(rule_id.to_string(), RulePolicy::enabled(severity));
    }
    EffectiveConfig {
        fail_on: FailOn::Error,
        max_findings: 200,
        rules,
    }
}
