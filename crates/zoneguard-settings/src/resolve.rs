use crate::error::ConfigError;
use crate::model::ZoneguardConfigV1;
use regex::Regex;
use std::collections::BTreeMap;
use zoneguard_domain::model::{PolicyModel, RestrictedPath, Zone, ZonePrivateRule};
use zoneguard_domain::policy::{EffectiveConfig, FailOn, RulePolicy};
use zoneguard_types::{ids, Severity, SourcePath};

/// CLI-level overrides applied on top of the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub fail_on: Option<String>,
    pub max_findings: Option<u32>,
}

/// The resolved, validated policy: the immutable model the engine consumes
/// plus the effective per-rule configuration.
#[derive(Clone, Debug)]
pub struct ResolvedPolicy {
    pub model: PolicyModel,
    pub effective: EffectiveConfig,
}

/// Resolve a parsed config against `base` into the engine's policy.
///
/// Fails fast: a single malformed pattern rejects the whole configuration.
pub fn resolve_config(
    cfg: ZoneguardConfigV1,
    base: &SourcePath,
    overrides: Overrides,
) -> Result<ResolvedPolicy, ConfigError> {
    if !base.is_absolute() {
        return Err(ConfigError::RelativeBase(base.as_str().to_string()));
    }

    let mut effective = default_policy();

    // per-rule overrides
    for (rule_id, rc) in cfg.rules.iter() {
        let entry = effective
            .rules
            .entry(rule_id.clone())
            .or_insert_with(RulePolicy::disabled);

        if let Some(enabled) = rc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = rc.severity.as_deref() {
            entry.severity = parse_severity(sev)?;
        }
    }

    if let Some(fail_on_s) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    let zones = cfg
        .zones
        .iter()
        .map(|z| Zone {
            name: z.name.clone(),
            paths: resolve_roots(base, &z.paths),
            uses: resolve_roots(base, &z.uses),
        })
        .collect();

    let restricted_paths = cfg
        .restricted_paths
        .iter()
        .map(|r| RestrictedPath {
            root: SourcePath::resolve(base, &r.path),
            allow_from: resolve_roots(base, &r.allow_from),
        })
        .collect();

    let private_file_patterns = match &cfg.private_files {
        Some(pf) => compile_patterns("private_files", &pf.patterns)?,
        None => Vec::new(),
    };

    let zone_private_rules = cfg
        .zone_private
        .iter()
        .map(|zp| {
            Ok(ZonePrivateRule {
                name: zp.name.clone(),
                src: resolve_roots(base, &zp.src),
                patterns: compile_patterns(&format!("zone_private '{}'", zp.name), &zp.patterns)?,
            })
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    let model = PolicyModel {
        base: base.clone(),
        zones,
        restricted_paths,
        private_file_patterns,
        zone_private_rules,
    };

    Ok(ResolvedPolicy { model, effective })
}

/// All four rules enabled at `error`, failing on errors, 200 violations max.
pub fn default_policy() -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    for rule_id in [
        ids::RULE_CROSS_ZONE,
        ids::RULE_RESTRICTED_PATH,
        ids::RULE_DIRECTORY_PRIVATE,
        ids::RULE_ZONE_PRIVATE,
    ] {
        rules.insert(rule_id.to_string(), RulePolicy::enabled(Severity::Error));
    }
    EffectiveConfig {
        fail_on: FailOn::Error,
        max_findings: 200,
        rules,
    }
}

fn resolve_roots(base: &SourcePath, patterns: &[String]) -> Vec<SourcePath> {
    patterns.iter().map(|p| SourcePath::resolve(base, p)).collect()
}

fn compile_patterns(context: &str, patterns: &[String]) -> Result<Vec<Regex>, ConfigError> {
    patterns
        .iter()
        .map(|p| {
            Regex::new(p).map_err(|source| ConfigError::InvalidPattern {
                context: context.to_string(),
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

fn parse_severity(v: &str) -> Result<Severity, ConfigError> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => Err(ConfigError::UnknownSeverity(other.to_string())),
    }
}

fn parse_fail_on(v: &str) -> Result<FailOn, ConfigError> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => Err(ConfigError::UnknownFailOn(other.to_string())),
    }
}
