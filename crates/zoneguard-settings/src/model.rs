use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `zoneguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
/// Validation happens at resolution time, before any edge is evaluated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ZoneguardConfigV1 {
    /// Optional schema string for tooling (`zoneguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// When to fail the check: `error` (default) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many violations to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Named zones: directory roots plus the roots they may import from.
    #[serde(default)]
    pub zones: Vec<ZoneConfig>,

    /// Default-deny roots with source-side whitelists.
    #[serde(default)]
    pub restricted_paths: Vec<RestrictedPathConfig>,

    /// Basename patterns marking files as private to their own directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_files: Option<PrivateFilesConfig>,

    /// Files private to a named multi-root scope.
    #[serde(default)]
    pub zone_private: Vec<ZonePrivateConfig>,

    /// Map of rule_id -> config.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ZoneConfig {
    pub name: String,

    /// Directory roots belonging to this zone, relative to the base path.
    #[serde(default)]
    pub paths: Vec<String>,

    /// Roots this zone may import from. The zone's own `paths` are always
    /// allowed implicitly.
    #[serde(default)]
    pub uses: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RestrictedPathConfig {
    /// The restricted directory or file, relative to the base path.
    pub path: String,

    /// Source roots that may still import from it.
    #[serde(default)]
    pub allow_from: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PrivateFilesConfig {
    /// Regexes matched against basenames only.
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ZonePrivateConfig {
    pub name: String,

    /// Roots forming the private scope, relative to the base path.
    #[serde(default)]
    pub src: Vec<String>,

    /// Regexes matched against basenames only.
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Override the default enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Override the default severity: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}
