//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod error;
mod model;
mod resolve;

pub use error::ConfigError;
pub use model::{
    PrivateFilesConfig, RestrictedPathConfig, RuleConfig, ZoneConfig, ZoneguardConfigV1,
    ZonePrivateConfig,
};
pub use resolve::{default_policy, resolve_config, Overrides, ResolvedPolicy};

/// Parse `zoneguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> Result<ZoneguardConfigV1, ConfigError> {
    let cfg: ZoneguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}
