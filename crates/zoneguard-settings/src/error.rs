use thiserror::Error;

/// Errors raised while parsing or resolving configuration.
///
/// All of these fail the whole configuration load: no partial policy is ever
/// evaluated.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML text did not match the config schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A filename pattern failed to compile.
    #[error("invalid filename pattern '{pattern}' in {context}: {source}")]
    InvalidPattern {
        context: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// An unrecognized severity name.
    #[error("unknown severity: {0} (expected info|warning|error)")]
    UnknownSeverity(String),

    /// An unrecognized fail_on value.
    #[error("unknown fail_on: {0} (expected error|warning)")]
    UnknownFailOn(String),

    /// The base path configured patterns resolve against must be absolute.
    #[error("base path must be absolute, got: {0}")]
    RelativeBase(String),
}
