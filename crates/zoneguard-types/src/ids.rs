//! Stable identifiers for rules and violation codes.
//!
//! `rule_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Rules
pub const RULE_CROSS_ZONE: &str = "imports.cross_zone";
pub const RULE_RESTRICTED_PATH: &str = "imports.restricted_path";
pub const RULE_DIRECTORY_PRIVATE: &str = "imports.directory_private";
pub const RULE_ZONE_PRIVATE: &str = "imports.zone_private";

// Codes: imports.cross_zone
pub const CODE_ZONE_BOUNDARY: &str = "zone_boundary";

// Codes: imports.restricted_path
pub const CODE_OUTSIDE_WHITELIST: &str = "outside_whitelist";

// Codes: imports.directory_private
pub const CODE_PRIVATE_FILE: &str = "private_file";

// Codes: imports.zone_private
pub const CODE_ZONE_PRIVATE_FILE: &str = "zone_private_file";

// Tool-level
pub const RULE_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
