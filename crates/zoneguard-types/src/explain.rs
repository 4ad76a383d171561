//! Explain registry for rules and codes.
//!
//! Maps rule IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would trigger a violation.
    pub before: &'static str,
    /// Code that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try rule_id first, then code
    match identifier {
        // Rule IDs
        ids::RULE_CROSS_ZONE => Some(explain_cross_zone()),
        ids::RULE_RESTRICTED_PATH => Some(explain_restricted_path()),
        ids::RULE_DIRECTORY_PRIVATE => Some(explain_directory_private()),
        ids::RULE_ZONE_PRIVATE => Some(explain_zone_private()),

        // Codes
        ids::CODE_ZONE_BOUNDARY => Some(explain_zone_boundary()),
        ids::CODE_OUTSIDE_WHITELIST => Some(explain_outside_whitelist()),
        ids::CODE_PRIVATE_FILE => Some(explain_private_file()),
        ids::CODE_ZONE_PRIVATE_FILE => Some(explain_zone_private_file()),

        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_CROSS_ZONE,
        ids::RULE_RESTRICTED_PATH,
        ids::RULE_DIRECTORY_PRIVATE,
        ids::RULE_ZONE_PRIVATE,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_ZONE_BOUNDARY,
        ids::CODE_OUTSIDE_WHITELIST,
        ids::CODE_PRIVATE_FILE,
        ids::CODE_ZONE_PRIVATE_FILE,
    ]
}

// --- Rule-level explanations ---

fn explain_cross_zone() -> Explanation {
    Explanation {
        title: "Cross-Zone Import",
        description: "\
Detects imports that cross a zone boundary into a directory the zone is not
allowed to use.

Each zone names a set of directory roots (`paths`) and a set of roots it may
import from (`uses`). A zone may always import from its own `paths`. Every
zone containing the importing file is checked independently, so a file in two
overlapping zones must satisfy both zones' policies.",
        remediation: "\
Either move the imported module into one of the zone's allowed roots, or add
its root to the zone's `uses` list:

    [[zones]]
    name = \"ui\"
    paths = [\"src/ui\"]
    uses = [\"src/shared\", \"src/data\"]

Prefer importing through a shared root over widening `uses` ad hoc.",
        examples: ExamplePair {
            before: r#"// in src/ui/App.ts, with zone ui: uses = ["src/shared"]
import { db } from "../data/db""#,
            after: r#"// in src/ui/App.ts
import { records } from "../shared/records""#,
        },
    }
}

fn explain_restricted_path() -> Explanation {
    Explanation {
        title: "Restricted Path",
        description: "\
Detects imports from a restricted directory by files outside its whitelist.

A restricted path is a global default-deny over one directory or file: only
files located under one of the whitelisted roots may import from it. The rule
applies regardless of zone membership.",
        remediation: "\
Import the module from a whitelisted location, or extend the entry's
`allow_from` list if the new call site is legitimate:

    [[restricted_paths]]
    path = \"src/internal\"
    allow_from = [\"src/core\", \"src/platform\"]",
        examples: ExamplePair {
            before: r#"// in src/feature/a.ts, with src/internal whitelisted to src/core
import { secrets } from "../internal/secrets""#,
            after: r#"// in src/core/a.ts
import { secrets } from "../internal/secrets""#,
        },
    }
}

fn explain_directory_private() -> Explanation {
    Explanation {
        title: "Directory-Private Import",
        description: "\
Detects imports of files whose basename marks them as private to their own
directory subtree.

A filename matching one of the configured patterns (for example
`\\.private\\.`) may only be imported by files living in or below the
directory that holds it. Only the basename is matched, never the full path.",
        remediation: "\
Move the importer into the private file's subtree, re-export the needed
surface from a non-private module next to it, or rename the file if it was
never meant to be private.",
        examples: ExamplePair {
            before: r#"// in src/orders/view.ts
import { impl } from "../cart/state.private""#,
            after: r#"// in src/cart/checkout/pay.ts
import { impl } from "../state.private""#,
        },
    }
}

fn explain_zone_private() -> Explanation {
    Explanation {
        title: "Zone-Private Import",
        description: "\
Detects imports of files that are private to a logical module spanning one or
more directory roots.

When a file's basename matches one of the entry's patterns and its resolved
path lies under one of the entry's `src` roots, only files that also live
under that same `src` set may import it. This generalizes the
directory-private rule from a physical directory to a named multi-root scope.",
        remediation: "\
Import from within the module's `src` roots, or expose the functionality
through the module's public surface instead of its internal files:

    [[zone_private]]
    name = \"payments\"
    src = [\"src/payments\", \"src/billing\"]
    patterns = [\"\\\\.internal\\\\.\"]",
        examples: ExamplePair {
            before: r#"// in src/ui/App.ts
import { ledger } from "../payments/ledger.internal""#,
            after: r#"// in src/billing/invoice.ts
import { ledger } from "../payments/ledger.internal""#,
        },
    }
}

// --- Code-level explanations ---

fn explain_zone_boundary() -> Explanation {
    let mut exp = explain_cross_zone();
    exp.title = "Zone Boundary Breach";
    exp
}

fn explain_outside_whitelist() -> Explanation {
    let mut exp = explain_restricted_path();
    exp.title = "Import Outside Whitelist";
    exp
}

fn explain_private_file() -> Explanation {
    let mut exp = explain_directory_private();
    exp.title = "Private File Import";
    exp
}

fn explain_zone_private_file() -> Explanation {
    let mut exp = explain_zone_private();
    exp.title = "Zone-Private File Import";
    exp
}
