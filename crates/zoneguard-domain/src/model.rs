use regex::Regex;
use zoneguard_types::{Location, SourcePath};

/// The validated, in-memory policy. Pure data, read-only after construction.
#[derive(Clone, Debug, Default)]
pub struct PolicyModel {
    /// Root directory configured patterns were resolved against.
    pub base: SourcePath,

    pub zones: Vec<Zone>,
    pub restricted_paths: Vec<RestrictedPath>,

    /// Basename patterns marking a file as private to its own directory.
    pub private_file_patterns: Vec<Regex>,

    pub zone_private_rules: Vec<ZonePrivateRule>,
}

/// A named group of directory roots with an allow-list of import roots.
#[derive(Clone, Debug)]
pub struct Zone {
    pub name: String,
    pub paths: Vec<SourcePath>,
    pub uses: Vec<SourcePath>,
}

impl Zone {
    /// Whether `file` lives under one of this zone's roots.
    pub fn contains(&self, file: &SourcePath) -> bool {
        self.paths.iter().any(|p| p.is_ancestor_or_self(file))
    }

    /// Whether `target` lies under an allowed root. A zone may always import
    /// from its own `paths`, so the effective allow set is `uses` plus `paths`.
    pub fn allows(&self, target: &SourcePath) -> bool {
        self.uses
            .iter()
            .chain(self.paths.iter())
            .any(|u| u.is_ancestor_or_self(target))
    }
}

/// One directory/file that is off-limits to import from, except for files
/// located under one of the whitelist roots.
#[derive(Clone, Debug)]
pub struct RestrictedPath {
    pub root: SourcePath,
    pub allow_from: Vec<SourcePath>,
}

/// Files matching one of `patterns` under one of `src` are private to that
/// `src` set: only files also under `src` may import them.
#[derive(Clone, Debug)]
pub struct ZonePrivateRule {
    pub name: String,
    pub src: Vec<SourcePath>,
    pub patterns: Vec<Regex>,
}

impl ZonePrivateRule {
    pub fn covers(&self, file: &SourcePath) -> bool {
        self.src.iter().any(|s| s.is_ancestor_or_self(file))
    }
}

/// The unit of work fed to every evaluator: one import statement, already
/// resolved against its source file's directory.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportEdge {
    pub source_file: SourcePath,
    pub import_specifier: String,
    pub resolved_import: SourcePath,
    pub line: Option<u32>,
    pub col: Option<u32>,
}

impl ImportEdge {
    /// Build an edge by resolving `specifier` against the directory of
    /// `source_file`. No filesystem existence check is performed.
    pub fn resolve(
        source_file: SourcePath,
        specifier: &str,
        line: Option<u32>,
        col: Option<u32>,
    ) -> Self {
        let resolved_import = SourcePath::resolve(&source_file.parent(), specifier);
        ImportEdge {
            source_file,
            import_specifier: specifier.to_string(),
            resolved_import,
            line,
            col,
        }
    }

    pub fn location(&self) -> Option<Location> {
        if self.line.is_none() && self.col.is_none() {
            return None;
        }
        Some(Location {
            line: self.line,
            col: self.col,
        })
    }
}
