use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical absolute path used in policy patterns, edges, and violations.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - `.` segments dropped, `..` segments collapsed lexically
/// - anchored paths clamp `..` at their root
/// - no trailing slash (except the bare root itself)
/// - purely textual: the filesystem is never consulted
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct SourcePath(String);

impl Default for SourcePath {
    fn default() -> Self {
        SourcePath::new("/")
    }
}

impl SourcePath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let v = s.as_ref().replace('\\', "/");
        Self(canonicalize(&v))
    }

    /// Resolve `specifier` against `base`, like a lexical `path.resolve`.
    ///
    /// An anchored specifier (leading `/` or a drive prefix) replaces the base
    /// entirely; anything else is joined to it before normalization.
    pub fn resolve(base: &SourcePath, specifier: &str) -> SourcePath {
        let spec = specifier.replace('\\', "/");
        if is_anchored(&spec) {
            SourcePath(canonicalize(&spec))
        } else {
            SourcePath(canonicalize(&format!("{}/{}", base.0, spec)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_absolute(&self) -> bool {
        is_anchored(&self.0)
    }

    /// Boundary-aware ancestor test: true iff `target` is `self` or lies
    /// strictly below it at a separator boundary. `/src/com` is NOT an
    /// ancestor of `/src/common/x`.
    pub fn is_ancestor_or_self(&self, target: &SourcePath) -> bool {
        let root = self.0.as_str();
        let t = target.0.as_str();
        if root == t {
            return true;
        }
        if root.ends_with('/') {
            // bare filesystem root ("/" or "C:/")
            return t.starts_with(root);
        }
        t.len() > root.len() && t.starts_with(root) && t.as_bytes()[root.len()] == b'/'
    }

    /// The containing directory. The root is its own parent.
    pub fn parent(&self) -> SourcePath {
        match self.0.rfind('/') {
            Some(0) => SourcePath("/".to_string()),
            Some(idx) => {
                let head = &self.0[..idx];
                if head.len() == 2 && head.as_bytes()[1] == b':' {
                    SourcePath(format!("{head}/"))
                } else {
                    SourcePath(head.to_string())
                }
            }
            None => self.clone(),
        }
    }

    /// The final path segment (basename). Empty for the bare root.
    pub fn file_name(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[idx + 1..],
            None => self.0.as_str(),
        }
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }
}

impl std::fmt::Display for SourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Utf8Path> for SourcePath {
    fn from(value: &Utf8Path) -> Self {
        SourcePath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for SourcePath {
    fn from(value: Utf8PathBuf) -> Self {
        SourcePath::new(value.as_str())
    }
}

fn is_anchored(s: &str) -> bool {
    s.starts_with('/') || (s.len() >= 2 && s.as_bytes()[1] == b':')
}

/// Split off the root anchor, if any: `/` for Unix paths, `X:/` for drive
/// paths. Returns the anchor and the remaining segments.
fn split_anchor(input: &str) -> (Option<&'static str>, &str) {
    if let Some(rest) = input.strip_prefix('/') {
        return (Some("/"), rest);
    }
    if input.len() >= 2 && input.as_bytes()[1] == b':' {
        // The drive letter itself is re-attached by the caller.
        let rest = input[2..].trim_start_matches('/');
        return (Some("drive"), rest);
    }
    (None, input)
}

fn canonicalize(input: &str) -> String {
    let (anchor, rest) = split_anchor(input);
    let drive = if anchor == Some("drive") {
        Some(&input[..2])
    } else {
        None
    };

    let mut stack: Vec<&str> = Vec::new();
    for seg in rest.split('/') {
        match seg {
            "" | "." => {}
            ".." => match stack.last() {
                Some(&"..") => stack.push(".."),
                Some(_) => {
                    stack.pop();
                }
                None => {
                    if anchor.is_none() {
                        stack.push("..");
                    }
                    // anchored paths clamp at the root
                }
            },
            _ => stack.push(seg),
        }
    }

    let body = stack.join("/");
    match (anchor, drive) {
        (Some(_), Some(d)) => {
            if body.is_empty() {
                format!("{d}/")
            } else {
                format!("{d}/{body}")
            }
        }
        (Some(_), None) => {
            if body.is_empty() {
                "/".to_string()
            } else {
                format!("/{body}")
            }
        }
        (None, _) => {
            if body.is_empty() {
                ".".to_string()
            } else {
                body
            }
        }
    }
}
