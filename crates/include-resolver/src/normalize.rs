//! Path normalization and build-config literal escaping.
//!
//! Raw paths out of compiler diagnostics are not directly embeddable in
//! generated toolchain rules: Apple drivers annotate framework entries,
//! paths under the build root should be written root-relative so generated
//! rules relocate with the workspace, and the generator's double-quoted
//! literal grammar needs quote and backslash escaping.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Annotation Apple toolchains append to framework search entries.
const FRAMEWORK_SUFFIX: &str = "(framework directory)";

/// One canonical include-directory entry, ordered by search precedence.
///
/// Holds the normalized, unescaped path; [`IncludeDirectory::literal`]
/// renders the escaped form for embedding. Keeping escaping at the render
/// boundary makes [`normalize`] idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncludeDirectory(pub String);

impl IncludeDirectory {
    /// The normalized path as a plain string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the path as a double-quoted-literal body for generated
    /// toolchain configuration.
    pub fn literal(&self) -> String {
        escape_literal(&self.0)
    }
}

impl std::fmt::Display for IncludeDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalize a raw diagnostic path into a canonical include directory.
///
/// Steps, in order:
/// 1. Strip the framework-directory annotation, leaving the plain path.
/// 2. Rewrite paths beneath `root` as root-relative; keep others absolute.
///
/// Idempotent: normalizing an already-normalized path is a no-op.
pub fn normalize(root: &Path, raw: &str) -> IncludeDirectory {
    let trimmed = raw.trim();
    let plain = trimmed
        .strip_suffix(FRAMEWORK_SUFFIX)
        .map(str::trim_end)
        .unwrap_or(trimmed);

    let path = Path::new(plain);
    let canonical = match path.strip_prefix(root) {
        // A path equal to the root itself stays absolute.
        Ok(relative) if !relative.as_os_str().is_empty() => {
            relative.to_string_lossy().into_owned()
        }
        _ => plain.to_string(),
    };

    IncludeDirectory(canonical)
}

/// Escape a path for the generator's double-quoted literal grammar:
/// backslash and double-quote are prefixed with a backslash.
pub fn escape_literal(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '\\' || c == '"' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Inverse of [`escape_literal`]: reconstruct the original path from a
/// literal body.
pub fn unescape_literal(literal: &str) -> String {
    let mut path = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                path.push(escaped);
            }
        } else {
            path.push(c);
        }
    }
    path
}
