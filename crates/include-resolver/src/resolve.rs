//! Pipeline orchestration: probe, parse, normalize, inject.

use std::collections::HashSet;
use std::path::PathBuf;

use compiler_probe::{CompilerInvoker, ProbeSpec};
use tracing::{debug, info};

use crate::error::Result;
use crate::inject::inject;
use crate::normalize::{normalize, IncludeDirectory};
use crate::parse::extract;

/// Resolves the ordered include-directory list for one toolchain.
///
/// Stateless across runs; the surrounding build system may configure
/// multiple toolchains concurrently, each with its own resolver.
pub struct IncludeResolver<I> {
    invoker: I,
    root: PathBuf,
}

impl<I: CompilerInvoker> IncludeResolver<I> {
    /// Create a resolver rooted at the build system's execution root.
    pub fn new(invoker: I, root: impl Into<PathBuf>) -> Self {
        IncludeResolver {
            invoker,
            root: root.into(),
        }
    }

    /// Resolve the final include-directory sequence for generated rules.
    ///
    /// Compiler defaults come first, in reported order, then one
    /// `<prefix>/include` per dependency prefix in listed order. The result
    /// is deduplicated order-preserving (first occurrence wins) and every
    /// entry has been through the same normalization pipeline.
    pub async fn resolve(
        &self,
        spec: &ProbeSpec,
        dep_prefixes: Option<&str>,
    ) -> Result<Vec<IncludeDirectory>> {
        let diagnostics = self.invoker.capture_diagnostics(spec).await?;
        let raw_paths = extract(&diagnostics.text())?;

        let defaults = raw_paths
            .iter()
            .map(|raw| normalize(&self.root, raw))
            .collect();

        let dirs = dedup_preserving(inject(&self.root, defaults, dep_prefixes));

        info!(
            compiler = %spec.compiler.display(),
            count = dirs.len(),
            "resolved include directories"
        );
        Ok(dirs)
    }
}

/// Drop duplicate entries, keeping the first (highest-precedence) occurrence.
fn dedup_preserving(dirs: Vec<IncludeDirectory>) -> Vec<IncludeDirectory> {
    let before = dirs.len();
    let mut seen = HashSet::new();
    let deduped: Vec<IncludeDirectory> =
        dirs.into_iter().filter(|d| seen.insert(d.clone())).collect();

    if deduped.len() < before {
        debug!(dropped = before - deduped.len(), "deduplicated include directories");
    }
    deduped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirs(paths: &[&str]) -> Vec<IncludeDirectory> {
        paths
            .iter()
            .map(|p| IncludeDirectory((*p).to_string()))
            .collect()
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let deduped = dedup_preserving(dirs(&["/usr/include", "/a/include", "/usr/include"]));
        assert_eq!(deduped, dirs(&["/usr/include", "/a/include"]));
    }

    #[test]
    fn test_dedup_no_duplicates_is_identity() {
        let input = dirs(&["/a", "/b", "/c"]);
        assert_eq!(dedup_preserving(input.clone()), input);
    }
}
