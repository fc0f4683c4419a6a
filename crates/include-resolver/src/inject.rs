//! Dependency include-directory injection.
//!
//! The surrounding package manager resolves dependency versions and hands
//! this pipeline their install prefixes as one colon-separated string. Each
//! prefix contributes `<prefix>/include`, appended after the compiler's own
//! search path so dependency headers never shadow system headers.

use std::path::Path;

use tracing::debug;

use crate::normalize::{normalize, IncludeDirectory};

/// Environment variable carrying the colon-separated dependency prefixes.
///
/// Reading it is the caller's choice; [`inject`] takes the value explicitly
/// so the pipeline stays pure and testable with canned input.
pub const DEP_PREFIX_ENV: &str = "TOOLSMITH_DEP_PREFIXES";

/// Read [`DEP_PREFIX_ENV`] from the ambient environment.
/// Absent is equivalent to an empty prefix list, never an error.
pub fn dep_prefixes_from_env() -> Option<String> {
    std::env::var(DEP_PREFIX_ENV).ok()
}

/// Append one derived include directory per dependency prefix.
///
/// `prefixes_raw` is a colon-separated prefix list; `None` or empty means
/// no dependencies and returns `defaults` unchanged. Empty segments are
/// skipped silently (tolerated malformed input). Derived directories run
/// through the same [`normalize`] pipeline as compiler defaults and keep
/// the listed prefix order. Existence is not checked; a missing directory
/// simply yields no header matches at compile time.
pub fn inject(
    root: &Path,
    defaults: Vec<IncludeDirectory>,
    prefixes_raw: Option<&str>,
) -> Vec<IncludeDirectory> {
    let raw = match prefixes_raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return defaults,
    };

    let mut dirs = defaults;
    for segment in raw.split(':') {
        let prefix = segment.trim();
        if prefix.is_empty() {
            debug!("skipping empty dependency prefix segment");
            continue;
        }
        let derived = format!("{}/include", prefix.trim_end_matches('/'));
        dirs.push(normalize(root, &derived));
    }

    debug!(total = dirs.len(), "dependency injection complete");
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn root() -> PathBuf {
        PathBuf::from("/workspace/buildroot")
    }

    fn defaults() -> Vec<IncludeDirectory> {
        vec![IncludeDirectory("/usr/include".to_string())]
    }

    #[test]
    fn test_inject_none_is_identity() {
        assert_eq!(inject(&root(), defaults(), None), defaults());
    }

    #[test]
    fn test_inject_empty_string_is_identity() {
        assert_eq!(inject(&root(), defaults(), Some("")), defaults());
    }

    #[test]
    fn test_inject_appends_in_listed_order() {
        let dirs = inject(&root(), defaults(), Some("/a:/b"));
        assert_eq!(
            dirs,
            vec![
                IncludeDirectory("/usr/include".to_string()),
                IncludeDirectory("/a/include".to_string()),
                IncludeDirectory("/b/include".to_string()),
            ]
        );
    }

    #[test]
    fn test_inject_skips_empty_segments() {
        let with_empty = inject(&root(), defaults(), Some("/a::/b"));
        let without = inject(&root(), defaults(), Some("/a:/b"));
        assert_eq!(with_empty, without);
    }

    #[test]
    fn test_dep_prefixes_from_env_reads_variable() {
        // Only this test touches the variable, so no cross-test race.
        std::env::set_var(DEP_PREFIX_ENV, "/opt/a:/opt/b");
        assert_eq!(dep_prefixes_from_env().as_deref(), Some("/opt/a:/opt/b"));
        std::env::remove_var(DEP_PREFIX_ENV);
        assert_eq!(dep_prefixes_from_env(), None);
    }

    #[test]
    fn test_inject_trailing_slash_prefix() {
        let dirs = inject(&root(), vec![], Some("/opt/zlib/"));
        assert_eq!(dirs, vec![IncludeDirectory("/opt/zlib/include".to_string())]);
    }

    #[test]
    fn test_injected_prefixes_are_normalized_like_defaults() {
        // A dependency staged under the build root is rewritten relative,
        // exactly as a compiler-reported path would be.
        let dirs = inject(&root(), vec![], Some("/workspace/buildroot/deps/zlib"));
        assert_eq!(
            dirs,
            vec![IncludeDirectory("deps/zlib/include".to_string())]
        );
    }
}
