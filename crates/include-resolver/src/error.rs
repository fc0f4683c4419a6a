//! Error types for include-resolver

use thiserror::Error;

/// Errors produced by the include-directory resolution pipeline.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The diagnostic output did not contain both search-list sentinels.
    /// Almost always a compiler-version or output-format mismatch, so the
    /// raw output is carried for diagnosis.
    #[error("diagnostic output missing search-list delimiters:\n{output}")]
    DelimiterNotFound { output: String },

    /// The probe itself failed.
    #[error("toolchain probe failed: {0}")]
    Probe(#[from] compiler_probe::ProbeError),
}

/// Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_not_found_carries_raw_output() {
        let err = ResolveError::DelimiterNotFound {
            output: "clang: unexpected banner".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("search-list delimiters"));
        assert!(msg.contains("unexpected banner"));
    }

    #[test]
    fn test_probe_error_converts() {
        let probe = compiler_probe::ProbeError::ProbeFailed {
            exit_code: 1,
            output: "cc1 crashed".to_string(),
        };
        let err: ResolveError = probe.into();
        assert!(err.to_string().contains("toolchain probe failed"));
        assert!(err.to_string().contains("cc1 crashed"));
    }
}
