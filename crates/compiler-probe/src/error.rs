//! Error types for compiler-probe

use thiserror::Error;

/// Errors that can occur while probing a compiler.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The compiler process could not be started at all (missing binary,
    /// permission problem).
    #[error("failed to spawn compiler {compiler}: {source}")]
    Spawn {
        compiler: String,
        #[source]
        source: std::io::Error,
    },

    /// The probe ran past its deadline. Not retryable: a probe is
    /// deterministic for a given binary and flag set.
    #[error("compiler probe {compiler} timed out after {timeout_secs} seconds")]
    Timeout { compiler: String, timeout_secs: u64 },

    /// The compiler exited non-zero. The captured output is embedded so a
    /// compiler/version mismatch can be diagnosed from the error alone.
    #[error("compiler probe exited with status {exit_code}:\n{output}")]
    ProbeFailed { exit_code: i32, output: String },

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;
