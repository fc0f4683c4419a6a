//! Probe specification: which compiler to invoke, and how.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default deadline for a single probe invocation, in seconds.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 30;

/// Flags that make a GCC-compatible driver print its header search list
/// without compiling anything: preprocess an empty translation unit and
/// let cpp report its state on stderr.
pub fn gcc_default_flags() -> Vec<String> {
    ["-E", "-Wp,-v", "-xc", "/dev/null"]
        .iter()
        .map(|f| (*f).to_string())
        .collect()
}

/// Specification of one compiler probe invocation.
///
/// Supplied by the caller that owns toolchain selection; this crate only
/// executes it. `timeout_secs == 0` disables the deadline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeSpec {
    /// Path to the compiler executable.
    pub compiler: PathBuf,

    /// Probing flags, passed verbatim.
    pub flags: Vec<String>,

    /// Deadline in seconds.
    pub timeout_secs: u64,
}

impl ProbeSpec {
    /// Create a probe spec with caller-provided flags.
    pub fn new(compiler: impl Into<PathBuf>, flags: Vec<String>) -> Self {
        ProbeSpec {
            compiler: compiler.into(),
            flags,
            timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
        }
    }

    /// Create a probe spec for a GCC-compatible driver (gcc, clang, icx)
    /// using the standard search-list flags.
    pub fn gcc_compatible(compiler: impl Into<PathBuf>) -> Self {
        Self::new(compiler, gcc_default_flags())
    }

    /// Override the probe deadline.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
