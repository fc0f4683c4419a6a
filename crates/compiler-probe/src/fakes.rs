//! Canned invokers for testing (no real toolchain required)
//!
//! Provides `FixedInvoker` and `FailingInvoker` that satisfy the
//! [`CompilerInvoker`] contract without spawning any process.

use async_trait::async_trait;

use crate::error::{ProbeError, Result};
use crate::invoker::{CompilerInvoker, DiagnosticOutput};
use crate::spec::ProbeSpec;

/// Invoker that returns the same diagnostic output for every probe.
#[derive(Debug, Clone)]
pub struct FixedInvoker {
    output: DiagnosticOutput,
}

impl FixedInvoker {
    pub fn new(output: DiagnosticOutput) -> Self {
        Self { output }
    }

    /// Canned output with the given stderr text, the stream GCC-compatible
    /// drivers print their search list on.
    pub fn from_stderr(stderr: impl Into<String>) -> Self {
        Self::new(DiagnosticOutput {
            stdout: String::new(),
            stderr: stderr.into(),
            exit_code: 0,
        })
    }
}

#[async_trait]
impl CompilerInvoker for FixedInvoker {
    async fn capture_diagnostics(&self, _spec: &ProbeSpec) -> Result<DiagnosticOutput> {
        Ok(self.output.clone())
    }
}

/// Invoker whose probes always fail with `ProbeFailed`.
#[derive(Debug, Clone)]
pub struct FailingInvoker {
    exit_code: i32,
    output: String,
}

impl FailingInvoker {
    pub fn new(exit_code: i32, output: impl Into<String>) -> Self {
        Self {
            exit_code,
            output: output.into(),
        }
    }
}

#[async_trait]
impl CompilerInvoker for FailingInvoker {
    async fn capture_diagnostics(&self, _spec: &ProbeSpec) -> Result<DiagnosticOutput> {
        Err(ProbeError::ProbeFailed {
            exit_code: self.exit_code,
            output: self.output.clone(),
        })
    }
}
