//! Probe execution: spawn the compiler, capture its diagnostics.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{ProbeError, Result};
use crate::spec::ProbeSpec;

/// Captured output of one probe invocation.
///
/// Transient: parsed once by the caller and discarded. Both streams are
/// kept because compilers differ on where they print the search list
/// (GCC-compatible drivers use stderr).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticOutput {
    /// Captured stdout.
    pub stdout: String,

    /// Captured stderr.
    pub stderr: String,

    /// Exit code (0 = success).
    pub exit_code: i32,
}

impl DiagnosticOutput {
    /// Merged view of both streams, for parsers that do not care which
    /// stream carried the diagnostics.
    pub fn text(&self) -> String {
        if self.stdout.is_empty() {
            self.stderr.clone()
        } else if self.stderr.is_empty() {
            self.stdout.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Capability seam for compiler probing: given a probe spec, return the
/// diagnostic text the compiler emitted.
///
/// Tests substitute [`crate::fakes::FixedInvoker`] so no real toolchain is
/// needed; production uses [`ProcessInvoker`].
#[async_trait]
pub trait CompilerInvoker: Send + Sync {
    async fn capture_diagnostics(&self, spec: &ProbeSpec) -> Result<DiagnosticOutput>;
}

/// Invoker that runs the real compiler process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessInvoker;

impl ProcessInvoker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompilerInvoker for ProcessInvoker {
    async fn capture_diagnostics(&self, spec: &ProbeSpec) -> Result<DiagnosticOutput> {
        debug!(compiler = %spec.compiler.display(), "probing compiler");

        let child = Command::new(&spec.compiler)
            .args(&spec.flags)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // reap the probe if the deadline fires
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ProbeError::Spawn {
                compiler: spec.compiler.display().to_string(),
                source: e,
            })?;

        let output = if spec.timeout_secs > 0 {
            tokio::time::timeout(
                Duration::from_secs(spec.timeout_secs),
                child.wait_with_output(),
            )
            .await
            .map_err(|_| ProbeError::Timeout {
                compiler: spec.compiler.display().to_string(),
                timeout_secs: spec.timeout_secs,
            })??
        } else {
            child.wait_with_output().await?
        };

        let diagnostics = DiagnosticOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        };

        if !output.status.success() {
            // A probe never compiles anything, so warnings do not change the
            // exit status; non-zero means the probe itself failed.
            warn!(
                compiler = %spec.compiler.display(),
                exit_code = diagnostics.exit_code,
                "compiler probe exited non-zero"
            );
            return Err(ProbeError::ProbeFailed {
                exit_code: diagnostics.exit_code,
                output: diagnostics.text(),
            });
        }

        debug!(
            stdout_bytes = diagnostics.stdout.len(),
            stderr_bytes = diagnostics.stderr.len(),
            "probe completed"
        );
        Ok(diagnostics)
    }
}
