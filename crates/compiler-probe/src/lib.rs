//! Compiler-Probe: compiler diagnostic capture for Toolsmith
//!
//! This crate provides the external-process layer for toolchain
//! configuration. It invokes a compiler binary with diagnostic-forcing
//! flags and captures the textual output that describes the compiler's
//! internal state (default header-search paths in particular).
//!
//! ## Execution layer
//!
//! Focus: bounded, deterministic probe invocations. Nothing here is
//! retried — probing a fixed compiler binary with fixed flags always
//! produces the same outcome, so a failure is a configuration error,
//! not a transient fault.

pub mod error;
pub mod fakes;
pub mod invoker;
pub mod spec;

pub use error::{ProbeError, Result};
pub use invoker::{CompilerInvoker, DiagnosticOutput, ProcessInvoker};
pub use spec::{gcc_default_flags, ProbeSpec, DEFAULT_PROBE_TIMEOUT_SECS};

/// Compiler-probe version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
