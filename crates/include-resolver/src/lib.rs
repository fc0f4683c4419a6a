//! Include-Resolver: header search-path resolution for Toolsmith
//!
//! Resolves the ordered list of include directories a C/C++ compiler should
//! use in generated toolchain rules:
//! - Probes the compiler for its default search path (via `compiler-probe`)
//! - Parses the bounded search-list block out of the diagnostics
//! - Normalizes each path for safe embedding in generated configuration
//! - Appends `<prefix>/include` for each externally-resolved dependency
//!
//! One pipeline run per toolchain configuration pass; no state survives an
//! invocation.

pub mod error;
pub mod inject;
pub mod normalize;
pub mod parse;
pub mod resolve;
pub mod telemetry;

// Re-export key types
pub use error::{ResolveError, Result};
pub use inject::{dep_prefixes_from_env, inject, DEP_PREFIX_ENV};
pub use normalize::{escape_literal, normalize, unescape_literal, IncludeDirectory};
pub use parse::{extract, SEARCH_LIST_END, SEARCH_LIST_START};
pub use resolve::IncludeResolver;
pub use telemetry::init_tracing;

pub use compiler_probe::{
    gcc_default_flags, CompilerInvoker, DiagnosticOutput, ProbeError, ProbeSpec, ProcessInvoker,
};

/// Include-resolver version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
