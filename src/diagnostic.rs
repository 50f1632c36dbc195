//! Diagnostic types produced by the namespace rule.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// How serious a diagnostic is.
///
/// The namespace rule only emits warnings; `Error` exists for embedders
/// that want to promote the rule's severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Non-blocking finding.
    Warning,
    /// Blocking finding.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Source location of a declared namespace name.
///
/// Line and column are 1-based; column and length count bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Line the name starts on.
    pub line: usize,
    /// Column the name starts at.
    pub column: usize,
    /// Length of the name.
    pub length: usize,
}

/// A single rule finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Stable rule code (e.g. `NS01`).
    pub code: String,
    /// Severity of the finding.
    pub severity: Severity,
    /// Human-readable message carrying the expected namespace.
    pub message: String,
    /// File the declaration lives in.
    pub file: PathBuf,
    /// Span of the declared namespace name.
    pub span: Span,
}
