//! Renders rule diagnostics for humans and machines.

use crate::diagnostic::Diagnostic;

/// Formats diagnostics as a text report.
///
/// One `file:line:column: severity[code]: message` line per diagnostic,
/// followed by a summary line.
#[must_use]
pub fn format_report(diagnostics: &[Diagnostic]) -> String {
    let mut lines = Vec::new();

    for diagnostic in diagnostics {
        lines.push(format!(
            "{}:{}:{}: {}[{}]: {}",
            diagnostic.file.display(),
            diagnostic.span.line,
            diagnostic.span.column,
            diagnostic.severity,
            diagnostic.code,
            diagnostic.message,
        ));
    }

    if !diagnostics.is_empty() {
        lines.push(String::new());
    }
    lines.push(summary(diagnostics.len()));

    lines.join("\n")
}

/// Formats diagnostics as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_json(diagnostics: &[Diagnostic]) -> Result<String, String> {
    serde_json::to_string_pretty(diagnostics)
        .map_err(|e| format!("failed to serialize diagnostics: {e}"))
}

/// One-line summary for a diagnostic count.
#[must_use]
pub fn summary(count: usize) -> String {
    match count {
        0 => "No namespace mismatches found".to_string(),
        1 => "1 namespace mismatch found".to_string(),
        n => format!("{n} namespace mismatches found"),
    }
}
