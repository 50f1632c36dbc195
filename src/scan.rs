//! Extracts namespace declarations from source text.
//!
//! An embedding analysis framework would hand the rule each declaration
//! with its span already resolved; the CLI driver scans for them itself.
//! The scan is line-based: a declaration is the `namespace` keyword
//! followed by a dotted name, optionally terminated by `{` or `;`.

use crate::diagnostic::Span;

/// A namespace declaration found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDeclaration {
    /// The dotted name as written.
    pub name: String,
    /// Where the name appears. Line and column are 1-based bytes.
    pub span: Span,
}

/// Returns `true` for characters that may appear in a namespace name.
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '.' || c == '_'
}

/// Scans source text for namespace declarations.
///
/// Each matching line yields one declaration; a file with several
/// declarations gets one rule invocation per declaration. Lines that do
/// not fit the `namespace <name>` / `namespace <name> {` /
/// `namespace <name>;` shape are ignored.
#[must_use]
pub fn scan_declarations(source: &str) -> Vec<NamespaceDeclaration> {
    let mut declarations = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();

        let Some(rest) = trimmed.strip_prefix("namespace") else {
            continue;
        };
        if !rest.starts_with(char::is_whitespace) {
            continue; // e.g. an identifier like `namespaces`
        }

        let after_gap = rest.trim_start();
        let gap = rest.len() - after_gap.len();

        let name_len = after_gap.find(|c| !is_name_char(c)).unwrap_or(after_gap.len());
        let (name, tail) = after_gap.split_at(name_len);
        if name.is_empty() {
            continue;
        }

        let tail = tail.trim();
        if !(tail.is_empty() || tail == "{" || tail == ";") {
            continue;
        }

        declarations.push(NamespaceDeclaration {
            name: name.to_string(),
            span: Span {
                line: index + 1,
                column: indent + "namespace".len() + gap + 1,
                length: name.len(),
            },
        });
    }

    declarations
}
