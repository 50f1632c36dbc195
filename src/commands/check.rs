//! `nscheck check` command.

use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::context::ServiceContext;
use crate::diagnostic::Diagnostic;
use crate::report;
use crate::rule::{check_namespace, ManifestCache, RuleContext};
use crate::scan;

/// Execute the `check` command: walk `path`, run the rule for every
/// namespace declaration found in files with the given extension, and
/// print the report.
///
/// # Errors
///
/// Returns an error string if the tree cannot be walked, the report
/// cannot be rendered, or any mismatch was found (so the process exits
/// nonzero, the way a lint step should).
pub fn run_with_context(
    ctx: &ServiceContext,
    path: &Path,
    ext: &str,
    format: OutputFormat,
) -> Result<(), String> {
    let diagnostics = collect_diagnostics(ctx, path, ext)?;

    match format {
        OutputFormat::Text => println!("{}", report::format_report(&diagnostics)),
        OutputFormat::Json => println!("{}", report::format_json(&diagnostics)?),
    }

    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(report::summary(diagnostics.len()))
    }
}

/// Walks the tree and runs the rule for every declaration.
///
/// The manifest-location cache is shared across the whole run, so files
/// in the same directory pay for one upward walk between them.
///
/// # Errors
///
/// Returns an error string if a directory cannot be listed.
pub fn collect_diagnostics(
    ctx: &ServiceContext,
    path: &Path,
    ext: &str,
) -> Result<Vec<Diagnostic>, String> {
    let assembly = assembly_name(path);
    let files = collect_source_files(ctx, path, ext)?;
    let cache = ManifestCache::new();

    let mut diagnostics = Vec::new();
    for file in &files {
        let Ok(source) = ctx.fs.read_to_string(file) else {
            continue; // unreadable or non-UTF-8 source, nothing to check
        };
        for declaration in scan::scan_declarations(&source) {
            let rule_ctx = RuleContext {
                fs: ctx.fs.as_ref(),
                assembly: Some(&assembly),
                file_path: Some(file),
                declared: &declaration.name,
                span: declaration.span,
                cache: Some(&cache),
            };
            if let Some(diagnostic) = check_namespace(&rule_ctx) {
                diagnostics.push(diagnostic);
            }
        }
    }
    Ok(diagnostics)
}

/// Stands in for the host compilation's assembly name: the name of the
/// directory (or file) being checked.
fn assembly_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| "target".to_string(), |name| name.to_string_lossy().into_owned())
}

/// Collects the files to scan: `path` itself if it is a file, otherwise
/// every file under it with the wanted extension, in listing order.
fn collect_source_files(
    ctx: &ServiceContext,
    path: &Path,
    ext: &str,
) -> Result<Vec<PathBuf>, String> {
    if !ctx.fs.is_dir(path) {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    walk(ctx, path, ext, &mut files)?;
    Ok(files)
}

fn walk(
    ctx: &ServiceContext,
    dir: &Path,
    ext: &str,
    files: &mut Vec<PathBuf>,
) -> Result<(), String> {
    let entries = ctx
        .fs
        .list_dir(dir)
        .map_err(|e| format!("failed to list {}: {e}", dir.display()))?;

    for name in entries {
        let entry_path = dir.join(&name);
        if ctx.fs.is_dir(&entry_path) {
            walk(ctx, &entry_path, ext, files)?;
        } else if Path::new(&name).extension().and_then(|e| e.to_str()) == Some(ext) {
            files.push(entry_path);
        }
    }
    Ok(())
}
