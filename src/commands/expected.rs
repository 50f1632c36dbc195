//! `nscheck expected` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::rule::{expected_namespace, extract_root_namespace, locate_manifest};

/// Execute the `expected` command: print the namespace a source file is
/// expected to declare, or which resolution step came up empty.
///
/// Every outcome is informational; the command itself always succeeds.
///
/// # Errors
///
/// Returns an error string if the file path has no parent directory.
pub fn run_with_context(ctx: &ServiceContext, file: &Path) -> Result<(), String> {
    let dir = file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| format!("{} has no parent directory", file.display()))?;

    let Some(manifest) = locate_manifest(ctx.fs.as_ref(), dir) else {
        println!("No module manifest found for {}", file.display());
        return Ok(());
    };

    let Some(root_namespace) = extract_root_namespace(ctx.fs.as_ref(), &manifest) else {
        println!("Manifest {} declares no root namespace", manifest.display());
        return Ok(());
    };

    let manifest_dir = manifest.parent().unwrap_or(Path::new(""));
    match expected_namespace(&root_namespace, manifest_dir, dir) {
        Some(expected) => println!("{expected}"),
        None => println!(
            "{} is outside the manifest directory {}",
            file.display(),
            manifest_dir.display()
        ),
    }
    Ok(())
}
