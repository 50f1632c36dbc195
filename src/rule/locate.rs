//! Bounded upward search for the nearest module manifest.

use std::path::{Path, PathBuf};

use crate::ports::filesystem::FileSystem;

/// Maximum number of directories examined on the way up.
///
/// Bounds the walk on deep or malformed trees; a manifest further up
/// than this is treated as absent.
pub const MAX_HOPS: usize = 16;

/// Extension of module manifest files.
pub const MANIFEST_EXTENSION: &str = "manifest";

/// Extension of project-root marker files. A file with this extension in
/// a directory means the upward search must not continue above it.
pub const ROOT_MARKER_EXTENSION: &str = "sln";

/// Finds the nearest module manifest for `start_dir`.
///
/// Walks from `start_dir` toward the filesystem root, at most
/// [`MAX_HOPS`] directories, and returns the first manifest file found.
/// The search stops early at the filesystem root or when a directory
/// contains a project-root marker file (the marker directory itself is
/// still searched; only its ancestors are off-limits).
///
/// Several manifests in one directory resolve to the lexicographically
/// smallest filename, since the live adapter lists entries sorted.
///
/// An empty `start_dir` or any unreadable directory yields `None`; this
/// is a best-effort lookup and never surfaces an error.
#[must_use]
pub fn locate_manifest(fs: &dyn FileSystem, start_dir: &Path) -> Option<PathBuf> {
    if start_dir.as_os_str().is_empty() {
        return None;
    }

    let mut dir = start_dir.to_path_buf();
    for _ in 0..MAX_HOPS {
        if let Some(manifest) = first_file_with_extension(fs, &dir, MANIFEST_EXTENSION) {
            return Some(manifest);
        }

        let Some(parent) = dir.parent().map(Path::to_path_buf) else {
            break; // There is no parent directory
        };

        if first_file_with_extension(fs, &dir, ROOT_MARKER_EXTENSION).is_some() {
            break; // Reached the project root
        }

        dir = parent;
    }

    None
}

/// Returns the first file (not directory) in `dir` whose extension is `ext`.
///
/// Listing errors count as "nothing here".
fn first_file_with_extension(fs: &dyn FileSystem, dir: &Path, ext: &str) -> Option<PathBuf> {
    let entries = fs.list_dir(dir).ok()?;
    for name in entries {
        if Path::new(&name).extension().and_then(|e| e.to_str()) != Some(ext) {
            continue;
        }
        let candidate = dir.join(&name);
        if !fs.is_dir(&candidate) {
            return Some(candidate);
        }
    }
    None
}
