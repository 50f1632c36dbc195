//! Root-namespace extraction and expected-namespace computation.

use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Literal prefix of a root-namespace line in a module manifest.
const ROOT_NAMESPACE_PREFIX: &str = "    \"rootNamespace\": \"";

/// Literal suffix of a root-namespace line in a module manifest.
const ROOT_NAMESPACE_SUFFIX: &str = "\",";

/// Extracts the declared root namespace from a module manifest.
///
/// The manifest is scanned line by line rather than parsed as structured
/// data: a line counts iff it starts with exactly
/// `    "rootNamespace": "` (four-space indent, one space after the
/// colon) and ends with `",`. The value between the two literals is the
/// root namespace and may be empty. The first matching line wins.
///
/// Returns `None` when no line matches or the manifest cannot be read;
/// an absent field is distinct from an empty one.
#[must_use]
pub fn extract_root_namespace(fs: &dyn FileSystem, manifest_path: &Path) -> Option<String> {
    let trim_length = ROOT_NAMESPACE_PREFIX.len() + ROOT_NAMESPACE_SUFFIX.len();
    let contents = fs.read_to_string(manifest_path).ok()?;

    for line in contents.lines() {
        if line.len() >= trim_length
            && line.starts_with(ROOT_NAMESPACE_PREFIX)
            && line.ends_with(ROOT_NAMESPACE_SUFFIX)
        {
            let value = &line[ROOT_NAMESPACE_PREFIX.len()..line.len() - ROOT_NAMESPACE_SUFFIX.len()];
            return Some(value.to_string());
        }
    }

    None
}

/// Computes the namespace a file in `file_dir` is expected to declare.
///
/// A file directly beside the manifest gets the root namespace; a file
/// in a subdirectory gets the root namespace plus the dot-joined
/// relative path. Containment is checked component-wise, so a sibling
/// directory sharing a name prefix with the manifest directory is not
/// mistaken for a descendant.
///
/// Returns `None` when `file_dir` is outside the manifest directory or a
/// path component is not valid UTF-8.
///
/// An empty root namespace in a subdirectory yields a leading-dot value
/// such as `.x`; this mirrors the manifest contents literally and is not
/// cleaned up.
#[must_use]
pub fn expected_namespace(
    root_namespace: &str,
    manifest_dir: &Path,
    file_dir: &Path,
) -> Option<String> {
    if file_dir == manifest_dir {
        return Some(root_namespace.to_string());
    }

    let relative = file_dir.strip_prefix(manifest_dir).ok()?;

    let mut expected = String::from(root_namespace);
    for component in relative.components() {
        expected.push('.');
        expected.push_str(component.as_os_str().to_str()?);
    }
    Some(expected)
}
