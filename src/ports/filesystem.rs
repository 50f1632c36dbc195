//! Filesystem port for directory and file reads.

use std::path::Path;

/// Provides read-only filesystem access for the namespace rule.
///
/// Abstracting the filesystem allows deterministic replay and testing
/// without touching the real disk. The rule only ever reads: it lists
/// directories, reads small text files, and probes whether a path is a
/// directory.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Lists the entry names in a directory, non-recursively.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns `true` if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}
