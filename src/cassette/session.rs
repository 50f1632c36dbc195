//! Recording session managing the filesystem cassette recorder.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::FsRecorder;

/// Manages the `FsRecorder` for a recording session.
///
/// The cassette is stored in a timestamped directory under the base path
/// so repeated recording runs never clobber each other.
pub struct RecordingSession {
    /// Recorder for filesystem interactions.
    pub fs: Arc<Mutex<FsRecorder>>,
    /// Output directory containing the cassette file.
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a new recording session under `base`.
    ///
    /// Creates directory at `<base>/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The cassette directory already exists
    /// - The directory cannot be created
    pub fn new_at(base: PathBuf) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = base.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }

        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let commit = get_commit_hash();
        let path = output_dir.join("fs.cassette.yaml");
        let name = format!("{timestamp}-fs");

        Ok(Self { fs: Arc::new(Mutex::new(FsRecorder::new(path, name, commit))), output_dir })
    }

    /// Finish the recorder and write the cassette file to disk.
    ///
    /// Consumes the session. The recording adapter holding the other
    /// `Arc` reference must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if the adapter is still alive or the cassette
    /// file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.fs)
            .map_err(|_| "Recording adapter for fs still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for fs poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write fs cassette: {e}"))?;
        Ok(self.output_dir)
    }
}

/// Get the current git commit hash, or "unknown" with a warning if unavailable.
fn get_commit_hash() -> String {
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    if let Some(h) = hash {
        h
    } else {
        eprintln!("Warning: Could not get git commit hash, using 'unknown'");
        "unknown".to_string()
    }
}
