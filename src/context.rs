//! Service context bundling the filesystem port.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::recording::RecordingFileSystem;
use crate::adapters::replaying::ReplayingFileSystem;
use crate::cassette::replayer::FsReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::filesystem::FileSystem;

/// Bundles the filesystem port behind one context handle.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying); everything downstream of the CLI takes the
/// context and stays oblivious to which adapter is active.
pub struct ServiceContext {
    /// Filesystem for directory and file reads.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by real disk I/O.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem) }
    }

    /// Creates a recording context that captures filesystem calls.
    ///
    /// Real work is delegated to the live adapter; the cassette is written
    /// under `<base>/<timestamp>/` when the returned session is finished.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(base: PathBuf) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new_at(base)?;
        let fs = RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&session.fs));
        Ok((Self { fs: Box::new(fs) }, session))
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: crate::cassette::format::Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
        Ok(Self { fs: Box::new(ReplayingFileSystem::new(FsReplayer::new(&cassette))) })
    }
}
