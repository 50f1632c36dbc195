//! Recording adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::cassette::format::{FsCall, FsReply};
use crate::cassette::recorder::FsRecorder;
use crate::ports::FileSystem;

/// Records filesystem interactions while delegating to an inner implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: Arc<Mutex<FsRecorder>>,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>, recorder: Arc<Mutex<FsRecorder>>) -> Self {
        Self { inner, recorder }
    }

    fn record(&self, call: FsCall, reply: FsReply) {
        let mut guard = self.recorder.lock().expect("recorder lock poisoned");
        guard.record(call, reply);
    }
}

/// Converts a port `Result` into the cassette reply encoding.
fn reply_for<T, E: std::fmt::Display>(
    result: &Result<T, E>,
    ok: impl FnOnce(&T) -> FsReply,
) -> FsReply {
    match result {
        Ok(v) => ok(v),
        Err(e) => FsReply::Err(e.to_string()),
    }
}

impl FileSystem for RecordingFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.read_to_string(path);
        self.record(
            FsCall::ReadToString { path: path.display().to_string() },
            reply_for(&result, |text| FsReply::Text(text.clone())),
        );
        result
    }

    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.list_dir(path);
        self.record(
            FsCall::ListDir { path: path.display().to_string() },
            reply_for(&result, |entries| FsReply::Entries(entries.clone())),
        );
        result
    }

    fn is_dir(&self, path: &Path) -> bool {
        let result = self.inner.is_dir(path);
        self.record(FsCall::IsDir { path: path.display().to_string() }, FsReply::Flag(result));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;
    use crate::cassette::format::Cassette;

    #[test]
    fn records_is_dir_interaction() {
        let dir = std::env::temp_dir().join("nscheck_rec_fs_test");
        std::fs::create_dir_all(&dir).unwrap();
        let cassette_path = dir.join("fs.cassette.yaml");

        let recorder = Arc::new(Mutex::new(FsRecorder::new(&cassette_path, "test", "abc")));

        // Scope the adapter so it's dropped before we try to unwrap
        {
            let fs = RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&recorder));
            assert!(fs.is_dir(&dir));
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&cassette_path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        assert_eq!(cassette.interactions.len(), 1);
        assert_eq!(cassette.interactions[0].call.method(), "is_dir");
        assert_eq!(cassette.interactions[0].reply, FsReply::Flag(true));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn records_read_errors_as_err_replies() {
        let dir = std::env::temp_dir().join("nscheck_rec_fs_err_test");
        std::fs::create_dir_all(&dir).unwrap();
        let cassette_path = dir.join("fs.cassette.yaml");

        let recorder = Arc::new(Mutex::new(FsRecorder::new(&cassette_path, "test", "abc")));

        {
            let fs = RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&recorder));
            assert!(fs.read_to_string(&dir.join("missing.txt")).is_err());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&cassette_path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        assert_eq!(cassette.interactions.len(), 1);
        assert!(matches!(cassette.interactions[0].reply, FsReply::Err(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
