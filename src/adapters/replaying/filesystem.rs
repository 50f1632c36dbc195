//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use crate::cassette::format::FsReply;
use crate::cassette::replayer::FsReplayer;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<FsReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: FsReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next_reply(&self, method: &str) -> FsReply {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        replayer.next_reply(method)
    }
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(
        &self,
        _path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        match self.next_reply("read_to_string") {
            FsReply::Text(text) => Ok(text),
            FsReply::Err(msg) => Err(msg.into()),
            other => panic!("fs::read_to_string: unexpected cassette reply {other:?}"),
        }
    }

    fn list_dir(
        &self,
        _path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        match self.next_reply("list_dir") {
            FsReply::Entries(entries) => Ok(entries),
            FsReply::Err(msg) => Err(msg.into()),
            other => panic!("fs::list_dir: unexpected cassette reply {other:?}"),
        }
    }

    fn is_dir(&self, _path: &Path) -> bool {
        match self.next_reply("is_dir") {
            FsReply::Flag(flag) => flag,
            other => panic!("fs::is_dir: unexpected cassette reply {other:?}"),
        }
    }
}
