//! Cassette data structures for recording and replaying filesystem calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single filesystem call, keyed by the port method that was invoked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum FsCall {
    /// A `read_to_string` call.
    ReadToString {
        /// Path that was read.
        path: String,
    },
    /// A `list_dir` call.
    ListDir {
        /// Directory that was listed.
        path: String,
    },
    /// An `is_dir` call.
    IsDir {
        /// Path that was probed.
        path: String,
    },
}

impl FsCall {
    /// Returns the port method name for this call.
    #[must_use]
    pub fn method(&self) -> &'static str {
        match self {
            FsCall::ReadToString { .. } => "read_to_string",
            FsCall::ListDir { .. } => "list_dir",
            FsCall::IsDir { .. } => "is_dir",
        }
    }
}

/// The reply a filesystem call produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FsReply {
    /// File contents from `read_to_string`.
    Text(String),
    /// Entry names from `list_dir`.
    Entries(Vec<String>),
    /// Boolean result from `is_dir`.
    Flag(bool),
    /// An error, stored as its display string.
    Err(String),
}

/// A recorded call/reply pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// The filesystem call that was made.
    pub call: FsCall,
    /// The reply it produced.
    pub reply: FsReply,
}

/// A cassette containing an ordered sequence of filesystem interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Git commit hash at recording time.
    pub commit: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cassette() -> Cassette {
        Cassette {
            name: "test-cassette".into(),
            recorded_at: Utc::now(),
            commit: "abc123".into(),
            interactions: vec![
                Interaction {
                    seq: 0,
                    call: FsCall::ListDir { path: "/proj/src".into() },
                    reply: FsReply::Entries(vec!["Foo.cs".into()]),
                },
                Interaction {
                    seq: 1,
                    call: FsCall::ReadToString { path: "/proj/mod.manifest".into() },
                    reply: FsReply::Text("contents".into()),
                },
            ],
        }
    }

    #[test]
    fn yaml_round_trip() {
        let cassette = sample_cassette();
        let yaml = serde_yaml::to_string(&cassette).expect("serialize");
        let deserialized: Cassette = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(cassette, deserialized);
    }

    #[test]
    fn call_reports_its_method_name() {
        assert_eq!(FsCall::ReadToString { path: "/a".into() }.method(), "read_to_string");
        assert_eq!(FsCall::ListDir { path: "/a".into() }.method(), "list_dir");
        assert_eq!(FsCall::IsDir { path: "/a".into() }.method(), "is_dir");
    }
}
