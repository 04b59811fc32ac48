use serde::{Deserialize, Serialize};

/// A file touched by a tool run, with the tool-proposed replacement content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangedFile {
    /// Slash-delimited, non-empty path.
    pub path: String,
    /// Summary description of the proposed change.
    pub summary: String,
    /// Language identifier.
    pub language: String,
    /// Original content.
    pub original: String,
    /// Tool-proposed modified content.
    pub modified: String,
    /// Status tone.
    pub tone: String,
    /// Status label.
    pub status_label: String,
}

/// Request payload for persisting an edited diff entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffUpdateRequest {
    pub path: String,
    pub modified: String,
}

/// Acknowledgment payload; the echoed `modified` is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffUpdateResponse {
    pub file: ChangedFile,
}
