//! Collaborator contracts the workflow session consumes.
//!
//! Each spawn call starts a fire-and-forget task and hands back a channel;
//! the session polls those channels from its single event thread and never
//! blocks on them. Clone, listing, and verification channels are guarded by
//! a session-issued token so a superseded task's events can be discarded.
//! Update acknowledgments are keyed by path instead and are always applied.

use std::sync::mpsc::Receiver;

use slipway_core::diff::{ChangedFile, DiffUpdateRequest};

/// Input for the clone collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneRequest {
    pub repo_url: String,
    pub clone_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneEvent {
    Done {
        token: u64,
        result: Result<(), String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEvent {
    Done {
        token: u64,
        result: Result<Vec<ChangedFile>, String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateEvent {
    Acked {
        path: String,
        result: Result<ChangedFile, String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyEvent {
    Done {
        token: u64,
        result: Result<(), String>,
    },
}

pub trait WorkflowServices {
    /// Clone the source repository.
    fn spawn_clone(&self, request: CloneRequest, token: u64) -> Receiver<CloneEvent>;
    /// Fetch the diff listing produced by the tool run.
    fn spawn_fetch_listing(&self, token: u64) -> Receiver<ListingEvent>;
    /// Persist one edited diff entry; the ack echoes the stored file.
    fn spawn_update(&self, request: DiffUpdateRequest) -> Receiver<UpdateEvent>;
    /// Run the docker verification for the current change set.
    fn spawn_verification(&self, token: u64) -> Receiver<VerifyEvent>;
}
