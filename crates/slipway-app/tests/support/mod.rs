#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};

use slipway_app::{
    CloneEvent, CloneRequest, ListingEvent, UpdateEvent, VerifyEvent, WorkflowServices,
};
use slipway_core::diff::{ChangedFile, DiffUpdateRequest};

/// Scripted collaborator: records every spawn call and keeps the sender half
/// of each channel so tests deliver events whenever they choose.
#[derive(Default)]
pub struct ScriptedServices {
    clone_calls: Mutex<Vec<(CloneRequest, u64)>>,
    listing_calls: Mutex<Vec<u64>>,
    update_calls: Mutex<Vec<DiffUpdateRequest>>,
    verify_calls: Mutex<Vec<u64>>,
    clone_senders: Mutex<Vec<Sender<CloneEvent>>>,
    listing_senders: Mutex<Vec<Sender<ListingEvent>>>,
    update_senders: Mutex<Vec<(String, Sender<UpdateEvent>)>>,
    verify_senders: Mutex<Vec<Sender<VerifyEvent>>>,
}

impl ScriptedServices {
    pub fn clone_call_count(&self) -> usize {
        self.clone_calls.lock().expect("clone calls lock").len()
    }

    pub fn listing_call_count(&self) -> usize {
        self.listing_calls.lock().expect("listing calls lock").len()
    }

    pub fn update_call_count(&self) -> usize {
        self.update_calls.lock().expect("update calls lock").len()
    }

    pub fn verify_call_count(&self) -> usize {
        self.verify_calls.lock().expect("verify calls lock").len()
    }

    pub fn update_calls(&self) -> Vec<DiffUpdateRequest> {
        self.update_calls.lock().expect("update calls lock").clone()
    }

    pub fn last_clone_token(&self) -> u64 {
        self.clone_calls
            .lock()
            .expect("clone calls lock")
            .last()
            .map(|(_, token)| *token)
            .expect("clone call should exist")
    }

    pub fn last_listing_token(&self) -> u64 {
        *self
            .listing_calls
            .lock()
            .expect("listing calls lock")
            .last()
            .expect("listing call should exist")
    }

    pub fn last_verify_token(&self) -> u64 {
        *self
            .verify_calls
            .lock()
            .expect("verify calls lock")
            .last()
            .expect("verify call should exist")
    }

    pub fn send_clone(&self, event: CloneEvent) {
        let sender = self
            .clone_senders
            .lock()
            .expect("clone senders lock")
            .last()
            .cloned()
            .expect("clone sender should exist");
        sender.send(event).expect("send clone event");
    }

    pub fn send_listing(&self, event: ListingEvent) {
        let sender = self
            .listing_senders
            .lock()
            .expect("listing senders lock")
            .last()
            .cloned()
            .expect("listing sender should exist");
        sender.send(event).expect("send listing event");
    }

    pub fn send_verify(&self, event: VerifyEvent) {
        let sender = self
            .verify_senders
            .lock()
            .expect("verify senders lock")
            .last()
            .cloned()
            .expect("verify sender should exist");
        sender.send(event).expect("send verify event");
    }

    /// Drop the latest clone sender, disconnecting the session's receiver
    /// without a terminal event.
    pub fn drop_last_clone_sender(&self) {
        self.clone_senders.lock().expect("clone senders lock").pop();
    }

    pub fn drop_last_listing_sender(&self) {
        self.listing_senders
            .lock()
            .expect("listing senders lock")
            .pop();
    }

    pub fn drop_last_verify_sender(&self) {
        self.verify_senders
            .lock()
            .expect("verify senders lock")
            .pop();
    }

    /// Acknowledge the update at `index` (spawn order), echoing `modified`.
    pub fn ack_update(&self, index: usize, modified: &str) {
        let (path, sender) = {
            let senders = self.update_senders.lock().expect("update senders lock");
            let (path, sender) = senders.get(index).expect("update sender should exist");
            (path.clone(), sender.clone())
        };
        sender
            .send(UpdateEvent::Acked {
                path: path.clone(),
                result: Ok(changed_file(&path, &path, modified)),
            })
            .expect("send update ack");
    }

    pub fn fail_update(&self, index: usize, reason: &str) {
        let (path, sender) = {
            let senders = self.update_senders.lock().expect("update senders lock");
            let (path, sender) = senders.get(index).expect("update sender should exist");
            (path.clone(), sender.clone())
        };
        sender
            .send(UpdateEvent::Acked {
                path,
                result: Err(reason.to_string()),
            })
            .expect("send update failure");
    }
}

impl WorkflowServices for ScriptedServices {
    fn spawn_clone(&self, request: CloneRequest, token: u64) -> Receiver<CloneEvent> {
        self.clone_calls
            .lock()
            .expect("clone calls lock")
            .push((request, token));
        let (sender, receiver) = mpsc::channel();
        self.clone_senders
            .lock()
            .expect("clone senders lock")
            .push(sender);
        receiver
    }

    fn spawn_fetch_listing(&self, token: u64) -> Receiver<ListingEvent> {
        self.listing_calls
            .lock()
            .expect("listing calls lock")
            .push(token);
        let (sender, receiver) = mpsc::channel();
        self.listing_senders
            .lock()
            .expect("listing senders lock")
            .push(sender);
        receiver
    }

    fn spawn_update(&self, request: DiffUpdateRequest) -> Receiver<UpdateEvent> {
        let path = request.path.clone();
        self.update_calls
            .lock()
            .expect("update calls lock")
            .push(request);
        let (sender, receiver) = mpsc::channel();
        self.update_senders
            .lock()
            .expect("update senders lock")
            .push((path, sender));
        receiver
    }

    fn spawn_verification(&self, token: u64) -> Receiver<VerifyEvent> {
        self.verify_calls
            .lock()
            .expect("verify calls lock")
            .push(token);
        let (sender, receiver) = mpsc::channel();
        self.verify_senders
            .lock()
            .expect("verify senders lock")
            .push(sender);
        receiver
    }
}

pub fn changed_file(path: &str, original: &str, modified: &str) -> ChangedFile {
    ChangedFile {
        path: path.to_string(),
        summary: format!("Updated {path}."),
        language: "rust".to_string(),
        original: original.to_string(),
        modified: modified.to_string(),
        tone: "good".to_string(),
        status_label: "Modified".to_string(),
    }
}

pub fn sample_files() -> Vec<ChangedFile> {
    vec![
        changed_file("src/inspector.rs", "old inspector", "new inspector"),
        changed_file("src/drydock.rs", "old drydock", "new drydock"),
        changed_file("README.md", "old readme", "new readme"),
    ]
}
