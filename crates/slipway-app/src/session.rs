use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};

use slipway_core::diff::{ChangedFile, DiffUpdateRequest};
use slipway_core::drafts::DraftStore;
use slipway_core::form::WorkflowForm;
use slipway_core::presentation::Tone;
use slipway_core::stage::{CloneStatus, StageState, ToolsStatus, VerificationStatus};
use slipway_core::tools::{ToolKind, ToolSelection};
use slipway_core::tree::{FileTreeItem, build_file_tree};

use crate::services::{
    CloneEvent, CloneRequest, ListingEvent, UpdateEvent, VerifyEvent, WorkflowServices,
};

/// One user-visible entry in the verification log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub message: String,
    pub tone: Tone,
}

/// One workflow instance: form, tool selection, stage state, changed files,
/// drafts, and the channels of any outstanding collaborator tasks.
///
/// All mutation happens on the caller's thread in response to discrete
/// events; `on_tick` drains collaborator channels without blocking.
pub struct WorkflowSession {
    services: Arc<dyn WorkflowServices>,
    pub form: WorkflowForm,
    pub selection: ToolSelection,
    stage: StageState,
    files: Vec<ChangedFile>,
    selected_path: Option<String>,
    buffer: String,
    drafts: DraftStore,
    tool_run_summary: String,
    verify_log: Vec<LogLine>,
    tree_cache: Option<Vec<FileTreeItem>>,
    clone_receiver: Option<Receiver<CloneEvent>>,
    listing_receiver: Option<Receiver<ListingEvent>>,
    verify_receiver: Option<Receiver<VerifyEvent>>,
    update_receivers: Vec<Receiver<UpdateEvent>>,
    active_clone_token: Option<u64>,
    active_listing_token: Option<u64>,
    active_verify_token: Option<u64>,
    next_token: u64,
}

impl WorkflowSession {
    pub fn new(services: Arc<dyn WorkflowServices>) -> Self {
        Self {
            services,
            form: WorkflowForm::default(),
            selection: ToolSelection::default(),
            stage: StageState::default(),
            files: Vec::new(),
            selected_path: None,
            buffer: String::new(),
            drafts: DraftStore::default(),
            tool_run_summary: String::new(),
            verify_log: Vec::new(),
            tree_cache: None,
            clone_receiver: None,
            listing_receiver: None,
            verify_receiver: None,
            update_receivers: Vec::new(),
            active_clone_token: None,
            active_listing_token: None,
            active_verify_token: None,
            next_token: 1,
        }
    }

    fn take_token(&mut self) -> u64 {
        let token = self.next_token;
        self.next_token = self.next_token.saturating_add(1);
        token
    }

    // --- clone stage ---

    /// Start the clone. No-op while the readiness gates are not all green;
    /// re-invoking after completion restarts the transition.
    pub fn clone_repo(&mut self) {
        if !self.form.can_clone() {
            return;
        }

        let token = self.take_token();
        self.active_clone_token = Some(token);
        self.stage.clone = CloneStatus::Running;
        self.clone_receiver = Some(self.services.spawn_clone(
            CloneRequest {
                repo_url: self.form.repo_url.trim().to_string(),
                clone_path: self.form.clone_path.trim().to_string(),
            },
            token,
        ));
    }

    fn apply_clone_event(&mut self, event: CloneEvent) {
        let CloneEvent::Done { token, result } = event;
        if Some(token) != self.active_clone_token {
            return;
        }

        self.clone_receiver = None;
        self.active_clone_token = None;
        self.stage.clone = match result {
            Ok(()) => CloneStatus::Complete,
            Err(_) => CloneStatus::Failed,
        };
    }

    // --- tool run ---

    /// Start a tool run. Always moves to `Running` and invalidates all
    /// downstream state: the file set, the selection, the live buffer, both
    /// draft maps, the cached tree, and any verification in flight.
    pub fn run_tools(&mut self) {
        self.stage.tools = ToolsStatus::Running;
        self.stage.verification = VerificationStatus::Idle;
        self.files.clear();
        self.tree_cache = None;
        self.selected_path = None;
        self.buffer.clear();
        self.drafts.clear();
        // Acks for the superseded run must not re-seed the cleared baselines.
        self.update_receivers.clear();
        self.verify_log.clear();
        self.verify_receiver = None;
        self.active_verify_token = None;
        self.listing_receiver = None;
        self.active_listing_token = None;

        if self.selection.is_empty() {
            self.stage.tools = ToolsStatus::Complete;
            self.tool_run_summary = "No tools selected. Nothing to run.".to_string();
            return;
        }

        self.tool_run_summary.clear();
        let token = self.take_token();
        self.active_listing_token = Some(token);
        self.listing_receiver = Some(self.services.spawn_fetch_listing(token));
    }

    fn apply_listing_event(&mut self, event: ListingEvent) {
        let ListingEvent::Done { token, result } = event;
        if Some(token) != self.active_listing_token {
            return;
        }

        self.listing_receiver = None;
        self.active_listing_token = None;

        let files = match result {
            Ok(files) => files,
            Err(reason) => {
                self.fail_tools(reason);
                return;
            }
        };

        self.files = files;
        self.tree_cache = None;
        self.stage.tools = ToolsStatus::Complete;
        self.tool_run_summary = if self.files.is_empty() {
            "Tools complete. Nothing to do.".to_string()
        } else {
            format!("Tools complete. {} files changed.", self.files.len())
        };

        // First file of the unsorted listing, not of the tree projection.
        if self.selected_path.is_none()
            && let Some(first) = self.files.first()
        {
            let path = first.path.clone();
            self.select_file(&path);
        }
    }

    fn fail_tools(&mut self, reason: String) {
        self.listing_receiver = None;
        self.active_listing_token = None;
        self.stage.tools = ToolsStatus::Failed;
        self.tool_run_summary = format!("Tool run failed: {reason}");
    }

    pub fn toggle_tool(&mut self, tool: ToolKind) {
        self.selection.toggle(tool);
    }

    pub fn has_changes(&self) -> bool {
        !self.files.is_empty()
    }

    pub fn show_nothing_to_do(&self) -> bool {
        self.stage.tools == ToolsStatus::Complete && !self.has_changes()
    }

    // --- file selection and drafts ---

    /// Switch the selected file: stash and persist the outgoing buffer,
    /// then load the target's draft (or its tool-proposed content).
    pub fn select_file(&mut self, path: &str) {
        let Some(index) = self.files.iter().position(|file| file.path == path) else {
            return;
        };

        self.stash_and_persist_current();

        let modified = self.files[index].modified.clone();
        self.drafts.seed_baseline(path, &modified);
        self.buffer = match self.drafts.draft(path) {
            Some(draft) => draft.to_string(),
            None => modified,
        };
        self.selected_path = Some(path.to_string());
    }

    /// Replace the live edit buffer, record it as the selected file's draft,
    /// and attempt persistence. No-op beyond the buffer when nothing is
    /// selected.
    pub fn update_modified(&mut self, content: &str) {
        self.buffer = content.to_string();

        let Some(path) = self.selected_path.clone() else {
            return;
        };
        self.drafts.stash(&path, content);
        self.attempt_persist(&path, content);
    }

    fn stash_and_persist_current(&mut self) {
        let Some(path) = self.selected_path.clone() else {
            return;
        };
        let content = self.buffer.clone();
        self.drafts.stash(&path, &content);
        self.attempt_persist(&path, &content);
    }

    /// Skip entirely when the content matches the persisted baseline;
    /// otherwise one fire-and-forget update request. Switching files later
    /// does not cancel it.
    fn attempt_persist(&mut self, path: &str, content: &str) {
        if !self.drafts.needs_persist(path, content) {
            return;
        }

        let receiver = self.services.spawn_update(DiffUpdateRequest {
            path: path.to_string(),
            modified: content.to_string(),
        });
        self.update_receivers.push(receiver);
    }

    fn apply_update_event(&mut self, event: UpdateEvent) {
        let UpdateEvent::Acked { path, result } = event;
        // A failed update leaves the draft and baseline untouched; the next
        // distinct edit retries naturally.
        if let Ok(file) = result {
            self.drafts.record_ack(&path, &file.modified);
        }
    }

    // --- verification and publish ---

    /// Run the docker verification. Preconditions are checked in order:
    /// tools must have completed, and the change set must be non-empty.
    pub fn run_docker_test(&mut self) {
        self.verify_log.clear();
        self.push_log("Preparing docker test environment.", Tone::Info);
        self.push_log("Collecting changed files for verification.", Tone::Info);

        if self.stage.tools != ToolsStatus::Complete {
            self.push_log("Cannot verify yet: run tools first.", Tone::Bad);
            self.stage.verification = VerificationStatus::Failed;
            return;
        }
        if self.files.is_empty() {
            self.push_log("Cannot verify: no changes to test.", Tone::Warn);
            self.stage.verification = VerificationStatus::Failed;
            return;
        }

        let token = self.take_token();
        self.active_verify_token = Some(token);
        self.stage.verification = VerificationStatus::Running;
        self.verify_receiver = Some(self.services.spawn_verification(token));
    }

    fn apply_verify_event(&mut self, event: VerifyEvent) {
        let VerifyEvent::Done { token, result } = event;
        if Some(token) != self.active_verify_token {
            return;
        }

        self.verify_receiver = None;
        self.active_verify_token = None;
        match result {
            Ok(()) => {
                self.push_log("Docker build succeeded.", Tone::Good);
                self.push_log("All verification checks passed.", Tone::Good);
                self.stage.verification = VerificationStatus::Success;
            }
            Err(reason) => {
                self.push_log(&format!("Verification failed: {reason}"), Tone::Bad);
                self.stage.verification = VerificationStatus::Failed;
            }
        }
    }

    fn push_log(&mut self, message: &str, tone: Tone) {
        self.verify_log.push(LogLine {
            message: message.to_string(),
            tone,
        });
    }

    pub fn set_publish_override(&mut self, value: bool) {
        self.stage.publish_override = value;
    }

    pub fn can_publish(&self) -> bool {
        self.stage.can_publish()
    }

    // --- event pump ---

    /// Drain every outstanding collaborator channel without blocking.
    /// A channel that disconnects before its terminal event counts as a
    /// failure for the stage that spawned it.
    pub fn on_tick(&mut self) {
        self.pump_clone();
        self.pump_listing();
        self.pump_verify();
        self.pump_updates();
    }

    fn pump_clone(&mut self) {
        let (events, disconnected) = drain(self.clone_receiver.as_ref());
        for event in events {
            self.apply_clone_event(event);
        }
        if disconnected && self.active_clone_token.is_some() && self.clone_receiver.is_some() {
            self.clone_receiver = None;
            self.active_clone_token = None;
            self.stage.clone = CloneStatus::Failed;
        }
    }

    fn pump_listing(&mut self) {
        let (events, disconnected) = drain(self.listing_receiver.as_ref());
        for event in events {
            self.apply_listing_event(event);
        }
        if disconnected && self.active_listing_token.is_some() && self.listing_receiver.is_some() {
            self.fail_tools("diff listing worker ended unexpectedly".to_string());
        }
    }

    fn pump_verify(&mut self) {
        let (events, disconnected) = drain(self.verify_receiver.as_ref());
        for event in events {
            self.apply_verify_event(event);
        }
        if disconnected && self.active_verify_token.is_some() && self.verify_receiver.is_some() {
            self.verify_receiver = None;
            self.active_verify_token = None;
            self.push_log("Verification worker ended unexpectedly.", Tone::Bad);
            self.stage.verification = VerificationStatus::Failed;
        }
    }

    fn pump_updates(&mut self) {
        let mut acks = Vec::new();
        let mut finished = Vec::new();

        for (index, receiver) in self.update_receivers.iter().enumerate() {
            loop {
                match receiver.try_recv() {
                    Ok(event) => {
                        // One terminal acknowledgment per channel.
                        acks.push(event);
                        finished.push(index);
                        break;
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        finished.push(index);
                        break;
                    }
                }
            }
        }

        for index in finished.into_iter().rev() {
            self.update_receivers.remove(index);
        }
        for event in acks {
            self.apply_update_event(event);
        }
    }

    // --- read-only derived state ---

    pub fn stage(&self) -> StageState {
        self.stage
    }

    pub fn files(&self) -> &[ChangedFile] {
        &self.files
    }

    pub fn selected_path(&self) -> Option<&str> {
        self.selected_path.as_deref()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn tool_run_summary(&self) -> &str {
        &self.tool_run_summary
    }

    pub fn verify_log(&self) -> &[LogLine] {
        &self.verify_log
    }

    pub fn persisted_baseline(&self, path: &str) -> Option<&str> {
        self.drafts.baseline(path)
    }

    pub fn draft(&self, path: &str) -> Option<&str> {
        self.drafts.draft(path)
    }

    /// Sorted tree projection of the current file set; rebuilt only after
    /// the file list changes.
    pub fn file_tree(&mut self) -> &[FileTreeItem] {
        if self.tree_cache.is_none() {
            self.tree_cache = Some(build_file_tree(&self.files));
        }
        match &self.tree_cache {
            Some(items) => items,
            None => &[],
        }
    }

    pub fn pending_update_count(&self) -> usize {
        self.update_receivers.len()
    }
}

fn drain<T>(receiver: Option<&Receiver<T>>) -> (Vec<T>, bool) {
    let mut events = Vec::new();
    let mut disconnected = false;

    if let Some(receiver) = receiver {
        loop {
            match receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }
    }

    (events, disconnected)
}
