//! In-process collaborator backed by a seeded diff store.
//!
//! Lets the binary exercise the whole staged pipeline without a network:
//! each spawn call runs on its own thread and reports over the channel,
//! exactly like a remote collaborator would.

use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

use slipway_app::{
    CloneEvent, CloneRequest, ListingEvent, UpdateEvent, VerifyEvent, WorkflowServices,
};
use slipway_core::diff::{ChangedFile, DiffUpdateRequest};

pub struct LocalServices {
    store: Arc<Mutex<Vec<ChangedFile>>>,
}

impl LocalServices {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(seed_diff_files())),
        }
    }
}

impl Default for LocalServices {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowServices for LocalServices {
    fn spawn_clone(&self, request: CloneRequest, token: u64) -> Receiver<CloneEvent> {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let result = if request.repo_url.is_empty() {
                Err("repository url is required".to_string())
            } else {
                Ok(())
            };
            let _ = sender.send(CloneEvent::Done { token, result });
        });
        receiver
    }

    fn spawn_fetch_listing(&self, token: u64) -> Receiver<ListingEvent> {
        let (sender, receiver) = mpsc::channel();
        let store = self.store.clone();
        thread::spawn(move || {
            let result = match store.lock() {
                Ok(files) => Ok(files.clone()),
                Err(_) => Err("diff store unavailable".to_string()),
            };
            let _ = sender.send(ListingEvent::Done { token, result });
        });
        receiver
    }

    fn spawn_update(&self, request: DiffUpdateRequest) -> Receiver<UpdateEvent> {
        let (sender, receiver) = mpsc::channel();
        let store = self.store.clone();
        thread::spawn(move || {
            let result = match store.lock() {
                Ok(mut files) => {
                    match files.iter_mut().find(|file| file.path == request.path) {
                        Some(file) => {
                            file.modified = request.modified.clone();
                            Ok(file.clone())
                        }
                        None => Err("diff file not found".to_string()),
                    }
                }
                Err(_) => Err("diff store unavailable".to_string()),
            };
            let _ = sender.send(UpdateEvent::Acked {
                path: request.path,
                result,
            });
        });
        receiver
    }

    fn spawn_verification(&self, token: u64) -> Receiver<VerifyEvent> {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let _ = sender.send(VerifyEvent::Done {
                token,
                result: Ok(()),
            });
        });
        receiver
    }
}

fn seed_diff_files() -> Vec<ChangedFile> {
    vec![
        ChangedFile {
            path: "src/inspector.rs".to_string(),
            summary: "Added health score heuristics for coverage risk.".to_string(),
            language: "rust".to_string(),
            original: "pub fn health_score(report: &FleetReport) -> u8 {\n  0\n}\n".to_string(),
            modified: "pub fn health_score(report: &FleetReport) -> u8 {\n  let mut score = 70;\n  if report.coverage.low_count > 0 {\n    score = score.saturating_sub(20);\n  }\n  score\n}\n".to_string(),
            tone: "good".to_string(),
            status_label: "Modified".to_string(),
        },
        ChangedFile {
            path: "src/drydock.rs".to_string(),
            summary: "Added CMake detection and notebook-only guardrails.".to_string(),
            language: "rust".to_string(),
            original: "pub fn detect_stack(files: &[String]) -> Stack {\n  Stack::Unknown\n}\n".to_string(),
            modified: "pub fn detect_stack(files: &[String]) -> Stack {\n  if files.iter().any(|name| name.contains(\"CMakeLists\")) {\n    return Stack::Cmake;\n  }\n  Stack::Unknown\n}\n".to_string(),
            tone: "warn".to_string(),
            status_label: "Modified".to_string(),
        },
        ChangedFile {
            path: "src/pr_template.rs".to_string(),
            summary: "Interpolated refit stats into PR templates.".to_string(),
            language: "rust".to_string(),
            original: "const REFIT_STATS: &str = \"{{REFIT_STATS}}\";\n".to_string(),
            modified: "const REFIT_STATS: &str = \"{{REFIT_STATS}}\";\nconst REFIT_FIXES: &str = \"{{REFIT_FIXES}}\";\n".to_string(),
            tone: "info".to_string(),
            status_label: "Added".to_string(),
        },
    ]
}
