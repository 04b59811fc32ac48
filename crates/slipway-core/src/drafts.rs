use std::collections::HashMap;

/// Per-path edit buffers plus the last content the backing service
/// acknowledged for each path.
///
/// `last_persisted` is written from exactly two places: the lazy first-visit
/// seed and a persistence acknowledgment. It is the baseline the equality
/// short-circuit compares against, so it must never drift ahead of what the
/// service actually holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftStore {
    drafts: HashMap<String, String>,
    last_persisted: HashMap<String, String>,
}

impl DraftStore {
    /// Record the latest edited content for a path.
    pub fn stash(&mut self, path: &str, content: &str) {
        self.drafts.insert(path.to_string(), content.to_string());
    }

    pub fn draft(&self, path: &str) -> Option<&str> {
        self.drafts.get(path).map(String::as_str)
    }

    /// Seed the persisted baseline the first time a path is visited.
    /// No-op when a baseline already exists.
    pub fn seed_baseline(&mut self, path: &str, content: &str) {
        self.last_persisted
            .entry(path.to_string())
            .or_insert_with(|| content.to_string());
    }

    pub fn baseline(&self, path: &str) -> Option<&str> {
        self.last_persisted.get(path).map(String::as_str)
    }

    /// Whether `content` differs from the persisted baseline for `path`.
    ///
    /// An absent baseline counts as "needs persisting": the guard only
    /// suppresses writes that would round-trip to the same value, never the
    /// very first write for a path.
    pub fn needs_persist(&self, path: &str, content: &str) -> bool {
        self.last_persisted.get(path).map(String::as_str) != Some(content)
    }

    /// Apply a persistence acknowledgment; the echoed content is
    /// authoritative.
    pub fn record_ack(&mut self, path: &str, echoed: &str) {
        self.last_persisted
            .insert(path.to_string(), echoed.to_string());
    }

    pub fn clear(&mut self) {
        self.drafts.clear();
        self.last_persisted.clear();
    }
}
