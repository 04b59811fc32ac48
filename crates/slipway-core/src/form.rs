use serde::{Deserialize, Serialize};

/// Where the fork action points on GitHub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForkTargetType {
    #[default]
    Org,
    Personal,
}

/// Form fields that feed the clone readiness gates.
///
/// Empty string is the "unset" sentinel; no field is ever optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowForm {
    pub repo_url: String,
    pub fork_target_type: ForkTargetType,
    pub fork_target: String,
    pub gitlab_namespace: String,
    pub gitlab_project: String,
    pub clone_path: String,
}

impl WorkflowForm {
    pub fn project_ready(&self) -> bool {
        !self.repo_url.trim().is_empty()
    }

    pub fn fork_ready(&self) -> bool {
        !self.fork_target.trim().is_empty()
    }

    pub fn mirror_ready(&self) -> bool {
        !self.gitlab_namespace.trim().is_empty() && !self.gitlab_project.trim().is_empty()
    }

    pub fn can_clone(&self) -> bool {
        self.project_ready() && self.fork_ready() && self.mirror_ready()
    }
}
