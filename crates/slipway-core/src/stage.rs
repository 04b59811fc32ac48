//! Stage status values for the four sequential workflow phases.
//!
//! Clone and tool-run treat their external step as a real asynchronous task,
//! so both carry a `Failed` terminal alongside the happy path. Verification
//! exposes `Running` between the trigger and the collaborator's outcome.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CloneStatus {
    #[default]
    Idle,
    Running,
    Complete,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToolsStatus {
    #[default]
    Idle,
    Running,
    Complete,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerificationStatus {
    #[default]
    Idle,
    Running,
    Success,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageState {
    pub clone: CloneStatus,
    pub tools: ToolsStatus,
    pub verification: VerificationStatus,
    pub publish_override: bool,
}

impl StageState {
    /// Publish actions unlock on a verified run or an explicit override.
    /// The override has no expiry; later verification outcomes do not
    /// revoke it.
    pub fn can_publish(&self) -> bool {
        self.verification == VerificationStatus::Success || self.publish_override
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_starts_idle() {
        let stage = StageState::default();
        assert_eq!(stage.clone, CloneStatus::Idle);
        assert_eq!(stage.tools, ToolsStatus::Idle);
        assert_eq!(stage.verification, VerificationStatus::Idle);
        assert!(!stage.publish_override);
        assert!(!stage.can_publish());
    }

    #[test]
    fn publish_unlocks_on_success_or_override() {
        let mut stage = StageState::default();

        stage.verification = VerificationStatus::Success;
        assert!(stage.can_publish());

        stage.verification = VerificationStatus::Failed;
        assert!(!stage.can_publish());

        stage.publish_override = true;
        assert!(stage.can_publish());

        // Override survives a later failed verification.
        stage.verification = VerificationStatus::Failed;
        assert!(stage.can_publish());
    }
}
