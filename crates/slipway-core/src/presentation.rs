//! Derived labels and tones for presentation widgets.
//!
//! Everything here is a pure function of stage state or form fields; nothing
//! is stored. Presentation widgets consume these values read-only.

use crate::form::{ForkTargetType, WorkflowForm};
use crate::stage::{CloneStatus, ToolsStatus, VerificationStatus};

/// Visual tone attached to a badge or log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Muted,
    Info,
    Good,
    Warn,
    Bad,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Muted => "muted",
            Self::Info => "info",
            Self::Good => "good",
            Self::Warn => "warn",
            Self::Bad => "bad",
        }
    }
}

/// Label + tone pair for one stage indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageBadge {
    pub label: &'static str,
    pub tone: Tone,
}

pub fn clone_badge(status: CloneStatus) -> StageBadge {
    match status {
        CloneStatus::Idle => StageBadge {
            label: "Not started",
            tone: Tone::Muted,
        },
        CloneStatus::Running => StageBadge {
            label: "Cloning",
            tone: Tone::Info,
        },
        CloneStatus::Complete => StageBadge {
            label: "Cloned",
            tone: Tone::Good,
        },
        CloneStatus::Failed => StageBadge {
            label: "Clone failed",
            tone: Tone::Bad,
        },
    }
}

pub fn tools_badge(status: ToolsStatus) -> StageBadge {
    match status {
        ToolsStatus::Idle => StageBadge {
            label: "Waiting",
            tone: Tone::Muted,
        },
        ToolsStatus::Running => StageBadge {
            label: "Running tools",
            tone: Tone::Info,
        },
        ToolsStatus::Complete => StageBadge {
            label: "Tools complete",
            tone: Tone::Good,
        },
        ToolsStatus::Failed => StageBadge {
            label: "Tool run failed",
            tone: Tone::Bad,
        },
    }
}

pub fn verification_badge(status: VerificationStatus) -> StageBadge {
    match status {
        VerificationStatus::Idle => StageBadge {
            label: "Not verified",
            tone: Tone::Muted,
        },
        VerificationStatus::Running => StageBadge {
            label: "Verifying",
            tone: Tone::Info,
        },
        VerificationStatus::Success => StageBadge {
            label: "Verified",
            tone: Tone::Good,
        },
        VerificationStatus::Failed => StageBadge {
            label: "Verification failed",
            tone: Tone::Warn,
        },
    }
}

/// Fork action label, interpolating the trimmed target and target type.
pub fn fork_action_label(form: &WorkflowForm) -> String {
    let target = form.fork_target.trim();
    match form.fork_target_type {
        ForkTargetType::Org => format!("Fork to GitHub org: {target}"),
        ForkTargetType::Personal => format!("Fork to GitHub account: {target}"),
    }
}

/// Mirror action label; falls back to a generic placeholder when either
/// half of the GitLab path is blank.
pub fn mirror_action_label(form: &WorkflowForm) -> String {
    let namespace = form.gitlab_namespace.trim();
    let project = form.gitlab_project.trim();
    if namespace.is_empty() || project.is_empty() {
        return "Mirror to private GitLab".to_string();
    }
    format!("Mirror to private GitLab: {namespace}/{project}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_badges_are_exhaustive() {
        assert_eq!(clone_badge(CloneStatus::Idle).label, "Not started");
        assert_eq!(clone_badge(CloneStatus::Idle).tone, Tone::Muted);
        assert_eq!(clone_badge(CloneStatus::Running).label, "Cloning");
        assert_eq!(clone_badge(CloneStatus::Running).tone, Tone::Info);
        assert_eq!(clone_badge(CloneStatus::Complete).label, "Cloned");
        assert_eq!(clone_badge(CloneStatus::Complete).tone, Tone::Good);
        assert_eq!(clone_badge(CloneStatus::Failed).label, "Clone failed");
        assert_eq!(clone_badge(CloneStatus::Failed).tone, Tone::Bad);
    }

    #[test]
    fn tools_badges_are_exhaustive() {
        assert_eq!(tools_badge(ToolsStatus::Idle).label, "Waiting");
        assert_eq!(tools_badge(ToolsStatus::Running).label, "Running tools");
        assert_eq!(tools_badge(ToolsStatus::Complete).label, "Tools complete");
        assert_eq!(tools_badge(ToolsStatus::Complete).tone, Tone::Good);
        assert_eq!(tools_badge(ToolsStatus::Failed).label, "Tool run failed");
        assert_eq!(tools_badge(ToolsStatus::Failed).tone, Tone::Bad);
    }

    #[test]
    fn verification_badges_are_exhaustive() {
        assert_eq!(verification_badge(VerificationStatus::Idle).label, "Not verified");
        assert_eq!(verification_badge(VerificationStatus::Running).label, "Verifying");
        assert_eq!(verification_badge(VerificationStatus::Success).label, "Verified");
        assert_eq!(
            verification_badge(VerificationStatus::Failed).label,
            "Verification failed"
        );
        assert_eq!(verification_badge(VerificationStatus::Failed).tone, Tone::Warn);
    }

    #[test]
    fn fork_label_wording_follows_target_type() {
        let mut form = WorkflowForm {
            fork_target: "  acme  ".to_string(),
            ..WorkflowForm::default()
        };
        assert_eq!(fork_action_label(&form), "Fork to GitHub org: acme");

        form.fork_target_type = ForkTargetType::Personal;
        assert_eq!(fork_action_label(&form), "Fork to GitHub account: acme");
    }

    #[test]
    fn mirror_label_interpolates_or_falls_back() {
        let mut form = WorkflowForm {
            gitlab_namespace: "acme-private".to_string(),
            gitlab_project: "rocket-mirror".to_string(),
            ..WorkflowForm::default()
        };
        assert_eq!(
            mirror_action_label(&form),
            "Mirror to private GitLab: acme-private/rocket-mirror"
        );

        form.gitlab_project = "   ".to_string();
        assert_eq!(mirror_action_label(&form), "Mirror to private GitLab");
    }

    #[test]
    fn tone_strings_match_the_wire_vocabulary() {
        assert_eq!(Tone::Good.as_str(), "good");
        assert_eq!(Tone::Warn.as_str(), "warn");
        assert_eq!(Tone::Bad.as_str(), "bad");
        assert_eq!(Tone::Info.as_str(), "info");
        assert_eq!(Tone::Muted.as_str(), "muted");
    }
}
