use std::fmt;

use slipway_core::config::{load_config, resolve_config_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Pass,
    Fail,
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorCheck {
    pub name: String,
    pub state: CheckState,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorReport {
    pub checks: Vec<DoctorCheck>,
}

impl DoctorReport {
    pub fn has_failures(&self) -> bool {
        self.checks
            .iter()
            .any(|check| check.state == CheckState::Fail)
    }

    pub fn summary(&self) -> String {
        let passed = self
            .checks
            .iter()
            .filter(|check| check.state == CheckState::Pass)
            .count();
        let failed = self.checks.len().saturating_sub(passed);
        format!("{passed} passed, {failed} failed")
    }
}

pub fn run_doctor() -> DoctorReport {
    let mut checks = Vec::new();

    let config_path = match resolve_config_path() {
        Ok(path) => {
            checks.push(pass_check(
                "config path resolves",
                path.display().to_string(),
            ));
            Some(path)
        }
        Err(error) => {
            checks.push(fail_check("config path resolves", format!("{error:#}")));
            None
        }
    };

    if let Some(path) = config_path {
        if !path.exists() {
            checks.push(pass_check(
                "config file",
                "not present; built-in defaults in use",
            ));
        } else {
            checks.push(match load_config(&path) {
                Ok(config) => pass_check("config file", format!("valid, version {}", config.version)),
                Err(error) => fail_check("config file", error.to_string()),
            });
        }
    }

    DoctorReport { checks }
}

fn pass_check(name: &str, details: impl Into<String>) -> DoctorCheck {
    DoctorCheck {
        name: name.to_string(),
        state: CheckState::Pass,
        details: details.into(),
    }
}

fn fail_check(name: &str, details: impl Into<String>) -> DoctorCheck {
    DoctorCheck {
        name: name.to_string(),
        state: CheckState::Fail,
        details: details.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_pass_and_fail() {
        let report = DoctorReport {
            checks: vec![
                pass_check("a", "ok"),
                fail_check("b", "broken"),
                pass_check("c", "ok"),
            ],
        };
        assert_eq!(report.summary(), "2 passed, 1 failed");
        assert!(report.has_failures());
    }
}
