use std::collections::BTreeSet;

/// The fixed catalog of refit tools a run can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToolKind {
    Audit,
    Refit,
    Drydock,
    Docs,
}

pub const TOOL_CATALOG: [ToolKind; 4] = [
    ToolKind::Audit,
    ToolKind::Refit,
    ToolKind::Drydock,
    ToolKind::Docs,
];

impl ToolKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::Audit => "audit",
            Self::Refit => "refit",
            Self::Drydock => "drydock",
            Self::Docs => "docs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Audit => "Code audit",
            Self::Refit => "Automated refit",
            Self::Drydock => "CI drydock",
            Self::Docs => "Docs coverage",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Audit => "Inspect the repository and report violations.",
            Self::Refit => "Apply automated fixes for known violation classes.",
            Self::Drydock => "Generate Docker + GitLab CI verification.",
            Self::Docs => "Backfill documentation for undocumented modules.",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_lowercase().as_str() {
            "audit" => Some(Self::Audit),
            "refit" => Some(Self::Refit),
            "drydock" => Some(Self::Drydock),
            "docs" => Some(Self::Docs),
            _ => None,
        }
    }
}

/// Set of enabled tools, mutated only by explicit toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolSelection {
    enabled: BTreeSet<ToolKind>,
}

impl ToolSelection {
    pub fn toggle(&mut self, tool: ToolKind) {
        if !self.enabled.remove(&tool) {
            self.enabled.insert(tool);
        }
    }

    pub fn contains(&self, tool: ToolKind) -> bool {
        self.enabled.contains(&tool)
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.enabled.iter().map(|tool| tool.id()).collect()
    }

    pub fn clear(&mut self) {
        self.enabled.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = ToolSelection::default();
        assert!(selection.is_empty());

        selection.toggle(ToolKind::Audit);
        assert!(selection.contains(ToolKind::Audit));
        assert_eq!(selection.len(), 1);

        selection.toggle(ToolKind::Audit);
        assert!(!selection.contains(ToolKind::Audit));
        assert!(selection.is_empty());
    }

    #[test]
    fn ids_cover_the_whole_catalog() {
        let mut selection = ToolSelection::default();
        for tool in TOOL_CATALOG {
            selection.toggle(tool);
        }
        assert_eq!(selection.ids(), vec!["audit", "refit", "drydock", "docs"]);
    }

    #[test]
    fn from_id_round_trips_and_rejects_unknown() {
        for tool in TOOL_CATALOG {
            assert_eq!(ToolKind::from_id(tool.id()), Some(tool));
        }
        assert_eq!(ToolKind::from_id(" Drydock "), Some(ToolKind::Drydock));
        assert_eq!(ToolKind::from_id("lint"), None);
    }
}
