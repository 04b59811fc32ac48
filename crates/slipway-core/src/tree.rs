use crate::diff::ChangedFile;

/// Flattened, depth-annotated row of the file tree projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeItem {
    /// Full slash-joined path; doubles as a stable identifier.
    pub id: String,
    /// Last path segment.
    pub label: String,
    /// Root children sit at depth 0.
    pub depth: usize,
    pub kind: TreeItemKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeItemKind {
    Dir,
    File,
}

#[derive(Debug, Default)]
struct TreeNode {
    children: Vec<(String, TreeNode)>,
    owns_file: bool,
}

impl TreeNode {
    fn child_mut(&mut self, segment: &str) -> &mut TreeNode {
        if let Some(index) = self
            .children
            .iter()
            .position(|(name, _)| name == segment)
        {
            return &mut self.children[index].1;
        }
        self.children.push((segment.to_string(), TreeNode::default()));
        let last = self.children.len() - 1;
        &mut self.children[last].1
    }

    /// A node renders as a file only when it owns a record and nothing
    /// nests under it; a path that is also a directory prefix is a dir.
    fn kind(&self) -> TreeItemKind {
        if self.owns_file && self.children.is_empty() {
            TreeItemKind::File
        } else {
            TreeItemKind::Dir
        }
    }
}

/// Project the flat changed-file list into a sorted hierarchical view.
///
/// Pure and deterministic: same input list, same output rows. Siblings are
/// ordered directories first, then by case-insensitive segment name with a
/// raw comparison as the final tie-break.
pub fn build_file_tree(files: &[ChangedFile]) -> Vec<FileTreeItem> {
    let mut root = TreeNode::default();

    for file in files {
        let segments: Vec<&str> = file
            .path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        if segments.is_empty() {
            continue;
        }

        let mut node = &mut root;
        for segment in &segments {
            node = node.child_mut(segment);
        }
        node.owns_file = true;
    }

    let mut items = Vec::new();
    flatten(&root, "", 0, &mut items);
    items
}

fn flatten(node: &TreeNode, prefix: &str, depth: usize, items: &mut Vec<FileTreeItem>) {
    let mut order: Vec<usize> = (0..node.children.len()).collect();
    order.sort_by(|&a, &b| {
        let (name_a, child_a) = &node.children[a];
        let (name_b, child_b) = &node.children[b];
        let dir_a = child_a.kind() == TreeItemKind::Dir;
        let dir_b = child_b.kind() == TreeItemKind::Dir;
        dir_b
            .cmp(&dir_a)
            .then_with(|| name_a.to_lowercase().cmp(&name_b.to_lowercase()))
            .then_with(|| name_a.cmp(name_b))
    });

    for index in order {
        let (name, child) = &node.children[index];
        let id = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}/{name}")
        };

        items.push(FileTreeItem {
            id: id.clone(),
            label: name.clone(),
            depth,
            kind: child.kind(),
        });

        flatten(child, &id, depth + 1, items);
    }
}
