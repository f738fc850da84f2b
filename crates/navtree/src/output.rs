//! Run reporting on stderr.

use std::path::Path;

use console::{Style, Term};
use navtree_core::NavTree;

/// Reports the progress and outcome of a generation run.
pub(crate) struct Output {
    term: Term,
    done: Style,
    caution: Style,
    failure: Style,
    detail: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            done: Style::new().green(),
            caution: Style::new().yellow(),
            failure: Style::new().red(),
            detail: Style::new().dim(),
        }
    }

    /// Report the shape of a built tree, one figure per line.
    pub(crate) fn tree_summary(&self, tree: &NavTree) {
        for line in summary_lines(tree) {
            self.line(&self.detail, &line);
        }
    }

    /// Report a written artifact.
    pub(crate) fn artifact(&self, path: &Path) {
        self.line(&self.detail, &format!("Wrote {}", path.display()));
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.done, msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(&self.caution, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.failure, msg);
    }

    fn line(&self, style: &Style, msg: &str) {
        // Write failures on stderr are ignored.
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}

fn summary_lines(tree: &NavTree) -> [String; 4] {
    [
        format!("Top-level pages: {}", tree.index().pages().len()),
        format!("Nodes: {}", tree.node_count()),
        format!("Leaves: {}", tree.leaf_targets().len()),
        format!("Depth: {}", tree.depth()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use navtree_core::{SectionDescriptor, build_tree};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_lines_describe_tree_shape() {
        let tree = build_tree(vec![
            SectionDescriptor::root("Home", "index.html"),
            SectionDescriptor::at_level("Usage", "index.html#usage", 1),
            SectionDescriptor::at_level("Types", "index.html#types", 1),
            SectionDescriptor::root("API", "api.html"),
        ])
        .unwrap();

        assert_eq!(
            summary_lines(&tree),
            [
                "Top-level pages: 2".to_owned(),
                "Nodes: 4".to_owned(),
                "Leaves: 3".to_owned(),
                "Depth: 2".to_owned(),
            ]
        );
    }

    #[test]
    fn test_summary_lines_empty_tree() {
        let lines = summary_lines(&NavTree::default());

        assert_eq!(lines[1], "Nodes: 0");
        assert_eq!(lines[3], "Depth: 0");
    }
}
