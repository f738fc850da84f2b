//! Navigation index over a built forest.
//!
//! Holds the ordered top-level page targets (the `NAVTREEINDEX` list) and a
//! map from every target in the forest to its tree path, the sequence of child
//! positions from the forest root.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::node::{DocumentNode, PreOrder};

/// Page list and target lookup for a navigation tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NavigationIndex {
    pages: Vec<String>,
    paths: BTreeMap<String, Vec<usize>>,
}

impl NavigationIndex {
    /// Index a forest. Targets are assumed unique.
    pub(crate) fn from_forest(forest: &[DocumentNode]) -> Self {
        let pages = forest.iter().map(|node| node.target.clone()).collect();

        // `path[d]` is the position among siblings of the node last seen at depth `d`.
        let mut path: Vec<usize> = Vec::new();
        let mut paths = BTreeMap::new();
        for (level, node) in PreOrder::new(forest) {
            if path.len() > level {
                path.truncate(level + 1);
                path[level] += 1;
            } else {
                path.push(0);
            }
            paths.insert(node.target.clone(), path.clone());
        }

        Self { pages, paths }
    }

    /// Targets of top-level pages in document order.
    #[must_use]
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Tree path of every target, keyed by target.
    #[must_use]
    pub fn paths(&self) -> &BTreeMap<String, Vec<usize>> {
        &self.paths
    }

    /// Number of indexed targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True if the forest was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Tree path for a target.
    ///
    /// An anchored target (`page.html#frag`) that is not indexed falls back to
    /// its page, the way the sidebar resolves links to unlisted anchors.
    #[must_use]
    pub fn path_of(&self, target: &str) -> Option<&[usize]> {
        if let Some(path) = self.paths.get(target) {
            return Some(path.as_slice());
        }
        let (page, _fragment) = target.split_once('#')?;
        self.paths.get(page).map(Vec::as_slice)
    }

    /// Position in [`pages`](Self::pages) of the top-level page containing `target`.
    #[must_use]
    pub fn page_position(&self, target: &str) -> Option<usize> {
        self.path_of(target).and_then(|path| path.first().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn forest() -> Vec<DocumentNode> {
        vec![
            DocumentNode::new("Home", "index.html").with_children(vec![
                DocumentNode::new("Usage", "index.html#usage"),
                DocumentNode::new("Guide", "guide.html")
                    .with_children(vec![DocumentNode::new("Setup", "guide.html#setup")]),
            ]),
            DocumentNode::new("API", "api.html"),
        ]
    }

    #[test]
    fn test_pages_are_top_level_targets() {
        let index = NavigationIndex::from_forest(&forest());

        assert_eq!(index.pages(), ["index.html", "api.html"]);
    }

    #[test]
    fn test_every_node_has_a_path() {
        let index = NavigationIndex::from_forest(&forest());

        assert_eq!(index.len(), 5);
        assert_eq!(index.path_of("index.html"), Some(&[0][..]));
        assert_eq!(index.path_of("guide.html#setup"), Some(&[0, 1, 0][..]));
        assert_eq!(index.path_of("api.html"), Some(&[1][..]));
    }

    #[test]
    fn test_unknown_anchor_falls_back_to_page() {
        let index = NavigationIndex::from_forest(&forest());

        assert_eq!(index.path_of("guide.html#missing"), Some(&[0, 1][..]));
    }

    #[test]
    fn test_unknown_page_has_no_path() {
        let index = NavigationIndex::from_forest(&forest());

        assert_eq!(index.path_of("missing.html"), None);
        assert_eq!(index.path_of("missing.html#frag"), None);
    }

    #[test]
    fn test_page_position_resolves_owning_page() {
        let index = NavigationIndex::from_forest(&forest());

        assert_eq!(index.page_position("guide.html#setup"), Some(0));
        assert_eq!(index.page_position("api.html"), Some(1));
        assert_eq!(index.page_position("nowhere.html"), None);
    }

    #[test]
    fn test_empty_forest_gives_empty_index() {
        let index = NavigationIndex::from_forest(&[]);

        assert!(index.is_empty());
        assert!(index.pages().is_empty());
    }
}
