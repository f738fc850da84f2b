//! Navigation tree nodes.
//!
//! A [`DocumentNode`] serializes as the `[title, target, children]` triple the
//! sidebar script expects, with `null` in place of an empty child list.

use serde::ser::{Serialize, Serializer};

/// One entry of the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentNode {
    /// Display title.
    pub title: String,
    /// Link target (page URL or anchor).
    pub target: String,
    /// Child nodes in document order.
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    /// Create a leaf node.
    pub fn new(title: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target: target.into(),
            children: Vec::new(),
        }
    }

    /// Replace the children of this node.
    #[must_use]
    pub fn with_children(mut self, children: Vec<DocumentNode>) -> Self {
        self.children = children;
        self
    }

    /// True if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Height of the subtree rooted here (1 for a leaf).
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

impl Serialize for DocumentNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let children = (!self.children.is_empty()).then_some(&self.children);
        (&self.title, &self.target, children).serialize(serializer)
    }
}

/// Pre-order walk over a forest yielding `(level, node)` pairs.
///
/// Level is 0 for forest roots.
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a DocumentNode)>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(forest: &'a [DocumentNode]) -> Self {
        Self {
            stack: forest.iter().rev().map(|node| (0, node)).collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a DocumentNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (level, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (level + 1, child)));
        Some((level, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<DocumentNode> {
        vec![
            DocumentNode::new("A", "a.html").with_children(vec![
                DocumentNode::new("A1", "a.html#1")
                    .with_children(vec![DocumentNode::new("A1x", "a.html#1x")]),
                DocumentNode::new("A2", "a.html#2"),
            ]),
            DocumentNode::new("B", "b.html"),
        ]
    }

    #[test]
    fn test_depth_of_leaf_is_one() {
        assert_eq!(DocumentNode::new("A", "a.html").depth(), 1);
    }

    #[test]
    fn test_depth_follows_deepest_branch() {
        assert_eq!(sample()[0].depth(), 3);
    }

    #[test]
    fn test_pre_order_visits_document_order() {
        let forest = sample();

        let visited: Vec<_> = PreOrder::new(&forest)
            .map(|(level, node)| (level, node.title.as_str()))
            .collect();

        assert_eq!(
            visited,
            vec![(0, "A"), (1, "A1"), (2, "A1x"), (1, "A2"), (0, "B")]
        );
    }

    #[test]
    fn test_pre_order_empty_forest() {
        assert_eq!(PreOrder::new(&[]).count(), 0);
    }

    #[test]
    fn test_leaf_serializes_with_null_children() {
        let json = serde_json::to_value(DocumentNode::new("Usage", "index.html#usage")).unwrap();

        assert_eq!(json, serde_json::json!(["Usage", "index.html#usage", null]));
    }

    #[test]
    fn test_branch_serializes_nested_triples() {
        let node = DocumentNode::new("Guide", "guide.html")
            .with_children(vec![DocumentNode::new("Setup", "guide.html#setup")]);

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                "Guide",
                "guide.html",
                [["Setup", "guide.html#setup", null]]
            ])
        );
    }
}
