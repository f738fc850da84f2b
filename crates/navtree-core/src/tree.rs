//! Result of one tree generation run.

use std::collections::HashSet;

use crate::builder::MAX_DEPTH;
use crate::descriptor::SectionDescriptor;
use crate::error::StructureError;
use crate::index::NavigationIndex;
use crate::node::{DocumentNode, PreOrder};

/// Navigation forest together with its index.
///
/// Built once per generation run and handed to the emitters. There is no
/// shared global: each run owns its own `NavTree`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavTree {
    forest: Vec<DocumentNode>,
    index: NavigationIndex,
}

impl NavTree {
    /// Index a forest already known to satisfy the target invariants.
    pub(crate) fn new_unchecked(forest: Vec<DocumentNode>) -> Self {
        let index = NavigationIndex::from_forest(&forest);
        Self { forest, index }
    }

    /// Validate and index an already nested forest.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::EmptyTarget`] or
    /// [`StructureError::DuplicateTarget`] if a target invariant is broken,
    /// and [`StructureError::DepthExceeded`] past [`MAX_DEPTH`] levels.
    pub fn from_forest(forest: Vec<DocumentNode>) -> Result<Self, StructureError> {
        check_targets(&forest)?;
        Ok(Self::new_unchecked(forest))
    }

    /// Top-level nodes in document order.
    #[must_use]
    pub fn forest(&self) -> &[DocumentNode] {
        &self.forest
    }

    /// Page list and target lookup.
    #[must_use]
    pub fn index(&self) -> &NavigationIndex {
        &self.index
    }

    /// Split into forest and index.
    #[must_use]
    pub fn into_parts(self) -> (Vec<DocumentNode>, NavigationIndex) {
        (self.forest, self.index)
    }

    /// True if the forest has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    /// Pre-order walk yielding `(level, node)`.
    pub fn walk(&self) -> PreOrder<'_> {
        PreOrder::new(&self.forest)
    }

    /// Total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Number of levels in the deepest branch (0 for an empty forest).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.forest.iter().map(DocumentNode::depth).max().unwrap_or(0)
    }

    /// Targets of leaf nodes in pre-order.
    #[must_use]
    pub fn leaf_targets(&self) -> Vec<&str> {
        self.walk()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.target.as_str())
            .collect()
    }

    /// Node at a tree path.
    #[must_use]
    pub fn node_at(&self, path: &[usize]) -> Option<&DocumentNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.forest.get(*first)?;
        for &pos in rest {
            node = node.children.get(pos)?;
        }
        Some(node)
    }

    /// Node for a target, with the same page fallback as
    /// [`NavigationIndex::path_of`].
    #[must_use]
    pub fn find(&self, target: &str) -> Option<&DocumentNode> {
        self.index.path_of(target).and_then(|path| self.node_at(path))
    }

    /// Flatten back into level-placed descriptors in pre-order.
    ///
    /// Building the result again yields an equal tree.
    #[must_use]
    pub fn flatten(&self) -> Vec<SectionDescriptor> {
        self.walk()
            .map(|(level, node)| {
                SectionDescriptor::at_level(node.title.clone(), node.target.clone(), level)
            })
            .collect()
    }
}

/// Reject empty and repeated targets, and nesting past the depth cap.
fn check_targets(forest: &[DocumentNode]) -> Result<(), StructureError> {
    let mut seen = HashSet::new();
    for (level, node) in PreOrder::new(forest) {
        if level >= MAX_DEPTH {
            return Err(StructureError::DepthExceeded {
                title: node.title.clone(),
                limit: MAX_DEPTH,
            });
        }
        if node.target.trim().is_empty() {
            return Err(StructureError::EmptyTarget {
                title: node.title.clone(),
            });
        }
        if !seen.insert(node.target.as_str()) {
            return Err(StructureError::DuplicateTarget {
                target: node.target.clone(),
            });
        }
    }
    Ok(())
}
