//! Tree assembly from ordered section descriptors.
//!
//! # Architecture
//!
//! Sections are placed into a flat arena with children tracked by indices,
//! then materialized into a [`DocumentNode`] forest in one pass. Placement
//! keeps a stack of currently open ancestors (`open[d]` is the section at
//! depth `d`), so every accepted input is already in pre-order and the
//! output preserves input order at every level.

use std::collections::{HashMap, HashSet};

use crate::descriptor::{Placement, SectionDescriptor};
use crate::error::StructureError;
use crate::node::DocumentNode;
use crate::tree::NavTree;

/// Deepest nesting a tree may have, counted in levels.
///
/// Serialization, comparison and drop of [`DocumentNode`] recurse once per
/// level, so depth is capped well below what a thread stack can hold.
pub const MAX_DEPTH: usize = 256;

/// Arena slot for a section before materialization.
struct Slot {
    title: String,
    target: String,
    children: Vec<usize>,
}

/// Builder for constructing [`NavTree`] instances.
///
/// # Example
///
/// ```
/// use navtree_core::{SectionDescriptor, TreeBuilder};
///
/// let mut builder = TreeBuilder::new();
/// builder.push(SectionDescriptor::root("Guide", "guide.html"));
/// builder.push(SectionDescriptor::child_of("Setup", "guide.html#setup", "guide.html"));
/// let tree = builder.build()?;
///
/// assert_eq!(tree.forest()[0].children[0].title, "Setup");
/// # Ok::<(), navtree_core::StructureError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct TreeBuilder {
    descriptors: Vec<SectionDescriptor>,
}

impl TreeBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section to the input.
    pub fn push(&mut self, descriptor: SectionDescriptor) {
        self.descriptors.push(descriptor);
    }

    /// Number of sections pushed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// True if no sections were pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Assemble the navigation tree.
    ///
    /// The builder is left untouched, so calling `build` again yields an
    /// identical tree.
    pub fn build(&self) -> Result<NavTree, StructureError> {
        let mut slots: Vec<Slot> = Vec::with_capacity(self.descriptors.len());
        let mut roots: Vec<usize> = Vec::new();
        let mut open: Vec<usize> = Vec::new();
        let mut keys: HashMap<&str, usize> = HashMap::with_capacity(self.descriptors.len());
        let mut targets: HashSet<&str> = HashSet::with_capacity(self.descriptors.len());

        for desc in &self.descriptors {
            if desc.target.trim().is_empty() {
                return Err(StructureError::EmptyTarget {
                    title: desc.title.clone(),
                });
            }
            if !targets.insert(desc.target.as_str()) {
                return Err(StructureError::DuplicateTarget {
                    target: desc.target.clone(),
                });
            }
            if keys.contains_key(desc.key()) {
                return Err(StructureError::DuplicateId {
                    id: desc.key().to_owned(),
                });
            }

            let depth = resolve_depth(desc, &open, &keys)?;
            if depth >= MAX_DEPTH {
                return Err(StructureError::DepthExceeded {
                    title: desc.title.clone(),
                    limit: MAX_DEPTH,
                });
            }
            open.truncate(depth);

            let idx = slots.len();
            slots.push(Slot {
                title: desc.title.clone(),
                target: desc.target.clone(),
                children: Vec::new(),
            });
            match open.last() {
                Some(&parent) => slots[parent].children.push(idx),
                None => roots.push(idx),
            }
            open.push(idx);
            keys.insert(desc.key(), idx);
        }

        let forest: Vec<DocumentNode> = roots
            .into_iter()
            .map(|idx| materialize(&mut slots, idx))
            .collect();

        tracing::debug!(
            sections = self.descriptors.len(),
            roots = forest.len(),
            "Navigation tree assembled"
        );

        Ok(NavTree::new_unchecked(forest))
    }
}

impl Extend<SectionDescriptor> for TreeBuilder {
    fn extend<I: IntoIterator<Item = SectionDescriptor>>(&mut self, iter: I) {
        self.descriptors.extend(iter);
    }
}

impl FromIterator<SectionDescriptor> for TreeBuilder {
    fn from_iter<I: IntoIterator<Item = SectionDescriptor>>(iter: I) -> Self {
        Self {
            descriptors: iter.into_iter().collect(),
        }
    }
}

/// Build a navigation tree from ordered section descriptors.
pub fn build_tree(
    descriptors: impl IntoIterator<Item = SectionDescriptor>,
) -> Result<NavTree, StructureError> {
    descriptors.into_iter().collect::<TreeBuilder>().build()
}

/// Depth at which a section attaches, given the open ancestor stack.
fn resolve_depth(
    desc: &SectionDescriptor,
    open: &[usize],
    keys: &HashMap<&str, usize>,
) -> Result<usize, StructureError> {
    match &desc.placement {
        Placement::Root => Ok(0),
        Placement::Level(level) => {
            if *level > open.len() {
                return Err(StructureError::LevelSkip {
                    title: desc.title.clone(),
                    level: *level,
                    max: open.len(),
                });
            }
            Ok(*level)
        }
        Placement::Parent(parent) => {
            let Some(&parent_idx) = keys.get(parent.as_str()) else {
                return Err(StructureError::UnknownParent {
                    title: desc.title.clone(),
                    parent: parent.clone(),
                });
            };
            open.iter()
                .position(|&idx| idx == parent_idx)
                .map(|pos| pos + 1)
                .ok_or_else(|| StructureError::ParentNotOpen {
                    title: desc.title.clone(),
                    parent: parent.clone(),
                })
        }
    }
}

/// Move a slot and its subtree out of the arena.
fn materialize(slots: &mut [Slot], idx: usize) -> DocumentNode {
    let title = std::mem::take(&mut slots[idx].title);
    let target = std::mem::take(&mut slots[idx].target);
    let children = std::mem::take(&mut slots[idx].children)
        .into_iter()
        .map(|child| materialize(slots, child))
        .collect();

    DocumentNode {
        title,
        target,
        children,
    }
}
