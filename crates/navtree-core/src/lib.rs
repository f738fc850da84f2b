//! Navigation tree assembly for generated documentation.
//!
//! This crate provides:
//! - [`TreeBuilder`]: Assembles a [`DocumentNode`] forest from ordered [`SectionDescriptor`]s
//! - [`NavigationIndex`]: Top-level page list plus target to tree path lookup
//! - [`NavTree`]: The immutable result of one generation run
//! - Outline loading from YAML and emitters for the sidebar script and JSON
//!
//! # Quick Start
//!
//! ```
//! use navtree_core::{SectionDescriptor, build_tree};
//!
//! let tree = build_tree(vec![
//!     SectionDescriptor::root("Guide", "guide.html"),
//!     SectionDescriptor::at_level("Setup", "guide.html#setup", 1),
//!     SectionDescriptor::at_level("Usage", "guide.html#usage", 1),
//! ])?;
//!
//! assert_eq!(tree.forest().len(), 1);
//! assert_eq!(tree.forest()[0].children.len(), 2);
//! assert_eq!(tree.index().pages(), ["guide.html"]);
//! assert_eq!(tree.index().path_of("guide.html#usage"), Some(&[0, 1][..]));
//! # Ok::<(), navtree_core::StructureError>(())
//! ```

mod builder;
mod descriptor;
mod emit;
mod error;
mod index;
mod node;
mod outline;
mod tree;

pub use builder::{MAX_DEPTH, TreeBuilder, build_tree};
pub use descriptor::{Placement, SectionDescriptor};
pub use emit::{
    Artifact, JSON_FILE, OutputFormat, PATHS_SCRIPT_FILE, SCRIPT_FILE, UnknownFormat, render,
    render_json, render_paths_script, render_script,
};
pub use error::StructureError;
pub use index::NavigationIndex;
pub use node::{DocumentNode, PreOrder};
pub use outline::{OutlineEntry, OutlineError, load_outline, parse_outline};
pub use tree::NavTree;
