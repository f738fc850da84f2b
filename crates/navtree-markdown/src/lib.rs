//! Navigation sections from markdown pages.
//!
//! Walks the headings of each page with `pulldown-cmark` and produces
//! level-placed [`SectionDescriptor`](navtree_core::SectionDescriptor)s ready
//! for [`build_tree`](navtree_core::build_tree):
//!
//! - each page becomes a node titled by its explicit title, first H1, or file stem
//! - every other heading becomes a nested section anchored at
//!   `page.html#autotoc_mdN`, or at its `{#id}` attribute when present
//! - a page's title heading uses up one anchor number, so numbering matches
//!   the generated HTML anchors
//!
//! # Example
//!
//! ```
//! use navtree_markdown::MarkdownOutline;
//!
//! let mut outline = MarkdownOutline::new();
//! let sections = outline.page_sections("guide.html", None, "# Guide\n\n## Setup\n", 0);
//!
//! assert_eq!(sections.len(), 2);
//! assert_eq!(sections[1].target, "guide.html#autotoc_md1");
//! ```

mod headings;
mod outline;

pub use headings::{Heading, PageHeadings, extract_headings};
pub use outline::{DEFAULT_ANCHOR_PREFIX, MarkdownError, MarkdownOutline, PageSource, page_target};
