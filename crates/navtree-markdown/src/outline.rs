//! Section descriptors from a list of markdown pages.

use std::path::{Path, PathBuf};

use navtree_core::SectionDescriptor;

use crate::headings::{Heading, extract_headings};

/// Anchor prefix used for headings without an explicit id.
pub const DEFAULT_ANCHOR_PREFIX: &str = "autotoc_md";

/// Error returned when a page cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum MarkdownError {
    /// Page file could not be read.
    #[error("Failed to read page {}: {source}", path.display())]
    Io {
        /// Page file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A markdown page to include in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSource {
    /// Page name as listed in configuration (e.g. `docs/tutorials/Setup.md`).
    pub name: String,
    /// File to read.
    pub path: PathBuf,
    /// Title override.
    pub title: Option<String>,
    /// Target override.
    pub target: Option<String>,
}

impl PageSource {
    /// Create a page source with derived title and target.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            title: None,
            target: None,
        }
    }

    /// Target of the page node.
    #[must_use]
    pub fn target(&self) -> String {
        self.target
            .clone()
            .unwrap_or_else(|| page_target(&self.name))
    }
}

/// Derive the HTML target for a page name.
///
/// Path separators become underscores and the extension becomes `.html`,
/// prefixed with `md_`:
///
/// ```
/// use navtree_markdown::page_target;
///
/// assert_eq!(
///     page_target("docs/tutorials/Cheatsheet.md"),
///     "md_docs_tutorials_Cheatsheet.html"
/// );
/// ```
#[must_use]
pub fn page_target(name: &str) -> String {
    let path = Path::new(name);
    let stem = path.with_extension("");
    let mangled = stem
        .to_string_lossy()
        .trim_start_matches("./")
        .replace(['/', '\\'], "_");
    format!("md_{mangled}.html")
}

/// Assembles section descriptors from markdown pages.
///
/// Anchor numbering is shared by every page added through the same outline,
/// so anchors stay unique across one generation run.
#[derive(Clone, Debug)]
pub struct MarkdownOutline {
    anchor_prefix: String,
    root: Option<(String, String)>,
    next_anchor: usize,
}

impl Default for MarkdownOutline {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownOutline {
    /// Create an outline with the default anchor prefix and no root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            anchor_prefix: DEFAULT_ANCHOR_PREFIX.to_owned(),
            root: None,
            next_anchor: 0,
        }
    }

    /// Use a different anchor prefix.
    #[must_use]
    pub fn with_anchor_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.anchor_prefix = prefix.into();
        self
    }

    /// Wrap all pages under a project root node.
    ///
    /// A page whose target equals the root target is merged into the root:
    /// its sections become the root's first children.
    #[must_use]
    pub fn with_root(mut self, title: impl Into<String>, target: impl Into<String>) -> Self {
        self.root = Some((title.into(), target.into()));
        self
    }

    /// Descriptors for one page placed at `page_level`.
    ///
    /// The page title is `title`, else the first H1, else the target. A first
    /// H1 uses up one anchor number.
    pub fn page_sections(
        &mut self,
        target: &str,
        title: Option<&str>,
        content: &str,
        page_level: usize,
    ) -> Vec<SectionDescriptor> {
        self.sections_with_fallback(target, title, target, content, page_level)
    }

    /// Read every page and return descriptors.
    ///
    /// Pages keep their listed order, except the page merged into the root,
    /// which is read first so its sections lead the root's children.
    pub fn collect(
        mut self,
        pages: &[PageSource],
    ) -> Result<Vec<SectionDescriptor>, MarkdownError> {
        let mut out = Vec::new();
        let root = self.root.take();
        let page_level = usize::from(root.is_some());

        let root_target = root.as_ref().map(|(_, target)| target.as_str());
        let (main, rest): (Vec<&PageSource>, Vec<&PageSource>) = pages
            .iter()
            .partition(|page| root_target.is_some_and(|target| page.target() == target));

        if let Some((title, target)) = &root {
            out.push(SectionDescriptor::at_level(title.clone(), target.clone(), 0));
        }

        for page in main {
            let content = read_page(page)?;
            let target = page.target();
            let headings = extract_headings(&content);
            out.extend(self.heading_sections(&target, headings.sections, 0));
            tracing::debug!(page = %page.name, target = %target, "Main page merged into root");
        }

        for page in rest {
            let content = read_page(page)?;
            let target = page.target();
            let stem = file_stem(&page.name);
            out.extend(self.sections_with_fallback(
                &target,
                page.title.as_deref(),
                &stem,
                &content,
                page_level,
            ));
            tracing::debug!(page = %page.name, target = %target, "Page sections collected");
        }

        Ok(out)
    }

    fn sections_with_fallback(
        &mut self,
        target: &str,
        title: Option<&str>,
        fallback_title: &str,
        content: &str,
        page_level: usize,
    ) -> Vec<SectionDescriptor> {
        let headings = extract_headings(content);
        // The title heading takes an anchor number even though it is not listed.
        if headings.title.is_some() {
            self.next_anchor();
        }
        let title = title
            .map(ToOwned::to_owned)
            .or(headings.title)
            .unwrap_or_else(|| fallback_title.to_owned());

        let mut out = vec![SectionDescriptor::at_level(title, target, page_level)];
        out.extend(self.heading_sections(target, headings.sections, page_level));
        out
    }

    /// Nest headings below a page node at `page_level`.
    ///
    /// Levels are relative to the shallowest heading and never skip a level.
    fn heading_sections(
        &mut self,
        target: &str,
        headings: Vec<Heading>,
        page_level: usize,
    ) -> Vec<SectionDescriptor> {
        let Some(base) = headings.iter().map(|h| h.level).min() else {
            return Vec::new();
        };

        let mut prev = page_level;
        headings
            .into_iter()
            .map(|heading| {
                let wanted = page_level + 1 + usize::from(heading.level - base);
                let level = wanted.min(prev + 1);
                prev = level;

                let anchor = heading.id.unwrap_or_else(|| self.next_anchor());
                SectionDescriptor::at_level(heading.text, format!("{target}#{anchor}"), level)
            })
            .collect()
    }

    fn next_anchor(&mut self) -> String {
        let anchor = format!("{}{}", self.anchor_prefix, self.next_anchor);
        self.next_anchor += 1;
        anchor
    }
}

fn read_page(page: &PageSource) -> Result<String, MarkdownError> {
    std::fs::read_to_string(&page.path).map_err(|source| MarkdownError::Io {
        path: page.path.clone(),
        source,
    })
}

fn file_stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_owned())
}
