//! Section descriptors consumed by the tree builder.

/// Where a section sits in the hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Top-level page. Equivalent to `Level(0)`.
    Root,
    /// Nesting level, 0 for top-level pages.
    Level(usize),
    /// Child of the section with this identifier.
    Parent(String),
}

/// One entry of the ordered builder input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionDescriptor {
    /// Identifier children refer to. Defaults to the target when absent.
    pub id: Option<String>,
    /// Display title. May be empty.
    pub title: String,
    /// Link target (page URL or anchor).
    pub target: String,
    /// Position in the hierarchy.
    pub placement: Placement,
}

impl SectionDescriptor {
    /// Create a top-level section.
    pub fn root(title: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(title, target, Placement::Root)
    }

    /// Create a section at an explicit nesting level.
    pub fn at_level(title: impl Into<String>, target: impl Into<String>, level: usize) -> Self {
        Self::new(title, target, Placement::Level(level))
    }

    /// Create a section attached to the section identified by `parent`.
    pub fn child_of(
        title: impl Into<String>,
        target: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        Self::new(title, target, Placement::Parent(parent.into()))
    }

    fn new(title: impl Into<String>, target: impl Into<String>, placement: Placement) -> Self {
        Self {
            id: None,
            title: title.into(),
            target: target.into(),
            placement,
        }
    }

    /// Set an explicit identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Identifier used for parent references.
    #[must_use]
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.target)
    }
}
