//! Structural errors raised while assembling a navigation tree.

/// Malformed hierarchy in the section input.
///
/// This is the only way tree assembly can fail. Empty input and single-page
/// corpora are valid and never produce an error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    /// A section names a parent identifier that was never declared before it.
    #[error("Section \"{title}\" references unknown parent \"{parent}\"")]
    UnknownParent {
        /// Title of the offending section.
        title: String,
        /// Parent identifier as written in the input.
        parent: String,
    },
    /// The parent exists, but a later sibling branch already closed it.
    #[error(
        "Section \"{title}\" cannot attach to \"{parent}\" after that section was closed by a later entry"
    )]
    ParentNotOpen {
        /// Title of the offending section.
        title: String,
        /// Parent identifier as written in the input.
        parent: String,
    },
    /// A section is nested more than one level below the current section.
    #[error("Section \"{title}\" at level {level} skips a level (deepest allowed here is {max})")]
    LevelSkip {
        /// Title of the offending section.
        title: String,
        /// Requested nesting level.
        level: usize,
        /// Deepest level the section could have used.
        max: usize,
    },
    /// A section would sit deeper than [`MAX_DEPTH`](crate::MAX_DEPTH) levels.
    #[error("Section \"{title}\" exceeds the maximum nesting of {limit} levels")]
    DepthExceeded {
        /// Title of the offending section.
        title: String,
        /// Number of levels allowed.
        limit: usize,
    },
    /// A section has an empty or whitespace-only target.
    #[error("Section \"{title}\" has an empty target")]
    EmptyTarget {
        /// Title of the offending section.
        title: String,
    },
    /// The same target appears on more than one section.
    #[error("Target \"{target}\" appears more than once")]
    DuplicateTarget {
        /// The repeated target.
        target: String,
    },
    /// The same identifier is declared by more than one section.
    #[error("Identifier \"{id}\" is declared more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
    /// An outline entry sets both a level and a parent, or sets either inside `children`.
    #[error("Section \"{title}\" has conflicting placement (use one of level, parent or nesting)")]
    ConflictingPlacement {
        /// Title of the offending section.
        title: String,
    },
}
