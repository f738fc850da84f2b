//! YAML outline loading.
//!
//! An outline is a list of entries. Each entry is placed by nesting it under
//! `children`, by an explicit `level`, or by naming a `parent`:
//!
//! ```yaml
//! - title: Guide
//!   target: guide.html
//!   children:
//!     - { title: Setup, target: "guide.html#setup" }
//! - { title: API, target: api.html, level: 0 }
//! - { title: Errors, target: "api.html#errors", parent: api.html }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::descriptor::{Placement, SectionDescriptor};
use crate::error::StructureError;

/// Outline entry as parsed from YAML.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutlineEntry {
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Link target.
    pub target: String,
    /// Identifier for `parent` references.
    #[serde(default)]
    pub id: Option<String>,
    /// Explicit nesting level.
    #[serde(default)]
    pub level: Option<usize>,
    /// Parent identifier.
    #[serde(default)]
    pub parent: Option<String>,
    /// Nested entries.
    #[serde(default)]
    pub children: Vec<OutlineEntry>,
}

/// Error returned when loading an outline fails.
#[derive(Debug, thiserror::Error)]
pub enum OutlineError {
    /// Outline file could not be read.
    #[error("Failed to read outline {}: {source}", path.display())]
    Io {
        /// Outline file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Outline is not valid YAML or has unexpected fields.
    #[error("Invalid outline: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Outline entries have conflicting placement.
    #[error("{0}")]
    Structure(#[from] StructureError),
}

/// Parse outline YAML into ordered section descriptors.
///
/// Empty content yields no descriptors.
pub fn parse_outline(content: &str) -> Result<Vec<SectionDescriptor>, OutlineError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let entries: Vec<OutlineEntry> = serde_yaml::from_str(trimmed)?;
    let mut descriptors = Vec::new();
    flatten_entries(entries, None, &mut descriptors)?;
    Ok(descriptors)
}

/// Read and parse an outline file.
pub fn load_outline(path: &Path) -> Result<Vec<SectionDescriptor>, OutlineError> {
    let content = std::fs::read_to_string(path).map_err(|source| OutlineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let descriptors = parse_outline(&content)?;
    tracing::debug!(
        path = %path.display(),
        sections = descriptors.len(),
        "Outline loaded"
    );
    Ok(descriptors)
}

/// Flatten entries in pre-order. Nested entries attach to `enclosing`.
fn flatten_entries(
    entries: Vec<OutlineEntry>,
    enclosing: Option<&str>,
    out: &mut Vec<SectionDescriptor>,
) -> Result<(), StructureError> {
    for entry in entries {
        let placement = match (enclosing, entry.level, entry.parent) {
            (Some(parent), None, None) => Placement::Parent(parent.to_owned()),
            (None, None, None) => Placement::Root,
            (None, Some(level), None) => Placement::Level(level),
            (None, None, Some(parent)) => Placement::Parent(parent),
            _ => {
                return Err(StructureError::ConflictingPlacement { title: entry.title });
            }
        };
        let descriptor = SectionDescriptor {
            id: entry.id,
            title: entry.title,
            target: entry.target,
            placement,
        };
        let key = descriptor.key().to_owned();
        out.push(descriptor);
        flatten_entries(entry.children, Some(&key), out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_tree;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_outline_is_valid() {
        assert!(parse_outline("").unwrap().is_empty());
        assert!(parse_outline("  \n").unwrap().is_empty());
        assert!(parse_outline("[]").unwrap().is_empty());
    }

    #[test]
    fn test_nested_children_attach_to_enclosing_entry() {
        let yaml = r#"
- title: Guide
  target: guide.html
  children:
    - title: Setup
      target: "guide.html#setup"
"#;

        let descriptors = parse_outline(yaml).unwrap();

        assert_eq!(
            descriptors,
            vec![
                SectionDescriptor::root("Guide", "guide.html"),
                SectionDescriptor::child_of("Setup", "guide.html#setup", "guide.html"),
            ]
        );
    }

    #[test]
    fn test_nested_children_use_explicit_id() {
        let yaml = r#"
- title: Guide
  target: guide.html
  id: guide
  children:
    - { title: Setup, target: "guide.html#setup" }
"#;

        let descriptors = parse_outline(yaml).unwrap();

        assert_eq!(
            descriptors[1].placement,
            Placement::Parent("guide".to_owned())
        );
    }

    #[test]
    fn test_mixed_placements_build_one_tree() {
        let yaml = r#"
- title: Shkyera Grad
  target: index.html
  children:
    - title: Cheatsheet
      target: md_docs_tutorials_Cheatsheet.html
      children:
        - { title: Usage, target: "index.html#autotoc_md0" }
- { title: Appendix, target: appendix.html, level: 0 }
- { title: Notes, target: "appendix.html#notes", parent: appendix.html }
- { title: More, target: "appendix.html#more", level: 1 }
"#;

        let tree = build_tree(parse_outline(yaml).unwrap()).unwrap();

        assert_eq!(tree.index().pages(), ["index.html", "appendix.html"]);
        assert_eq!(tree.index().path_of("index.html#autotoc_md0"), Some(&[0, 0, 0][..]));
        assert_eq!(tree.index().path_of("appendix.html#more"), Some(&[1, 1][..]));
    }

    #[test]
    fn test_missing_title_defaults_to_empty() {
        let descriptors = parse_outline("- { target: index.html }").unwrap();

        assert_eq!(descriptors[0].title, "");
    }

    #[test]
    fn test_level_and_parent_conflict() {
        let yaml = "- { title: Both, target: a.html, level: 1, parent: b.html }";

        let err = parse_outline(yaml).unwrap_err();

        assert!(matches!(
            err,
            OutlineError::Structure(StructureError::ConflictingPlacement { .. })
        ));
    }

    #[test]
    fn test_nested_entry_with_level_conflicts() {
        let yaml = r#"
- title: Guide
  target: guide.html
  children:
    - { title: Setup, target: "guide.html#setup", level: 1 }
"#;

        let err = parse_outline(yaml).unwrap_err();

        assert!(matches!(
            err,
            OutlineError::Structure(StructureError::ConflictingPlacement { .. })
        ));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = parse_outline("- { title: A, target: a.html, url: a.html }").unwrap_err();

        assert!(matches!(err, OutlineError::Parse(_)));
    }

    #[test]
    fn test_missing_target_is_parse_error() {
        let err = parse_outline("- { title: A }").unwrap_err();

        assert!(matches!(err, OutlineError::Parse(_)));
    }

    #[test]
    fn test_load_outline_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outline.yaml");
        std::fs::write(&path, "- { title: Home, target: index.html }\n").unwrap();

        let descriptors = load_outline(&path).unwrap();

        assert_eq!(descriptors, vec![SectionDescriptor::root("Home", "index.html")]);
    }

    #[test]
    fn test_load_outline_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_outline(&dir.path().join("missing.yaml")).unwrap_err();

        assert!(matches!(err, OutlineError::Io { .. }));
        assert!(err.to_string().contains("missing.yaml"));
    }
}
