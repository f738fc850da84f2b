//! Output artifacts for the static sidebar viewer.
//!
//! # Formats
//!
//! - **Script**: `navtreedata.js` declaring `NAVTREE` (nested
//!   `[title, target, children-or-null]` triples) and `NAVTREEINDEX` (top-level
//!   page targets), plus `navtreepaths.js` declaring `NAVTREEPATHS`
//!   (target to tree path).
//! - **JSON**: `navtree.json` with `tree`, `index` and `paths` keys.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::node::DocumentNode;
use crate::tree::NavTree;

/// Script file holding the tree and page index.
pub const SCRIPT_FILE: &str = "navtreedata.js";
/// Script file holding the target to path lookup.
pub const PATHS_SCRIPT_FILE: &str = "navtreepaths.js";
/// JSON file holding tree, index and paths.
pub const JSON_FILE: &str = "navtree.json";

/// Output format selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `navtreedata.js` and `navtreepaths.js`.
    #[default]
    #[serde(alias = "js")]
    Script,
    /// `navtree.json`.
    Json,
}

/// Error returned when parsing an unknown format name.
#[derive(Debug, thiserror::Error)]
#[error("Unknown output format \"{0}\" (expected \"script\" or \"json\")")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "script" | "js" => Ok(Self::Script),
            "json" => Ok(Self::Json),
            other => Err(UnknownFormat(other.to_owned())),
        }
    }
}

/// A named output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// File name relative to the output directory.
    pub file_name: &'static str,
    /// File contents.
    pub contents: String,
}

/// Render all artifacts for a format.
pub fn render(tree: &NavTree, format: OutputFormat) -> Result<Vec<Artifact>, serde_json::Error> {
    let artifacts = match format {
        OutputFormat::Script => vec![
            Artifact {
                file_name: SCRIPT_FILE,
                contents: render_script(tree),
            },
            Artifact {
                file_name: PATHS_SCRIPT_FILE,
                contents: render_paths_script(tree),
            },
        ],
        OutputFormat::Json => vec![Artifact {
            file_name: JSON_FILE,
            contents: render_json(tree)?,
        }],
    };
    Ok(artifacts)
}

/// Render `NAVTREE` and `NAVTREEINDEX` declarations.
#[must_use]
pub fn render_script(tree: &NavTree) -> String {
    let mut out = String::with_capacity(256 + tree.node_count() * 64);

    out.push_str("var NAVTREE =\n[\n");
    write_nodes(&mut out, tree.forest(), 2);
    out.push_str("];\n\nvar NAVTREEINDEX =\n[\n");
    let pages: Vec<_> = tree.index().pages().iter().map(|p| quote(p)).collect();
    if !pages.is_empty() {
        out.push_str(&pages.join(",\n"));
        out.push('\n');
    }
    out.push_str("];\n");

    out
}

/// Render the `NAVTREEPATHS` declaration, keys sorted.
#[must_use]
pub fn render_paths_script(tree: &NavTree) -> String {
    let mut out = String::from("var NAVTREEPATHS =\n{\n");
    let entries: Vec<_> = tree
        .index()
        .paths()
        .iter()
        .map(|(target, path)| format!("{}:{}", quote(target), format_path(path)))
        .collect();
    if !entries.is_empty() {
        out.push_str(&entries.join(",\n"));
        out.push('\n');
    }
    out.push_str("};\n");
    out
}

/// Render the JSON document.
pub fn render_json(tree: &NavTree) -> Result<String, serde_json::Error> {
    #[derive(Serialize)]
    struct Document<'a> {
        tree: &'a [DocumentNode],
        index: &'a [String],
        paths: &'a BTreeMap<String, Vec<usize>>,
    }

    let mut json = serde_json::to_string_pretty(&Document {
        tree: tree.forest(),
        index: tree.index().pages(),
        paths: tree.index().paths(),
    })?;
    json.push('\n');
    Ok(json)
}

/// Write one line per node, nesting children two spaces deeper.
fn write_nodes(out: &mut String, nodes: &[DocumentNode], indent: usize) {
    let pad = " ".repeat(indent);
    for (i, node) in nodes.iter().enumerate() {
        let sep = if i + 1 < nodes.len() { "," } else { "" };
        let head = format!("{pad}[ {}, {}, ", quote(&node.title), quote(&node.target));
        if node.is_leaf() {
            let _ = writeln!(out, "{head}null ]{sep}");
        } else {
            let _ = writeln!(out, "{head}[");
            write_nodes(out, &node.children, indent + 2);
            let _ = writeln!(out, "{pad}] ]{sep}");
        }
    }
}

/// Encode a string as a JSON (and therefore JavaScript) string literal.
fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}

fn format_path(path: &[usize]) -> String {
    let parts: Vec<_> = path.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_tree;
    use crate::descriptor::SectionDescriptor;
    use pretty_assertions::assert_eq;

    fn sample() -> NavTree {
        build_tree(vec![
            SectionDescriptor::root("Shkyera Grad", "index.html"),
            SectionDescriptor::at_level("Cheatsheet", "md_docs_tutorials_Cheatsheet.html", 1),
            SectionDescriptor::at_level("Usage", "index.html#autotoc_md0", 2),
            SectionDescriptor::at_level("Types", "md_docs_tutorials_Cheatsheet.html#autotoc_md3", 2),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_script_matches_sidebar_layout() {
        let script = render_script(&sample());

        assert_eq!(
            script,
            r#"var NAVTREE =
[
  [ "Shkyera Grad", "index.html", [
    [ "Cheatsheet", "md_docs_tutorials_Cheatsheet.html", [
      [ "Usage", "index.html#autotoc_md0", null ],
      [ "Types", "md_docs_tutorials_Cheatsheet.html#autotoc_md3", null ]
    ] ]
  ] ]
];

var NAVTREEINDEX =
[
"index.html"
];
"#
        );
    }

    #[test]
    fn test_render_script_empty_tree() {
        let script = render_script(&NavTree::default());

        assert_eq!(script, "var NAVTREE =\n[\n];\n\nvar NAVTREEINDEX =\n[\n];\n");
    }

    #[test]
    fn test_render_script_escapes_quotes() {
        let tree = build_tree(vec![SectionDescriptor::root(
            "Let's say \"hi\"",
            "index.html",
        )])
        .unwrap();

        let script = render_script(&tree);

        assert!(script.contains(r#"[ "Let's say \"hi\"", "index.html", null ]"#));
    }

    #[test]
    fn test_render_paths_script_sorted() {
        let script = render_paths_script(&sample());

        assert_eq!(
            script,
            r#"var NAVTREEPATHS =
{
"index.html":[0],
"index.html#autotoc_md0":[0,0,0],
"md_docs_tutorials_Cheatsheet.html":[0,0],
"md_docs_tutorials_Cheatsheet.html#autotoc_md3":[0,0,1]
};
"#
        );
    }

    #[test]
    fn test_render_json_has_all_sections() {
        let json = render_json(&sample()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["index"], serde_json::json!(["index.html"]));
        assert_eq!(value["tree"][0][0], "Shkyera Grad");
        assert_eq!(value["tree"][0][2][0][2][0][2], serde_json::Value::Null);
        assert_eq!(
            value["paths"]["index.html#autotoc_md0"],
            serde_json::json!([0, 0, 0])
        );
    }

    #[test]
    fn test_render_selects_artifacts_by_format() {
        let tree = sample();

        let script: Vec<_> = render(&tree, OutputFormat::Script)
            .unwrap()
            .into_iter()
            .map(|a| a.file_name)
            .collect();
        let json: Vec<_> = render(&tree, OutputFormat::Json)
            .unwrap()
            .into_iter()
            .map(|a| a.file_name)
            .collect();

        assert_eq!(script, vec![SCRIPT_FILE, PATHS_SCRIPT_FILE]);
        assert_eq!(json, vec![JSON_FILE]);
    }

    #[test]
    fn test_render_is_deterministic() {
        let tree = sample();

        assert_eq!(
            render(&tree, OutputFormat::Script).unwrap(),
            render(&tree, OutputFormat::Script).unwrap()
        );
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("script".parse::<OutputFormat>().unwrap(), OutputFormat::Script);
        assert_eq!("js".parse::<OutputFormat>().unwrap(), OutputFormat::Script);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("html".parse::<OutputFormat>().is_err());
    }
}
