//! `navtree build` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use navtree_config::{CliSettings, Config};
use navtree_core::{Artifact, NavTree, OutputFormat, render};

use super::SourceArgs;
use super::source::load_tree;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,

    /// Output directory for the generated files (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format: script or json (overrides config).
    #[arg(short, long)]
    pub(crate) format: Option<OutputFormat>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            outline: self.source.outline.clone(),
            output_dir: self.output_dir.clone(),
            format: self.format,
        };
        let config = Config::load(self.source.config.as_deref(), Some(&cli_settings))?;

        let tree = load_tree(&config, &output)?;
        if tree.is_empty() {
            output.warning("No sections found; writing an empty navigation tree");
        }

        let dir = &config.output_resolved.dir;
        for path in write_artifacts(&tree, config.output_resolved.format, dir)? {
            output.artifact(&path);
        }
        output.tree_summary(&tree);
        output.success(&format!("Navigation tree written to {}", dir.display()));
        Ok(())
    }
}

/// Render and write all artifacts, returning the written paths.
fn write_artifacts(
    tree: &NavTree,
    format: OutputFormat,
    dir: &Path,
) -> Result<Vec<PathBuf>, CliError> {
    std::fs::create_dir_all(dir).map_err(|source| CliError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    render(tree, format)?
        .into_iter()
        .map(|Artifact { file_name, contents }| {
            let path = dir.join(file_name);
            std::fs::write(&path, contents).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "Artifact written");
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use navtree_core::{SectionDescriptor, build_tree};
    use pretty_assertions::assert_eq;

    fn sample() -> NavTree {
        build_tree(vec![
            SectionDescriptor::root("Home", "index.html"),
            SectionDescriptor::at_level("Usage", "index.html#usage", 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_write_script_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("html");

        let written = write_artifacts(&sample(), OutputFormat::Script, &out).unwrap();

        assert_eq!(
            written,
            vec![out.join("navtreedata.js"), out.join("navtreepaths.js")]
        );
        let script = std::fs::read_to_string(out.join("navtreedata.js")).unwrap();
        assert!(script.starts_with("var NAVTREE =\n[\n"));
        assert!(script.contains("var NAVTREEINDEX =\n[\n\"index.html\"\n];"));
    }

    #[test]
    fn test_write_json_artifact() {
        let dir = tempfile::tempdir().unwrap();

        let written = write_artifacts(&sample(), OutputFormat::Json, dir.path()).unwrap();

        assert_eq!(written, vec![dir.path().join("navtree.json")]);
        let json = std::fs::read_to_string(&written[0]).unwrap();
        assert!(json.contains("\"index.html#usage\""));
    }

    #[test]
    fn test_write_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let tree = sample();

        write_artifacts(&tree, OutputFormat::Script, dir.path()).unwrap();
        let first = std::fs::read_to_string(dir.path().join("navtreedata.js")).unwrap();
        write_artifacts(&tree, OutputFormat::Script, dir.path()).unwrap();
        let second = std::fs::read_to_string(dir.path().join("navtreedata.js")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = write_artifacts(&sample(), OutputFormat::Script, &blocker).unwrap_err();

        assert!(matches!(err, CliError::Write { .. }));
    }
}
