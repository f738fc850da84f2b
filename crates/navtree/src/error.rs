//! CLI error types.

use navtree_config::ConfigError;
use navtree_core::{OutlineError, StructureError};
use navtree_markdown::MarkdownError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Outline(#[from] OutlineError),

    #[error("{0}")]
    Markdown(#[from] MarkdownError),

    #[error("Invalid navigation structure: {0}")]
    Structure(#[from] StructureError),

    #[error("Failed to encode navigation tree: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
