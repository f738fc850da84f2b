//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
mod source;

use std::path::PathBuf;

use clap::Args;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;

/// Arguments shared by commands that assemble the tree.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover navtree.toml).
    #[arg(short, long, env = "NAVTREE_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Outline file (overrides config and markdown pages).
    #[arg(long)]
    pub(crate) outline: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}
