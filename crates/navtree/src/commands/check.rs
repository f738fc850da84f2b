//! `navtree check` command implementation.

use clap::Args;
use navtree_config::{CliSettings, Config};

use super::SourceArgs;
use super::source::load_tree;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            outline: self.source.outline.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.source.config.as_deref(), Some(&cli_settings))?;

        let tree = load_tree(&config, &output)?;

        output.tree_summary(&tree);
        output.success("Navigation tree is valid");
        Ok(())
    }
}
