//! Section collection from the configured source.

use navtree_config::Config;
use navtree_core::{NavTree, SectionDescriptor, build_tree, load_outline};
use navtree_markdown::{MarkdownOutline, PageSource};

use crate::error::CliError;
use crate::output::Output;

/// True when an outline is configured alongside pages or a project root.
fn outline_shadows_pages(config: &Config) -> bool {
    config.source_resolved.outline.is_some()
        && (!config.source_resolved.pages.is_empty() || config.project.root().is_some())
}

/// Collect descriptors from the outline file, or from markdown pages.
pub(crate) fn collect_descriptors(
    config: &Config,
    output: &Output,
) -> Result<Vec<SectionDescriptor>, CliError> {
    let source = &config.source_resolved;

    if let Some(outline) = &source.outline {
        if outline_shadows_pages(config) {
            output.warning(&format!(
                "Outline {} is set; source.pages and project root are ignored",
                outline.display()
            ));
        }
        return Ok(load_outline(outline)?);
    }

    let mut markdown = MarkdownOutline::new().with_anchor_prefix(source.anchor_prefix.as_str());
    if let Some((title, index)) = config.project.root() {
        markdown = markdown.with_root(title, index);
    }

    let pages: Vec<PageSource> = source
        .pages
        .iter()
        .map(|page| PageSource {
            name: page.name.clone(),
            path: page.path.clone(),
            title: page.title.clone(),
            target: page.target.clone(),
        })
        .collect();

    Ok(markdown.collect(&pages)?)
}

/// Collect descriptors and assemble the tree.
pub(crate) fn load_tree(config: &Config, output: &Output) -> Result<NavTree, CliError> {
    let descriptors = collect_descriptors(config, output)?;
    let sections = descriptors.len();
    let tree = build_tree(descriptors)?;

    tracing::info!(
        sections,
        pages = tree.index().pages().len(),
        depth = tree.depth(),
        "Navigation tree built"
    );

    Ok(tree)
}
