//! Configuration management for navtree.
//!
//! Parses `navtree.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `project.title`
//! - `project.index`
//! - `source.outline`
//! - `source.pages` (page paths)
//! - `output.dir`

mod expand;

use navtree_core::OutputFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override outline file.
    pub outline: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override output format.
    pub format: Option<OutputFormat>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "navtree.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project root node configuration.
    pub project: ProjectConfig,
    /// Source configuration (paths are relative strings from TOML).
    source: SourceConfigRaw,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,

    /// Resolved source configuration (set after loading).
    #[serde(skip)]
    pub source_resolved: SourceConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Project root node. Both fields must be set together.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Title of the root node wrapping all pages.
    pub title: Option<String>,
    /// Target of the root node.
    pub index: Option<String>,
}

impl ProjectConfig {
    /// Root node as `(title, target)` when configured.
    #[must_use]
    pub fn root(&self) -> Option<(&str, &str)> {
        self.title.as_deref().zip(self.index.as_deref())
    }
}

/// Page entry as written in TOML: a bare path or a table.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PageEntryRaw {
    Path(String),
    Detailed {
        path: String,
        title: Option<String>,
        target: Option<String>,
    },
}

/// Raw source configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SourceConfigRaw {
    outline: Option<String>,
    pages: Vec<PageEntryRaw>,
    anchor_prefix: Option<String>,
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
    format: Option<OutputFormat>,
}

/// A markdown page with its resolved file path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    /// Page name as written in the config (used to derive the target).
    pub name: String,
    /// Absolute path of the page file.
    pub path: PathBuf,
    /// Title override.
    pub title: Option<String>,
    /// Target override.
    pub target: Option<String>,
}

/// Resolved source configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SourceConfig {
    /// Outline file. Takes precedence over `pages` when set.
    pub outline: Option<PathBuf>,
    /// Markdown pages in navigation order.
    pub pages: Vec<PageConfig>,
    /// Anchor prefix for headings without an explicit id.
    pub anchor_prefix: String,
}

/// Resolved output configuration with absolute paths.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Directory the artifacts are written to.
    pub dir: PathBuf,
    /// Artifact format.
    pub format: OutputFormat,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.dir`").
        field: String,
        /// Error message (e.g., "${`DOCS_OUT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `navtree.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the result does not validate.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(outline) = &settings.outline {
            self.source_resolved.outline = Some(outline.clone());
        }
        if let Some(output_dir) = &settings.output_dir {
            self.output_resolved.dir.clone_from(output_dir);
        }
        if let Some(format) = settings.format {
            self.output_resolved.format = format;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            project: ProjectConfig::default(),
            source: SourceConfigRaw::default(),
            output: OutputConfigRaw::default(),
            source_resolved: SourceConfig {
                outline: None,
                pages: Vec::new(),
                anchor_prefix: "autotoc_md".to_owned(),
            },
            output_resolved: OutputConfig {
                dir: base.join("html"),
                format: OutputFormat::default(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_project()?;
        self.validate_source()?;
        Ok(())
    }

    /// Validate project root configuration.
    fn validate_project(&self) -> Result<(), ConfigError> {
        match (&self.project.title, &self.project.index) {
            (Some(_), None) | (None, Some(_)) => Err(ConfigError::Validation(
                "project.title and project.index must be set together".to_owned(),
            )),
            (Some(_), Some(index)) => require_non_empty(index, "project.index"),
            (None, None) => Ok(()),
        }
    }

    /// Validate source configuration.
    fn validate_source(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.source_resolved.anchor_prefix, "source.anchor_prefix")?;
        for page in &self.source_resolved.pages {
            require_non_empty(&page.name, "source.pages[].path")?;
            if let Some(target) = &page.target {
                require_non_empty(target, "source.pages[].target")?;
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let optional = [
            ("project.title", &mut self.project.title),
            ("project.index", &mut self.project.index),
            ("source.outline", &mut self.source.outline),
            ("output.dir", &mut self.output.dir),
        ];
        for (field, value) in optional {
            expand::expand_in_place(field, value)?;
        }

        for page in &mut self.source.pages {
            let (PageEntryRaw::Path(path) | PageEntryRaw::Detailed { path, .. }) = page;
            *path = expand::expand_value("source.pages", path)?;
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let pages = self
            .source
            .pages
            .iter()
            .map(|entry| match entry {
                PageEntryRaw::Path(path) => PageConfig {
                    name: path.clone(),
                    path: config_dir.join(path),
                    title: None,
                    target: None,
                },
                PageEntryRaw::Detailed {
                    path,
                    title,
                    target,
                } => PageConfig {
                    name: path.clone(),
                    path: config_dir.join(path),
                    title: title.clone(),
                    target: target.clone(),
                },
            })
            .collect();

        self.source_resolved = SourceConfig {
            outline: self.source.outline.as_ref().map(|p| config_dir.join(p)),
            pages,
            anchor_prefix: self
                .source
                .anchor_prefix
                .clone()
                .unwrap_or_else(|| "autotoc_md".to_owned()),
        };

        self.output_resolved = OutputConfig {
            dir: config_dir.join(self.output.dir.as_deref().unwrap_or("html")),
            format: self.output.format.unwrap_or_default(),
        };
    }
}
