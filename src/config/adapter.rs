//! Adapter configuration (bundle-adapter.yaml)
//!
//! Everything the adapter needs from its host is collected here up front:
//! which files are eligible, which environments get source maps, the current
//! environment, where the host looks for assets, and where the bundler lives.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::rule::{EligibilityRule, RuleSet};
use crate::error::{Result, config as config_error};
use crate::path_utils;

/// Default configuration file name, looked up in the project root
pub const CONFIG_FILE_NAME: &str = "bundle-adapter.yaml";

/// Bundler location relative to the project root
pub const DEFAULT_TOOL_PATH: &str = "node_modules/.bin/browserify";

/// Environment used when none is given
pub const DEFAULT_ENVIRONMENT: &str = "development";

fn default_source_map_environments() -> Vec<String> {
    vec![DEFAULT_ENVIRONMENT.to_string()]
}

/// On-disk form of the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Eligibility rules, checked in order, written as `- glob: "..."`
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub paths: Vec<EligibilityRule>,

    /// Environments in which bundles are built with inline source maps
    #[serde(default = "default_source_map_environments")]
    pub source_map_environments: Vec<String>,

    /// Directories the host watches for changes
    #[serde(default)]
    pub asset_search_roots: Vec<PathBuf>,

    /// Bundler binary, relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<PathBuf>,

    /// Extra arguments passed to every bundler invocation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_options: Vec<String>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            source_map_environments: default_source_map_environments(),
            asset_search_roots: Vec::new(),
            tool: None,
            tool_options: Vec::new(),
        }
    }
}

impl ConfigFile {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

/// Resolved, read-only adapter configuration
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    project_root: PathBuf,
    rules: RuleSet,
    source_map_environments: Vec<String>,
    environment: String,
    asset_search_roots: Vec<PathBuf>,
    tool_path: PathBuf,
    tool_options: Vec<String>,
}

impl AdapterConfig {
    /// Create a configuration with defaults and no eligibility rules
    ///
    /// A relative project root is made absolute against the current directory
    /// so that rule matching, asset roots and the bundler's working directory
    /// all agree.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let project_root = std::path::absolute(&project_root).unwrap_or(project_root);
        Self {
            rules: RuleSet::new(&project_root),
            project_root,
            source_map_environments: default_source_map_environments(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            asset_search_roots: Vec::new(),
            tool_path: PathBuf::from(DEFAULT_TOOL_PATH),
            tool_options: Vec::new(),
        }
    }

    /// Build a configuration from its parsed file form
    pub fn from_file_config(project_root: impl Into<PathBuf>, file: ConfigFile) -> Result<Self> {
        let mut config = Self::new(project_root)
            .with_source_map_environments(file.source_map_environments)
            .with_asset_search_roots(file.asset_search_roots)
            .with_tool_options(file.tool_options);

        if let Some(tool) = file.tool {
            config = config.with_tool_path(tool)?;
        }

        for rule in file.paths {
            config = config.with_rule(rule)?;
        }

        Ok(config)
    }

    /// Parse and resolve configuration from a YAML string
    pub fn from_yaml(project_root: impl Into<PathBuf>, yaml: &str) -> Result<Self> {
        Self::from_file_config(project_root, ConfigFile::from_yaml(yaml)?)
    }

    /// Load configuration from `path`, or from `bundle-adapter.yaml` in the project root
    pub fn load(project_root: impl Into<PathBuf>, path: Option<&Path>) -> Result<Self> {
        let project_root = project_root.into();
        let config_path = match path {
            Some(p) => path_utils::resolve_against(&project_root, p),
            None => project_root.join(CONFIG_FILE_NAME),
        };

        if !config_path.is_file() {
            return Err(config_error::not_found(config_path.display().to_string()));
        }

        let yaml = std::fs::read_to_string(&config_path)?;
        let file: ConfigFile = serde_yaml::from_str(&yaml).map_err(|e| {
            config_error::parse_failed(config_path.display().to_string(), e.to_string())
        })?;

        tracing::debug!(path = %config_path.display(), rules = file.paths.len(), "loaded configuration");
        Self::from_file_config(project_root, file)
    }

    /// Append an eligibility rule
    pub fn with_rule(mut self, rule: EligibilityRule) -> Result<Self> {
        self.rules.push(rule)?;
        Ok(self)
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn with_source_map_environments<I, S>(mut self, environments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_map_environments = environments.into_iter().map(Into::into).collect();
        self
    }

    /// Set the asset search roots; relative roots resolve against the project root
    pub fn with_asset_search_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.asset_search_roots = roots
            .into_iter()
            .map(|root| path_utils::resolve_against(&self.project_root, root.as_ref()))
            .collect();
        self
    }

    /// Set the bundler binary location
    pub fn with_tool_path(mut self, tool_path: impl Into<PathBuf>) -> Result<Self> {
        let tool_path = tool_path.into();
        if tool_path.as_os_str().is_empty() {
            return Err(config_error::invalid("tool path must not be empty"));
        }
        self.tool_path = tool_path;
        Ok(self)
    }

    pub fn with_tool_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tool_options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn source_map_environments(&self) -> &[String] {
        &self.source_map_environments
    }

    pub fn asset_search_roots(&self) -> &[PathBuf] {
        &self.asset_search_roots
    }

    pub fn tool_options(&self) -> &[String] {
        &self.tool_options
    }

    /// Whether bundles for the current environment carry source maps
    pub fn source_maps_enabled(&self) -> bool {
        self.source_map_environments
            .iter()
            .any(|env| env == &self.environment)
    }

    /// Absolute location of the bundler binary
    pub fn tool_binary(&self) -> PathBuf {
        path_utils::resolve_against(&self.project_root, &self.tool_path)
    }
}
