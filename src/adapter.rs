//! The bundle adapter
//!
//! Decides whether a source file is handed to the bundler and, if so, runs the
//! bundler and collects the asset dependencies the host has to watch.
//!
//! A file goes through these checks, in order:
//! 1. Does any eligibility rule match its path? If not, it is passed through
//!    untouched and the bundler is never started.
//! 2. Is it a CommonJS module, i.e. does it contain `module.exports` or does
//!    the bundler report any dependencies for it? If not, pass through.
//! 3. Bundle it and report the dependencies under the asset search roots.
//!
//! The dependency list is produced at most once per evaluation even though
//! both step 2 and step 3 may need it.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::AdapterConfig;
use crate::dependencies::{filter_asset_dependencies, parse_dependency_list};
use crate::error::Result;
use crate::registry::DependencyRegistry;
use crate::source::SourceFile;
use crate::tool::{Bundler, CliBundler};

/// What the adapter decided to do with a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decision {
    /// No eligibility rule matched
    NotEligible,
    /// Eligible, but neither exports anything nor requires anything
    NotModule,
    /// Eligible CommonJS module, handed to the bundler
    Module,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::NotEligible => "not-eligible",
            Decision::NotModule => "not-module",
            Decision::Module => "module",
        }
    }
}

/// Result of processing one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Processed {
    pub decision: Decision,
    /// Bundled output for modules, the original content otherwise
    pub content: String,
    /// Asset dependencies to register; empty unless the file was bundled
    pub dependencies: Vec<PathBuf>,
}

impl Processed {
    fn passthrough(decision: Decision, file: &SourceFile) -> Self {
        Self {
            decision,
            content: file.content().to_string(),
            dependencies: Vec::new(),
        }
    }

    pub fn is_bundled(&self) -> bool {
        self.decision == Decision::Module
    }
}

/// Hands eligible CommonJS modules to an external bundler
#[derive(Debug, Clone)]
pub struct BundleAdapter<B = CliBundler> {
    config: AdapterConfig,
    bundler: B,
}

impl BundleAdapter<CliBundler> {
    /// Create an adapter running the bundler binary named in `config`
    pub fn new(config: AdapterConfig) -> Self {
        let bundler = CliBundler::from_config(&config);
        Self { config, bundler }
    }
}

impl<B: Bundler> BundleAdapter<B> {
    pub fn with_bundler(config: AdapterConfig, bundler: B) -> Self {
        Self { config, bundler }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Decide what would happen to `file` without bundling it
    pub fn classify(&self, file: &SourceFile) -> Result<Decision> {
        Evaluation::new(self, file).decide()
    }

    /// Dependencies of `file` under the asset search roots
    ///
    /// Only meaningful for modules; returns an empty list for files the
    /// adapter would pass through.
    pub fn asset_dependencies(&self, file: &SourceFile) -> Result<Vec<PathBuf>> {
        let mut evaluation = Evaluation::new(self, file);
        if evaluation.decide()? != Decision::Module {
            return Ok(Vec::new());
        }
        evaluation.asset_dependencies()
    }

    /// Process one file
    pub fn process(&self, file: &SourceFile) -> Result<Processed> {
        let mut evaluation = Evaluation::new(self, file);

        let decision = evaluation.decide()?;
        if decision != Decision::Module {
            tracing::debug!(
                path = %file.path().display(),
                decision = decision.as_str(),
                "passing file through"
            );
            return Ok(Processed::passthrough(decision, file));
        }

        let dependencies = evaluation.asset_dependencies()?;
        let content = self
            .bundler
            .bundle(file.path(), self.config.source_maps_enabled())?;

        tracing::info!(
            path = %file.path().display(),
            dependencies = dependencies.len(),
            source_maps = self.config.source_maps_enabled(),
            "bundled module"
        );

        Ok(Processed {
            decision,
            content,
            dependencies,
        })
    }

    /// Process one file, registering its asset dependencies with the host
    ///
    /// Returns the content the host should use in place of the original.
    pub fn evaluate<R>(&self, file: &SourceFile, registry: &mut R) -> Result<String>
    where
        R: DependencyRegistry + ?Sized,
    {
        let processed = self.process(file)?;
        for path in &processed.dependencies {
            registry.depend_on(path);
        }
        Ok(processed.content)
    }
}

/// State of a single evaluation; holds the memoized dependency list
struct Evaluation<'a, B> {
    adapter: &'a BundleAdapter<B>,
    file: &'a SourceFile,
    dependencies: Option<Vec<PathBuf>>,
}

impl<'a, B: Bundler> Evaluation<'a, B> {
    fn new(adapter: &'a BundleAdapter<B>, file: &'a SourceFile) -> Self {
        Self {
            adapter,
            file,
            dependencies: None,
        }
    }

    fn is_eligible(&self) -> bool {
        match self.adapter.config.rules().find_match(self.file.path()) {
            Some(rule) => {
                tracing::debug!(path = %self.file.path().display(), %rule, "eligible for bundling");
                true
            }
            None => false,
        }
    }

    /// All existing files the bundler reports, computed on first use
    fn dependencies(&mut self) -> Result<&[PathBuf]> {
        if self.dependencies.is_none() {
            let stdout = self.adapter.bundler.list_dependencies(self.file.path())?;
            self.dependencies = Some(parse_dependency_list(&stdout));
        }
        Ok(self.dependencies.as_deref().unwrap_or_default())
    }

    fn asset_dependencies(&mut self) -> Result<Vec<PathBuf>> {
        let roots = self.adapter.config.asset_search_roots();
        let dependencies = self.dependencies()?;
        Ok(filter_asset_dependencies(dependencies, roots))
    }

    fn is_module(&mut self) -> Result<bool> {
        if self.file.has_export_marker() {
            return Ok(true);
        }
        Ok(!self.dependencies()?.is_empty())
    }

    fn decide(&mut self) -> Result<Decision> {
        if !self.is_eligible() {
            return Ok(Decision::NotEligible);
        }
        if self.is_module()? {
            Ok(Decision::Module)
        } else {
            Ok(Decision::NotModule)
        }
    }
}
