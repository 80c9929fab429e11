//! bundle-adapter - hand CommonJS modules in an asset pipeline to an external bundler
//!
//! The host pipeline gives the adapter one source file at a time. The adapter
//! decides whether the file should be bundled, runs the bundler (browserify by
//! default) as a subprocess, and returns the bundled output together with the
//! asset files the host has to watch for changes.
//!
//! ```no_run
//! use std::path::PathBuf;
//! use bundle_adapter::{AdapterConfig, BundleAdapter, EligibilityRule, SourceFile};
//!
//! # fn main() -> bundle_adapter::Result<()> {
//! let config = AdapterConfig::new("/srv/app")
//!     .with_rule(EligibilityRule::Glob("app/assets/javascripts/**/*.js".into()))?
//!     .with_asset_search_roots(["app/assets/javascripts"]);
//! let adapter = BundleAdapter::new(config);
//!
//! let file = SourceFile::read("/srv/app/app/assets/javascripts/main.js")?;
//! let mut watched: Vec<PathBuf> = Vec::new();
//! let output = adapter.evaluate(&file, &mut watched)?;
//! # let _ = output;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod dependencies;
pub mod error;
pub mod path_utils;
pub mod registry;
pub mod source;
pub mod tool;

#[cfg(test)]
mod test_fixtures;

pub use adapter::{BundleAdapter, Decision, Processed};
pub use config::{AdapterConfig, EligibilityRule};
pub use error::{AdapterError, Result};
pub use registry::DependencyRegistry;
pub use source::SourceFile;
pub use tool::{Bundler, CliBundler};
