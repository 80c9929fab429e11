//! External bundler invocation
//!
//! The adapter talks to the bundler through [`Bundler`]. [`CliBundler`] is the
//! real implementation and shells out to the binary configured in
//! [`AdapterConfig`](crate::config::AdapterConfig).

pub mod cli;

use std::path::Path;

use crate::error::Result;

pub use cli::CliBundler;

/// Flag asking the bundler for its dependency list
pub const LIST_FLAG: &str = "--list";

/// Flag asking the bundler to inline a source map
pub const SOURCE_MAP_FLAG: &str = "-d";

/// An external bundling tool
pub trait Bundler {
    /// List the files `file` depends on, as raw tool output (one path per line)
    fn list_dependencies(&self, file: &Path) -> Result<String>;

    /// Bundle `file` and its dependency graph, returning the bundled output
    fn bundle(&self, file: &Path, source_maps: bool) -> Result<String>;
}

impl<B: Bundler + ?Sized> Bundler for &B {
    fn list_dependencies(&self, file: &Path) -> Result<String> {
        (**self).list_dependencies(file)
    }

    fn bundle(&self, file: &Path, source_maps: bool) -> Result<String> {
        (**self).bundle(file, source_maps)
    }
}
