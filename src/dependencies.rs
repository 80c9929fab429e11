//! Dependency list parsing and filtering
//!
//! The bundler prints one dependency per line for `--list`. When it reads its
//! input through a pipe it also lists the temp file it buffered the stream
//! into; that entry is gone by the time we look, so anything that does not
//! exist on disk is dropped.

use std::path::{Path, PathBuf};

/// Parse `--list` output into the dependencies that exist on disk
pub fn parse_dependency_list(stdout: &str) -> Vec<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .filter(|path| path.exists())
        .collect()
}

/// Keep only dependencies that live under one of the asset search roots
///
/// Library dependencies (e.g. `node_modules`) are not watched by the host, so
/// they are not registered. Order is preserved and filtering an already
/// filtered list is a no-op.
///
/// Roots are compared path component by path component, which is stricter than
/// a textual prefix check: `/app/assets-old/x.js` is not under `/app/assets`.
pub fn filter_asset_dependencies<P: AsRef<Path>>(
    dependencies: &[PathBuf],
    asset_roots: &[P],
) -> Vec<PathBuf> {
    dependencies
        .iter()
        .filter(|path| asset_roots.iter().any(|root| path.starts_with(root)))
        .cloned()
        .collect()
}
