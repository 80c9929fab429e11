//! Host-side dependency registration
//!
//! After a module is bundled the host must learn which asset files the bundle
//! was built from, so it can invalidate its cached output when one changes.

use std::path::{Path, PathBuf};

/// Receives the asset dependencies of a bundled file
pub trait DependencyRegistry {
    fn depend_on(&mut self, path: &Path);
}

impl<F> DependencyRegistry for F
where
    F: FnMut(&Path),
{
    fn depend_on(&mut self, path: &Path) {
        self(path);
    }
}

impl DependencyRegistry for Vec<PathBuf> {
    fn depend_on(&mut self, path: &Path) {
        self.push(path.to_path_buf());
    }
}
