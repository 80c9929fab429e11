//! Test fixtures for unit tests that need a project on disk.
//!
//! [`FakeProject`] is a temp directory laid out like a web application, with
//! a stand-in bundler script at `node_modules/.bin/browserify`. The script
//! appends its arguments to a log file so tests can assert exactly which
//! invocations happened.
//!
//! ```ignore
//! let project = FakeProject::new();
//! project.install_tool("/abs/dep.js\n", "bundled output");
//! // ... run the adapter ...
//! assert_eq!(project.calls(), vec!["--list app.js", "-d app.js"]);
//! ```

#![allow(clippy::expect_used, dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::{AdapterConfig, DEFAULT_TOOL_PATH};

const FIXTURE_DIR: &str = ".fixture";

pub struct FakeProject {
    temp: TempDir,
}

impl FakeProject {
    /// Create an empty project root
    ///
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        std::fs::create_dir_all(temp.path().join(FIXTURE_DIR))
            .expect("Failed to create fixture directory");
        Self { temp }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Default configuration rooted at this project
    pub fn config(&self) -> AdapterConfig {
        AdapterConfig::new(self.root())
    }

    /// Write a file relative to the project root, returning its absolute path
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.root().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    fn fixture_path(&self, name: &str) -> PathBuf {
        self.root().join(FIXTURE_DIR).join(name)
    }

    /// Install a bundler that prints `list_output` for `--list` and
    /// `bundle_output` otherwise
    pub fn install_tool(&self, list_output: &str, bundle_output: &str) {
        let list = self.fixture_path("list.out");
        let bundle = self.fixture_path("bundle.out");
        std::fs::write(&list, list_output).expect("Failed to write list output");
        std::fs::write(&bundle, bundle_output).expect("Failed to write bundle output");

        self.install_script(&format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$*\" >> \"{log}\"\n\
             for arg in \"$@\"; do\n\
             \x20 if [ \"$arg\" = \"--list\" ]; then\n\
             \x20   cat \"{list}\"\n\
             \x20   exit 0\n\
             \x20 fi\n\
             done\n\
             cat \"{bundle}\"\n",
            log = self.fixture_path("calls.log").display(),
            list = list.display(),
            bundle = bundle.display(),
        ));
    }

    /// Install a bundler that writes `stderr` and exits with `code`
    pub fn install_failing_tool(&self, code: i32, stderr: &str) {
        let message = self.fixture_path("stderr.out");
        std::fs::write(&message, stderr).expect("Failed to write stderr output");

        self.install_script(&format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$*\" >> \"{log}\"\n\
             cat \"{message}\" >&2\n\
             exit {code}\n",
            log = self.fixture_path("calls.log").display(),
            message = message.display(),
        ));
    }

    /// Install an arbitrary script as the bundler
    pub fn install_script(&self, script: &str) {
        let path = self.write_file(DEFAULT_TOOL_PATH, script);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to make tool executable");
        }
    }

    /// Argument lists the bundler was called with, in order
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.fixture_path("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
