//! Common test utilities for bundle-adapter integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Location of the stand-in bundler inside a test project
pub const TOOL_PATH: &str = "node_modules/.bin/browserify";

/// A temporary web application with a fake bundler
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new, empty test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join(".fixture")).expect("Failed to create fixture dir");
        Self { temp, path }
    }

    /// Write a file in the project, returning its absolute path
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write `bundle-adapter.yaml`
    pub fn write_config(&self, yaml: &str) {
        self.write_file("bundle-adapter.yaml", yaml);
    }

    /// Write the config used by most tests: every `.js` file under
    /// `app/assets` is eligible and `app/assets` is the only asset root
    pub fn write_default_config(&self) {
        self.write_config(
            "paths:\n  - glob: \"app/assets/**/*.js\"\n\
             source_map_environments: [development]\n\
             asset_search_roots: [app/assets]\n",
        );
    }

    fn fixture(&self, name: &str) -> PathBuf {
        self.path.join(".fixture").join(name)
    }

    /// Install a bundler that answers `--list` with `dependencies` and
    /// otherwise prints `output`
    pub fn install_tool(&self, dependencies: &[&Path], output: &str) {
        let listing: String = dependencies
            .iter()
            .map(|p| format!("{}\n", p.display()))
            .collect();
        std::fs::write(self.fixture("list.out"), listing).expect("Failed to write listing");
        std::fs::write(self.fixture("bundle.out"), output).expect("Failed to write output");

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
            log = self.fixture("calls.log").display(),
            list = self.fixture("list.out").display(),
            bundle = self.fixture("bundle.out").display(),
        ));
    }

    /// Install a bundler whose `--list` succeeds with `dependencies` but whose
    /// bundle step fails with `stderr`
    pub fn install_tool_failing_bundle(&self, dependencies: &[&Path], stderr: &str) {
        let listing: String = dependencies
            .iter()
            .map(|p| format!("{}\n", p.display()))
            .collect();
        std::fs::write(self.fixture("list.out"), listing).expect("Failed to write listing");
        std::fs::write(self.fixture("stderr.out"), stderr).expect("Failed to write stderr");

        self.install_script(&format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$*\" >> \"{log}\"\n\
             for arg in \"$@\"; do\n\
             \x20 if [ \"$arg\" = \"--list\" ]; then\n\
             \x20   cat \"{list}\"\n\
             \x20   exit 0\n\
             \x20 fi\n\
             done\n\
             cat \"{stderr}\" >&2\n\
             exit 1\n",
            log = self.fixture("calls.log").display(),
            list = self.fixture("list.out").display(),
            stderr = self.fixture("stderr.out").display(),
        ));
    }

    /// Install a bundler that fails every invocation
    pub fn install_failing_tool(&self, stderr: &str) {
        std::fs::write(self.fixture("stderr.out"), stderr).expect("Failed to write stderr");
        self.install_script(&format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$*\" >> \"{log}\"\n\
             cat \"{stderr}\" >&2\n\
             exit 2\n",
            log = self.fixture("calls.log").display(),
            stderr = self.fixture("stderr.out").display(),
        ));
    }

    fn install_script(&self, script: &str) {
        let path = self.write_file(TOOL_PATH, script);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to make tool executable");
        }
    }

    /// Argument lists the bundler was invoked with, in order
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.fixture("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the bundle-adapter binary, run from `root`
pub fn bundle_adapter_cmd(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bundle-adapter"));
    cmd.current_dir(root)
        .env_remove("BUNDLE_ADAPTER_ENV")
        .env_remove("RUST_LOG");
    cmd
}
