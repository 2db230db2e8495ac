//! Shared testing utilities for fragment-gen CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Testing harness providing an isolated project tree for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new, empty project.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Project root used for CLI invocations.
    pub fn project(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled binary inside the project.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("fragment-gen").expect("Failed to locate binary");
        cmd.current_dir(self.project()).env_remove("RUST_LOG");
        cmd
    }

    /// Write `src/<slug>/collection.json` with the given display name.
    pub fn add_collection(&self, slug: &str, name: &str) {
        self.write(&format!("src/{}/collection.json", slug), &format!("{{\"name\":\"{}\"}}", name));
    }

    /// Write an arbitrary project file.
    pub fn write(&self, rel: &str, content: &str) {
        self.root.child(rel).write_str(content).expect("Failed to write project file");
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.project().join(rel)
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("Failed to read project file")
    }

    pub fn read_json(&self, rel: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(rel)).expect("File should be valid JSON")
    }

    /// Assert the four fragment files exist under `src/<collection>/<fragment>/`.
    pub fn assert_fragment_exists(&self, collection: &str, fragment: &str) {
        for file in ["index.html", "main.js", "styles.css", "fragment.json"] {
            let path = self.path(&format!("src/{}/{}/{}", collection, fragment, file));
            assert!(path.exists(), "Fragment file should exist at {}", path.display());
        }
    }
}
