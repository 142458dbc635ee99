//! Common test utilities for updatekit integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch project root for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new empty project root
    #[allow(dead_code)]
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file relative to the project root, creating parents
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the project root
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Create `src/updates/<name>/` with a README and the given bundle files
    #[allow(dead_code)]
    pub fn create_update(&self, name: &str, readme: &str, bundle_files: &[(&str, &str)]) {
        self.write_file(&format!("src/updates/{name}/README.md"), readme);
        std::fs::create_dir_all(self.path.join(format!("src/updates/{name}/bundle")))
            .expect("Failed to create bundle directory");
        for (file, content) in bundle_files {
            self.write_file(&format!("src/updates/{name}/bundle/{file}"), content);
        }
    }

    /// `updatekit` command rooted at this workspace
    #[allow(dead_code)]
    pub fn cmd(&self) -> Command {
        let mut cmd = updatekit_cmd();
        cmd.current_dir(&self.path).env_remove("UPDATEKIT_ROOT");
        cmd
    }
}

/// Entry names of a zip archive, in archive order
#[allow(dead_code)]
pub fn archive_entries(path: &Path) -> Vec<String> {
    let file = std::fs::File::open(path).expect("Failed to open archive");
    let mut archive = zip::ZipArchive::new(file).expect("Failed to read archive");
    (0..archive.len())
        .map(|i| {
            archive
                .by_index(i)
                .expect("Failed to read entry")
                .name()
                .to_string()
        })
        .collect()
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn updatekit_cmd() -> Command {
    Command::cargo_bin("updatekit").expect("Failed to find updatekit binary")
}
