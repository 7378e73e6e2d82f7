//! Common test utilities for Postport integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A Jekyll source tree plus a destination directory for one test
#[allow(dead_code)]
pub struct TestSite {
    /// Temporary directory holding both trees
    pub temp: TempDir,
    /// Source root (`_posts`)
    pub source: PathBuf,
    /// Destination root (`content/blog`)
    pub dest: PathBuf,
}

#[allow(dead_code)]
impl TestSite {
    /// Create a new test site with an empty source tree
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("_posts");
        let dest = temp.path().join("content").join("blog");
        std::fs::create_dir_all(&source).expect("Failed to create source directory");
        Self { temp, source, dest }
    }

    /// Write a post under the source root
    pub fn write_post(&self, rel: &str, content: &str) {
        let path = self.source.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write post");
    }

    /// Read a migrated file from the destination root
    pub fn read_dest(&self, name: &str) -> String {
        std::fs::read_to_string(self.dest.join(name)).expect("Failed to read destination file")
    }

    /// Check whether a file exists under the destination root
    pub fn dest_exists(&self, name: &str) -> bool {
        self.dest.join(name).exists()
    }
}

/// Build a postport command pointed at this site's source and destination
pub fn postport_cmd(site: &TestSite) -> assert_cmd::Command {
    let mut cmd =
        assert_cmd::Command::cargo_bin("postport").expect("Failed to find postport binary");
    cmd.arg(&site.source).arg(&site.dest);
    cmd
}
