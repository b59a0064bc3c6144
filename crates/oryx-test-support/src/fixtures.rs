//! Scratch workspaces for tests that read sources and write generated files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Temporary directory holding a constants source and its generated outputs.
///
/// The directory is removed when the workspace is dropped.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create an empty workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("oryx-consts-")
            .tempdir()
            .context("failed to create scratch workspace")?;
        Ok(Self { dir })
    }

    /// Root of the workspace.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `constants.yaml` at the root and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_source(&self, contents: &str) -> Result<PathBuf> {
        self.write_file("constants.yaml", contents)
    }

    /// Write `contents` to `relative`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    pub fn write_file(&self, relative: impl AsRef<Path>, contents: &str) -> Result<PathBuf> {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Read a file relative to the workspace root.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read_file(&self, relative: impl AsRef<Path>) -> Result<String> {
        let path = self.path().join(relative);
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
    }

    /// Whether any file exists under the workspace besides `constants.yaml`.
    #[must_use]
    pub fn has_generated_files(&self) -> bool {
        fs::read_dir(self.path()).is_ok_and(|entries| {
            entries
                .filter_map(std::result::Result::ok)
                .any(|entry| entry.file_name() != "constants.yaml")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_round_trips_files() -> Result<()> {
        let workspace = Workspace::new()?;
        assert!(!workspace.has_generated_files());

        let source = workspace.write_source("- name: a\n")?;
        assert!(source.ends_with("constants.yaml"));
        assert!(!workspace.has_generated_files());

        workspace.write_file("generated/go/consts/a.go", "package consts\n")?;
        assert!(workspace.has_generated_files());
        assert_eq!(
            workspace.read_file("generated/go/consts/a.go")?,
            "package consts\n"
        );
        Ok(())
    }

    #[test]
    fn workspace_is_removed_on_drop() -> Result<()> {
        let workspace = Workspace::new()?;
        let root = workspace.path().to_path_buf();
        drop(workspace);
        assert!(!root.exists());
        Ok(())
    }
}
