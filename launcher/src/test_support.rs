//! Test-only helpers for building fake installation trees.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::locate::{DIST_DIR, SCRIPT_NAME};
use crate::io::process::Interpreter;

/// A temp installation root holding a companion script, with an optional
/// `dist` bundle subdirectory standing in for the launcher's own directory.
pub struct InstallTree {
    root: TempDir,
}

impl InstallTree {
    /// Create a root whose `action.ps1` has the given body.
    ///
    /// Bodies are plain `sh` so tests can run them through
    /// [`stub_interpreter`] without a PowerShell install.
    pub fn new(script_body: &str) -> Result<Self> {
        let root = TempDir::new().context("create temp install root")?;
        fs::write(root.path().join(SCRIPT_NAME), script_body).context("write script")?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &std::path::Path {
        self.root.path()
    }

    /// Path of the companion script at the root.
    pub fn script_path(&self) -> PathBuf {
        self.root.path().join(SCRIPT_NAME)
    }

    /// Create and return the `dist` subdirectory.
    pub fn dist_dir(&self) -> Result<PathBuf> {
        let dist = self.root.path().join(DIST_DIR);
        fs::create_dir_all(&dist).context("create dist dir")?;
        Ok(dist)
    }
}

/// Interpreter stub with the same `program file_flag script` call shape as
/// `pwsh -f`: for `sh`, `-f` only disables globbing, so the script operand
/// still runs.
pub fn stub_interpreter() -> Interpreter {
    Interpreter::new("sh", "-f")
}
