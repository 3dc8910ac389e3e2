//! Orchestration: resolve the companion script and run it.

use std::env;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{info, instrument};

use crate::core::locate::script_path;
use crate::io::process::{Interpreter, run_script};

/// Resolve `action.ps1` relative to the running binary and run it with `pwsh`.
#[instrument]
pub fn launch() -> Result<()> {
    let exe = env::current_exe().context("locate running executable")?;
    let exe_dir = exe
        .parent()
        .ok_or_else(|| anyhow!("executable {} has no parent directory", exe.display()))?;
    launch_from(exe_dir, &Interpreter::pwsh())
}

/// Same as [`launch`], with the executable directory and interpreter supplied
/// by the caller. Lifecycle tests inject a temp tree and a stub interpreter.
#[instrument(skip_all, fields(exe_dir = %exe_dir.display()))]
pub fn launch_from(exe_dir: &Path, interpreter: &Interpreter) -> Result<()> {
    let script = script_path(exe_dir);
    info!(script = %script.display(), "running companion script");
    run_script(interpreter, &script)
}
