//! Blocking invocation of the script interpreter as a child process.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::{debug, error, instrument};

/// External shell interpreter used to run the companion script.
#[derive(Debug, Clone)]
pub struct Interpreter {
    /// Program name, resolved via the ambient `PATH`.
    pub program: String,
    /// Flag that makes the interpreter execute a script file argument.
    pub file_flag: String,
}

impl Interpreter {
    pub fn new(program: impl Into<String>, file_flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            file_flag: file_flag.into(),
        }
    }

    /// PowerShell Core, the interpreter the companion script targets.
    pub fn pwsh() -> Self {
        Self::new("pwsh", "-f")
    }
}

/// Run `script` under `interpreter` and block until it exits.
///
/// The child inherits stdin/stdout/stderr so script output lands in the
/// surrounding automation log. No timeout is applied. Spawn failure and
/// non-zero exit collapse into a single descriptive error; callers do not
/// distinguish the causes.
#[instrument(skip_all, fields(program = %interpreter.program, script = %script.display()))]
pub fn run_script(interpreter: &Interpreter, script: &Path) -> Result<()> {
    debug!("spawning interpreter");
    let status = Command::new(&interpreter.program)
        .arg(&interpreter.file_flag)
        .arg(script)
        .status()
        .with_context(|| {
            format!(
                "spawn {} {} {}",
                interpreter.program,
                interpreter.file_flag,
                script.display()
            )
        })?;

    if !status.success() {
        error!(exit_code = ?status.code(), "script failed");
        bail!(
            "{} exited with {} running {}",
            interpreter.program,
            status,
            script.display()
        );
    }

    debug!("script finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InstallTree, stub_interpreter};

    #[test]
    fn zero_exit_is_ok() {
        let tree = InstallTree::new("exit 0\n").expect("tree");
        run_script(&stub_interpreter(), &tree.script_path()).expect("script should succeed");
    }

    #[test]
    fn nonzero_exit_is_an_error_naming_the_script() {
        let tree = InstallTree::new("exit 7\n").expect("tree");
        let err = run_script(&stub_interpreter(), &tree.script_path())
            .expect_err("script should fail");

        let message = format!("{err:#}");
        assert!(message.contains("exited with"), "got: {message}");
        assert!(message.contains("action.ps1"), "got: {message}");
    }

    #[test]
    fn missing_interpreter_is_an_error_naming_the_program() {
        let tree = InstallTree::new("exit 0\n").expect("tree");
        let missing = Interpreter::new("launcher-test-no-such-interpreter", "-f");
        let err =
            run_script(&missing, &tree.script_path()).expect_err("spawn should fail");

        let message = format!("{err:#}");
        assert!(
            message.contains("launcher-test-no-such-interpreter"),
            "got: {message}"
        );
    }
}
