use std::io;
use std::process::{Command, ExitStatus, Stdio};

use log::info;

use crate::error::{Error, Result};

/// Runs a finished command and reports its exit code.
pub trait Executor {
    /// # Errors
    ///
    /// Returns an error if the command could not be started or waited on.
    fn execute(&self, command: &str) -> Result<i32>;
}

/// Hands commands to `<shell> -c`, attached to the current terminal.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
}

impl ShellExecutor {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Executor for ShellExecutor {
    fn execute(&self, command_text: &str) -> Result<i32> {
        // The child shares the terminal and gets Ctrl+C itself; we only wait for it
        absorb_interrupts()?;

        info!("Executing with `{} -c`", self.shell);
        let mut command = Command::new(&self.shell);
        command
            .args(["-c", command_text])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = command
            .spawn()
            .and_then(|mut child| child.wait())
            .map_err(Error::SubProcess)?;

        Ok(exit_code(status))
    }
}

/// Ignores SIGINT and SIGTERM in this process from now on.
fn absorb_interrupts() -> Result<()> {
    match ctrlc::set_handler(|| {}) {
        Ok(()) | Err(ctrlc::Error::MultipleHandlers) => Ok(()),
        Err(e) => Err(Error::SubProcess(io::Error::other(e))),
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
