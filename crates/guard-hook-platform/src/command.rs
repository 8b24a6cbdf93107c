use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, ExitStatus};

use crate::error::{Error, Result};

/// Exit code reported when a child ended without one (Windows, odd cases).
const UNKNOWN_EXIT_CODE: i32 = 1;

/// Thin wrapper over [`std::process::Command`] that always passes an
/// argument vector, never a shell string.
#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl AsRef<Path>) -> Self {
        let program = program.as_ref();
        Self {
            inner: StdCommand::new(program),
            program: program.display().to_string(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.inner.current_dir(dir.into());
        self
    }

    /// Run to completion with inherited stdio and return the exit code.
    pub fn status(mut self) -> Result<i32> {
        tracing::debug!(program = %self.program, "spawning");
        let status = self.inner.status().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })?;
        Ok(exit_code(status))
    }
}

/// Translate an exit status into a shell-style exit code.
///
/// On Unix a signal-terminated child maps to `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
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
    UNKNOWN_EXIT_CODE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_args() {
        let cmd = Command::new("echo").args(["hello", "world"]);
        let args: Vec<_> = cmd.inner.get_args().collect();
        assert_eq!(args, ["hello", "world"]);
    }

    #[test]
    fn command_arg_with_spaces_stays_single() {
        let cmd = Command::new("echo").args(["--data=my template.yaml"]);
        let args: Vec<_> = cmd.inner.get_args().collect();
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn command_current_dir() {
        let cmd = Command::new("echo").current_dir("/tmp");
        assert_eq!(cmd.inner.get_current_dir(), Some(Path::new("/tmp")));
    }

    #[test]
    fn missing_program_is_error() {
        let result = Command::new("/nonexistent/cfn-guard-12345").status();
        assert!(matches!(result, Err(Error::CommandFailed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn status_passes_exit_code_through() {
        let code = Command::new("sh").args(["-c", "exit 19"]).status().unwrap();
        assert_eq!(code, 19);
        let code = Command::new("sh").args(["-c", "exit 0"]).status().unwrap();
        assert_eq!(code, 0);
    }

    #[cfg(unix)]
    #[test]
    fn status_runs_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "").unwrap();
        let code = Command::new("sh")
            .args(["-c", "test -f marker"])
            .current_dir(dir.path())
            .status()
            .unwrap();
        assert_eq!(code, 0);
    }

    #[cfg(unix)]
    #[test]
    fn signal_maps_to_128_plus() {
        let code = Command::new("sh").args(["-c", "kill -9 $$"]).status().unwrap();
        assert_eq!(code, 128 + 9);
    }
}
