//! External process invocation.
//!
//! Commands are always spawned as an explicit program plus argument list, never
//! through a shell. The [`ProcessRunner`] trait is the seam the pipeline uses so
//! it can be driven by a fake in tests.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::CommandError;

/// Per-invocation settings.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Working directory for the child process
    pub cwd: Option<PathBuf>,
    /// Let the child write to the terminal instead of discarding its output
    pub verbose: bool,
}

impl RunOptions {
    pub fn in_dir(cwd: &Path, verbose: bool) -> Self {
        Self {
            cwd: Some(cwd.to_path_buf()),
            verbose,
        }
    }
}

/// Runs a program to completion, blocking the caller.
pub trait ProcessRunner {
    fn run(&self, program: &str, args: &[&str], options: &RunOptions) -> Result<(), CommandError>;
}

/// Spawns real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], options: &RunOptions) -> Result<(), CommandError> {
        let mut cmd = ToolCommand::new(program);
        cmd.args(args);
        if let Some(ref cwd) = options.cwd {
            cmd.current_dir(cwd);
        }
        cmd.run(options.verbose)
    }
}

pub struct ToolCommand {
    cmd: Command,
}

impl ToolCommand {
    pub fn new(program: &str) -> Self {
        Self {
            cmd: Command::new(program),
        }
    }

    pub fn args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.cmd.args(args);
        self
    }

    pub fn current_dir<P: AsRef<Path>>(&mut self, dir: P) -> &mut Self {
        self.cmd.current_dir(dir);
        self
    }

    /// Run to completion. Unless `verbose`, the child gets no stdin and its
    /// output is discarded.
    pub fn run(&mut self, verbose: bool) -> Result<(), CommandError> {
        tracing::debug!("+ {}", self.format_command());

        if !verbose {
            self.cmd
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        }

        let status = self.cmd.status().map_err(|source| CommandError::Spawn {
            program: self.get_program(),
            source,
        })?;
        if !status.success() {
            return Err(CommandError::Exit {
                program: self.get_program(),
                code: status.code(),
            });
        }
        Ok(())
    }

    fn get_program(&self) -> String {
        self.cmd.get_program().to_string_lossy().to_string()
    }

    fn format_command(&self) -> String {
        let program = self.get_program();
        let args: Vec<_> = self.cmd.get_args().map(|a| a.to_string_lossy()).collect();
        if args.is_empty() {
            program
        } else {
            format!("{} {}", program, args.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_command() {
        let mut cmd = ToolCommand::new("git");
        cmd.args(["clone", "--depth", "1", "my-app"]);
        assert_eq!(cmd.format_command(), "git clone --depth 1 my-app");
    }

    #[test]
    fn test_format_command_without_args() {
        let cmd = ToolCommand::new("pnpm");
        assert_eq!(cmd.format_command(), "pnpm");
    }

    #[test]
    fn test_get_program() {
        let cmd = ToolCommand::new("git");
        assert_eq!(cmd.get_program(), "git");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = SystemRunner
            .run(
                "create-sui-dapp-no-such-program",
                &[],
                &RunOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_exit_error() {
        let err = SystemRunner
            .run("sh", &["-c", "exit 3"], &RunOptions::default())
            .unwrap_err();
        match err {
            CommandError::Exit { program, code } => {
                assert_eq!(program, "sh");
                assert_eq!(code, Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        SystemRunner
            .run(
                "sh",
                &["-c", "touch marker"],
                &RunOptions::in_dir(dir.path(), false),
            )
            .unwrap();
        assert!(dir.path().join("marker").exists());
    }
}
