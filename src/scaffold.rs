//! The scaffolding pipeline.
//!
//! Steps run strictly in order and the first failure stops the pipeline:
//!
//! 1. check that git is installed
//! 2. resolve the project name
//! 3. make sure the target path is free and claim it
//! 4. shallow clone of the starter repository
//! 5. drop the starter's git history
//! 6. fresh `git init` with a single initial commit
//! 7. dependency install, skipped with an advisory when the package manager is missing
//!
//! Nothing here exits the process; failures come back as [`ScaffoldError`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::command::{ProcessRunner, RunOptions};
use crate::error::{Result, ScaffoldError, StepCause};
use crate::guard::{claim_target, ensure_target_absent};
use crate::name::NameResolver;
use crate::output;
use crate::progress::Status;
use crate::tools::{self, ToolProbe, GIT};

pub const APP_NAME: &str = "Sui dApp Starter";

/// Starter template cloned for every new project.
pub const SOURCE_REPO: &str = "https://github.com/suiware/sui-dapp-starter.git";

pub const DEFAULT_PACKAGE_MANAGER: &str = "pnpm";

#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    pub source_repo: String,
    pub package_manager: String,
    /// Show child process output and underlying errors
    pub verbose: bool,
    /// Remove the target directory when a step after the folder check fails
    pub cleanup_on_failure: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            source_repo: SOURCE_REPO.to_string(),
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
            verbose: false,
            cleanup_on_failure: false,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub name: String,
    pub path: PathBuf,
    pub dependencies_installed: bool,
}

pub struct Scaffolder<'a> {
    runner: &'a dyn ProcessRunner,
    probe: &'a dyn ToolProbe,
    options: ScaffoldOptions,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        runner: &'a dyn ProcessRunner,
        probe: &'a dyn ToolProbe,
        options: ScaffoldOptions,
    ) -> Self {
        Self {
            runner,
            probe,
            options,
        }
    }

    /// Run the whole pipeline for a project under `cwd`.
    pub fn scaffold(
        &self,
        cwd: &Path,
        raw_name: Option<&str>,
        namer: &dyn NameResolver,
    ) -> Result<ScaffoldReport> {
        tools::check_git(self.probe)?;

        let name = namer.resolve_name(raw_name)?;
        output::info(&format!("\nCreating \"{}\" project...\n", name));

        let target = ensure_target_absent(cwd, &name)?;
        claim_target(&target)?;
        tracing::debug!("scaffolding into {}", target.display());

        if let Err(e) = self.clone_starter(cwd, &name) {
            release(&target);
            return Err(e);
        }

        let dependencies_installed = match self.prepare(&target) {
            Ok(installed) => installed,
            Err(e) => {
                if self.options.cleanup_on_failure {
                    self.cleanup(&target);
                }
                return Err(e);
            }
        };

        output::farewell(APP_NAME, SOURCE_REPO);

        Ok(ScaffoldReport {
            name,
            path: target,
            dependencies_installed,
        })
    }

    /// Clone into the claimed directory. `name` is resolved against `cwd` by git.
    fn clone_starter(&self, cwd: &Path, name: &str) -> Result<()> {
        self.step(
            "Cloning the source repo",
            "Cannot clone the source repo",
            || {
                self.git(
                    cwd,
                    &["clone", "--depth", "1", self.options.source_repo.as_str(), name],
                )
            },
        )
    }

    /// Steps after the clone. Returns whether dependencies were installed.
    fn prepare(&self, target: &Path) -> Result<bool> {
        self.step(
            "Removing old git history",
            "Cannot remove old git history",
            || remove_history(target),
        )?;

        self.step(
            "Initializing a new git repo",
            "Cannot initialize a new git repo",
            || {
                self.git(target, &["init"])?;
                self.git(target, &["add", "."])?;
                self.git(target, &["commit", "-m", "Initial commit"])
            },
        )?;

        let package_manager = self.options.package_manager.as_str();
        if !tools::package_manager_available(self.probe, package_manager) {
            output::error(&tools::package_manager_advice(package_manager));
            return Ok(false);
        }

        self.step(
            "Installing dependencies",
            "Cannot install dependencies",
            || {
                self.runner
                    .run(package_manager, &["install"], &self.run_options(target))
                    .map_err(StepCause::from)
            },
        )?;

        Ok(true)
    }

    /// Run one reported step: spinner while `action` runs, then a success or failure mark.
    fn step<F>(&self, start: &str, failure: &str, action: F) -> Result<()>
    where
        F: FnOnce() -> std::result::Result<(), StepCause>,
    {
        let status = Status::new(start);
        match action() {
            Ok(()) => {
                status.succeed();
                Ok(())
            }
            Err(cause) => {
                status.fail(failure);
                if self.options.verbose {
                    output::error(&cause.to_string());
                }
                Err(ScaffoldError::Step {
                    label: failure.to_string(),
                    source: cause,
                })
            }
        }
    }

    fn git(&self, dir: &Path, args: &[&str]) -> std::result::Result<(), StepCause> {
        self.runner
            .run(GIT, args, &self.run_options(dir))
            .map_err(StepCause::from)
    }

    fn run_options(&self, dir: &Path) -> RunOptions {
        RunOptions::in_dir(dir, self.options.verbose)
    }

    /// Remove a target the clone populated. Only called after a successful clone.
    fn cleanup(&self, target: &Path) {
        match fs::remove_dir_all(target) {
            Ok(()) => tracing::info!("removed partially created {}", target.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("failed to remove {}: {}", target.display(), e),
        }
    }
}

/// Give back the claimed directory after a failed clone. Only an empty
/// directory is removed; anything written there is left alone.
fn release(target: &Path) {
    if let Err(e) = fs::remove_dir(target) {
        tracing::debug!("left {} in place: {}", target.display(), e);
    }
}

/// Delete the cloned repository's git metadata. `.git` may be a directory or
/// a gitdir file; already gone counts as done.
fn remove_history(target: &Path) -> std::result::Result<(), StepCause> {
    let git_dir = target.join(".git");
    let removed = match fs::symlink_metadata(&git_dir) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(&git_dir),
        Ok(_) => fs::remove_file(&git_dir),
        Err(e) => Err(e),
    };
    match removed {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StepCause::Io(e)),
    }
}
