//! Detection of the external tools the pipeline depends on.

use crate::error::{Result, ScaffoldError};

pub const GIT: &str = "git";

/// Answers whether an executable can be found.
pub trait ToolProbe {
    fn is_available(&self, program: &str) -> bool;
}

/// Looks executables up on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl ToolProbe for SystemProbe {
    fn is_available(&self, program: &str) -> bool {
        match which::which(program) {
            Ok(path) => {
                tracing::debug!("found {} at {}", program, path.display());
                true
            }
            Err(e) => {
                tracing::debug!("{} not found: {}", program, e);
                false
            }
        }
    }
}

/// Git is required; its absence stops the run.
pub fn check_git(probe: &dyn ToolProbe) -> Result<()> {
    if probe.is_available(GIT) {
        Ok(())
    } else {
        Err(ScaffoldError::GitNotFound)
    }
}

/// The package manager is optional; dependency installation is skipped without it.
pub fn package_manager_available(probe: &dyn ToolProbe, package_manager: &str) -> bool {
    probe.is_available(package_manager)
}

/// Advice shown when the package manager is missing.
pub fn package_manager_advice(package_manager: &str) -> String {
    let install_hint = match package_manager {
        "pnpm" => " https://pnpm.io/installation",
        "npm" => " https://docs.npmjs.com/downloading-and-installing-node-js-and-npm",
        "yarn" => " https://yarnpkg.com/getting-started/install",
        "bun" => " https://bun.sh/docs/installation",
        _ => "",
    };
    format!(
        "{} is not found. Please install it first{} and then run `{} install` from the project root.",
        package_manager.to_uppercase(),
        install_hint,
        package_manager
    )
}
