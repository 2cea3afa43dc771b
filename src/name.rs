//! Resolving the project name.

use dialoguer::Input;

use crate::error::{Result, ScaffoldError};
use crate::output;

/// Suggested name when the user gives none.
pub const DEFAULT_PROJECT_NAME: &str = "my-sui-dapp";

const PROMPT_MESSAGE: &str = "Please specify a name for your project: ";

/// Turns the optional command-line argument into the project name.
pub trait NameResolver {
    fn resolve_name(&self, raw: Option<&str>) -> Result<String>;
}

/// Rejects empty and whitespace-only names.
pub fn validate_project_name(input: &str) -> std::result::Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("Project name cannot be empty")
    } else {
        Ok(())
    }
}

fn usable(raw: Option<&str>) -> Option<&str> {
    raw.filter(|name| validate_project_name(name).is_ok())
}

/// Never prompts: uses the argument when usable, else a fixed fallback.
#[derive(Debug, Clone)]
pub struct DirectName {
    pub fallback: String,
}

impl Default for DirectName {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_PROJECT_NAME.to_string(),
        }
    }
}

impl NameResolver for DirectName {
    fn resolve_name(&self, raw: Option<&str>) -> Result<String> {
        match usable(raw) {
            Some(name) => Ok(name.to_string()),
            None => {
                tracing::debug!("no project name given, using {}", self.fallback);
                Ok(self.fallback.clone())
            }
        }
    }
}

/// Reads one line of input from the user.
pub trait Prompter {
    fn ask(&self, message: &str, default: &str) -> Result<String>;
}

/// Terminal prompt backed by dialoguer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn ask(&self, message: &str, default: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(message.trim_end().trim_end_matches(':'))
            .default(default.to_string())
            .validate_with(|input: &String| validate_project_name(input))
            .interact_text()
            .map_err(|e| ScaffoldError::Prompt(e.to_string()))
    }
}

/// Uses the argument when usable, otherwise asks until a valid name is given.
pub struct InteractiveName<P> {
    prompter: P,
    default: String,
}

impl<P: Prompter> InteractiveName<P> {
    pub fn new(prompter: P) -> Self {
        Self {
            prompter,
            default: DEFAULT_PROJECT_NAME.to_string(),
        }
    }
}

impl<P: Prompter> NameResolver for InteractiveName<P> {
    fn resolve_name(&self, raw: Option<&str>) -> Result<String> {
        if let Some(name) = usable(raw) {
            return Ok(name.to_string());
        }

        loop {
            let input = self.prompter.ask(PROMPT_MESSAGE, &self.default)?;
            match validate_project_name(&input) {
                Ok(()) => return Ok(input),
                Err(reason) => output::error(reason),
            }
        }
    }
}
