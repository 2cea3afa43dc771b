//! Error types for the scaffolding pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single external command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed with exit code: {}", exit_label(.code))]
    Exit { program: String, code: Option<i32> },
}

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Git is not found. Please install https://git-scm.com/downloads")]
    GitNotFound,

    #[error("The folder already exists. Please remove or choose another project name.")]
    FolderExists(PathBuf),

    /// A pipeline step failed. The failure label has already been shown to
    /// the user by the step's status line.
    #[error("{label}")]
    Step {
        label: String,
        #[source]
        source: StepCause,
    },

    #[error("failed to read project name: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Underlying cause of a failed step.
#[derive(Error, Debug)]
pub enum StepCause {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

impl ScaffoldError {
    /// Whether the user has already seen this failure.
    pub fn is_reported(&self) -> bool {
        matches!(self, ScaffoldError::Step { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
