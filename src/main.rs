//! create-sui-dapp - install the Sui dApp Starter with ease
//!
//! Clones the starter template, replaces its history with a fresh initial
//! commit, and installs dependencies.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;

use create_sui_dapp::command::SystemRunner;
use create_sui_dapp::name::{DirectName, InteractiveName, TermPrompter};
use create_sui_dapp::output;
use create_sui_dapp::scaffold::{DEFAULT_PACKAGE_MANAGER, SOURCE_REPO};
use create_sui_dapp::tools::SystemProbe;
use create_sui_dapp::{ScaffoldError, ScaffoldOptions, Scaffolder};

/// Install Sui dApp Starter with ease
#[derive(Parser)]
#[command(name = "create-sui-dapp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the project directory to create
    #[arg(value_name = "project-name")]
    project_name: Option<String>,

    /// Show output of git and the package manager
    #[arg(short, long)]
    verbose: bool,

    /// Remove the project directory again if a step fails
    #[arg(long)]
    cleanup_on_failure: bool,

    /// Starter repository to clone
    #[arg(long, env = "CREATE_SUI_DAPP_SOURCE_REPO", default_value = SOURCE_REPO)]
    source_repo: String,

    /// Package manager used to install dependencies
    #[arg(long, env = "CREATE_SUI_DAPP_PACKAGE_MANAGER", default_value = DEFAULT_PACKAGE_MANAGER)]
    package_manager: String,
}

fn main() {
    let cli = Cli::parse();

    // Default to INFO unless verbose is set (then DEBUG), or RUST_LOG overrides it.
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        let reported = e
            .downcast_ref::<ScaffoldError>()
            .is_some_and(ScaffoldError::is_reported);
        if !reported {
            output::error(&format!("{:#}", e));
        }
        tracing::debug!("{:?}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;

    let options = ScaffoldOptions {
        source_repo: cli.source_repo,
        package_manager: cli.package_manager,
        verbose: cli.verbose,
        cleanup_on_failure: cli.cleanup_on_failure,
    };
    let scaffolder = Scaffolder::new(&SystemRunner, &SystemProbe, options);
    let raw_name = cli.project_name.as_deref();

    let report = if std::io::stdin().is_terminal() {
        scaffolder.scaffold(&cwd, raw_name, &InteractiveName::new(TermPrompter))?
    } else {
        scaffolder.scaffold(&cwd, raw_name, &DirectName::default())?
    };

    tracing::debug!(
        "created {} (dependencies installed: {})",
        report.path.display(),
        report.dependencies_installed
    );
    Ok(())
}
