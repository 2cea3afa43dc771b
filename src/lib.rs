//! create-sui-dapp - scaffold a new project from the Sui dApp Starter template.

pub mod command;
pub mod error;
pub mod guard;
pub mod name;
pub mod output;
pub mod progress;
pub mod scaffold;
pub mod tools;

pub use error::ScaffoldError;
pub use scaffold::{ScaffoldOptions, Scaffolder};
