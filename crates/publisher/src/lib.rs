//! holidays_publisher - pushes the holiday table into a function's environment.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod output;
pub mod prelude;
pub mod publish;
pub mod runner;

pub use config::PublishConfig;
pub use error::{PublishError, Result};
pub use publish::{publish, PublishOptions, PublishOutcome};
pub use runner::{CommandOutput, CommandRunner, DuctRunner};
