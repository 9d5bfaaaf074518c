//! Library half of the `fx-demo` binary: CLI definition, logger setup and the
//! scenario runner, split out so they can be tested without spawning a process.

pub mod cli;
pub mod error;
pub mod logger;
pub mod scenario;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{DemoError, Result};
pub use scenario::{PublishSummary, ScenarioOptions, ScenarioSummary, SubscriberSummary, run};
