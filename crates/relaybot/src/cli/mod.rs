//! Command-line interface for the relaybot binary.

mod ask;
mod commands;
mod gh;

pub use ask::run_ask;
pub use commands::{Cli, Commands};
pub use gh::run_gh;
