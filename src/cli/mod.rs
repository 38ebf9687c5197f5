//! Command-line interface and interactive session

pub mod commands;
pub mod session;

pub use commands::{Cli, Commands};
pub use session::Session;
