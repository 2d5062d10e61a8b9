//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations against a shared
//! [`Detector`](crate::Detector). Output goes to a caller-supplied writer so
//! commands can be exercised without a terminal.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod options;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
