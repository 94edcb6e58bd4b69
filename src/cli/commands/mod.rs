//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command opens the descriptor
//! itself, so each invocation reads the file fresh and mutating commands
//! flush before returning.

pub mod compare;
pub mod dispatcher;
pub mod fix_stack_size;
pub mod info;
pub mod install;
pub mod property;
pub mod sdk_version;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
