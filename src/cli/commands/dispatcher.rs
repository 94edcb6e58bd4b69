//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::descriptor::DependencyKind;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    descriptor: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher operating on the given descriptor file.
    pub fn new(descriptor: PathBuf) -> Self {
        Self { descriptor }
    }

    /// Get the descriptor path.
    pub fn descriptor(&self) -> &Path {
        &self.descriptor
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::SdkVersion => {
                let cmd = super::sdk_version::SdkVersionCommand::new(&self.descriptor);
                cmd.execute(ui)
            }
            Commands::Property(args) => {
                let cmd = super::property::PropertyCommand::new(&self.descriptor, args.clone());
                cmd.execute(ui)
            }
            Commands::Info(args) => {
                let cmd = super::info::InfoCommand::new(&self.descriptor, args.clone());
                cmd.execute(ui)
            }
            Commands::InstallModule(args) => {
                let cmd = super::install::InstallCommand::new(
                    &self.descriptor,
                    DependencyKind::Module,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::InstallPlugin(args) => {
                let cmd = super::install::InstallCommand::new(
                    &self.descriptor,
                    DependencyKind::Plugin,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::FixStackSize => {
                let cmd = super::fix_stack_size::FixStackSizeCommand::new(&self.descriptor);
                cmd.execute(ui)
            }
            Commands::Validate(args) => {
                let cmd = super::validate::ValidateCommand::new(&self.descriptor, args.clone());
                cmd.execute(ui)
            }
            Commands::Compare(args) => {
                let cmd = super::compare::CompareCommand::new(&self.descriptor, args.clone());
                cmd.execute(ui)
            }
        }
    }
}
