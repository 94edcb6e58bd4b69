//! Install command implementation.
//!
//! `tiapp install-module` and `tiapp install-plugin` register a dependency
//! in the descriptor. Installing an id that is already present succeeds
//! without touching the file.

use std::path::{Path, PathBuf};

use crate::cli::args::InstallArgs;
use crate::descriptor::{DependencyKind, DescriptorStore, InstallOptions, InstallOutcome};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation, shared by modules and plugins.
pub struct InstallCommand {
    descriptor: PathBuf,
    kind: DependencyKind,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command for `kind`.
    pub fn new(descriptor: &Path, kind: DependencyKind, args: InstallArgs) -> Self {
        Self {
            descriptor: descriptor.to_path_buf(),
            kind,
            args,
        }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = DescriptorStore::open(&self.descriptor)?;
        let opts = InstallOptions::from(&self.args);
        let id = opts.id.trim();

        match store.install_dependency(self.kind, &opts)? {
            InstallOutcome::Installed => ui.success(&format!(
                "Installed \"{}\" {} to {}",
                id,
                self.kind,
                store.path().display()
            )),
            InstallOutcome::AlreadyInstalled => ui.message(&format!(
                "\"{}\" {} is already installed",
                id, self.kind
            )),
        }

        Ok(CommandResult::success())
    }
}
