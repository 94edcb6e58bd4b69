//! SDK version command implementation.
//!
//! The `tiapp sdk-version` command prints the descriptor's SDK version.

use std::path::{Path, PathBuf};

use crate::descriptor::DescriptorStore;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The sdk-version command implementation.
pub struct SdkVersionCommand {
    descriptor: PathBuf,
}

impl SdkVersionCommand {
    /// Create a new sdk-version command.
    pub fn new(descriptor: &Path) -> Self {
        Self {
            descriptor: descriptor.to_path_buf(),
        }
    }
}

impl Command for SdkVersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = DescriptorStore::open(&self.descriptor)?;

        match store.sdk_version() {
            Some(version) => {
                ui.data(&version);
                Ok(CommandResult::success())
            }
            None => {
                ui.warning(&format!(
                    "No sdk-version element found in {}",
                    store.path().display()
                ));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
