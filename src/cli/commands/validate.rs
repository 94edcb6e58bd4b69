//! Validate command implementation.
//!
//! The `tiapp validate` command gates a build on the minimum supported
//! Titanium SDK. A too-old SDK is returned as an error so `main` can print
//! the remediation text and exit non-zero.

use std::path::{Path, PathBuf};

use crate::cli::args::ValidateArgs;
use crate::descriptor::{DescriptorStore, SdkCheck};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    descriptor: PathBuf,
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(descriptor: &Path, args: ValidateArgs) -> Self {
        Self {
            descriptor: descriptor.to_path_buf(),
            args,
        }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = DescriptorStore::open(&self.descriptor)?;

        match store.validate_sdk_version(&self.args.minimum)? {
            SdkCheck::Supported { found } => ui.success(&format!(
                "Titanium SDK {} meets the minimum of {}",
                found, self.args.minimum
            )),
            SdkCheck::Undetermined => {
                if ui.output_mode().shows_details() {
                    ui.message("Skipped SDK version check");
                }
            }
        }

        Ok(CommandResult::success())
    }
}
