//! Compare command implementation.
//!
//! `tiapp compare A B` prints `-1`, `0` or `1`. With a single version the
//! descriptor's SDK version is compared against it.

use std::path::{Path, PathBuf};

use crate::cli::args::CompareArgs;
use crate::descriptor::DescriptorStore;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::version;

use super::dispatcher::{Command, CommandResult};

/// The compare command implementation.
pub struct CompareCommand {
    descriptor: PathBuf,
    args: CompareArgs,
}

impl CompareCommand {
    /// Create a new compare command.
    pub fn new(descriptor: &Path, args: CompareArgs) -> Self {
        Self {
            descriptor: descriptor.to_path_buf(),
            args,
        }
    }
}

impl Command for CompareCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ordering = match &self.args.right {
            Some(right) => version::compare(&self.args.left, right),
            None => DescriptorStore::open(&self.descriptor)?.compare_sdk_version(&self.args.left),
        };

        ui.data(&version::ordering_to_i32(ordering).to_string());
        Ok(CommandResult::success())
    }
}
