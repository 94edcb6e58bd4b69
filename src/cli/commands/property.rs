//! Property command implementation.
//!
//! The `tiapp property <NAME>` command prints one `<property>` value.

use std::path::{Path, PathBuf};

use crate::cli::args::PropertyArgs;
use crate::descriptor::DescriptorStore;
use crate::error::{Result, TiappError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The property command implementation.
pub struct PropertyCommand {
    descriptor: PathBuf,
    args: PropertyArgs,
}

impl PropertyCommand {
    /// Create a new property command.
    pub fn new(descriptor: &Path, args: PropertyArgs) -> Self {
        Self {
            descriptor: descriptor.to_path_buf(),
            args,
        }
    }
}

impl Command for PropertyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = DescriptorStore::open(&self.descriptor)?;

        let Some(property) = store.property_value(&self.args.name) else {
            ui.error(&format!("Property '{}' not found", self.args.name));
            return Ok(CommandResult::failure(1));
        };

        if self.args.json {
            let output = serde_json::to_string_pretty(&property)
                .map_err(|e| TiappError::Other(e.into()))?;
            ui.data(&output);
        } else {
            ui.data(&property.value);
        }

        Ok(CommandResult::success())
    }
}
