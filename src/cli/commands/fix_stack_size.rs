//! Fix-stack-size command implementation.
//!
//! The `tiapp fix-stack-size` command makes sure rhino builds get a large
//! enough Android thread stack.

use std::path::{Path, PathBuf};

use crate::descriptor::{
    DescriptorStore, StackSizeOutcome, MINIMUM_STACK_SIZE, RUNTIME_PROPERTY, STACK_SIZE_PROPERTY,
};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The fix-stack-size command implementation.
pub struct FixStackSizeCommand {
    descriptor: PathBuf,
}

impl FixStackSizeCommand {
    /// Create a new fix-stack-size command.
    pub fn new(descriptor: &Path) -> Self {
        Self {
            descriptor: descriptor.to_path_buf(),
        }
    }
}

impl Command for FixStackSizeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = DescriptorStore::open(&self.descriptor)?;

        match store.ensure_minimum_stack_size()? {
            StackSizeOutcome::NotRequired => ui.message(&format!(
                "{} is not rhino; nothing to do",
                RUNTIME_PROPERTY
            )),
            StackSizeOutcome::AlreadySufficient { value } => ui.message(&format!(
                "{} is already {}",
                STACK_SIZE_PROPERTY, value
            )),
            StackSizeOutcome::Unparseable { value } => ui.warning(&format!(
                "{} has non-numeric value \"{}\"; left unchanged",
                STACK_SIZE_PROPERTY, value
            )),
            StackSizeOutcome::Raised { from } => ui.success(&format!(
                "Raised {} from {} to {}",
                STACK_SIZE_PROPERTY, from, MINIMUM_STACK_SIZE
            )),
            StackSizeOutcome::Added => ui.success(&format!(
                "Added {} = {}",
                STACK_SIZE_PROPERTY, MINIMUM_STACK_SIZE
            )),
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup(runtime: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tiapp.xml");
        fs::write(
            &path,
            format!(
                r#"<ti:app xmlns:ti="http://ti.appcelerator.org">
    <property name="ti.android.runtime" type="string">{runtime}</property>
</ti:app>"#
            ),
        )
        .unwrap();
        (temp, path)
    }

    #[test]
    fn adds_for_rhino() {
        let (_temp, path) = setup("rhino");
        let mut ui = MockUI::new();

        FixStackSizeCommand::new(&path).execute(&mut ui).unwrap();
        assert!(ui.has_success("Added ti.android.threadstacksize = 32768"));
    }

    #[test]
    fn skips_other_runtimes() {
        let (_temp, path) = setup("v8");
        let mut ui = MockUI::new();

        FixStackSizeCommand::new(&path).execute(&mut ui).unwrap();
        assert!(ui.successes().is_empty());
        assert!(ui.messages()[0].contains("nothing to do"));
    }
}
