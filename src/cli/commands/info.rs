//! Info command implementation.
//!
//! The `tiapp info` command summarizes the descriptor: SDK version and
//! declared modules and plugins.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::InfoArgs;
use crate::descriptor::{Dependency, DependencyKind, DescriptorStore};
use crate::error::{Result, TiappError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Descriptor summary, as printed by `info --json`.
#[derive(Debug, Serialize)]
pub struct DescriptorInfo {
    pub path: PathBuf,
    pub sdk_version: Option<String>,
    pub modules: Vec<Dependency>,
    pub plugins: Vec<Dependency>,
}

impl DescriptorInfo {
    /// Collect the summary from an open store.
    pub fn from_store(store: &DescriptorStore) -> Self {
        Self {
            path: store.path().to_path_buf(),
            sdk_version: store.sdk_version(),
            modules: store.dependencies(DependencyKind::Module),
            plugins: store.dependencies(DependencyKind::Plugin),
        }
    }
}

fn describe(dep: &Dependency) -> String {
    let mut line = dep.id.clone();
    if let Some(version) = &dep.version {
        line.push_str(&format!(" {}", version));
    }
    if let Some(platform) = &dep.platform {
        line.push_str(&format!(" ({})", platform));
    }
    line
}

/// The info command implementation.
pub struct InfoCommand {
    descriptor: PathBuf,
    args: InfoArgs,
}

impl InfoCommand {
    /// Create a new info command.
    pub fn new(descriptor: &Path, args: InfoArgs) -> Self {
        Self {
            descriptor: descriptor.to_path_buf(),
            args,
        }
    }
}

impl Command for InfoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = DescriptorStore::open(&self.descriptor)?;
        let info = DescriptorInfo::from_store(&store);

        if self.args.json {
            let output =
                serde_json::to_string_pretty(&info).map_err(|e| TiappError::Other(e.into()))?;
            ui.data(&output);
            return Ok(CommandResult::success());
        }

        ui.key_value("Descriptor", &info.path.display().to_string());
        ui.key_value("SDK", info.sdk_version.as_deref().unwrap_or("(unknown)"));

        for (label, deps) in [("Modules", &info.modules), ("Plugins", &info.plugins)] {
            if deps.is_empty() {
                ui.key_value(label, "(none)");
                continue;
            }
            let list: Vec<String> = deps.iter().map(describe).collect();
            ui.key_value(label, &list.join(", "));
        }

        Ok(CommandResult::success())
    }
}
