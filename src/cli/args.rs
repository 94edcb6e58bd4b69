//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::descriptor::{InstallOptions, DEFAULT_DESCRIPTOR};
use crate::version::MINIMUM_SDK_VERSION;

/// tiapp - Titanium project descriptor tool.
#[derive(Debug, Parser)]
#[command(name = "tiapp")]
#[command(author, version, about = "Query and update Titanium tiapp.xml descriptors", long_about = None)]
pub struct Cli {
    /// Path to the descriptor, relative to the project directory
    #[arg(short, long, global = true, env = "TIAPP_FILE", default_value = DEFAULT_DESCRIPTOR)]
    pub file: PathBuf,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Descriptor path resolved against `project_root`.
    pub fn descriptor_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.file)
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the Titanium SDK version
    SdkVersion,

    /// Print a property value
    Property(PropertyArgs),

    /// Summarize the descriptor
    Info(InfoArgs),

    /// Register a native module
    InstallModule(InstallArgs),

    /// Register a build plugin
    InstallPlugin(InstallArgs),

    /// Raise the Android thread stack size for the rhino runtime
    FixStackSize,

    /// Check the SDK version against the supported minimum
    Validate(ValidateArgs),

    /// Compare two versions (or the descriptor's SDK version with one)
    Compare(CompareArgs),
}

/// Arguments for the `property` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PropertyArgs {
    /// Property name, e.g. ti.android.runtime
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InfoArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `install-module` and `install-plugin`.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallArgs {
    /// Dependency identifier, e.g. ti.map
    pub id: String,

    /// Display name used in messages
    #[arg(long)]
    pub name: Option<String>,

    /// Restrict to one platform (android, iphone, ...)
    #[arg(long)]
    pub platform: Option<String>,

    /// Pin to a version
    #[arg(long = "version", id = "dependency_version")]
    pub dependency_version: Option<String>,
}

impl From<&InstallArgs> for InstallOptions {
    fn from(args: &InstallArgs) -> Self {
        InstallOptions {
            id: args.id.clone(),
            name: args.name.clone(),
            platform: args.platform.clone(),
            version: args.dependency_version.clone(),
        }
    }
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ValidateArgs {
    /// Minimum supported SDK version
    #[arg(long, env = "TIAPP_MINIMUM_SDK", default_value = MINIMUM_SDK_VERSION)]
    pub minimum: String,
}

/// Arguments for the `compare` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompareArgs {
    /// First version, or the version to compare the descriptor's SDK with
    pub left: String,

    /// Second version
    pub right: Option<String>,
}
