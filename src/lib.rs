//! tiapp - Titanium project descriptor management.
//!
//! Reads a `tiapp.xml` descriptor, answers queries about it and applies
//! idempotent fixes (module/plugin registration, the rhino stack size
//! property), writing the file back after every change. A small dotted
//! version comparator gates builds on a minimum SDK version.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`descriptor`] - Descriptor loading, queries and mutations
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//! - [`version`] - Dotted version comparison
//!
//! # Example
//!
//! ```
//! use tiapp::version;
//!
//! assert!(version::eq("1.2", "1.2.0"));
//! assert!(version::lt("4.9.9", "5.0.0"));
//! ```

pub mod cli;
pub mod descriptor;
pub mod error;
pub mod ui;
pub mod version;

pub use error::{Result, TiappError};
