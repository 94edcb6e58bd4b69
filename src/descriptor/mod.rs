//! Titanium project descriptor (`tiapp.xml`) access.
//!
//! [`DescriptorStore`] owns one parsed descriptor and the path it was read
//! from. Queries borrow the in-memory tree; every mutation rewrites the
//! file before returning.
//!
//! # Example
//!
//! ```no_run
//! use tiapp::descriptor::{DescriptorStore, InstallOptions};
//!
//! let mut store = DescriptorStore::open("tiapp.xml")?;
//! store.install_module(&InstallOptions::new("ti.map").platform("iphone"))?;
//! store.ensure_minimum_stack_size()?;
//! println!("{:?}", store.sdk_version());
//! # Ok::<(), tiapp::TiappError>(())
//! ```

pub mod dependency;
pub mod property;
pub mod store;
mod xml;

pub use dependency::{Dependency, DependencyKind, InstallOptions, InstallOutcome};
pub use property::{
    StackSizeOutcome, MINIMUM_STACK_SIZE, RHINO_RUNTIME, RUNTIME_PROPERTY, STACK_SIZE_PROPERTY,
};
pub use store::{DescriptorStore, PropertyValue, SdkCheck, DEFAULT_DESCRIPTOR};
