//! Build property fixes.

use tracing::{debug, info, warn};
use xmltree::XMLNode;

use crate::error::Result;
use crate::version::parse_int_prefix;

use super::store::property_mut;
use super::xml;
use super::DescriptorStore;

/// Property selecting the Android JavaScript runtime.
pub const RUNTIME_PROPERTY: &str = "ti.android.runtime";

/// Runtime that needs a larger thread stack.
pub const RHINO_RUNTIME: &str = "rhino";

/// Property holding the Android thread stack size.
pub const STACK_SIZE_PROPERTY: &str = "ti.android.threadstacksize";

/// Smallest stack size the rhino runtime runs reliably with.
pub const MINIMUM_STACK_SIZE: i64 = 32768;

/// What [`DescriptorStore::ensure_minimum_stack_size`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackSizeOutcome {
    /// The runtime is not rhino; nothing to do.
    NotRequired,
    /// The existing value already meets the minimum.
    AlreadySufficient { value: i64 },
    /// The existing value has no leading integer and was left alone.
    Unparseable { value: String },
    /// An existing value was raised to the minimum.
    Raised { from: i64 },
    /// The property did not exist and was added.
    Added,
}

impl StackSizeOutcome {
    /// Whether the descriptor file was rewritten.
    pub fn wrote(&self) -> bool {
        matches!(self, Self::Raised { .. } | Self::Added)
    }
}

impl DescriptorStore {
    /// Make sure rhino builds get at least [`MINIMUM_STACK_SIZE`] bytes of
    /// thread stack.
    ///
    /// Only touches the file when the property is missing or too small.
    pub fn ensure_minimum_stack_size(&mut self) -> Result<StackSizeOutcome> {
        if self.property_text(RUNTIME_PROPERTY).as_deref() != Some(RHINO_RUNTIME) {
            return Ok(StackSizeOutcome::NotRequired);
        }

        let minimum = MINIMUM_STACK_SIZE.to_string();
        let mut root = self.root().clone();
        let outcome = match property_mut(&mut root, STACK_SIZE_PROPERTY) {
            Some(node) => {
                let current = xml::text(node);
                match parse_int_prefix(&current) {
                    Some(value) if value < MINIMUM_STACK_SIZE => {
                        xml::set_text(node, &minimum);
                        StackSizeOutcome::Raised { from: value }
                    }
                    Some(value) => return Ok(StackSizeOutcome::AlreadySufficient { value }),
                    None => {
                        warn!(
                            "Ignoring non-numeric {} value \"{}\"",
                            STACK_SIZE_PROPERTY, current
                        );
                        return Ok(StackSizeOutcome::Unparseable { value: current });
                    }
                }
            }
            None => {
                let node = xml::text_element(
                    "property",
                    &[("name", STACK_SIZE_PROPERTY), ("type", "int")],
                    &minimum,
                );
                root.children.push(XMLNode::Element(node));
                StackSizeOutcome::Added
            }
        };

        self.commit(root)?;
        match &outcome {
            StackSizeOutcome::Raised { from } => info!(
                "Raised {} from {} to {} for the rhino runtime",
                STACK_SIZE_PROPERTY, from, MINIMUM_STACK_SIZE
            ),
            _ => info!(
                "Added {} = {} for the rhino runtime",
                STACK_SIZE_PROPERTY, MINIMUM_STACK_SIZE
            ),
        }
        debug!("Stack size fix applied to {}", self.path().display());
        Ok(outcome)
    }
}
