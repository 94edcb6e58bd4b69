//! The descriptor store: one parsed `tiapp.xml` and the path it came from.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};
use xmltree::{Element, XMLNode};

use crate::error::{Result, TiappError};
use crate::version;

use super::xml;

/// Descriptor file name looked up when no path is given.
pub const DEFAULT_DESCRIPTOR: &str = "tiapp.xml";

/// A parsed project descriptor bound to its backing file.
///
/// Every mutating operation rewrites the whole file before returning, so the
/// file on disk always matches the last change applied.
#[derive(Debug, Clone)]
pub struct DescriptorStore {
    path: PathBuf,
    root: Element,
}

/// A `<property>` entry flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyValue {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub value: String,
}

/// Outcome of a successful SDK version check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkCheck {
    /// The descriptor's SDK meets the minimum.
    Supported { found: String },
    /// No `sdk-version` element was found; the check was skipped.
    Undetermined,
}

impl DescriptorStore {
    /// Parse the descriptor at `path`.
    ///
    /// # Errors
    ///
    /// Returns `DescriptorNotFound` if the file doesn't exist.
    /// Returns `DescriptorParse` if the file is not well-formed XML.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(TiappError::DescriptorNotFound { path });
        }

        let file = fs::File::open(&path)?;
        let root = xml::parse(file).map_err(|e| TiappError::DescriptorParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        debug!("Loaded descriptor {}", path.display());
        Ok(Self { path, root })
    }

    /// Parse `tiapp.xml` in the current directory.
    pub fn open_default() -> Result<Self> {
        Self::open(DEFAULT_DESCRIPTOR)
    }

    /// Path the descriptor is read from and written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document's root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Text of the last `sdk-version` element under the root.
    ///
    /// Older tooling appended a fresh element instead of editing the existing
    /// one, so the last occurrence wins.
    pub fn sdk_version(&self) -> Option<String> {
        xml::children_named(&self.root, "sdk-version")
            .last()
            .map(xml::text)
    }

    /// First `<property>` under the root whose `name` attribute matches.
    pub fn property(&self, name: &str) -> Option<&Element> {
        xml::children_named(&self.root, "property")
            .find(|p| p.attributes.get("name").map(String::as_str) == Some(name))
    }

    /// Text value of a property, if present.
    pub fn property_text(&self, name: &str) -> Option<String> {
        self.property(name).map(xml::text)
    }

    /// A property flattened into name, type and value.
    pub fn property_value(&self, name: &str) -> Option<PropertyValue> {
        self.property(name).map(|p| PropertyValue {
            name: name.to_string(),
            kind: p.attributes.get("type").cloned(),
            value: xml::text(p),
        })
    }

    /// Compare the descriptor's SDK version against `other`.
    ///
    /// A missing `sdk-version` compares as `0.0.0`.
    pub fn compare_sdk_version(&self, other: &str) -> Ordering {
        let current = self.sdk_version().unwrap_or_default();
        version::compare(&current, other)
    }

    /// Check that the descriptor targets at least `minimum`.
    ///
    /// # Errors
    ///
    /// Returns `VersionTooLow` when the declared SDK is older than `minimum`.
    /// A missing `sdk-version` only warns and yields [`SdkCheck::Undetermined`].
    pub fn validate_sdk_version(&self, minimum: &str) -> Result<SdkCheck> {
        let Some(found) = self.sdk_version() else {
            warn!("Unable to determine Titanium SDK version from tiapp.xml.");
            warn!("Your app may have unexpected behavior. Make sure your tiapp.xml is valid.");
            return Ok(SdkCheck::Undetermined);
        };

        if version::lt(&found, minimum) {
            return Err(TiappError::VersionTooLow {
                required: minimum.to_string(),
                found,
            });
        }

        debug!("Titanium SDK {} satisfies minimum {}", found, minimum);
        Ok(SdkCheck::Supported { found })
    }

    /// Serialize the document as it would be written to disk.
    pub fn to_xml_string(&self) -> Result<String> {
        xml::serialize(&self.root).map_err(|e| TiappError::DescriptorWrite {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Overwrite the backing file with the current document.
    pub fn save(&self) -> Result<()> {
        self.write(&self.root)
    }

    /// Write `root` to the backing file, then adopt it as the document.
    ///
    /// When the write fails the in-memory document is left as it was, so it
    /// never runs ahead of the file.
    pub(crate) fn commit(&mut self, root: Element) -> Result<()> {
        self.write(&root)?;
        self.root = root;
        Ok(())
    }

    fn write(&self, root: &Element) -> Result<()> {
        let content = xml::serialize(root).map_err(|e| TiappError::DescriptorWrite {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        fs::write(&self.path, content)?;
        debug!("Wrote descriptor {}", self.path.display());
        Ok(())
    }
}

/// First `<property>` child of `root` named `name`, mutably.
pub(crate) fn property_mut<'a>(root: &'a mut Element, name: &str) -> Option<&'a mut Element> {
    root.children.iter_mut().find_map(|node| match node {
        XMLNode::Element(e)
            if e.name == "property"
                && e.attributes.get("name").map(String::as_str) == Some(name) =>
        {
            Some(e)
        }
        _ => None,
    })
}
