//! Module and plugin registration.
//!
//! Dependencies live in a collection element directly under the root:
//!
//! ```xml
//! <modules>
//!     <module platform="iphone" version="2.0">ti.map</module>
//! </modules>
//! <plugins>
//!     <plugin>ti.alloy</plugin>
//! </plugins>
//! ```
//!
//! An entry's identity is its text. `platform` and `version` are not
//! compared, so an id already present under any platform counts as installed.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};
use xmltree::{Element, XMLNode};

use crate::error::{Result, TiappError};

use super::xml;
use super::DescriptorStore;

/// The two kinds of dependency a descriptor can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Module,
    Plugin,
}

impl DependencyKind {
    /// Element name of a single entry (`module` / `plugin`).
    pub fn item_tag(&self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Plugin => "plugin",
        }
    }

    /// Element name of the collection (`modules` / `plugins`).
    pub fn collection_tag(&self) -> &'static str {
        match self {
            Self::Module => "modules",
            Self::Plugin => "plugins",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.item_tag())
    }
}

/// What to install.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOptions {
    /// Dependency identifier, written as the entry's text.
    pub id: String,
    /// Human-readable name, only used in messages.
    pub name: Option<String>,
    /// Restrict the entry to one platform.
    pub platform: Option<String>,
    /// Pin the entry to a version.
    pub version: Option<String>,
}

impl InstallOptions {
    /// Options for `id` with no name, platform or version.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Name used in messages; falls back to the id.
    pub fn label(&self) -> &str {
        non_empty(&self.name).unwrap_or(self.id.as_str())
    }
}

/// Result of an install request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// A new entry was written.
    Installed,
    /// An entry with the same id already existed; the file was not touched.
    AlreadyInstalled,
}

/// A declared dependency as read back from the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl DescriptorStore {
    /// Register a module. See [`DescriptorStore::install_dependency`].
    pub fn install_module(&mut self, opts: &InstallOptions) -> Result<InstallOutcome> {
        self.install_dependency(DependencyKind::Module, opts)
    }

    /// Register a plugin. See [`DescriptorStore::install_dependency`].
    pub fn install_plugin(&mut self, opts: &InstallOptions) -> Result<InstallOutcome> {
        self.install_dependency(DependencyKind::Plugin, opts)
    }

    /// Add `opts.id` to the `kind` collection unless it is already there.
    ///
    /// The id is trimmed before it is compared or written. The collection is
    /// created and appended to the root on first use. Blank `platform` /
    /// `version` values are treated as absent.
    pub fn install_dependency(
        &mut self,
        kind: DependencyKind,
        opts: &InstallOptions,
    ) -> Result<InstallOutcome> {
        let id = opts.id.trim();
        if id.is_empty() {
            return Err(TiappError::InstallFailed {
                kind,
                name: opts.label().to_string(),
                message: "dependency id is empty".to_string(),
            });
        }

        if self.is_installed(kind, id) {
            debug!("{} \"{}\" already installed", kind, id);
            return Ok(InstallOutcome::AlreadyInstalled);
        }

        let mut attributes = Vec::new();
        if let Some(platform) = non_empty(&opts.platform) {
            attributes.push(("platform", platform));
        }
        if let Some(version) = non_empty(&opts.version) {
            attributes.push(("version", version));
        }
        let item = xml::text_element(kind.item_tag(), &attributes, id);

        let mut root = self.root().clone();
        let index = match collection_index(&root, kind) {
            Some(index) => index,
            None => {
                root.children
                    .push(XMLNode::Element(Element::new(kind.collection_tag())));
                root.children.push(XMLNode::Text("\n".to_string()));
                root.children.len() - 2
            }
        };
        if let XMLNode::Element(collection) = &mut root.children[index] {
            collection.children.push(XMLNode::Element(item));
            collection.children.push(XMLNode::Text("\n".to_string()));
        }

        self.commit(root).map_err(|e| TiappError::InstallFailed {
            kind,
            name: opts.label().to_string(),
            message: e.to_string(),
        })?;

        info!("Installed \"{}\" {} to {}", id, kind, self.path().display());
        Ok(InstallOutcome::Installed)
    }

    /// Whether an entry with text `id` exists in the `kind` collection.
    pub fn is_installed(&self, kind: DependencyKind, id: &str) -> bool {
        self.collection(kind).is_some_and(|collection| {
            xml::children_named(collection, kind.item_tag()).any(|item| xml::text(item) == id)
        })
    }

    /// All entries of the `kind` collection, in document order.
    pub fn dependencies(&self, kind: DependencyKind) -> Vec<Dependency> {
        let Some(collection) = self.collection(kind) else {
            return Vec::new();
        };

        xml::children_named(collection, kind.item_tag())
            .map(|item| Dependency {
                id: xml::text(item),
                platform: item.attributes.get("platform").cloned(),
                version: item.attributes.get("version").cloned(),
            })
            .collect()
    }

    fn collection(&self, kind: DependencyKind) -> Option<&Element> {
        xml::children_named(self.root(), kind.collection_tag()).next()
    }
}

/// Position of the first `kind` collection among the root's children.
fn collection_index(root: &Element, kind: DependencyKind) -> Option<usize> {
    root.children.iter().position(
        |node| matches!(node, XMLNode::Element(e) if e.name == kind.collection_tag()),
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::descriptor::store::test_support::{descriptor, with_children, MINIMAL};

    #[test]
    fn kind_tags() {
        assert_eq!(DependencyKind::Module.item_tag(), "module");
        assert_eq!(DependencyKind::Module.collection_tag(), "modules");
        assert_eq!(DependencyKind::Plugin.item_tag(), "plugin");
        assert_eq!(DependencyKind::Plugin.collection_tag(), "plugins");
        assert_eq!(DependencyKind::Plugin.to_string(), "plugin");
    }

    #[test]
    fn label_falls_back_to_id() {
        assert_eq!(InstallOptions::new("ti.map").label(), "ti.map");
        assert_eq!(InstallOptions::new("ti.map").name("Map").label(), "Map");
        assert_eq!(InstallOptions::new("ti.map").name("").label(), "ti.map");
    }

    #[test]
    fn install_creates_collection_on_demand() {
        let (_temp, path) = descriptor(MINIMAL);
        let mut store = DescriptorStore::open(&path).unwrap();

        let opts = InstallOptions::new("ti.map")
            .platform("iphone")
            .version("2.0");
        assert_eq!(
            store.install_module(&opts).unwrap(),
            InstallOutcome::Installed
        );

        let reopened = DescriptorStore::open(&path).unwrap();
        let collections: Vec<_> = xml::children_named(reopened.root(), "modules").collect();
        assert_eq!(collections.len(), 1);
        assert_eq!(
            reopened.dependencies(DependencyKind::Module),
            vec![Dependency {
                id: "ti.map".into(),
                platform: Some("iphone".into()),
                version: Some("2.0".into()),
            }]
        );
    }

    #[test]
    fn optional_attributes_only_when_supplied() {
        let (_temp, path) = descriptor(MINIMAL);
        let mut store = DescriptorStore::open(&path).unwrap();

        store
            .install_plugin(&InstallOptions::new("ti.alloy").platform(""))
            .unwrap();

        let reopened = DescriptorStore::open(&path).unwrap();
        let plugins = xml::children_named(reopened.root(), "plugins")
            .next()
            .unwrap();
        let item = xml::children_named(plugins, "plugin").next().unwrap();
        assert!(item.attributes.is_empty());
        assert_eq!(xml::text(item), "ti.alloy");
    }

    #[test]
    fn install_twice_is_idempotent() {
        let (_temp, path) = descriptor(MINIMAL);
        let mut store = DescriptorStore::open(&path).unwrap();
        let opts = InstallOptions::new("ti.alloy");

        assert_eq!(
            store.install_plugin(&opts).unwrap(),
            InstallOutcome::Installed
        );
        let after_first = fs::read_to_string(&path).unwrap();

        assert_eq!(
            store.install_plugin(&opts).unwrap(),
            InstallOutcome::AlreadyInstalled
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
        assert_eq!(store.dependencies(DependencyKind::Plugin).len(), 1);
    }

    #[test]
    fn existing_entry_matches_on_text_only() {
        let content = with_children(
            r#"<modules>
        <module platform="android" version="1.0">ti.map</module>
    </modules>"#,
        );
        let (_temp, path) = descriptor(&content);
        let mut store = DescriptorStore::open(&path).unwrap();

        let opts = InstallOptions::new("ti.map")
            .platform("iphone")
            .version("9.9");
        assert_eq!(
            store.install_module(&opts).unwrap(),
            InstallOutcome::AlreadyInstalled
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn install_appends_to_existing_collection() {
        let (_temp, path) = descriptor(&with_children(
            r#"<modules>
        <module>ti.cloud</module>
    </modules>"#,
        ));
        let mut store = DescriptorStore::open(&path).unwrap();

        store
            .install_module(&InstallOptions::new("ti.map").platform("android"))
            .unwrap();

        let reopened = DescriptorStore::open(&path).unwrap();
        assert_eq!(xml::children_named(reopened.root(), "modules").count(), 1);
        let ids: Vec<String> = reopened
            .dependencies(DependencyKind::Module)
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec!["ti.cloud", "ti.map"]);
    }

    #[test]
    fn modules_and_plugins_are_separate() {
        let (_temp, path) = descriptor(MINIMAL);
        let mut store = DescriptorStore::open(&path).unwrap();

        store.install_module(&InstallOptions::new("ti.alloy")).unwrap();
        assert_eq!(
            store.install_plugin(&InstallOptions::new("ti.alloy")).unwrap(),
            InstallOutcome::Installed
        );
        assert!(store.is_installed(DependencyKind::Module, "ti.alloy"));
        assert!(store.is_installed(DependencyKind::Plugin, "ti.alloy"));
    }

    #[test]
    fn collection_is_followed_by_newline() {
        let (_temp, path) = descriptor(MINIMAL);
        let mut store = DescriptorStore::open(&path).unwrap();
        store.install_plugin(&InstallOptions::new("ti.alloy")).unwrap();

        let children = &store.root().children;
        let last = children.len() - 1;
        assert!(matches!(&children[last], XMLNode::Text(t) if t == "\n"));
        assert!(matches!(&children[last - 1], XMLNode::Element(e) if e.name == "plugins"));

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("<plugin>ti.alloy</plugin>\n</plugins>"));
    }

    #[test]
    fn empty_id_is_rejected() {
        let (_temp, path) = descriptor(MINIMAL);
        let mut store = DescriptorStore::open(&path).unwrap();

        let err = store
            .install_module(&InstallOptions::new("  ").name("Blank"))
            .unwrap_err();
        assert!(matches!(err, TiappError::InstallFailed { .. }));
        assert!(err.to_string().contains("Blank"));
        assert_eq!(fs::read_to_string(&path).unwrap(), MINIMAL);
    }

    #[test]
    fn padded_id_is_trimmed_and_idempotent() {
        let (_temp, path) = descriptor(MINIMAL);
        let mut store = DescriptorStore::open(&path).unwrap();
        let opts = InstallOptions::new(" ti.map ");

        assert_eq!(
            store.install_module(&opts).unwrap(),
            InstallOutcome::Installed
        );
        assert_eq!(
            store.install_module(&opts).unwrap(),
            InstallOutcome::AlreadyInstalled
        );
        assert_eq!(
            store.install_module(&InstallOptions::new("ti.map")).unwrap(),
            InstallOutcome::AlreadyInstalled
        );

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.matches("<module>ti.map</module>").count(), 1);
    }

    #[test]
    fn failed_write_leaves_install_pending() {
        let (_temp, path) = descriptor(MINIMAL);
        let mut store = DescriptorStore::open(&path).unwrap();
        let opts = InstallOptions::new("ti.map").name("Map");

        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();
        let err = store.install_module(&opts).unwrap_err();
        assert!(matches!(err, TiappError::InstallFailed { .. }));
        assert!(!store.is_installed(DependencyKind::Module, "ti.map"));

        fs::remove_dir(&path).unwrap();
        fs::write(&path, MINIMAL).unwrap();
        assert_eq!(
            store.install_module(&opts).unwrap(),
            InstallOutcome::Installed
        );
        let reopened = DescriptorStore::open(&path).unwrap();
        assert!(reopened.is_installed(DependencyKind::Module, "ti.map"));
    }

    #[test]
    fn android_namespace_survives_install() {
        let content = with_children(
            r#"<android xmlns:android="http://schemas.android.com/apk/res/android">
        <manifest android:versionCode="1">
            <uses-sdk android:minSdkVersion="21"/>
        </manifest>
    </android>"#,
        );
        let (_temp, path) = descriptor(&content);
        let mut store = DescriptorStore::open(&path).unwrap();

        store.install_plugin(&InstallOptions::new("ti.alloy")).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains(r#"<manifest android:versionCode="1">"#));
        assert!(written.contains(r#"android:minSdkVersion="21""#));
        assert!(
            written.contains(r#"<android xmlns:android="http://schemas.android.com/apk/res/android">"#)
        );
        assert!(written.contains("<plugin>ti.alloy</plugin>"));
    }

    #[test]
    fn dependencies_empty_without_collection() {
        let (_temp, path) = descriptor(MINIMAL);
        let store = DescriptorStore::open(&path).unwrap();
        assert!(store.dependencies(DependencyKind::Module).is_empty());
        assert!(!store.is_installed(DependencyKind::Plugin, "ti.alloy"));
    }
}
