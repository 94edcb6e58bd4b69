//! Library integration tests.

use std::cmp::Ordering;
use std::fs;

use tempfile::TempDir;
use tiapp::descriptor::{DependencyKind, DescriptorStore, InstallOptions, StackSizeOutcome};
use tiapp::{version, TiappError};

const TIAPP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ti:app xmlns:ti="http://ti.appcelerator.org">
    <!-- generated by the project template -->
    <id>com.example.app</id>
    <sdk-version>5.0.0.GA</sdk-version>
    <property name="ti.android.runtime" type="string">rhino</property>
    <modules>
        <module platform="iphone">ti.map</module>
    </modules>
    <android xmlns:android="http://schemas.android.com/apk/res/android">
        <manifest android:installLocation="auto">
            <uses-sdk android:minSdkVersion="21"/>
        </manifest>
    </android>
</ti:app>
"#;

fn project() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tiapp.xml");
    fs::write(&path, TIAPP).unwrap();
    (temp, path)
}

#[test]
fn error_types_are_public() {
    let err = TiappError::VersionTooLow {
        required: "5.0.0".into(),
        found: "4.0.0".into(),
    };
    assert!(err.to_string().contains("5.0.0"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> tiapp::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn version_defaulting() {
    assert_eq!(version::compare("1.2", "1.2.0"), Ordering::Equal);
    assert_eq!(version::compare("2", "1.9.9"), Ordering::Greater);
    assert_eq!(version::compare("1.0.0", "1.0.1"), Ordering::Less);
}

#[test]
fn mutations_survive_reopen_and_keep_unrelated_content() {
    let (_temp, path) = project();

    let mut store = DescriptorStore::open(&path).unwrap();
    store
        .install_plugin(&InstallOptions::new("ti.alloy").name("Alloy"))
        .unwrap();
    store
        .install_module(&InstallOptions::new("ti.cloud").version("3.2.0"))
        .unwrap();
    assert_eq!(
        store.ensure_minimum_stack_size().unwrap(),
        StackSizeOutcome::Added
    );

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<ti:app"));
    assert!(written.contains("<!-- generated by the project template -->"));
    assert!(written.contains("<id>com.example.app</id>"));
    assert!(written.contains(r#"<manifest android:installLocation="auto">"#));
    assert!(written.contains(r#"android:minSdkVersion="21""#));

    let reopened = DescriptorStore::open(&path).unwrap();
    assert_eq!(reopened.sdk_version().as_deref(), Some("5.0.0.GA"));
    assert!(reopened.is_installed(DependencyKind::Plugin, "ti.alloy"));
    assert!(reopened.is_installed(DependencyKind::Module, "ti.map"));
    assert!(reopened.is_installed(DependencyKind::Module, "ti.cloud"));
    assert_eq!(
        reopened
            .property_text("ti.android.threadstacksize")
            .as_deref(),
        Some("32768")
    );
}

#[test]
fn independent_stores_do_not_share_state() {
    let (_temp_a, path_a) = project();
    let (_temp_b, path_b) = project();

    let mut a = DescriptorStore::open(&path_a).unwrap();
    let b = DescriptorStore::open(&path_b).unwrap();

    a.install_plugin(&InstallOptions::new("ti.alloy")).unwrap();
    assert!(a.is_installed(DependencyKind::Plugin, "ti.alloy"));
    assert!(!b.is_installed(DependencyKind::Plugin, "ti.alloy"));
    assert_eq!(fs::read_to_string(&path_b).unwrap(), TIAPP);
}

#[test]
fn validation_gate() {
    let (_temp, path) = project();
    let store = DescriptorStore::open(&path).unwrap();

    assert!(store.validate_sdk_version("5.0.0").is_ok());
    assert!(store.validate_sdk_version("4.0").is_ok());
    let err = store.validate_sdk_version("5.0.1").unwrap_err();
    assert!(err.is_version_too_low());
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use tiapp::cli::{Cli, Commands};

    let cli = Cli::parse_from(["tiapp", "info", "--json"]);
    if let Commands::Info(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Info command");
    }
}
