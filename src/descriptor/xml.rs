//! Thin helpers over the `xmltree` element tree.
//!
//! Documents are read with the `xml` event reader rather than
//! `Element::parse`, which keys attributes by local name and would drop the
//! `android:` prefix from attributes such as `android:versionCode`. Here
//! attribute keys keep their `prefix:` so a rewrite emits them unchanged.

use std::io::Read;

use anyhow::{anyhow, bail};
use ::xml::name::OwnedName;
use ::xml::reader::{EventReader, XmlEvent};
use xmltree::{Element, EmitterConfig, ParserConfig, XMLNode};

const DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Parse a document, keeping whitespace text and comments so a rewrite
/// leaves untouched regions of the file as they were.
///
/// Content outside the root element is dropped.
pub(crate) fn parse<R: Read>(reader: R) -> anyhow::Result<Element> {
    let config = ParserConfig::new()
        .trim_whitespace(false)
        .whitespace_to_characters(true)
        .ignore_comments(false)
        .cdata_to_characters(false);

    let mut events = EventReader::new_with_config(reader, config);
    let mut open: Vec<Element> = Vec::new();
    let mut root = None;

    loop {
        let event = events.next().map_err(|e| anyhow!("{}", e))?;
        match event {
            XmlEvent::StartElement {
                name,
                attributes,
                namespace,
            } => {
                let mut element = Element::new(&name.local_name);
                element.prefix = name.prefix;
                element.namespace = name.namespace;
                if !namespace.is_essentially_empty() {
                    element.namespaces = Some(namespace);
                }
                for attr in attributes {
                    element
                        .attributes
                        .insert(qualified_name(&attr.name), attr.value);
                }
                open.push(element);
            }
            XmlEvent::EndElement { .. } => {
                let element = open
                    .pop()
                    .ok_or_else(|| anyhow!("unbalanced end tag"))?;
                match open.last_mut() {
                    Some(parent) => parent.children.push(XMLNode::Element(element)),
                    None if root.is_none() => root = Some(element),
                    None => bail!("document has more than one root element"),
                }
            }
            XmlEvent::Characters(text) | XmlEvent::Whitespace(text) => {
                push_child(&mut open, XMLNode::Text(text))
            }
            XmlEvent::CData(text) => push_child(&mut open, XMLNode::CData(text)),
            XmlEvent::Comment(text) => push_child(&mut open, XMLNode::Comment(text)),
            XmlEvent::ProcessingInstruction { name, data } => {
                push_child(&mut open, XMLNode::ProcessingInstruction(name, data))
            }
            XmlEvent::EndDocument => break,
            _ => {}
        }
    }

    root.ok_or_else(|| anyhow!("document has no root element"))
}

/// `prefix:local` for prefixed names, `local` otherwise.
fn qualified_name(name: &OwnedName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{}:{}", prefix, name.local_name),
        None => name.local_name.clone(),
    }
}

fn push_child(open: &mut [Element], node: XMLNode) {
    if let Some(parent) = open.last_mut() {
        parent.children.push(node);
    }
}

/// Serialize a document to a UTF-8 string: the XML declaration on its own
/// line, the root element, and a trailing newline.
pub(crate) fn serialize(root: &Element) -> anyhow::Result<String> {
    let config = EmitterConfig::new()
        .perform_indent(false)
        .write_document_declaration(false)
        .autopad_comments(false);

    let mut buf = DECLARATION.as_bytes().to_vec();
    root.write_with_config(&mut buf, config)
        .map_err(|e| anyhow!("{}", e))?;
    buf.push(b'\n');
    Ok(String::from_utf8(buf)?)
}

/// Child elements of `parent` named `name`, in document order.
pub(crate) fn children_named<'a>(
    parent: &'a Element,
    name: &'a str,
) -> impl Iterator<Item = &'a Element> + 'a {
    parent
        .children
        .iter()
        .filter_map(move |node| match node {
            XMLNode::Element(e) if e.name == name => Some(e),
            _ => None,
        })
}

/// Concatenated text and CDATA content of `element`, trimmed.
pub(crate) fn text(element: &Element) -> String {
    let mut out = String::new();
    for child in &element.children {
        match child {
            XMLNode::Text(t) | XMLNode::CData(t) => out.push_str(t),
            _ => {}
        }
    }
    out.trim().to_string()
}

/// Replace the content of `element` with a single text node.
pub(crate) fn set_text(element: &mut Element, value: &str) {
    element.children = vec![XMLNode::Text(value.to_string())];
}

/// Build `<name attr="…">text</name>`.
pub(crate) fn text_element(name: &str, attributes: &[(&str, &str)], value: &str) -> Element {
    let mut element = Element::new(name);
    for (key, val) in attributes {
        element
            .attributes
            .insert((*key).to_string(), (*val).to_string());
    }
    element.children.push(XMLNode::Text(value.to_string()));
    element
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ti:app xmlns:ti="http://ti.appcelerator.org">
    <!-- build settings -->
    <property name="a" type="string">  one </property>
    <property name="b" type="bool">true</property>
    <sdk-version>3.1.0.GA</sdk-version>
</ti:app>"#;

    #[test]
    fn parse_keeps_comments_and_whitespace() {
        let root = parse(DOC.as_bytes()).unwrap();
        assert!(root
            .children
            .iter()
            .any(|c| matches!(c, XMLNode::Comment(_))));
        assert!(root.children.iter().any(|c| matches!(c, XMLNode::Text(_))));
    }

    #[test]
    fn children_named_filters_by_name() {
        let root = parse(DOC.as_bytes()).unwrap();
        assert_eq!(children_named(&root, "property").count(), 2);
        assert_eq!(children_named(&root, "sdk-version").count(), 1);
        assert_eq!(children_named(&root, "modules").count(), 0);
    }

    #[test]
    fn text_is_trimmed() {
        let root = parse(DOC.as_bytes()).unwrap();
        let first = children_named(&root, "property").next().unwrap();
        assert_eq!(text(first), "one");
    }

    #[test]
    fn set_text_replaces_content() {
        let mut element = text_element("property", &[("name", "x")], "1");
        set_text(&mut element, "2");
        assert_eq!(text(&element), "2");
        assert_eq!(element.children.len(), 1);
    }

    #[test]
    fn parse_rejects_malformed_xml() {
        assert!(parse("<ti:app><property>".as_bytes()).is_err());
        assert!(parse("".as_bytes()).is_err());
    }

    #[test]
    fn serialize_round_trips() {
        let root = parse(DOC.as_bytes()).unwrap();
        let out = serialize(&root).unwrap();
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<ti:app"));
        assert!(out.ends_with("</ti:app>\n"));
        assert!(out.contains("<!-- build settings -->"));

        let reparsed = parse(out.as_bytes()).unwrap();
        let sdk = children_named(&reparsed, "sdk-version").next().unwrap();
        assert_eq!(text(sdk), "3.1.0.GA");
    }

    #[test]
    fn prefixed_attributes_survive_a_rewrite() {
        let doc = r#"<ti:app xmlns:ti="http://ti.appcelerator.org">
    <android xmlns:android="http://schemas.android.com/apk/res/android">
        <manifest android:versionCode="1" package="com.example.app">
            <uses-sdk android:minSdkVersion="21"/>
        </manifest>
    </android>
</ti:app>"#;
        let root = parse(doc.as_bytes()).unwrap();
        let android = children_named(&root, "android").next().unwrap();
        let manifest = children_named(android, "manifest").next().unwrap();
        let keys: Vec<&str> = manifest.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["android:versionCode", "package"]);

        let out = serialize(&root).unwrap();
        assert!(out.contains(r#"xmlns:android="http://schemas.android.com/apk/res/android""#));
        assert!(out.contains(r#"<manifest android:versionCode="1" package="com.example.app">"#));
        assert!(out.contains(r#"android:minSdkVersion="21""#));
        assert_eq!(out.matches("xmlns:android=").count(), 1);

        let reparsed = parse(out.as_bytes()).unwrap();
        assert_eq!(reparsed, root);
    }

    #[test]
    fn parse_rejects_unbalanced_documents() {
        assert!(parse("<a></b>".as_bytes()).is_err());
    }

    #[test]
    fn text_element_sets_attributes_in_order() {
        let element = text_element(
            "module",
            &[("platform", "iphone"), ("version", "2.0")],
            "ti.map",
        );
        let keys: Vec<&str> = element.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["platform", "version"]);
        assert_eq!(
            element.attributes.get("version").map(String::as_str),
            Some("2.0")
        );
        assert_eq!(text(&element), "ti.map");
    }
}
