use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow, bail, ensure};
use log::debug;
use regex::Regex;
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

use crate::entities::{Attributes, IconDocument, XmlElement, XmlNode};

static NON_WORD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_]+").unwrap());

/// Parses the SVG text of an icon.
///
/// * `source` - Where the text was read from, used in diagnostics
/// * `identifier` - Key of the icon in the sheet's layout, see [`identifier_from_path`]
pub fn import_icon(source: &str, identifier: &str, content: &str) -> Result<IconDocument> {
    let root = parse_document(content).with_context(|| format!("could not parse {source}"))?;
    ensure!(
        root.name == "svg",
        "{source}: root element is <{}>, expected <svg>",
        root.name
    );
    let icon = IconDocument::from_root(source, identifier, root);
    debug!(
        "[IMPORT] {} as \"{}\": {} top-level nodes",
        source,
        icon.identifier,
        icon.children.len()
    );
    Ok(icon)
}

/// Builds the element tree of an XML document.
///
/// Attribute values and character data are stored with their entity and character references decoded,
/// CDATA sections are kept apart so they can be written back as such.
/// Whitespace-only character data is dropped, comments, declarations and instructions are ignored.
pub fn parse_document(content: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(content);
    let mut open: Vec<XmlElement> = vec![];
    let mut root = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => open.push(read_element(&reader, &start)?),
            Ok(Event::Empty(start)) => {
                let element = read_element(&reader, &start)?;
                close_element(element, &mut open, &mut root)?;
            }
            Ok(Event::End(end)) => {
                let name = reader.decoder().decode(end.name().as_ref())?.into_owned();
                let element = open
                    .pop()
                    .ok_or_else(|| anyhow!("unexpected closing tag </{name}>"))?;
                ensure!(
                    element.name == name,
                    "closing tag </{name}> does not match <{}>",
                    element.name
                );
                close_element(element, &mut open, &mut root)?;
            }
            Ok(Event::Text(text)) => {
                if let Some(parent) = open.last_mut() {
                    push_text(parent, &reader.decoder().decode(&text)?);
                }
            }
            Ok(Event::GeneralRef(reference)) => {
                if let Some(parent) = open.last_mut() {
                    let resolved = match reference.resolve_char_ref()? {
                        Some(ch) => ch.to_string(),
                        None => {
                            let name = reference.decode()?;
                            resolve_predefined_entity(&name)
                                .ok_or_else(|| anyhow!("unknown entity &{name};"))?
                                .to_string()
                        }
                    };
                    push_text(parent, &resolved);
                }
            }
            Ok(Event::CData(cdata)) => {
                if let Some(parent) = open.last_mut() {
                    let content = reader.decoder().decode(&cdata)?.into_owned();
                    parent.children.push(XmlNode::CData(content));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => bail!("XML error at position {}: {e}", reader.error_position()),
        }
    }

    if let Some(unclosed) = open.last() {
        bail!("element <{}> is never closed", unclosed.name);
    }
    root.context("document contains no elements")
}

fn read_element(reader: &Reader<&[u8]>, start: &BytesStart) -> Result<XmlElement> {
    let decoder = reader.decoder();
    let attributes = start
        .attributes()
        .map(|attr| -> Result<(String, String)> {
            let attr = attr?;
            let key = decoder.decode(attr.key.as_ref())?.into_owned();
            let value = attr.decode_and_unescape_value(decoder)?.into_owned();
            Ok((key, value))
        })
        .collect::<Result<Attributes>>()?;

    Ok(XmlElement {
        name: decoder.decode(start.name().as_ref())?.into_owned(),
        attributes,
        children: vec![],
    })
}

/// Appends character data to `parent`, merging it with directly preceding character data.
fn push_text(parent: &mut XmlElement, text: &str) {
    match parent.children.last_mut() {
        Some(XmlNode::Text(previous)) => previous.push_str(text),
        _ => parent.children.push(XmlNode::Text(text.to_string())),
    }
}

/// Attaches a completed element to its parent, or makes it the root.
fn close_element(
    mut element: XmlElement,
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<()> {
    element
        .children
        .retain(|child| !matches!(child, XmlNode::Text(text) if text.trim().is_empty()));

    match open.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(element)),
        None => {
            ensure!(
                root.is_none(),
                "document has more than one root element, found a second <{}>",
                element.name
            );
            *root = Some(element);
        }
    }
    Ok(())
}

/// Identifier of an icon read from `path`: its file stem, see [`sanitize_identifier`].
pub fn identifier_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    sanitize_identifier(&stem)
}

/// Lower-cases `name` and collapses every run of characters other than ASCII letters, digits and `_` into a single `-`.
pub fn sanitize_identifier(name: &str) -> String {
    NON_WORD_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn identifiers_are_sanitized() {
        assert_eq!(sanitize_identifier("Arrow Left"), "arrow-left");
        assert_eq!(sanitize_identifier("a  &  b__c"), "a-b__c");
        assert_eq!(identifier_from_path(&PathBuf::from("icons/User Add.svg")), "user-add");
    }

    #[test]
    fn nested_elements_are_attached_to_their_parent() {
        let root = parse_document(r#"<svg><g id="a"><rect x="1"/></g><circle/></svg>"#).unwrap();
        assert_eq!(root.children.len(), 2);
        let XmlNode::Element(group) = &root.children[0] else {
            panic!("expected an element");
        };
        assert_eq!(group.attribute("id"), Some("a"));
        assert_eq!(group.children.len(), 1);
    }

    #[test]
    fn mismatched_tags_are_rejected() {
        assert!(parse_document("<svg><g></svg>").is_err());
    }

    #[test]
    fn references_are_decoded_once() {
        let root = parse_document(r#"<svg><g id="a&amp;b" font-family="&quot;X&quot;">A &amp; B &#65;&#x42;</g></svg>"#)
            .unwrap();
        let XmlNode::Element(group) = &root.children[0] else {
            panic!("expected an element");
        };
        assert_eq!(group.attribute("id"), Some("a&b"));
        assert_eq!(group.attribute("font-family"), Some("\"X\""));
        assert_eq!(group.children, vec![XmlNode::Text("A & B AB".to_string())]);
    }

    #[test]
    fn text_is_kept_verbatim() {
        let root = parse_document("<svg>\n  <text> a </text>\n</svg>").unwrap();
        assert_eq!(root.children.len(), 1);
        let XmlNode::Element(text) = &root.children[0] else {
            panic!("expected an element");
        };
        assert_eq!(text.children, vec![XmlNode::Text(" a ".to_string())]);
    }

    #[test]
    fn cdata_is_kept() {
        let root = parse_document("<svg><style><![CDATA[ .a > b { fill: red } ]]></style></svg>").unwrap();
        let XmlNode::Element(style) = &root.children[0] else {
            panic!("expected an element");
        };
        assert_eq!(
            style.children,
            vec![XmlNode::CData(" .a > b { fill: red } ".to_string())]
        );
    }
}
