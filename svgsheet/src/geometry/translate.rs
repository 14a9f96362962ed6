use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::entities::{IconNode, PathData, XmlElement};
use crate::geometry::Offset;
use crate::geometry::geo_traits::Translatable;
use crate::util::number::parse_leading_number;

/// Builds a translated copy of `node`, with every absolute coordinate shifted by `offset`.
///
/// Groups are translated recursively. Elements without a translation rule (and paths whose data could not be
/// parsed) are copied through unmodified, and reported in `diagnostics` on behalf of `source`.
pub fn translate_node(
    node: &IconNode,
    offset: Offset,
    source: &str,
    diagnostics: &mut Diagnostics,
) -> IconNode {
    match node {
        IconNode::Group {
            attributes,
            children,
        } => IconNode::Group {
            attributes: attributes.clone(),
            children: translate_nodes(children, offset, source, diagnostics),
        },
        IconNode::Path { element, data } => {
            let data = match data {
                PathData::Parsed(commands) => PathData::Parsed(
                    commands
                        .iter()
                        .map(|cmd| cmd.translate_clone(offset))
                        .collect(),
                ),
                PathData::Unparsed { reason, .. } => {
                    diagnostics.report(Diagnostic::MalformedPath {
                        source: source.to_string(),
                        reason: reason.clone(),
                    });
                    data.clone()
                }
            };
            IconNode::Path {
                element: element.clone(),
                data,
            }
        }
        IconNode::Circle(element) => {
            let mut element = element.clone();
            shift_attribute(&mut element, "cx", offset.dx, source, diagnostics);
            shift_attribute(&mut element, "cy", offset.dy, source, diagnostics);
            IconNode::Circle(element)
        }
        IconNode::Rect(element) => {
            let mut element = element.clone();
            shift_attribute(&mut element, "x", offset.dx, source, diagnostics);
            shift_attribute(&mut element, "y", offset.dy, source, diagnostics);
            IconNode::Rect(element)
        }
        IconNode::Other(element) => {
            diagnostics.report(Diagnostic::UnsupportedElement {
                source: source.to_string(),
                kind: element.name.clone(),
            });
            node.clone()
        }
        IconNode::Text(_) | IconNode::CData(_) => node.clone(),
    }
}

/// Translates a sequence of sibling nodes, preserving their order.
pub fn translate_nodes(
    nodes: &[IconNode],
    offset: Offset,
    source: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<IconNode> {
    nodes
        .iter()
        .map(|node| translate_node(node, offset, source, diagnostics))
        .collect()
}

/// Adds `delta` to a numeric attribute. An absent attribute counts as 0, its SVG default.
fn shift_attribute(
    element: &mut XmlElement,
    name: &str,
    delta: f32,
    source: &str,
    diagnostics: &mut Diagnostics,
) {
    let value = match element.attribute(name) {
        None => 0.0,
        Some(raw) => match parse_leading_number(raw) {
            Some(value) => value,
            None => {
                diagnostics.report(Diagnostic::MalformedCoordinate {
                    source: source.to_string(),
                    attribute: name.to_string(),
                    value: raw.to_string(),
                });
                return;
            }
        },
    };
    element
        .attributes
        .insert(name.to_string(), (value + delta).to_string());
}
