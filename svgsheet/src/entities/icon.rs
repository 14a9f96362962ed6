use crate::entities::{Attributes, XmlElement, XmlNode};
use crate::geometry::{PathCommand, parse_path_data, serialize_path_data};
use crate::util::number::{parse_leading_number, parse_number_list};

/// Presentational attributes of an icon's root `<svg>` element which are carried over into the sheet.
/// Only the children of an icon are merged, so these are moved onto a wrapping group.
pub const ROOT_STYLE_ATTRIBUTES: [&str; 6] = [
    "opacity",
    "fill",
    "fill-opacity",
    "stroke",
    "stroke-width",
    "stroke-opacity",
];

/// A single input icon: its content plus everything the packer needs to know about it.
#[derive(Clone, Debug, PartialEq)]
pub struct IconDocument {
    /// Where the icon was read from, used to name the icon in diagnostics
    pub source: String,
    /// Key under which the icon can be addressed in the sheet's layout
    pub identifier: String,
    /// The subset of [`ROOT_STYLE_ATTRIBUTES`] present on the root element
    pub root_attributes: Attributes,
    /// Size information declared on the root element
    pub declared_size: DeclaredSize,
    /// The content of the root element, in document order
    pub children: Vec<IconNode>,
}

impl IconDocument {
    /// Builds an icon from the root `<svg>` element of a parsed document.
    pub fn from_root(source: impl Into<String>, identifier: impl Into<String>, root: XmlElement) -> Self {
        let root_attributes = ROOT_STYLE_ATTRIBUTES
            .iter()
            .filter_map(|&name| root.attribute(name).map(|v| (name.to_string(), v.to_string())))
            .collect();
        let declared_size = DeclaredSize::from_root(&root);

        IconDocument {
            source: source.into(),
            identifier: identifier.into(),
            root_attributes,
            declared_size,
            children: root.children.into_iter().map(IconNode::from).collect(),
        }
    }

    /// Wraps `nodes` (the icon's content) in a group carrying the root style attributes, if there are any.
    pub fn wrap_content(&self, nodes: Vec<IconNode>) -> Vec<IconNode> {
        match self.root_attributes.is_empty() {
            true => nodes,
            false => vec![IconNode::Group {
                attributes: self.root_attributes.clone(),
                children: nodes,
            }],
        }
    }
}

/// Size of an icon in user units
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct IconSize {
    pub width: f32,
    pub height: f32,
}

impl IconSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The `viewBox` attribute of a root element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

/// Size information found on the root element of an icon.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DeclaredSize {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub view_box: Option<ViewBox>,
}

impl DeclaredSize {
    pub fn from_root(root: &XmlElement) -> Self {
        let view_box = root
            .attribute("viewBox")
            .map(parse_number_list)
            .and_then(|numbers| match numbers.as_slice() {
                &[min_x, min_y, width, height] => Some(ViewBox {
                    min_x,
                    min_y,
                    width,
                    height,
                }),
                _ => None,
            });

        DeclaredSize {
            width: root.attribute("width").and_then(parse_leading_number),
            height: root.attribute("height").and_then(parse_leading_number),
            view_box,
        }
    }

    /// Resolves every axis separately: an explicit attribute first, then the viewBox, then `default`.
    /// The returned flag is set when at least one axis had to fall back to `default`.
    pub fn resolve(&self, default: IconSize) -> (IconSize, bool) {
        let width = self.width.or(self.view_box.map(|vb| vb.width));
        let height = self.height.or(self.view_box.map(|vb| vb.height));

        let size = IconSize {
            width: width.unwrap_or(default.width),
            height: height.unwrap_or(default.height),
        };
        (size, width.is_none() || height.is_none())
    }
}

/// A node of an icon's content, classified by how its geometry is translated.
#[derive(Clone, Debug, PartialEq)]
pub enum IconNode {
    /// `<g>`: no geometry of its own, its children are translated
    Group {
        attributes: Attributes,
        children: Vec<IconNode>,
    },
    /// `<path>`: the drawing commands of the `d` attribute are translated.
    /// `element` holds every other attribute and child.
    Path { element: XmlElement, data: PathData },
    /// `<circle>`: `cx` and `cy` are translated
    Circle(XmlElement),
    /// `<rect>`: `x` and `y` are translated
    Rect(XmlElement),
    /// Any element kind without a translation rule, kept verbatim
    Other(XmlElement),
    /// Character data between elements
    Text(String),
    /// A CDATA section between elements
    CData(String),
}

/// The `d` attribute of a path
#[derive(Clone, Debug, PartialEq)]
pub enum PathData {
    Parsed(Vec<PathCommand>),
    /// Path data which could not be parsed, kept verbatim
    Unparsed { raw: String, reason: String },
}

impl From<XmlNode> for IconNode {
    fn from(node: XmlNode) -> Self {
        let element = match node {
            XmlNode::Text(text) => return IconNode::Text(text),
            XmlNode::CData(content) => return IconNode::CData(content),
            XmlNode::Element(element) => element,
        };
        match element.name.as_str() {
            "g" => IconNode::Group {
                attributes: element.attributes,
                children: element.children.into_iter().map(IconNode::from).collect(),
            },
            "path" => {
                let mut element = element;
                let raw = element.attributes.remove("d").unwrap_or_default();
                let data = match parse_path_data(&raw) {
                    Ok(commands) => PathData::Parsed(commands),
                    Err(e) => PathData::Unparsed {
                        raw,
                        reason: e.to_string(),
                    },
                };
                IconNode::Path { element, data }
            }
            "circle" => IconNode::Circle(element),
            "rect" => IconNode::Rect(element),
            _ => IconNode::Other(element),
        }
    }
}

impl From<&IconNode> for XmlNode {
    fn from(node: &IconNode) -> Self {
        match node {
            IconNode::Group {
                attributes,
                children,
            } => XmlNode::Element(XmlElement {
                name: "g".to_string(),
                attributes: attributes.clone(),
                children: children.iter().map(XmlNode::from).collect(),
            }),
            IconNode::Path { element, data } => {
                let d = match data {
                    PathData::Parsed(commands) => serialize_path_data(commands),
                    PathData::Unparsed { raw, .. } => raw.clone(),
                };
                XmlNode::Element(element.clone().with_attribute("d", d))
            }
            IconNode::Circle(element) | IconNode::Rect(element) | IconNode::Other(element) => {
                XmlNode::Element(element.clone())
            }
            IconNode::Text(text) => XmlNode::Text(text.clone()),
            IconNode::CData(content) => XmlNode::CData(content.clone()),
        }
    }
}
