use svg::Document;
use svg::Node;
use svg::node::{Blob, Text};
use svg::node::element::Element;

use crate::entities::{Sheet, XmlNode};
use crate::io::ext_repr::{ExtIconLayout, ExtSheetLayout};
use crate::packer::SheetBuild;

/// Builds the SVG document of a sheet: the merged content in a root sized to the sheet's extents.
pub fn sheet_to_svg(sheet: &Sheet) -> Document {
    let mut document = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("width", sheet.width)
        .set("height", sheet.height);

    for node in &sheet.content {
        document = document.add(xml_to_svg(&XmlNode::from(node)));
    }
    document
}

fn xml_to_svg(node: &XmlNode) -> Box<dyn Node> {
    match node {
        XmlNode::Text(text) => Box::new(Text::new(text.clone())),
        XmlNode::CData(content) => Box::new(Blob::new(format!("<![CDATA[{content}]]>"))),
        XmlNode::Element(element) => {
            let mut svg_element = Element::new(element.name.clone());
            for (name, value) in &element.attributes {
                svg_element.assign(name.clone(), value.clone());
            }
            for child in &element.children {
                svg_element.append(xml_to_svg(child));
            }
            Box::new(svg_element)
        }
    }
}

/// Converts the layout of a packing run into its external representation.
///
/// * `name` - Name of the sheet, typically the file stem of the written SVG
pub fn export_layout(name: &str, build: &SheetBuild) -> ExtSheetLayout {
    ExtSheetLayout {
        sheet: name.to_string(),
        width: build.sheet.width,
        height: build.sheet.height,
        icons: build
            .layout
            .iter()
            .map(|entry| ExtIconLayout {
                name: entry.identifier.clone(),
                left: entry.offset.dx,
                top: entry.offset.dy,
                width: entry.width(),
                height: entry.height(),
            })
            .collect(),
    }
}
