use std::collections::BTreeMap;

/// Attributes of an element, ordered by name so that serialization is deterministic
pub type Attributes = BTreeMap<String, String>;

/// A generic element of a parsed SVG document, kept verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<XmlNode>,
}

/// A child of an [`XmlElement`]
#[derive(Clone, Debug, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    /// Character data, with entities already decoded
    Text(String),
    /// Content of a CDATA section
    CData(String),
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            children: vec![],
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl From<XmlElement> for XmlNode {
    fn from(element: XmlElement) -> Self {
        XmlNode::Element(element)
    }
}
