mod element;
mod icon;
mod layout;
mod sheet;

#[doc(inline)]
pub use element::{Attributes, XmlElement, XmlNode};
#[doc(inline)]
pub use icon::{DeclaredSize, IconDocument, IconNode, IconSize, PathData, ROOT_STYLE_ATTRIBUTES, ViewBox};
#[doc(inline)]
pub use layout::LayoutEntry;
#[doc(inline)]
pub use sheet::Sheet;
