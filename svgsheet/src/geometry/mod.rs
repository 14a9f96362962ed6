mod offset;
mod path;
mod translate;

pub mod geo_traits;

#[doc(inline)]
pub use offset::Offset;
#[doc(inline)]
pub use path::{ArcParameters, CommandKind, PathCommand, parse_path_data, serialize_path_data};
#[doc(inline)]
pub use translate::{translate_node, translate_nodes};
