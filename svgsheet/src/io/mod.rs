/// External (serializable) representations of packing results
pub mod ext_repr;

/// All logic for turning SVG text into [`IconDocument`](crate::entities::IconDocument)s
pub mod import;

/// All logic for exporting sheets and layouts
pub mod export;
