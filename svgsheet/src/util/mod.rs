/// Debug checks on packing results
pub mod assertions;

/// Parsing of numeric attribute values
pub mod number;
