use std::collections::HashSet;

use crate::entities::{LayoutEntry, Sheet};

/// Checks that every placed icon, including the padding that follows it, lies within the sheet's extents
pub fn sheet_contains_layout(sheet: &Sheet, layout: &[LayoutEntry], padding: f32) -> bool {
    layout.iter().all(|entry| {
        let placement = entry.placement();
        placement.dx + entry.width() + padding <= sheet.width
            && placement.dy + entry.height() + padding <= sheet.height
    })
}

/// Checks that no two layout entries share an identifier
pub fn identifiers_are_unique(layout: &[LayoutEntry]) -> bool {
    let mut seen = HashSet::new();
    layout.iter().all(|entry| seen.insert(entry.identifier.as_str()))
}
