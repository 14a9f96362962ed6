use serde::{Deserialize, Serialize};

/// External representation of a packed sheet's layout.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSheetLayout {
    /// Name of the sheet
    pub sheet: String,
    pub width: f32,
    pub height: f32,
    /// One entry per icon, in packing order
    pub icons: Vec<ExtIconLayout>,
}

/// External representation of a [`LayoutEntry`](crate::entities::LayoutEntry).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtIconLayout {
    /// Identifier of the icon
    pub name: String,
    /// Horizontal offset to apply to the sheet to reveal the icon (negated placement)
    pub left: f32,
    /// Vertical offset to apply to the sheet to reveal the icon (negated placement)
    pub top: f32,
    pub width: f32,
    pub height: f32,
}
