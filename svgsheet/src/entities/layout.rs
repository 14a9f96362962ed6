use crate::entities::IconSize;
use crate::geometry::Offset;

/// Where an icon ended up in the sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutEntry {
    /// Unique identifier of the icon within its sheet
    pub identifier: String,
    /// Negated placement of the icon: the amount a viewport anchored at the sheet's origin
    /// has to be shifted by to reveal the icon (e.g. a CSS `background-position`)
    pub offset: Offset,
    pub size: IconSize,
}

impl LayoutEntry {
    /// The translation that was applied to the icon's content
    pub fn placement(&self) -> Offset {
        -self.offset
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }
}
