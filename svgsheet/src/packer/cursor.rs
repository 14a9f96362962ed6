use crate::entities::IconSize;
use crate::geometry::Offset;
use crate::packer::PackConfig;

/// State of the row packer between two icons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackingCursor {
    /// Where the next icon will be placed
    pub x: f32,
    pub y: f32,
    /// Height of the tallest icon in the current row
    pub row_height: f32,
    /// Extents of the sheet so far
    pub sheet_width: f32,
    pub sheet_height: f32,
}

impl PackingCursor {
    /// Cursor of an empty sheet, the first icon goes in the padded top left corner.
    pub fn new(config: &PackConfig) -> Self {
        PackingCursor {
            x: config.icon_padding,
            y: config.icon_padding,
            row_height: 0.0,
            sheet_width: 0.0,
            sheet_height: 0.0,
        }
    }

    /// Places an icon of `size` at the current position.
    /// Returns the cursor for the next icon and the placement of this one.
    ///
    /// The row-wrap test compares the position of the icon being placed, not the advanced cursor:
    /// an icon which starts before `sheet_max_width` stays on its row, even if it extends beyond it.
    pub fn step(&self, size: IconSize, config: &PackConfig) -> (PackingCursor, Offset) {
        let padding = config.icon_padding;
        let placement = Offset::new(self.x, self.y);
        let row_height = f32::max(self.row_height, size.height);

        let (x, y, row_height) = match self.x + size.width < config.sheet_max_width {
            true => (self.x + size.width + padding, self.y, row_height),
            false => (padding, self.y + row_height + padding, 0.0),
        };

        // extents follow the advanced cursor, and never cut off the icon that was just placed
        let sheet_width = [
            self.sheet_width,
            x + size.width + padding,
            placement.dx + size.width + padding,
        ]
        .into_iter()
        .fold(f32::MIN, f32::max);
        let sheet_height = [
            self.sheet_height,
            y + size.height + padding,
            placement.dy + size.height + padding,
        ]
        .into_iter()
        .fold(f32::MIN, f32::max);

        let next = PackingCursor {
            x,
            y,
            row_height,
            sheet_width,
            sheet_height,
        };
        (next, placement)
    }
}
