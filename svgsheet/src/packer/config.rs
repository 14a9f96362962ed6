use serde::{Deserialize, Serialize};

use crate::entities::IconSize;

/// Configuration of the row packer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PackConfig {
    /// Gap between icons, and between icons and the edges of the sheet
    pub icon_padding: f32,
    /// Width used for icons which declare neither a width nor a viewBox
    pub icon_default_width: f32,
    /// Height used for icons which declare neither a height nor a viewBox
    pub icon_default_height: f32,
    /// Row-wrap threshold: a new row is started once the cursor passes this width
    pub sheet_max_width: f32,
}

impl PackConfig {
    pub fn default_icon_size(&self) -> IconSize {
        IconSize::new(self.icon_default_width, self.icon_default_height)
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            icon_padding: 10.0,
            icon_default_width: 100.0,
            icon_default_height: 100.0,
            sheet_max_width: 500.0,
        }
    }
}
