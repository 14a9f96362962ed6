use std::fmt::Display;
use std::ops::Neg;

use serde::{Deserialize, Serialize};

/// A translation along the x and y-axis, in user units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Self::Output {
        // no negative zero, it would leak into the written layout as "-0"
        Offset::new(0.0 - self.dx, 0.0 - self.dy)
    }
}

impl Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.dx, self.dy)
    }
}
