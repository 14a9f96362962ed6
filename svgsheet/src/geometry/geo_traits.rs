use crate::geometry::Offset;

/// Trait for types whose absolute coordinates can be shifted by an [`Offset`].
pub trait Translatable: Clone {
    /// Shifts `self` in place.
    fn translate(&mut self, offset: Offset) -> &mut Self;

    /// Shifts a clone, leaving `self` untouched.
    fn translate_clone(&self, offset: Offset) -> Self {
        let mut clone = self.clone();
        clone.translate(offset);
        clone
    }
}
