use crate::entities::IconNode;

/// The merged document containing the translated content of all packed icons.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Sheet {
    pub width: f32,
    pub height: f32,
    /// Translated content of every icon, in packing order
    pub content: Vec<IconNode>,
}
