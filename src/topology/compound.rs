use super::shape::Shape;

slotmap::new_key_type! {
    /// Unique identifier for a compound in the topology store.
    pub struct CompoundId;
}

/// A free grouping of shapes of any kind, including other compounds.
#[derive(Debug, Clone, Default)]
pub struct CompoundData {
    /// The grouped shapes, in authored order.
    pub members: Vec<Shape>,
}
