use crate::math::Point3;

slotmap::new_key_type! {
    /// Key of a vertex record in a [`super::TopologyStore`].
    pub struct VertexId;
}

/// A vertex record. Vertices are the leaves of the shape graph and hold
/// no child references.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// Position in model space.
    pub point: Point3,
}

impl VertexData {
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }
}
