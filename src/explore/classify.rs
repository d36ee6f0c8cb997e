use crate::error::TopologyError;
use crate::topology::{
    CompSolidId, CompoundId, EdgeId, FaceId, Oriented, Shape, ShapeId, ShapeKind, ShellId,
    SolidId, TopoKey, VertexId, WireId,
};

/// A shape narrowed to its concrete kind.
///
/// Kind-specific behavior dispatches on the variant rather than through
/// a trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecificShape {
    Vertex(Oriented<VertexId>),
    Edge(Oriented<EdgeId>),
    Wire(Oriented<WireId>),
    Face(Oriented<FaceId>),
    Shell(Oriented<ShellId>),
    Solid(Oriented<SolidId>),
    CompSolid(Oriented<CompSolidId>),
    Compound(Oriented<CompoundId>),
}

impl SpecificShape {
    /// Returns the concrete kind of the shape.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.shape().kind()
    }

    /// Widens back to a generic shape handle.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match *self {
            SpecificShape::Vertex(v) => v.shape(),
            SpecificShape::Edge(e) => e.shape(),
            SpecificShape::Wire(w) => w.shape(),
            SpecificShape::Face(f) => f.shape(),
            SpecificShape::Shell(s) => s.shape(),
            SpecificShape::Solid(s) => s.shape(),
            SpecificShape::CompSolid(c) => c.shape(),
            SpecificShape::Compound(c) => c.shape(),
        }
    }
}

impl From<Shape> for SpecificShape {
    fn from(shape: Shape) -> Self {
        let o = shape.orientation();
        match shape.id() {
            ShapeId::Vertex(id) => SpecificShape::Vertex(Oriented::new(id, o)),
            ShapeId::Edge(id) => SpecificShape::Edge(Oriented::new(id, o)),
            ShapeId::Wire(id) => SpecificShape::Wire(Oriented::new(id, o)),
            ShapeId::Face(id) => SpecificShape::Face(Oriented::new(id, o)),
            ShapeId::Shell(id) => SpecificShape::Shell(Oriented::new(id, o)),
            ShapeId::Solid(id) => SpecificShape::Solid(Oriented::new(id, o)),
            ShapeId::CompSolid(id) => SpecificShape::CompSolid(Oriented::new(id, o)),
            ShapeId::Compound(id) => SpecificShape::Compound(Oriented::new(id, o)),
        }
    }
}

impl From<SpecificShape> for Shape {
    fn from(specific: SpecificShape) -> Self {
        specific.shape()
    }
}

/// Returns the concrete kind of a shape. Total over well-formed handles.
#[must_use]
pub fn classify(shape: Shape) -> ShapeKind {
    shape.kind()
}

/// Narrows a generic shape to `expected`.
///
/// # Errors
///
/// Returns [`TopologyError::KindMismatch`] if the shape is of another kind.
pub fn downcast(shape: Shape, expected: ShapeKind) -> Result<SpecificShape, TopologyError> {
    let actual = classify(shape);
    if actual != expected {
        return Err(TopologyError::KindMismatch { expected, actual });
    }
    Ok(SpecificShape::from(shape))
}

/// Narrows a generic shape to a typed reference.
///
/// ```
/// use topolis::explore::downcast_to;
/// use topolis::topology::{EdgeId, Shape, VertexId};
/// # use topolis::topology::{TopologyStore, VertexData};
/// # use topolis::math::Point3;
/// # let mut store = TopologyStore::new();
/// # let v = store.add_vertex(VertexData::new(Point3::origin()));
/// let shape = Shape::forward(v);
/// assert!(downcast_to::<VertexId>(shape).is_ok());
/// assert!(downcast_to::<EdgeId>(shape).is_err());
/// ```
///
/// # Errors
///
/// Returns [`TopologyError::KindMismatch`] if the shape is not a `K`.
pub fn downcast_to<K: TopoKey>(shape: Shape) -> Result<Oriented<K>, TopologyError> {
    K::from_shape_id(shape.id())
        .map(|id| Oriented::new(id, shape.orientation()))
        .ok_or(TopologyError::KindMismatch {
            expected: K::KIND,
            actual: shape.kind(),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;
    use crate::topology::{Orientation, TopologyStore};

    #[test]
    fn classify_reads_the_tag() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::origin(), Point3::new(1.0, 2.0, 3.0))
            .execute(&mut store)
            .unwrap();
        assert_eq!(classify(Shape::forward(solid)), ShapeKind::Solid);
    }

    #[test]
    fn downcast_matching_kind_keeps_orientation() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let shape = Shape::new(solid, Orientation::Reversed);
        let specific = downcast(shape, ShapeKind::Solid).unwrap();
        assert_eq!(specific, SpecificShape::Solid(Oriented::new(solid, Orientation::Reversed)));
        assert_eq!(Shape::from(specific), shape);
    }

    #[test]
    fn downcast_wrong_kind_fails() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let err = downcast(Shape::forward(solid), ShapeKind::Face).unwrap_err();
        assert_eq!(
            err,
            TopologyError::KindMismatch {
                expected: ShapeKind::Face,
                actual: ShapeKind::Solid,
            }
        );
        assert!(downcast_to::<FaceId>(Shape::forward(solid)).is_err());
        assert_eq!(downcast_to::<SolidId>(Shape::forward(solid)).unwrap().id, solid);
    }
}
