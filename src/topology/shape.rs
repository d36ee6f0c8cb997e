use super::kind::{Orientation, ShapeKind};
use super::{
    CompSolidId, CompoundId, EdgeId, FaceId, ShellId, SolidId, VertexId, WireId,
};

/// Kind-tagged identifier of an entity in the topology store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeId {
    Vertex(VertexId),
    Edge(EdgeId),
    Wire(WireId),
    Face(FaceId),
    Shell(ShellId),
    Solid(SolidId),
    CompSolid(CompSolidId),
    Compound(CompoundId),
}

impl ShapeId {
    /// Returns the kind carried by the tag.
    #[must_use]
    pub fn kind(self) -> ShapeKind {
        match self {
            ShapeId::Vertex(_) => ShapeKind::Vertex,
            ShapeId::Edge(_) => ShapeKind::Edge,
            ShapeId::Wire(_) => ShapeKind::Wire,
            ShapeId::Face(_) => ShapeKind::Face,
            ShapeId::Shell(_) => ShapeKind::Shell,
            ShapeId::Solid(_) => ShapeKind::Solid,
            ShapeId::CompSolid(_) => ShapeKind::CompSolid,
            ShapeId::Compound(_) => ShapeKind::Compound,
        }
    }
}

/// A typed entity key that knows its own [`ShapeKind`].
pub trait TopoKey: slotmap::Key + Into<ShapeId> {
    /// The kind every key of this type denotes.
    const KIND: ShapeKind;

    /// Wraps the key into a kind-tagged [`ShapeId`].
    fn into_shape_id(self) -> ShapeId;

    /// Extracts the key if `id` carries this kind.
    fn from_shape_id(id: ShapeId) -> Option<Self>;
}

macro_rules! impl_topo_key {
    ($($key:ident => $variant:ident),* $(,)?) => {
        $(
            impl TopoKey for $key {
                const KIND: ShapeKind = ShapeKind::$variant;

                fn into_shape_id(self) -> ShapeId {
                    ShapeId::$variant(self)
                }

                fn from_shape_id(id: ShapeId) -> Option<Self> {
                    match id {
                        ShapeId::$variant(key) => Some(key),
                        _ => None,
                    }
                }
            }

            impl From<$key> for ShapeId {
                fn from(key: $key) -> Self {
                    ShapeId::$variant(key)
                }
            }
        )*
    };
}

impl_topo_key! {
    VertexId => Vertex,
    EdgeId => Edge,
    WireId => Wire,
    FaceId => Face,
    ShellId => Shell,
    SolidId => Solid,
    CompSolidId => CompSolid,
    CompoundId => Compound,
}

/// A typed reference to a child entity together with its orientation
/// at the reference site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Oriented<K> {
    /// The referenced entity.
    pub id: K,
    /// Orientation of this occurrence relative to the referencing parent.
    pub orientation: Orientation,
}

impl<K: TopoKey> Oriented<K> {
    /// Creates a new oriented reference.
    #[must_use]
    pub fn new(id: K, orientation: Orientation) -> Self {
        Self { id, orientation }
    }

    /// Creates a `Forward` reference.
    #[must_use]
    pub fn forward(id: K) -> Self {
        Self::new(id, Orientation::Forward)
    }

    /// Returns the same reference with the opposite orientation.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self::new(self.id, self.orientation.reversed())
    }

    /// Converts into a generic [`Shape`] handle.
    #[must_use]
    pub fn shape(self) -> Shape {
        Shape::new(self.id.into_shape_id(), self.orientation)
    }
}

impl<K: TopoKey> From<Oriented<K>> for Shape {
    fn from(oriented: Oriented<K>) -> Self {
        oriented.shape()
    }
}

/// A generic handle to one occurrence of an entity in the shape graph.
///
/// A `Shape` is a plain value: it never borrows the store it points into,
/// so it stays usable after whatever produced it has been dropped.
/// `==` is oriented equivalence (same entity and same orientation); use
/// [`Shape::is_same`] for structural equivalence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    id: ShapeId,
    orientation: Orientation,
}

impl Shape {
    /// Creates a shape handle.
    #[must_use]
    pub fn new(id: impl Into<ShapeId>, orientation: Orientation) -> Self {
        Self {
            id: id.into(),
            orientation,
        }
    }

    /// Creates a `Forward` shape handle.
    #[must_use]
    pub fn forward(id: impl Into<ShapeId>) -> Self {
        Self::new(id, Orientation::Forward)
    }

    /// Returns the kind-tagged identifier of the underlying entity.
    #[must_use]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Returns the orientation of this occurrence.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the concrete kind of the underlying entity.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.id.kind()
    }

    /// Structural equivalence: same underlying entity, orientation ignored.
    #[must_use]
    pub fn is_same(&self, other: &Shape) -> bool {
        self.id == other.id
    }

    /// Oriented equivalence: same underlying entity and same orientation.
    #[must_use]
    pub fn is_equal(&self, other: &Shape) -> bool {
        self == other
    }

    /// Returns the same entity with the given orientation.
    #[must_use]
    pub fn oriented(self, orientation: Orientation) -> Self {
        Self {
            id: self.id,
            orientation,
        }
    }

    /// Returns the same entity with the opposite orientation.
    #[must_use]
    pub fn reversed(self) -> Self {
        self.oriented(self.orientation.reversed())
    }

    /// Re-expresses a child occurrence (`self`) in the frame of a parent
    /// whose own orientation is `parent`.
    #[must_use]
    pub fn composed(self, parent: Orientation) -> Self {
        self.oriented(parent.compose(self.orientation))
    }
}
