use std::collections::HashSet;
use std::sync::OnceLock;

use crate::error::{Result, TopologyError};
use crate::topology::{Shape, ShapeKind, TopologyStore};

use super::adjacency::{AdjacencyIndex, Adjacent};
use super::identity::{IdentityKey, OrientationMode};
use super::wire_explorer::{LocalWireExplorer, OrderedEdges, OrderedVertices};

/// Parameters controlling an exploration session.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplorerConfig {
    /// How occurrences of the same entity are deduplicated.
    pub orientation: OrientationMode,
}

/// Enumerates and relates the sub-shapes of one root shape.
///
/// All queries of one explorer share the same [`OrientationMode`]. The
/// adjacency index is built on first use and cached; the explorer is
/// `Sync`, so the build happens at most once even under concurrent use.
///
/// The root graph is read, never mutated. Returned shapes are plain
/// values and stay valid after the explorer is dropped.
#[derive(Debug)]
pub struct TopologyExplorer<'a> {
    store: &'a TopologyStore,
    root: Shape,
    config: ExplorerConfig,
    index: OnceLock<std::result::Result<AdjacencyIndex, TopologyError>>,
}

impl<'a> TopologyExplorer<'a> {
    /// Creates an explorer that ignores orientation when deduplicating.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidShape`] if any reference reachable
    /// from `root` does not resolve in `store`.
    pub fn new(store: &'a TopologyStore, root: Shape) -> Result<Self> {
        Self::with_config(store, root, ExplorerConfig::default())
    }

    /// Creates an explorer with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidShape`] if any reference reachable
    /// from `root` does not resolve in `store`.
    pub fn with_config(
        store: &'a TopologyStore,
        root: Shape,
        config: ExplorerConfig,
    ) -> Result<Self> {
        store.check(root)?;
        tracing::trace!(
            kind = %root.kind(),
            mode = ?config.orientation,
            "created topology explorer"
        );
        Ok(Self {
            store,
            root,
            config,
            index: OnceLock::new(),
        })
    }

    /// The explored root shape.
    #[must_use]
    pub fn root(&self) -> Shape {
        self.root
    }

    /// The identity mode used by every query of this explorer.
    #[must_use]
    pub fn mode(&self) -> OrientationMode {
        self.config.orientation
    }

    /// Every distinct entity of `kind` under the root (the root included),
    /// in first-discovery depth-first order.
    ///
    /// Each call returns an independent iterator.
    #[must_use]
    pub fn entities_of(&self, kind: ShapeKind) -> Entities<'a> {
        Entities::new(self.store, self.root, kind, self.config.orientation)
    }

    /// Number of distinct entities of `kind` under the root.
    #[must_use]
    pub fn count_of(&self, kind: ShapeKind) -> usize {
        self.entities_of(kind).count()
    }

    /// The adjacency index, built on first call.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidShape`] if the root graph holds a
    /// dangling reference.
    pub fn index(&self) -> Result<&AdjacencyIndex> {
        self.index
            .get_or_init(|| AdjacencyIndex::build(self.store, self.root, self.config.orientation))
            .as_ref()
            .map_err(|e| e.clone().into())
    }

    /// Entities of kind `target` contained in, or bordering, `source`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::UnsupportedPair`] for kind pairs without a
    /// defined relationship and [`TopologyError::InvalidShape`] if `source`
    /// is not part of the store or of the root.
    pub fn adjacent(&self, source: Shape, target: ShapeKind) -> Result<Adjacent<'_>> {
        if !self.store.contains(source) {
            return Err(TopologyError::InvalidShape(format!(
                "{} not found in store",
                source.kind()
            ))
            .into());
        }
        Ok(self.index()?.query(source, target)?)
    }

    /// Number of shapes [`TopologyExplorer::adjacent`] would yield.
    ///
    /// # Errors
    ///
    /// Same as [`TopologyExplorer::adjacent`].
    pub fn count_adjacent(&self, source: Shape, target: ShapeKind) -> Result<usize> {
        Ok(self.adjacent(source, target)?.len())
    }

    fn adjacent_from(
        &self,
        source: Shape,
        expected: ShapeKind,
        target: ShapeKind,
    ) -> Result<Adjacent<'_>> {
        if source.kind() != expected {
            return Err(TopologyError::KindMismatch {
                expected,
                actual: source.kind(),
            }
            .into());
        }
        self.adjacent(source, target)
    }

    /// Edges shared by two faces, in `face_a`'s boundary order.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::KindMismatch`] if either shape is not a face.
    pub fn shared_edges(&self, face_a: Shape, face_b: Shape) -> Result<Vec<Shape>> {
        let other: HashSet<_> = self.edges_from_face(face_b)?.map(|e| e.id()).collect();
        Ok(self
            .edges_from_face(face_a)?
            .filter(|e| other.contains(&e.id()))
            .collect())
    }

    // --- Per-kind enumeration ---

    /// Distinct vertices under the root.
    #[must_use]
    pub fn vertices(&self) -> Entities<'a> {
        self.entities_of(ShapeKind::Vertex)
    }

    /// Distinct edges under the root.
    #[must_use]
    pub fn edges(&self) -> Entities<'a> {
        self.entities_of(ShapeKind::Edge)
    }

    /// Distinct wires under the root.
    #[must_use]
    pub fn wires(&self) -> Entities<'a> {
        self.entities_of(ShapeKind::Wire)
    }

    /// Distinct faces under the root.
    #[must_use]
    pub fn faces(&self) -> Entities<'a> {
        self.entities_of(ShapeKind::Face)
    }

    /// Distinct shells under the root.
    #[must_use]
    pub fn shells(&self) -> Entities<'a> {
        self.entities_of(ShapeKind::Shell)
    }

    /// Distinct solids under the root.
    #[must_use]
    pub fn solids(&self) -> Entities<'a> {
        self.entities_of(ShapeKind::Solid)
    }

    /// Distinct composite solids under the root.
    #[must_use]
    pub fn comp_solids(&self) -> Entities<'a> {
        self.entities_of(ShapeKind::CompSolid)
    }

    /// Distinct compounds under the root.
    #[must_use]
    pub fn compounds(&self) -> Entities<'a> {
        self.entities_of(ShapeKind::Compound)
    }

    /// Number of distinct vertices under the root.
    #[must_use]
    pub fn number_of_vertices(&self) -> usize {
        self.count_of(ShapeKind::Vertex)
    }

    /// Number of distinct edges under the root.
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.count_of(ShapeKind::Edge)
    }

    /// Number of distinct wires under the root.
    #[must_use]
    pub fn number_of_wires(&self) -> usize {
        self.count_of(ShapeKind::Wire)
    }

    /// Number of distinct faces under the root.
    #[must_use]
    pub fn number_of_faces(&self) -> usize {
        self.count_of(ShapeKind::Face)
    }

    /// Number of distinct shells under the root.
    #[must_use]
    pub fn number_of_shells(&self) -> usize {
        self.count_of(ShapeKind::Shell)
    }

    /// Number of distinct solids under the root.
    #[must_use]
    pub fn number_of_solids(&self) -> usize {
        self.count_of(ShapeKind::Solid)
    }

    /// Number of distinct composite solids under the root.
    #[must_use]
    pub fn number_of_comp_solids(&self) -> usize {
        self.count_of(ShapeKind::CompSolid)
    }

    /// Number of distinct compounds under the root.
    #[must_use]
    pub fn number_of_compounds(&self) -> usize {
        self.count_of(ShapeKind::Compound)
    }
}

/// Named adjacency queries.
///
/// Each checks the kind of its argument first and fails with
/// [`TopologyError::KindMismatch`] on a wrong kind; otherwise it behaves
/// like [`TopologyExplorer::adjacent`].
#[allow(clippy::missing_errors_doc)]
impl<'a> TopologyExplorer<'a> {
    /// Distinct faces that hold `edge`, in discovery order.
    pub fn faces_from_edge(&self, edge: Shape) -> Result<Adjacent<'_>> {
        self.adjacent_from(edge, ShapeKind::Edge, ShapeKind::Face)
    }

    /// Distinct wires that hold `edge`, in discovery order.
    pub fn wires_from_edge(&self, edge: Shape) -> Result<Adjacent<'_>> {
        self.adjacent_from(edge, ShapeKind::Edge, ShapeKind::Wire)
    }

    /// Distinct vertices of `edge`, in structural order.
    pub fn vertices_from_edge(&self, edge: Shape) -> Result<Adjacent<'_>> {
        self.adjacent_from(edge, ShapeKind::Edge, ShapeKind::Vertex)
    }

    /// Distinct edges that hold `vertex`, in discovery order.
    pub fn edges_from_vertex(&self, vertex: Shape) -> Result<Adjacent<'_>> {
        self.adjacent_from(vertex, ShapeKind::Vertex, ShapeKind::Edge)
    }

    /// Distinct wires that hold `vertex`, in discovery order.
    pub fn wires_from_vertex(&self, vertex: Shape) -> Result<Adjacent<'_>> {
        self.adjacent_from(vertex, ShapeKind::Vertex, ShapeKind::Wire)
    }

    /// Distinct faces that hold `vertex`, in discovery order.
    pub fn faces_from_vertex(&self, vertex: Shape) -> Result<Adjacent<'_>> {
        self.adjacent_from(vertex, ShapeKind::Vertex, ShapeKind::Face)
    }

    /// Distinct edges of `wire`, in structural order.
    pub fn edges_from_wire(&self, wire: Shape) -> Result<Adjacent<'_>> {
        self.adjacent_from(wire, ShapeKind::Wire, ShapeKind::Edge)
    }

    /// Distinct vertices of `wire`, in structural order.
    pub fn vertices_from_wire(&self, wire: Shape) -> Result<Adjacent<'_>> {
        self.adjacent_from(wire, ShapeKind::Wire, ShapeKind::Vertex)
    }

    /// Distinct faces that hold `wire`, in discovery order.
    pub fn faces_from_wire(&self, wire: Shape) -> Result<Adjacent<'_>> {
        self.adjacent_from(wire, ShapeKind::Wire, ShapeKind::Face)
    }

    /// Distinct wires of `face`, in structural order.
    pub fn wires_from_face(&self, face: Shape) -> Result<Adjacent<'_>> {
        self.adjacent_from(face, ShapeKind::Face, ShapeKind::Wire)
    }

    /// Distinct edges of `face`, in structural order.
    pub fn edges_from_face(&self, face: Shape) -> Result<Adjacent<'_>> {
        self.adjacent_from(face, ShapeKind::Face, ShapeKind::Edge)
    }

    /// Distinct vertices of `face`, in structural order.
    pub fn vertices_from_face(&self, face: Shape) -> Result<Adjacent<'_>> {
        self.adjacent_from(face, ShapeKind::Face, ShapeKind::Vertex)
    }

    /// Distinct shells that hold `face`, in discovery order.
    pub fn shells_from_face(&self, face: Shape) -> Result<Adjacent<'_>> {
        self.adjacent_from(face, ShapeKind::Face, ShapeKind::Shell)
    }

    /// Distinct solids that hold `face`, in discovery order.
    pub fn solids_from_face(&self, face: Shape) -> Result<Adjacent<'_>> {
        self.adjacent_from(face, ShapeKind::Face, ShapeKind::Solid)
    }

    /// Distinct faces of `solid`, in structural order.
    pub fn faces_from_solid(&self, solid: Shape) -> Result<Adjacent<'_>> {
        self.adjacent_from(solid, ShapeKind::Solid, ShapeKind::Face)
    }

    // --- Ordered wire traversal ---

    /// Edges of `wire` in connectivity order; see [`LocalWireExplorer`].
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::KindMismatch`] if `wire` is not a wire.
    pub fn ordered_edges_from_wire(&self, wire: Shape) -> Result<OrderedEdges<'a>> {
        Ok(LocalWireExplorer::new(self.store, wire)?.ordered_edges())
    }

    /// Vertices of `wire` in connectivity order; see [`LocalWireExplorer`].
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::KindMismatch`] if `wire` is not a wire.
    pub fn ordered_vertices_from_wire(&self, wire: Shape) -> Result<OrderedVertices<'a>> {
        Ok(LocalWireExplorer::new(self.store, wire)?.ordered_vertices())
    }
}

/// Lazy depth-first enumeration of the distinct entities of one kind.
///
/// Only holds the root, the requested kind, and its own traversal state,
/// so independent iterators never observe each other.
#[derive(Debug, Clone)]
pub struct Entities<'a> {
    store: &'a TopologyStore,
    kind: ShapeKind,
    mode: OrientationMode,
    stack: Vec<Shape>,
    expanded: HashSet<IdentityKey>,
    emitted: HashSet<IdentityKey>,
}

impl<'a> Entities<'a> {
    pub(super) fn new(
        store: &'a TopologyStore,
        root: Shape,
        kind: ShapeKind,
        mode: OrientationMode,
    ) -> Self {
        Self {
            store,
            kind,
            mode,
            stack: vec![root],
            expanded: HashSet::new(),
            emitted: HashSet::new(),
        }
    }
}

impl Iterator for Entities<'_> {
    type Item = Shape;

    fn next(&mut self) -> Option<Shape> {
        while let Some(shape) = self.stack.pop() {
            let key = IdentityKey::of(shape, self.mode);

            // Re-expanding an occurrence with a known key can only reach
            // entities that were already emitted.
            if shape.kind().may_contain(self.kind) && self.expanded.insert(key) {
                // The graph was checked when the explorer was created.
                let children = self.store.children(shape).unwrap_or_default();
                self.stack.extend(children.into_iter().rev());
            }

            if shape.kind() == self.kind && self.emitted.insert(key) {
                return Some(shape);
            }
        }
        None
    }
}
