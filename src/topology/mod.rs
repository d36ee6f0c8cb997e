pub mod comp_solid;
pub mod compound;
pub mod edge;
pub mod face;
pub mod kind;
pub mod shape;
pub mod shell;
pub mod solid;
pub mod vertex;
pub mod wire;

pub use comp_solid::{CompSolidData, CompSolidId};
pub use compound::{CompoundData, CompoundId};
pub use edge::{EdgeCurve, EdgeData, EdgeId};
pub use face::{FaceData, FaceId, FaceSurface};
pub use kind::{Orientation, ShapeKind};
pub use shape::{Oriented, Shape, ShapeId, TopoKey};
pub use shell::{ShellData, ShellId};
pub use solid::{SolidData, SolidId};
pub use vertex::{VertexData, VertexId};
pub use wire::{WireData, WireId};

use std::collections::HashSet;

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Central arena that owns all topological entities.
///
/// Entities reference each other via typed IDs (generational indices),
/// so one edge can be shared by several wires without any deep copy.
/// The store is insert-only: an ID it hands out stays valid for its
/// whole lifetime.
///
/// Containment must be acyclic. The store does not check this; callers
/// building graphs by hand are responsible for it.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    wires: SlotMap<WireId, WireData>,
    faces: SlotMap<FaceId, FaceData>,
    shells: SlotMap<ShellId, ShellData>,
    solids: SlotMap<SolidId, SolidData>,
    comp_solids: SlotMap<CompSolidId, CompSolidData>,
    compounds: SlotMap<CompoundId, CompoundData>,
}

fn not_found(kind: ShapeKind) -> TopologyError {
    TopologyError::InvalidShape(format!("{kind} not found in store"))
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidShape`] if the vertex is not in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| not_found(ShapeKind::Vertex))
    }

    // --- Edge operations ---

    /// Inserts an edge and returns its ID.
    pub fn add_edge(&mut self, data: EdgeData) -> EdgeId {
        self.edges.insert(data)
    }

    /// Returns a reference to the edge data.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidShape`] if the edge is not in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges.get(id).ok_or_else(|| not_found(ShapeKind::Edge))
    }

    // --- Wire operations ---

    /// Inserts a wire and returns its ID.
    pub fn add_wire(&mut self, data: WireData) -> WireId {
        self.wires.insert(data)
    }

    /// Returns a reference to the wire data.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidShape`] if the wire is not in the store.
    pub fn wire(&self, id: WireId) -> Result<&WireData, TopologyError> {
        self.wires.get(id).ok_or_else(|| not_found(ShapeKind::Wire))
    }

    // --- Face operations ---

    /// Inserts a face and returns its ID.
    pub fn add_face(&mut self, data: FaceData) -> FaceId {
        self.faces.insert(data)
    }

    /// Returns a reference to the face data.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidShape`] if the face is not in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces.get(id).ok_or_else(|| not_found(ShapeKind::Face))
    }

    // --- Shell operations ---

    /// Inserts a shell and returns its ID.
    pub fn add_shell(&mut self, data: ShellData) -> ShellId {
        self.shells.insert(data)
    }

    /// Returns a reference to the shell data.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidShape`] if the shell is not in the store.
    pub fn shell(&self, id: ShellId) -> Result<&ShellData, TopologyError> {
        self.shells.get(id).ok_or_else(|| not_found(ShapeKind::Shell))
    }

    // --- Solid operations ---

    /// Inserts a solid and returns its ID.
    pub fn add_solid(&mut self, data: SolidData) -> SolidId {
        self.solids.insert(data)
    }

    /// Returns a reference to the solid data.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidShape`] if the solid is not in the store.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, TopologyError> {
        self.solids.get(id).ok_or_else(|| not_found(ShapeKind::Solid))
    }

    // --- CompSolid operations ---

    /// Inserts a composite solid and returns its ID.
    pub fn add_comp_solid(&mut self, data: CompSolidData) -> CompSolidId {
        self.comp_solids.insert(data)
    }

    /// Returns a reference to the composite solid data.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidShape`] if the compsolid is not in the store.
    pub fn comp_solid(&self, id: CompSolidId) -> Result<&CompSolidData, TopologyError> {
        self.comp_solids
            .get(id)
            .ok_or_else(|| not_found(ShapeKind::CompSolid))
    }

    // --- Compound operations ---

    /// Inserts a compound and returns its ID.
    pub fn add_compound(&mut self, data: CompoundData) -> CompoundId {
        self.compounds.insert(data)
    }

    /// Returns a reference to the compound data.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidShape`] if the compound is not in the store.
    pub fn compound(&self, id: CompoundId) -> Result<&CompoundData, TopologyError> {
        self.compounds
            .get(id)
            .ok_or_else(|| not_found(ShapeKind::Compound))
    }

    // --- Generic shape access ---

    /// Returns `true` if the entity behind `shape` lives in this store.
    #[must_use]
    pub fn contains(&self, shape: Shape) -> bool {
        match shape.id() {
            ShapeId::Vertex(id) => self.vertices.contains_key(id),
            ShapeId::Edge(id) => self.edges.contains_key(id),
            ShapeId::Wire(id) => self.wires.contains_key(id),
            ShapeId::Face(id) => self.faces.contains_key(id),
            ShapeId::Shell(id) => self.shells.contains_key(id),
            ShapeId::Solid(id) => self.solids.contains_key(id),
            ShapeId::CompSolid(id) => self.comp_solids.contains_key(id),
            ShapeId::Compound(id) => self.compounds.contains_key(id),
        }
    }

    /// Returns the direct child occurrences of `shape`, in structural order,
    /// with orientations composed into `shape`'s frame.
    ///
    /// A face lists its outer wire, then its inner wires, then its free
    /// members.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidShape`] if `shape` is not in the store.
    pub fn children(&self, shape: Shape) -> Result<Vec<Shape>, TopologyError> {
        let local: Vec<Shape> = match shape.id() {
            ShapeId::Vertex(id) => {
                self.vertex(id)?;
                Vec::new()
            }
            ShapeId::Edge(id) => self.edge(id)?.vertex_occurrences().to_vec(),
            ShapeId::Wire(id) => self
                .wire(id)?
                .edges
                .iter()
                .copied()
                .map(Oriented::shape)
                .collect(),
            ShapeId::Face(id) => {
                let face = self.face(id)?;
                std::iter::once(face.outer_wire.shape())
                    .chain(face.inner_wires.iter().copied().map(Oriented::shape))
                    .chain(face.free_members.iter().copied())
                    .collect()
            }
            ShapeId::Shell(id) => self
                .shell(id)?
                .faces
                .iter()
                .copied()
                .map(Oriented::shape)
                .collect(),
            ShapeId::Solid(id) => {
                let solid = self.solid(id)?;
                std::iter::once(solid.outer_shell.shape())
                    .chain(solid.inner_shells.iter().copied().map(Oriented::shape))
                    .collect()
            }
            ShapeId::CompSolid(id) => self
                .comp_solid(id)?
                .solids
                .iter()
                .copied()
                .map(Oriented::shape)
                .collect(),
            ShapeId::Compound(id) => self.compound(id)?.members.clone(),
        };
        let parent = shape.orientation();
        Ok(local.into_iter().map(|c| c.composed(parent)).collect())
    }

    /// Verifies that every entity reachable from `root` resolves in this
    /// store and that every parent only holds kinds it may contain.
    ///
    /// Each distinct entity is visited once.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidShape`] naming the first bad reference.
    pub fn check(&self, root: Shape) -> Result<(), TopologyError> {
        let mut visited: HashSet<ShapeId> = HashSet::new();
        let mut stack = vec![root];
        while let Some(shape) = stack.pop() {
            if !visited.insert(shape.id()) {
                continue;
            }
            let children = self.children(shape)?;
            for child in &children {
                if !shape.kind().may_contain(child.kind()) {
                    return Err(TopologyError::InvalidShape(format!(
                        "a {} cannot contain a {}",
                        shape.kind(),
                        child.kind()
                    )));
                }
            }
            if let ShapeId::Wire(id) = shape.id() {
                self.check_wire_ends(id)?;
            }
            if let ShapeId::Face(id) = shape.id() {
                let face = self.face(id)?;
                if let Some(bad) = face
                    .free_members
                    .iter()
                    .find(|m| m.kind() >= ShapeKind::Wire)
                {
                    return Err(TopologyError::InvalidShape(format!(
                        "a face cannot hold a free {}",
                        bad.kind()
                    )));
                }
            }
            stack.extend(children);
        }
        Ok(())
    }

    /// A wire flagged closed must end where it starts, and an open one
    /// must not.
    fn check_wire_ends(&self, id: WireId) -> Result<(), TopologyError> {
        let wire = self.wire(id)?;
        let (Some(first), Some(last)) = (wire.edges.first(), wire.edges.last()) else {
            return Ok(());
        };
        let lead = self.edge(first.id)?.leading_vertex(first.orientation);
        let trail = self.edge(last.id)?.trailing_vertex(last.orientation);
        if wire.is_closed != (lead == trail) {
            return Err(TopologyError::InvalidShape(format!(
                "wire is flagged {} but its ends {}",
                if wire.is_closed { "closed" } else { "open" },
                if lead == trail { "meet" } else { "differ" }
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn segment(store: &mut TopologyStore) -> EdgeId {
        let a = store.add_vertex(VertexData::new(p(0.0, 0.0, 0.0)));
        let b = store.add_vertex(VertexData::new(p(1.0, 0.0, 0.0)));
        store.add_edge(EdgeData::line(a, b, 1.0))
    }

    #[test]
    fn edge_children_are_start_forward_end_reversed() {
        let mut store = TopologyStore::new();
        let edge = segment(&mut store);
        let data = store.edge(edge).unwrap().clone();
        let children = store.children(Shape::forward(edge)).unwrap();
        assert_eq!(children[0], Shape::new(data.start, Orientation::Forward));
        assert_eq!(children[1], Shape::new(data.end, Orientation::Reversed));
    }

    #[test]
    fn children_compose_parent_orientation() {
        let mut store = TopologyStore::new();
        let edge = segment(&mut store);
        let data = store.edge(edge).unwrap().clone();
        let children = store
            .children(Shape::new(edge, Orientation::Reversed))
            .unwrap();
        assert_eq!(children[0], Shape::new(data.start, Orientation::Reversed));
        assert_eq!(children[1], Shape::new(data.end, Orientation::Forward));
    }

    #[test]
    fn missing_entity_is_invalid_shape() {
        let mut other = TopologyStore::new();
        let foreign = segment(&mut other);
        let store = TopologyStore::new();
        assert!(!store.contains(Shape::forward(foreign)));
        assert!(matches!(
            store.children(Shape::forward(foreign)),
            Err(TopologyError::InvalidShape(_))
        ));
    }

    #[test]
    fn check_rejects_dangling_reference() {
        let mut other = TopologyStore::new();
        let foreign = segment(&mut other);
        let mut store = TopologyStore::new();
        let wire = store.add_wire(WireData {
            edges: vec![Oriented::forward(foreign)],
            is_closed: false,
        });
        assert!(store.check(Shape::forward(wire)).is_err());
    }

    #[test]
    fn check_rejects_kind_inversion() {
        let mut store = TopologyStore::new();
        let edge = segment(&mut store);
        let wire = store.add_wire(WireData {
            edges: vec![Oriented::forward(edge)],
            is_closed: false,
        });
        let face = store.add_face(FaceData::new(
            FaceSurface::Plane {
                origin: p(0.0, 0.0, 0.0),
                normal: crate::math::Vector3::z(),
            },
            Oriented::forward(wire),
        ));
        let mut bad = store.face(face).unwrap().clone();
        bad.free_members.push(Shape::forward(wire));
        let bad_face = store.add_face(bad);

        assert!(store.check(Shape::forward(face)).is_ok());
        assert!(store.check(Shape::forward(bad_face)).is_err());
    }

    #[test]
    fn check_compares_wire_flag_with_its_ends() {
        let mut store = TopologyStore::new();
        let edge = segment(&mut store);
        let mislabelled = store.add_wire(WireData {
            edges: vec![Oriented::forward(edge)],
            is_closed: true,
        });
        let there_and_back = store.add_wire(WireData {
            edges: vec![Oriented::forward(edge), Oriented::new(edge, Orientation::Reversed)],
            is_closed: true,
        });

        assert!(matches!(
            store.check(Shape::forward(mislabelled)),
            Err(TopologyError::InvalidShape(_))
        ));
        assert!(store.check(Shape::forward(there_and_back)).is_ok());
    }

    #[test]
    fn compound_may_hold_any_kind() {
        let mut store = TopologyStore::new();
        let edge = segment(&mut store);
        let inner = store.add_compound(CompoundData {
            members: vec![Shape::forward(edge)],
        });
        let outer = store.add_compound(CompoundData {
            members: vec![Shape::forward(inner), Shape::forward(edge)],
        });
        assert!(store.check(Shape::forward(outer)).is_ok());
        assert_eq!(store.children(Shape::forward(outer)).unwrap().len(), 2);
    }
}
