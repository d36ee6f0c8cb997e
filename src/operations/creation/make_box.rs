use std::collections::HashMap;

use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::{
    EdgeData, EdgeId, FaceData, FaceSurface, Orientation, Oriented, ShellData, SolidData,
    SolidId, TopologyStore, VertexData, WireData,
};

/// Corner indices of each face, counter-clockwise seen from outside.
///
/// Corner `i` sits at `(x, y, z)` with `x = i & 1`, `y = (i >> 1) & 1`,
/// `z = (i >> 2) & 1`, selecting min (0) or max (1) per axis.
const FACES: [([usize; 4], [f64; 3]); 6] = [
    ([0, 2, 3, 1], [0.0, 0.0, -1.0]),
    ([4, 5, 7, 6], [0.0, 0.0, 1.0]),
    ([0, 1, 5, 4], [0.0, -1.0, 0.0]),
    ([2, 6, 7, 3], [0.0, 1.0, 0.0]),
    ([0, 4, 6, 2], [-1.0, 0.0, 0.0]),
    ([1, 3, 7, 5], [1.0, 0.0, 0.0]),
];

/// Creates an axis-aligned box solid from two corner points.
///
/// The box has 8 vertices, 12 edges and 6 single-wire planar faces. Faces
/// are consistently oriented, so each edge is used `Forward` by one face
/// and `Reversed` by the other.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Executes the operation, creating the box in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the box has no volume.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let extent = self.max_corner - self.min_corner;
        if extent.iter().any(|&d| d < TOLERANCE) {
            return Err(OperationError::InvalidInput(
                "max corner must exceed min corner on every axis".into(),
            )
            .into());
        }

        let corners: Vec<Point3> = (0..8)
            .map(|i| {
                let pick = |bit: usize, lo: f64, hi: f64| if (i >> bit) & 1 == 0 { lo } else { hi };
                Point3::new(
                    pick(0, self.min_corner.x, self.max_corner.x),
                    pick(1, self.min_corner.y, self.max_corner.y),
                    pick(2, self.min_corner.z, self.max_corner.z),
                )
            })
            .collect();
        let vertices: Vec<_> = corners
            .iter()
            .map(|&p| store.add_vertex(VertexData::new(p)))
            .collect();

        let mut edges: HashMap<(usize, usize), EdgeId> = HashMap::new();
        let mut faces = Vec::with_capacity(FACES.len());

        for (quad, normal) in FACES {
            let mut wire_edges = Vec::with_capacity(4);
            for k in 0..4 {
                let (a, b) = (quad[k], quad[(k + 1) % 4]);
                let oriented = if let Some(&edge) = edges.get(&(b, a)) {
                    Oriented::new(edge, Orientation::Reversed)
                } else {
                    let length = (corners[b] - corners[a]).norm();
                    let edge = store.add_edge(EdgeData::line(vertices[a], vertices[b], length));
                    edges.insert((a, b), edge);
                    Oriented::forward(edge)
                };
                wire_edges.push(oriented);
            }

            let wire = store.add_wire(WireData {
                edges: wire_edges,
                is_closed: true,
            });
            let surface = FaceSurface::Plane {
                origin: corners[quad[0]],
                normal: Vector3::from(normal),
            };
            faces.push(Oriented::forward(
                store.add_face(FaceData::new(surface, Oriented::forward(wire))),
            ));
        }

        let shell = store.add_shell(ShellData {
            faces,
            is_closed: true,
        });
        Ok(store.add_solid(SolidData::new(Oriented::forward(shell))))
    }
}
