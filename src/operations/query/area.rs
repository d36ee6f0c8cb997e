use crate::error::{GeometryError, Result};
use crate::explore::{downcast_to, LocalWireExplorer};
use crate::math::polygon::polygon_area;
use crate::operations::loop_points;
use crate::topology::{EdgeCurve, EdgeId, FaceId, FaceSurface, Shape, TopologyStore};

/// Computes the area of a planar face bounded by straight edges.
///
/// The outer loop area is reduced by the area of every hole.
pub struct Area {
    face: Shape,
}

impl Area {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(face: Shape) -> Self {
        Self { face }
    }

    /// Executes the query, returning the face area.
    ///
    /// # Errors
    ///
    /// Returns a kind mismatch if the shape is not a face, and
    /// [`GeometryError::Unsupported`] for curved surfaces or boundaries.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        let face = store.face(downcast_to::<FaceId>(self.face)?.id)?;
        if let FaceSurface::Cylinder { .. } = face.surface {
            return Err(GeometryError::Unsupported("area of a cylindrical face".into()).into());
        }

        let outer = loop_area(store, face.outer_wire.shape())?;
        let holes = face
            .inner_wires
            .iter()
            .map(|wire| loop_area(store, wire.shape()))
            .sum::<Result<f64>>()?;
        Ok(outer - holes)
    }
}

fn loop_area(store: &TopologyStore, wire: Shape) -> Result<f64> {
    for edge in LocalWireExplorer::new(store, wire)?.ordered_edges() {
        let data = store.edge(downcast_to::<EdgeId>(edge)?.id)?;
        if let EdgeCurve::Arc { .. } = data.curve {
            return Err(GeometryError::Unsupported("area of a loop with arcs".into()).into());
        }
    }
    Ok(polygon_area(&loop_points(store, wire)?))
}
