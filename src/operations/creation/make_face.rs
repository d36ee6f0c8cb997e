use crate::error::{GeometryError, Result};
use crate::math::polygon::{newell_normal, newell_vector};
use crate::operations::loop_points;
use crate::topology::{
    FaceData, FaceId, FaceSurface, Orientation, Oriented, TopologyStore, WireId,
};

/// Creates a planar face from closed boundary wires.
///
/// The plane normal follows the outer wire's winding. Inner wires are
/// oriented so that they run against the outer one.
pub struct MakeFace {
    outer_wire: WireId,
    inner_wires: Vec<WireId>,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(outer_wire: WireId, inner_wires: Vec<WireId>) -> Self {
        Self {
            outer_wire,
            inner_wires,
        }
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TopologyError::WireNotClosed`] if a boundary
    /// wire is open, and [`GeometryError::Degenerate`] if the outer wire
    /// encloses no area.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        let outer = Oriented::forward(self.outer_wire);
        let points = loop_points(store, outer.shape())?;
        let normal = newell_normal(&points).ok_or_else(|| {
            GeometryError::Degenerate("outer wire encloses no area".into())
        })?;

        let mut inner_wires = Vec::with_capacity(self.inner_wires.len());
        for &wire in &self.inner_wires {
            let hole = loop_points(store, Oriented::forward(wire).shape())?;
            let orientation = if newell_vector(&hole).dot(&normal) > 0.0 {
                Orientation::Reversed
            } else {
                Orientation::Forward
            };
            inner_wires.push(Oriented::new(wire, orientation));
        }

        let mut face = FaceData::new(
            FaceSurface::Plane {
                origin: points[0],
                normal,
            },
            outer,
        );
        face.inner_wires = inner_wires;
        Ok(store.add_face(face))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{TopolisError, TopologyError};
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::MakeWire;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn square(store: &mut TopologyStore, lo: f64, hi: f64) -> WireId {
        MakeWire::new(vec![p(lo, lo, 0.0), p(hi, lo, 0.0), p(hi, hi, 0.0), p(lo, hi, 0.0)], true)
            .execute(store)
            .unwrap()
    }

    #[test]
    fn ccw_square_faces_up() {
        let mut store = TopologyStore::new();
        let wire = square(&mut store, 0.0, 1.0);
        let face = MakeFace::new(wire, vec![]).execute(&mut store).unwrap();

        let FaceSurface::Plane { normal, .. } = &store.face(face).unwrap().surface else {
            panic!("expected a planar face");
        };
        assert_relative_eq!(*normal, Vector3::z());
    }

    #[test]
    fn same_winding_hole_is_reversed() {
        let mut store = TopologyStore::new();
        let outer = square(&mut store, 0.0, 10.0);
        let hole = square(&mut store, 2.0, 8.0);
        let face = MakeFace::new(outer, vec![hole]).execute(&mut store).unwrap();

        let data = store.face(face).unwrap();
        assert_eq!(data.inner_wires, vec![Oriented::new(hole, Orientation::Reversed)]);
    }

    #[test]
    fn open_wire_is_rejected() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        let err = MakeFace::new(wire, vec![]).execute(&mut store).unwrap_err();
        assert_eq!(err, TopolisError::from(TopologyError::WireNotClosed));
    }

    #[test]
    fn collinear_loop_is_degenerate() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)], true)
            .execute(&mut store)
            .unwrap();
        assert!(MakeFace::new(wire, vec![]).execute(&mut store).is_err());
    }
}
