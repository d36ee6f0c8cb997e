use crate::error::{GeometryError, OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{EdgeData, Oriented, TopologyStore, VertexData, WireData, WireId};

/// Creates a polyline wire from a sequence of 3D points.
///
/// Consecutive segments share their vertex. A closed wire reuses the first
/// vertex as the end of its closing edge.
pub struct MakeWire {
    points: Vec<Point3>,
    close: bool,
}

impl MakeWire {
    /// Creates a new `MakeWire` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, close: bool) -> Self {
        Self { points, close }
    }

    /// Executes the operation, creating the wire in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if there are fewer than two
    /// points (three for a closed wire), and [`GeometryError::Degenerate`]
    /// if two consecutive points coincide.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<WireId> {
        let min_points = if self.close { 3 } else { 2 };
        if self.points.len() < min_points {
            return Err(OperationError::InvalidInput(format!(
                "a {} wire needs at least {min_points} points",
                if self.close { "closed" } else { "open" }
            ))
            .into());
        }

        let n = self.points.len();
        let segments = if self.close { n } else { n - 1 };
        for i in 0..segments {
            let (a, b) = (self.points[i], self.points[(i + 1) % n]);
            if (b - a).norm() < TOLERANCE {
                return Err(GeometryError::Degenerate(format!(
                    "zero-length segment at point {i}"
                ))
                .into());
            }
        }

        let vertices: Vec<_> = self
            .points
            .iter()
            .map(|&p| store.add_vertex(VertexData::new(p)))
            .collect();

        let edges = (0..segments)
            .map(|i| {
                let j = (i + 1) % n;
                let length = (self.points[j] - self.points[i]).norm();
                Oriented::forward(store.add_edge(EdgeData::line(vertices[i], vertices[j], length)))
            })
            .collect();

        Ok(store.add_wire(WireData {
            edges,
            is_closed: self.close,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn closed_square_shares_first_vertex() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();

        let data = store.wire(wire).unwrap();
        assert_eq!(data.edges.len(), 4);
        assert!(data.is_closed);
        let first = store.edge(data.edges[0].id).unwrap();
        let last = store.edge(data.edges[3].id).unwrap();
        assert_eq!(last.end, first.start);
    }

    #[test]
    fn open_polyline_has_n_minus_one_edges() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(3.0, 4.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        let data = store.wire(wire).unwrap();
        assert_eq!(data.edges.len(), 1);
        assert!((store.edge(data.edges[0].id).unwrap().t_end - 5.0).abs() < 1e-10);
    }

    #[test]
    fn too_few_points_is_rejected() {
        let mut store = TopologyStore::new();
        assert!(MakeWire::new(vec![p(0.0, 0.0, 0.0)], false).execute(&mut store).is_err());
        assert!(MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)], true)
            .execute(&mut store)
            .is_err());
    }

    #[test]
    fn repeated_point_is_degenerate() {
        let mut store = TopologyStore::new();
        let result =
            MakeWire::new(vec![p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0)], false).execute(&mut store);
        assert!(matches!(
            result,
            Err(crate::TopolisError::Geometry(GeometryError::Degenerate(_)))
        ));
    }
}
