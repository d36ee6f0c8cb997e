use crate::error::{GeometryError, Result, TopologyError};
use crate::explore::{downcast_to, LocalWireExplorer};
use crate::topology::{EdgeCurve, EdgeId, Shape, ShapeKind, TopologyStore};

/// Computes the length of an edge or of a whole wire.
pub struct Length {
    shape: Shape,
}

impl Length {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// Executes the query, returning the curve length.
    ///
    /// A `Line` measures the distance between its vertices, an `Arc`
    /// measures `radius * |t_end - t_start|`. A wire sums its edges.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::KindMismatch`] if the shape is neither an
    /// edge nor a wire, or an error if a referenced entity is missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        match self.shape.kind() {
            ShapeKind::Edge => edge_length(store, self.shape),
            ShapeKind::Wire => LocalWireExplorer::new(store, self.shape)?
                .ordered_edges()
                .map(|edge| edge_length(store, edge))
                .sum(),
            actual => Err(TopologyError::KindMismatch {
                expected: ShapeKind::Edge,
                actual,
            }
            .into()),
        }
    }
}

/// Allowed drift of an arc's start vertex off its circle, relative to the radius.
const ON_CIRCLE: f64 = 1e-7;

fn edge_length(store: &TopologyStore, edge: Shape) -> Result<f64> {
    let edge = store.edge(downcast_to::<EdgeId>(edge)?.id)?;
    match edge.curve {
        EdgeCurve::Line => {
            let start = store.vertex(edge.start)?.point;
            let end = store.vertex(edge.end)?.point;
            Ok((end - start).norm())
        }
        EdgeCurve::Arc { center, radius } => {
            let start = store.vertex(edge.start)?.point;
            if ((start - center).norm() - radius).abs() > ON_CIRCLE * radius.max(1.0) {
                return Err(GeometryError::Degenerate(
                    "arc start vertex is not on its circle".into(),
                )
                .into());
            }
            Ok(radius * (edge.t_end - edge.t_start).abs())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::{MakeBox, MakeWire};
    use crate::topology::{EdgeData, VertexData};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn line_length_3_4_5() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)],
            false,
        )
        .execute(&mut store)
        .unwrap();
        let edge = store.wire(wire).unwrap().edges[0].shape();

        let len = Length::new(edge).execute(&store).unwrap();
        assert_relative_eq!(len, 5.0);
    }

    #[test]
    fn closed_wire_is_its_perimeter() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(2.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            true,
        )
        .execute(&mut store)
        .unwrap();

        let len = Length::new(Shape::forward(wire)).execute(&store).unwrap();
        assert_relative_eq!(len, 6.0);
    }

    #[test]
    fn half_circle_arc() {
        let mut store = TopologyStore::new();
        let a = store.add_vertex(VertexData::new(Point3::new(1.0, 0.0, 0.0)));
        let b = store.add_vertex(VertexData::new(Point3::new(-1.0, 0.0, 0.0)));
        let edge = store.add_edge(EdgeData {
            start: a,
            end: b,
            curve: EdgeCurve::Arc {
                center: Point3::origin(),
                radius: 1.0,
            },
            t_start: 0.0,
            t_end: PI,
        });

        let len = Length::new(Shape::forward(edge)).execute(&store).unwrap();
        assert_relative_eq!(len, PI);
    }

    #[test]
    fn arc_off_its_circle_is_degenerate() {
        let mut store = TopologyStore::new();
        let a = store.add_vertex(VertexData::new(Point3::new(2.0, 0.0, 0.0)));
        let b = store.add_vertex(VertexData::new(Point3::new(-1.0, 0.0, 0.0)));
        let edge = store.add_edge(EdgeData {
            start: a,
            end: b,
            curve: EdgeCurve::Arc {
                center: Point3::origin(),
                radius: 1.0,
            },
            t_start: 0.0,
            t_end: PI,
        });

        let err = Length::new(Shape::forward(edge)).execute(&store).unwrap_err();
        assert!(matches!(err, crate::TopolisError::Geometry(GeometryError::Degenerate(_))));
    }

    #[test]
    fn solid_has_no_length() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        assert!(Length::new(Shape::forward(solid)).execute(&store).is_err());
    }
}
