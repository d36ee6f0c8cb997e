use crate::math::Point3;

use super::kind::Orientation;
use super::shape::Shape;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// The geometric curve carried by an edge.
///
/// The payload is not interpreted by exploration; only the measure
/// queries read it.
#[derive(Debug, Clone)]
pub enum EdgeCurve {
    /// A straight segment between the edge's vertices.
    Line,
    /// A circular arc; `t_start`/`t_end` are angles in radians.
    Arc {
        /// Center of the supporting circle.
        center: Point3,
        /// Radius of the supporting circle.
        radius: f64,
    },
}

/// Data associated with a topological edge.
///
/// An edge references exactly two vertex occurrences: `start` as a
/// `Forward` occurrence and `end` as a `Reversed` one. A closed edge has
/// `start == end`.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// The geometric curve defining this edge's shape.
    pub curve: EdgeCurve,
    /// Parameter on the curve corresponding to the start vertex.
    pub t_start: f64,
    /// Parameter on the curve corresponding to the end vertex.
    pub t_end: f64,
}

impl EdgeData {
    /// Creates a straight edge between two vertices, parameterized by arc length.
    #[must_use]
    pub fn line(start: VertexId, end: VertexId, length: f64) -> Self {
        Self {
            start,
            end,
            curve: EdgeCurve::Line,
            t_start: 0.0,
            t_end: length,
        }
    }

    /// Returns `true` if both ends are the same vertex.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.start == self.end
    }

    /// The vertex occurrences of this edge in its own frame.
    #[must_use]
    pub fn vertex_occurrences(&self) -> [Shape; 2] {
        [
            Shape::new(self.start, Orientation::Forward),
            Shape::new(self.end, Orientation::Reversed),
        ]
    }

    /// The vertex reached first when traversing the edge with `orientation`.
    #[must_use]
    pub fn leading_vertex(&self, orientation: Orientation) -> VertexId {
        if orientation == Orientation::Reversed {
            self.end
        } else {
            self.start
        }
    }

    /// The vertex reached last when traversing the edge with `orientation`.
    #[must_use]
    pub fn trailing_vertex(&self, orientation: Orientation) -> VertexId {
        if orientation == Orientation::Reversed {
            self.start
        } else {
            self.end
        }
    }
}
