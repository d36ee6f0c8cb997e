use crate::error::{Result, TopologyError};
use crate::topology::{EdgeId, Orientation, Oriented, Shape, TopologyStore, WireData, WireId};

use super::classify::downcast_to;

/// Ordered traversal of a single wire.
///
/// Unlike [`super::TopologyExplorer`], nothing is deduplicated: edges come
/// back exactly as authored in the wire, and a vertex shared by two
/// consecutive edges is reported once per edge.
///
/// A `Reversed` wire is walked back to front with every edge reversed, so
/// the result is still a connected chain.
#[derive(Debug, Clone)]
pub struct LocalWireExplorer<'a> {
    store: &'a TopologyStore,
    wire: Oriented<WireId>,
    data: &'a WireData,
    closed: bool,
}

impl<'a> LocalWireExplorer<'a> {
    /// Creates an explorer over `wire`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::KindMismatch`] if `wire` is not a wire and
    /// [`TopologyError::InvalidShape`] if it or one of its edges is not in
    /// `store`.
    pub fn new(store: &'a TopologyStore, wire: Shape) -> Result<Self> {
        let wire = downcast_to::<WireId>(wire)?;
        store.check(wire.shape())?;
        let data = store.wire(wire.id)?;

        let mut explorer = Self {
            store,
            wire,
            data,
            closed: false,
        };
        explorer.closed = explorer.ends()?.is_some_and(|(first, last)| first.is_same(&last));
        Ok(explorer)
    }

    /// The explored wire.
    #[must_use]
    pub fn wire(&self) -> Shape {
        self.wire.shape()
    }

    /// Returns `true` if the chain ends where it starts.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of edges in the wire.
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.data.edges.len()
    }

    /// Edges in connectivity order, oriented relative to the wire.
    #[must_use]
    pub fn ordered_edges(&self) -> OrderedEdges<'a> {
        OrderedEdges {
            edges: self.data.edges.iter(),
            wire_orientation: self.wire.orientation,
        }
    }

    /// Vertices in connectivity order.
    ///
    /// Yields the leading vertex of every edge (as `Forward`), then, for
    /// an open chain, the trailing vertex of the last edge (as `Reversed`):
    /// `n + 1` vertices for `n` open edges, `n` for a closed loop.
    #[must_use]
    pub fn ordered_vertices(&self) -> OrderedVertices<'a> {
        OrderedVertices {
            store: self.store,
            edges: self.ordered_edges(),
            closed: self.closed,
            tail: None,
        }
    }

    /// Leading vertex of the first edge and trailing vertex of the last.
    fn ends(&self) -> Result<Option<(Shape, Shape)>> {
        let mut edges = self.ordered_edges();
        let (Some(first), Some(last)) = (edges.clone().next(), edges.next_back()) else {
            return Ok(None);
        };
        let (lead, _) = endpoints(self.store, first)?;
        let (_, trail) = endpoints(self.store, last)?;
        Ok(Some((lead, trail)))
    }
}

/// Leading (`Forward`) and trailing (`Reversed`) vertex of an edge occurrence.
fn endpoints(
    store: &TopologyStore,
    edge: Shape,
) -> std::result::Result<(Shape, Shape), TopologyError> {
    let oriented = downcast_to::<EdgeId>(edge)?;
    let data = store.edge(oriented.id)?;
    Ok((
        Shape::new(data.leading_vertex(oriented.orientation), Orientation::Forward),
        Shape::new(data.trailing_vertex(oriented.orientation), Orientation::Reversed),
    ))
}

/// Edges of a wire in connectivity order. See [`LocalWireExplorer::ordered_edges`].
#[derive(Debug, Clone)]
pub struct OrderedEdges<'a> {
    edges: std::slice::Iter<'a, Oriented<EdgeId>>,
    wire_orientation: Orientation,
}

impl OrderedEdges<'_> {
    fn reversed_wire(&self) -> bool {
        self.wire_orientation == Orientation::Reversed
    }

    fn compose(&self, edge: Oriented<EdgeId>) -> Shape {
        edge.shape().composed(self.wire_orientation)
    }
}

impl Iterator for OrderedEdges<'_> {
    type Item = Shape;

    fn next(&mut self) -> Option<Shape> {
        let edge = if self.reversed_wire() {
            self.edges.next_back()
        } else {
            self.edges.next()
        };
        edge.map(|&e| self.compose(e))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl DoubleEndedIterator for OrderedEdges<'_> {
    fn next_back(&mut self) -> Option<Shape> {
        let edge = if self.reversed_wire() {
            self.edges.next()
        } else {
            self.edges.next_back()
        };
        edge.map(|&e| self.compose(e))
    }
}

impl ExactSizeIterator for OrderedEdges<'_> {}

/// Vertices of a wire in connectivity order. See [`LocalWireExplorer::ordered_vertices`].
#[derive(Debug, Clone)]
pub struct OrderedVertices<'a> {
    store: &'a TopologyStore,
    edges: OrderedEdges<'a>,
    closed: bool,
    tail: Option<Shape>,
}

impl Iterator for OrderedVertices<'_> {
    type Item = Shape;

    fn next(&mut self) -> Option<Shape> {
        if let Some(edge) = self.edges.next() {
            // Edges were resolved when the wire explorer was created.
            let (lead, trail) = endpoints(self.store, edge).ok()?;
            self.tail = Some(trail);
            return Some(lead);
        }
        if self.closed {
            None
        } else {
            self.tail.take()
        }
    }
}
