use std::collections::{HashMap, HashSet};

use crate::error::TopologyError;
use crate::topology::{Orientation, Shape, ShapeId, ShapeKind, TopologyStore};

use super::explorer::Entities;
use super::identity::{IdentityKey, OrientationMode};

/// How a target kind relates to a source kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Targets are contained within the source.
    Descendant,
    /// Targets contain or border the source.
    Ancestor,
    /// No relationship is defined for the pair.
    Unsupported,
}

const D: Relation = Relation::Descendant;
const A: Relation = Relation::Ancestor;
const U: Relation = Relation::Unsupported;

/// `RELATIONS[source][target]`, indexed by [`ShapeKind::index`].
///
/// Columns: Vertex, Edge, Wire, Face, Shell, Solid, CompSolid, Compound.
const RELATIONS: [[Relation; 8]; 8] = [
    [U, A, A, A, U, U, U, U], // Vertex
    [D, U, A, A, U, U, U, U], // Edge
    [D, D, U, A, U, U, U, U], // Wire
    [D, D, D, U, A, A, U, U], // Face
    [D, D, D, D, U, A, U, U], // Shell
    [D, D, D, D, D, U, A, U], // Solid
    [D, D, D, D, D, D, U, U], // CompSolid
    [D, D, D, D, D, D, D, U], // Compound
];

/// Looks up the relationship between a source kind and a target kind.
#[must_use]
pub fn relation(source: ShapeKind, target: ShapeKind) -> Relation {
    RELATIONS[source.index()][target.index()]
}

/// Per-entity related occurrences, one list per target kind.
#[derive(Debug, Default)]
struct Links {
    related: [Vec<Shape>; 8],
}

/// Adjacency between every entity under a root and the entities of every
/// other kind it contains or is contained by.
///
/// Lookups are structural: any orientation of a source finds the same
/// entry. Descendants are the distinct sub-shapes of the source itself,
/// in structural order and expressed in the frame of the queried
/// occurrence. Ancestors are collected over every position the source
/// holds under the root, in discovery order, and carry the orientation of
/// the occurrence recorded first, relative to the root. Both are
/// deduplicated under the index's [`OrientationMode`].
#[derive(Debug)]
pub struct AdjacencyIndex {
    mode: OrientationMode,
    links: HashMap<ShapeId, Links>,
}

impl AdjacencyIndex {
    /// Builds the index with a single depth-first walk over every
    /// structural position under `root`.
    ///
    /// An entity reached through several parents registers adjacency to
    /// each of them.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidShape`] if a reference under `root`
    /// does not resolve in `store`.
    pub fn build(
        store: &TopologyStore,
        root: Shape,
        mode: OrientationMode,
    ) -> Result<Self, TopologyError> {
        let mut builder = Builder {
            store,
            mode,
            links: HashMap::new(),
            seen: HashSet::new(),
            path: Vec::new(),
        };
        builder.visit(root)?;

        tracing::debug!(
            entities = builder.links.len(),
            ancestor_links = builder.seen.len(),
            ?mode,
            "built adjacency index"
        );

        Ok(Self {
            mode,
            links: builder.links,
        })
    }

    /// The identity mode the index was built with.
    #[must_use]
    pub fn mode(&self) -> OrientationMode {
        self.mode
    }

    /// Returns `true` if `shape` was reached while building the index.
    #[must_use]
    pub fn contains(&self, shape: Shape) -> bool {
        self.links.contains_key(&shape.id())
    }

    /// Entities of kind `target` related to `source`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::UnsupportedPair`] if no relationship is
    /// defined between the two kinds, and [`TopologyError::InvalidShape`]
    /// if `source` is not under the indexed root.
    pub fn query(&self, source: Shape, target: ShapeKind) -> Result<Adjacent<'_>, TopologyError> {
        let frame = match relation(source.kind(), target) {
            Relation::Descendant => source.orientation(),
            Relation::Ancestor => Orientation::Forward,
            Relation::Unsupported => {
                return Err(TopologyError::UnsupportedPair {
                    from: source.kind(),
                    to: target,
                });
            }
        };
        let links = self.links.get(&source.id()).ok_or_else(|| {
            TopologyError::InvalidShape(format!(
                "{} is not part of the explored root",
                source.kind()
            ))
        })?;
        Ok(Adjacent {
            shapes: links.related[target.index()].iter(),
            frame,
        })
    }

    /// Number of entities [`AdjacencyIndex::query`] would return.
    ///
    /// # Errors
    ///
    /// Same as [`AdjacencyIndex::query`].
    pub fn count(&self, source: Shape, target: ShapeKind) -> Result<usize, TopologyError> {
        self.query(source, target).map(|related| related.len())
    }
}

/// Lazy sequence of related shapes returned by [`AdjacencyIndex::query`].
#[derive(Debug, Clone)]
pub struct Adjacent<'i> {
    shapes: std::slice::Iter<'i, Shape>,
    /// Orientation every stored occurrence is composed with.
    frame: Orientation,
}

impl Iterator for Adjacent<'_> {
    type Item = Shape;

    fn next(&mut self) -> Option<Shape> {
        self.shapes.next().map(|s| s.composed(self.frame))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.shapes.size_hint()
    }
}

impl DoubleEndedIterator for Adjacent<'_> {
    fn next_back(&mut self) -> Option<Shape> {
        self.shapes.next_back().map(|s| s.composed(self.frame))
    }
}

impl ExactSizeIterator for Adjacent<'_> {}

struct Builder<'a> {
    store: &'a TopologyStore,
    mode: OrientationMode,
    links: HashMap<ShapeId, Links>,
    /// `(owner, ancestor)` pairs already recorded.
    seen: HashSet<(ShapeId, IdentityKey)>,
    /// Occurrences from the root down to the current parent.
    path: Vec<Shape>,
}

impl Builder<'_> {
    fn visit(&mut self, shape: Shape) -> Result<(), TopologyError> {
        let children = self.store.children(shape)?;
        if !self.links.contains_key(&shape.id()) {
            let local = self.descendants(shape.id());
            self.links.insert(shape.id(), local);
        }

        for i in 0..self.path.len() {
            let ancestor = self.path[i];
            if self.seen.insert((shape.id(), IdentityKey::of(ancestor, self.mode))) {
                if let Some(links) = self.links.get_mut(&shape.id()) {
                    links.related[ancestor.kind().index()].push(ancestor);
                }
            }
        }

        self.path.push(shape);
        for child in children {
            self.visit(child)?;
        }
        self.path.pop();
        Ok(())
    }

    /// Distinct sub-shapes of `id` per lower kind, seen from its `Forward`
    /// occurrence.
    fn descendants(&self, id: ShapeId) -> Links {
        let own = Shape::forward(id);
        let mut links = Links::default();
        for target in ShapeKind::ALL.into_iter().filter(|&k| k < own.kind()) {
            links.related[target.index()] =
                Entities::new(self.store, own, target, self.mode).collect();
        }
        links
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;

    fn unit_box(store: &mut TopologyStore) -> Shape {
        Shape::forward(
            MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
                .execute(store)
                .unwrap(),
        )
    }

    #[test]
    fn relation_table_examples() {
        assert_eq!(relation(ShapeKind::Wire, ShapeKind::Edge), Relation::Descendant);
        assert_eq!(relation(ShapeKind::Edge, ShapeKind::Face), Relation::Ancestor);
        assert_eq!(relation(ShapeKind::Face, ShapeKind::Solid), Relation::Ancestor);
        assert_eq!(relation(ShapeKind::Vertex, ShapeKind::Solid), Relation::Unsupported);
        assert_eq!(relation(ShapeKind::Face, ShapeKind::Face), Relation::Unsupported);
        assert_eq!(relation(ShapeKind::Edge, ShapeKind::Compound), Relation::Unsupported);
    }

    #[test]
    fn descendant_entries_are_below_source() {
        for source in ShapeKind::ALL {
            for target in ShapeKind::ALL {
                match relation(source, target) {
                    Relation::Descendant => assert!(target < source),
                    Relation::Ancestor => assert!(target > source),
                    Relation::Unsupported => {}
                }
            }
        }
    }

    #[test]
    fn box_edge_borders_two_faces() {
        let mut store = TopologyStore::new();
        let root = unit_box(&mut store);
        let index = AdjacencyIndex::build(&store, root, OrientationMode::Ignore).unwrap();

        let face = index.query(root, ShapeKind::Face).unwrap().next().unwrap();
        let edges = index.query(face, ShapeKind::Edge).unwrap();
        assert_eq!(edges.len(), 4);
        for edge in edges {
            assert_eq!(index.count(edge, ShapeKind::Face).unwrap(), 2);
            assert_eq!(index.count(edge, ShapeKind::Vertex).unwrap(), 2);
        }
    }

    #[test]
    fn lookup_ignores_source_orientation() {
        let mut store = TopologyStore::new();
        let root = unit_box(&mut store);
        let index = AdjacencyIndex::build(&store, root, OrientationMode::Respect).unwrap();

        let edge = index.query(root, ShapeKind::Edge).unwrap().next().unwrap();
        let forward: Vec<Shape> = index.query(edge, ShapeKind::Face).unwrap().collect();
        let reversed: Vec<Shape> = index.query(edge.reversed(), ShapeKind::Face).unwrap().collect();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn unsupported_pair_is_not_empty_result() {
        let mut store = TopologyStore::new();
        let root = unit_box(&mut store);
        let index = AdjacencyIndex::build(&store, root, OrientationMode::Ignore).unwrap();
        let vertex = index.query(root, ShapeKind::Vertex).unwrap().next().unwrap();

        assert_eq!(
            index.query(vertex, ShapeKind::Solid).unwrap_err(),
            TopologyError::UnsupportedPair {
                from: ShapeKind::Vertex,
                to: ShapeKind::Solid,
            }
        );
        assert_eq!(index.count(root, ShapeKind::CompSolid), Ok(0));
    }

    #[test]
    fn respecting_orientation_keeps_edge_vertices_local() {
        let mut store = TopologyStore::new();
        let root = unit_box(&mut store);
        let index = AdjacencyIndex::build(&store, root, OrientationMode::Respect).unwrap();

        for edge in index.query(root, ShapeKind::Edge).unwrap() {
            let vertices: Vec<Shape> = index.query(edge, ShapeKind::Vertex).unwrap().collect();
            assert_eq!(vertices.len(), 2);
            assert!(!vertices[0].is_same(&vertices[1]));
        }
    }

    #[test]
    fn shape_outside_root_is_invalid() {
        let mut store = TopologyStore::new();
        let root = unit_box(&mut store);
        let other = unit_box(&mut store);
        let index = AdjacencyIndex::build(&store, root, OrientationMode::Ignore).unwrap();

        assert!(index.contains(root));
        assert!(!index.contains(other));
        assert!(matches!(
            index.query(other, ShapeKind::Face),
            Err(TopologyError::InvalidShape(_))
        ));
    }
}
