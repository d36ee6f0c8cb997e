//! Enumeration and adjacency queries over a shape graph.
//!
//! [`TopologyExplorer`] enumerates the distinct sub-shapes of a root and
//! answers adjacency queries through a lazily built [`AdjacencyIndex`].
//! [`LocalWireExplorer`] walks a single wire in connectivity order.

mod adjacency;
mod classify;
mod explorer;
mod identity;
mod wire_explorer;

pub use adjacency::{relation, AdjacencyIndex, Adjacent, Relation};
pub use classify::{classify, downcast, downcast_to, SpecificShape};
pub use explorer::{Entities, ExplorerConfig, TopologyExplorer};
pub use identity::{IdentityKey, OrientationMode};
pub use wire_explorer::{LocalWireExplorer, OrderedEdges, OrderedVertices};
