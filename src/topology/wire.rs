use super::edge::EdgeId;
use super::shape::Oriented;

slotmap::new_key_type! {
    /// Unique identifier for a wire in the topology store.
    pub struct WireId;
}

/// Data associated with a topological wire.
///
/// A wire is an ordered sequence of oriented edges forming a connected path.
/// The order is the authored connectivity order and is preserved verbatim.
#[derive(Debug, Clone)]
pub struct WireData {
    /// The ordered sequence of oriented edges.
    pub edges: Vec<Oriented<EdgeId>>,
    /// Whether this wire was authored as a closed loop.
    /// [`super::TopologyStore::check`] rejects a flag that disagrees with
    /// the wire's ends.
    pub is_closed: bool,
}
