pub mod creation;
pub mod query;

use crate::error::{Result, TopologyError};
use crate::explore::{downcast_to, LocalWireExplorer};
use crate::math::Point3;
use crate::topology::{Shape, TopologyStore, VertexId};

/// Collects vertex positions from a closed wire in traversal order.
fn loop_points(store: &TopologyStore, wire: Shape) -> Result<Vec<Point3>> {
    let explorer = LocalWireExplorer::new(store, wire)?;
    if !explorer.is_closed() {
        return Err(TopologyError::WireNotClosed.into());
    }
    explorer
        .ordered_vertices()
        .map(|v| {
            let id = downcast_to::<VertexId>(v)?.id;
            Ok(store.vertex(id)?.point)
        })
        .collect()
}
