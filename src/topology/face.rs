use crate::math::{Point3, Vector3};

use super::shape::{Oriented, Shape};
use super::wire::WireId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// The geometric surface associated with a face.
#[derive(Debug, Clone)]
pub enum FaceSurface {
    /// A planar surface.
    Plane {
        /// A point on the plane.
        origin: Point3,
        /// Unit normal of the plane.
        normal: Vector3,
    },
    /// A cylindrical surface.
    Cylinder {
        /// A point on the axis.
        origin: Point3,
        /// Unit axis direction.
        axis: Vector3,
        /// Cylinder radius.
        radius: f64,
    },
}

/// Data associated with a topological face.
///
/// A face is a bounded region on a surface, defined by an outer wire
/// and optionally inner wires (holes).
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The geometric surface on which this face lies.
    pub surface: FaceSurface,
    /// The outer boundary wire.
    pub outer_wire: Oriented<WireId>,
    /// Inner boundary wires (holes).
    pub inner_wires: Vec<Oriented<WireId>>,
    /// Standalone edges or vertices embedded in the face.
    pub free_members: Vec<Shape>,
}

impl FaceData {
    /// Creates a face bounded by a single outer wire.
    #[must_use]
    pub fn new(surface: FaceSurface, outer_wire: Oriented<WireId>) -> Self {
        Self {
            surface,
            outer_wire,
            inner_wires: Vec::new(),
            free_members: Vec::new(),
        }
    }
}
