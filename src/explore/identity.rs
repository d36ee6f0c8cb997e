use crate::topology::{Orientation, Shape, ShapeId};

/// How occurrences of the same entity are deduplicated.
///
/// A box traversed face by face meets each of its 12 edges twice, once
/// `Forward` and once `Reversed`. `Ignore` counts 12 distinct edges,
/// `Respect` counts 24 distinct oriented edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrientationMode {
    /// Deduplicate by underlying entity only.
    #[default]
    Ignore,
    /// Deduplicate by entity and orientation.
    Respect,
}

/// Hashable identity of a shape occurrence under an [`OrientationMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    id: ShapeId,
    orientation: Option<Orientation>,
}

impl IdentityKey {
    /// Derives the identity of `shape` under `mode`.
    #[must_use]
    pub fn of(shape: Shape, mode: OrientationMode) -> Self {
        let orientation = match mode {
            OrientationMode::Ignore => None,
            OrientationMode::Respect => Some(shape.orientation()),
        };
        Self {
            id: shape.id(),
            orientation,
        }
    }

    /// The underlying entity.
    #[must_use]
    pub fn id(&self) -> ShapeId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::EdgeId;
    use slotmap::SlotMap;

    #[test]
    fn ignore_merges_opposite_orientations() {
        let mut map: SlotMap<EdgeId, ()> = SlotMap::with_key();
        let edge = Shape::forward(map.insert(()));
        let rev = edge.reversed();

        assert_eq!(
            IdentityKey::of(edge, OrientationMode::Ignore),
            IdentityKey::of(rev, OrientationMode::Ignore)
        );
        assert_ne!(
            IdentityKey::of(edge, OrientationMode::Respect),
            IdentityKey::of(rev, OrientationMode::Respect)
        );
        assert_eq!(IdentityKey::of(rev, OrientationMode::Respect).id(), edge.id());
    }

    #[test]
    fn default_mode_ignores_orientation() {
        assert_eq!(OrientationMode::default(), OrientationMode::Ignore);
    }
}
