use std::collections::HashMap;

use crate::error::{OperationError, Result};
use crate::topology::{EdgeId, FaceId, Oriented, ShellData, ShellId, TopologyStore};

/// Creates a shell from faces.
///
/// The shell is marked closed when every edge bounds exactly two of its faces.
pub struct MakeShell {
    faces: Vec<FaceId>,
}

impl MakeShell {
    /// Creates a new `MakeShell` operation.
    #[must_use]
    pub fn new(faces: Vec<FaceId>) -> Self {
        Self { faces }
    }

    /// Executes the operation, creating the shell in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if no faces are given, or an
    /// error if a face or one of its wires is not in the store.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<ShellId> {
        if self.faces.is_empty() {
            return Err(
                OperationError::InvalidInput("a shell needs at least one face".into()).into(),
            );
        }

        let mut uses: HashMap<EdgeId, usize> = HashMap::new();
        for &face_id in &self.faces {
            let face = store.face(face_id)?;
            for wire in std::iter::once(&face.outer_wire).chain(&face.inner_wires) {
                for edge in &store.wire(wire.id)?.edges {
                    *uses.entry(edge.id).or_default() += 1;
                }
            }
        }
        let is_closed = uses.values().all(|&n| n == 2);

        Ok(store.add_shell(ShellData {
            faces: self.faces.iter().copied().map(Oriented::forward).collect(),
            is_closed,
        }))
    }
}
