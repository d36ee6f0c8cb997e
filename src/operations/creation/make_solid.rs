use crate::error::{OperationError, Result};
use crate::topology::{Oriented, ShellId, SolidData, SolidId, TopologyStore};

/// Creates a solid from shells.
///
/// Inner shells bound voids and are stored reversed.
pub struct MakeSolid {
    outer_shell: ShellId,
    inner_shells: Vec<ShellId>,
}

impl MakeSolid {
    /// Creates a new `MakeSolid` operation.
    #[must_use]
    pub fn new(outer_shell: ShellId, inner_shells: Vec<ShellId>) -> Self {
        Self {
            outer_shell,
            inner_shells,
        }
    }

    /// Executes the operation, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if any shell is open.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        for &shell in std::iter::once(&self.outer_shell).chain(&self.inner_shells) {
            if !store.shell(shell)?.is_closed {
                return Err(
                    OperationError::InvalidInput("solid shells must be closed".into()).into(),
                );
            }
        }

        Ok(store.add_solid(SolidData {
            outer_shell: Oriented::forward(self.outer_shell),
            inner_shells: self
                .inner_shells
                .iter()
                .map(|&s| Oriented::forward(s).reversed())
                .collect(),
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::{MakeBox, MakeFace, MakeShell, MakeWire};

    #[test]
    fn open_shell_cannot_bound_a_solid() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
            ],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(wire, vec![]).execute(&mut store).unwrap();
        let shell = MakeShell::new(vec![face]).execute(&mut store).unwrap();

        assert!(!store.shell(shell).unwrap().is_closed);
        assert!(MakeSolid::new(shell, vec![]).execute(&mut store).is_err());
    }

    #[test]
    fn rebuilt_box_shell_is_closed_and_voids_are_reversed() {
        let mut store = TopologyStore::new();
        let outer = MakeBox::new(Point3::origin(), Point3::new(4.0, 4.0, 4.0))
            .execute(&mut store)
            .unwrap();
        let inner = MakeBox::new(Point3::new(1.0, 1.0, 1.0), Point3::new(3.0, 3.0, 3.0))
            .execute(&mut store)
            .unwrap();
        let outer_faces: Vec<_> = {
            let shell = store.solid(outer).unwrap().outer_shell.id;
            store.shell(shell).unwrap().faces.iter().map(|f| f.id).collect()
        };
        let rebuilt = MakeShell::new(outer_faces).execute(&mut store).unwrap();
        assert!(store.shell(rebuilt).unwrap().is_closed);

        let void = store.solid(inner).unwrap().outer_shell.id;
        let solid = MakeSolid::new(rebuilt, vec![void]).execute(&mut store).unwrap();
        let data = store.solid(solid).unwrap();
        assert_eq!(data.inner_shells[0].orientation, crate::topology::Orientation::Reversed);
    }
}
