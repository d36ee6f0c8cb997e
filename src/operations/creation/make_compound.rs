use crate::error::{OperationError, Result, TopologyError};
use crate::topology::{
    CompSolidData, CompSolidId, CompoundData, CompoundId, Oriented, Shape, SolidId, TopologyStore,
};

/// Groups arbitrary shapes into a compound.
pub struct MakeCompound {
    members: Vec<Shape>,
}

impl MakeCompound {
    /// Creates a new `MakeCompound` operation.
    #[must_use]
    pub fn new(members: Vec<Shape>) -> Self {
        Self { members }
    }

    /// Executes the operation, creating the compound in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidShape`] if a member is not in the store.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<CompoundId> {
        if let Some(missing) = self.members.iter().find(|m| !store.contains(**m)) {
            return Err(TopologyError::InvalidShape(format!(
                "compound member {} not found in store",
                missing.kind()
            ))
            .into());
        }
        Ok(store.add_compound(CompoundData {
            members: self.members.clone(),
        }))
    }
}

/// Joins solids into a composite solid.
pub struct MakeCompSolid {
    solids: Vec<SolidId>,
}

impl MakeCompSolid {
    /// Creates a new `MakeCompSolid` operation.
    #[must_use]
    pub fn new(solids: Vec<SolidId>) -> Self {
        Self { solids }
    }

    /// Executes the operation, creating the composite solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if no solids are given, or an
    /// error if a solid is not in the store.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<CompSolidId> {
        if self.solids.is_empty() {
            return Err(OperationError::InvalidInput(
                "a compsolid needs at least one solid".into(),
            )
            .into());
        }
        for &solid in &self.solids {
            store.solid(solid)?;
        }
        Ok(store.add_comp_solid(CompSolidData {
            solids: self.solids.iter().copied().map(Oriented::forward).collect(),
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;

    #[test]
    fn compsolid_of_two_boxes() {
        let mut store = TopologyStore::new();
        let a = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let b = MakeBox::new(Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let cs = MakeCompSolid::new(vec![a, b]).execute(&mut store).unwrap();
        assert_eq!(store.comp_solid(cs).unwrap().solids.len(), 2);
    }

    #[test]
    fn empty_compsolid_is_rejected() {
        let mut store = TopologyStore::new();
        assert!(MakeCompSolid::new(vec![]).execute(&mut store).is_err());
    }

    #[test]
    fn compound_rejects_foreign_member() {
        let mut other = TopologyStore::new();
        let foreign = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut other)
            .unwrap();
        let mut store = TopologyStore::new();
        assert!(MakeCompound::new(vec![Shape::forward(foreign)])
            .execute(&mut store)
            .is_err());
        assert!(MakeCompound::new(vec![]).execute(&mut store).is_ok());
    }
}
