use super::shape::Oriented;
use super::solid::SolidId;

slotmap::new_key_type! {
    /// Unique identifier for a composite solid in the topology store.
    pub struct CompSolidId;
}

/// A set of solids connected by their faces.
#[derive(Debug, Clone)]
pub struct CompSolidData {
    /// The member solids.
    pub solids: Vec<Oriented<SolidId>>,
}
