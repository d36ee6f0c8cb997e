use super::face::FaceId;
use super::shape::Oriented;

slotmap::new_key_type! {
    /// Key of a shell record in a [`super::TopologyStore`].
    pub struct ShellId;
}

/// A shell record: face occurrences glued along shared edges.
///
/// `is_closed` is set by the builder when every edge bounds exactly two of
/// the faces. Exploration never reads it.
#[derive(Debug, Clone)]
pub struct ShellData {
    pub faces: Vec<Oriented<FaceId>>,
    pub is_closed: bool,
}
