use super::shape::Oriented;
use super::shell::ShellId;

slotmap::new_key_type! {
    /// Key of a solid record in a [`super::TopologyStore`].
    pub struct SolidId;
}

/// A solid record: one outer shell plus reversed shells around voids.
///
/// Children are listed outer shell first.
#[derive(Debug, Clone)]
pub struct SolidData {
    pub outer_shell: Oriented<ShellId>,
    pub inner_shells: Vec<Oriented<ShellId>>,
}

impl SolidData {
    /// A solid without voids.
    #[must_use]
    pub fn new(outer_shell: Oriented<ShellId>) -> Self {
        Self {
            outer_shell,
            inner_shells: Vec::new(),
        }
    }
}
