use std::fmt;

/// The concrete topological kind of a shape.
///
/// Variants are declared from lowest to highest containment rank, so the
/// derived ordering answers "can a `b` contain an `a`?" with `a < b`
/// (compounds excepted, which may contain anything including compounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    Vertex,
    Edge,
    Wire,
    Face,
    Shell,
    Solid,
    CompSolid,
    Compound,
}

impl ShapeKind {
    /// All kinds in ascending containment rank.
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Vertex,
        ShapeKind::Edge,
        ShapeKind::Wire,
        ShapeKind::Face,
        ShapeKind::Shell,
        ShapeKind::Solid,
        ShapeKind::CompSolid,
        ShapeKind::Compound,
    ];

    /// Dense index of the kind, usable for per-kind tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` if a shape of this kind may hold shapes of `other`.
    #[must_use]
    pub fn may_contain(self, other: ShapeKind) -> bool {
        self == ShapeKind::Compound || other < self
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Vertex => "vertex",
            ShapeKind::Edge => "edge",
            ShapeKind::Wire => "wire",
            ShapeKind::Face => "face",
            ShapeKind::Shell => "shell",
            ShapeKind::Solid => "solid",
            ShapeKind::CompSolid => "compsolid",
            ShapeKind::Compound => "compound",
        };
        f.write_str(name)
    }
}

/// Orientation of a shape occurrence relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Forward,
    Reversed,
    Internal,
    External,
}

impl Orientation {
    /// Returns the opposite orientation. `Internal` and `External` are fixed points.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Forward => Orientation::Reversed,
            Orientation::Reversed => Orientation::Forward,
            other => other,
        }
    }

    /// Composes a parent orientation with a child occurrence orientation,
    /// yielding the child's orientation relative to the parent's frame.
    ///
    /// | child    | result                 |
    /// |----------|------------------------|
    /// | Forward  | `self`                 |
    /// | Reversed | `self.reversed()`      |
    /// | Internal | `Internal`             |
    /// | External | `External`             |
    #[must_use]
    pub fn compose(self, child: Orientation) -> Self {
        match child {
            Orientation::Forward => self,
            Orientation::Reversed => self.reversed(),
            Orientation::Internal | Orientation::External => child,
        }
    }
}
