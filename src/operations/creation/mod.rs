mod make_box;
mod make_compound;
mod make_face;
mod make_shell;
mod make_solid;
mod make_wire;

pub use make_box::MakeBox;
pub use make_compound::{MakeCompSolid, MakeCompound};
pub use make_face::MakeFace;
pub use make_shell::MakeShell;
pub use make_solid::MakeSolid;
pub use make_wire::MakeWire;
