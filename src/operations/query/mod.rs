mod area;
mod length;
mod measure;

pub use area::Area;
pub use length::Length;
pub use measure::{measure, Measure};
