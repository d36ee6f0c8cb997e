use crate::error::{GeometryError, Result};
use crate::explore::SpecificShape;
use crate::math::Point3;
use crate::topology::TopologyStore;

use super::{Area, Length};

/// The natural measure of a shape, chosen by its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    /// Position of a vertex.
    Point(Point3),
    /// Length of an edge or wire.
    Length(f64),
    /// Area of a face or total area of a shell.
    Area(f64),
}

/// Measures a shape according to its concrete kind.
///
/// # Errors
///
/// Returns [`GeometryError::Unsupported`] for solids, composite solids and
/// compounds, and propagates errors from [`Length`] and [`Area`].
pub fn measure(store: &TopologyStore, shape: &SpecificShape) -> Result<Measure> {
    match *shape {
        SpecificShape::Vertex(v) => Ok(Measure::Point(store.vertex(v.id)?.point)),
        SpecificShape::Edge(_) | SpecificShape::Wire(_) => {
            Length::new(shape.shape()).execute(store).map(Measure::Length)
        }
        SpecificShape::Face(_) => Area::new(shape.shape()).execute(store).map(Measure::Area),
        SpecificShape::Shell(s) => store
            .shell(s.id)?
            .faces
            .iter()
            .map(|face| Area::new(face.shape()).execute(store))
            .sum::<Result<f64>>()
            .map(Measure::Area),
        SpecificShape::Solid(_) | SpecificShape::CompSolid(_) | SpecificShape::Compound(_) => {
            Err(GeometryError::Unsupported(format!("measure of a {}", shape.kind())).into())
        }
    }
}
