use std::fmt;

mod ear_clipping;
mod uniform_area;

pub use ear_clipping::triangulate;
pub use uniform_area::Metadata as UaMetadata;
pub use uniform_area::UniformArea;

/// Common errors thrown by algorithms.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A ring needs at least three distinct vertices to enclose any area.
    TooFewVertices { actual: usize },

    /// The polygon encloses no area to draw points from.
    DegeneratePolygon,

    /// The geometry has no ring at all.
    EmptyGeometry,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TooFewVertices { actual } => write!(
                f,
                "a ring needs at least 3 distinct vertices, got {actual}",
            ),
            Error::DegeneratePolygon => write!(f, "polygon encloses no area"),
            Error::EmptyGeometry => write!(f, "geometry has no ring"),
        }
    }
}

impl std::error::Error for Error {}
