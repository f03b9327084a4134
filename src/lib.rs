//! A library that draws uniformly-distributed random points inside simple
//! polygons, such as country borders.
//!
//! # Crate Layout
//!
//! Geoscatter exposes a [`Sample`] trait, which is in turn implemented by
//! sampling algorithms.  See its documentation for more details.  The trait
//! is generic around its input, which means algorithms can draw points from
//! different descriptions of the same region (a pre-built triangulation, a
//! raw polygon ring, or a multi-part geometry).
//!
//! The sampling pipeline is the classic two-step construction:
//!
//! 1. [triangulate] the polygon once, by ear clipping;
//! 2. for each point, pick a triangle with probability proportional to its
//!    area and map a uniform sample of the unit right triangle onto it
//!    ([UniformArea]).
//!
//! Conditioned on the polygon, the density of every output point is uniform
//! over the polygon's area.
//!
//! Country boundaries are held in a read-only [`Atlas`], built once at
//! startup from whatever loader decodes the boundary dataset, and safe to
//! share across threads without locking afterwards.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    rust_2018_idioms
)]

mod algorithms;
mod atlas;
mod geometry;

pub use crate::algorithms::*;
pub use crate::atlas::Atlas;
pub use crate::atlas::Country;
pub use crate::atlas::MultiPolygon;
pub use crate::atlas::Ring;
pub use crate::geometry::signed_area;
pub use crate::geometry::Point2D;
pub use crate::geometry::Triangle;

pub use nalgebra;
pub use rand;

use std::cmp::Ordering;

/// The `Sample` trait allows for drawing random points from a region.
///
/// Sampling algorithms implement this trait.
///
/// The generic argument `M` defines the input of the algorithms (e.g. a
/// polygon ring or a set of triangles).
///
/// The output buffer length is the requested point count; each call fills
/// it entirely with freshly drawn points.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), geoscatter::Error> {
/// use geoscatter::Point2D;
/// use geoscatter::Sample as _;
///
/// let ring = [
///     Point2D::new(0.0, 0.0),
///     Point2D::new(2.0, 0.0),
///     Point2D::new(2.0, 1.0),
///     Point2D::new(0.0, 1.0),
/// ];
/// let mut points = [Point2D::origin(); 10];
///
/// geoscatter::UniformArea { rng: rand::thread_rng() }
///     .sample(&mut points, &ring[..])?;
///
/// assert!(points.iter().all(|p| 0.0 <= p.x && p.x <= 2.0));
/// # Ok(())
/// # }
/// ```
pub trait Sample<M> {
    /// Diagnostic data returned for a specific run of the algorithm.
    type Metadata;

    /// Error details, should the algorithm fail to run.
    type Error;

    /// Fill `points` with independent random points drawn from `region`.
    fn sample(
        &mut self,
        points: &mut [Point2D],
        region: M,
    ) -> Result<Self::Metadata, Self::Error>;
}

fn partial_cmp<W>(a: &W, b: &W) -> Ordering
where
    W: PartialOrd,
{
    if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}
