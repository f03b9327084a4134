use super::ear_clipping::triangulate;
use super::Error;
use crate::atlas::MultiPolygon;
use crate::geometry::Point2D;
use crate::geometry::Triangle;
use rand::Rng;

/// Diagnostic data returned by [`UniformArea`] runs.
#[derive(Clone, Copy, Debug)]
pub struct Metadata {
    /// Index of the ring the points were drawn from.  Zero unless the input
    /// is a multi-part geometry.
    pub part: usize,

    /// Number of triangles in the sampled decomposition.
    pub triangle_count: usize,

    /// Total area of the sampled decomposition.
    pub total_area: f64,
}

/// Fill `points` from `triangles` and return the total area.
///
/// One point at a time: a triangle is picked with probability proportional
/// to its area (binary search over cumulative areas), then a uniform sample
/// of the unit square is folded onto the unit right triangle and mapped
/// affinely onto the picked triangle.
fn sample_triangles<R>(
    points: &mut [Point2D],
    triangles: &[Triangle],
    rng: &mut R,
) -> Result<f64, Error>
where
    R: Rng,
{
    let cumulative_areas: Vec<f64> = triangles
        .iter()
        .scan(0., |area_sum, triangle| {
            *area_sum += triangle.area();
            Some(*area_sum)
        })
        .collect();
    let total_area = match cumulative_areas.last() {
        Some(&total) if total > 0. => total,
        _ => return Err(Error::DegeneratePolygon),
    };
    tracing::debug!(
        triangle_count = triangles.len(),
        total_area,
        point_count = points.len(),
        "sampling triangulation"
    );

    for point in points {
        let target = rng.gen_range(0.0..total_area);
        // partial_cmp never answers Equal, so the search always yields the
        // insertion point: the first triangle whose cumulative area exceeds
        // the target.
        let (Ok(i) | Err(i)) = cumulative_areas
            .binary_search_by(|area_sum| crate::partial_cmp(area_sum, &target));
        let triangle = &triangles[i.min(triangles.len() - 1)];

        let (u, v) = (rng.gen::<f64>(), rng.gen::<f64>());
        // Fold the unit square onto the unit right triangle; the reflection
        // across the diagonal preserves uniformity.
        let (u, v) = if u + v > 1. { (1. - u, 1. - v) } else { (u, v) };
        *point = triangle.map_from_unit(u, v);
    }

    Ok(total_area)
}

/// Draw points uniformly by area.
///
/// Picks, for each output point, a triangle with probability proportional
/// to its area, then a uniformly-random point inside that triangle.  The
/// marginal distribution is uniform over the whole region: for any
/// sub-region `S`, a point lands in `S` with probability
/// `area(S) / area(region)`.
///
/// The region can be given as a pre-built triangulation (`&[Triangle]`), a
/// single polygon ring (`&[Point2D]`, triangulated once per call), or a
/// [`MultiPolygon`].  A multi-part geometry is sampled by first picking
/// *one* of its rings uniformly at random; all points of the call then come
/// from that ring, never split across parts.
///
/// The RNG is a caller-supplied field, so concurrent callers use
/// independent sources and tests can seed deterministically.
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
///     Point2D::new(1.0, 0.0),
///     Point2D::new(0.0, 1.0),
/// ];
/// let mut points = [Point2D::origin(); 8];
///
/// geoscatter::UniformArea { rng: rand::thread_rng() }
///     .sample(&mut points, &ring[..])?;
///
/// assert!(points
///     .iter()
///     .all(|p| p.x >= 0.0 && p.y >= 0.0 && p.x + p.y <= 1.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct UniformArea<R> {
    pub rng: R,
}

impl<'a, R> crate::Sample<&'a [Triangle]> for UniformArea<R>
where
    R: Rng,
{
    type Metadata = Metadata;
    type Error = Error;

    fn sample(
        &mut self,
        points: &mut [Point2D],
        triangles: &'a [Triangle],
    ) -> Result<Self::Metadata, Self::Error> {
        let total_area = sample_triangles(points, triangles, &mut self.rng)?;
        Ok(Metadata {
            part: 0,
            triangle_count: triangles.len(),
            total_area,
        })
    }
}

impl<'a, R> crate::Sample<&'a [Point2D]> for UniformArea<R>
where
    R: Rng,
{
    type Metadata = Metadata;
    type Error = Error;

    fn sample(
        &mut self,
        points: &mut [Point2D],
        ring: &'a [Point2D],
    ) -> Result<Self::Metadata, Self::Error> {
        let triangles = triangulate(ring)?;
        let total_area = sample_triangles(points, &triangles, &mut self.rng)?;
        Ok(Metadata {
            part: 0,
            triangle_count: triangles.len(),
            total_area,
        })
    }
}

impl<'a, R> crate::Sample<&'a MultiPolygon> for UniformArea<R>
where
    R: Rng,
{
    type Metadata = Metadata;
    type Error = Error;

    fn sample(
        &mut self,
        points: &mut [Point2D],
        geometry: &'a MultiPolygon,
    ) -> Result<Self::Metadata, Self::Error> {
        let rings = geometry.rings();
        if rings.is_empty() {
            return Err(Error::EmptyGeometry);
        }

        // One part per call: every point of the call comes from the same
        // ring.
        let part = self.rng.gen_range(0..rings.len());
        let triangles = triangulate(&rings[part])?;
        let total_area = sample_triangles(points, &triangles, &mut self.rng)?;
        Ok(Metadata {
            part,
            triangle_count: triangles.len(),
            total_area,
        })
    }
}
