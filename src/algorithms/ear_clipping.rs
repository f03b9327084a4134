use super::Error;
use crate::geometry::signed_area;
use crate::geometry::Point2D;
use crate::geometry::Triangle;

/// Cross product of `b - a` and `c - a`.
///
/// Positive when `(a, b, c)` turns counter-clockwise.
fn cross(a: &Point2D, b: &Point2D, c: &Point2D) -> f64 {
    (b - a).perp(&(c - a))
}

/// Whether `p` lies strictly inside the counter-clockwise triangle
/// `(a, b, c)`.
///
/// Boundary points count as outside, so duplicated or collinear ring
/// vertices do not block ear detection.
fn strictly_inside(p: &Point2D, a: &Point2D, b: &Point2D, c: &Point2D) -> bool {
    cross(a, b, p) > 0. && cross(b, c, p) > 0. && cross(c, a, p) > 0.
}

/// Whether the `i`-th entry of `remaining` is an ear tip: a convex corner
/// whose triangle contains no other remaining vertex.
fn is_ear(ring: &[Point2D], remaining: &[usize], i: usize) -> bool {
    let n = remaining.len();
    let prev = (i + n - 1) % n;
    let next = (i + 1) % n;
    let a = &ring[remaining[prev]];
    let b = &ring[remaining[i]];
    let c = &ring[remaining[next]];

    if cross(a, b, c) < 0. {
        // Reflex corner: clipping it would cut outside the polygon.
        return false;
    }

    remaining
        .iter()
        .enumerate()
        .all(|(j, &v)| j == prev || j == i || j == next || !strictly_inside(&ring[v], a, b, c))
}

fn ear_clip(ring: &[Point2D]) -> Result<Vec<Triangle>, Error> {
    // Accept explicitly closed rings by dropping the repeated last vertex.
    let ring = match ring.split_last() {
        Some((last, open)) if open.first() == Some(last) => open,
        _ => ring,
    };
    if ring.len() < 3 {
        return Err(Error::TooFewVertices { actual: ring.len() });
    }

    // Work on indices in counter-clockwise order, whatever the input
    // winding.
    let mut remaining: Vec<usize> = if signed_area(ring) < 0. {
        (0..ring.len()).rev().collect()
    } else {
        (0..ring.len()).collect()
    };

    let mut triangles = Vec::with_capacity(ring.len() - 2);
    let mut i = 0;
    let mut miss_streak = 0;
    while remaining.len() > 3 {
        if is_ear(ring, &remaining, i) {
            let n = remaining.len();
            let triangle = Triangle::new([
                ring[remaining[(i + n - 1) % n]],
                ring[remaining[i]],
                ring[remaining[(i + 1) % n]],
            ]);
            // Collinear corners clip to zero-area slivers; drop them.
            if triangle.area() > 0. {
                triangles.push(triangle);
            }
            remaining.remove(i);
            if i >= remaining.len() {
                i = 0;
            }
            miss_streak = 0;
        } else {
            i = (i + 1) % remaining.len();
            miss_streak += 1;
            if miss_streak > remaining.len() {
                // A full turn without an ear: the ring is degenerate or
                // self-intersecting.  Stop instead of spinning; the caller
                // sees the shortfall as missing area.
                tracing::debug!(
                    left = remaining.len(),
                    "no ear found on a malformed ring"
                );
                return Ok(triangles);
            }
        }
    }

    let triangle = Triangle::new([
        ring[remaining[0]],
        ring[remaining[1]],
        ring[remaining[2]],
    ]);
    if triangle.area() > 0. {
        triangles.push(triangle);
    }

    Ok(triangles)
}

/// Decompose a simple polygon into non-overlapping triangles covering the
/// same area, by ear clipping.
///
/// `ring` is the ordered boundary of the polygon, open or with an explicit
/// closing vertex, in either winding.  The triangles' vertices are drawn
/// from the ring's vertices and their areas sum to the ring's area.  The
/// decomposition is deterministic: identical rings yield identical
/// triangles, in the same order.
///
/// Self-intersecting rings are not detected; they yield an unspecified
/// decomposition.  A zero-area ring (all vertices collinear) yields an
/// empty set, which [`UniformArea`](crate::UniformArea) then rejects as
/// [`Error::DegeneratePolygon`].
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), geoscatter::Error> {
/// use geoscatter::Point2D;
///
/// let ring = [
///     Point2D::new(0.0, 0.0),
///     Point2D::new(1.0, 0.0),
///     Point2D::new(0.0, 1.0),
/// ];
/// let triangles = geoscatter::triangulate(&ring)?;
///
/// assert_eq!(triangles.len(), 1);
/// assert_eq!(triangles[0].area(), 0.5);
/// # Ok(())
/// # }
/// ```
pub fn triangulate(ring: &[Point2D]) -> Result<Vec<Triangle>, Error> {
    let span = tracing::info_span!("triangulate", vertices = ring.len());
    let _enter = span.enter();

    let triangles = ear_clip(ring)?;
    tracing::debug!(triangle_count = triangles.len(), "clipped ears");
    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use approx::assert_ulps_eq;
    use proptest::prelude::*;

    fn total_area(triangles: &[Triangle]) -> f64 {
        triangles.iter().map(Triangle::area).sum()
    }

    #[test]
    fn right_triangle_is_its_own_decomposition() {
        let ring = [
            Point2D::new(0., 0.),
            Point2D::new(1., 0.),
            Point2D::new(0., 1.),
        ];
        let triangles = triangulate(&ring).unwrap();
        assert_eq!(triangles.len(), 1);
        assert_ulps_eq!(triangles[0].area(), 0.5);
    }

    #[test]
    fn unit_square_splits_in_two() {
        let ring = [
            Point2D::new(0., 0.),
            Point2D::new(1., 0.),
            Point2D::new(1., 1.),
            Point2D::new(0., 1.),
        ];
        let triangles = triangulate(&ring).unwrap();
        assert_eq!(triangles.len(), 2);
        assert_ulps_eq!(total_area(&triangles), 1.);
    }

    #[test]
    fn concave_l_shape_preserves_area() {
        // 2x2 square with its upper-right 1x1 quadrant removed, area 3.
        let ring = [
            Point2D::new(0., 0.),
            Point2D::new(2., 0.),
            Point2D::new(2., 1.),
            Point2D::new(1., 1.),
            Point2D::new(1., 2.),
            Point2D::new(0., 2.),
        ];
        let triangles = triangulate(&ring).unwrap();
        assert_ulps_eq!(total_area(&triangles), signed_area(&ring));
        assert_ulps_eq!(total_area(&triangles), 3.);
    }

    #[test]
    fn clockwise_and_closed_rings_are_accepted() {
        let ring = [
            Point2D::new(0., 0.),
            Point2D::new(0., 1.),
            Point2D::new(1., 1.),
            Point2D::new(1., 0.),
            Point2D::new(0., 0.),
        ];
        let triangles = triangulate(&ring).unwrap();
        assert_eq!(triangles.len(), 2);
        assert_ulps_eq!(total_area(&triangles), 1.);
    }

    #[test]
    fn collinear_vertices_are_skipped() {
        // A square with a redundant vertex in the middle of its base.
        let ring = [
            Point2D::new(0., 0.),
            Point2D::new(1., 0.),
            Point2D::new(2., 0.),
            Point2D::new(2., 2.),
            Point2D::new(0., 2.),
        ];
        let triangles = triangulate(&ring).unwrap();
        assert_ulps_eq!(total_area(&triangles), 4.);
        assert!(triangles.iter().all(|t| t.area() > 0.));
    }

    #[test]
    fn zero_area_ring_yields_no_triangle() {
        let ring = [
            Point2D::new(0., 0.),
            Point2D::new(1., 1.),
            Point2D::new(2., 2.),
        ];
        let triangles = triangulate(&ring).unwrap();
        assert!(triangles.is_empty());
    }

    #[test]
    fn too_few_vertices() {
        let ring = [Point2D::new(0., 0.), Point2D::new(1., 0.)];
        assert_eq!(
            triangulate(&ring),
            Err(Error::TooFewVertices { actual: 2 })
        );

        // A closed segment counts its distinct vertices only.
        let ring = [
            Point2D::new(0., 0.),
            Point2D::new(1., 0.),
            Point2D::new(0., 0.),
        ];
        assert_eq!(
            triangulate(&ring),
            Err(Error::TooFewVertices { actual: 2 })
        );
    }

    #[test]
    fn decomposition_is_deterministic() {
        let ring = [
            Point2D::new(0., 0.),
            Point2D::new(3., 1.),
            Point2D::new(4., 4.),
            Point2D::new(1., 3.),
            Point2D::new(2., 2.),
        ];
        assert_eq!(triangulate(&ring).unwrap(), triangulate(&ring).unwrap());
    }

    proptest!(
        #![proptest_config(ProptestConfig {
            timeout: 2000,
            ..ProptestConfig::default()
        })]

        /// Triangle areas must add up to the ring area.
        #[test]
        fn preserves_area_of_regular_polygons(
            sides in 3..64usize,
            radius in 0.1..1000.0f64,
            center_x in -180.0..180.0f64,
            center_y in -90.0..90.0f64,
        ) {
            let ring: Vec<Point2D> = (0..sides)
                .map(|i| {
                    let angle = 2. * std::f64::consts::PI * i as f64 / sides as f64;
                    Point2D::new(
                        center_x + radius * angle.cos(),
                        center_y + radius * angle.sin(),
                    )
                })
                .collect();
            let triangles = triangulate(&ring).unwrap();
            prop_assert_eq!(triangles.len(), sides - 2);
            assert_abs_diff_eq!(
                total_area(&triangles),
                signed_area(&ring),
                epsilon = 1e-9 * radius * radius,
            );
        }

        /// Concave star-shaped rings are decomposed without losing area.
        #[test]
        fn preserves_area_of_stars(
            spikes in 3..24usize,
            inner in 0.1..0.9f64,
        ) {
            let ring: Vec<Point2D> = (0..2 * spikes)
                .map(|i| {
                    let angle = std::f64::consts::PI * i as f64 / spikes as f64;
                    let r = if i % 2 == 0 { 1. } else { inner };
                    Point2D::new(r * angle.cos(), r * angle.sin())
                })
                .collect();
            let triangles = triangulate(&ring).unwrap();
            assert_abs_diff_eq!(
                total_area(&triangles),
                signed_area(&ring),
                epsilon = 1e-9,
            );
        }
    );
}
