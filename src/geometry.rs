//! A few useful geometric types

use itertools::Itertools;

/// A point of the plane.
pub type Point2D = nalgebra::Point2<f64>;

/// Signed area enclosed by `ring`, by the shoelace formula.
///
/// Positive for counter-clockwise rings, negative for clockwise ones.  The
/// ring is closed implicitly; an explicit closing vertex only contributes a
/// zero term and is harmless.
pub fn signed_area(ring: &[Point2D]) -> f64 {
    0.5 * ring
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum::<f64>()
}

/// A triangle of the plane, the unit of area-weighted sampling.
///
/// Every triangle doubles as the affine image of the canonical right
/// triangle with corners `(0, 0)`, `(1, 0)` and `(0, 1)`: see
/// [`map_from_unit`](Triangle::map_from_unit).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    vertices: [Point2D; 3],
}

impl Triangle {
    pub fn new(vertices: [Point2D; 3]) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point2D; 3] {
        &self.vertices
    }

    /// Absolute area: half the cross product of two edge vectors.
    pub fn area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        0.5 * (b - a).perp(&(c - a)).abs()
    }

    /// Affine image in this triangle of `(u, v)`, a point of the canonical
    /// right triangle: `a + u·(b - a) + v·(c - a)`.
    ///
    /// The corners `(0, 0)`, `(1, 0)` and `(0, 1)` map onto the triangle's
    /// vertices, and the map scales areas by `area() / 0.5`, so a uniform
    /// sample of the canonical triangle stays uniform in the image.
    pub fn map_from_unit(&self, u: f64, v: f64) -> Point2D {
        let [a, b, c] = &self.vertices;
        a + u * (b - a) + v * (c - a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_ulps_eq;

    #[test]
    fn test_signed_area_square() {
        let ring = [
            Point2D::new(0., 0.),
            Point2D::new(2., 0.),
            Point2D::new(2., 2.),
            Point2D::new(0., 2.),
        ];
        assert_ulps_eq!(signed_area(&ring), 4.);

        let reversed: Vec<Point2D> = ring.iter().rev().copied().collect();
        assert_ulps_eq!(signed_area(&reversed), -4.);
    }

    #[test]
    fn test_signed_area_closed_ring() {
        // GeoJSON-style rings repeat the first vertex at the end.
        let ring = [
            Point2D::new(0., 0.),
            Point2D::new(1., 0.),
            Point2D::new(1., 1.),
            Point2D::new(0., 1.),
            Point2D::new(0., 0.),
        ];
        assert_ulps_eq!(signed_area(&ring), 1.);
    }

    #[test]
    fn test_triangle_area() {
        let t = Triangle::new([
            Point2D::new(0., 0.),
            Point2D::new(1., 0.),
            Point2D::new(0., 1.),
        ]);
        assert_ulps_eq!(t.area(), 0.5);

        // Area is winding-independent.
        let t = Triangle::new([
            Point2D::new(0., 0.),
            Point2D::new(0., 1.),
            Point2D::new(1., 0.),
        ]);
        assert_ulps_eq!(t.area(), 0.5);
    }

    #[test]
    fn test_map_from_unit_corners() {
        let t = Triangle::new([
            Point2D::new(1., 1.),
            Point2D::new(4., 1.),
            Point2D::new(2., 5.),
        ]);
        assert_ulps_eq!(t.map_from_unit(0., 0.), Point2D::new(1., 1.));
        assert_ulps_eq!(t.map_from_unit(1., 0.), Point2D::new(4., 1.));
        assert_ulps_eq!(t.map_from_unit(0., 1.), Point2D::new(2., 5.));
        // The canonical centroid maps onto the centroid.
        let centroid = t.map_from_unit(1. / 3., 1. / 3.);
        assert_ulps_eq!(centroid, Point2D::new(7. / 3., 7. / 3.));
    }
}
