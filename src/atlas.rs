//! The country-boundary dataset: a read-only atlas built once at startup.
//!
//! The atlas does not parse any geographic file format.  Whatever loader
//! decodes the boundary dataset hands over records whose geometry is
//! already a list of coordinate rings; the atlas only indexes them by ISO
//! 3166-1 alpha-3 code.  After construction it is never mutated, so it can
//! be shared across request-handling threads without locking.

use crate::geometry::Point2D;
use std::collections::HashMap;

/// An ordered sequence of coordinates forming a closed polygon boundary.
pub type Ring = Vec<Point2D>;

/// Disjoint polygon rings representing one logical region, e.g. a country
/// with islands.
///
/// Rings are exterior boundaries only; holes are not represented.
#[derive(Clone, Debug, Default)]
pub struct MultiPolygon {
    rings: Vec<Ring>,
}

impl MultiPolygon {
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }
}

impl From<Ring> for MultiPolygon {
    fn from(ring: Ring) -> Self {
        Self { rings: vec![ring] }
    }
}

/// One country record: ISO 3166-1 alpha-3 code, display name and geometry.
#[derive(Clone, Debug)]
pub struct Country {
    code: String,
    name: String,
    geometry: MultiPolygon,
}

impl Country {
    /// The code is upper-cased on construction, so lookups never depend on
    /// the loader's casing.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        geometry: MultiPolygon,
    ) -> Self {
        Self {
            code: code.into().to_uppercase(),
            name: name.into(),
            geometry,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name of the country (the dataset's admin name).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> &MultiPolygon {
        &self.geometry
    }
}

/// A read-only map from ISO 3166-1 alpha-3 code to [`Country`].
///
/// # Example
///
/// ```rust
/// use geoscatter::Atlas;
/// use geoscatter::Country;
/// use geoscatter::Point2D;
///
/// let atlas = Atlas::from_records([Country::new(
///     "VAT",
///     "Vatican",
///     vec![
///         Point2D::new(0.0, 0.0),
///         Point2D::new(1.0, 0.0),
///         Point2D::new(0.0, 1.0),
///     ]
///     .into(),
/// )]);
///
/// assert_eq!(atlas.get("vat").unwrap().name(), "Vatican");
/// assert!(atlas.get("ZZZ").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Atlas {
    countries: HashMap<String, Country>,
}

impl Atlas {
    /// Index loader-supplied records by country code.
    ///
    /// Records sharing a code keep the last occurrence.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Country>,
    {
        let countries: HashMap<String, Country> = records
            .into_iter()
            .map(|country| (country.code.clone(), country))
            .collect();
        tracing::info!(count = countries.len(), "atlas built");
        Self { countries }
    }

    /// Case-insensitive lookup by ISO 3166-1 alpha-3 code.
    ///
    /// Returns `None` for unknown codes; whether that is a hard error is
    /// the caller's policy.
    pub fn get(&self, code: &str) -> Option<&Country> {
        self.countries.get(&code.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }
}
