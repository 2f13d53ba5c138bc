//! Two-dimensional geometry types: polygons, curve polygons, polyhedral surfaces, TINs and
//! triangles.

use serde::{Deserialize, Serialize};

use crate::curve::{Curve, LineString};

/// A planar surface bounded by linear rings.
///
/// The first ring is the exterior boundary; every following ring is a hole. A polygon may be
/// empty (no rings).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    rings: Vec<LineString>,
    has_z: bool,
    has_m: bool,
}

impl Polygon {
    /// Creates a new empty polygon with the given dimension flags.
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            rings: vec![],
            has_z,
            has_m,
        }
    }

    /// Creates a polygon from the given rings, deriving the Z/M flags from the members.
    pub fn from_rings(rings: Vec<LineString>) -> Self {
        let has_z = rings.iter().any(|r| r.has_z());
        let has_m = rings.iter().any(|r| r.has_m());
        Self {
            rings,
            has_z,
            has_m,
        }
    }

    /// Appends a ring.
    pub fn add_ring(&mut self, ring: LineString) {
        self.rings.push(ring);
    }

    /// Rings of the polygon, exterior ring first.
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// Number of rings.
    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// The exterior ring, if the polygon is not empty.
    pub fn exterior_ring(&self) -> Option<&LineString> {
        self.rings.first()
    }

    /// Returns true if the polygon contains no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Total number of points over all rings.
    pub fn num_points(&self) -> usize {
        self.rings.iter().map(|r| r.num_points()).sum()
    }

    /// Returns true if the polygon has Z ordinates.
    pub fn has_z(&self) -> bool {
        self.has_z
    }

    /// Returns true if the polygon has M ordinates.
    pub fn has_m(&self) -> bool {
        self.has_m
    }
}

/// A surface whose rings may be any [`Curve`] variant, not only line strings.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePolygon {
    rings: Vec<Curve>,
    has_z: bool,
    has_m: bool,
}

impl CurvePolygon {
    /// Creates a new empty curve polygon with the given dimension flags.
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            rings: vec![],
            has_z,
            has_m,
        }
    }

    /// Creates a curve polygon from the given rings, deriving the Z/M flags from the members.
    pub fn from_rings(rings: Vec<Curve>) -> Self {
        let has_z = rings.iter().any(|r| r.has_z());
        let has_m = rings.iter().any(|r| r.has_m());
        Self {
            rings,
            has_z,
            has_m,
        }
    }

    /// Appends a ring.
    pub fn add_ring(&mut self, ring: Curve) {
        self.rings.push(ring);
    }

    /// Rings of the curve polygon, exterior ring first.
    pub fn rings(&self) -> &[Curve] {
        &self.rings
    }

    /// Number of rings.
    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// Returns true if the curve polygon contains no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Total number of points over all rings.
    pub fn num_points(&self) -> usize {
        self.rings.iter().map(|r| r.num_points()).sum()
    }

    /// Returns true if the curve polygon has Z ordinates.
    pub fn has_z(&self) -> bool {
        self.has_z
    }

    /// Returns true if the curve polygon has M ordinates.
    pub fn has_m(&self) -> bool {
        self.has_m
    }
}

/// A contiguous collection of polygons sharing common boundary segments.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolyhedralSurface {
    polygons: Vec<Polygon>,
    has_z: bool,
    has_m: bool,
}

impl PolyhedralSurface {
    /// Creates a new empty polyhedral surface with the given dimension flags.
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            polygons: vec![],
            has_z,
            has_m,
        }
    }

    /// Creates a polyhedral surface from the given polygons, deriving the Z/M flags from the
    /// members.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        let has_z = polygons.iter().any(|p| p.has_z());
        let has_m = polygons.iter().any(|p| p.has_m());
        Self {
            polygons,
            has_z,
            has_m,
        }
    }

    /// Appends a polygon.
    pub fn add_polygon(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    /// Patch polygons of the surface.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Number of patch polygons.
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// Returns true if the surface contains no polygons.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Returns true if the surface has Z ordinates.
    pub fn has_z(&self) -> bool {
        self.has_z
    }

    /// Returns true if the surface has M ordinates.
    pub fn has_m(&self) -> bool {
        self.has_m
    }
}

/// A triangulated irregular network: a polyhedral surface consisting only of triangle patches.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tin {
    polygons: Vec<Polygon>,
    has_z: bool,
    has_m: bool,
}

impl Tin {
    /// Creates a new empty TIN with the given dimension flags.
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            polygons: vec![],
            has_z,
            has_m,
        }
    }

    /// Creates a TIN from the given polygons, deriving the Z/M flags from the members.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        let has_z = polygons.iter().any(|p| p.has_z());
        let has_m = polygons.iter().any(|p| p.has_m());
        Self {
            polygons,
            has_z,
            has_m,
        }
    }

    /// Appends a patch polygon.
    pub fn add_polygon(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    /// Patch polygons of the TIN.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Number of patch polygons.
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// Returns true if the TIN contains no polygons.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Returns true if the TIN has Z ordinates.
    pub fn has_z(&self) -> bool {
        self.has_z
    }

    /// Returns true if the TIN has M ordinates.
    pub fn has_m(&self) -> bool {
        self.has_m
    }
}

/// A polygon with a single closed ring of exactly four points (first equals last).
///
/// The ring shape is a contract of the producer and is not re-validated on mutation.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    rings: Vec<LineString>,
    has_z: bool,
    has_m: bool,
}

impl Triangle {
    /// Creates a new empty triangle with the given dimension flags.
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            rings: vec![],
            has_z,
            has_m,
        }
    }

    /// Creates a triangle from the given rings, deriving the Z/M flags from the members.
    pub fn from_rings(rings: Vec<LineString>) -> Self {
        let has_z = rings.iter().any(|r| r.has_z());
        let has_m = rings.iter().any(|r| r.has_m());
        Self {
            rings,
            has_z,
            has_m,
        }
    }

    /// Appends a ring.
    pub fn add_ring(&mut self, ring: LineString) {
        self.rings.push(ring);
    }

    /// Rings of the triangle.
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// Number of rings.
    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// Returns true if the triangle contains no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Returns true if the triangle has Z ordinates.
    pub fn has_z(&self) -> bool {
        self.has_z
    }

    /// Returns true if the triangle has M ordinates.
    pub fn has_m(&self) -> bool {
        self.has_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    #[test]
    fn exterior_ring_is_first() {
        let exterior = LineString::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 0.0),
        ]);
        let hole = LineString::from_points(vec![
            Point::new(1.0, 1.0),
            Point::new(2.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(1.0, 1.0),
        ]);
        let polygon = Polygon::from_rings(vec![exterior.clone(), hole]);

        assert_eq!(polygon.num_rings(), 2);
        assert_eq!(polygon.exterior_ring(), Some(&exterior));
        assert_eq!(polygon.num_points(), 8);
    }

    #[test]
    fn empty_polygon() {
        let polygon = Polygon::new(true, false);
        assert!(polygon.is_empty());
        assert!(polygon.exterior_ring().is_none());
        assert!(polygon.has_z());
    }

    #[test]
    fn curve_polygon_rings() {
        let ring = Curve::CircularString(crate::curve::CircularString::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, -1.0),
            Point::new(0.0, 0.0),
        ]));
        let curve_polygon = CurvePolygon::from_rings(vec![ring]);
        assert_eq!(curve_polygon.num_rings(), 1);
        assert_eq!(curve_polygon.num_points(), 5);
    }
}
