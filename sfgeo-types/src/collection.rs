//! Homogeneous and heterogeneous geometry collections, and the extended collection wrapper that
//! resolves the abstract OGC collection subtypes.

use serde::{Deserialize, Serialize};

use crate::curve::LineString;
use crate::geometry::{Geometry, GeometryType};
use crate::point::Point;
use crate::surface::Polygon;

/// A collection of points.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint {
    points: Vec<Point>,
    has_z: bool,
    has_m: bool,
}

impl MultiPoint {
    /// Creates a new empty multi point with the given dimension flags.
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            points: vec![],
            has_z,
            has_m,
        }
    }

    /// Creates a multi point from the given points, deriving the Z/M flags from the members.
    pub fn from_points(points: Vec<Point>) -> Self {
        let has_z = points.iter().any(|p| p.has_z());
        let has_m = points.iter().any(|p| p.has_m());
        Self {
            points,
            has_z,
            has_m,
        }
    }

    /// Appends a point.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Member points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of member points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the collection has no members.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the collection has Z ordinates.
    pub fn has_z(&self) -> bool {
        self.has_z
    }

    /// Returns true if the collection has M ordinates.
    pub fn has_m(&self) -> bool {
        self.has_m
    }
}

/// A collection of line strings.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    has_z: bool,
    has_m: bool,
}

impl MultiLineString {
    /// Creates a new empty multi line string with the given dimension flags.
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            line_strings: vec![],
            has_z,
            has_m,
        }
    }

    /// Creates a multi line string from the given members, deriving the Z/M flags from them.
    pub fn from_line_strings(line_strings: Vec<LineString>) -> Self {
        let has_z = line_strings.iter().any(|l| l.has_z());
        let has_m = line_strings.iter().any(|l| l.has_m());
        Self {
            line_strings,
            has_z,
            has_m,
        }
    }

    /// Appends a line string.
    pub fn add_line_string(&mut self, line_string: LineString) {
        self.line_strings.push(line_string);
    }

    /// Member line strings.
    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    /// Number of member line strings.
    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }

    /// Returns true if the collection has no members.
    pub fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }

    /// Returns true if the collection has Z ordinates.
    pub fn has_z(&self) -> bool {
        self.has_z
    }

    /// Returns true if the collection has M ordinates.
    pub fn has_m(&self) -> bool {
        self.has_m
    }
}

/// A collection of polygons.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    has_z: bool,
    has_m: bool,
}

impl MultiPolygon {
    /// Creates a new empty multi polygon with the given dimension flags.
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            polygons: vec![],
            has_z,
            has_m,
        }
    }

    /// Creates a multi polygon from the given polygons, deriving the Z/M flags from the members.
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

    /// Member polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Number of member polygons.
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// Returns true if the collection has no members.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Returns true if the collection has Z ordinates.
    pub fn has_z(&self) -> bool {
        self.has_z
    }

    /// Returns true if the collection has M ordinates.
    pub fn has_m(&self) -> bool {
        self.has_m
    }
}

/// A heterogeneous collection of geometries.
///
/// `MULTICURVE` and `MULTISURFACE` WKT documents parse into this structural form; the abstract
/// label is recovered afterwards by [`GeometryCollection::collection_type`] or
/// [`ExtendedGeometryCollection`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    has_z: bool,
    has_m: bool,
}

impl GeometryCollection {
    /// Creates a new empty collection with the given dimension flags.
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            geometries: vec![],
            has_z,
            has_m,
        }
    }

    /// Creates a collection from the given members, deriving the Z/M flags from them.
    pub fn from_geometries(geometries: Vec<Geometry>) -> Self {
        let has_z = geometries.iter().any(|g| g.has_z());
        let has_m = geometries.iter().any(|g| g.has_m());
        Self {
            geometries,
            has_z,
            has_m,
        }
    }

    /// Appends a geometry.
    pub fn add_geometry(&mut self, geometry: Geometry) {
        self.geometries.push(geometry);
    }

    /// Member geometries.
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// Number of member geometries.
    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    /// Returns true if the collection has no members.
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// Returns true if the collection has Z ordinates.
    pub fn has_z(&self) -> bool {
        self.has_z
    }

    /// Returns true if the collection has M ordinates.
    pub fn has_m(&self) -> bool {
        self.has_m
    }

    /// Returns true if every member is a point. Trivially true for an empty collection.
    pub fn is_multi_point(&self) -> bool {
        self.geometries
            .iter()
            .all(|g| matches!(g, Geometry::Point(_)))
    }

    /// Returns true if every member is a line string. Trivially true for an empty collection.
    pub fn is_multi_line_string(&self) -> bool {
        self.geometries
            .iter()
            .all(|g| matches!(g, Geometry::LineString(_)))
    }

    /// Returns true if every member is a polygon. Trivially true for an empty collection.
    pub fn is_multi_polygon(&self) -> bool {
        self.geometries
            .iter()
            .all(|g| matches!(g, Geometry::Polygon(_)))
    }

    /// Returns true if every member is a curve variant. Trivially true for an empty collection.
    pub fn is_multi_curve(&self) -> bool {
        self.geometries.iter().all(|g| g.is_curve())
    }

    /// Returns true if every member is a surface variant. Trivially true for an empty collection.
    pub fn is_multi_surface(&self) -> bool {
        self.geometries.iter().all(|g| g.is_surface())
    }

    /// Classifies the collection into the most specific collection subtype consistent with its
    /// members. First match wins, in the order multi point, multi line string, multi polygon,
    /// multi curve, multi surface, plain geometry collection.
    ///
    /// An empty collection classifies as [`GeometryType::MultiPoint`]. With no members there is
    /// no structural evidence for any label; this default is a policy choice kept for
    /// compatibility.
    pub fn collection_type(&self) -> GeometryType {
        if self.is_multi_point() {
            GeometryType::MultiPoint
        } else if self.is_multi_line_string() {
            GeometryType::MultiLineString
        } else if self.is_multi_polygon() {
            GeometryType::MultiPolygon
        } else if self.is_multi_curve() {
            GeometryType::MultiCurve
        } else if self.is_multi_surface() {
            GeometryType::MultiSurface
        } else {
            GeometryType::GeometryCollection
        }
    }
}

/// A [`GeometryCollection`] re-labeled with the narrowest abstract OGC collection subtype its
/// members allow.
///
/// The label is computed once at construction and is one of `GEOMETRYCOLLECTION`, `MULTICURVE`
/// or `MULTISURFACE`; homogeneous classifications map onto the nearest abstract label
/// (all line strings is still a multi curve, all polygons a multi surface, all points a plain
/// collection) since the concrete multi types have their own structural representation. The
/// wrapper owns the collection and does not duplicate its storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedGeometryCollection {
    collection: GeometryCollection,
    geometry_type: GeometryType,
}

impl ExtendedGeometryCollection {
    /// Wraps the collection, resolving the abstract subtype label from its members.
    pub fn new(collection: GeometryCollection) -> Self {
        let geometry_type = match collection.collection_type() {
            GeometryType::MultiPoint => GeometryType::GeometryCollection,
            GeometryType::MultiLineString | GeometryType::MultiCurve => GeometryType::MultiCurve,
            GeometryType::MultiPolygon | GeometryType::MultiSurface => GeometryType::MultiSurface,
            _ => GeometryType::GeometryCollection,
        };
        Self {
            collection,
            geometry_type,
        }
    }

    /// The resolved abstract collection subtype.
    pub fn geometry_type(&self) -> GeometryType {
        self.geometry_type
    }

    /// The wrapped collection.
    pub fn collection(&self) -> &GeometryCollection {
        &self.collection
    }

    /// Unwraps into the underlying collection.
    pub fn into_inner(self) -> GeometryCollection {
        self.collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{CircularString, CompoundCurve};
    use crate::surface::CurvePolygon;

    fn line_string() -> Geometry {
        Geometry::LineString(LineString::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
        ]))
    }

    fn polygon() -> Geometry {
        Geometry::Polygon(Polygon::from_rings(vec![LineString::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0),
        ])]))
    }

    #[test]
    fn points_classify_as_multi_point() {
        let collection = GeometryCollection::from_geometries(vec![
            Geometry::Point(Point::new(0.0, 0.0)),
            Geometry::Point(Point::new(1.0, 1.0)),
        ]);
        assert_eq!(collection.collection_type(), GeometryType::MultiPoint);
    }

    #[test]
    fn empty_collection_classifies_as_multi_point() {
        // No members means no structural evidence; MultiPoint is the documented default.
        let collection = GeometryCollection::new(false, false);
        assert_eq!(collection.collection_type(), GeometryType::MultiPoint);
    }

    #[test]
    fn mixed_curves_classify_as_multi_curve() {
        let collection = GeometryCollection::from_geometries(vec![
            line_string(),
            Geometry::CircularString(CircularString::from_points(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 0.0),
            ])),
            Geometry::CompoundCurve(CompoundCurve::new(false, false)),
        ]);
        assert_eq!(collection.collection_type(), GeometryType::MultiCurve);
    }

    #[test]
    fn mixed_surfaces_classify_as_multi_surface() {
        let collection = GeometryCollection::from_geometries(vec![
            polygon(),
            Geometry::CurvePolygon(CurvePolygon::new(false, false)),
        ]);
        assert_eq!(collection.collection_type(), GeometryType::MultiSurface);
    }

    #[test]
    fn heterogeneous_members_stay_generic() {
        let collection = GeometryCollection::from_geometries(vec![
            Geometry::Point(Point::new(0.0, 0.0)),
            polygon(),
        ]);
        assert_eq!(
            collection.collection_type(),
            GeometryType::GeometryCollection
        );
    }

    #[test]
    fn extended_labels() {
        let curves = GeometryCollection::from_geometries(vec![line_string(), line_string()]);
        assert_eq!(
            ExtendedGeometryCollection::new(curves).geometry_type(),
            GeometryType::MultiCurve
        );

        let surfaces = GeometryCollection::from_geometries(vec![polygon()]);
        assert_eq!(
            ExtendedGeometryCollection::new(surfaces).geometry_type(),
            GeometryType::MultiSurface
        );

        let points = GeometryCollection::from_geometries(vec![Geometry::Point(Point::new(
            0.0, 0.0,
        ))]);
        assert_eq!(
            ExtendedGeometryCollection::new(points).geometry_type(),
            GeometryType::GeometryCollection
        );

        let mixed = GeometryCollection::from_geometries(vec![
            Geometry::Point(Point::new(0.0, 0.0)),
            line_string(),
        ]);
        assert_eq!(
            ExtendedGeometryCollection::new(mixed).geometry_type(),
            GeometryType::GeometryCollection
        );
    }

    #[test]
    fn serde_round_trip() {
        let collection = GeometryCollection::from_geometries(vec![
            Geometry::Point(Point::new_z(1.0, 2.0, 3.0)),
            line_string(),
        ]);
        let json = serde_json::to_string(&collection).expect("serialization failed");
        let back: GeometryCollection = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(collection, back);
    }
}
