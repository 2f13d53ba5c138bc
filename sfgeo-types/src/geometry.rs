//! The geometry type tags and the closed [`Geometry`] enum over all concrete variants.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::collection::{GeometryCollection, MultiLineString, MultiPoint, MultiPolygon};
use crate::curve::{CircularString, CompoundCurve, LineString};
use crate::error::SfgeoTypesError;
use crate::point::Point;
use crate::surface::{CurvePolygon, PolyhedralSurface, Polygon, Tin, Triangle};

/// Tag identifying a geometry type by its OGC name.
///
/// Includes the abstract categories `Geometry`, `Curve` and `Surface` and the ambiguous
/// collection subtypes `MultiCurve` and `MultiSurface`; none of these five has a concrete
/// [`Geometry`] variant of its own.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    /// Abstract root type.
    Geometry,
    /// A single position.
    Point,
    /// Straight-segment curve.
    LineString,
    /// Planar surface with linear rings.
    Polygon,
    /// Homogeneous collection of points.
    MultiPoint,
    /// Homogeneous collection of line strings.
    MultiLineString,
    /// Homogeneous collection of polygons.
    MultiPolygon,
    /// Heterogeneous collection of geometries.
    GeometryCollection,
    /// Abstract collection of curves.
    MultiCurve,
    /// Abstract collection of surfaces.
    MultiSurface,
    /// Abstract one-dimensional type.
    Curve,
    /// Abstract two-dimensional type.
    Surface,
    /// Surface with curve rings.
    CurvePolygon,
    /// Concatenation of simple curves.
    CompoundCurve,
    /// Circular-arc curve.
    CircularString,
    /// Contiguous polygon surface.
    PolyhedralSurface,
    /// Triangulated irregular network.
    Tin,
    /// Polygon with a single four-point ring.
    Triangle,
}

impl GeometryType {
    /// The upper-case OGC name of the type, as it appears in WKT.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Geometry => "GEOMETRY",
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
            GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
            GeometryType::MultiCurve => "MULTICURVE",
            GeometryType::MultiSurface => "MULTISURFACE",
            GeometryType::Curve => "CURVE",
            GeometryType::Surface => "SURFACE",
            GeometryType::CurvePolygon => "CURVEPOLYGON",
            GeometryType::CompoundCurve => "COMPOUNDCURVE",
            GeometryType::CircularString => "CIRCULARSTRING",
            GeometryType::PolyhedralSurface => "POLYHEDRALSURFACE",
            GeometryType::Tin => "TIN",
            GeometryType::Triangle => "TRIANGLE",
        }
    }

    /// Finds a geometry type by its OGC name. Matching is case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        const ALL: [GeometryType; 18] = [
            GeometryType::Geometry,
            GeometryType::Point,
            GeometryType::LineString,
            GeometryType::Polygon,
            GeometryType::MultiPoint,
            GeometryType::MultiLineString,
            GeometryType::MultiPolygon,
            GeometryType::GeometryCollection,
            GeometryType::MultiCurve,
            GeometryType::MultiSurface,
            GeometryType::Curve,
            GeometryType::Surface,
            GeometryType::CurvePolygon,
            GeometryType::CompoundCurve,
            GeometryType::CircularString,
            GeometryType::PolyhedralSurface,
            GeometryType::Tin,
            GeometryType::Triangle,
        ];

        ALL.into_iter().find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Returns true for the abstract categories that cannot be instantiated directly.
    pub fn is_abstract(&self) -> bool {
        matches!(
            self,
            GeometryType::Geometry | GeometryType::Curve | GeometryType::Surface
        )
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Any concrete simple-features geometry.
///
/// The tree below a geometry is exclusively owned: containers own their members and no node is
/// shared. Equality is deep structural equality including member order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// A single position.
    Point(Point),
    /// Straight-segment curve.
    LineString(LineString),
    /// Planar surface with linear rings.
    Polygon(Polygon),
    /// Homogeneous collection of points.
    MultiPoint(MultiPoint),
    /// Homogeneous collection of line strings.
    MultiLineString(MultiLineString),
    /// Homogeneous collection of polygons.
    MultiPolygon(MultiPolygon),
    /// Heterogeneous collection of geometries.
    GeometryCollection(GeometryCollection),
    /// Circular-arc curve.
    CircularString(CircularString),
    /// Concatenation of simple curves.
    CompoundCurve(CompoundCurve),
    /// Surface with curve rings.
    CurvePolygon(CurvePolygon),
    /// Contiguous polygon surface.
    PolyhedralSurface(PolyhedralSurface),
    /// Triangulated irregular network.
    Tin(Tin),
    /// Polygon with a single four-point ring.
    Triangle(Triangle),
}

impl Geometry {
    /// The type tag of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
            Geometry::CircularString(_) => GeometryType::CircularString,
            Geometry::CompoundCurve(_) => GeometryType::CompoundCurve,
            Geometry::CurvePolygon(_) => GeometryType::CurvePolygon,
            Geometry::PolyhedralSurface(_) => GeometryType::PolyhedralSurface,
            Geometry::Tin(_) => GeometryType::Tin,
            Geometry::Triangle(_) => GeometryType::Triangle,
        }
    }

    /// Returns true if the geometry has Z ordinates.
    pub fn has_z(&self) -> bool {
        match self {
            Geometry::Point(v) => v.has_z(),
            Geometry::LineString(v) => v.has_z(),
            Geometry::Polygon(v) => v.has_z(),
            Geometry::MultiPoint(v) => v.has_z(),
            Geometry::MultiLineString(v) => v.has_z(),
            Geometry::MultiPolygon(v) => v.has_z(),
            Geometry::GeometryCollection(v) => v.has_z(),
            Geometry::CircularString(v) => v.has_z(),
            Geometry::CompoundCurve(v) => v.has_z(),
            Geometry::CurvePolygon(v) => v.has_z(),
            Geometry::PolyhedralSurface(v) => v.has_z(),
            Geometry::Tin(v) => v.has_z(),
            Geometry::Triangle(v) => v.has_z(),
        }
    }

    /// Returns true if the geometry has M ordinates.
    pub fn has_m(&self) -> bool {
        match self {
            Geometry::Point(v) => v.has_m(),
            Geometry::LineString(v) => v.has_m(),
            Geometry::Polygon(v) => v.has_m(),
            Geometry::MultiPoint(v) => v.has_m(),
            Geometry::MultiLineString(v) => v.has_m(),
            Geometry::MultiPolygon(v) => v.has_m(),
            Geometry::GeometryCollection(v) => v.has_m(),
            Geometry::CircularString(v) => v.has_m(),
            Geometry::CompoundCurve(v) => v.has_m(),
            Geometry::CurvePolygon(v) => v.has_m(),
            Geometry::PolyhedralSurface(v) => v.has_m(),
            Geometry::Tin(v) => v.has_m(),
            Geometry::Triangle(v) => v.has_m(),
        }
    }

    /// Returns true if the geometry has no members (a point is never empty).
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(_) => false,
            Geometry::LineString(v) => v.is_empty(),
            Geometry::Polygon(v) => v.is_empty(),
            Geometry::MultiPoint(v) => v.is_empty(),
            Geometry::MultiLineString(v) => v.is_empty(),
            Geometry::MultiPolygon(v) => v.is_empty(),
            Geometry::GeometryCollection(v) => v.is_empty(),
            Geometry::CircularString(v) => v.is_empty(),
            Geometry::CompoundCurve(v) => v.is_empty(),
            Geometry::CurvePolygon(v) => v.is_empty(),
            Geometry::PolyhedralSurface(v) => v.is_empty(),
            Geometry::Tin(v) => v.is_empty(),
            Geometry::Triangle(v) => v.is_empty(),
        }
    }

    /// Returns true if the geometry is one of the one-dimensional (curve) variants.
    pub fn is_curve(&self) -> bool {
        matches!(
            self,
            Geometry::LineString(_) | Geometry::CircularString(_) | Geometry::CompoundCurve(_)
        )
    }

    /// Returns true if the geometry is one of the two-dimensional (surface) variants.
    pub fn is_surface(&self) -> bool {
        matches!(
            self,
            Geometry::Polygon(_)
                | Geometry::CurvePolygon(_)
                | Geometry::PolyhedralSurface(_)
                | Geometry::Tin(_)
                | Geometry::Triangle(_)
        )
    }
}

// From/TryFrom between the enum and every concrete variant. The macro keeps the boilerplate in
// one place; the error names the variant the caller expected.
macro_rules! impl_geometry_conversions {
    ($($variant:ident => $t:ty, $expected:literal),* $(,)?) => {
        $(
            impl From<$t> for Geometry {
                fn from(value: $t) -> Self {
                    Geometry::$variant(value)
                }
            }

            impl TryFrom<Geometry> for $t {
                type Error = SfgeoTypesError;

                fn try_from(value: Geometry) -> Result<Self, Self::Error> {
                    match value {
                        Geometry::$variant(v) => Ok(v),
                        other => Err(SfgeoTypesError::Conversion {
                            expected: $expected,
                            actual: other.geometry_type(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_geometry_conversions! {
    Point => Point, "POINT",
    LineString => LineString, "LINESTRING",
    Polygon => Polygon, "POLYGON",
    MultiPoint => MultiPoint, "MULTIPOINT",
    MultiLineString => MultiLineString, "MULTILINESTRING",
    MultiPolygon => MultiPolygon, "MULTIPOLYGON",
    GeometryCollection => GeometryCollection, "GEOMETRYCOLLECTION",
    CircularString => CircularString, "CIRCULARSTRING",
    CompoundCurve => CompoundCurve, "COMPOUNDCURVE",
    CurvePolygon => CurvePolygon, "CURVEPOLYGON",
    PolyhedralSurface => PolyhedralSurface, "POLYHEDRALSURFACE",
    Tin => Tin, "TIN",
    Triangle => Triangle, "TRIANGLE",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(
            GeometryType::from_name("point"),
            Some(GeometryType::Point)
        );
        assert_eq!(
            GeometryType::from_name("GeometryCollection"),
            Some(GeometryType::GeometryCollection)
        );
        assert_eq!(GeometryType::from_name("TIN"), Some(GeometryType::Tin));
        assert_eq!(GeometryType::from_name("SQUARE"), None);
    }

    #[test]
    fn abstract_types() {
        assert!(GeometryType::Geometry.is_abstract());
        assert!(GeometryType::Curve.is_abstract());
        assert!(GeometryType::Surface.is_abstract());
        assert!(!GeometryType::MultiCurve.is_abstract());
        assert!(!GeometryType::Point.is_abstract());
    }

    #[test]
    fn variant_conversions() {
        let geometry: Geometry = Point::new(1.0, 2.0).into();
        assert_eq!(geometry.geometry_type(), GeometryType::Point);

        let point = Point::try_from(geometry.clone());
        assert_eq!(point, Ok(Point::new(1.0, 2.0)));

        let err = LineString::try_from(geometry).unwrap_err();
        assert!(err.to_string().contains("LINESTRING"));
        assert!(err.to_string().contains("POINT"));
    }

    #[test]
    fn curve_and_surface_categories() {
        assert!(Geometry::LineString(LineString::new(false, false)).is_curve());
        assert!(Geometry::CompoundCurve(CompoundCurve::new(false, false)).is_curve());
        assert!(!Geometry::Point(Point::new(0.0, 0.0)).is_curve());

        assert!(Geometry::Polygon(Polygon::new(false, false)).is_surface());
        assert!(Geometry::Triangle(Triangle::new(false, false)).is_surface());
        assert!(!Geometry::LineString(LineString::new(false, false)).is_surface());
    }
}
