//! Recursive-descent Well-Known Text reader.
//!
//! Each grammar production has its own function. Filtering happens inline while the tree is
//! built: a member rejected by the [`GeometryFilter`] is discarded before it is attached to its
//! parent, so a filtered-out point never appears in the output.

use sfgeo_types::{
    CircularString, CompoundCurve, Curve, CurvePolygon, Geometry, GeometryCollection,
    GeometryFilter, GeometryType, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    PolyhedralSurface, Polygon, SimpleCurve, Tin, Triangle,
};

use crate::error::SfgeoWktError;
use crate::text_reader::TextReader;

/// Geometry type name and dimension suffix read from the head of a WKT document.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GeometryTypeInfo {
    /// The named geometry type.
    pub geometry_type: GeometryType,
    /// True if the document declared a Z dimension.
    pub has_z: bool,
    /// True if the document declared an M dimension.
    pub has_m: bool,
}

/// Reads a geometry from well-known text.
///
/// Returns `Ok(None)` only for `POINT EMPTY`, which has no representation in the model; every
/// other `EMPTY` document produces an empty instance of its type.
///
/// Nesting depth is bounded only by the call stack; an adversarially deep document can overflow
/// it.
pub fn read_geometry(text: &str) -> Result<Option<Geometry>, SfgeoWktError> {
    read_geometry_from(&mut TextReader::new(text), None)
}

/// Reads a geometry from well-known text, discarding members rejected by the filter.
///
/// Returns `Ok(None)` if the root geometry itself is rejected, or for `POINT EMPTY`.
pub fn read_geometry_filtered(
    text: &str,
    filter: &dyn GeometryFilter,
) -> Result<Option<Geometry>, SfgeoWktError> {
    read_geometry_from(&mut TextReader::new(text), Some(filter))
}

/// Reads a geometry from a token stream.
pub fn read_geometry_from(
    reader: &mut TextReader,
    filter: Option<&dyn GeometryFilter>,
) -> Result<Option<Geometry>, SfgeoWktError> {
    read_geometry_member(reader, filter, None)
}

fn read_geometry_member(
    reader: &mut TextReader,
    filter: Option<&dyn GeometryFilter>,
    containing_type: Option<GeometryType>,
) -> Result<Option<Geometry>, SfgeoWktError> {
    let GeometryTypeInfo {
        geometry_type,
        has_z,
        has_m,
    } = read_geometry_type(reader)?;

    let geometry = match geometry_type {
        GeometryType::Geometry | GeometryType::Curve | GeometryType::Surface => {
            return Err(SfgeoWktError::AbstractGeometryType(geometry_type))
        }
        GeometryType::Point => read_point_text(reader, has_z, has_m)?.map(Geometry::Point),
        GeometryType::LineString => Some(Geometry::LineString(read_line_string(
            reader, filter, has_z, has_m,
        )?)),
        GeometryType::Polygon => Some(Geometry::Polygon(read_polygon(
            reader, filter, has_z, has_m,
        )?)),
        GeometryType::MultiPoint => Some(Geometry::MultiPoint(read_multi_point(
            reader, filter, has_z, has_m,
        )?)),
        GeometryType::MultiLineString => Some(Geometry::MultiLineString(read_multi_line_string(
            reader, filter, has_z, has_m,
        )?)),
        GeometryType::MultiPolygon => Some(Geometry::MultiPolygon(read_multi_polygon(
            reader, filter, has_z, has_m,
        )?)),
        GeometryType::GeometryCollection
        | GeometryType::MultiCurve
        | GeometryType::MultiSurface => Some(Geometry::GeometryCollection(
            read_geometry_collection(reader, filter, has_z, has_m)?,
        )),
        GeometryType::CircularString => Some(Geometry::CircularString(read_circular_string(
            reader, filter, has_z, has_m,
        )?)),
        GeometryType::CompoundCurve => Some(Geometry::CompoundCurve(read_compound_curve(
            reader, filter, has_z, has_m,
        )?)),
        GeometryType::CurvePolygon => Some(Geometry::CurvePolygon(read_curve_polygon(
            reader, filter, has_z, has_m,
        )?)),
        GeometryType::PolyhedralSurface => Some(Geometry::PolyhedralSurface(
            read_polyhedral_surface(reader, filter, has_z, has_m)?,
        )),
        GeometryType::Tin => Some(Geometry::Tin(read_tin(reader, filter, has_z, has_m)?)),
        GeometryType::Triangle => Some(Geometry::Triangle(read_triangle(
            reader, filter, has_z, has_m,
        )?)),
    };

    Ok(geometry.filter(|g| passes_filter(filter, containing_type, g)))
}

/// Reads the geometry type name and the optional `Z`/`M`/`ZM` dimension suffix.
pub fn read_geometry_type(reader: &mut TextReader) -> Result<GeometryTypeInfo, SfgeoWktError> {
    let name = reader.next_token().ok_or(SfgeoWktError::UnexpectedEnd)?;
    let geometry_type = GeometryType::from_name(&name)
        .ok_or(SfgeoWktError::UnsupportedGeometryType(name))?;

    let next = reader.peek_token().ok_or(SfgeoWktError::UnexpectedEnd)?;

    let mut has_z = false;
    let mut has_m = false;
    match next.to_ascii_uppercase().as_str() {
        "Z" => has_z = true,
        "M" => has_m = true,
        "ZM" => {
            has_z = true;
            has_m = true;
        }
        "(" | "EMPTY" => {}
        value => {
            return Err(SfgeoWktError::InvalidDimensionValue {
                geometry_type,
                value: value.to_string(),
            })
        }
    }

    if has_z || has_m {
        reader.next_token();
    }

    Ok(GeometryTypeInfo {
        geometry_type,
        has_z,
        has_m,
    })
}

/// Reads a bare coordinate tuple: `x y [z] [m]` per the dimension flags.
pub fn read_point(
    reader: &mut TextReader,
    has_z: bool,
    has_m: bool,
) -> Result<Point, SfgeoWktError> {
    let x = reader.next_double()?;
    let y = reader.next_double()?;

    let mut point = Point::new(x, y);
    if has_z {
        point.set_z(Some(reader.next_double()?));
    }
    if has_m {
        point.set_m(Some(reader.next_double()?));
    }

    Ok(point)
}

/// Reads a parenthesized point body: `( x y [z] [m] )` or `EMPTY`.
pub fn read_point_text(
    reader: &mut TextReader,
    has_z: bool,
    has_m: bool,
) -> Result<Option<Point>, SfgeoWktError> {
    if !left_parenthesis_or_empty(reader)? {
        return Ok(None);
    }
    let point = read_point(reader, has_z, has_m)?;
    right_parenthesis(reader)?;
    Ok(Some(point))
}

/// Reads a line string body.
pub fn read_line_string(
    reader: &mut TextReader,
    filter: Option<&dyn GeometryFilter>,
    has_z: bool,
    has_m: bool,
) -> Result<LineString, SfgeoWktError> {
    let mut line_string = LineString::new(has_z, has_m);
    if left_parenthesis_or_empty(reader)? {
        loop {
            let point = read_point(reader, has_z, has_m)?;
            if let Some(point) = filter_member(filter, GeometryType::LineString, point) {
                line_string.add_point(point);
            }
            if !comma_or_right_parenthesis(reader)? {
                break;
            }
        }
    }
    Ok(line_string)
}

/// Reads a circular string body.
pub fn read_circular_string(
    reader: &mut TextReader,
    filter: Option<&dyn GeometryFilter>,
    has_z: bool,
    has_m: bool,
) -> Result<CircularString, SfgeoWktError> {
    let mut circular_string = CircularString::new(has_z, has_m);
    if left_parenthesis_or_empty(reader)? {
        loop {
            let point = read_point(reader, has_z, has_m)?;
            if let Some(point) = filter_member(filter, GeometryType::CircularString, point) {
                circular_string.add_point(point);
            }
            if !comma_or_right_parenthesis(reader)? {
                break;
            }
        }
    }
    Ok(circular_string)
}

/// Reads a polygon body.
pub fn read_polygon(
    reader: &mut TextReader,
    filter: Option<&dyn GeometryFilter>,
    has_z: bool,
    has_m: bool,
) -> Result<Polygon, SfgeoWktError> {
    let mut polygon = Polygon::new(has_z, has_m);
    if left_parenthesis_or_empty(reader)? {
        loop {
            let ring = read_line_string(reader, filter, has_z, has_m)?;
            if let Some(ring) = filter_member(filter, GeometryType::Polygon, ring) {
                polygon.add_ring(ring);
            }
            if !comma_or_right_parenthesis(reader)? {
                break;
            }
        }
    }
    Ok(polygon)
}

/// Reads a multi point body. Member points are parenthesized: `((x y), (x y))`.
pub fn read_multi_point(
    reader: &mut TextReader,
    filter: Option<&dyn GeometryFilter>,
    has_z: bool,
    has_m: bool,
) -> Result<MultiPoint, SfgeoWktError> {
    let mut multi_point = MultiPoint::new(has_z, has_m);
    if left_parenthesis_or_empty(reader)? {
        loop {
            if let Some(point) = read_point_text(reader, has_z, has_m)? {
                if let Some(point) = filter_member(filter, GeometryType::MultiPoint, point) {
                    multi_point.add_point(point);
                }
            }
            if !comma_or_right_parenthesis(reader)? {
                break;
            }
        }
    }
    Ok(multi_point)
}

/// Reads a multi line string body.
pub fn read_multi_line_string(
    reader: &mut TextReader,
    filter: Option<&dyn GeometryFilter>,
    has_z: bool,
    has_m: bool,
) -> Result<MultiLineString, SfgeoWktError> {
    let mut multi_line_string = MultiLineString::new(has_z, has_m);
    if left_parenthesis_or_empty(reader)? {
        loop {
            let line_string = read_line_string(reader, filter, has_z, has_m)?;
            if let Some(line_string) =
                filter_member(filter, GeometryType::MultiLineString, line_string)
            {
                multi_line_string.add_line_string(line_string);
            }
            if !comma_or_right_parenthesis(reader)? {
                break;
            }
        }
    }
    Ok(multi_line_string)
}

/// Reads a multi polygon body.
pub fn read_multi_polygon(
    reader: &mut TextReader,
    filter: Option<&dyn GeometryFilter>,
    has_z: bool,
    has_m: bool,
) -> Result<MultiPolygon, SfgeoWktError> {
    let mut multi_polygon = MultiPolygon::new(has_z, has_m);
    if left_parenthesis_or_empty(reader)? {
        loop {
            let polygon = read_polygon(reader, filter, has_z, has_m)?;
            if let Some(polygon) = filter_member(filter, GeometryType::MultiPolygon, polygon) {
                multi_polygon.add_polygon(polygon);
            }
            if !comma_or_right_parenthesis(reader)? {
                break;
            }
        }
    }
    Ok(multi_polygon)
}

/// Reads a geometry collection body. `MULTICURVE` and `MULTISURFACE` documents share this
/// production; the abstract label is recovered afterwards from the member types.
pub fn read_geometry_collection(
    reader: &mut TextReader,
    filter: Option<&dyn GeometryFilter>,
    has_z: bool,
    has_m: bool,
) -> Result<GeometryCollection, SfgeoWktError> {
    let mut collection = GeometryCollection::new(has_z, has_m);
    if left_parenthesis_or_empty(reader)? {
        loop {
            let geometry =
                read_geometry_member(reader, filter, Some(GeometryType::GeometryCollection))?;
            if let Some(geometry) = geometry {
                collection.add_geometry(geometry);
            }
            if !comma_or_right_parenthesis(reader)? {
                break;
            }
        }
    }
    Ok(collection)
}

/// Reads a compound curve body. Members are named geometries and must be line strings or
/// circular strings.
pub fn read_compound_curve(
    reader: &mut TextReader,
    filter: Option<&dyn GeometryFilter>,
    has_z: bool,
    has_m: bool,
) -> Result<CompoundCurve, SfgeoWktError> {
    let mut compound_curve = CompoundCurve::new(has_z, has_m);
    if left_parenthesis_or_empty(reader)? {
        loop {
            let geometry =
                read_geometry_member(reader, filter, Some(GeometryType::CompoundCurve))?;
            if let Some(geometry) = geometry {
                compound_curve.add_curve(SimpleCurve::try_from(geometry)?);
            }
            if !comma_or_right_parenthesis(reader)? {
                break;
            }
        }
    }
    Ok(compound_curve)
}

/// Reads a curve polygon body. Rings are named geometries and must be curve variants.
pub fn read_curve_polygon(
    reader: &mut TextReader,
    filter: Option<&dyn GeometryFilter>,
    has_z: bool,
    has_m: bool,
) -> Result<CurvePolygon, SfgeoWktError> {
    let mut curve_polygon = CurvePolygon::new(has_z, has_m);
    if left_parenthesis_or_empty(reader)? {
        loop {
            let geometry =
                read_geometry_member(reader, filter, Some(GeometryType::CurvePolygon))?;
            if let Some(geometry) = geometry {
                curve_polygon.add_ring(Curve::try_from(geometry)?);
            }
            if !comma_or_right_parenthesis(reader)? {
                break;
            }
        }
    }
    Ok(curve_polygon)
}

/// Reads a polyhedral surface body.
pub fn read_polyhedral_surface(
    reader: &mut TextReader,
    filter: Option<&dyn GeometryFilter>,
    has_z: bool,
    has_m: bool,
) -> Result<PolyhedralSurface, SfgeoWktError> {
    let mut surface = PolyhedralSurface::new(has_z, has_m);
    if left_parenthesis_or_empty(reader)? {
        loop {
            let polygon = read_polygon(reader, filter, has_z, has_m)?;
            if let Some(polygon) = filter_member(filter, GeometryType::PolyhedralSurface, polygon)
            {
                surface.add_polygon(polygon);
            }
            if !comma_or_right_parenthesis(reader)? {
                break;
            }
        }
    }
    Ok(surface)
}

/// Reads a TIN body.
pub fn read_tin(
    reader: &mut TextReader,
    filter: Option<&dyn GeometryFilter>,
    has_z: bool,
    has_m: bool,
) -> Result<Tin, SfgeoWktError> {
    let mut tin = Tin::new(has_z, has_m);
    if left_parenthesis_or_empty(reader)? {
        loop {
            let polygon = read_polygon(reader, filter, has_z, has_m)?;
            if let Some(polygon) = filter_member(filter, GeometryType::Tin, polygon) {
                tin.add_polygon(polygon);
            }
            if !comma_or_right_parenthesis(reader)? {
                break;
            }
        }
    }
    Ok(tin)
}

/// Reads a triangle body.
pub fn read_triangle(
    reader: &mut TextReader,
    filter: Option<&dyn GeometryFilter>,
    has_z: bool,
    has_m: bool,
) -> Result<Triangle, SfgeoWktError> {
    let mut triangle = Triangle::new(has_z, has_m);
    if left_parenthesis_or_empty(reader)? {
        loop {
            let ring = read_line_string(reader, filter, has_z, has_m)?;
            if let Some(ring) = filter_member(filter, GeometryType::Triangle, ring) {
                triangle.add_ring(ring);
            }
            if !comma_or_right_parenthesis(reader)? {
                break;
            }
        }
    }
    Ok(triangle)
}

/// Reads `(` or `EMPTY`; true means the body is present.
fn left_parenthesis_or_empty(reader: &mut TextReader) -> Result<bool, SfgeoWktError> {
    let token = reader.next_token().ok_or(SfgeoWktError::UnexpectedEnd)?;
    match token.to_ascii_uppercase().as_str() {
        "EMPTY" => Ok(false),
        "(" => Ok(true),
        _ => Err(SfgeoWktError::UnexpectedToken {
            expected: "'EMPTY' or '('",
            found: token,
        }),
    }
}

/// Reads `,` or `)`; true means the member list continues.
fn comma_or_right_parenthesis(reader: &mut TextReader) -> Result<bool, SfgeoWktError> {
    let token = reader.next_token().ok_or(SfgeoWktError::UnexpectedEnd)?;
    match token.as_str() {
        "," => Ok(true),
        ")" => Ok(false),
        _ => Err(SfgeoWktError::UnexpectedToken {
            expected: "',' or ')'",
            found: token,
        }),
    }
}

fn right_parenthesis(reader: &mut TextReader) -> Result<(), SfgeoWktError> {
    let token = reader.next_token().ok_or(SfgeoWktError::UnexpectedEnd)?;
    if token != ")" {
        return Err(SfgeoWktError::UnexpectedToken {
            expected: "')'",
            found: token,
        });
    }
    Ok(())
}

fn passes_filter(
    filter: Option<&dyn GeometryFilter>,
    containing_type: Option<GeometryType>,
    geometry: &Geometry,
) -> bool {
    let Some(filter) = filter else {
        return true;
    };
    let passes = filter.filter(containing_type, geometry);
    if !passes {
        log::trace!(
            "discarded {} member of {:?}",
            geometry.geometry_type(),
            containing_type
        );
    }
    passes
}

// Runs a parsed member through the filter via its `Geometry` form and converts it back; the
// round trip through the enum is a pair of moves, not a copy of the member data.
fn filter_member<T>(
    filter: Option<&dyn GeometryFilter>,
    containing_type: GeometryType,
    member: T,
) -> Option<T>
where
    T: Into<Geometry> + TryFrom<Geometry>,
{
    let geometry = member.into();
    if passes_filter(filter, Some(containing_type), &geometry) {
        T::try_from(geometry).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfgeo_types::{build_envelope, FiniteFilterType, PointFiniteFilter};

    fn read(text: &str) -> Geometry {
        read_geometry(text)
            .expect("parse failed")
            .expect("geometry expected")
    }

    #[test]
    fn point() {
        let geometry = read("POINT (1.5 -2.5)");
        assert_eq!(geometry, Geometry::Point(Point::new(1.5, -2.5)));
        assert!(!geometry.has_z());
        assert!(!geometry.has_m());
    }

    #[test]
    fn point_with_dimensions() {
        assert_eq!(
            read("POINT Z (1 2 3)"),
            Geometry::Point(Point::new_z(1.0, 2.0, 3.0))
        );
        assert_eq!(
            read("POINT M (1 2 4)"),
            Geometry::Point(Point::new_m(1.0, 2.0, 4.0))
        );
        assert_eq!(
            read("POINT ZM (1 2 3 4)"),
            Geometry::Point(Point::new_zm(1.0, 2.0, 3.0, 4.0))
        );
        // Suffix matching is case-insensitive.
        assert_eq!(
            read("point zm (1 2 3 4)"),
            Geometry::Point(Point::new_zm(1.0, 2.0, 3.0, 4.0))
        );
    }

    #[test]
    fn high_precision_coordinates() {
        let geometry = read("POINT (3451418.006 5481808.951)");
        let Geometry::Point(point) = geometry else {
            panic!("expected a point");
        };
        approx::assert_abs_diff_eq!(point, Point::new(3451418.006, 5481808.951));
    }

    #[test]
    fn point_empty_has_no_model_form() {
        assert_eq!(read_geometry("POINT EMPTY"), Ok(None));
    }

    #[test]
    fn line_string_empty() {
        let geometry = read("LINESTRING EMPTY");
        assert_eq!(geometry, Geometry::LineString(LineString::new(false, false)));
        assert_eq!(build_envelope(&geometry), None);
    }

    #[test]
    fn line_string_with_tight_spacing() {
        let geometry = read("LINESTRING(0 0,1 1,2 2)");
        let Geometry::LineString(line_string) = geometry else {
            panic!("expected a line string");
        };
        assert_eq!(line_string.num_points(), 3);
        assert_eq!(line_string.end_point(), Some(&Point::new(2.0, 2.0)));
    }

    #[test]
    fn polygon_with_hole() {
        let geometry = read("POLYGON ((0 0, 4 0, 4 4, 0 0), (1 1, 2 1, 2 2, 1 1))");
        let Geometry::Polygon(polygon) = geometry else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.num_rings(), 2);
        assert_eq!(polygon.exterior_ring().map(|r| r.num_points()), Some(4));
    }

    #[test]
    fn multi_point_members_are_parenthesized() {
        let geometry = read("MULTIPOINT ((1 2), (3 4))");
        let Geometry::MultiPoint(multi_point) = geometry else {
            panic!("expected a multi point");
        };
        assert_eq!(
            multi_point.points(),
            &[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
        );
    }

    #[test]
    fn multi_polygon_z() {
        let geometry = read("MULTIPOLYGON Z(((0 0 0,1 0 0,1 1 0,0 0 0)))");
        assert!(geometry.has_z());
        let Geometry::MultiPolygon(multi_polygon) = geometry else {
            panic!("expected a multi polygon");
        };
        assert_eq!(multi_polygon.num_polygons(), 1);
        let polygon = &multi_polygon.polygons()[0];
        assert_eq!(polygon.num_rings(), 1);
        let ring = &polygon.rings()[0];
        assert_eq!(ring.num_points(), 4);
        for point in ring.points() {
            assert!(point.has_z());
            assert!(!point.has_m());
            assert_eq!(point.z(), Some(0.0));
        }
    }

    #[test]
    fn multi_curve_parses_to_collection() {
        let geometry = read("MULTICURVE (LINESTRING (0 0, 1 1), LINESTRING (1 1, 2 2))");
        assert_eq!(geometry.geometry_type(), GeometryType::GeometryCollection);
        let Geometry::GeometryCollection(collection) = geometry else {
            panic!("expected a collection");
        };
        assert_eq!(collection.num_geometries(), 2);
        assert_eq!(collection.collection_type(), GeometryType::MultiLineString);
    }

    #[test]
    fn multi_curve_with_compound_curve() {
        let geometry = read(
            "MULTICURVE (COMPOUNDCURVE (LINESTRING (3451418.006 5481808.951, \
             3451417.787 5481809.927, 3451409.995 5481806.744), \
             LINESTRING (3451409.995 5481806.744, 3451418.006 5481808.951)))",
        );
        let Geometry::GeometryCollection(collection) = geometry else {
            panic!("expected a collection");
        };
        assert_eq!(collection.num_geometries(), 1);
        let Geometry::CompoundCurve(compound) = &collection.geometries()[0] else {
            panic!("expected a compound curve");
        };
        assert_eq!(compound.num_curves(), 2);
        assert_eq!(
            compound.start_point(),
            Some(&Point::new(3451418.006, 5481808.951))
        );
        assert_eq!(
            compound.end_point(),
            Some(&Point::new(3451418.006, 5481808.951))
        );
    }

    #[test]
    fn curve_polygon_rings_may_be_any_curve() {
        let geometry = read(
            "CURVEPOLYGON (CIRCULARSTRING (0 0, 1 1, 2 0, 1 -1, 0 0), \
             LINESTRING (0.5 0, 1 0.5, 1.5 0, 0.5 0))",
        );
        let Geometry::CurvePolygon(curve_polygon) = geometry else {
            panic!("expected a curve polygon");
        };
        assert_eq!(curve_polygon.num_rings(), 2);
        assert_eq!(
            curve_polygon.rings()[0].geometry_type(),
            GeometryType::CircularString
        );
    }

    #[test]
    fn geometry_collection_mixed_members() {
        let geometry = read("GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1 1))");
        let Geometry::GeometryCollection(collection) = geometry else {
            panic!("expected a collection");
        };
        assert_eq!(collection.num_geometries(), 2);
        assert_eq!(
            collection.collection_type(),
            GeometryType::GeometryCollection
        );
    }

    #[test]
    fn tin_and_triangle() {
        let geometry = read("TIN Z (((0 0 0, 1 0 0, 0 1 0, 0 0 0)))");
        let Geometry::Tin(tin) = geometry else {
            panic!("expected a TIN");
        };
        assert_eq!(tin.num_polygons(), 1);

        let geometry = read("TRIANGLE ((0 0, 1 0, 0 1, 0 0))");
        let Geometry::Triangle(triangle) = geometry else {
            panic!("expected a triangle");
        };
        assert_eq!(triangle.num_rings(), 1);
        assert_eq!(triangle.rings()[0].num_points(), 4);
    }

    #[test]
    fn unknown_type_name() {
        assert_eq!(
            read_geometry("SQUARE (0 0, 1 1)"),
            Err(SfgeoWktError::UnsupportedGeometryType("SQUARE".into()))
        );
    }

    #[test]
    fn abstract_types_cannot_be_constructed() {
        assert_eq!(
            read_geometry("GEOMETRY (0 0)"),
            Err(SfgeoWktError::AbstractGeometryType(GeometryType::Geometry))
        );
        assert_eq!(
            read_geometry("CURVE (0 0, 1 1)"),
            Err(SfgeoWktError::AbstractGeometryType(GeometryType::Curve))
        );
        assert_eq!(
            read_geometry("SURFACE ((0 0, 1 1, 1 0, 0 0))"),
            Err(SfgeoWktError::AbstractGeometryType(GeometryType::Surface))
        );
    }

    #[test]
    fn invalid_dimension_suffix() {
        assert_eq!(
            read_geometry("POINT Q (1 2)"),
            Err(SfgeoWktError::InvalidDimensionValue {
                geometry_type: GeometryType::Point,
                value: "Q".into()
            })
        );
    }

    #[test]
    fn invalid_separator() {
        assert_eq!(
            read_geometry("LINESTRING (0 0; 1 1)"),
            Err(SfgeoWktError::InvalidNumber("0;".into()))
        );
        assert_eq!(
            read_geometry("MULTIPOINT ((0 0) (1 1))"),
            Err(SfgeoWktError::UnexpectedToken {
                expected: "',' or ')'",
                found: "(".into()
            })
        );
    }

    #[test]
    fn truncated_document() {
        assert_eq!(
            read_geometry("LINESTRING (0 0,"),
            Err(SfgeoWktError::UnexpectedEnd)
        );
        assert_eq!(read_geometry("POINT"), Err(SfgeoWktError::UnexpectedEnd));
    }

    #[test]
    fn compound_curve_member_must_be_simple() {
        let result = read_geometry(
            "COMPOUNDCURVE (COMPOUNDCURVE (LINESTRING (0 0, 1 1)), LINESTRING (1 1, 2 2))",
        );
        assert_eq!(
            result,
            Err(SfgeoWktError::UnexpectedGeometryType {
                expected: "LINESTRING or CIRCULARSTRING",
                actual: GeometryType::CompoundCurve
            })
        );
    }

    #[test]
    fn curve_polygon_ring_must_be_a_curve() {
        let result = read_geometry("CURVEPOLYGON (POINT (0 0))");
        assert_eq!(
            result,
            Err(SfgeoWktError::UnexpectedGeometryType {
                expected: "a curve type",
                actual: GeometryType::Point
            })
        );
    }

    #[test]
    fn finite_filter_discards_points_inline() {
        let filter = PointFiniteFilter::default();
        let geometry =
            read_geometry_filtered("LINESTRING (0 0, NaN NaN, 1 1, Infinity 2, 2 2)", &filter)
                .expect("parse failed")
                .expect("geometry expected");

        let Geometry::LineString(line_string) = geometry else {
            panic!("expected a line string");
        };
        assert_eq!(
            line_string.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0)
            ]
        );
    }

    #[test]
    fn finite_filter_modes_keep_matching_points() {
        let text = "LINESTRING (0 0, NaN 1, Infinity 2)";

        let nan_ok = PointFiniteFilter::new(FiniteFilterType::FiniteAndNan);
        let geometry = read_geometry_filtered(text, &nan_ok)
            .expect("parse failed")
            .expect("geometry expected");
        let Geometry::LineString(line_string) = geometry else {
            panic!("expected a line string");
        };
        assert_eq!(line_string.num_points(), 2);
        assert!(line_string.points()[1].x().is_nan());

        let inf_ok = PointFiniteFilter::new(FiniteFilterType::FiniteAndInfinite);
        let geometry = read_geometry_filtered(text, &inf_ok)
            .expect("parse failed")
            .expect("geometry expected");
        let Geometry::LineString(line_string) = geometry else {
            panic!("expected a line string");
        };
        assert_eq!(line_string.num_points(), 2);
        assert_eq!(line_string.points()[1].x(), f64::INFINITY);
    }

    #[test]
    fn filtered_root_geometry_is_absent() {
        let filter = PointFiniteFilter::default();
        assert_eq!(
            read_geometry_filtered("POINT (NaN 0)", &filter),
            Ok(None)
        );
    }

    #[test]
    fn filter_z_applies_only_when_enabled() {
        let text = "POINT Z (1 2 NaN)";

        let unchecked = PointFiniteFilter::default();
        assert!(read_geometry_filtered(text, &unchecked)
            .expect("parse failed")
            .is_some());

        let checked = PointFiniteFilter::default().with_filter_z(true);
        assert_eq!(read_geometry_filtered(text, &checked), Ok(None));
    }

    #[test]
    fn type_info_can_be_read_alone() {
        let mut reader = TextReader::new("MULTISURFACE ZM (...)");
        assert_eq!(
            read_geometry_type(&mut reader),
            Ok(GeometryTypeInfo {
                geometry_type: GeometryType::MultiSurface,
                has_z: true,
                has_m: true,
            })
        );
    }
}
