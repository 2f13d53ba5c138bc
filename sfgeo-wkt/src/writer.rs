//! Well-Known Text writer.
//!
//! Produces the canonical form: upper-case type names, a `Z`/`M`/`ZM` suffix taken from the
//! geometry's own dimension flags, a single space after the type name, the suffix and each
//! comma, and `EMPTY` for containers with no members. Reading the output back yields a
//! structurally equal geometry, and re-writing that result reproduces the text byte for byte.

use std::fmt;

use sfgeo_types::{
    CompoundCurve, Curve, CurvePolygon, ExtendedGeometryCollection, Geometry, GeometryCollection,
    GeometryType, LineString, MultiPoint, Point, Polygon,
};

/// Writes a geometry to well-known text.
pub fn write_geometry(geometry: &Geometry) -> String {
    Wkt(geometry).to_string()
}

/// Writes a collection under its resolved abstract label, e.g. `MULTICURVE` instead of
/// `GEOMETRYCOLLECTION` when every member is a curve.
pub fn write_extended_collection(extended: &ExtendedGeometryCollection) -> String {
    let collection = extended.collection();
    let mut out = String::new();
    // Infallible: fmt::Write on String never errors.
    let _ = write_header(
        &mut out,
        extended.geometry_type(),
        collection.has_z(),
        collection.has_m(),
    );
    let _ = write_geometry_collection_body(&mut out, collection);
    out
}

/// `Display` adapter rendering a geometry as well-known text.
pub struct Wkt<'a>(pub &'a Geometry);

impl fmt::Display for Wkt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_named_geometry(f, self.0)
    }
}

fn write_named_geometry(out: &mut dyn fmt::Write, geometry: &Geometry) -> fmt::Result {
    write_header(
        out,
        geometry.geometry_type(),
        geometry.has_z(),
        geometry.has_m(),
    )?;
    match geometry {
        Geometry::Point(point) => write_point_body(out, point),
        Geometry::LineString(line_string) => {
            write_point_list(out, line_string.points())
        }
        Geometry::CircularString(circular_string) => {
            write_point_list(out, circular_string.points())
        }
        Geometry::Polygon(polygon) => write_ring_list(out, polygon.rings()),
        Geometry::Triangle(triangle) => write_ring_list(out, triangle.rings()),
        Geometry::MultiPoint(multi_point) => write_multi_point_body(out, multi_point),
        Geometry::MultiLineString(multi_line_string) => {
            write_ring_list(out, multi_line_string.line_strings())
        }
        Geometry::MultiPolygon(multi_polygon) => {
            write_polygon_list(out, multi_polygon.polygons())
        }
        Geometry::PolyhedralSurface(surface) => write_polygon_list(out, surface.polygons()),
        Geometry::Tin(tin) => write_polygon_list(out, tin.polygons()),
        Geometry::CompoundCurve(compound_curve) => {
            write_compound_curve_body(out, compound_curve)
        }
        Geometry::CurvePolygon(curve_polygon) => write_curve_polygon_body(out, curve_polygon),
        Geometry::GeometryCollection(collection) => {
            write_geometry_collection_body(out, collection)
        }
    }
}

fn write_header(
    out: &mut dyn fmt::Write,
    geometry_type: GeometryType,
    has_z: bool,
    has_m: bool,
) -> fmt::Result {
    out.write_str(geometry_type.name())?;
    match (has_z, has_m) {
        (true, true) => out.write_str(" ZM")?,
        (true, false) => out.write_str(" Z")?,
        (false, true) => out.write_str(" M")?,
        (false, false) => {}
    }
    out.write_char(' ')
}

fn write_point_body(out: &mut dyn fmt::Write, point: &Point) -> fmt::Result {
    out.write_char('(')?;
    write_ordinates(out, point)?;
    out.write_char(')')
}

fn write_point_list(out: &mut dyn fmt::Write, points: &[Point]) -> fmt::Result {
    if points.is_empty() {
        return out.write_str("EMPTY");
    }
    out.write_char('(')?;
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_ordinates(out, point)?;
    }
    out.write_char(')')
}

fn write_multi_point_body(out: &mut dyn fmt::Write, multi_point: &MultiPoint) -> fmt::Result {
    if multi_point.is_empty() {
        return out.write_str("EMPTY");
    }
    out.write_char('(')?;
    for (i, point) in multi_point.points().iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_point_body(out, point)?;
    }
    out.write_char(')')
}

fn write_ring_list(out: &mut dyn fmt::Write, rings: &[LineString]) -> fmt::Result {
    if rings.is_empty() {
        return out.write_str("EMPTY");
    }
    out.write_char('(')?;
    for (i, ring) in rings.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_point_list(out, ring.points())?;
    }
    out.write_char(')')
}

fn write_polygon_list(out: &mut dyn fmt::Write, polygons: &[Polygon]) -> fmt::Result {
    if polygons.is_empty() {
        return out.write_str("EMPTY");
    }
    out.write_char('(')?;
    for (i, polygon) in polygons.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_ring_list(out, polygon.rings())?;
    }
    out.write_char(')')
}

// Compound curve members keep their type names so the reader can tell line strings from
// circular strings.
fn write_compound_curve_body(
    out: &mut dyn fmt::Write,
    compound_curve: &CompoundCurve,
) -> fmt::Result {
    if compound_curve.is_empty() {
        return out.write_str("EMPTY");
    }
    out.write_char('(')?;
    for (i, curve) in compound_curve.curves().iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_simple_curve(
            out,
            curve.geometry_type(),
            curve.points(),
            curve.has_z(),
            curve.has_m(),
        )?;
    }
    out.write_char(')')
}

fn write_curve_polygon_body(
    out: &mut dyn fmt::Write,
    curve_polygon: &CurvePolygon,
) -> fmt::Result {
    if curve_polygon.is_empty() {
        return out.write_str("EMPTY");
    }
    out.write_char('(')?;
    for (i, ring) in curve_polygon.rings().iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        match ring {
            Curve::LineString(line_string) => write_simple_curve(
                out,
                GeometryType::LineString,
                line_string.points(),
                line_string.has_z(),
                line_string.has_m(),
            )?,
            Curve::CircularString(circular_string) => write_simple_curve(
                out,
                GeometryType::CircularString,
                circular_string.points(),
                circular_string.has_z(),
                circular_string.has_m(),
            )?,
            Curve::CompoundCurve(compound_curve) => {
                write_header(
                    out,
                    GeometryType::CompoundCurve,
                    compound_curve.has_z(),
                    compound_curve.has_m(),
                )?;
                write_compound_curve_body(out, compound_curve)?;
            }
        }
    }
    out.write_char(')')
}

fn write_simple_curve(
    out: &mut dyn fmt::Write,
    geometry_type: GeometryType,
    points: &[Point],
    has_z: bool,
    has_m: bool,
) -> fmt::Result {
    write_header(out, geometry_type, has_z, has_m)?;
    write_point_list(out, points)
}

fn write_geometry_collection_body(
    out: &mut dyn fmt::Write,
    collection: &GeometryCollection,
) -> fmt::Result {
    if collection.is_empty() {
        return out.write_str("EMPTY");
    }
    out.write_char('(')?;
    for (i, geometry) in collection.geometries().iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_named_geometry(out, geometry)?;
    }
    out.write_char(')')
}

fn write_ordinates(out: &mut dyn fmt::Write, point: &Point) -> fmt::Result {
    write_ordinate(out, point.x())?;
    out.write_char(' ')?;
    write_ordinate(out, point.y())?;
    if let Some(z) = point.z() {
        out.write_char(' ')?;
        write_ordinate(out, z)?;
    }
    if let Some(m) = point.m() {
        out.write_char(' ')?;
        write_ordinate(out, m)?;
    }
    Ok(())
}

// The default float formatting spells infinities as "inf", which the reader does not accept,
// and never uses exponent notation, so 1e300 would render as 301 positional digits. Finite
// values take the shorter of the positional and exponent renderings; both parse back to the
// same bits.
fn write_ordinate(out: &mut dyn fmt::Write, value: f64) -> fmt::Result {
    if value.is_nan() {
        out.write_str("NaN")
    } else if value == f64::INFINITY {
        out.write_str("Infinity")
    } else if value == f64::NEG_INFINITY {
        out.write_str("-Infinity")
    } else {
        let positional = value.to_string();
        let exponent = format!("{value:e}");
        if exponent.len() < positional.len() {
            out.write_str(&exponent)
        } else {
            out.write_str(&positional)
        }
    }
}
