//! Axis-aligned bounding envelopes over geometry coordinates.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::curve::{Curve, SimpleCurve};
use crate::geometry::Geometry;
use crate::point::Point;

/// Axis-aligned bounding ranges of a geometry, one range per coordinate dimension.
///
/// The Z and M ranges are present iff the source geometry contains at least one point with that
/// ordinate. On every populated dimension `min <= max` holds (NaN ordinates excepted).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryEnvelope {
    /// Minimum X.
    pub min_x: f64,
    /// Maximum X.
    pub max_x: f64,
    /// Minimum Y.
    pub min_y: f64,
    /// Maximum Y.
    pub max_y: f64,
    /// Minimum Z, if any point has a Z ordinate.
    pub min_z: Option<f64>,
    /// Maximum Z, if any point has a Z ordinate.
    pub max_z: Option<f64>,
    /// Minimum M, if any point has an M ordinate.
    pub min_m: Option<f64>,
    /// Maximum M, if any point has an M ordinate.
    pub max_m: Option<f64>,
}

impl GeometryEnvelope {
    /// Creates a degenerate envelope covering a single point.
    pub fn from_point(point: &Point) -> Self {
        Self {
            min_x: point.x(),
            max_x: point.x(),
            min_y: point.y(),
            max_y: point.y(),
            min_z: point.z(),
            max_z: point.z(),
            min_m: point.m(),
            max_m: point.m(),
        }
    }

    /// Expands the envelope to include the given point.
    pub fn expand_to_include(&mut self, point: &Point) {
        self.min_x = self.min_x.min(point.x());
        self.max_x = self.max_x.max(point.x());
        self.min_y = self.min_y.min(point.y());
        self.max_y = self.max_y.max(point.y());

        if let Some(z) = point.z() {
            self.min_z = Some(self.min_z.map_or(z, |v| v.min(z)));
            self.max_z = Some(self.max_z.map_or(z, |v| v.max(z)));
        }
        if let Some(m) = point.m() {
            self.min_m = Some(self.min_m.map_or(m, |v| v.min(m)));
            self.max_m = Some(self.max_m.map_or(m, |v| v.max(m)));
        }
    }

    /// Returns true if the envelope has a Z range.
    pub fn has_z(&self) -> bool {
        self.min_z.is_some()
    }

    /// Returns true if the envelope has an M range.
    pub fn has_m(&self) -> bool {
        self.min_m.is_some()
    }

    /// Width of the envelope along the X axis.
    pub fn x_range(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the envelope along the Y axis.
    pub fn y_range(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl AbsDiffEq for GeometryEnvelope {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let optional_eq = |a: Option<f64>, b: Option<f64>| match (a, b) {
            (Some(a), Some(b)) => a.abs_diff_eq(&b, epsilon),
            (None, None) => true,
            _ => false,
        };

        self.min_x.abs_diff_eq(&other.min_x, epsilon)
            && self.max_x.abs_diff_eq(&other.max_x, epsilon)
            && self.min_y.abs_diff_eq(&other.min_y, epsilon)
            && self.max_y.abs_diff_eq(&other.max_y, epsilon)
            && optional_eq(self.min_z, other.min_z)
            && optional_eq(self.max_z, other.max_z)
            && optional_eq(self.min_m, other.min_m)
            && optional_eq(self.max_m, other.max_m)
    }
}

/// Computes the bounding envelope of a geometry by visiting every reachable point.
///
/// Returns `None` for a geometry with no points, since there are no bounds to report.
pub fn build_envelope(geometry: &Geometry) -> Option<GeometryEnvelope> {
    let mut envelope = None;
    expand_geometry(&mut envelope, geometry);
    envelope
}

fn expand_point(envelope: &mut Option<GeometryEnvelope>, point: &Point) {
    match envelope {
        Some(e) => e.expand_to_include(point),
        None => *envelope = Some(GeometryEnvelope::from_point(point)),
    }
}

fn expand_points(envelope: &mut Option<GeometryEnvelope>, points: &[Point]) {
    for point in points {
        expand_point(envelope, point);
    }
}

fn expand_simple_curve(envelope: &mut Option<GeometryEnvelope>, curve: &SimpleCurve) {
    expand_points(envelope, curve.points());
}

fn expand_curve(envelope: &mut Option<GeometryEnvelope>, curve: &Curve) {
    match curve {
        Curve::LineString(v) => expand_points(envelope, v.points()),
        Curve::CircularString(v) => expand_points(envelope, v.points()),
        Curve::CompoundCurve(v) => {
            for section in v.curves() {
                expand_simple_curve(envelope, section);
            }
        }
    }
}

fn expand_geometry(envelope: &mut Option<GeometryEnvelope>, geometry: &Geometry) {
    match geometry {
        Geometry::Point(v) => expand_point(envelope, v),
        Geometry::LineString(v) => expand_points(envelope, v.points()),
        Geometry::CircularString(v) => expand_points(envelope, v.points()),
        Geometry::CompoundCurve(v) => {
            for section in v.curves() {
                expand_simple_curve(envelope, section);
            }
        }
        Geometry::Polygon(v) => {
            for ring in v.rings() {
                expand_points(envelope, ring.points());
            }
        }
        Geometry::CurvePolygon(v) => {
            for ring in v.rings() {
                expand_curve(envelope, ring);
            }
        }
        Geometry::Triangle(v) => {
            for ring in v.rings() {
                expand_points(envelope, ring.points());
            }
        }
        Geometry::PolyhedralSurface(v) => {
            for polygon in v.polygons() {
                for ring in polygon.rings() {
                    expand_points(envelope, ring.points());
                }
            }
        }
        Geometry::Tin(v) => {
            for polygon in v.polygons() {
                for ring in polygon.rings() {
                    expand_points(envelope, ring.points());
                }
            }
        }
        Geometry::MultiPoint(v) => expand_points(envelope, v.points()),
        Geometry::MultiLineString(v) => {
            for line_string in v.line_strings() {
                expand_points(envelope, line_string.points());
            }
        }
        Geometry::MultiPolygon(v) => {
            for polygon in v.polygons() {
                for ring in polygon.rings() {
                    expand_points(envelope, ring.points());
                }
            }
        }
        Geometry::GeometryCollection(v) => {
            for member in v.geometries() {
                expand_geometry(envelope, member);
            }
        }
    }
}
