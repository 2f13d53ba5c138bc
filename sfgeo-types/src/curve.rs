//! One-dimensional geometry types: line strings, circular strings and compound curves.

use serde::{Deserialize, Serialize};

use crate::error::SfgeoTypesError;
use crate::geometry::{Geometry, GeometryType};
use crate::point::Point;

/// An ordered sequence of points connected by straight segments.
///
/// All member points share the line string's Z/M flags. A line string may be empty.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    points: Vec<Point>,
    has_z: bool,
    has_m: bool,
}

impl LineString {
    /// Creates a new empty line string with the given dimension flags.
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            points: vec![],
            has_z,
            has_m,
        }
    }

    /// Creates a line string from the given points, deriving the Z/M flags from the members.
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

    /// Points of the line string.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the line string contains no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point, if any.
    pub fn start_point(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Last point, if any.
    pub fn end_point(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Returns true if the line string has Z ordinates.
    pub fn has_z(&self) -> bool {
        self.has_z
    }

    /// Returns true if the line string has M ordinates.
    pub fn has_m(&self) -> bool {
        self.has_m
    }
}

/// A curve interpolated between points as circular arcs.
///
/// Each consecutive triple of points defines an arc. Structurally this is a point sequence like
/// [`LineString`], but it is a distinct type with a distinct WKT name.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularString {
    points: Vec<Point>,
    has_z: bool,
    has_m: bool,
}

impl CircularString {
    /// Creates a new empty circular string with the given dimension flags.
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            points: vec![],
            has_z,
            has_m,
        }
    }

    /// Creates a circular string from the given points, deriving the Z/M flags from the members.
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

    /// Points of the circular string.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the circular string contains no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point, if any.
    pub fn start_point(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Last point, if any.
    pub fn end_point(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Returns true if the circular string has Z ordinates.
    pub fn has_z(&self) -> bool {
        self.has_z
    }

    /// Returns true if the circular string has M ordinates.
    pub fn has_m(&self) -> bool {
        self.has_m
    }
}

/// A curve that is a plain point sequence: a [`LineString`] or a [`CircularString`].
///
/// These are the only types a [`CompoundCurve`] may be composed of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimpleCurve {
    /// Straight-segment curve.
    LineString(LineString),
    /// Circular-arc curve.
    CircularString(CircularString),
}

impl SimpleCurve {
    /// The concrete geometry type of the curve.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            SimpleCurve::LineString(_) => GeometryType::LineString,
            SimpleCurve::CircularString(_) => GeometryType::CircularString,
        }
    }

    /// Points of the curve.
    pub fn points(&self) -> &[Point] {
        match self {
            SimpleCurve::LineString(v) => v.points(),
            SimpleCurve::CircularString(v) => v.points(),
        }
    }

    /// Number of points.
    pub fn num_points(&self) -> usize {
        self.points().len()
    }

    /// Returns true if the curve contains no points.
    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// First point, if any.
    pub fn start_point(&self) -> Option<&Point> {
        self.points().first()
    }

    /// Last point, if any.
    pub fn end_point(&self) -> Option<&Point> {
        self.points().last()
    }

    /// Returns true if the curve has Z ordinates.
    pub fn has_z(&self) -> bool {
        match self {
            SimpleCurve::LineString(v) => v.has_z(),
            SimpleCurve::CircularString(v) => v.has_z(),
        }
    }

    /// Returns true if the curve has M ordinates.
    pub fn has_m(&self) -> bool {
        match self {
            SimpleCurve::LineString(v) => v.has_m(),
            SimpleCurve::CircularString(v) => v.has_m(),
        }
    }
}

/// A curve concatenated from [`SimpleCurve`] sections.
///
/// Consecutive sections are expected to be endpoint-connected, but this is not validated; keeping
/// the sections connected is the caller's responsibility.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundCurve {
    curves: Vec<SimpleCurve>,
    has_z: bool,
    has_m: bool,
}

impl CompoundCurve {
    /// Creates a new empty compound curve with the given dimension flags.
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Self {
            curves: vec![],
            has_z,
            has_m,
        }
    }

    /// Creates a compound curve from the given sections, deriving the Z/M flags from the members.
    pub fn from_curves(curves: Vec<SimpleCurve>) -> Self {
        let has_z = curves.iter().any(|c| c.has_z());
        let has_m = curves.iter().any(|c| c.has_m());
        Self {
            curves,
            has_z,
            has_m,
        }
    }

    /// Appends a curve section.
    pub fn add_curve(&mut self, curve: SimpleCurve) {
        self.curves.push(curve);
    }

    /// Sections of the compound curve.
    pub fn curves(&self) -> &[SimpleCurve] {
        &self.curves
    }

    /// Number of sections.
    pub fn num_curves(&self) -> usize {
        self.curves.len()
    }

    /// Total number of points over all sections.
    pub fn num_points(&self) -> usize {
        self.curves.iter().map(|c| c.num_points()).sum()
    }

    /// Returns true if the compound curve contains no sections.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// First point of the first section, if any.
    pub fn start_point(&self) -> Option<&Point> {
        self.curves.first().and_then(|c| c.start_point())
    }

    /// Last point of the last section, if any.
    pub fn end_point(&self) -> Option<&Point> {
        self.curves.last().and_then(|c| c.end_point())
    }

    /// Returns true if the compound curve has Z ordinates.
    pub fn has_z(&self) -> bool {
        self.has_z
    }

    /// Returns true if the compound curve has M ordinates.
    pub fn has_m(&self) -> bool {
        self.has_m
    }
}

/// Any one-dimensional geometry. Used as the ring type of
/// [`CurvePolygon`](crate::surface::CurvePolygon).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Curve {
    /// Straight-segment curve.
    LineString(LineString),
    /// Circular-arc curve.
    CircularString(CircularString),
    /// Concatenation of simple curves.
    CompoundCurve(CompoundCurve),
}

impl Curve {
    /// The concrete geometry type of the curve.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Curve::LineString(_) => GeometryType::LineString,
            Curve::CircularString(_) => GeometryType::CircularString,
            Curve::CompoundCurve(_) => GeometryType::CompoundCurve,
        }
    }

    /// Returns true if the curve contains no points.
    pub fn is_empty(&self) -> bool {
        match self {
            Curve::LineString(v) => v.is_empty(),
            Curve::CircularString(v) => v.is_empty(),
            Curve::CompoundCurve(v) => v.is_empty(),
        }
    }

    /// Total number of points of the curve.
    pub fn num_points(&self) -> usize {
        match self {
            Curve::LineString(v) => v.num_points(),
            Curve::CircularString(v) => v.num_points(),
            Curve::CompoundCurve(v) => v.num_points(),
        }
    }

    /// First point, if any.
    pub fn start_point(&self) -> Option<&Point> {
        match self {
            Curve::LineString(v) => v.start_point(),
            Curve::CircularString(v) => v.start_point(),
            Curve::CompoundCurve(v) => v.start_point(),
        }
    }

    /// Last point, if any.
    pub fn end_point(&self) -> Option<&Point> {
        match self {
            Curve::LineString(v) => v.end_point(),
            Curve::CircularString(v) => v.end_point(),
            Curve::CompoundCurve(v) => v.end_point(),
        }
    }

    /// Returns true if the curve has Z ordinates.
    pub fn has_z(&self) -> bool {
        match self {
            Curve::LineString(v) => v.has_z(),
            Curve::CircularString(v) => v.has_z(),
            Curve::CompoundCurve(v) => v.has_z(),
        }
    }

    /// Returns true if the curve has M ordinates.
    pub fn has_m(&self) -> bool {
        match self {
            Curve::LineString(v) => v.has_m(),
            Curve::CircularString(v) => v.has_m(),
            Curve::CompoundCurve(v) => v.has_m(),
        }
    }
}

impl From<SimpleCurve> for Curve {
    fn from(value: SimpleCurve) -> Self {
        match value {
            SimpleCurve::LineString(v) => Curve::LineString(v),
            SimpleCurve::CircularString(v) => Curve::CircularString(v),
        }
    }
}

impl From<Curve> for Geometry {
    fn from(value: Curve) -> Self {
        match value {
            Curve::LineString(v) => Geometry::LineString(v),
            Curve::CircularString(v) => Geometry::CircularString(v),
            Curve::CompoundCurve(v) => Geometry::CompoundCurve(v),
        }
    }
}

impl TryFrom<Geometry> for Curve {
    type Error = SfgeoTypesError;

    fn try_from(value: Geometry) -> Result<Self, Self::Error> {
        match value {
            Geometry::LineString(v) => Ok(Curve::LineString(v)),
            Geometry::CircularString(v) => Ok(Curve::CircularString(v)),
            Geometry::CompoundCurve(v) => Ok(Curve::CompoundCurve(v)),
            other => Err(SfgeoTypesError::Conversion {
                expected: "a curve type",
                actual: other.geometry_type(),
            }),
        }
    }
}

impl TryFrom<Geometry> for SimpleCurve {
    type Error = SfgeoTypesError;

    fn try_from(value: Geometry) -> Result<Self, Self::Error> {
        match value {
            Geometry::LineString(v) => Ok(SimpleCurve::LineString(v)),
            Geometry::CircularString(v) => Ok(SimpleCurve::CircularString(v)),
            other => Err(SfgeoTypesError::Conversion {
                expected: "LINESTRING or CIRCULARSTRING",
                actual: other.geometry_type(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_derives_dimensions() {
        let line_string =
            LineString::from_points(vec![Point::new_z(0.0, 0.0, 1.0), Point::new_z(1.0, 1.0, 2.0)]);
        assert!(line_string.has_z());
        assert!(!line_string.has_m());

        let empty = LineString::from_points(vec![]);
        assert!(!empty.has_z() && !empty.has_m());
        assert!(empty.is_empty());
    }

    #[test]
    fn start_and_end_points() {
        let line_string = LineString::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ]);
        assert_eq!(line_string.start_point(), Some(&Point::new(0.0, 0.0)));
        assert_eq!(line_string.end_point(), Some(&Point::new(2.0, 2.0)));

        assert_eq!(LineString::new(false, false).start_point(), None);
    }

    #[test]
    fn compound_curve_spans_sections() {
        let compound = CompoundCurve::from_curves(vec![
            SimpleCurve::LineString(LineString::from_points(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
            ])),
            SimpleCurve::CircularString(CircularString::from_points(vec![
                Point::new(1.0, 1.0),
                Point::new(2.0, 0.0),
                Point::new(3.0, 1.0),
            ])),
        ]);

        assert_eq!(compound.num_curves(), 2);
        assert_eq!(compound.num_points(), 5);
        assert_eq!(compound.start_point(), Some(&Point::new(0.0, 0.0)));
        assert_eq!(compound.end_point(), Some(&Point::new(3.0, 1.0)));
    }

    #[test]
    fn curve_narrowing() {
        let geometry = Geometry::CircularString(CircularString::new(false, false));
        assert!(Curve::try_from(geometry.clone()).is_ok());
        assert!(SimpleCurve::try_from(geometry).is_ok());

        let compound = Geometry::CompoundCurve(CompoundCurve::new(false, false));
        assert!(Curve::try_from(compound.clone()).is_ok());
        assert!(SimpleCurve::try_from(compound).is_err());
    }
}
