//! Geometry filters applied while a geometry tree is being built.

use serde::{Deserialize, Serialize};

use crate::geometry::{Geometry, GeometryType};
use crate::point::Point;

/// Accepts or rejects a candidate geometry before it is attached to the container being built.
///
/// A reader invokes the filter once per parsed member with the type of the containing geometry
/// (`None` at the document root). Returning `false` discards the candidate; rejection is not an
/// error.
pub trait GeometryFilter {
    /// Returns true if the geometry passes the filter.
    fn filter(&self, containing_type: Option<GeometryType>, geometry: &Geometry) -> bool;
}

/// Finiteness classes accepted by a [`PointFiniteFilter`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiniteFilterType {
    /// Accept finite values only.
    #[default]
    Finite,
    /// Accept finite values and NaN, reject infinities.
    FiniteAndNan,
    /// Accept finite and infinite values, reject NaN.
    FiniteAndInfinite,
}

impl FiniteFilterType {
    fn accepts(&self, value: f64) -> bool {
        match self {
            FiniteFilterType::Finite => value.is_finite(),
            FiniteFilterType::FiniteAndNan => value.is_finite() || value.is_nan(),
            FiniteFilterType::FiniteAndInfinite => value.is_finite() || value.is_infinite(),
        }
    }
}

/// A [`GeometryFilter`] that rejects points with non-finite ordinates.
///
/// X and Y are always checked; Z and M only when enabled, and only on points that carry the
/// ordinate. Geometries other than points always pass.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointFiniteFilter {
    filter_type: FiniteFilterType,
    filter_z: bool,
    filter_m: bool,
}

impl PointFiniteFilter {
    /// Creates a new filter of the given finiteness class checking X and Y only.
    pub fn new(filter_type: FiniteFilterType) -> Self {
        Self {
            filter_type,
            filter_z: false,
            filter_m: false,
        }
    }

    /// Enables or disables checking of Z ordinates.
    pub fn with_filter_z(mut self, filter_z: bool) -> Self {
        self.filter_z = filter_z;
        self
    }

    /// Enables or disables checking of M ordinates.
    pub fn with_filter_m(mut self, filter_m: bool) -> Self {
        self.filter_m = filter_m;
        self
    }

    /// The finiteness class of the filter.
    pub fn filter_type(&self) -> FiniteFilterType {
        self.filter_type
    }

    /// Returns true if Z ordinates are checked.
    pub fn filter_z(&self) -> bool {
        self.filter_z
    }

    /// Returns true if M ordinates are checked.
    pub fn filter_m(&self) -> bool {
        self.filter_m
    }

    fn accepts_point(&self, point: &Point) -> bool {
        self.filter_type.accepts(point.x())
            && self.filter_type.accepts(point.y())
            && (!self.filter_z || point.z().map_or(true, |z| self.filter_type.accepts(z)))
            && (!self.filter_m || point.m().map_or(true, |m| self.filter_type.accepts(m)))
    }
}

impl GeometryFilter for PointFiniteFilter {
    fn filter(&self, _containing_type: Option<GeometryType>, geometry: &Geometry) -> bool {
        match geometry {
            Geometry::Point(point) => self.accepts_point(point),
            _ => true,
        }
    }
}
