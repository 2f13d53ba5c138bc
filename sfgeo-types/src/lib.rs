//! OGC simple-features geometry model: points, curves, surfaces and their collections, with
//! optional Z (elevation) and M (linear-referencing measure) ordinates.
//!
//! The model is a strict ownership tree. Every container exclusively owns its members, and every
//! geometry carries its Z/M dimension flags fixed at construction. The closed
//! [`Geometry`] enum covers all concrete variants; [`GeometryType`] provides the OGC name tags,
//! including the abstract categories that exist only as tags.
//!
//! Besides the model itself the crate provides:
//!
//! * [`build_envelope`] — bounding-envelope computation over any geometry;
//! * [`GeometryFilter`] / [`PointFiniteFilter`] — predicates a reader applies while building a
//!   tree, so that rejected members are never attached;
//! * [`ExtendedGeometryCollection`] — re-labels a heterogeneous collection with the narrowest
//!   abstract OGC collection subtype (`MULTICURVE`, `MULTISURFACE`).
//!
//! ```
//! use sfgeo_types::{Geometry, LineString, Point, build_envelope};
//!
//! let line = LineString::from_points(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
//! let envelope = build_envelope(&Geometry::LineString(line)).unwrap();
//! assert_eq!(envelope.max_x, 3.0);
//! assert_eq!(envelope.max_y, 4.0);
//! ```

pub mod collection;
pub mod curve;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod point;
pub mod surface;

pub use collection::{
    ExtendedGeometryCollection, GeometryCollection, MultiLineString, MultiPoint, MultiPolygon,
};
pub use curve::{CircularString, CompoundCurve, Curve, LineString, SimpleCurve};
pub use envelope::{build_envelope, GeometryEnvelope};
pub use error::SfgeoTypesError;
pub use filter::{FiniteFilterType, GeometryFilter, PointFiniteFilter};
pub use geometry::{Geometry, GeometryType};
pub use point::Point;
pub use surface::{CurvePolygon, PolyhedralSurface, Polygon, Tin, Triangle};
