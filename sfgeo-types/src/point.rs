//! The point type all other geometries are built from.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

/// A single position with mandatory X and Y ordinates and optional Z (elevation) and M (measure)
/// ordinates.
///
/// The Z and M flags of a point are fixed by the constructor used to create it. Equality is exact
/// structural equality on all stored ordinates; use [`AbsDiffEq`] for tolerance-based comparison.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
    z: Option<f64>,
    m: Option<f64>,
}

impl Point {
    /// Creates a new 2d point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    /// Creates a new point with a Z ordinate.
    pub const fn new_z(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    /// Creates a new point with an M ordinate.
    pub const fn new_m(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    /// Creates a new point with both Z and M ordinates.
    pub const fn new_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// X ordinate of the point.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y ordinate of the point.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z ordinate of the point, if present.
    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// M ordinate of the point, if present.
    pub fn m(&self) -> Option<f64> {
        self.m
    }

    /// Updates the X ordinate.
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Updates the Y ordinate.
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Sets or removes the Z ordinate. This also changes the value of [`Point::has_z`].
    pub fn set_z(&mut self, z: Option<f64>) {
        self.z = z;
    }

    /// Sets or removes the M ordinate. This also changes the value of [`Point::has_m`].
    pub fn set_m(&mut self, m: Option<f64>) {
        self.m = m;
    }

    /// Returns true if the point has a Z ordinate.
    pub fn has_z(&self) -> bool {
        self.z.is_some()
    }

    /// Returns true if the point has an M ordinate.
    pub fn has_m(&self) -> bool {
        self.m.is_some()
    }
}

impl AbsDiffEq for Point {
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

        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && optional_eq(self.z, other.z)
            && optional_eq(self.m, other.m)
    }
}
