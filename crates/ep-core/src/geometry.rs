//! Plane geometry shared by the component model and the simulator.
//!
//! Angles are carried in degrees with the standard math orientation:
//! positive angles turn counter-clockwise from the +x axis.

use crate::numeric::Real;
use core::fmt;
use core::ops::{Add, AddAssign, Sub};

/// Degree to radian conversion factor.
pub const DEG_TO_RAD: Real = core::f64::consts::PI / 180.0;

/// Full turn in degrees.
pub const FULL_TURN_DEG: Real = 360.0;

#[inline]
pub fn deg_to_rad(degrees: Real) -> Real {
    degrees * DEG_TO_RAD
}

/// Cartesian point (or offset) in the drawing plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: Real,
    pub y: Real,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// Offset of length `magnitude` at `angle_degrees`.
    #[inline]
    pub fn from_polar_degrees(magnitude: Real, angle_degrees: Real) -> Self {
        let rad = deg_to_rad(angle_degrees);
        Self {
            x: magnitude * rad.cos(),
            y: magnitude * rad.sin(),
        }
    }

    #[inline]
    pub fn distance(self, other: Point2) -> Real {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point2 {
    fn add_assign(&mut self, rhs: Point2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn quarter_turn_points_up() {
        let p = Point2::from_polar_degrees(100.0, 90.0);
        let tol = Tolerances::absolute(1e-9);
        assert!(nearly_equal(p.x, 0.0, tol));
        assert!(nearly_equal(p.y, 100.0, tol));
    }

    #[test]
    fn deg_to_rad_half_turn() {
        assert!((deg_to_rad(180.0) - core::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn add_sub_and_distance() {
        let mut a = Point2::new(1.0, 2.0);
        a += Point2::new(2.0, 2.0);
        assert_eq!(a, Point2::new(3.0, 4.0));
        assert_eq!(a - Point2::new(3.0, 0.0), Point2::new(0.0, 4.0));
        assert_eq!(Point2::ORIGIN.distance(a), 5.0);
    }
}
