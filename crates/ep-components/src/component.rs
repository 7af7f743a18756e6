//! A single rotating arm.

use crate::error::ComponentResult;
use ep_core::{FULL_TURN_DEG, Point2, Real, ensure_positive};
use serde::Serialize;

/// Rotating vector: fixed magnitude, angle in degrees.
///
/// The angle is unbounded. It is never wrapped into `[0, 360)` because it is
/// recomputed from progress every frame rather than accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarVector {
    magnitude: Real,
    angle_degrees: Real,
}

impl PolarVector {
    pub fn magnitude(&self) -> Real {
        self.magnitude
    }

    pub fn angle_degrees(&self) -> Real {
        self.angle_degrees
    }

    /// Offset from the arm's pivot to its tip.
    pub fn tip_offset(&self) -> Point2 {
        Point2::from_polar_degrees(self.magnitude, self.angle_degrees)
    }
}

/// One arm of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Component {
    vector: PolarVector,
    rotation_factor: Real,
}

impl Component {
    /// Create an arm at angle zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `magnitude` or `rotation_factor` is not finite and
    /// strictly positive.
    pub fn new(magnitude: Real, rotation_factor: Real) -> ComponentResult<Self> {
        ensure_positive(magnitude, "magnitude")?;
        ensure_positive(rotation_factor, "rotation_factor")?;
        Ok(Self::from_validated(magnitude, rotation_factor))
    }

    pub(crate) fn from_validated(magnitude: Real, rotation_factor: Real) -> Self {
        Self {
            vector: PolarVector {
                magnitude,
                angle_degrees: 0.0,
            },
            rotation_factor,
        }
    }

    pub fn vector(&self) -> &PolarVector {
        &self.vector
    }

    pub fn magnitude(&self) -> Real {
        self.vector.magnitude
    }

    pub fn angle_degrees(&self) -> Real {
        self.vector.angle_degrees
    }

    pub fn rotation_factor(&self) -> Real {
        self.rotation_factor
    }

    /// Angle this arm has at `normalized` progress through a cycle.
    pub fn angle_at(&self, normalized: Real) -> Real {
        normalized * FULL_TURN_DEG * self.rotation_factor
    }

    pub(crate) fn set_phase(&mut self, normalized: Real) {
        self.vector.angle_degrees = self.angle_at(normalized);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComponentError;

    #[test]
    fn new_starts_at_zero_angle() {
        let c = Component::new(100.0, 1.5).unwrap();
        assert_eq!(c.magnitude(), 100.0);
        assert_eq!(c.rotation_factor(), 1.5);
        assert_eq!(c.angle_degrees(), 0.0);
        assert_eq!(c.vector().tip_offset(), Point2::new(100.0, 0.0));
    }

    #[test]
    fn new_rejects_non_positive() {
        assert!(matches!(
            Component::new(0.0, 1.0),
            Err(ComponentError::Core(_))
        ));
        assert!(Component::new(10.0, -1.0).is_err());
        assert!(Component::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn angle_is_not_wrapped() {
        let mut c = Component::new(1.0, 3.0).unwrap();
        c.set_phase(1.0);
        assert_eq!(c.angle_degrees(), 1080.0);
        c.set_phase(0.25);
        assert_eq!(c.angle_degrees(), 270.0);
    }
}
