//! Pure per-frame kinematics.
//!
//! Nothing here holds state: given arms (with angles already set) the chain
//! is rebuilt from the origin every time, so evaluating the same frame twice
//! gives bit-identical output.

use crate::geometry::Circle;
use ep_components::ComponentSet;
use ep_core::{Point2, Real};

/// Tip positions and circles for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub vector_path: Vec<Point2>,
    pub circle_path: Vec<Circle>,
}

impl Chain {
    /// Final superposition point, or the origin for an empty chain.
    pub fn tip(&self) -> Point2 {
        self.vector_path.last().copied().unwrap_or(Point2::ORIGIN)
    }
}

/// Where a progress value lands in the cycle sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    /// Which cycle the value falls in; `0` is the declared domain `[0, end]`.
    pub cycle: i64,
    /// Progress rescaled to `[0, 1]` within that cycle.
    pub normalized: Real,
}

impl Phase {
    /// True if moving from `previous` to `self` crosses a cycle boundary,
    /// either into another cycle or backwards within the same one.
    pub fn starts_new_cycle_after(&self, previous: &Phase) -> bool {
        self.cycle != previous.cycle || self.normalized < previous.normalized
    }
}

/// Rescale `progress` over `[0, end]` to `[0, 1]`.
///
/// Values outside the domain wrap modulo one cycle. Exact multiples of `end`
/// (other than zero) close the preceding cycle at `1.0`, so the last frame of
/// a cycle is drawn at the full turn rather than snapping back to zero.
pub fn normalize_progress(progress: Real, end: Real) -> Phase {
    let scaled = progress / end;
    let floor = scaled.floor();
    if scaled > 0.0 && scaled == floor {
        Phase {
            cycle: floor as i64 - 1,
            normalized: 1.0,
        }
    } else {
        Phase {
            cycle: floor as i64,
            normalized: scaled - floor,
        }
    }
}

/// Walk the arms in order, summing tip offsets from the origin.
pub fn chain(components: &ComponentSet) -> Chain {
    let mut vector_path = Vec::with_capacity(components.len());
    let mut circle_path = Vec::with_capacity(components.len());

    let mut superposition = Point2::ORIGIN;
    for component in components {
        let center = superposition;
        superposition += component.vector().tip_offset();
        vector_path.push(superposition);
        circle_path.push(Circle {
            center,
            radius: center.distance(superposition),
        });
    }

    Chain {
        vector_path,
        circle_path,
    }
}
