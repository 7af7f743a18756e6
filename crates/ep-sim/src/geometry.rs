//! Per-frame output handed to renderers.

use ep_core::{Point2, Real};
use serde::Serialize;

/// Epicycle drawn around one arm's pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: Real,
}

/// The three curves a renderer paints each frame.
///
/// `vector_path` and `circle_path` are rebuilt every frame; `trace_path`
/// grows by one vertex per frame until the cycle ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderGeometry {
    pub(crate) vector_path: Vec<Point2>,
    pub(crate) circle_path: Vec<Circle>,
    pub(crate) trace_path: Vec<Point2>,
}

impl RenderGeometry {
    /// Cumulative tip positions, one per arm, in chain order.
    pub fn vector_path(&self) -> &[Point2] {
        &self.vector_path
    }

    /// One circle per arm, centered on the previous tip.
    pub fn circle_path(&self) -> &[Circle] {
        &self.circle_path
    }

    /// Positions of the chain's end point since the cycle started.
    pub fn trace_path(&self) -> &[Point2] {
        &self.trace_path
    }

    pub fn is_empty(&self) -> bool {
        self.vector_path.is_empty() && self.circle_path.is_empty() && self.trace_path.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.vector_path.clear();
        self.circle_path.clear();
        self.trace_path.clear();
    }
}
