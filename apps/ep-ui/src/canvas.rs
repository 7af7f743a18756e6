//! Painting of one frame onto a black canvas centered on the origin.

use ep_core::Point2;
use ep_sim::RenderGeometry;
use egui::{Color32, Pos2, Rect, Shape, Stroke};

pub const BACKGROUND: Color32 = Color32::BLACK;
pub const CIRCLE_COLOR: Color32 = Color32::from_rgba_premultiplied(60, 60, 60, 60);
pub const VECTOR_COLOR: Color32 = Color32::WHITE;
pub const TRACE_COLOR: Color32 = Color32::from_rgb(255, 140, 0);

/// Fraction of the shorter canvas side the chain may occupy from the center.
const FILL: f32 = 0.45;

/// Maps simulation coordinates (y up, origin at rect center) to screen space.
#[derive(Debug, Clone, Copy)]
pub struct CanvasTransform {
    center: Pos2,
    scale: f32,
}

impl CanvasTransform {
    /// Shrinks to fit a chain of total length `reach`, never enlarges.
    pub fn fit(rect: Rect, reach: f64) -> Self {
        let half = rect.width().min(rect.height()) * FILL;
        let scale = if reach > 0.0 && (reach as f32) > half {
            half / reach as f32
        } else {
            1.0
        };
        Self {
            center: rect.center(),
            scale,
        }
    }

    pub fn to_screen(&self, p: Point2) -> Pos2 {
        Pos2::new(
            self.center.x + p.x as f32 * self.scale,
            self.center.y - p.y as f32 * self.scale,
        )
    }

    pub fn length(&self, len: f64) -> f32 {
        len as f32 * self.scale
    }
}

pub fn paint(painter: &egui::Painter, rect: Rect, reach: f64, frame: &RenderGeometry) {
    painter.rect_filled(rect, 0.0, BACKGROUND);
    let xf = CanvasTransform::fit(rect, reach);

    for circle in frame.circle_path() {
        painter.circle_stroke(
            xf.to_screen(circle.center),
            xf.length(circle.radius),
            Stroke::new(1.0, CIRCLE_COLOR),
        );
    }

    // Vector arms start at the origin.
    if !frame.vector_path().is_empty() {
        let arms: Vec<Pos2> = std::iter::once(Point2::ORIGIN)
            .chain(frame.vector_path().iter().copied())
            .map(|p| xf.to_screen(p))
            .collect();
        painter.add(Shape::line(arms, Stroke::new(2.0, VECTOR_COLOR)));
    }

    if frame.trace_path().len() > 1 {
        let trace: Vec<Pos2> = frame
            .trace_path()
            .iter()
            .map(|&p| xf.to_screen(p))
            .collect();
        painter.add(Shape::line(trace, Stroke::new(3.0, TRACE_COLOR)));
    }
}
