//! ep-core: stable foundation for the epicycle engine.
//!
//! Contains:
//! - geometry (Point2 + degree/radian conversion)
//! - units (uom SI time type + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - timing (opt-in accumulating timers for the frame loop)
//! - error (shared error types)

pub mod error;
pub mod geometry;
pub mod numeric;
pub mod timing;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{EpError, EpResult};
pub use geometry::*;
pub use numeric::*;
pub use units::*;
