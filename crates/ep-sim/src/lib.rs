//! Epicycle simulation core.
//!
//! Provides:
//! - `EpicycleSimulator`: progress in, vector/circle/trace geometry out
//! - Pure chain kinematics (`kinematics::chain`)
//! - Validated configuration with the canvas and accelerated presets
//! - `AnimationClock` for hosts that want a repeating fixed-length animation
//!
//! The core is single-threaded and does no I/O. Hosts own timing, painting
//! and any file formats.

pub mod clock;
pub mod config;
pub mod error;
pub mod geometry;
pub mod kinematics;
pub mod simulator;

// Re-exports for public API
pub use clock::{AnimationClock, Tick};
pub use config::{CycleConfig, EpicycleConfig, Preset};
pub use error::{SimError, SimResult};
pub use geometry::{Circle, RenderGeometry};
pub use simulator::{EpicycleSimulator, FrameStats, SimState};

pub use ep_components::{Component, ComponentRanges, ComponentSet, CountRange, ParamRange};
