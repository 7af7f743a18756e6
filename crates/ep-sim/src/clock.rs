//! Repeating animation clock for hosts.
//!
//! The simulator does not care where progress comes from. Hosts that want
//! the usual "fixed-length, repeat forever" animation can feed frame deltas
//! into an [`AnimationClock`] and forward its output:
//!
//! ```
//! use ep_core::s;
//! use ep_sim::{AnimationClock, EpicycleConfig, EpicycleSimulator};
//!
//! let config = EpicycleConfig::default();
//! let mut sim = EpicycleSimulator::with_seed(config, 1).unwrap();
//! let mut clock = AnimationClock::new(config.cycle);
//! sim.start();
//!
//! for _ in 0..120 {
//!     let tick = clock.tick(s(1.0 / 60.0));
//!     sim.advance(tick.progress);
//!     if tick.finished {
//!         sim.finish_cycle();
//!     }
//! }
//! assert_eq!(sim.geometry().trace_path().len(), 120);
//! ```

use crate::config::CycleConfig;
use ep_core::{Real, Time, s, seconds};

/// Output of one clock step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Progress over `[0, end]`.
    pub progress: Real,
    /// The cycle reached its end on this tick.
    pub finished: bool,
}

/// Turns elapsed time into cycling progress values.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    end: Real,
    length_s: Real,
    elapsed_s: Real,
    finished_last: bool,
    cycles: u64,
}

impl AnimationClock {
    /// `cycle` must be validated.
    pub fn new(cycle: CycleConfig) -> Self {
        Self {
            end: cycle.end,
            length_s: cycle.length_s,
            elapsed_s: 0.0,
            finished_last: false,
            cycles: 0,
        }
    }

    /// Advance by `dt`. Negative or non-finite deltas count as zero.
    ///
    /// When the cycle length is reached the tick reports `progress == end`
    /// and `finished`. The overshoot carries into the next cycle.
    pub fn tick(&mut self, dt: Time) -> Tick {
        if self.finished_last {
            self.elapsed_s = (self.elapsed_s - self.length_s).rem_euclid(self.length_s);
            self.finished_last = false;
        }

        let dt_s = seconds(dt);
        if dt_s.is_finite() && dt_s > 0.0 {
            self.elapsed_s += dt_s;
        }

        if self.elapsed_s >= self.length_s {
            self.finished_last = true;
            self.cycles += 1;
            return Tick {
                progress: self.end,
                finished: true,
            };
        }

        Tick {
            progress: self.end * self.elapsed_s / self.length_s,
            finished: false,
        }
    }

    /// Back to the start of a cycle.
    pub fn reset(&mut self) {
        self.elapsed_s = 0.0;
        self.finished_last = false;
    }

    /// Time into the current cycle.
    pub fn elapsed(&self) -> Time {
        s(self.elapsed_s.min(self.length_s))
    }

    /// Cycles finished since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}
