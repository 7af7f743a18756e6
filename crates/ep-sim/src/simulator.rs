//! The epicycle simulator: progress in, render geometry out.

use crate::config::EpicycleConfig;
use crate::error::{SimError, SimResult};
use crate::geometry::RenderGeometry;
use crate::kinematics::{self, Chain, Phase};
use ep_components::ComponentSet;
use ep_core::Real;
use ep_core::timing::{Timer, frame_timing};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Animation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    /// No animation active; `advance` is ignored.
    Idle,
    /// Frames are being produced.
    Running,
    /// A cycle just finished and its trace was dropped. The next `advance`
    /// returns to `Running`.
    CycleBoundary,
}

/// Counters kept across frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames advanced since the current cycle began.
    pub frames_in_cycle: usize,
    /// Frames advanced since construction.
    pub total_frames: u64,
    /// Cycle boundaries crossed since construction.
    pub completed_cycles: u64,
    /// Component sets drawn, including the initial one.
    pub regenerations: u64,
}

/// Drives a [`ComponentSet`] from externally supplied progress values.
///
/// The host owns scheduling: it calls [`advance`](Self::advance) once per
/// frame with progress over `[0, cycle.end]` and paints the returned
/// geometry. Everything is `&mut self`, so there is exactly one writer and the
/// geometry can only be read between frames.
///
/// # Example
///
/// ```
/// use ep_sim::{EpicycleConfig, EpicycleSimulator};
///
/// let mut sim = EpicycleSimulator::with_seed(EpicycleConfig::default(), 11).unwrap();
/// sim.start();
/// let frame = sim.advance(0.25);
/// assert_eq!(frame.vector_path().len(), frame.circle_path().len());
/// assert_eq!(frame.trace_path().len(), 1);
/// ```
#[derive(Debug)]
pub struct EpicycleSimulator<R = StdRng> {
    config: EpicycleConfig,
    components: ComponentSet,
    geometry: RenderGeometry,
    state: SimState,
    last_phase: Option<Phase>,
    stats: FrameStats,
    rng: R,
}

impl EpicycleSimulator<StdRng> {
    /// Simulator with a reproducible generator.
    pub fn with_seed(config: EpicycleConfig, seed: u64) -> SimResult<Self> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Simulator seeded from the operating system.
    pub fn from_entropy(config: EpicycleConfig) -> SimResult<Self> {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> EpicycleSimulator<R> {
    /// Validate `config` and draw the first component set. Starts `Idle`.
    pub fn new(config: EpicycleConfig, mut rng: R) -> SimResult<Self> {
        config.validate()?;
        let components = ComponentSet::generate(&config.ranges, &mut rng);
        Ok(Self::assemble(config, components, rng, 1))
    }

    /// Use an explicit chain instead of a random first draw.
    ///
    /// Later [`reset`](Self::reset) calls still regenerate from `config`.
    pub fn with_components(
        config: EpicycleConfig,
        components: ComponentSet,
        rng: R,
    ) -> SimResult<Self> {
        config.validate()?;
        if components.is_empty() {
            return Err(SimError::InvalidConfig {
                what: "component set must not be empty",
            });
        }
        Ok(Self::assemble(config, components, rng, 0))
    }

    fn assemble(
        config: EpicycleConfig,
        components: ComponentSet,
        rng: R,
        regenerations: u64,
    ) -> Self {
        Self {
            config,
            components,
            geometry: RenderGeometry::default(),
            state: SimState::Idle,
            last_phase: None,
            stats: FrameStats {
                regenerations,
                ..FrameStats::default()
            },
            rng,
        }
    }

    /// Idle → Running. No effect if already active.
    ///
    /// Starting after [`stop`](Self::stop) resumes: the trace collected so far
    /// is kept.
    pub fn start(&mut self) {
        if self.state == SimState::Idle {
            self.state = SimState::Running;
            tracing::debug!(components = self.components.len(), "simulation started");
        }
    }

    /// Any state → Idle. The last frame stays readable.
    pub fn stop(&mut self) {
        if self.state != SimState::Idle {
            self.state = SimState::Idle;
            tracing::debug!(frames = self.stats.total_frames, "simulation stopped");
        }
    }

    /// Abort the current cycle, drop all geometry, draw a new component set
    /// and start a fresh cycle.
    pub fn reset(&mut self) {
        self.state = SimState::Idle;
        self.geometry.clear();
        self.last_phase = None;
        self.stats.frames_in_cycle = 0;

        self.components.regenerate(&self.config.ranges, &mut self.rng);
        self.stats.regenerations += 1;

        self.start();
    }

    /// Swap in a new configuration and [`reset`](Self::reset) with it.
    ///
    /// On error the current configuration and chain are left untouched.
    pub fn reconfigure(&mut self, config: EpicycleConfig) -> SimResult<()> {
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(())
    }

    /// The driver reports that a cycle finished.
    ///
    /// Drops every path so the very next read is empty, then waits in
    /// `CycleBoundary` for the next frame. Repeated signals before that frame
    /// count once.
    pub fn finish_cycle(&mut self) {
        if self.state != SimState::Running {
            return;
        }
        self.cross_boundary();
        self.geometry.clear();
        self.last_phase = None;
    }

    fn cross_boundary(&mut self) {
        self.state = SimState::CycleBoundary;
        self.geometry.trace_path.clear();
        self.stats.completed_cycles += 1;
        self.stats.frames_in_cycle = 0;
        tracing::debug!(
            completed = self.stats.completed_cycles,
            "cycle boundary, trace cleared"
        );
    }

    /// Compute the frame for `progress` and return it.
    ///
    /// Angles are a pure function of `progress`, so repeating a value repeats
    /// the chain exactly. The trace gains one vertex per call. Progress that
    /// falls in another cycle of `[0, end]`, or moves backwards, starts a new
    /// cycle first. Progress must be finite.
    /// While `Idle` the call is ignored and the previous frame is returned.
    pub fn advance(&mut self, progress: Real) -> &RenderGeometry {
        if self.state == SimState::Idle {
            tracing::trace!(progress, "advance ignored while idle");
            return &self.geometry;
        }

        debug_assert!(progress.is_finite(), "non-finite progress {progress}");
        let timer = Timer::start();
        let phase = kinematics::normalize_progress(progress, self.config.cycle.end);
        if let Some(previous) = self.last_phase {
            if phase.starts_new_cycle_after(&previous) {
                self.cross_boundary();
            }
        }
        self.state = SimState::Running;

        self.components.set_phase(phase.normalized);
        let chain = kinematics::chain(&self.components);
        let tip = chain.tip();
        let Chain {
            vector_path,
            circle_path,
        } = chain;
        self.geometry.vector_path = vector_path;
        self.geometry.circle_path = circle_path;
        self.geometry.trace_path.push(tip);

        self.last_phase = Some(phase);
        self.stats.frames_in_cycle += 1;
        self.stats.total_frames += 1;
        tracing::trace!(
            progress,
            normalized = phase.normalized,
            x = tip.x,
            y = tip.y,
            "frame"
        );

        timer.stop_into(&frame_timing::ADVANCE_CALLS);
        &self.geometry
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state != SimState::Idle
    }

    pub fn geometry(&self) -> &RenderGeometry {
        &self.geometry
    }

    pub fn components(&self) -> &ComponentSet {
        &self.components
    }

    pub fn config(&self) -> &EpicycleConfig {
        &self.config
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    // Raw progress passed to the latest `advance` in this cycle.
}

#[cfg(test)]
mod tests {
    use super::*;
    use ep_components::Component;

    fn single_arm() -> EpicycleSimulator {
        let set = ComponentSet::from_components(vec![Component::new(100.0, 1.0).unwrap()]).unwrap();
        EpicycleSimulator::with_components(
            EpicycleConfig::default(),
            set,
            StdRng::seed_from_u64(0),
        )
        .unwrap()
    }

    #[test]
    fn starts_idle_and_ignores_advance() {
        let mut sim = single_arm();
        assert_eq!(sim.state(), SimState::Idle);
        assert!(sim.advance(0.5).is_empty());
        assert_eq!(sim.stats().total_frames, 0);
    }

    #[test]
    fn start_stop_transitions() {
        let mut sim = single_arm();
        sim.start();
        assert_eq!(sim.state(), SimState::Running);
        sim.advance(0.1);
        sim.stop();
        assert_eq!(sim.state(), SimState::Idle);
        assert_eq!(sim.geometry().trace_path().len(), 1);

        // Resuming keeps the trace.
        sim.start();
        sim.advance(0.2);
        assert_eq!(sim.geometry().trace_path().len(), 2);
    }

    #[test]
    fn finish_cycle_enters_boundary_then_runs() {
        let mut sim = single_arm();
        sim.start();
        sim.advance(0.9);
        sim.advance(1.0);
        sim.finish_cycle();
        assert_eq!(sim.state(), SimState::CycleBoundary);
        assert!(sim.geometry().trace_path().is_empty());
        assert_eq!(sim.stats().completed_cycles, 1);

        sim.advance(0.01);
        assert_eq!(sim.state(), SimState::Running);
        assert_eq!(sim.geometry().trace_path().len(), 1);
        // The follow-up frame must not count as a second boundary.
        assert_eq!(sim.stats().completed_cycles, 1);
    }

    #[test]
    fn finish_cycle_while_idle_is_noop() {
        let mut sim = single_arm();
        sim.finish_cycle();
        assert_eq!(sim.state(), SimState::Idle);
        assert_eq!(sim.stats().completed_cycles, 0);
    }

    #[test]
    fn reset_regenerates_and_restarts() {
        let mut sim = EpicycleSimulator::with_seed(EpicycleConfig::default(), 9).unwrap();
        sim.start();
        sim.advance(0.3);
        sim.advance(0.4);
        let before = sim.components().clone();

        sim.reset();
        assert_eq!(sim.state(), SimState::Running);
        assert!(sim.geometry().is_empty());
        assert_ne!(sim.components(), &before);
        assert_eq!(sim.stats().regenerations, 2);

        // Earlier progress is fine right after a reset.
        sim.advance(0.1);
        assert_eq!(sim.geometry().trace_path().len(), 1);
    }

    #[test]
    fn reconfigure_rejects_invalid_config() {
        let mut sim = single_arm();
        let mut bad = EpicycleConfig::default();
        bad.cycle.end = -1.0;
        assert!(sim.reconfigure(bad).is_err());
        assert_eq!(sim.components().len(), 1);
        assert_eq!(sim.config(), &EpicycleConfig::default());
    }

    #[test]
    fn with_components_rejects_invalid_config() {
        let set = ComponentSet::from_components(vec![Component::new(1.0, 1.0).unwrap()]).unwrap();
        let mut cfg = EpicycleConfig::default();
        cfg.cycle.length_s = 0.0;
        assert!(EpicycleSimulator::with_components(cfg, set, StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn repeated_finish_cycle_counts_once() {
        let mut sim = single_arm();
        sim.start();
        sim.advance(0.5);
        sim.advance(1.0);
        sim.finish_cycle();
        sim.finish_cycle();
        assert_eq!(sim.stats().completed_cycles, 1);
        assert_eq!(sim.state(), SimState::CycleBoundary);

        sim.advance(0.1);
        sim.finish_cycle();
        assert_eq!(sim.stats().completed_cycles, 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-finite progress")]
    fn non_finite_progress_is_caught_in_debug() {
        let mut sim = single_arm();
        sim.start();
        sim.advance(f64::NAN);
    }
}
