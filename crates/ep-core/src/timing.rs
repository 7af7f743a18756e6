//! Lightweight performance timing utilities.
//!
//! Measures where frame time goes inside the engine. Disabled unless
//! `EP_TIMING` is set or [`enable_timing`] is called, in which case the
//! cost is one `Instant::now()` pair per timed call.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable performance timing globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Check if timing is enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var("EP_TIMING").is_ok()
}

/// Wall-clock span around one call. Inert when timing is off.
pub struct Timer {
    started: Option<Instant>,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            started: is_enabled().then(Instant::now),
        }
    }

    /// Elapsed time, or `None` if timing was off at [`start`](Self::start).
    pub fn stop(self) -> Option<Duration> {
        self.started.map(|t| t.elapsed())
    }

    pub fn stop_into(self, acc: &AccumulatingTimer) {
        if let Some(elapsed) = self.stop() {
            acc.record(elapsed);
        }
    }
}

/// Call count and total nanoseconds, safe to share as a `static`.
#[derive(Default)]
pub struct AccumulatingTimer {
    total_ns: AtomicU64,
    calls: AtomicU64,
}

impl AccumulatingTimer {
    pub const fn new() -> Self {
        Self {
            total_ns: AtomicU64::new(0),
            calls: AtomicU64::new(0),
        }
    }

    pub fn record(&self, elapsed: Duration) {
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.total_ns.fetch_add(nanos, Ordering::Relaxed);
        self.calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total_seconds(&self) -> f64 {
        Duration::from_nanos(self.total_ns.load(Ordering::Relaxed)).as_secs_f64()
    }

    pub fn count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Mean seconds per call, zero before the first call.
    pub fn average_seconds(&self) -> f64 {
        match self.count() {
            0 => 0.0,
            n => self.total_seconds() / n as f64,
        }
    }

    pub fn reset(&self) {
        self.total_ns.store(0, Ordering::Relaxed);
        self.calls.store(0, Ordering::Relaxed);
    }
}

/// Frame loop timers.
pub mod frame_timing {
    use super::AccumulatingTimer;

    /// Time spent in `advance()` (kinematics + path bookkeeping)
    pub static ADVANCE_CALLS: AccumulatingTimer = AccumulatingTimer::new();
    /// Time spent regenerating component sets
    pub static REGENERATE_CALLS: AccumulatingTimer = AccumulatingTimer::new();

    /// Reset all frame timers.
    pub fn reset_all() {
        ADVANCE_CALLS.reset();
        REGENERATE_CALLS.reset();
    }

    /// Formatted summary lines, empty when nothing was recorded.
    pub fn summary_lines() -> Vec<String> {
        let mut lines = Vec::new();
        for (label, timer) in [
            ("advance()", &ADVANCE_CALLS),
            ("regenerate()", &REGENERATE_CALLS),
        ] {
            let count = timer.count();
            if count > 0 {
                lines.push(format!(
                    "{:<16}{} calls, {:.3}s total, {:.4}ms avg",
                    label,
                    count,
                    timer.total_seconds(),
                    timer.average_seconds() * 1000.0
                ));
            }
        }
        lines
    }

    /// Print frame timing summary to stderr.
    pub fn print_summary() {
        if !super::is_enabled() {
            return;
        }

        eprintln!("\n=== Frame Timing ===");
        for line in summary_lines() {
            eprintln!("{line}");
        }
        eprintln!("====================");
    }
}
