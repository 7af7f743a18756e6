//! Ordered chain of rotating arms.

use crate::component::Component;
use crate::error::{ComponentError, ComponentResult};
use crate::range::ComponentRanges;
use ep_core::timing::{Timer, frame_timing};
use ep_core::{EpError, Real};
use rand::Rng;
use serde::Serialize;

/// The chain of arms, in summation order.
///
/// Membership is fixed between regenerations. Angles change only through
/// `set_phase`, which the simulator calls once per frame on the set it owns;
/// hosts only ever see that set through a shared reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentSet {
    components: Vec<Component>,
}

impl ComponentSet {
    /// Draw a fresh chain from `ranges`. Never empty, since a
    /// `ComponentRanges` cannot hold a count range starting at zero.
    pub fn generate<R: Rng + ?Sized>(ranges: &ComponentRanges, rng: &mut R) -> Self {
        let mut set = Self::default();
        set.regenerate(ranges, rng);
        set
    }

    /// Chain from explicit arms, in the given order.
    pub fn from_components(components: Vec<Component>) -> ComponentResult<Self> {
        if components.is_empty() {
            return Err(ComponentError::Core(EpError::InvalidArg {
                what: "component set must not be empty",
            }));
        }
        Ok(Self { components })
    }

    /// Replace every arm with a new random draw, all at angle zero.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, ranges: &ComponentRanges, rng: &mut R) {
        let timer = Timer::start();
        self.components.clear();

        let amount = ranges.count().sample(rng);
        self.components.reserve(amount);
        for _ in 0..amount {
            let magnitude = ranges.magnitude().sample(rng);
            let rotation_factor = ranges.rotation_factor().sample(rng);
            self.components
                .push(Component::from_validated(magnitude, rotation_factor));
        }

        tracing::debug!(count = amount, "regenerated component set");
        timer.stop_into(&frame_timing::REGENERATE_CALLS);
    }

    /// Set every arm's angle for `normalized` progress through the cycle.
    #[doc(hidden)]
    pub fn set_phase(&mut self, normalized: Real) {
        for component in &mut self.components {
            component.set_phase(normalized);
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Component> {
        self.components.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> + '_ {
        self.components.iter()
    }

    /// Upper bound on how far the chain tip can reach from the origin.
    pub fn reach(&self) -> Real {
        self.components.iter().map(Component::magnitude).sum()
    }
}

impl<'a> IntoIterator for &'a ComponentSet {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
