//! Sampling ranges for component generation.
//!
//! All ranges are inclusive on both ends. A range with `min == max` is legal
//! and always yields that value.
//!
//! `CountRange` and `ParamRange` are plain bounds. Only a [`ComponentRanges`]
//! can be sampled, and it is validated when built or deserialized, so
//! generation never sees an empty or inverted range.

use crate::error::{ComponentError, ComponentResult};
use ep_core::{Real, ensure_positive};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive range for the number of arms in a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, n: usize) -> bool {
        (self.min..=self.max).contains(&n)
    }

    /// A chain needs at least one arm, and `min <= max`.
    pub fn validate(&self) -> ComponentResult<()> {
        if self.min == 0 || self.min > self.max {
            return Err(ComponentError::EmptyCount {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(self.min..=self.max)
    }
}

/// Inclusive range for a strictly positive float parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: Real,
    pub max: Real,
}

impl ParamRange {
    pub const fn new(min: Real, max: Real) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: Real) -> bool {
        v >= self.min && v <= self.max
    }

    /// Both bounds finite and positive, `min <= max`.
    pub fn validate(&self, what: &'static str) -> ComponentResult<()> {
        ensure_positive(self.min, what)?;
        ensure_positive(self.max, what)?;
        if self.min > self.max {
            return Err(ComponentError::InvalidRange {
                what,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Real {
        rng.gen_range(self.min..=self.max)
    }
}

/// Everything `ComponentSet::regenerate` draws from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRanges")]
pub struct ComponentRanges {
    count: CountRange,
    magnitude: ParamRange,
    rotation_factor: ParamRange,
}

#[derive(Deserialize)]
struct RawRanges {
    count: CountRange,
    magnitude: ParamRange,
    rotation_factor: ParamRange,
}

impl TryFrom<RawRanges> for ComponentRanges {
    type Error = ComponentError;

    fn try_from(raw: RawRanges) -> ComponentResult<Self> {
        Self::new(raw.count, raw.magnitude, raw.rotation_factor)
    }
}

impl ComponentRanges {
    /// Wide, slow arms.
    pub const CANVAS: Self = Self {
        count: CountRange::new(5, 40),
        magnitude: ParamRange::new(50.0, 150.0),
        rotation_factor: ParamRange::new(0.5, 4.0),
    };

    /// Tight magnitudes, fast arms.
    pub const ACCELERATED: Self = Self {
        count: CountRange::new(5, 40),
        magnitude: ParamRange::new(50.0, 60.0),
        rotation_factor: ParamRange::new(0.5, 10.5),
    };

    /// # Errors
    ///
    /// `EmptyCount` if the count range is empty or starts at zero,
    /// `InvalidRange` if a float range is inverted, and `Core` if a bound is
    /// not finite and positive.
    pub fn new(
        count: CountRange,
        magnitude: ParamRange,
        rotation_factor: ParamRange,
    ) -> ComponentResult<Self> {
        count.validate()?;
        magnitude.validate("magnitude")?;
        rotation_factor.validate("rotation_factor")?;
        Ok(Self {
            count,
            magnitude,
            rotation_factor,
        })
    }

    pub fn count(&self) -> CountRange {
        self.count
    }

    pub fn magnitude(&self) -> ParamRange {
        self.magnitude
    }

    pub fn rotation_factor(&self) -> ParamRange {
        self.rotation_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ep_core::EpError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn count_range_rejects_zero_and_inverted() {
        assert!(CountRange::new(5, 40).validate().is_ok());
        assert!(CountRange::new(1, 1).validate().is_ok());
        assert_eq!(
            CountRange::new(0, 10).validate(),
            Err(ComponentError::EmptyCount { min: 0, max: 10 })
        );
        assert!(CountRange::new(10, 5).validate().is_err());
    }

    #[test]
    fn param_range_rejects_bad_bounds() {
        assert!(ParamRange::new(0.5, 4.0).validate("rotation_factor").is_ok());
        assert!(matches!(
            ParamRange::new(150.0, 50.0).validate("magnitude"),
            Err(ComponentError::InvalidRange {
                what: "magnitude",
                ..
            })
        ));
        assert!(matches!(
            ParamRange::new(0.0, 50.0).validate("magnitude"),
            Err(ComponentError::Core(EpError::NonPositive { .. }))
        ));
        assert!(matches!(
            ParamRange::new(1.0, f64::NAN).validate("magnitude"),
            Err(ComponentError::Core(EpError::NonFinite { .. }))
        ));
    }

    #[test]
    fn degenerate_ranges_yield_exact_value() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(CountRange::new(3, 3).sample(&mut rng), 3);
        assert_eq!(ParamRange::new(10.0, 10.0).sample(&mut rng), 10.0);
    }

    #[test]
    fn samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(99);
        let count = CountRange::new(5, 40);
        let mag = ParamRange::new(50.0, 60.0);
        for _ in 0..1_000 {
            assert!(count.contains(count.sample(&mut rng)));
            assert!(mag.contains(mag.sample(&mut rng)));
        }
    }

    #[test]
    fn built_in_ranges_are_valid() {
        for r in [ComponentRanges::CANVAS, ComponentRanges::ACCELERATED] {
            assert_eq!(
                ComponentRanges::new(r.count(), r.magnitude(), r.rotation_factor()),
                Ok(r)
            );
        }
    }

    #[test]
    fn new_rejects_each_bad_shape() {
        let mag = ParamRange::new(50.0, 150.0);
        let rot = ParamRange::new(0.5, 4.0);
        assert_eq!(
            ComponentRanges::new(CountRange::new(0, 0), mag, rot),
            Err(ComponentError::EmptyCount { min: 0, max: 0 })
        );
        assert!(matches!(
            ComponentRanges::new(CountRange::new(5, 40), ParamRange::new(150.0, 50.0), rot),
            Err(ComponentError::InvalidRange { what: "magnitude", .. })
        ));
        assert!(matches!(
            ComponentRanges::new(CountRange::new(5, 40), mag, ParamRange::new(-1.0, 4.0)),
            Err(ComponentError::Core(EpError::NonPositive { .. }))
        ));
    }
}
