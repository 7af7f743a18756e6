//! ep-components: the rotating-arm model behind an epicycle chain.
//!
//! Provides:
//! - `PolarVector` / `Component`: one arm with a fixed magnitude and rotation factor
//! - `ComponentSet`: the ordered chain, regenerated from random draws
//! - `ComponentRanges`: validated sampling ranges for count, magnitude and speed
//!
//! Randomness is always injected. Nothing in this crate touches a global
//! generator, so a seeded `StdRng` reproduces a chain exactly.
//!
//! # Example
//!
//! ```
//! use ep_components::{ComponentRanges, ComponentSet, CountRange, ParamRange};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let ranges = ComponentRanges::new(
//!     CountRange::new(5, 40),
//!     ParamRange::new(50.0, 150.0),
//!     ParamRange::new(0.5, 4.0),
//! )
//! .unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let set = ComponentSet::generate(&ranges, &mut rng);
//! assert!((5..=40).contains(&set.len()));
//! ```

pub mod component;
pub mod error;
pub mod range;
pub mod set;

// Re-exports
pub use component::{Component, PolarVector};
pub use error::{ComponentError, ComponentResult};
pub use range::{ComponentRanges, CountRange, ParamRange};
pub use set::ComponentSet;
