//! Engine configuration and named presets.
//!
//! `Canvas` draws wide, slow arms over a 20 s cycle; `Accelerated` keeps the
//! magnitudes tight and lets arms spin faster over 40 s.
//! [`EpicycleConfig::default`] is the canvas preset.

use crate::error::{SimError, SimResult};
use ep_components::ComponentRanges;
use ep_core::Real;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Progress domain and duration of one animation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleConfig {
    /// Progress value at which a cycle ends. Progress runs over `[0, end]`.
    pub end: Real,
    /// Wall-clock length of one cycle in seconds.
    pub length_s: Real,
}

impl CycleConfig {
    pub fn validate(&self) -> SimResult<()> {
        if !self.end.is_finite() || self.end <= 0.0 {
            return Err(SimError::InvalidConfig {
                what: "cycle end must be finite and positive",
            });
        }
        if !self.length_s.is_finite() || self.length_s <= 0.0 {
            return Err(SimError::InvalidConfig {
                what: "cycle length must be finite and positive",
            });
        }
        Ok(())
    }
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            end: 1.0,
            length_s: 20.0,
        }
    }
}

/// Full engine configuration.
///
/// `ranges` are checked when built or deserialized; [`validate`](Self::validate)
/// covers the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpicycleConfig {
    pub ranges: ComponentRanges,
    #[serde(default)]
    pub cycle: CycleConfig,
}

impl EpicycleConfig {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Canvas => Self {
                ranges: ComponentRanges::CANVAS,
                cycle: CycleConfig {
                    end: 1.0,
                    length_s: 20.0,
                },
            },
            Preset::Accelerated => Self {
                ranges: ComponentRanges::ACCELERATED,
                cycle: CycleConfig {
                    end: 1.0,
                    length_s: 40.0,
                },
            },
        }
    }

    /// Reject a cycle that would give NaN geometry.
    pub fn validate(&self) -> SimResult<()> {
        self.cycle.validate()
    }
}

impl Default for EpicycleConfig {
    fn default() -> Self {
        Self::preset(Preset::Canvas)
    }
}

/// Named configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    #[default]
    Canvas,
    Accelerated,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Canvas, Preset::Accelerated];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Canvas => "canvas",
            Preset::Accelerated => "accelerated",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SimError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ep_components::CountRange;

    #[test]
    fn presets_are_valid() {
        for preset in Preset::ALL {
            EpicycleConfig::preset(preset).validate().unwrap();
        }
        assert_eq!(EpicycleConfig::default(), EpicycleConfig::preset(Preset::Canvas));
    }

    #[test]
    fn preset_names_parse() {
        assert_eq!("canvas".parse::<Preset>().unwrap(), Preset::Canvas);
        assert_eq!(" Accelerated ".parse::<Preset>().unwrap(), Preset::Accelerated);
        assert!(matches!(
            "metal".parse::<Preset>(),
            Err(SimError::UnknownPreset(name)) if name == "metal"
        ));
    }

    #[test]
    fn yaml_rejects_empty_count() {
        let yaml = r#"
ranges:
  count: { min: 0, max: 0 }
  magnitude: { min: 50.0, max: 150.0 }
  rotation_factor: { min: 0.5, max: 4.0 }
"#;
        let err = serde_yaml::from_str::<EpicycleConfig>(yaml).unwrap_err();
        assert!(err.to_string().contains("count range"), "{err}");
    }

    #[test]
    fn yaml_rejects_inverted_magnitude() {
        let yaml = r#"
ranges:
  count: { min: 5, max: 40 }
  magnitude: { min: 150.0, max: 50.0 }
  rotation_factor: { min: 0.5, max: 4.0 }
"#;
        let err = serde_yaml::from_str::<EpicycleConfig>(yaml).unwrap_err();
        assert!(err.to_string().contains("magnitude"), "{err}");
    }

    #[test]
    fn validate_rejects_bad_cycle() {
        let mut cfg = EpicycleConfig::default();
        cfg.cycle.end = 0.0;
        assert!(matches!(cfg.validate(), Err(SimError::InvalidConfig { .. })));

        let mut cfg = EpicycleConfig::default();
        cfg.cycle.length_s = f64::INFINITY;
        assert!(matches!(cfg.validate(), Err(SimError::InvalidConfig { .. })));
    }

    #[test]
    fn yaml_without_cycle_uses_default() {
        let yaml = r#"
ranges:
  count: { min: 3, max: 7 }
  magnitude: { min: 10.0, max: 20.0 }
  rotation_factor: { min: 1.0, max: 2.0 }
"#;
        let cfg: EpicycleConfig = serde_yaml::from_str(yaml).unwrap();
        cfg.validate().unwrap();
        assert_eq!(cfg.cycle, CycleConfig::default());
        assert_eq!(cfg.ranges.count(), CountRange::new(3, 7));
    }
}
