use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::fractal::NoiseParameters;
use crate::mutator::Mutator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

// Partially specified noise parameters; unset keys fall through to the common settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseOverrides {
    pub frequency: Option<f64>,
    pub amplitude: Option<f64>,
    pub octaves: Option<u32>,
}

impl NoiseOverrides {
    // Key-by-key merge, keys set in `overrides` win
    pub fn merge(&self, overrides: &NoiseOverrides) -> NoiseOverrides {
        NoiseOverrides {
            frequency: overrides.frequency.or(self.frequency),
            amplitude: overrides.amplitude.or(self.amplitude),
            octaves: overrides.octaves.or(self.octaves),
        }
    }

    // Every key must be set; frequency and amplitude finite and positive, octaves at least 1
    pub fn resolve(&self, axis: Axis) -> Result<NoiseParameters, SettingsError> {
        let missing = |parameter| SettingsError::MissingParameter { axis, parameter };
        let invalid = |parameter| SettingsError::InvalidParameter { axis, parameter };

        let frequency = self.frequency.ok_or_else(|| missing("frequency"))?;
        let amplitude = self.amplitude.ok_or_else(|| missing("amplitude"))?;
        let octaves = self.octaves.ok_or_else(|| missing("octaves"))?;

        if !(frequency.is_finite() && frequency > 0.0) {
            return Err(invalid("frequency"));
        }
        if !(amplitude.is_finite() && amplitude > 0.0) {
            return Err(invalid("amplitude"));
        }
        if octaves == 0 {
            return Err(invalid("octaves"));
        }

        Ok(NoiseParameters {
            frequency,
            amplitude,
            octaves,
        })
    }
}

// Settings for one axis, or the common settings shared by both
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxisOverrides {
    pub noise: NoiseOverrides,
    pub mutators: Vec<Mutator>,
}

impl AxisOverrides {
    // Noise keys set on the axis override the common keys one by one.
    // Axis mutators are appended after the common ones, which therefore end
    // up outermost in the composed pipeline.
    pub fn merge(common: &AxisOverrides, axis: &AxisOverrides) -> AxisOverrides {
        AxisOverrides {
            noise: common.noise.merge(&axis.noise),
            mutators: common
                .mutators
                .iter()
                .chain(axis.mutators.iter())
                .copied()
                .collect(),
        }
    }

    pub fn resolve(&self, axis: Axis) -> Result<AxisSettings, SettingsError> {
        Ok(AxisSettings {
            noise: self.noise.resolve(axis)?,
            mutators: self.mutators.clone(),
        })
    }
}

// Fully resolved settings for one axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSettings {
    pub noise: NoiseParameters,
    pub mutators: Vec<Mutator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub x: AxisSettings,
    pub y: AxisSettings,
}

impl Settings {
    pub fn axis(&self, axis: Axis) -> &AxisSettings {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

// Layout of a settings file: common settings plus per-axis overrides, e.g.
//
//   {
//     "common": { "noise": { "frequency": 0.002, "amplitude": 2 } },
//     "x": { "noise": { "octaves": 3 }, "mutators": ["topographical"] },
//     "y": { "noise": { "octaves": 8 } }
//   }
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub common: AxisOverrides,
    pub x: AxisOverrides,
    pub y: AxisOverrides,
}

impl SettingsFile {
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }

    // Merged, still partial, settings for one axis
    pub fn merged(&self, axis: Axis) -> AxisOverrides {
        match axis {
            Axis::X => AxisOverrides::merge(&self.common, &self.x),
            Axis::Y => AxisOverrides::merge(&self.common, &self.y),
        }
    }

    pub fn resolve(&self) -> Result<Settings, SettingsError> {
        Ok(Settings {
            x: self.merged(Axis::X).resolve(Axis::X)?,
            y: self.merged(Axis::Y).resolve(Axis::Y)?,
        })
    }
}
