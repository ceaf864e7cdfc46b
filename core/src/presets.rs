use std::str::FromStr;

use crate::error::SettingsError;
use crate::mutator::Mutator;
use crate::settings::{AxisOverrides, NoiseOverrides, Settings, SettingsFile};

// Named settings that produce interesting results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Default,
    // The "classic" look, between a satellite view of beaches and a mineral deposit
    Minerality,
    // Smooth curves, hard edges and noisy-but-smooth distortion
    Blobs,
    // Blobs on x, crunchy minerals on y
    MineralBlobs,
    // Stylized topographical map
    Topo,
    // Contour lines on both axes, crunchier y
    TopoMax,
    // Mostly the source image, sliced by wavy contour lines
    ImageDistort,
}

fn noise(frequency: Option<f64>, amplitude: Option<f64>, octaves: Option<u32>) -> NoiseOverrides {
    NoiseOverrides {
        frequency,
        amplitude,
        octaves,
    }
}

fn axis(noise: NoiseOverrides, mutators: &[Mutator]) -> AxisOverrides {
    AxisOverrides {
        noise,
        mutators: mutators.to_vec(),
    }
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Default,
        Preset::Minerality,
        Preset::Blobs,
        Preset::MineralBlobs,
        Preset::Topo,
        Preset::TopoMax,
        Preset::ImageDistort,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Minerality => "minerality",
            Preset::Blobs => "blobs",
            Preset::MineralBlobs => "mineral-blobs",
            Preset::Topo => "topo",
            Preset::TopoMax => "topo-max",
            Preset::ImageDistort => "image-distort",
        }
    }

    pub fn from_name(name: &str) -> Result<Preset, SettingsError> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| SettingsError::UnknownPreset(name.to_string()))
    }

    // The unmerged common/axis layout of this preset
    pub fn settings_file(&self) -> SettingsFile {
        use Mutator::*;

        match self {
            Preset::Default => SettingsFile {
                common: axis(noise(Some(0.002), Some(2.0), None), &[]),
                x: axis(noise(None, None, Some(3)), &[]),
                y: axis(noise(None, None, Some(8)), &[]),
            },
            Preset::Minerality => SettingsFile {
                common: axis(noise(Some(0.002), Some(2.0), Some(8)), &[]),
                ..Default::default()
            },
            Preset::Blobs => SettingsFile {
                common: axis(noise(Some(0.002), Some(2.0), Some(2)), &[]),
                x: axis(noise(Some(0.004), None, None), &[TopographicalStep]),
                ..Default::default()
            },
            Preset::MineralBlobs => SettingsFile {
                common: axis(noise(None, Some(2.0), None), &[]),
                x: axis(noise(Some(0.004), None, Some(2)), &[TopographicalStep]),
                y: axis(noise(Some(0.002), None, Some(8)), &[]),
            },
            Preset::Topo => SettingsFile {
                common: axis(noise(Some(0.002), Some(2.0), None), &[]),
                x: axis(noise(None, None, Some(2)), &[Topographical]),
                y: axis(noise(None, None, Some(8)), &[]),
            },
            Preset::TopoMax => SettingsFile {
                common: axis(noise(Some(0.002), Some(2.0), None), &[Topographical]),
                x: axis(noise(None, None, Some(2)), &[]),
                y: axis(noise(None, None, Some(8)), &[]),
            },
            Preset::ImageDistort => SettingsFile {
                common: axis(noise(Some(0.002), Some(1.0), None), &[Topographical, Inverse]),
                x: axis(noise(None, None, Some(2)), &[ImageMultiplierX]),
                y: axis(noise(None, None, Some(8)), &[ImageMultiplierY]),
            },
        }
    }

    pub fn settings(&self) -> Result<Settings, SettingsError> {
        self.settings_file().resolve()
    }
}

impl FromStr for Preset {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::from_name(s)
    }
}
