// core holds the noise fields, the mutator pipeline and the displacement sampler
pub mod artwork;
pub mod error;
pub mod field;
pub mod fractal;
pub mod mutator;
pub mod pipeline;
pub mod presets;
pub mod primitive;
pub mod sampler;
pub mod settings;

pub use artwork::Artwork;
pub use error::SettingsError;
pub use field::{Extent, Field};
pub use fractal::{NoiseParameters, synthesize};
pub use mutator::Mutator;
pub use pipeline::compose;
pub use presets::Preset;
pub use primitive::{NoisePrimitive, OpenSimplex2D};
pub use sampler::{DisplacementSampler, ImageSource, NoiseSampler, PixelFn, TargetRange, rasterize};
pub use settings::{Axis, AxisOverrides, AxisSettings, NoiseOverrides, Settings, SettingsFile};

// A scalar field that can be sampled at integer lattice points.
// Implemented by frozen `Field`s and by every layer a pipeline wraps around them.
pub trait FieldFn {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    // Sample the field at (x, y), with 0 <= x < width and 0 <= y < height.
    fn get2(&self, x: u32, y: u32) -> f64;

    fn extent(&self) -> Extent {
        Extent::new(self.width(), self.height())
    }
}

impl<T: FieldFn + ?Sized> FieldFn for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn get2(&self, x: u32, y: u32) -> f64 {
        (**self).get2(x, y)
    }
}

impl<T: FieldFn + ?Sized> FieldFn for Box<T> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn get2(&self, x: u32, y: u32) -> f64 {
        (**self).get2(x, y)
    }
}
