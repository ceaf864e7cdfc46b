use std::time::Instant;

use image::RgbaImage;
use log::info;

use crate::FieldFn;
use crate::field::{Extent, Field};
use crate::fractal::synthesize;
use crate::mutator::Mutator;
use crate::pipeline::compose;
use crate::sampler::{DisplacementSampler, ImageSource, NoiseSampler, rasterize};
use crate::settings::{Axis, Settings};

// The two displacement fields of one piece, plus the mutators for each axis.
// The x-field is seeded with `seed` and the y-field with `seed + 1` so the
// two axes never displace in lockstep.
pub struct Artwork {
    seed: u64,
    x_field: Field,
    y_field: Field,
    x_mutators: Vec<Mutator>,
    y_mutators: Vec<Mutator>,
}

impl Artwork {
    pub fn new(width: u32, height: u32, seed: u64, settings: &Settings) -> Self {
        let started = Instant::now();
        // The axes are independent, build them side by side
        let (x_field, y_field) = rayon::join(
            || synthesize(width, height, seed, &settings.x.noise),
            || synthesize(width, height, seed.wrapping_add(1), &settings.y.noise),
        );
        info!(
            "built {}x{} displacement fields for seed {} in {:?}",
            width,
            height,
            seed,
            started.elapsed()
        );

        Self {
            seed,
            x_field,
            y_field,
            x_mutators: settings.x.mutators.clone(),
            y_mutators: settings.y.mutators.clone(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn extent(&self) -> Extent {
        self.x_field.extent()
    }

    // Unmutated field of one axis
    pub fn field(&self, axis: Axis) -> &Field {
        match axis {
            Axis::X => &self.x_field,
            Axis::Y => &self.y_field,
        }
    }

    // Field of one axis seen through its mutators
    pub fn mutated(&self, axis: Axis) -> Box<dyn FieldFn + '_> {
        match axis {
            Axis::X => compose(&self.x_field, &self.x_mutators),
            Axis::Y => compose(&self.y_field, &self.y_mutators),
        }
    }

    // Greyscale preview of one mutated axis
    pub fn noise_image(&self, axis: Axis) -> RgbaImage {
        let Extent { width, height } = self.extent();
        rasterize(width, height, &NoiseSampler::new(self.mutated(axis)))
    }

    // Resample `source` through both mutated fields at the artwork's size
    pub fn render<S: ImageSource>(&self, source: &S) -> RgbaImage {
        let started = Instant::now();
        let Extent { width, height } = self.extent();
        let image_extent = source.extent();

        let sampler = DisplacementSampler::new(
            self.mutated(Axis::X),
            self.mutated(Axis::Y),
            source,
        );
        let out = rasterize(width, height, &sampler);

        info!(
            "rendered {}x{} artwork from {}x{} source in {:?}",
            width,
            height,
            image_extent.width,
            image_extent.height,
            started.elapsed()
        );
        out
    }
}
