use image::{Rgba, RgbaImage};

use crate::FieldFn;
use crate::field::Extent;

// Full opacity for every generated pixel
const OPAQUE: u8 = 255;
// Display range for greyscale previews: [0, 1) maps onto [0, 256)
const GREY_LEVELS: f64 = 256.0;

// Anything a displacement map can read pixels from.
// Addressed with integer coordinates inside its own extent.
pub trait ImageSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn pixel(&self, x: u32, y: u32) -> Rgba<u8>;

    fn extent(&self) -> Extent {
        Extent::new(self.width(), self.height())
    }
}

impl ImageSource for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.get_pixel(x, y)
    }
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        (**self).pixel(x, y)
    }
}

// A pure (x, y) -> RGBA function over an output surface
pub trait PixelFn {
    fn pixel(&self, x: u32, y: u32) -> Rgba<u8>;
}

// Interval a normalized field value is stretched onto: v * (max - min) + min
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRange {
    pub min: f64,
    pub max: f64, // exclusive
}

impl TargetRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    // [0, n), e.g. one image dimension
    pub fn extent(n: u32) -> Self {
        Self::new(0.0, n as f64)
    }

    #[inline]
    pub fn scale(&self, value: f64) -> f64 {
        value * (self.max - self.min) + self.min
    }
}

// Floor a real coordinate and clamp it into [0, extent - 1].
// NaN lands on 0.
#[inline]
pub fn clamp_coordinate(value: f64, extent: u32) -> u32 {
    let max = extent.saturating_sub(1) as f64;
    value.floor().clamp(0.0, max) as u32
}

// Output pixel (x, y) reads the source at
// (x_field(x, y) * source.width, y_field(x, y) * source.height),
// floored and clamped to the source bounds, so field values outside [0, 1)
// land on the nearest edge.
pub struct DisplacementSampler<X, Y, S> {
    x_field: X,
    y_field: Y,
    source: S,
    x_range: TargetRange,
    y_range: TargetRange,
}

impl<X: FieldFn, Y: FieldFn, S: ImageSource> DisplacementSampler<X, Y, S> {
    pub fn new(x_field: X, y_field: Y, source: S) -> Self {
        let x_range = TargetRange::extent(source.width());
        let y_range = TargetRange::extent(source.height());
        Self::with_ranges(x_field, y_field, source, x_range, y_range)
    }

    // Stretch each field onto an explicit interval instead of the source extent
    pub fn with_ranges(
        x_field: X,
        y_field: Y,
        source: S,
        x_range: TargetRange,
        y_range: TargetRange,
    ) -> Self {
        Self {
            x_field,
            y_field,
            source,
            x_range,
            y_range,
        }
    }

    // Source pixel read for output pixel (x, y)
    pub fn source_coordinates(&self, x: u32, y: u32) -> (u32, u32) {
        let src_x = self.x_range.scale(self.x_field.get2(x, y));
        let src_y = self.y_range.scale(self.y_field.get2(x, y));
        (
            clamp_coordinate(src_x, self.source.width()),
            clamp_coordinate(src_y, self.source.height()),
        )
    }
}

impl<X: FieldFn, Y: FieldFn, S: ImageSource> PixelFn for DisplacementSampler<X, Y, S> {
    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        let (sx, sy) = self.source_coordinates(x, y);
        self.source.pixel(sx, sy)
    }
}

// Greyscale view of a single field
pub struct NoiseSampler<F> {
    field: F,
}

impl<F: FieldFn> NoiseSampler<F> {
    pub fn new(field: F) -> Self {
        Self { field }
    }
}

impl<F: FieldFn> PixelFn for NoiseSampler<F> {
    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        let level = (self.field.get2(x, y) * GREY_LEVELS).floor().clamp(0.0, 255.0) as u8;
        Rgba([level, level, level, OPAQUE])
    }
}

// Evaluate `pixels` once for every point of a width x height surface
pub fn rasterize<P: PixelFn + ?Sized>(width: u32, height: u32, pixels: &P) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| pixels.pixel(x, y))
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::{
        DisplacementSampler, NoiseSampler, PixelFn, TargetRange, clamp_coordinate, rasterize,
    };
    use crate::field::Field;

    // 10x4 image whose red channel is the column and green the row
    fn coordinate_image() -> RgbaImage {
        RgbaImage::from_fn(10, 4, |x, y| Rgba([x as u8, y as u8, 0, 255]))
    }

    fn constant(v: f64) -> Field {
        Field::from_fn(3, 3, |_, _| v)
    }

    #[test]
    fn sampler_floors_coordinates() {
        let sampler = DisplacementSampler::new(constant(0.55), constant(0.3), coordinate_image());
        // 0.55 * 10 = 5.5, 0.3 * 4 = 1.2
        assert_eq!(sampler.pixel(1, 1), Rgba([5, 1, 0, 255]));
    }

    #[test]
    fn sampler_clamps_below_zero() {
        // -50 / 10 * 10 = -50
        let sampler = DisplacementSampler::new(constant(-5.0), constant(0.0), coordinate_image());
        assert_eq!(sampler.source_coordinates(0, 0), (0, 0));
        assert_eq!(sampler.pixel(2, 2), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn sampler_clamps_past_width() {
        // (10 + 50) / 10 * 10 = width + 50
        let sampler = DisplacementSampler::new(constant(6.0), constant(1.0), coordinate_image());
        assert_eq!(sampler.source_coordinates(1, 0), (9, 3));
        assert_eq!(sampler.pixel(1, 0), Rgba([9, 3, 0, 255]));
    }

    #[test]
    fn sampler_with_explicit_ranges() {
        let sampler = DisplacementSampler::with_ranges(
            constant(0.5),
            constant(0.5),
            coordinate_image(),
            TargetRange::new(2.0, 6.0),
            TargetRange::new(0.0, 2.0),
        );
        assert_eq!(sampler.source_coordinates(0, 0), (4, 1));
    }

    #[test]
    fn clamp_handles_nan() {
        assert_eq!(clamp_coordinate(f64::NAN, 10), 0);
        assert_eq!(clamp_coordinate(9.99, 10), 9);
    }

    #[test]
    fn noise_sampler_greyscale() {
        let half = NoiseSampler::new(constant(0.5));
        assert_eq!(half.pixel(0, 0), Rgba([128, 128, 128, 255]));
        // Amplified noise past 1.0 saturates
        let hot = NoiseSampler::new(constant(1.7));
        assert_eq!(hot.pixel(0, 0), Rgba([255, 255, 255, 255]));
        let cold = NoiseSampler::new(constant(-0.2));
        assert_eq!(cold.pixel(0, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn rasterize_covers_surface() {
        let field = Field::from_fn(5, 3, |x, _| x as f64 / 5.0);
        let img = rasterize(5, 3, &NoiseSampler::new(&field));
        assert_eq!(img.dimensions(), (5, 3));
        assert_eq!(img.get_pixel(4, 2), &Rgba([204, 204, 204, 255]));
    }
}
