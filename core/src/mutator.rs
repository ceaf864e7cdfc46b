use serde::{Deserialize, Serialize};

use crate::FieldFn;

// Contour lines are kept where (v * CONTOUR_SCALE) mod CONTOUR_SPACING < CONTOUR_WIDTH
const CONTOUR_SCALE: f64 = 1000.0;
const CONTOUR_SPACING: f64 = 50.0;
const CONTOUR_WIDTH: f64 = 5.0;
// Number of terraces per unit for the stepped variant
const STEP_LEVELS: f64 = 10.0;

// A pure transform from one field-sampling function to another.
// Serialized by name, e.g. "topographicalStep".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mutator {
    Topographical,     // thin contour lines, zero in between
    TopographicalStep, // flat terraces at multiples of 0.1
    Inverse,           // 1 - v
    ImageMultiplierX,  // offset by the relative x position
    ImageMultiplierY,  // offset by the relative y position
}

impl Mutator {
    // Evaluate this mutator around `inner` at (x, y)
    pub fn apply(&self, inner: &dyn FieldFn, x: u32, y: u32) -> f64 {
        match self {
            Mutator::Topographical => {
                let v = inner.get2(x, y);
                // `%` keeps the sign of v, so negative values always pass
                if (v * CONTOUR_SCALE) % CONTOUR_SPACING < CONTOUR_WIDTH {
                    v
                } else {
                    0.0
                }
            }
            Mutator::TopographicalStep => (inner.get2(x, y) * STEP_LEVELS).floor() / STEP_LEVELS,
            Mutator::Inverse => 1.0 - inner.get2(x, y),
            Mutator::ImageMultiplierX => {
                inner.get2(x, y) + relative_offset(x, inner.width())
            }
            Mutator::ImageMultiplierY => {
                inner.get2(x, y) + relative_offset(y, inner.height())
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mutator::Topographical => "topographical",
            Mutator::TopographicalStep => "topographicalStep",
            Mutator::Inverse => "inverse",
            Mutator::ImageMultiplierX => "imageMultiplierX",
            Mutator::ImageMultiplierY => "imageMultiplierY",
        }
    }
}

// Pixel-center position of `coord` as a fraction of `extent`, centered on zero.
// Added to a field, a value of 0.5 then reads the source at the pixel's own
// proportional position, so the source is stretched over the whole output
// whatever its size, and the noise displaces around that.
#[inline]
fn relative_offset(coord: u32, extent: u32) -> f64 {
    (coord as f64 + 0.5) / extent as f64 - 0.5
}
