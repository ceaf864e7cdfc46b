use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::primitive::{NoisePrimitive, OpenSimplex2D};

// Weight multiplier applied to each successive octave
pub const PERSISTENCE: f64 = 0.5;
// Frequency multiplier applied to each successive octave
pub const LACUNARITY: f64 = 2.0;

// Shape of the fractal noise sampled into a field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseParameters {
    pub frequency: f64, // Higher values give a tighter, more repetitive pattern
    pub amplitude: f64, // 1.0 keeps the output in [0, 1); larger values push past it
    pub octaves: u32,   // Fewer octaves are smoother, more are cloud-like
}

impl NoiseParameters {
    pub fn new(frequency: f64, amplitude: f64, octaves: u32) -> Self {
        Self {
            frequency,
            amplitude,
            octaves,
        }
    }
}

// Fractal Brownian motion at (x, y).
// Octave o samples at frequency * LACUNARITY^o with weight amplitude * PERSISTENCE^o.
// The total is divided by the weight sum without amplitude, so amplitude > 1
// deliberately overshoots [-1, +1].
pub fn fbm<P: NoisePrimitive + ?Sized>(
    primitive: &P,
    params: &NoiseParameters,
    x: f64,
    y: f64,
) -> f64 {
    let mut weight = 1.0;
    let mut freq = params.frequency;
    let mut total = 0.0;
    let mut weight_sum = 0.0;

    for _ in 0..params.octaves {
        total += primitive.evaluate(x * freq, y * freq) * params.amplitude * weight;
        weight_sum += weight;
        weight *= PERSISTENCE;
        freq *= LACUNARITY;
    }

    total / weight_sum
}

// Map fractal output from [-1, +1] onto [0, 1)
#[inline]
pub fn normalize(value: f64) -> f64 {
    (value + 1.0) / 2.0
}

// Normalized OpenSimplex fBm over a width x height lattice. The same
// arguments always give the same field. Panics on a zero dimension or zero
// octaves; user input is validated by `NoiseOverrides::resolve` first.
pub fn synthesize(width: u32, height: u32, seed: u64, params: &NoiseParameters) -> Field {
    let started = Instant::now();
    let primitive = OpenSimplex2D::new(seed);
    let field = synthesize_with(&primitive, width, height, params);
    debug!(
        "synthesized {}x{} field (seed {}, frequency {}, amplitude {}, octaves {}) in {:?}",
        width,
        height,
        primitive.seed(),
        params.frequency,
        params.amplitude,
        params.octaves,
        started.elapsed()
    );
    field
}

// Same as `synthesize`, for any primitive.
pub fn synthesize_with<P: NoisePrimitive + ?Sized>(
    primitive: &P,
    width: u32,
    height: u32,
    params: &NoiseParameters,
) -> Field {
    assert!(
        width > 0 && height > 0,
        "field dimensions must be positive, got {}x{}",
        width,
        height
    );
    assert!(params.octaves > 0, "octaves must be at least 1");

    Field::from_fn(width, height, |x, y| {
        normalize(fbm(primitive, params, x as f64, y as f64))
    })
}

#[cfg(test)]
mod tests {
    use super::{NoiseParameters, fbm, normalize, synthesize, synthesize_with};
    use crate::primitive::NoisePrimitive;

    // Always returns the same raw value
    struct Flat(f64);

    impl NoisePrimitive for Flat {
        fn evaluate(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn fractal_determinism() {
        let params = NoiseParameters::new(0.01, 2.0, 4);
        let a = synthesize(32, 24, 42, &params);
        let b = synthesize(32, 24, 42, &params);
        assert_eq!(a, b);
    }

    #[test]
    fn fractal_seed_sensitivity() {
        let params = NoiseParameters::new(0.05, 1.0, 3);
        let a = synthesize(16, 16, 7, &params);
        let b = synthesize(16, 16, 8, &params);
        assert_ne!(a, b);
    }

    #[test]
    fn fractal_baseline_range() {
        let params = NoiseParameters::new(0.03, 1.0, 1);
        let f = synthesize(64, 64, 2025, &params);
        for &v in f.values() {
            assert!((0.0..1.0).contains(&v), "value {} outside [0, 1)", v);
        }
    }

    #[test]
    fn fractal_weights_sum_to_one() {
        // A constant primitive is unchanged by the octave weighting
        let params = NoiseParameters::new(0.1, 1.0, 5);
        let v = fbm(&Flat(0.6), &params, 3.0, 4.0);
        assert!((v - 0.6).abs() < 1e-12);
    }

    #[test]
    fn fractal_amplitude_overshoots() {
        let params = NoiseParameters::new(0.1, 2.0, 2);
        let f = synthesize_with(&Flat(1.0), 2, 2, &params);
        assert_eq!(f.get(1, 1), normalize(2.0));
        assert!(f.get(0, 0) > 1.0);
    }

    #[test]
    #[should_panic]
    fn fractal_zero_octaves_panics() {
        let _ = synthesize(4, 4, 1, &NoiseParameters::new(0.1, 1.0, 0));
    }

    #[test]
    #[should_panic]
    fn fractal_zero_height_panics() {
        let _ = synthesize(4, 0, 1, &NoiseParameters::new(0.1, 1.0, 1));
    }
}
