use noise::{NoiseFn, OpenSimplex};

// Seeded 2D coherent noise. Output lies in [-1, +1] and is fully determined
// by the seed the primitive was built with.
pub trait NoisePrimitive: Send + Sync {
    fn evaluate(&self, x: f64, y: f64) -> f64;
}

// OpenSimplex noise from the `noise` crate
pub struct OpenSimplex2D {
    seed: u64,
    simplex: OpenSimplex,
}

impl OpenSimplex2D {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            simplex: OpenSimplex::new(fold_seed(seed)),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl NoisePrimitive for OpenSimplex2D {
    #[inline]
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        self.simplex.get([x, y])
    }
}

// OpenSimplex takes a 32-bit seed; mix the high half in so that timestamp
// seeds differing only above bit 32 still produce different streams.
fn fold_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}
