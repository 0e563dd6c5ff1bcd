use noise::{NoiseFn, Simplex};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use std::fmt;

use hexworld_common::AxialCoord;

/// Scale applied to axial coordinates before sampling the noise field.
pub const NOISE_FREQUENCY: f64 = 0.1;

/// Deterministic 2D simplex noise keyed by a seed string.
///
/// The seed is hashed with SHA-256 and the digest seeds a ChaCha8 stream,
/// which in turn parameterizes the simplex permutation table. The same seed
/// string yields the same field on every platform and in every process.
#[derive(Clone)]
pub struct SeededNoiseField {
    seed: String,
    simplex: Simplex,
}

impl SeededNoiseField {
    pub fn new(seed: &str) -> Self {
        let digest: [u8; 32] = Sha256::digest(seed.as_bytes()).into();
        let mut rng = ChaCha8Rng::from_seed(digest);
        let simplex = Simplex::new(rng.next_u32());
        Self {
            seed: seed.to_owned(),
            simplex,
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Raw noise at `(x, y)`, always within `[-1, 1]`.
    pub fn noise(&self, x: f64, y: f64) -> f64 {
        self.simplex.get([x, y]).clamp(-1.0, 1.0)
    }

    /// Noise for a tile, sampled at the axial coordinate scaled by [`NOISE_FREQUENCY`].
    pub fn sample(&self, coord: AxialCoord) -> f64 {
        self.noise(
            f64::from(coord.q) * NOISE_FREQUENCY,
            f64::from(coord.r) * NOISE_FREQUENCY,
        )
    }
}

impl fmt::Debug for SeededNoiseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededNoiseField")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
