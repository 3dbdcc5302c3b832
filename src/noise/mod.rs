//! 2D gradient (simplex-style) noise, seeded from a [`DeterministicRng`].

use crate::core::error::{Result, WorldGenError};
use crate::rng::DeterministicRng;

const F2: f64 = 0.36602540378; // (sqrt(3) - 1) / 2
const G2: f64 = 0.21132486541; // (3 - sqrt(3)) / 6

/// The fixed 12-vector gradient set used by classic simplex noise; only the
/// first two components of each 3D vector are used for the 2D case.
const GRAD3: [(f64, f64); 12] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

/// Gradient noise source with a 512-entry permutation table (256 shuffled
/// values doubled over, to avoid modular wrap-around during lookups).
#[derive(Debug, Clone)]
pub struct GradientNoise {
    perm: Vec<u8>,
}

impl GradientNoise {
    /// Build a permutation table by shuffling identity `[0, 256)` with the
    /// given RNG stream, then doubling it to 512 entries.
    pub fn new(rng: &mut DeterministicRng) -> Result<Self> {
        let mut base: Vec<u8> = (0..=255u16).map(|v| v as u8).collect();
        rng.shuffle(&mut base);
        if base.len() != 256 {
            return Err(WorldGenError::PermutationTableError {
                expected: 256,
                actual: base.len(),
            });
        }
        let mut perm = base.clone();
        perm.extend(base);
        Ok(Self { perm })
    }

    fn grad_index(&self, ii: i64, jj: i64) -> usize {
        let ii = (ii & 255) as usize;
        let jj = (jj & 255) as usize;
        (self.perm[ii as usize + self.perm[jj] as usize] as usize) % 12
    }

    /// Raw 2D simplex noise in range roughly `[-1, 1]`.
    pub fn noise2d(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * G2;
        let x0_origin = i - t;
        let y0_origin = j - t;
        let x0 = x - x0_origin;
        let y0 = y - y0_origin;

        let (i1, j1) = if x0 > y0 { (1.0, 0.0) } else { (0.0, 1.0) };

        let x1 = x0 - i1 + G2;
        let y1 = y0 - j1 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = i as i64;
        let jj = j as i64;

        let gi0 = self.grad_index(ii, jj);
        let gi1 = self.grad_index(ii + i1 as i64, jj + j1 as i64);
        let gi2 = self.grad_index(ii + 1, jj + 1);

        let n0 = Self::corner_contribution(x0, y0, GRAD3[gi0]);
        let n1 = Self::corner_contribution(x1, y1, GRAD3[gi1]);
        let n2 = Self::corner_contribution(x2, y2, GRAD3[gi2]);

        70.0 * (n0 + n1 + n2)
    }

    fn corner_contribution(x: f64, y: f64, grad: (f64, f64)) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            0.0
        } else {
            let t2 = t * t;
            t2 * t2 * (grad.0 * x + grad.1 * y)
        }
    }

    /// Multi-octave fractional Brownian motion, normalised by summed amplitude.
    pub fn fbm(&self, x: f64, y: f64, octaves: u32, lacunarity: f64, persistence: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut amplitude_sum = 0.0;
        for _ in 0..octaves {
            total += self.noise2d(x * frequency, y * frequency) * amplitude;
            amplitude_sum += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }
        if amplitude_sum == 0.0 {
            0.0
        } else {
            total / amplitude_sum
        }
    }

    /// Ridged noise: `1 - |noise|`, squared per octave to sharpen ridges.
    pub fn ridge(&self, x: f64, y: f64, octaves: u32, lacunarity: f64, persistence: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut amplitude_sum = 0.0;
        for _ in 0..octaves {
            let n = 1.0 - self.noise2d(x * frequency, y * frequency).abs();
            total += n * n * amplitude;
            amplitude_sum += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }
        if amplitude_sum == 0.0 {
            0.0
        } else {
            total / amplitude_sum
        }
    }
}
