//! Moisture field (§4.6, second half): noise modulated by water distance and
//! elevation. Fully deterministic from its inputs; no per-tile RNG draw.

use crate::core::config::GenerationConfig;
use crate::noise::GradientNoise;

const FREQUENCIES: [f64; 3] = [3.0, 6.0, 12.0];
const AMPLITUDES: [f64; 3] = [1.0, 0.5, 0.25];
const WATER_FALLOFF: f64 = 15.0;

pub fn build(
    config: &GenerationConfig,
    noise: &GradientNoise,
    elevation: &[f64],
    water_dist: &[i32],
) -> Vec<f64> {
    let width = config.width as f64;
    let height = config.height as f64;
    let mut field = Vec::with_capacity(config.tile_count());

    for y in 0..config.height {
        for x in 0..config.width {
            let nx = x as f64 / width;
            let ny = y as f64 / height;
            let idx = (y as usize) * config.width as usize + x as usize;

            let mut total = 0.0;
            let mut amp_sum = 0.0;
            for (freq, amp) in FREQUENCIES.iter().zip(AMPLITUDES.iter()) {
                total += noise.noise2d(nx * freq, ny * freq) * amp;
                amp_sum += amp;
            }
            let mut m = ((total / amp_sum) + 1.0) / 2.0;

            let water_influence = (1.0 - water_dist[idx] as f64 / WATER_FALLOFF).max(0.0);
            m = 0.6 * m + 0.4 * water_influence;
            m += (1.0 - elevation[idx]) * 0.2;

            field.push(m.clamp(0.0, 1.0));
        }
    }
    field
}
