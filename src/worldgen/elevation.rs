//! Elevation field (§4.3): fBm + ridge noise shaped by three elliptical
//! continent masks.

use crate::core::config::GenerationConfig;
use crate::noise::GradientNoise;
use crate::rng::DeterministicRng;

const FBM_FREQUENCIES: [f64; 4] = [3.0, 6.0, 12.0, 24.0];
const FBM_AMPLITUDES: [f64; 4] = [1.0, 0.5, 0.25, 0.12];

struct ContinentMask {
    center: (f64, f64),
    exponent: f64,
}

const MASKS: [ContinentMask; 3] = [
    ContinentMask { center: (0.5, 0.5), exponent: 1.8 },
    ContinentMask { center: (0.25, 0.7), exponent: 2.0 },
    ContinentMask { center: (0.75, 0.3), exponent: 2.5 },
];

fn weighted_fbm(noise: &GradientNoise, nx: f64, ny: f64) -> f64 {
    let mut total = 0.0;
    let mut amp_sum = 0.0;
    for (freq, amp) in FBM_FREQUENCIES.iter().zip(FBM_AMPLITUDES.iter()) {
        total += noise.noise2d(nx * freq, ny * freq) * amp;
        amp_sum += amp;
    }
    total / amp_sum
}

fn mask_strength(mask: &ContinentMask, nx: f64, ny: f64) -> f64 {
    let dx = nx - mask.center.0;
    let dy = ny - mask.center.1;
    let dist = (dx * dx + dy * dy).sqrt() * 2.0;
    (1.0 - dist.powf(mask.exponent)).max(0.0)
}

/// Per-tile elevation in `[0, 1]`, row-major (`y * width + x`).
pub fn build(config: &GenerationConfig, noise: &GradientNoise, rng: &mut DeterministicRng) -> Vec<f64> {
    let width = config.width as f64;
    let height = config.height as f64;
    let mut field = Vec::with_capacity(config.tile_count());

    for y in 0..config.height {
        for x in 0..config.width {
            let nx = x as f64 / width;
            let ny = y as f64 / height;

            let fbm = weighted_fbm(noise, nx, ny);
            let ridge = noise.ridge(nx * 4.0, ny * 4.0, 4, 2.0, 0.5);
            let blended = 0.7 * fbm + 0.3 * ridge;
            let mut elevation = ((blended + 1.0) / 2.0).clamp(0.0, 1.0);

            let coastline_jitter = rng.next_float(-0.05, 0.05);
            let mask0 = (mask_strength(&MASKS[0], nx, ny) + coastline_jitter).clamp(0.0, 1.0);
            elevation *= mask0;

            let shaped = ((weighted_fbm(noise, nx * 2.0, ny * 2.0) + 1.0) / 2.0).clamp(0.0, 1.0);
            let mask1_elevation = mask_strength(&MASKS[1], nx, ny) * shaped * 0.7;
            let mask2_elevation = mask_strength(&MASKS[2], nx, ny) * shaped * 0.55;

            elevation = elevation.max(mask1_elevation).max(mask2_elevation);
            field.push(elevation.clamp(0.0, 1.0));
        }
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevation_is_bounded_and_deterministic() {
        let config = GenerationConfig::new(16, 16, 9);
        let mut noise_rng = DeterministicRng::new(config.seed);
        let noise = GradientNoise::new(&mut noise_rng).unwrap();
        let mut rng_a = DeterministicRng::new(1);
        let mut rng_b = DeterministicRng::new(1);
        let field_a = build(&config, &noise, &mut rng_a);
        let field_b = build(&config, &noise, &mut rng_b);
        assert_eq!(field_a, field_b);
        for &v in &field_a {
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
