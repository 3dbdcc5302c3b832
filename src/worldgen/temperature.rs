//! Temperature field (§4.5): latitude band cooled by altitude, jittered by
//! noise. Fully determined by elevation and position; no per-tile RNG draw.

use crate::core::config::GenerationConfig;
use crate::noise::GradientNoise;

pub fn build(config: &GenerationConfig, noise: &GradientNoise, elevation: &[f64]) -> Vec<f64> {
    let width = config.width as f64;
    let height = config.height as f64;
    let mut field = Vec::with_capacity(config.tile_count());

    for y in 0..config.height {
        for x in 0..config.width {
            let nx = x as f64 / width;
            let ny = y as f64 / height;
            let idx = (y as usize) * config.width as usize + x as usize;

            let latitude_temp = 1.0 - 2.0 * (ny - 0.5).abs();
            let altitude_cooling = 1.5 * (elevation[idx] - 0.5).max(0.0);
            let jitter = 0.15 * noise.noise2d(nx * 4.0, ny * 4.0);

            let temp = (latitude_temp - altitude_cooling + jitter).clamp(0.0, 1.0);
            field.push(temp);
        }
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::DeterministicRng;

    #[test]
    fn temperature_is_bounded_and_cooler_at_altitude() {
        let config = GenerationConfig::new(16, 16, 2);
        let mut rng = DeterministicRng::new(2);
        let noise = GradientNoise::new(&mut rng).unwrap();
        let flat = vec![0.1; config.tile_count()];
        let mountainous = vec![0.95; config.tile_count()];

        let flat_temps = build(&config, &noise, &flat);
        let mountain_temps = build(&config, &noise, &mountainous);

        for &t in flat_temps.iter().chain(mountain_temps.iter()) {
            assert!((0.0..=1.0).contains(&t));
        }
        let equator_idx = (config.height / 2) as usize * config.width as usize;
        assert!(mountain_temps[equator_idx] < flat_temps[equator_idx]);
    }
}
