//! The layered world-generation pipeline (§2).
//!
//! [`generate_world`] sequences every layer leaf-first: each one forks its
//! own [`DeterministicRng`] child stream from the master seed, in the exact
//! order named in §2, and mutates (or produces input for) the `World` under
//! construction. No layer reseeds from outside its own forked stream.

pub mod biome;
pub mod creature_spawn;
pub mod elevation;
pub mod moisture;
pub mod movement;
pub mod piers;
pub mod politics;
pub mod populate;
pub mod resources;
pub mod roads;
pub mod settlements;
pub mod temperature;
pub mod terrain;
pub mod tile_assembly;
pub mod water;

use crate::core::config::GenerationConfig;
use crate::core::error::Result;
use crate::core::id::IdMinter;
use crate::noise::GradientNoise;
use crate::rng::DeterministicRng;
use crate::world::World;

/// Progress callback signature (§6): invoked synchronously with a phase
/// label and a progress fraction in `[0, 1]`.
pub type ProgressCallback<'a> = dyn FnMut(&str, f32) + 'a;

fn report(progress: &mut Option<&mut ProgressCallback<'_>>, label: &str, fraction: f32) {
    if let Some(callback) = progress.as_mut() {
        callback(label, fraction);
    }
}

/// Runs the full generation pipeline for a validated [`GenerationConfig`],
/// producing a complete, self-consistent [`World`].
pub fn generate_world(config: &GenerationConfig, mut progress: Option<&mut ProgressCallback<'_>>) -> Result<World> {
    config.validate()?;
    tracing::info!(width = config.width, height = config.height, seed = config.seed, "starting world generation");

    let mut master_rng = DeterministicRng::new(config.seed);
    let mut id_minter = IdMinter::new(config.seed);
    let mut world = World::new(config.width, config.height, config.seed);

    // Layer 2: noise source, built from a dedicated permutation-table stream
    // forked off the master before any field layer runs.
    let mut noise_rng = master_rng.fork();
    let noise = GradientNoise::new(&mut noise_rng)?;

    // Layer 3: elevation field.
    let mut elevation_rng = master_rng.fork();
    let elevation_field = elevation::build(config, &noise, &mut elevation_rng);
    report(&mut progress, "Shaping continents", 1.0);

    // Layer 4: terrain classification.
    let terrain_field = terrain::build(&elevation_field);
    report(&mut progress, "Classifying terrain", 1.0);

    // Layers 5-7: temperature, water-distance, moisture.
    let mut temperature_rng = master_rng.fork();
    let _ = &mut temperature_rng; // temperature is noise-driven but not RNG-driven per §4.5; stream still forked to preserve layer ordering.
    let temperature_field = temperature::build(config, &noise, &elevation_field);
    let water_dist = water::build(config, &terrain_field);
    let mut moisture_rng = master_rng.fork();
    let _ = &mut moisture_rng; // same: moisture is deterministic from noise/water-dist (§4.6), stream forked for ordering only.
    let moisture_field = moisture::build(config, &noise, &elevation_field, &water_dist);
    report(&mut progress, "Simulating climate", 1.0);

    // Layer 8: biome classification, then layer 9: tile assembly.
    let biome_field = biome::build(&terrain_field, &elevation_field, &moisture_field, &temperature_field);
    tile_assembly::assemble(&mut world, &elevation_field, &moisture_field, &temperature_field, &terrain_field, &biome_field);
    report(&mut progress, "Growing biomes", 1.0);

    // Layer 10: resource placement.
    let mut resources_rng = master_rng.fork();
    resources::run(&mut world, &mut resources_rng);
    report(&mut progress, "Scattering resources", 1.0);

    // Layer 11: settlement placement.
    let mut settlements_rng = master_rng.fork();
    let placed = settlements::run(&mut world, &mut settlements_rng, &mut id_minter);
    tracing::debug!(count = placed.len(), "settlements placed");
    report(&mut progress, "Founding settlements", 1.0);

    // Layers 12-13: road network, then piers. Neither consumes a dedicated
    // §4.1 layer stream: the road builder is deterministic given the tile
    // grid and settlement set (A*'s only randomness-free choices), and pier
    // placement is a pure scoring function (§4.10, §4.12).
    roads::run(&mut world);
    piers::run(&mut world);
    report(&mut progress, "Building roads and piers", 1.0);

    // Layer 14: populate (families, jobs, workers, relationships).
    let mut populate_rng = master_rng.fork();
    populate::run(&mut world, &mut populate_rng, &mut id_minter);
    tracing::debug!(characters = world.characters.len(), "population generated");
    report(&mut progress, "Populating the world", 1.0);

    // Layer 15: creature spawning.
    let mut creatures_rng = master_rng.fork();
    creature_spawn::run(&mut world, &mut creatures_rng, &mut id_minter);
    tracing::debug!(creatures = world.creatures.len(), "creatures spawned");
    report(&mut progress, "Spawning creatures", 1.0);

    // Layer 16: politics (capitals, rulers, vassals, diplomacy).
    let mut politics_rng = master_rng.fork();
    politics::run(&mut world, &mut politics_rng, &mut id_minter);
    tracing::debug!(countries = world.countries.len(), "kingdoms established");
    report(&mut progress, "Establishing kingdoms", 1.0);

    report(&mut progress, "World complete", 1.0);
    tracing::info!(
        locations = world.locations.len(),
        characters = world.characters.len(),
        creatures = world.creatures.len(),
        countries = world.countries.len(),
        "world generation complete"
    );
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_rejects_invalid_config() {
        let config = GenerationConfig::new(4, 4, 1);
        assert!(generate_world(&config, None).is_err());
    }

    #[test]
    fn generation_is_deterministic_for_same_seed() {
        let config = GenerationConfig::new(48, 48, 42);
        let world_a = generate_world(&config, None).unwrap();
        let world_b = generate_world(&config, None).unwrap();
        assert_eq!(world_a.tiles.len(), world_b.tiles.len());
        for (a, b) in world_a.tiles.iter().zip(world_b.tiles.iter()) {
            assert_eq!(a.elevation, b.elevation);
            assert_eq!(a.terrain_type, b.terrain_type);
            assert_eq!(a.biome, b.biome);
        }
        assert_eq!(world_a.locations.keys().collect::<Vec<_>>(), world_b.locations.keys().collect::<Vec<_>>());
        assert_eq!(world_a.characters.len(), world_b.characters.len());
        assert_eq!(world_a.countries.len(), world_b.countries.len());
    }

    #[test]
    fn different_seeds_diverge() {
        let config_a = GenerationConfig::new(48, 48, 42);
        let config_b = GenerationConfig::new(48, 48, 43);
        let world_a = generate_world(&config_a, None).unwrap();
        let world_b = generate_world(&config_b, None).unwrap();
        let any_tile_differs = world_a
            .tiles
            .iter()
            .zip(world_b.tiles.iter())
            .any(|(a, b)| a.elevation != b.elevation);
        assert!(any_tile_differs);
    }

    #[test]
    fn progress_callback_fires_every_labeled_phase_in_order() {
        let config = GenerationConfig::new(32, 32, 5);
        let mut seen = Vec::new();
        {
            let mut callback = |label: &str, fraction: f32| {
                seen.push((label.to_string(), fraction));
            };
            generate_world(&config, Some(&mut callback)).unwrap();
        }
        let labels: Vec<&str> = seen.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Shaping continents",
                "Classifying terrain",
                "Simulating climate",
                "Growing biomes",
                "Scattering resources",
                "Founding settlements",
                "Building roads and piers",
                "Populating the world",
                "Spawning creatures",
                "Establishing kingdoms",
                "World complete",
            ]
        );
        assert!(seen.iter().all(|(_, frac)| *frac == 1.0));
    }

    #[test]
    fn settlements_never_exceed_cap_and_respect_spacing() {
        let config = GenerationConfig::new(96, 96, 7);
        let world = generate_world(&config, None).unwrap();
        assert!(world.locations.len() <= 120);
        let positions: Vec<_> = world.locations.values().map(|l| l.position).collect();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                assert!(positions[i].euclidean_distance(&positions[j]) >= 6.0);
            }
        }
    }

    #[test]
    fn water_tiles_always_classify_as_ocean_biome() {
        let config = GenerationConfig::new(64, 64, 11);
        let world = generate_world(&config, None).unwrap();
        for tile in &world.tiles {
            if tile.is_water() {
                assert_eq!(tile.biome, crate::world::Biome::Ocean);
            }
            if tile.terrain_type == crate::world::TerrainType::Peak {
                assert_eq!(tile.biome, crate::world::Biome::SnowMountain);
            }
        }
    }

    #[test]
    fn resident_counts_stay_within_population_capacity() {
        let config = GenerationConfig::new(96, 96, 13);
        let world = generate_world(&config, None).unwrap();
        for location in world.locations.values() {
            assert!(
                location.resident_ids.len() as u32 <= location.population_capacity,
                "{} has {} residents but capacity {}",
                location.id,
                location.resident_ids.len(),
                location.population_capacity
            );
        }
    }

    #[test]
    fn every_country_capital_is_in_its_own_location_list() {
        let config = GenerationConfig::new(96, 96, 2024);
        let world = generate_world(&config, None).unwrap();
        for country in world.countries.values() {
            assert!(country.location_ids.contains(&country.capital_location_id));
            let ruler = &world.characters[&country.leader_id];
            assert!(ruler.owned_location_ids.contains(&country.capital_location_id));
        }
    }
}
