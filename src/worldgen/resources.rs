//! Resource placement (§4.8): per-tile weighted selection over biome-
//! eligible deposit configs, keeping the highest-value candidate.

use crate::catalog::resources::{self, PlacementConfig};
use crate::rng::DeterministicRng;
use crate::world::{ResourceDeposit, World};

fn best_candidate(config: &PlacementConfig, rng: &mut DeterministicRng) -> Option<ResourceDeposit> {
    if !rng.chance(config.chance) {
        return None;
    }
    let (lo, hi) = config.amount_range;
    let amount = rng.next_float(lo, hi);
    Some(ResourceDeposit::new(config.resource_id, amount, amount, config.replenish_rate))
}

pub fn run(world: &mut World, rng: &mut DeterministicRng) {
    let configs = resources::placement_configs();
    for tile in world.tiles.iter_mut() {
        if tile.is_water() {
            continue;
        }
        let mut best: Option<(ResourceDeposit, f64)> = None;
        for config in configs {
            if !config.biomes.contains(&tile.biome) {
                continue;
            }
            if let Some(deposit) = best_candidate(config, rng) {
                let value = deposit.amount * resources::base_value(&deposit.resource_id);
                let replace = match &best {
                    None => true,
                    Some((_, best_value)) => value > *best_value,
                };
                if replace {
                    best = Some((deposit, value));
                }
            }
        }
        if let Some((deposit, _)) = best {
            tile.resource_deposit = Some(deposit);
        }
    }
}
