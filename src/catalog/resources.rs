//! Resource definitions and per-tile placement configs (§4.8).

use crate::world::Biome;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceDef {
    pub base_value: f64,
    pub storage_class: &'static str,
}

pub fn base_value(resource_id: &str) -> f64 {
    def(resource_id).base_value
}

pub fn def(resource_id: &str) -> ResourceDef {
    match resource_id {
        "wood" => ResourceDef { base_value: 2.0, storage_class: "materials" },
        "stone" => ResourceDef { base_value: 2.5, storage_class: "materials" },
        "iron_ore" => ResourceDef { base_value: 6.0, storage_class: "materials" },
        "gold_ore" => ResourceDef { base_value: 15.0, storage_class: "materials" },
        "coal" => ResourceDef { base_value: 4.0, storage_class: "materials" },
        "gems" => ResourceDef { base_value: 20.0, storage_class: "materials" },
        "clay" => ResourceDef { base_value: 1.5, storage_class: "materials" },
        "fish" => ResourceDef { base_value: 3.0, storage_class: "food" },
        "game" => ResourceDef { base_value: 3.5, storage_class: "food" },
        "herbs" => ResourceDef { base_value: 4.0, storage_class: "food" },
        "fruit" => ResourceDef { base_value: 2.5, storage_class: "food" },
        "grain" => ResourceDef { base_value: 2.0, storage_class: "food" },
        "wool" => ResourceDef { base_value: 3.0, storage_class: "materials" },
        "salt" => ResourceDef { base_value: 5.0, storage_class: "food" },
        _ => ResourceDef { base_value: 1.0, storage_class: "misc" },
    }
}

/// A single placement config row. The resource placer (§4.8) iterates these
/// in table order for every tile.
#[derive(Debug, Clone, Copy)]
pub struct PlacementConfig {
    pub resource_id: &'static str,
    pub biomes: &'static [Biome],
    pub chance: f64,
    pub amount_range: (f64, f64),
    pub replenish_rate: f64,
}

pub fn placement_configs() -> &'static [PlacementConfig] {
    use Biome::*;
    const FOREST_LIKE: &[Biome] = &[Forest, DenseForest];
    const MOUNTAIN_LIKE: &[Biome] = &[Mountain, SnowMountain, Hills];
    const GRASS_LIKE: &[Biome] = &[Grassland, Savanna];
    const WATER_ADJACENT: &[Biome] = &[Beach];
    const SWAMP_ONLY: &[Biome] = &[Swamp];
    const DESERT_ONLY: &[Biome] = &[Desert];
    const TUNDRA_ONLY: &[Biome] = &[Tundra];

    static CONFIGS: &[PlacementConfig] = &[
        PlacementConfig { resource_id: "iron_ore", biomes: MOUNTAIN_LIKE, chance: 0.12, amount_range: (40.0, 150.0), replenish_rate: 0.0 },
        PlacementConfig { resource_id: "gold_ore", biomes: MOUNTAIN_LIKE, chance: 0.05, amount_range: (20.0, 80.0), replenish_rate: 0.0 },
        PlacementConfig { resource_id: "coal", biomes: MOUNTAIN_LIKE, chance: 0.1, amount_range: (30.0, 120.0), replenish_rate: 0.0 },
        PlacementConfig { resource_id: "gems", biomes: MOUNTAIN_LIKE, chance: 0.03, amount_range: (5.0, 30.0), replenish_rate: 0.0 },
        PlacementConfig { resource_id: "stone", biomes: MOUNTAIN_LIKE, chance: 0.2, amount_range: (60.0, 200.0), replenish_rate: 0.0 },
        PlacementConfig { resource_id: "wood", biomes: FOREST_LIKE, chance: 0.3, amount_range: (50.0, 200.0), replenish_rate: 0.5 },
        PlacementConfig { resource_id: "game", biomes: FOREST_LIKE, chance: 0.15, amount_range: (10.0, 40.0), replenish_rate: 0.2 },
        PlacementConfig { resource_id: "herbs", biomes: FOREST_LIKE, chance: 0.1, amount_range: (5.0, 20.0), replenish_rate: 0.3 },
        PlacementConfig { resource_id: "grain", biomes: GRASS_LIKE, chance: 0.25, amount_range: (40.0, 160.0), replenish_rate: 0.6 },
        PlacementConfig { resource_id: "wool", biomes: GRASS_LIKE, chance: 0.1, amount_range: (10.0, 40.0), replenish_rate: 0.3 },
        PlacementConfig { resource_id: "clay", biomes: GRASS_LIKE, chance: 0.08, amount_range: (20.0, 80.0), replenish_rate: 0.0 },
        PlacementConfig { resource_id: "fish", biomes: WATER_ADJACENT, chance: 0.3, amount_range: (20.0, 80.0), replenish_rate: 0.4 },
        PlacementConfig { resource_id: "salt", biomes: WATER_ADJACENT, chance: 0.12, amount_range: (10.0, 40.0), replenish_rate: 0.1 },
        PlacementConfig { resource_id: "herbs", biomes: SWAMP_ONLY, chance: 0.2, amount_range: (10.0, 30.0), replenish_rate: 0.3 },
        PlacementConfig { resource_id: "salt", biomes: DESERT_ONLY, chance: 0.15, amount_range: (10.0, 50.0), replenish_rate: 0.0 },
        PlacementConfig { resource_id: "game", biomes: TUNDRA_ONLY, chance: 0.08, amount_range: (5.0, 20.0), replenish_rate: 0.15 },
    ];
    CONFIGS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_resource_falls_back_gracefully() {
        let d = def("phlogiston");
        assert_eq!(d.base_value, 1.0);
    }

    #[test]
    fn placement_configs_are_non_empty_and_ordered_deterministically() {
        let configs = placement_configs();
        assert!(!configs.is_empty());
        // Table order is load-bearing for tie-breaks (§4.8); confirm the
        // static slice is stable across calls.
        let configs2 = placement_configs();
        assert_eq!(configs.len(), configs2.len());
        for (a, b) in configs.iter().zip(configs2.iter()) {
            assert_eq!(a.resource_id, b.resource_id);
        }
    }
}
