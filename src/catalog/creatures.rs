//! Creature type definitions consumed by the spawner (§4.15).

use crate::world::Biome;

#[derive(Debug, Clone, Copy)]
pub struct LootEntry {
    pub resource_id: &'static str,
    pub chance: f64,
    pub quantity_range: (f64, f64),
}

#[derive(Debug, Clone, Copy)]
pub struct CreatureDef {
    pub type_id: &'static str,
    pub base_health: f64,
    pub base_attack: f64,
    pub base_defense: f64,
    pub base_speed: f64,
    pub pack_size: (u32, u32),
    pub preferred_biomes: &'static [Biome],
    pub wander_radius: f64,
    pub hostile: bool,
    pub default_behavior: &'static str,
    pub loot_table: &'static [LootEntry],
}

pub const DRAGON_TYPE_ID: &str = "dragon";
pub const BANDIT_TYPE_ID: &str = "bandit";
pub const MAX_DRAGONS_FROM_MAIN_PASS: usize = 3;
pub const MAX_BANDIT_GROUPS: usize = 8;
pub const GUARANTEED_MINIMUM_DRAGONS: usize = 2;

pub fn defs() -> &'static [CreatureDef] {
    use Biome::*;
    static DEER: &[Biome] = &[Forest, Grassland, Savanna];
    static WOLF: &[Biome] = &[Forest, DenseForest, Tundra, Hills];
    static BEAR: &[Biome] = &[Forest, DenseForest, Mountain];
    static BOAR: &[Biome] = &[Forest, Swamp, Grassland];
    static RABBIT: &[Biome] = &[Grassland, Forest, Beach, Savanna];
    static GOBLIN: &[Biome] = &[Hills, Forest, Swamp];
    static TROLL: &[Biome] = &[Mountain, SnowMountain, Swamp];
    static BANDIT: &[Biome] = &[Grassland, Forest, Hills, Desert];
    static DRAGON: &[Biome] = &[Mountain, SnowMountain, Hills];

    static DEFS: &[CreatureDef] = &[
        CreatureDef {
            type_id: "deer", base_health: 20.0, base_attack: 2.0, base_defense: 1.0, base_speed: 6.0,
            pack_size: (2, 6), preferred_biomes: DEER, wander_radius: 8.0, hostile: false,
            default_behavior: "grazing",
            loot_table: &[LootEntry { resource_id: "game", chance: 0.8, quantity_range: (2.0, 8.0) }],
        },
        CreatureDef {
            type_id: "wolf", base_health: 30.0, base_attack: 8.0, base_defense: 3.0, base_speed: 8.0,
            pack_size: (2, 5), preferred_biomes: WOLF, wander_radius: 12.0, hostile: true,
            default_behavior: "hunting",
            loot_table: &[LootEntry { resource_id: "game", chance: 0.5, quantity_range: (1.0, 4.0) }],
        },
        CreatureDef {
            type_id: "bear", base_health: 80.0, base_attack: 14.0, base_defense: 8.0, base_speed: 5.0,
            pack_size: (1, 2), preferred_biomes: BEAR, wander_radius: 10.0, hostile: true,
            default_behavior: "territorial",
            loot_table: &[LootEntry { resource_id: "game", chance: 0.9, quantity_range: (5.0, 15.0) }],
        },
        CreatureDef {
            type_id: "boar", base_health: 35.0, base_attack: 7.0, base_defense: 5.0, base_speed: 5.0,
            pack_size: (1, 4), preferred_biomes: BOAR, wander_radius: 9.0, hostile: false,
            default_behavior: "grazing",
            loot_table: &[LootEntry { resource_id: "game", chance: 0.7, quantity_range: (3.0, 10.0) }],
        },
        CreatureDef {
            type_id: "rabbit", base_health: 5.0, base_attack: 0.5, base_defense: 0.5, base_speed: 9.0,
            pack_size: (3, 8), preferred_biomes: RABBIT, wander_radius: 6.0, hostile: false,
            default_behavior: "grazing",
            loot_table: &[LootEntry { resource_id: "game", chance: 0.6, quantity_range: (1.0, 2.0) }],
        },
        CreatureDef {
            type_id: "goblin", base_health: 18.0, base_attack: 6.0, base_defense: 2.0, base_speed: 6.0,
            pack_size: (3, 8), preferred_biomes: GOBLIN, wander_radius: 14.0, hostile: true,
            default_behavior: "raiding",
            loot_table: &[LootEntry { resource_id: "stone", chance: 0.3, quantity_range: (2.0, 10.0) }],
        },
        CreatureDef {
            type_id: "troll", base_health: 150.0, base_attack: 22.0, base_defense: 15.0, base_speed: 3.0,
            pack_size: (1, 1), preferred_biomes: TROLL, wander_radius: 16.0, hostile: true,
            default_behavior: "territorial",
            loot_table: &[LootEntry { resource_id: "stone", chance: 0.9, quantity_range: (10.0, 30.0) }],
        },
        CreatureDef {
            type_id: BANDIT_TYPE_ID, base_health: 40.0, base_attack: 9.0, base_defense: 4.0, base_speed: 6.0,
            pack_size: (3, 6), preferred_biomes: BANDIT, wander_radius: 18.0, hostile: true,
            default_behavior: "raiding",
            loot_table: &[LootEntry { resource_id: "gold_ore", chance: 0.4, quantity_range: (1.0, 5.0) }],
        },
        CreatureDef {
            type_id: DRAGON_TYPE_ID, base_health: 500.0, base_attack: 60.0, base_defense: 40.0, base_speed: 10.0,
            pack_size: (1, 1), preferred_biomes: DRAGON, wander_radius: 20.0, hostile: true,
            default_behavior: "territorial",
            loot_table: &[LootEntry { resource_id: "gold_ore", chance: 1.0, quantity_range: (50.0, 200.0) }],
        },
    ];
    DEFS
}

pub fn by_type_id(type_id: &str) -> Option<&'static CreatureDef> {
    defs().iter().find(|d| d.type_id == type_id)
}
