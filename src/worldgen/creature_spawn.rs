//! Creature spawning (§4.15): rejection-sampled group placement with biome
//! affinity, population caps, and a guaranteed dragon minimum.

use ahash::AHashMap;

use crate::catalog::creatures::{self, CreatureDef, BANDIT_TYPE_ID, DRAGON_TYPE_ID, GUARANTEED_MINIMUM_DRAGONS, MAX_BANDIT_GROUPS, MAX_DRAGONS_FROM_MAIN_PASS};
use crate::catalog::names;
use crate::core::id::IdMinter;
use crate::core::position::Position;
use crate::rng::DeterministicRng;
use crate::world::{Biome, Creature, LootStack, World};

const MAX_SPAWN_POINTS: usize = 60;
const ATTEMPT_MULTIPLIER: usize = 10;
const MIN_SPAWN_SPACING: i32 = 5;
const DRAGON_TOPUP_ATTEMPTS: usize = 500;

fn biome_index(defs: &'static [CreatureDef]) -> AHashMap<Biome, Vec<&'static CreatureDef>> {
    let mut index: AHashMap<Biome, Vec<&'static CreatureDef>> = AHashMap::new();
    for def in defs {
        for &biome in def.preferred_biomes {
            index.entry(biome).or_default().push(def);
        }
    }
    index
}

fn roll_group(rng: &mut DeterministicRng, def: &CreatureDef, pos: Position, name: Option<String>) -> Creature {
    let pack_size = rng.next_int(def.pack_size.0 as i64, def.pack_size.1 as i64) as u32;
    let max_health = def.base_health * pack_size as f64;
    let health = max_health * (0.8 + 0.4 * rng.next());
    let attack = def.base_attack * (pack_size as f64).sqrt();
    let defense = def.base_defense * (pack_size as f64).sqrt();

    let mut loot = Vec::new();
    for entry in def.loot_table {
        if rng.chance(entry.chance) {
            let quantity = rng.next_float(entry.quantity_range.0, entry.quantity_range.1) * pack_size as f64;
            loot.push(LootStack {
                resource_id: entry.resource_id.to_string(),
                quantity,
                quality: 0.5 + 0.5 * rng.next(),
                age: 0,
            });
        }
    }

    Creature {
        id: String::new(), // filled in by caller after id minting
        creature_type: def.type_id.to_string(),
        name,
        position: pos,
        home_position: pos,
        health,
        max_health,
        attack,
        defense,
        speed: def.base_speed,
        behavior: def.default_behavior.to_string(),
        wander_radius: def.wander_radius,
        is_hostile: def.hostile,
        loot,
        age: 0,
        last_action_turn: 0,
    }
}

fn spawn_guaranteed_dragon(
    world: &mut World,
    rng: &mut DeterministicRng,
    id_minter: &mut IdMinter,
    def: &CreatureDef,
    pos: Position,
    name: String,
) {
    let loot_entry = def.loot_table.first();
    let loot = loot_entry
        .map(|entry| {
            vec![LootStack {
                resource_id: entry.resource_id.to_string(),
                quantity: (entry.quantity_range.0 + entry.quantity_range.1) / 2.0,
                quality: 1.0,
                age: 0,
            }]
        })
        .unwrap_or_default();

    let creature = Creature {
        id: id_minter.mint("creature"),
        creature_type: def.type_id.to_string(),
        name: Some(name),
        position: pos,
        home_position: pos,
        health: def.base_health,
        max_health: def.base_health,
        attack: def.base_attack,
        defense: def.base_defense,
        speed: def.base_speed,
        behavior: "territorial".to_string(),
        wander_radius: 20.0,
        is_hostile: def.hostile,
        loot,
        age: 0,
        last_action_turn: 0,
    };
    world.creatures.insert(creature.id.clone(), creature);
}

/// Spawns creature groups across the world and tops up guaranteed dragons.
pub fn run(world: &mut World, rng: &mut DeterministicRng, id_minter: &mut IdMinter) {
    let defs = creatures::defs();
    let index = biome_index(defs);

    let mut spawn_points: Vec<Position> = Vec::new();
    let mut dragon_count = 0usize;
    let mut bandit_count = 0usize;
    let mut attempts = 0usize;
    let max_attempts = MAX_SPAWN_POINTS * ATTEMPT_MULTIPLIER;

    while spawn_points.len() < MAX_SPAWN_POINTS && attempts < max_attempts {
        attempts += 1;
        let x = rng.next_int(0, (world.width - 1) as i64) as i32;
        let y = rng.next_int(0, (world.height - 1) as i64) as i32;
        let pos = Position::new(x, y);

        let tile = world.tile(pos);
        if tile.is_water() || tile.location_id.is_some() {
            continue;
        }
        if spawn_points.iter().any(|p| p.manhattan_distance(&pos) < MIN_SPAWN_SPACING) {
            continue;
        }

        let Some(eligible) = index.get(&tile.biome) else { continue };
        if eligible.is_empty() {
            continue;
        }
        let def = *rng.pick(eligible);

        if def.type_id == DRAGON_TYPE_ID {
            if dragon_count >= MAX_DRAGONS_FROM_MAIN_PASS || !rng.chance(0.15) {
                continue;
            }
            dragon_count += 1;
        } else if def.type_id == BANDIT_TYPE_ID {
            if bandit_count >= MAX_BANDIT_GROUPS || !rng.chance(0.3) {
                continue;
            }
            bandit_count += 1;
        }

        let mut creature = roll_group(rng, def, pos, None);
        creature.id = id_minter.mint("creature");
        world.creatures.insert(creature.id.clone(), creature);
        spawn_points.push(pos);
    }

    let existing_dragons = world.creatures.values().filter(|c| c.creature_type == DRAGON_TYPE_ID).count();
    if existing_dragons >= GUARANTEED_MINIMUM_DRAGONS {
        return;
    }
    let Some(dragon_def) = creatures::by_type_id(DRAGON_TYPE_ID) else { return };
    let dragon_biomes = [Biome::Mountain, Biome::SnowMountain, Biome::Hills];
    let dragon_names = names::dragon_names();
    let mut used_names: Vec<&str> = Vec::new();
    let mut placed = 0usize;
    let needed = GUARANTEED_MINIMUM_DRAGONS - existing_dragons;
    let mut attempts2 = 0usize;

    while placed < needed && attempts2 < DRAGON_TOPUP_ATTEMPTS {
        attempts2 += 1;
        let x = rng.next_int(0, (world.width - 1) as i64) as i32;
        let y = rng.next_int(0, (world.height - 1) as i64) as i32;
        let pos = Position::new(x, y);
        let tile = world.tile(pos);
        if tile.is_water() || tile.location_id.is_some() || !dragon_biomes.contains(&tile.biome) {
            continue;
        }
        let name = dragon_names
            .iter()
            .find(|n| !used_names.contains(n))
            .copied()
            .unwrap_or("Unnamed Wyrm");
        used_names.push(name);
        spawn_guaranteed_dragon(world, rng, id_minter, dragon_def, pos, name.to_string());
        placed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GenerationConfig;
    use crate::world::TerrainType;

    fn mixed_world(seed: i32) -> World {
        let config = GenerationConfig::new(32, 32, seed);
        let mut world = World::new(config.width, config.height, config.seed);
        for (idx, tile) in world.tiles.iter_mut().enumerate() {
            let x = idx % 32;
            if x < 16 {
                tile.terrain_type = TerrainType::Highland;
                tile.biome = Biome::Hills;
            } else {
                tile.terrain_type = TerrainType::Lowland;
                tile.biome = Biome::Grassland;
            }
        }
        world
    }

    #[test]
    fn dragon_count_never_exceeds_five() {
        let mut world = mixed_world(1);
        let mut rng = DeterministicRng::new(1);
        let mut minter = IdMinter::new(1);
        run(&mut world, &mut rng, &mut minter);
        let dragons = world.creatures.values().filter(|c| c.creature_type == DRAGON_TYPE_ID).count();
        assert!(dragons <= MAX_DRAGONS_FROM_MAIN_PASS + GUARANTEED_MINIMUM_DRAGONS);
    }

    #[test]
    fn guaranteed_minimum_dragons_are_met() {
        let mut world = mixed_world(2);
        let mut rng = DeterministicRng::new(2);
        let mut minter = IdMinter::new(2);
        run(&mut world, &mut rng, &mut minter);
        let dragons = world.creatures.values().filter(|c| c.creature_type == DRAGON_TYPE_ID).count();
        assert!(dragons >= GUARANTEED_MINIMUM_DRAGONS);
    }

    #[test]
    fn no_creature_spawns_on_water_or_settlement_tiles() {
        let mut world = mixed_world(3);
        world.locations.insert(
            "loc_a".into(),
            crate::world::Location::new("loc_a".into(), "A".into(), crate::world::LocationKind::Village, Position::new(5, 5)),
        );
        world.tile_mut(Position::new(5, 5)).location_id = Some("loc_a".into());
        let mut rng = DeterministicRng::new(3);
        let mut minter = IdMinter::new(3);
        run(&mut world, &mut rng, &mut minter);
        for creature in world.creatures.values() {
            assert!(!world.tile(creature.position).is_water());
            assert!(world.tile(creature.position).location_id.is_none());
        }
    }
}
