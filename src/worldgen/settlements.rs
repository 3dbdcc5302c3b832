//! Settlement placement (§4.9): scored candidate tiles, spaced placement,
//! type assignment by rule chain, and an index-driven upgrade pass.

use crate::catalog::{buildings, names, resources};
use crate::core::id::IdMinter;
use crate::core::position::Position;
use crate::rng::DeterministicRng;
use crate::world::{Biome, Building, BuildingType, Location, LocationKind, ResourceStack, TerrainType, World};

const MAX_SETTLEMENTS: usize = 120;
const MIN_SPACING: f64 = 6.0;

fn upgradable(kind: LocationKind) -> bool {
    matches!(
        kind,
        LocationKind::Hamlet | LocationKind::Homestead | LocationKind::Farm | LocationKind::Mine | LocationKind::LumberCamp
    )
}

fn window_any(world: &World, center: Position, radius: i32, pred: impl Fn(&crate::world::Tile) -> bool) -> bool {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let pos = Position::new(center.x + dx, center.y + dy);
            if !world.in_bounds(pos) {
                continue;
            }
            if pred(world.tile(pos)) {
                return true;
            }
        }
    }
    false
}

fn nearby_deposit_value(world: &World, center: Position, radius: i32) -> f64 {
    let mut sum = 0.0;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let pos = Position::new(center.x + dx, center.y + dy);
            if !world.in_bounds(pos) {
                continue;
            }
            if let Some(deposit) = &world.tile(pos).resource_deposit {
                sum += deposit.amount * 0.01;
            }
        }
    }
    sum
}

fn score_tile(world: &World, pos: Position) -> f64 {
    let tile = world.tile(pos);
    if !tile.biome.can_build_settlement() {
        return 0.0;
    }

    let mut score = 0.0;
    let scaled_elevation = tile.elevation * 10.0;
    if (4.0..=7.0).contains(&scaled_elevation) {
        score += 3.0;
    } else if (8.0..=9.0).contains(&scaled_elevation) {
        score += 1.0;
    }

    if window_any(world, pos, 3, |t| matches!(t.terrain_type, TerrainType::ShallowOcean | TerrainType::Coast)) {
        score += 3.0;
    }

    score += nearby_deposit_value(world, pos, 4).min(5.0);

    match tile.biome {
        Biome::Grassland => score += 2.0,
        Biome::Forest | Biome::Hills | Biome::Beach => score += 1.0,
        _ => {}
    }

    if tile.temperature > 0.3 && tile.temperature < 0.7 {
        score += 1.0;
    }

    score
}

fn is_defensible(world: &World, pos: Position) -> bool {
    let tile = world.tile(pos);
    tile.elevation * 10.0 >= 6.0 || matches!(tile.biome, Biome::Hills | Biome::Mountain)
}

fn assign_initial_type(world: &World, pos: Position, rng: &mut DeterministicRng) -> LocationKind {
    let tile = world.tile(pos);
    let coastal = window_any(world, pos, 2, |t| matches!(t.terrain_type, TerrainType::ShallowOcean | TerrainType::Coast));
    if coastal && rng.chance(0.3) {
        return LocationKind::FishingVillage;
    }
    let deposit_is_mineral = tile
        .resource_deposit
        .as_ref()
        .is_some_and(|d| matches!(d.resource_id.as_str(), "iron_ore" | "gold_ore" | "coal"));
    if deposit_is_mineral && rng.chance(0.2) {
        return LocationKind::Mine;
    }
    if tile.biome == Biome::Grassland && rng.chance(0.2) {
        return LocationKind::Farm;
    }
    if matches!(tile.biome, Biome::Forest | Biome::DenseForest) && rng.chance(0.15) {
        return LocationKind::LumberCamp;
    }
    if rng.chance(0.5) {
        LocationKind::Hamlet
    } else {
        LocationKind::Homestead
    }
}

fn apply_upgrade(kind: LocationKind, index: usize, defensible: bool, rng: &mut DeterministicRng) -> LocationKind {
    if !upgradable(kind) {
        return kind;
    }
    match index {
        0..=1 => {
            if defensible && rng.chance(0.5) {
                LocationKind::Castle
            } else {
                LocationKind::City
            }
        }
        2..=11 => {
            if defensible && rng.chance(0.4) {
                LocationKind::Castle
            } else if rng.chance(0.25) {
                LocationKind::City
            } else {
                LocationKind::Town
            }
        }
        12..=24 => {
            if defensible && rng.chance(0.3) {
                LocationKind::Castle
            } else if rng.chance(0.35) {
                LocationKind::Village
            } else if rng.chance(0.5) {
                LocationKind::Town
            } else {
                kind
            }
        }
        25..=39 => {
            if matches!(kind, LocationKind::Hamlet | LocationKind::Homestead) && rng.chance(0.4) {
                LocationKind::Village
            } else {
                kind
            }
        }
        _ => kind,
    }
}

fn seed_resources(kind: LocationKind) -> &'static [&'static str] {
    match kind {
        LocationKind::Farm | LocationKind::Homestead | LocationKind::Hamlet | LocationKind::Village => &["grain", "wood"],
        LocationKind::Mine => &["stone", "iron_ore"],
        LocationKind::LumberCamp => &["wood"],
        LocationKind::FishingVillage | LocationKind::Port => &["fish", "salt"],
        LocationKind::Town | LocationKind::City => &["grain", "wood", "stone"],
        LocationKind::Castle => &["stone", "grain"],
        _ => &[],
    }
}

fn build_location(
    world: &World,
    id_minter: &mut IdMinter,
    pos: Position,
    kind: LocationKind,
    rng: &mut DeterministicRng,
) -> Location {
    let (prefixes, suffixes) = names::settlement_name_parts();
    let name = format!("{}{}", rng.pick(prefixes), rng.pick(suffixes));
    let id = id_minter.mint("loc");
    let mut location = Location::new(id, name, kind, pos);

    for building_type in buildings::starter_buildings(kind) {
        location.buildings.push(Building::new(building_type));
    }
    let house_count = location
        .buildings
        .iter()
        .filter(|b| b.building_type == BuildingType::House)
        .count() as u32;
    location.size = house_count;
    location.population_capacity = 6 * house_count.max(1);

    for &resource_id in seed_resources(kind) {
        let quantity = rng.next_float(10.0, 50.0);
        location.storage.push(ResourceStack { resource_id: resource_id.to_string(), quantity });
    }
    let _ = world; // reserved for future density lookups against the live grid
    location
}

/// Places settlements and returns their ids in placement order.
pub fn run(world: &mut World, rng: &mut DeterministicRng, id_minter: &mut IdMinter) -> Vec<String> {
    let mut candidates = Vec::with_capacity(world.tiles.len());
    for tile in &world.tiles {
        let pos = tile.position();
        let score = score_tile(world, pos);
        if score <= 0.0 {
            continue;
        }
        let jitter = rng.next();
        candidates.push((pos, score + 2.0 * jitter));
    }
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut placed_ids = Vec::new();
    let mut placed_positions: Vec<Position> = Vec::new();
    let mut upgradable_index = 0usize;

    for (pos, _) in candidates {
        if placed_ids.len() >= MAX_SETTLEMENTS {
            break;
        }
        if placed_positions.iter().any(|p| p.euclidean_distance(&pos) < MIN_SPACING) {
            continue;
        }

        let initial = assign_initial_type(world, pos, rng);
        let defensible = is_defensible(world, pos);
        let final_kind = if upgradable(initial) {
            let kind = apply_upgrade(initial, upgradable_index, defensible, rng);
            upgradable_index += 1;
            kind
        } else {
            initial
        };

        let location = build_location(world, id_minter, pos, final_kind, rng);
        let location_id = location.id.clone();
        world.tile_mut(pos).location_id = Some(location_id.clone());
        world.locations.insert(location_id.clone(), location);
        placed_positions.push(pos);
        placed_ids.push(location_id);
    }

    placed_ids
}
