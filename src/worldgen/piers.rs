//! Pier placement (§4.12): best adjacent water tile by connectivity score
//! and water-body size, for coastal settlements and settlements on small
//! islands.

use std::collections::VecDeque;

use crate::core::position::Position;
use crate::world::{Feature, FeatureKind, LocationKind, World};

const WATER_BODY_CAP: usize = 100;
const MIN_WATER_BODY_SIZE: usize = 10;
const ISLAND_LAND_CAP: usize = 200;

fn piered_by_default(kind: LocationKind) -> bool {
    matches!(
        kind,
        LocationKind::FishingVillage | LocationKind::Port | LocationKind::Town | LocationKind::City | LocationKind::Castle
    )
}

/// BFS on land-only 4-neighbours from `start`, capped at [`ISLAND_LAND_CAP`]
/// tiles. Fewer than that many reachable land tiles means the settlement
/// sits on an island.
fn is_island(world: &World, start: Position) -> bool {
    let mut visited = std::collections::HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        if visited.len() >= ISLAND_LAND_CAP {
            return false;
        }
        for n in pos.neighbors4() {
            if !world.in_bounds(n) || visited.contains(&n) {
                continue;
            }
            if world.tile(n).is_water() {
                continue;
            }
            visited.insert(n);
            queue.push_back(n);
        }
    }
    visited.len() < ISLAND_LAND_CAP
}

/// Bounded flood-fill size of the water body containing `start` (which must
/// itself be water), capped at [`WATER_BODY_CAP`].
fn water_body_size(world: &World, start: Position) -> usize {
    let mut visited = std::collections::HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        if visited.len() >= WATER_BODY_CAP {
            break;
        }
        for n in pos.neighbors4() {
            if !world.in_bounds(n) || visited.contains(&n) {
                continue;
            }
            if !world.tile(n).is_water() {
                continue;
            }
            visited.insert(n);
            queue.push_back(n);
        }
    }
    visited.len()
}

struct Candidate {
    pos: Position,
    direction: u8,
    score: f64,
}

fn find_candidate(world: &World, settlement_pos: Position) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for dy in -2..=2 {
        for dx in -2..=2 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let pos = Position::new(settlement_pos.x + dx, settlement_pos.y + dy);
            if !world.in_bounds(pos) {
                continue;
            }
            let tile = world.tile(pos);
            if !tile.is_water() {
                continue;
            }
            if tile.features.iter().any(|f| f.kind == FeatureKind::Pier) {
                continue;
            }

            let neighbors = pos.neighbors4();
            let mut land_direction = None;
            let mut water_neighbors = 0u32;
            for (i, n) in neighbors.iter().enumerate() {
                if !world.in_bounds(*n) {
                    continue;
                }
                if world.tile(*n).is_water() {
                    water_neighbors += 1;
                } else if land_direction.is_none() {
                    land_direction = Some(i as u8);
                }
            }
            let Some(direction) = land_direction else { continue };
            if water_neighbors == 0 {
                continue;
            }
            if water_body_size(world, pos) < MIN_WATER_BODY_SIZE {
                continue;
            }

            let score = 10.0 * water_neighbors as f64 - pos.manhattan_distance(&settlement_pos) as f64;
            let replace = match &best {
                None => true,
                Some(b) => score > b.score,
            };
            if replace {
                best = Some(Candidate { pos, direction, score });
            }
        }
    }
    best
}

/// Places one pier per eligible settlement, mutating the tile grid.
pub fn run(world: &mut World) {
    let eligible: Vec<(String, Position)> = world
        .locations
        .iter()
        .filter(|(_, loc)| !loc.is_destroyed)
        .filter(|(_, loc)| piered_by_default(loc.kind) || is_island(world, loc.position))
        .map(|(id, loc)| (id.clone(), loc.position))
        .collect();

    for (_, pos) in eligible {
        if let Some(candidate) = find_candidate(world, pos) {
            world.tile_mut(candidate.pos).features.push(Feature::new(FeatureKind::Pier, candidate.direction));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Biome, Location, TerrainType};

    fn coastal_world() -> World {
        let mut world = World::new(16, 16, 1);
        for tile in &mut world.tiles {
            tile.terrain_type = TerrainType::Lowland;
            tile.biome = Biome::Grassland;
        }
        // Carve a >=10-tile water body to the east of (5,5).
        for y in 0..16 {
            for x in 8..16 {
                let idx = y * 16 + x;
                world.tiles[idx].terrain_type = TerrainType::ShallowOcean;
                world.tiles[idx].biome = Biome::Ocean;
            }
        }
        world
    }

    #[test]
    fn pier_lands_on_a_valid_water_tile() {
        let mut world = coastal_world();
        let loc = Location::new("loc_port".into(), "Port".into(), LocationKind::Port, Position::new(7, 5));
        world.locations.insert(loc.id.clone(), loc);
        run(&mut world);

        let pier_tiles: Vec<_> = world
            .tiles
            .iter()
            .filter(|t| t.features.iter().any(|f| f.kind == FeatureKind::Pier))
            .collect();
        assert_eq!(pier_tiles.len(), 1);
        let pier = pier_tiles[0];
        assert!(pier.is_water());
        let pos = pier.position();
        assert!(pos.neighbors4().iter().any(|n| world.in_bounds(*n) && !world.tile(*n).is_water()));
    }

    #[test]
    fn non_coastal_non_island_village_gets_no_pier() {
        let mut world = World::new(16, 16, 1);
        for tile in &mut world.tiles {
            tile.terrain_type = TerrainType::Lowland;
            tile.biome = Biome::Grassland;
        }
        let loc = Location::new("loc_v".into(), "V".into(), LocationKind::Village, Position::new(8, 8));
        world.locations.insert(loc.id.clone(), loc);
        run(&mut world);
        assert!(world.tiles.iter().all(|t| t.features.is_empty()));
    }
}
