//! Movement cost (§4.11), consumed by the road builder's A* search.

use crate::catalog::biomes;
use crate::world::Tile;

/// `infinity` on water; otherwise biome base cost discounted by any existing
/// road, then penalised for high elevation, floored at `0.5`.
pub fn cost(tile: &Tile) -> f64 {
    if tile.is_water() {
        return f64::INFINITY;
    }
    let mut cost = biomes::def(tile.biome).movement_cost;
    cost *= if tile.road_level >= 3 {
        0.35
    } else if tile.road_level >= 2 {
        0.5
    } else if tile.road_level >= 1 {
        0.7
    } else {
        1.0
    };
    let scaled_elevation = tile.elevation * 10.0;
    cost += (scaled_elevation - 8.0).max(0.0) * 0.15;
    cost.max(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Biome, TerrainType};

    #[test]
    fn water_is_impassable() {
        let mut tile = Tile::new(0, 0);
        tile.terrain_type = TerrainType::DeepOcean;
        assert!(cost(&tile).is_infinite());
    }

    #[test]
    fn roads_discount_movement_cost() {
        let mut tile = Tile::new(0, 0);
        tile.terrain_type = TerrainType::Lowland;
        tile.biome = Biome::Grassland;
        let base = cost(&tile);
        tile.road_level = 3;
        let highway = cost(&tile);
        assert!(highway < base);
    }

    #[test]
    fn cost_is_floored_at_half() {
        let mut tile = Tile::new(0, 0);
        tile.terrain_type = TerrainType::Lowland;
        tile.biome = Biome::Beach;
        tile.road_level = 3;
        assert!(cost(&tile) >= 0.5);
    }
}
