//! Tile assembly (§2 layer 9): writes the scalar fields into the `World`'s
//! tile grid.

use crate::catalog::biomes;
use crate::world::{Biome, TerrainType, World};

pub fn assemble(
    world: &mut World,
    elevation: &[f64],
    moisture: &[f64],
    temperature: &[f64],
    terrain: &[TerrainType],
    biome: &[Biome],
) {
    for (idx, tile) in world.tiles.iter_mut().enumerate() {
        tile.elevation = elevation[idx];
        tile.moisture = moisture[idx];
        tile.temperature = temperature[idx];
        tile.terrain_type = terrain[idx];
        tile.biome = biome[idx];
        tile.vegetation = biomes::def(biome[idx]).vegetation_density;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembly_copies_every_field() {
        let mut world = World::new(4, 4, 1);
        let n = world.tiles.len();
        let elevation = vec![0.5; n];
        let moisture = vec![0.4; n];
        let temperature = vec![0.6; n];
        let terrain = vec![TerrainType::Lowland; n];
        let biome = vec![Biome::Grassland; n];

        assemble(&mut world, &elevation, &moisture, &temperature, &terrain, &biome);

        for tile in &world.tiles {
            assert_eq!(tile.elevation, 0.5);
            assert_eq!(tile.biome, Biome::Grassland);
            assert!(tile.vegetation > 0.0);
        }
    }
}
