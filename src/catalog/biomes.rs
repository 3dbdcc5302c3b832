//! Biome parameter table (movement cost, settlement eligibility, vegetation
//! density).

use std::sync::OnceLock;

use ahash::AHashMap;

use crate::world::Biome;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiomeDef {
    pub movement_cost: f64,
    pub can_build_settlement: bool,
    pub vegetation_density: f64,
}

/// Base movement cost used when a biome is missing from the table (§4.11,
/// §7's "unknown biome" soft condition). The table below is exhaustive over
/// [`Biome`], so this only matters if the enum grows without a matching
/// table entry being added.
pub const FALLBACK_MOVEMENT_COST: f64 = 5.0;

fn build_table() -> AHashMap<Biome, BiomeDef> {
    use Biome::*;
    let entries = [
        (Ocean, BiomeDef { movement_cost: f64::INFINITY, can_build_settlement: false, vegetation_density: 0.0 }),
        (Beach, BiomeDef { movement_cost: 1.0, can_build_settlement: true, vegetation_density: 0.1 }),
        (Desert, BiomeDef { movement_cost: 1.5, can_build_settlement: true, vegetation_density: 0.05 }),
        (Savanna, BiomeDef { movement_cost: 1.0, can_build_settlement: true, vegetation_density: 0.3 }),
        (Jungle, BiomeDef { movement_cost: 2.5, can_build_settlement: true, vegetation_density: 0.95 }),
        (Swamp, BiomeDef { movement_cost: 3.0, can_build_settlement: true, vegetation_density: 0.7 }),
        (DenseForest, BiomeDef { movement_cost: 2.2, can_build_settlement: true, vegetation_density: 0.9 }),
        (Forest, BiomeDef { movement_cost: 1.8, can_build_settlement: true, vegetation_density: 0.7 }),
        (Grassland, BiomeDef { movement_cost: 1.0, can_build_settlement: true, vegetation_density: 0.4 }),
        (Tundra, BiomeDef { movement_cost: 1.6, can_build_settlement: true, vegetation_density: 0.15 }),
        (Hills, BiomeDef { movement_cost: 1.8, can_build_settlement: true, vegetation_density: 0.35 }),
        (Mountain, BiomeDef { movement_cost: 3.5, can_build_settlement: false, vegetation_density: 0.1 }),
        (SnowMountain, BiomeDef { movement_cost: 4.0, can_build_settlement: false, vegetation_density: 0.0 }),
    ];
    entries.into_iter().collect()
}

fn table() -> &'static AHashMap<Biome, BiomeDef> {
    static TABLE: OnceLock<AHashMap<Biome, BiomeDef>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

pub fn def(biome: Biome) -> BiomeDef {
    *table().get(&biome).unwrap_or(&BiomeDef {
        movement_cost: FALLBACK_MOVEMENT_COST,
        can_build_settlement: false,
        vegetation_density: 0.2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_biome_has_a_table_entry() {
        for biome in [
            Biome::Ocean, Biome::Beach, Biome::Desert, Biome::Savanna, Biome::Jungle,
            Biome::Swamp, Biome::DenseForest, Biome::Forest, Biome::Grassland, Biome::Tundra,
            Biome::Hills, Biome::Mountain, Biome::SnowMountain,
        ] {
            let d = def(biome);
            assert!(d.movement_cost > 0.0);
        }
    }

    #[test]
    fn ocean_is_impassable() {
        assert!(def(Biome::Ocean).movement_cost.is_infinite());
    }
}
