use serde::{Deserialize, Serialize};

/// Terrain category, assigned from elevation via ordered thresholds (§4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainType {
    DeepOcean,
    ShallowOcean,
    Coast,
    Lowland,
    Highland,
    Mountain,
    Peak,
}

impl TerrainType {
    pub fn is_water(self) -> bool {
        matches!(self, TerrainType::DeepOcean | TerrainType::ShallowOcean)
    }
}

/// Climatic/vegetative classification of a land or water tile (§4.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Ocean,
    Beach,
    Desert,
    Savanna,
    Jungle,
    Swamp,
    DenseForest,
    Forest,
    Grassland,
    Tundra,
    Hills,
    Mountain,
    SnowMountain,
}

impl Biome {
    /// Whether a settlement is ever allowed to be founded on this biome.
    /// Grounded on the settlement-scoring rule in §4.9(a) ("0 if biome
    /// disallows settlement").
    pub fn can_build_settlement(self) -> bool {
        !matches!(self, Biome::Ocean | Biome::Mountain | Biome::SnowMountain)
    }
}

/// Kind of a tile feature, each carrying a small integer variant (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Rock,
    River,
    Lake,
    Ruins,
    DungeonEntrance,
    Oasis,
    HotSpring,
    Pier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feature {
    pub kind: FeatureKind,
    pub variant: u8,
}

impl Feature {
    pub fn new(kind: FeatureKind, variant: u8) -> Self {
        Self { kind, variant }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDeposit {
    pub resource_id: String,
    pub amount: f64,
    pub max_amount: f64,
    pub replenish_rate: f64,
}

impl ResourceDeposit {
    pub fn new(resource_id: impl Into<String>, amount: f64, max_amount: f64, replenish_rate: f64) -> Self {
        debug_assert!(amount <= max_amount);
        Self {
            resource_id: resource_id.into(),
            amount,
            max_amount,
            replenish_rate,
        }
    }
}

/// A single grid cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub elevation: f64,
    pub moisture: f64,
    pub temperature: f64,
    pub terrain_type: TerrainType,
    pub biome: Biome,
    pub vegetation: f64,
    pub features: Vec<Feature>,
    pub resource_deposit: Option<ResourceDeposit>,
    pub location_id: Option<String>,
    pub road_level: u8,
    pub explored: bool,
    pub visible: bool,
    pub river_flow: f64,
}

impl Tile {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            elevation: 0.0,
            moisture: 0.0,
            temperature: 0.0,
            terrain_type: TerrainType::DeepOcean,
            biome: Biome::Ocean,
            vegetation: 0.0,
            features: Vec::new(),
            resource_deposit: None,
            location_id: None,
            road_level: 0,
            explored: false,
            visible: false,
            river_flow: 0.0,
        }
    }

    pub fn position(&self) -> crate::core::position::Position {
        crate::core::position::Position::new(self.x, self.y)
    }

    pub fn is_water(&self) -> bool {
        self.terrain_type.is_water()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tile_starts_unexplored_and_roadless() {
        let tile = Tile::new(1, 2);
        assert!(!tile.explored);
        assert!(!tile.visible);
        assert_eq!(tile.road_level, 0);
        assert_eq!(tile.river_flow, 0.0);
    }

    #[test]
    fn ocean_biome_cannot_host_settlement() {
        assert!(!Biome::Ocean.can_build_settlement());
        assert!(!Biome::Mountain.can_build_settlement());
        assert!(Biome::Grassland.can_build_settlement());
    }

    #[test]
    fn water_terrain_types_are_recognised() {
        assert!(TerrainType::DeepOcean.is_water());
        assert!(TerrainType::ShallowOcean.is_water());
        assert!(!TerrainType::Coast.is_water());
    }
}
