//! The generated world: tile grid plus every derived entity collection.

pub mod character;
pub mod country;
pub mod creature;
pub mod location;
pub mod tile;

pub use character::{Character, Gender, JobType, Needs, Personality, RelationshipKind, Stats};
pub use country::{Country, DiplomaticRelation, DiplomacyKind};
pub use creature::{Creature, LootStack};
pub use location::{Building, LocationKind, Location, ResourceStack};
pub use tile::{Biome, Feature, FeatureKind, ResourceDeposit, TerrainType, Tile};

use crate::core::position::Position;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The complete generated world.
///
/// `locations`, `characters`, `creatures`, and `countries` are
/// [`IndexMap`]s: iteration order is insertion order, which several layers
/// rely on for deterministic tie-breaking (capital selection, worker scans,
/// diplomacy listing order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub width: i32,
    pub height: i32,
    pub seed: i32,
    pub tiles: Vec<Tile>,
    pub locations: IndexMap<String, Location>,
    pub characters: IndexMap<String, Character>,
    pub creatures: IndexMap<String, Creature>,
    pub countries: IndexMap<String, Country>,
    pub diplomatic_relations: Vec<DiplomaticRelation>,
    /// Placeholder for downstream trade-route systems; always empty at the
    /// end of generation.
    pub trade_routes: IndexMap<String, serde_json::Value>,
    /// Placeholder for downstream item systems; always empty at the end of
    /// generation.
    pub items: IndexMap<String, serde_json::Value>,
}

impl World {
    pub fn new(width: i32, height: i32, seed: i32) -> Self {
        let tiles = (0..(width as usize * height as usize))
            .map(|idx| {
                let x = (idx % width as usize) as i32;
                let y = (idx / width as usize) as i32;
                Tile::new(x, y)
            })
            .collect();
        Self {
            width,
            height,
            seed,
            tiles,
            locations: IndexMap::new(),
            characters: IndexMap::new(),
            creatures: IndexMap::new(),
            countries: IndexMap::new(),
            diplomatic_relations: Vec::new(),
            trade_routes: IndexMap::new(),
            items: IndexMap::new(),
        }
    }

    #[inline]
    pub fn tile_index(&self, pos: Position) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    pub fn tile(&self, pos: Position) -> &Tile {
        &self.tiles[self.tile_index(pos)]
    }

    pub fn tile_mut(&mut self, pos: Position) -> &mut Tile {
        let idx = self.tile_index(pos);
        &mut self.tiles[idx]
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.in_bounds(self.width, self.height)
    }
}
