use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::position::Position;

/// Settlement category. The settlement placer (§4.9) and the politics layer
/// (§4.16) only ever mint the first eleven of these; the remaining four are
/// part of the closed set named in §3 ("…") and are recognised by the road
/// builder's exclusion rule (§4.10) even though nothing in this crate
/// places them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    Homestead,
    Hamlet,
    Village,
    Town,
    City,
    Farm,
    Mine,
    LumberCamp,
    FishingVillage,
    Port,
    Castle,
    Dungeon,
    Ruins,
    DragonLair,
    BanditCamp,
}

impl LocationKind {
    /// Road-builder importance weight (§4.10).
    pub fn road_importance(self) -> u32 {
        match self {
            LocationKind::City => 5,
            LocationKind::Town | LocationKind::Castle => 4,
            LocationKind::Port => 3,
            LocationKind::Village | LocationKind::FishingVillage => 2,
            LocationKind::Hamlet
            | LocationKind::Mine
            | LocationKind::Farm
            | LocationKind::LumberCamp
            | LocationKind::Homestead => 1,
            _ => 0,
        }
    }

    /// Type-weight used when ranking candidates for capital selection (§4.16).
    pub fn political_weight(self) -> u32 {
        match self {
            LocationKind::City => 10,
            LocationKind::Town => 8,
            LocationKind::Castle => 7,
            LocationKind::Port => 6,
            LocationKind::Village => 4,
            LocationKind::Hamlet | LocationKind::FishingVillage | LocationKind::Mine => 2,
            LocationKind::Homestead | LocationKind::Farm | LocationKind::LumberCamp => 1,
            _ => 0,
        }
    }

    /// Whether this settlement type is eligible to found or join a country (§4.16).
    pub fn is_governable(self) -> bool {
        matches!(
            self,
            LocationKind::Homestead
                | LocationKind::Hamlet
                | LocationKind::Village
                | LocationKind::Town
                | LocationKind::City
                | LocationKind::Castle
                | LocationKind::Farm
                | LocationKind::Mine
                | LocationKind::LumberCamp
                | LocationKind::FishingVillage
                | LocationKind::Port
        )
    }

    /// Whether the road builder is allowed to route through/to this settlement (§4.10).
    pub fn is_roadable(self) -> bool {
        !matches!(
            self,
            LocationKind::Dungeon
                | LocationKind::Ruins
                | LocationKind::DragonLair
                | LocationKind::BanditCamp
        )
    }

    /// Target resident-population range, used by the populator (§4.13).
    pub fn population_range(self) -> (u32, u32) {
        match self {
            LocationKind::Homestead => (4, 8),
            LocationKind::Hamlet => (15, 30),
            LocationKind::Village => (40, 80),
            LocationKind::Town => (100, 200),
            LocationKind::City => (200, 400),
            LocationKind::Mine => (10, 25),
            LocationKind::Farm => (6, 15),
            LocationKind::LumberCamp => (8, 20),
            LocationKind::FishingVillage => (20, 40),
            LocationKind::Port => (60, 120),
            LocationKind::Castle => (40, 100),
            _ => (2, 6),
        }
    }
}

/// Construction catalogue entry, used by building worker-eligibility lookups (§6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    House,
    FarmField,
    MineShaft,
    Sawmill,
    Blacksmith,
    Weaponsmith,
    Armorer,
    Bakery,
    Brewery,
    Weaver,
    Tanner,
    Dock,
    Apothecary,
    HunterLodge,
    Barracks,
    Church,
    Market,
    Tavern,
    Warehouse,
    Wall,
    GuildHall,
    CastleKeep,
    Stable,
    Smelter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub building_type: BuildingType,
    pub level: u32,
    pub condition: f64,
    pub worker_id: Option<String>,
    pub is_operational: bool,
}

impl Building {
    pub fn new(building_type: BuildingType) -> Self {
        Self {
            building_type,
            level: 1,
            condition: 1.0,
            worker_id: None,
            is_operational: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceStack {
    pub resource_id: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub kind: LocationKind,
    pub position: Position,
    pub size: u32,
    pub population_capacity: u32,
    pub resident_ids: Vec<String>,
    pub buildings: Vec<Building>,
    pub storage: Vec<ResourceStack>,
    pub storage_capacity: IndexMap<String, f64>,
    pub trade_route_ids: Vec<String>,
    pub market_prices: IndexMap<String, f64>,
    pub defense_level: f64,
    pub wall_level: f64,
    pub garrison_ids: Vec<String>,
    pub owner_id: Option<String>,
    pub country_id: Option<String>,
    pub prosperity: f64,
    pub safety: f64,
    pub happiness: f64,
    pub founded_turn: u64,
    pub is_destroyed: bool,
    pub durability: f64,
}

impl Location {
    pub fn new(id: String, name: String, kind: LocationKind, position: Position) -> Self {
        Self {
            id,
            name,
            kind,
            position,
            size: 0,
            population_capacity: 0,
            resident_ids: Vec::new(),
            buildings: Vec::new(),
            storage: Vec::new(),
            storage_capacity: IndexMap::new(),
            trade_route_ids: Vec::new(),
            market_prices: IndexMap::new(),
            defense_level: 0.0,
            wall_level: 0.0,
            garrison_ids: Vec::new(),
            owner_id: None,
            country_id: None,
            prosperity: 0.5,
            safety: 0.5,
            happiness: 0.5,
            founded_turn: 0,
            is_destroyed: false,
            durability: 1.0,
        }
    }
}
