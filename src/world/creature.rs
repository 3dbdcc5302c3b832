use serde::{Deserialize, Serialize};

use crate::core::position::Position;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LootStack {
    pub resource_id: String,
    pub quantity: f64,
    pub quality: f64,
    pub age: u32,
}

/// A spawned creature group (§3, §4.15). `position` tracks the group's
/// current location; `home_position` is where it was spawned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    pub id: String,
    pub creature_type: String,
    pub name: Option<String>,
    pub position: Position,
    pub home_position: Position,
    pub health: f64,
    pub max_health: f64,
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub behavior: String,
    pub wander_radius: f64,
    pub is_hostile: bool,
    pub loot: Vec<LootStack>,
    pub age: u32,
    pub last_action_turn: u64,
}
