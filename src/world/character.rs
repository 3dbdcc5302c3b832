use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn opposite(self) -> Gender {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    Farmer,
    Hunter,
    Miner,
    Lumberjack,
    Fisher,
    Blacksmith,
    Baker,
    Brewer,
    Weaver,
    Tanner,
    Merchant,
    Soldier,
    Guard,
    Scholar,
    Priest,
    Herbalist,
    Noble,
    Shepherd,
    Adventurer,
    Child,
    Elder,
    Unemployed,
}

impl JobType {
    /// Age range a character with this job is drawn into (§4.14).
    pub fn age_range(self) -> (u32, u32) {
        match self {
            JobType::Child => (0, 14),
            JobType::Elder => (55, 75),
            JobType::Noble => (25, 55),
            JobType::Soldier | JobType::Guard => (18, 40),
            JobType::Scholar | JobType::Priest => (25, 60),
            _ => (16, 50),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: i32,
    pub dexterity: i32,
    pub intelligence: i32,
    pub charisma: i32,
    pub endurance: i32,
}

impl Stats {
    pub fn zero() -> Self {
        Self {
            strength: 0,
            dexterity: 0,
            intelligence: 0,
            charisma: 0,
            endurance: 0,
        }
    }
}

/// Integer needs in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Needs {
    pub food: i32,
    pub shelter: i32,
    pub safety: i32,
    pub social: i32,
    pub purpose: i32,
}

/// Real-valued personality traits in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    pub ambition: f64,
    pub courage: f64,
    pub greed: f64,
    pub loyalty: f64,
    pub kindness: f64,
    pub curiosity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipKind {
    Spouse,
    Parent,
    Child,
    Friend,
    Rival,
    Lord,
    Vassal,
}

impl RelationshipKind {
    /// The reciprocal relationship type seen from the other character's side.
    pub fn reciprocal(self) -> RelationshipKind {
        match self {
            RelationshipKind::Spouse => RelationshipKind::Spouse,
            RelationshipKind::Parent => RelationshipKind::Child,
            RelationshipKind::Child => RelationshipKind::Parent,
            RelationshipKind::Friend => RelationshipKind::Friend,
            RelationshipKind::Rival => RelationshipKind::Rival,
            RelationshipKind::Lord => RelationshipKind::Vassal,
            RelationshipKind::Vassal => RelationshipKind::Lord,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub target_id: String,
    pub kind: RelationshipKind,
    pub strength: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub position: Position,
    pub home_location_id: String,
    pub job_type: JobType,
    pub health: f64,
    pub max_health: f64,
    pub stats: Stats,
    pub needs: Needs,
    pub personality: Personality,
    pub skills: IndexMap<String, f64>,
    pub relationships: Vec<Relationship>,
    pub title: Option<String>,
    pub lord_id: Option<String>,
    pub vassal_ids: Vec<String>,
    pub owned_location_ids: Vec<String>,
    pub known_location_ids: Vec<String>,
    pub gold: f64,
}

impl Character {
    pub fn add_relationship(&mut self, target_id: impl Into<String>, kind: RelationshipKind, strength: f64) {
        self.relationships.push(Relationship {
            target_id: target_id.into(),
            kind,
            strength,
        });
    }

    pub fn has_relationship_with(&self, target_id: &str) -> bool {
        self.relationships.iter().any(|r| r.target_id == target_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reciprocal_relationships_are_correct() {
        assert_eq!(RelationshipKind::Parent.reciprocal(), RelationshipKind::Child);
        assert_eq!(RelationshipKind::Child.reciprocal(), RelationshipKind::Parent);
        assert_eq!(RelationshipKind::Lord.reciprocal(), RelationshipKind::Vassal);
        assert_eq!(RelationshipKind::Spouse.reciprocal(), RelationshipKind::Spouse);
        assert_eq!(RelationshipKind::Friend.reciprocal(), RelationshipKind::Friend);
    }

    #[test]
    fn job_age_ranges_match_spec_table() {
        assert_eq!(JobType::Child.age_range(), (0, 14));
        assert_eq!(JobType::Elder.age_range(), (55, 75));
        assert_eq!(JobType::Farmer.age_range(), (16, 50));
    }

    #[test]
    fn opposite_gender_is_involution() {
        assert_eq!(Gender::Male.opposite(), Gender::Female);
        assert_eq!(Gender::Female.opposite().opposite(), Gender::Female);
    }
}
