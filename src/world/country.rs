use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    pub color: String,
    pub leader_id: String,
    pub capital_location_id: String,
    /// First element is always the capital.
    pub location_ids: Vec<String>,
    pub alliances: Vec<String>,
    pub enemies: Vec<String>,
    pub vassal_ids: Vec<String>,
    pub treasury: f64,
    pub tax_rate: f64,
    pub military_strength: f64,
    pub reputation: f64,
    pub founded_turn: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiplomacyKind {
    Neutral,
    Friendly,
    Alliance,
    TradeAgreement,
    Rivalry,
    War,
    Truce,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiplomaticRelation {
    pub country_a_id: String,
    pub country_b_id: String,
    pub kind: DiplomacyKind,
    pub strength: f64,
    pub started_turn: u64,
}
