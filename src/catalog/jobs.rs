//! Per-settlement-type job weight tables and per-job stat bonuses consumed
//! by the populator (§4.13, §4.14).

use crate::world::{JobType, LocationKind, Stats};

/// `(job, weight)` pairs used for weighted sampling when assigning an
/// adult's job at founding time. Weights are relative, not normalized; the
/// populator feeds them straight into [`crate::rng::DeterministicRng::weighted_pick`].
pub fn job_weights(kind: LocationKind) -> &'static [(JobType, f64)] {
    use JobType::*;
    match kind {
        LocationKind::Homestead | LocationKind::Farm => &[
            (Farmer, 5.0),
            (Hunter, 1.5),
            (Unemployed, 0.5),
        ],
        LocationKind::Hamlet => &[
            (Farmer, 4.0),
            (Hunter, 1.5),
            (Shepherd, 1.0),
            (Merchant, 0.5),
            (Unemployed, 0.5),
        ],
        LocationKind::Village => &[
            (Farmer, 3.0),
            (Hunter, 1.0),
            (Blacksmith, 0.8),
            (Merchant, 1.2),
            (Weaver, 0.6),
            (Shepherd, 0.8),
            (Guard, 0.6),
            (Unemployed, 0.5),
        ],
        LocationKind::Town => &[
            (Farmer, 2.0),
            (Blacksmith, 1.2),
            (Merchant, 2.0),
            (Baker, 1.0),
            (Brewer, 0.8),
            (Weaver, 0.8),
            (Tanner, 0.6),
            (Guard, 1.5),
            (Soldier, 1.0),
            (Scholar, 0.6),
            (Priest, 0.5),
            (Unemployed, 0.7),
        ],
        LocationKind::City => &[
            (Merchant, 3.0),
            (Blacksmith, 1.5),
            (Baker, 1.2),
            (Brewer, 1.0),
            (Weaver, 1.0),
            (Tanner, 0.8),
            (Guard, 2.0),
            (Soldier, 1.8),
            (Scholar, 1.5),
            (Priest, 1.0),
            (Noble, 0.8),
            (Unemployed, 1.0),
        ],
        LocationKind::Mine => &[
            (Miner, 6.0),
            (Blacksmith, 1.0),
            (Guard, 0.8),
            (Unemployed, 0.4),
        ],
        LocationKind::LumberCamp => &[
            (Lumberjack, 6.0),
            (Hunter, 1.0),
            (Unemployed, 0.4),
        ],
        LocationKind::FishingVillage => &[
            (Fisher, 5.0),
            (Merchant, 1.0),
            (Unemployed, 0.5),
        ],
        LocationKind::Port => &[
            (Fisher, 2.5),
            (Merchant, 3.0),
            (Guard, 1.2),
            (Soldier, 0.8),
            (Unemployed, 0.6),
        ],
        LocationKind::Castle => &[
            (Soldier, 3.5),
            (Guard, 2.5),
            (Noble, 1.0),
            (Priest, 0.5),
            (Unemployed, 0.3),
        ],
        LocationKind::Dungeon
        | LocationKind::Ruins
        | LocationKind::DragonLair
        | LocationKind::BanditCamp => &[],
    }
}

/// Flat additive stat bonuses a job grants on top of the base roll (§4.14).
/// Only the jobs §4.14 names a bonus for get one; every other job (fisher,
/// baker, brewer, weaver, tanner, guard, priest, herbalist, child, elder,
/// unemployed) relies on the base 3-8 roll alone.
pub fn stat_bonus(job: JobType) -> Stats {
    match job {
        JobType::Farmer => Stats { strength: 2, dexterity: 0, intelligence: 0, charisma: 0, endurance: 2 },
        JobType::Miner => Stats { strength: 3, dexterity: 0, intelligence: 0, charisma: 0, endurance: 2 },
        JobType::Shepherd => Stats { strength: 0, dexterity: 0, intelligence: 0, charisma: 1, endurance: 2 },
        JobType::Blacksmith => Stats { strength: 3, dexterity: 1, intelligence: 0, charisma: 0, endurance: 0 },
        JobType::Soldier => Stats { strength: 2, dexterity: 2, intelligence: 0, charisma: 0, endurance: 2 },
        JobType::Hunter => Stats { strength: 0, dexterity: 3, intelligence: 0, charisma: 0, endurance: 1 },
        JobType::Merchant => Stats { strength: 0, dexterity: 0, intelligence: 1, charisma: 3, endurance: 0 },
        JobType::Scholar => Stats { strength: 0, dexterity: 0, intelligence: 4, charisma: 0, endurance: 0 },
        JobType::Noble => Stats { strength: 0, dexterity: 0, intelligence: 2, charisma: 2, endurance: 0 },
        JobType::Adventurer => Stats { strength: 1, dexterity: 1, intelligence: 0, charisma: 1, endurance: 1 },
        JobType::Lumberjack
        | JobType::Fisher
        | JobType::Baker
        | JobType::Brewer
        | JobType::Weaver
        | JobType::Tanner
        | JobType::Guard
        | JobType::Priest
        | JobType::Herbalist
        | JobType::Child
        | JobType::Elder
        | JobType::Unemployed => Stats::zero(),
    }
}

/// `(skill name, range)` pairs rolled for a character of this job at
/// creation time (§4.13's "job-appropriate skills", §4.14). Jobs without a
/// dedicated trade skill (child, elder, unemployed, noble) get none.
pub fn skill_ranges(job: JobType) -> &'static [(&'static str, (f64, f64))] {
    match job {
        JobType::Farmer => &[("farming", (20.0, 70.0))],
        JobType::Hunter => &[("hunting", (20.0, 70.0))],
        JobType::Miner => &[("mining", (20.0, 70.0))],
        JobType::Lumberjack => &[("woodcutting", (20.0, 70.0))],
        JobType::Fisher => &[("fishing", (20.0, 70.0))],
        JobType::Blacksmith => &[("smithing", (20.0, 70.0))],
        JobType::Baker => &[("baking", (20.0, 70.0))],
        JobType::Brewer => &[("brewing", (20.0, 70.0))],
        JobType::Weaver => &[("weaving", (20.0, 70.0))],
        JobType::Tanner => &[("tanning", (20.0, 70.0))],
        JobType::Merchant => &[("haggling", (20.0, 70.0))],
        JobType::Soldier => &[("combat", (25.0, 75.0))],
        JobType::Guard => &[("combat", (20.0, 65.0))],
        JobType::Scholar => &[("lore", (25.0, 80.0))],
        JobType::Priest => &[("faith", (25.0, 80.0))],
        JobType::Herbalist => &[("herbalism", (20.0, 70.0))],
        JobType::Shepherd => &[("animal_husbandry", (20.0, 70.0))],
        JobType::Adventurer => &[("combat", (15.0, 60.0)), ("survival", (15.0, 60.0))],
        JobType::Noble | JobType::Child | JobType::Elder | JobType::Unemployed => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn governable_settlement_types_have_non_empty_job_weights() {
        for kind in [
            LocationKind::Homestead,
            LocationKind::Hamlet,
            LocationKind::Village,
            LocationKind::Town,
            LocationKind::City,
            LocationKind::Mine,
            LocationKind::LumberCamp,
            LocationKind::FishingVillage,
            LocationKind::Port,
            LocationKind::Castle,
        ] {
            let weights = job_weights(kind);
            assert!(!weights.is_empty(), "{kind:?} has no job weights");
            assert!(weights.iter().all(|(_, w)| *w >= 0.0));
        }
    }

    #[test]
    fn non_settlement_kinds_have_no_job_weights() {
        assert!(job_weights(LocationKind::Dungeon).is_empty());
    }

    #[test]
    fn non_working_jobs_have_zero_bonus() {
        assert_eq!(stat_bonus(JobType::Child), Stats::zero());
        assert_eq!(stat_bonus(JobType::Unemployed), Stats::zero());
    }
}
