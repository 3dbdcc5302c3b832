//! Populate (§4.13): families, jobs, stats, and the resident social graph.
//!
//! Runs once per non-destroyed [`Location`], drawing a target population
//! from its type's range (§4.13) and growing it family by family until the
//! target is met. Per §9's overshoot note, a family is never split mid-way
//! through creation, so the final count may exceed the target by up to
//! `familySize - 1`.

use ahash::AHashSet;

use crate::catalog::{jobs, names};
use crate::core::id::IdMinter;
use crate::core::position::Position;
use crate::rng::DeterministicRng;
use crate::world::{
    Character, Gender, JobType, Needs, Personality, RelationshipKind, Stats, World,
};

const BASE_NEED: i32 = 65;
const NEED_JITTER: i32 = 10;
const EXTRA_RELATIONSHIPS_PER_LOCATION: u32 = 5;

pub(crate) fn roll_stats(rng: &mut DeterministicRng, job: JobType) -> Stats {
    let base = Stats {
        strength: rng.next_int(3, 8) as i32,
        dexterity: rng.next_int(3, 8) as i32,
        intelligence: rng.next_int(3, 8) as i32,
        charisma: rng.next_int(3, 8) as i32,
        endurance: rng.next_int(3, 8) as i32,
    };
    let bonus = jobs::stat_bonus(job);
    Stats {
        strength: base.strength + bonus.strength,
        dexterity: base.dexterity + bonus.dexterity,
        intelligence: base.intelligence + bonus.intelligence,
        charisma: base.charisma + bonus.charisma,
        endurance: base.endurance + bonus.endurance,
    }
}

pub(crate) fn roll_needs(rng: &mut DeterministicRng) -> Needs {
    let jitter = |rng: &mut DeterministicRng| (BASE_NEED + rng.next_int(-(NEED_JITTER as i64), NEED_JITTER as i64) as i32).clamp(0, 100);
    Needs {
        food: jitter(rng),
        shelter: jitter(rng),
        safety: jitter(rng),
        social: jitter(rng),
        purpose: jitter(rng),
    }
}

pub(crate) fn roll_personality(rng: &mut DeterministicRng) -> Personality {
    Personality {
        ambition: rng.next(),
        courage: rng.next(),
        greed: rng.next(),
        loyalty: rng.next(),
        kindness: rng.next(),
        curiosity: rng.next(),
    }
}

pub(crate) fn roll_skills(rng: &mut DeterministicRng, job: JobType) -> indexmap::IndexMap<String, f64> {
    let mut skills = indexmap::IndexMap::new();
    for (name, (lo, hi)) in jobs::skill_ranges(job) {
        skills.insert((*name).to_string(), rng.next_float(*lo, *hi));
    }
    skills
}

pub(crate) fn mint_character(
    id_minter: &mut IdMinter,
    rng: &mut DeterministicRng,
    home_location_id: &str,
    position: Position,
    name: String,
    age: u32,
    gender: Gender,
    job_type: JobType,
    gold: f64,
) -> Character {
    let stats = roll_stats(rng, job_type);
    let max_health = 80.0 + stats.endurance as f64 * 2.0;
    Character {
        id: id_minter.mint("char"),
        name,
        age,
        gender,
        position,
        home_location_id: home_location_id.to_string(),
        job_type,
        health: max_health,
        max_health,
        stats,
        needs: roll_needs(rng),
        personality: roll_personality(rng),
        skills: roll_skills(rng, job_type),
        relationships: Vec::new(),
        title: None,
        lord_id: None,
        vassal_ids: Vec::new(),
        owned_location_ids: Vec::new(),
        known_location_ids: Vec::new(),
        gold,
    }
}

pub(crate) fn link_relationship(world: &mut World, a_id: &str, kind: RelationshipKind, b_id: &str, strength: f64) {
    let reciprocal = kind.reciprocal();
    let reciprocal_strength = strength;
    if let Some(a) = world.characters.get_mut(a_id) {
        a.add_relationship(b_id, kind, strength);
    }
    if let Some(b) = world.characters.get_mut(b_id) {
        b.add_relationship(a_id, reciprocal, reciprocal_strength);
    }
}

/// Creates one family (head, optional spouse, up to `family_size - 2`
/// children), wires their relationships, and returns their ids.
fn spawn_family(
    world: &mut World,
    rng: &mut DeterministicRng,
    id_minter: &mut IdMinter,
    location_id: &str,
    position: Position,
    location_kind: crate::world::LocationKind,
    family_size: u32,
) -> Vec<String> {
    let weights = jobs::job_weights(location_kind);
    let mut member_ids = Vec::new();

    let head_gender = if rng.chance(0.5) { Gender::Male } else { Gender::Female };
    let head_job = *rng.weighted_pick(weights);
    let head_name = rng.pick(names::character_names(head_gender)).to_string();
    let head_age = rng.next_int(25, 50) as u32;
    let head_gold = rng.next_float(5.0, 40.0);
    let head = mint_character(id_minter, rng, location_id, position, head_name, head_age, head_gender, head_job, head_gold);
    let head_id = head.id.clone();
    world.characters.insert(head_id.clone(), head);
    member_ids.push(head_id.clone());

    if family_size >= 2 {
        let spouse_gender = head_gender.opposite();
        let spouse_job = *rng.weighted_pick(weights);
        let spouse_name = rng.pick(names::character_names(spouse_gender)).to_string();
        let age_delta = rng.next_int(-5, 5);
        let spouse_age = (head_age as i64 + age_delta).max(16) as u32;
        let spouse_gold = rng.next_float(5.0, 40.0);
        let spouse = mint_character(
            id_minter, rng, location_id, position, spouse_name, spouse_age, spouse_gender, spouse_job, spouse_gold,
        );
        let spouse_id = spouse.id.clone();
        world.characters.insert(spouse_id.clone(), spouse);
        member_ids.push(spouse_id.clone());

        let strength = 60.0 + rng.next_int(0, 30) as f64;
        link_relationship(world, &head_id, RelationshipKind::Spouse, &spouse_id, strength);
    }

    let child_count = family_size.saturating_sub(2);
    let max_child_age = (head_age as i64 - 18).max(1);
    for _ in 0..child_count {
        let age = rng.next_int(1, max_child_age) as u32;
        let gender = if rng.chance(0.5) { Gender::Male } else { Gender::Female };
        let job = if age < 15 { JobType::Child } else { *rng.weighted_pick(weights) };
        let name = rng.pick(names::character_names(gender)).to_string();
        let gold = rng.next_float(0.0, 10.0);
        let child = mint_character(id_minter, rng, location_id, position, name, age, gender, job, gold);
        let child_id = child.id.clone();
        world.characters.insert(child_id.clone(), child);
        member_ids.push(child_id.clone());

        let parent_strength = 70.0 + rng.next_int(0, 20) as f64;
        let child_strength = 60.0 + rng.next_int(0, 30) as f64;
        link_relationship(world, &head_id, RelationshipKind::Parent, &child_id, parent_strength);
        // The reciprocal `Child` edge above already carries `parent_strength`
        // on the child's side; §4.13 draws the child->parent strength
        // independently, so overwrite it.
        if let Some(child) = world.characters.get_mut(&child_id) {
            if let Some(rel) = child.relationships.iter_mut().find(|r| r.target_id == head_id) {
                rel.strength = child_strength;
            }
        }
    }

    member_ids
}

fn assign_workers(world: &mut World, location_id: &str) {
    let resident_ids = world.locations[location_id].resident_ids.clone();
    let mut assigned: AHashSet<String> = AHashSet::new();
    let building_count = world.locations[location_id].buildings.len();

    for b_idx in 0..building_count {
        let building_type = world.locations[location_id].buildings[b_idx].building_type;
        if world.locations[location_id].buildings[b_idx].worker_id.is_some() {
            continue;
        }
        let eligible = crate::catalog::buildings::eligible_workers(building_type);
        if eligible.is_empty() {
            continue;
        }
        let worker = resident_ids.iter().find(|id| {
            !assigned.contains(*id)
                && world
                    .characters
                    .get(*id)
                    .is_some_and(|c| eligible.contains(&c.job_type))
        });
        if let Some(worker_id) = worker {
            assigned.insert(worker_id.clone());
            world.locations.get_mut(location_id).unwrap().buildings[b_idx].worker_id = Some(worker_id.clone());
        }
    }
}

fn add_extra_relationships(world: &mut World, rng: &mut DeterministicRng, location_id: &str) {
    let resident_ids = world.locations[location_id].resident_ids.clone();
    if resident_ids.len() < 2 {
        return;
    }
    for _ in 0..EXTRA_RELATIONSHIPS_PER_LOCATION {
        let a = rng.pick(&resident_ids).clone();
        let b = rng.pick(&resident_ids).clone();
        if a == b {
            continue;
        }
        let already_related = world.characters.get(&a).is_some_and(|c| c.has_relationship_with(&b));
        if already_related {
            continue;
        }
        if rng.chance(0.7) {
            let strength_a = rng.next_int(20, 60) as f64;
            let strength_b = rng.next_int(20, 60) as f64;
            if let Some(ca) = world.characters.get_mut(&a) {
                ca.add_relationship(&b, RelationshipKind::Friend, strength_a);
            }
            if let Some(cb) = world.characters.get_mut(&b) {
                cb.add_relationship(&a, RelationshipKind::Friend, strength_b);
            }
        } else {
            let strength_a = rng.next_int(-40, -10) as f64;
            let strength_b = rng.next_int(-40, -10) as f64;
            if let Some(ca) = world.characters.get_mut(&a) {
                ca.add_relationship(&b, RelationshipKind::Rival, strength_a);
            }
            if let Some(cb) = world.characters.get_mut(&b) {
                cb.add_relationship(&a, RelationshipKind::Rival, strength_b);
            }
        }
    }
}

/// Populates every non-destroyed location with families, assigns workers to
/// production buildings, and wires extra friendships/rivalries.
pub fn run(world: &mut World, rng: &mut DeterministicRng, id_minter: &mut IdMinter) {
    let location_ids: Vec<String> = world
        .locations
        .iter()
        .filter(|(_, loc)| !loc.is_destroyed)
        .map(|(id, _)| id.clone())
        .collect();

    for location_id in &location_ids {
        let (position, kind, (lo, hi)) = {
            let loc = &world.locations[location_id];
            (loc.position, loc.kind, loc.kind.population_range())
        };
        let target = rng.next_int(lo as i64, hi as i64) as u32;

        while (world.locations[location_id].resident_ids.len() as u32) < target {
            let family_size = rng.next_int(1, 4) as u32;
            let member_ids = spawn_family(world, rng, id_minter, location_id, position, kind, family_size);
            world.locations.get_mut(location_id).unwrap().resident_ids.extend(member_ids);
        }

        assign_workers(world, location_id);
        add_extra_relationships(world, rng, location_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GenerationConfig;
    use crate::world::{Building, BuildingType, Location, LocationKind};

    fn seeded_village(seed: i32) -> (World, DeterministicRng, IdMinter) {
        let config = GenerationConfig::new(16, 16, seed);
        let mut world = World::new(config.width, config.height, config.seed);
        let mut loc = Location::new("loc_v".into(), "Testford".into(), LocationKind::Village, Position::new(4, 4));
        loc.buildings.push(Building::new(BuildingType::FarmField));
        loc.buildings.push(Building::new(BuildingType::Market));
        loc.population_capacity = 200;
        world.locations.insert(loc.id.clone(), loc);
        (world, DeterministicRng::new(seed), IdMinter::new(seed))
    }

    #[test]
    fn population_reaches_target_range_within_overshoot_tolerance() {
        let (mut world, mut rng, mut minter) = seeded_village(1);
        run(&mut world, &mut rng, &mut minter);
        let count = world.locations["loc_v"].resident_ids.len() as u32;
        let (lo, hi) = LocationKind::Village.population_range();
        assert!(count >= lo, "population {count} below minimum {lo}");
        assert!(count <= hi + 4, "population {count} exceeds tolerance above {hi}");
    }

    #[test]
    fn every_resident_home_location_matches() {
        let (mut world, mut rng, mut minter) = seeded_village(2);
        run(&mut world, &mut rng, &mut minter);
        for id in &world.locations["loc_v"].resident_ids {
            assert_eq!(world.characters[id].home_location_id, "loc_v");
        }
    }

    #[test]
    fn spouse_friend_and_parent_relationships_are_symmetric() {
        let (mut world, mut rng, mut minter) = seeded_village(3);
        run(&mut world, &mut rng, &mut minter);
        for (id, character) in &world.characters {
            for rel in &character.relationships {
                let other = &world.characters[&rel.target_id];
                let has_reciprocal = other
                    .relationships
                    .iter()
                    .any(|r| &r.target_id == id && r.kind == rel.kind.reciprocal());
                assert!(has_reciprocal, "{id} -> {} ({:?}) has no reciprocal", rel.target_id, rel.kind);
            }
        }
    }

    #[test]
    fn deterministic_for_same_seed() {
        let (mut world_a, mut rng_a, mut minter_a) = seeded_village(4);
        let (mut world_b, mut rng_b, mut minter_b) = seeded_village(4);
        run(&mut world_a, &mut rng_a, &mut minter_a);
        run(&mut world_b, &mut rng_b, &mut minter_b);
        assert_eq!(world_a.characters.len(), world_b.characters.len());
        for ((id_a, ca), (id_b, cb)) in world_a.characters.iter().zip(world_b.characters.iter()) {
            assert_eq!(id_a, id_b);
            assert_eq!(ca.name, cb.name);
            assert_eq!(ca.job_type, cb.job_type);
        }
    }

    #[test]
    fn eligible_worker_is_assigned_to_farm_field() {
        let (mut world, mut rng, mut minter) = seeded_village(5);
        run(&mut world, &mut rng, &mut minter);
        let farm_field = world.locations["loc_v"]
            .buildings
            .iter()
            .find(|b| b.building_type == BuildingType::FarmField)
            .unwrap();
        if let Some(worker_id) = &farm_field.worker_id {
            assert_eq!(world.characters[worker_id].job_type, JobType::Farmer);
        }
    }
}
