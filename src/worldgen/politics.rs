//! Politics (§4.16): capital selection, ruler/vassal minting, and pairwise
//! diplomacy.

use crate::catalog::names;
use crate::core::id::IdMinter;
use crate::core::position::Position;
use crate::rng::DeterministicRng;
use crate::world::{Country, DiplomacyKind, DiplomaticRelation, Gender, JobType, LocationKind, RelationshipKind, World};
use crate::worldgen::populate::{link_relationship, mint_character};

const MIN_COUNTRIES: usize = 2;
const MAX_COUNTRIES: usize = 10;
const SETTLEMENTS_PER_COUNTRY: usize = 8;
const NEAREST_CAPITAL_RADIUS: f64 = 50.0;
const ALLIANCE_RIVALRY_RADIUS: f64 = 30.0;

fn political_weight(kind: LocationKind) -> u32 {
    kind.political_weight()
}

/// Picks (and, if necessary, mints) the ruling noble for a capital, per
/// §4.16's rule chain: an existing noble resident, else the first resident
/// promoted to noble, else a freshly minted one.
fn pick_or_mint_ruler(world: &mut World, rng: &mut DeterministicRng, id_minter: &mut IdMinter, location_id: &str) -> String {
    let resident_ids = world.locations[location_id].resident_ids.clone();

    if let Some(noble_id) = resident_ids.iter().find(|id| world.characters[*id].job_type == JobType::Noble) {
        return noble_id.clone();
    }

    if let Some(first_id) = resident_ids.first() {
        let character = world.characters.get_mut(first_id).unwrap();
        character.job_type = JobType::Noble;
        character.title = Some("King".to_string());
        character.personality.ambition = character.personality.ambition.max(0.7);
        return first_id.clone();
    }

    let position = world.locations[location_id].position;
    let gender = if rng.chance(0.5) { Gender::Male } else { Gender::Female };
    let name = rng.pick(names::character_names(gender)).to_string();
    let age = rng.next_int(25, 55) as u32;
    let gold = rng.next_float(50.0, 300.0);
    let mut ruler = mint_character(id_minter, rng, location_id, position, name, age, gender, JobType::Noble, gold);
    ruler.title = Some("King".to_string());
    ruler.personality.ambition = ruler.personality.ambition.max(0.7);
    let ruler_id = ruler.id.clone();
    world.characters.insert(ruler_id.clone(), ruler);
    world.locations.get_mut(location_id).unwrap().resident_ids.push(ruler_id.clone());
    ruler_id
}

/// Picks (and, if necessary, mints) the vassal lord for a non-capital
/// governable settlement. Returns `None` when no resident qualifies and the
/// settlement is too small to mint one (§4.16).
fn pick_or_mint_vassal_lord(
    world: &mut World,
    rng: &mut DeterministicRng,
    id_minter: &mut IdMinter,
    location_id: &str,
) -> Option<String> {
    let resident_ids = world.locations[location_id].resident_ids.clone();

    let candidate = resident_ids
        .iter()
        .find(|id| {
            let c = &world.characters[*id];
            c.personality.ambition > 0.5 && c.age >= 20
        })
        .cloned();

    if let Some(id) = candidate {
        world.characters.get_mut(&id).unwrap().job_type = JobType::Noble;
        return Some(id);
    }

    if resident_ids.len() < 3 {
        return None;
    }

    let position = world.locations[location_id].position;
    let gender = if rng.chance(0.5) { Gender::Male } else { Gender::Female };
    let name = rng.pick(names::character_names(gender)).to_string();
    let age = rng.next_int(25, 55) as u32;
    let gold = rng.next_float(20.0, 150.0);
    let lord = mint_character(id_minter, rng, location_id, position, name, age, gender, JobType::Noble, gold);
    let lord_id = lord.id.clone();
    world.characters.insert(lord_id.clone(), lord);
    world.locations.get_mut(location_id).unwrap().resident_ids.push(lord_id.clone());
    Some(lord_id)
}

fn random_color(rng: &mut DeterministicRng) -> String {
    let r = rng.next_int(0, 255);
    let g = rng.next_int(0, 255);
    let b = rng.next_int(0, 255);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Selects capitals, mints rulers and vassal lords, and generates pairwise
/// diplomacy.
pub fn run(world: &mut World, rng: &mut DeterministicRng, id_minter: &mut IdMinter) {
    let mut governable: Vec<(String, Position, LocationKind)> = world
        .locations
        .iter()
        .filter(|(_, loc)| !loc.is_destroyed && loc.kind.is_governable())
        .map(|(id, loc)| (id.clone(), loc.position, loc.kind))
        .collect();

    if governable.is_empty() {
        return;
    }

    governable.sort_by(|a, b| political_weight(b.2).cmp(&political_weight(a.2)));

    let num_countries = ((governable.len() / SETTLEMENTS_PER_COUNTRY).max(MIN_COUNTRIES))
        .min(MAX_COUNTRIES)
        .min(governable.len());

    let capitals = governable[..num_countries].to_vec();
    let remaining = governable[num_countries..].to_vec();

    let mut countries: Vec<(String, Position, String)> = Vec::new(); // (country_id, capital_pos, ruler_id)

    for (capital_id, capital_pos, _) in &capitals {
        let ruler_id = pick_or_mint_ruler(world, rng, id_minter, capital_id);

        let name = rng.pick(names::country_names()).to_string();
        let color = random_color(rng);
        let country_id = id_minter.mint("country");
        let country = Country {
            id: country_id.clone(),
            name,
            color,
            leader_id: ruler_id.clone(),
            capital_location_id: capital_id.clone(),
            location_ids: vec![capital_id.clone()],
            alliances: Vec::new(),
            enemies: Vec::new(),
            vassal_ids: Vec::new(),
            treasury: rng.next_float(100.0, 1000.0),
            tax_rate: rng.next_float(0.05, 0.25),
            military_strength: 0.0,
            reputation: 0.0,
            founded_turn: 0,
        };
        world.countries.insert(country_id.clone(), country);

        let capital = world.locations.get_mut(capital_id).unwrap();
        capital.owner_id = Some(ruler_id.clone());
        capital.country_id = Some(country_id.clone());

        let ruler = world.characters.get_mut(&ruler_id).unwrap();
        ruler.owned_location_ids.push(capital_id.clone());
        ruler.known_location_ids.push(capital_id.clone());

        countries.push((country_id, *capital_pos, ruler_id));
    }

    for (settlement_id, settlement_pos, kind) in &remaining {
        let nearest = countries
            .iter()
            .map(|(cid, cpos, ruler_id)| (cid, ruler_id, settlement_pos.euclidean_distance(cpos)))
            .filter(|(_, _, dist)| *dist <= NEAREST_CAPITAL_RADIUS)
            .min_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));

        let Some((country_id, ruler_id, _)) = nearest.map(|(cid, rid, d)| (cid.clone(), rid.clone(), d)) else {
            continue;
        };

        world.locations.get_mut(settlement_id).unwrap().country_id = Some(country_id.clone());
        world.countries.get_mut(&country_id).unwrap().location_ids.push(settlement_id.clone());

        let Some(lord_id) = pick_or_mint_vassal_lord(world, rng, id_minter, settlement_id) else {
            continue;
        };

        let title = if *kind == LocationKind::Town { "Baron" } else { "Lord" };
        if let Some(lord) = world.characters.get_mut(&lord_id) {
            lord.title = Some(title.to_string());
            lord.owned_location_ids.push(settlement_id.clone());
        }
        world.locations.get_mut(settlement_id).unwrap().owner_id = Some(lord_id.clone());

        let lord_strength = 50.0 + rng.next_int(-20, 20) as f64;
        let ruler_strength = 30.0 + rng.next_int(-20, 20) as f64;
        link_relationship(world, &lord_id, RelationshipKind::Lord, &ruler_id, lord_strength);
        // `link_relationship` mirrors `lord_strength` onto the ruler's
        // `Vassal` edge; §4.16 draws the ruler->lord strength independently.
        if let Some(ruler) = world.characters.get_mut(&ruler_id) {
            if let Some(rel) = ruler.relationships.iter_mut().find(|r| r.target_id == lord_id) {
                rel.strength = ruler_strength;
            }
        }
        if let Some(ruler) = world.characters.get_mut(&ruler_id) {
            ruler.vassal_ids.push(lord_id.clone());
        }
        world.countries.get_mut(&country_id).unwrap().vassal_ids.push(lord_id.clone());
    }

    // Pairwise diplomacy, iterated in country insertion order.
    let country_ids: Vec<String> = world.countries.keys().cloned().collect();
    for i in 0..country_ids.len() {
        for j in (i + 1)..country_ids.len() {
            let (id_a, id_b) = (&country_ids[i], &country_ids[j]);
            let capital_a_id = world.countries[id_a].capital_location_id.clone();
            let capital_b_id = world.countries[id_b].capital_location_id.clone();
            let capital_a = world.locations[&capital_a_id].position;
            let capital_b = world.locations[&capital_b_id].position;
            let distance = capital_a.euclidean_distance(&capital_b);

            let (kind, strength) = if distance < ALLIANCE_RIVALRY_RADIUS {
                if rng.chance(0.3) {
                    let strength = rng.next_float(20.0, 60.0);
                    world.countries.get_mut(id_a).unwrap().alliances.push(id_b.clone());
                    world.countries.get_mut(id_b).unwrap().alliances.push(id_a.clone());
                    (DiplomacyKind::Alliance, strength)
                } else if rng.chance(0.3) {
                    let strength = rng.next_float(-60.0, -20.0);
                    world.countries.get_mut(id_a).unwrap().enemies.push(id_b.clone());
                    world.countries.get_mut(id_b).unwrap().enemies.push(id_a.clone());
                    (DiplomacyKind::Rivalry, strength)
                } else {
                    (DiplomacyKind::TradeAgreement, rng.next_float(5.0, 30.0))
                }
            } else {
                (DiplomacyKind::Neutral, 0.0)
            };

            world.diplomatic_relations.push(DiplomaticRelation {
                country_a_id: id_a.clone(),
                country_b_id: id_b.clone(),
                kind,
                strength,
                started_turn: 0,
            });
        }
    }

    // Military strength, computed after every location/country assignment settles.
    for country_id in &country_ids {
        let total: f64 = world.countries[country_id]
            .location_ids
            .iter()
            .map(|loc_id| {
                let loc = &world.locations[loc_id];
                loc.defense_level * 10.0 + loc.garrison_ids.len() as f64 * 5.0 + loc.wall_level * 20.0
            })
            .sum();
        world.countries.get_mut(country_id).unwrap().military_strength = total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GenerationConfig;
    use crate::world::Location;

    fn world_with_settlements(seed: i32, count: usize) -> World {
        let config = GenerationConfig::new(128, 128, seed);
        let mut world = World::new(config.width, config.height, config.seed);
        for i in 0..count {
            let pos = Position::new((i as i32 * 7) % 128, (i as i32 * 13) % 128);
            let kind = if i == 0 { LocationKind::City } else { LocationKind::Village };
            let loc = Location::new(format!("loc_{i}"), format!("Place{i}"), kind, pos);
            world.locations.insert(loc.id.clone(), loc);
        }
        world
    }

    #[test]
    fn every_capital_ruler_owns_its_capital() {
        let mut world = world_with_settlements(1, 20);
        let mut rng = DeterministicRng::new(1);
        let mut minter = IdMinter::new(1);
        run(&mut world, &mut rng, &mut minter);
        for country in world.countries.values() {
            let ruler = &world.characters[&country.leader_id];
            assert!(ruler.owned_location_ids.contains(&country.capital_location_id));
        }
    }

    #[test]
    fn no_more_than_ten_countries_for_large_settlement_counts() {
        let mut world = world_with_settlements(2, 200);
        let mut rng = DeterministicRng::new(2);
        let mut minter = IdMinter::new(2);
        run(&mut world, &mut rng, &mut minter);
        assert!(world.countries.len() <= MAX_COUNTRIES);
        assert!(world.countries.len() >= MIN_COUNTRIES);
    }

    #[test]
    fn diplomatic_relations_cover_every_unordered_pair_once() {
        let mut world = world_with_settlements(3, 40);
        let mut rng = DeterministicRng::new(3);
        let mut minter = IdMinter::new(3);
        run(&mut world, &mut rng, &mut minter);
        let n = world.countries.len();
        assert_eq!(world.diplomatic_relations.len(), n * (n.saturating_sub(1)) / 2);
    }

    #[test]
    fn no_countries_when_no_governable_settlements() {
        let mut world = World::new(32, 32, 4);
        let mut rng = DeterministicRng::new(4);
        let mut minter = IdMinter::new(4);
        run(&mut world, &mut rng, &mut minter);
        assert!(world.countries.is_empty());
    }
}
