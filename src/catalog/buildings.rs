//! Building catalogue: which jobs can operate each building type, and the
//! building mix a settlement type is seeded with at placement time (§6).

use crate::world::{BuildingType, JobType, LocationKind};

/// Jobs eligible to staff a building of this type, in preference order.
/// The populator (§4.13) tries each in turn when assigning a worker.
pub fn eligible_workers(building_type: BuildingType) -> &'static [JobType] {
    use BuildingType::*;
    match building_type {
        House => &[],
        FarmField => &[JobType::Farmer],
        MineShaft => &[JobType::Miner],
        Sawmill => &[JobType::Lumberjack],
        Blacksmith => &[JobType::Blacksmith],
        Weaponsmith => &[JobType::Blacksmith],
        Armorer => &[JobType::Blacksmith],
        Bakery => &[JobType::Baker],
        Brewery => &[JobType::Brewer],
        Weaver => &[JobType::Weaver],
        Tanner => &[JobType::Tanner],
        Dock => &[JobType::Fisher],
        Apothecary => &[JobType::Herbalist],
        HunterLodge => &[JobType::Hunter],
        Barracks => &[JobType::Soldier, JobType::Guard],
        Church => &[JobType::Priest],
        Market => &[JobType::Merchant],
        Tavern => &[JobType::Merchant],
        Warehouse => &[JobType::Merchant],
        Wall => &[JobType::Guard],
        GuildHall => &[JobType::Merchant, JobType::Scholar],
        CastleKeep => &[JobType::Noble, JobType::Guard],
        Stable => &[JobType::Shepherd],
        Smelter => &[JobType::Blacksmith],
    }
}

/// House count a settlement of this type starts with. Sized so
/// `6 * houseCount` (§4.9f's `populationCapacity` formula) clears the top of
/// the type's §4.13 target population range, with a one-house buffer for the
/// family-overshoot tolerance (§9).
fn house_count(kind: LocationKind) -> u32 {
    let (_, hi) = kind.population_range();
    match kind {
        LocationKind::Dungeon | LocationKind::Ruins | LocationKind::DragonLair | LocationKind::BanditCamp => 0,
        _ => (hi + 5) / 6 + 1,
    }
}

/// The non-house buildings a settlement of this type starts with (§4.9, §6).
fn specialty_buildings(kind: LocationKind) -> &'static [BuildingType] {
    use BuildingType::*;
    match kind {
        LocationKind::Homestead => &[FarmField],
        LocationKind::Hamlet => &[FarmField],
        LocationKind::Village => &[FarmField, Market],
        LocationKind::Town => &[Market, Tavern, Church, Wall],
        LocationKind::City => &[Market, Tavern, Church, Wall, GuildHall, Warehouse, Barracks],
        LocationKind::Farm => &[FarmField, FarmField],
        LocationKind::Mine => &[MineShaft],
        LocationKind::LumberCamp => &[Sawmill],
        LocationKind::FishingVillage => &[Dock],
        LocationKind::Port => &[Dock, Dock, Market, Warehouse],
        LocationKind::Castle => &[CastleKeep, Barracks, Wall],
        LocationKind::Dungeon
        | LocationKind::Ruins
        | LocationKind::DragonLair
        | LocationKind::BanditCamp => &[],
    }
}

/// The fixed building set a settlement of this type starts with (§4.9). The
/// settlement placer pushes these in order immediately after minting the
/// location so building indices are stable across a run: houses first, then
/// the type's specialty buildings.
pub fn starter_buildings(kind: LocationKind) -> Vec<BuildingType> {
    let mut buildings = vec![BuildingType::House; house_count(kind) as usize];
    buildings.extend_from_slice(specialty_buildings(kind));
    buildings
}
