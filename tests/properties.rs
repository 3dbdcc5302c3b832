//! Property tests (§8): symmetric-relationship and settlement-spacing
//! invariants checked across a spread of seeds rather than one fixed case.

use proptest::prelude::*;
use realmforge::{generate_world, GenerationConfig};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn every_relationship_has_its_reciprocal(seed in 1i32..10_000) {
        let config = GenerationConfig::new(48, 48, seed);
        let world = generate_world(&config, None).unwrap();

        for character in world.characters.values() {
            for relationship in &character.relationships {
                let Some(other) = world.characters.get(&relationship.target_id) else {
                    continue;
                };
                let expected_kind = relationship.kind.reciprocal();
                prop_assert!(
                    other.relationships.iter().any(|r| r.target_id == character.id && r.kind == expected_kind),
                    "{} has a {:?} relationship to {} with no matching {:?} back",
                    character.id, relationship.kind, relationship.target_id, expected_kind
                );
            }
        }
    }

    #[test]
    fn settlements_never_violate_minimum_spacing(seed in 1i32..10_000) {
        let config = GenerationConfig::new(64, 64, seed);
        let world = generate_world(&config, None).unwrap();

        let positions: Vec<_> = world.locations.values().map(|l| l.position).collect();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                prop_assert!(positions[i].euclidean_distance(&positions[j]) >= 6.0);
            }
        }
    }
}
