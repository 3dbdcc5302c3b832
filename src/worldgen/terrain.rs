//! Terrain classification (§4.4): ordered elevation thresholds, first match.

use crate::world::TerrainType;

const THRESHOLDS: [(f64, TerrainType); 7] = [
    (0.22, TerrainType::DeepOcean),
    (0.30, TerrainType::ShallowOcean),
    (0.33, TerrainType::Coast),
    (0.50, TerrainType::Lowland),
    (0.65, TerrainType::Highland),
    (0.82, TerrainType::Mountain),
    (1.00, TerrainType::Peak),
];

/// Classify one elevation value by the first threshold it falls under.
pub fn classify(elevation: f64) -> TerrainType {
    for (threshold, terrain) in THRESHOLDS {
        if elevation <= threshold {
            return terrain;
        }
    }
    TerrainType::Peak
}

pub fn build(elevation: &[f64]) -> Vec<TerrainType> {
    elevation.iter().map(|&e| classify(e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_match_spec_table() {
        assert_eq!(classify(0.0), TerrainType::DeepOcean);
        assert_eq!(classify(0.22), TerrainType::DeepOcean);
        assert_eq!(classify(0.25), TerrainType::ShallowOcean);
        assert_eq!(classify(0.33), TerrainType::Coast);
        assert_eq!(classify(0.45), TerrainType::Lowland);
        assert_eq!(classify(0.60), TerrainType::Highland);
        assert_eq!(classify(0.80), TerrainType::Mountain);
        assert_eq!(classify(0.95), TerrainType::Peak);
        assert_eq!(classify(1.0), TerrainType::Peak);
    }

    #[test]
    fn first_match_wins_at_exact_boundary() {
        assert_eq!(classify(0.30), TerrainType::ShallowOcean);
        assert_eq!(classify(0.50), TerrainType::Lowland);
    }
}
