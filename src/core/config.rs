//! Generation configuration.
//!
//! Only three values drive a generation run; everything else the pipeline
//! needs comes from the compiled-in catalogs under [`crate::catalog`].

use crate::core::error::{Result, WorldGenError};

/// Minimum supported map dimension in either axis.
pub const MIN_DIMENSION: i32 = 16;

/// Input configuration for a single generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub width: i32,
    pub height: i32,
    pub seed: i32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            seed: 0,
        }
    }
}

impl GenerationConfig {
    pub fn new(width: i32, height: i32, seed: i32) -> Self {
        Self { width, height, seed }
    }

    /// Validate dimensions. Called by [`crate::worldgen::generate_world`]
    /// before any layer runs; non-positive or too-small dimensions are a
    /// programmer error (§7), not a soft condition.
    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(WorldGenError::InvalidConfig(format!(
                "width and height must both be >= {MIN_DIMENSION} (got {}x{})",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GenerationConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_too_small_dimensions() {
        let cfg = GenerationConfig::new(4, 256, 1);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let cfg = GenerationConfig::new(-1, 256, 1);
        assert!(cfg.validate().is_err());
    }
}
