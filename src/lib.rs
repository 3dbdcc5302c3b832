//! Realmforge - deterministic procedural world generator
//!
//! Given a width, height, and seed, [`worldgen::generate_world`] produces a
//! complete, self-consistent [`world::World`]: a terrain grid plus a graph
//! of derived settlements, roads, piers, families, wildlife, and a feudal
//! political layer. Identical inputs always produce byte-identical output.

pub mod catalog;
pub mod core;
pub mod noise;
pub mod rng;
pub mod world;
pub mod worldgen;

pub use core::config::GenerationConfig;
pub use core::error::{Result, WorldGenError};
pub use world::World;
pub use worldgen::generate_world;
