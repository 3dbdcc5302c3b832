//! Compiled-in reference data: biome parameters, resource and creature
//! definitions, and name tables.
//!
//! §6 calls these "external tables consumed" and treats them as read-only
//! input loaded before generation; since the crate performs no I/O, they
//! are simply static tables rather than data read from disk at runtime.

pub mod biomes;
pub mod buildings;
pub mod creatures;
pub mod jobs;
pub mod names;
pub mod resources;
