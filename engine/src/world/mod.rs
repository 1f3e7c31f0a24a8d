//! World Module
//!
//! Terrain data: the generated height field and its static triangulation.
//!
//! ## Coordinates
//! World X/Y are the grid axes (one unit per cell) and Z is up. The map spans
//! `[0, width) x [0, height)`; anything outside is off the map.

pub mod height_field;
pub mod mesh_indexer;

pub use height_field::{Cell, CellColor, HeightField, TerrainParams};
pub use mesh_indexer::{INDICES_PER_CELL, build_indices};
