//! Render Module
//!
//! wgpu backend for the viewer: GPU context, the geometry-provider boundary
//! and the terrain pass.

pub mod geometry;
pub mod gpu_context;
pub mod terrain_pass;

pub use geometry::{GeometryProvider, TerrainGeometry, TerrainVertex};
pub use gpu_context::{DEPTH_FORMAT, GpuContext, GpuContextConfig, SurfaceRecovery};
pub use terrain_pass::{TERRAIN_SHADER, TerrainRenderPass, TerrainUniforms, checked_index_count};
