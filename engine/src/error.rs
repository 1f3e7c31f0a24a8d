//! Error types for the viewer's platform layer.
//!
//! Every variant is fatal: the binary reports it and exits non-zero. The
//! terrain and camera core has no error surface of its own.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("windowing subsystem unavailable: {0}")]
    PlatformInit(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    WindowCreation(#[from] winit::error::OsError),

    #[error("failed to create render surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("GPU out of memory")]
    OutOfMemory,

    #[error("terrain mesh of {indices} indices exceeds the 32-bit index range")]
    MeshTooLarge { indices: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("terrain must be at least 2x2 cells, got {width}x{height}")]
    TerrainTooSmall { width: usize, height: usize },

    #[error("terrain of {width}x{height} cells does not fit 32-bit mesh indices")]
    TerrainTooLarge { width: usize, height: usize },

    #[error("mountain radius must be within 0..={max}, got {radius}")]
    MountainRadius { radius: i32, max: i32 },
}
