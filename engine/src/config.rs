//! Viewer Configuration
//!
//! Single source of truth for terrain generation, camera tuning and window
//! setup. Every field has a default, so a config file only needs to name the
//! values it changes:
//!
//! ```json
//! { "terrain": { "mountain_count": 12, "seed": 1234 }, "window": { "fullscreen": false } }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::camera::CameraSettings;
use crate::error::ConfigError;
use crate::world::{INDICES_PER_CELL, TerrainParams};

/// Largest accepted mountain radius, in cells
pub const MAX_MOUNTAIN_RADIUS: i32 = 1024;

/// Window and presentation settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Windowed size in physical pixels (ignored when fullscreen)
    pub width: u32,
    pub height: u32,
    /// Borderless fullscreen on the current monitor
    pub fullscreen: bool,
    /// Cap presentation to the display refresh rate
    pub vsync: bool,
    /// Background color (linear RGB)
    pub clear_color: [f64; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Relief".to_string(),
            width: 1920,
            height: 1080,
            fullscreen: true,
            vsync: true,
            clear_color: [0.1, 0.1, 0.1],
        }
    }
}

/// Top-level viewer configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub terrain: TerrainParams,
    pub camera: CameraSettings,
    pub window: WindowConfig,
}

impl ViewerConfig {
    /// Parse and validate a JSON config string.
    pub fn from_json(source: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source, path)
    }

    /// Reject terrain the generator or the 32-bit index buffer cannot handle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let TerrainParams {
            width,
            height,
            mountain_radius,
            ..
        } = self.terrain;
        if width < 2 || height < 2 {
            return Err(ConfigError::TerrainTooSmall { width, height });
        }

        let vertices = width.checked_mul(height);
        let indices = (width - 1)
            .checked_mul(height - 1)
            .and_then(|cells| cells.checked_mul(INDICES_PER_CELL));
        let fits_u32 = |n: Option<usize>| n.is_some_and(|n| u32::try_from(n).is_ok());
        if !fits_u32(vertices) || !fits_u32(indices) {
            return Err(ConfigError::TerrainTooLarge { width, height });
        }

        if !(0..=MAX_MOUNTAIN_RADIUS).contains(&mountain_radius) {
            return Err(ConfigError::MountainRadius {
                radius: mountain_radius,
                max: MAX_MOUNTAIN_RADIUS,
            });
        }
        Ok(())
    }
}
