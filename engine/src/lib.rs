//! Relief Engine Library
//!
//! Procedural mountain terrain with a first-person fly-over camera.
//! The terrain and camera core is platform agnostic; the render module is
//! the wgpu backend the `relief` binary drives through winit.
//!
//! # Modules
//!
//! - [`world`] - Height field generation, bilinear sampling and triangulation
//! - [`camera`] - Yaw/pitch camera that walks over the height field
//! - [`input`] - Held-key and pointer state fed by platform callbacks
//! - [`render`] - wgpu context, geometry provider and terrain pass
//! - [`scene`] - Per-frame orchestration of terrain, camera and input
//! - [`config`] - JSON-loadable viewer configuration
//!
//! # Example
//!
//! ```ignore
//! use relief_engine::{CameraSettings, TerrainParams, TerrainScene};
//! use relief_engine::input::KeyCode;
//!
//! let mut scene = TerrainScene::generate(&TerrainParams::default(), CameraSettings::default());
//! scene.handle_key(KeyCode::W, true);
//! scene.tick();
//! let view = scene.camera.view_transform();
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;
pub mod scene;
pub mod world;

pub use camera::{CameraController, CameraSettings};
pub use config::{ViewerConfig, WindowConfig};
pub use error::{ConfigError, ViewerError};
pub use input::{InputState, KeyCode};
pub use scene::{KeyResponse, TerrainScene};
pub use world::{HeightField, TerrainParams, build_indices};
