//! Terrain Scene
//!
//! Everything the frame loop mutates, without any GPU state: the generated
//! terrain, the camera and the input record. The binary forwards platform
//! events here and calls [`TerrainScene::tick`] once per frame.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::camera::{CameraController, CameraSettings};
use crate::input::{InputState, KeyCode};
use crate::render::TerrainGeometry;
use crate::world::{HeightField, TerrainParams};

/// What the platform layer should do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// Key was consumed (or ignored)
    Continue,
    /// Close the window and exit normally
    Exit,
}

pub struct TerrainScene {
    pub terrain: HeightField,
    pub camera: CameraController,
    pub input: InputState,
}

impl TerrainScene {
    /// Generate terrain (seeded if the params carry a seed) and place the camera.
    pub fn generate(params: &TerrainParams, settings: CameraSettings) -> Self {
        let terrain = match params.seed {
            Some(seed) => {
                tracing::info!(seed, "generating seeded terrain");
                HeightField::generate(&mut ChaCha8Rng::seed_from_u64(seed), params)
            }
            None => HeightField::generate(&mut rand::thread_rng(), params),
        };

        if let Some((low, high)) = terrain.elevation_range() {
            tracing::info!(
                width = terrain.width(),
                height = terrain.height(),
                mountains = params.mountain_count,
                low,
                high,
                "terrain generated"
            );
        }

        Self::with_terrain(terrain, settings)
    }

    pub fn with_terrain(terrain: HeightField, settings: CameraSettings) -> Self {
        Self {
            terrain,
            camera: CameraController::new(settings),
            input: InputState::new(),
        }
    }

    /// Geometry view for the renderer.
    pub fn geometry(&self) -> TerrainGeometry<'_> {
        TerrainGeometry::new(&self.terrain)
    }

    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> KeyResponse {
        if key == KeyCode::Escape && pressed {
            return KeyResponse::Exit;
        }
        self.input.set_key_held(key, pressed);
        KeyResponse::Continue
    }

    /// Raw pointer motion from a grabbed cursor.
    pub fn handle_pointer_motion(&mut self, dx: f32, dy: f32) {
        if let Some((dx, dy)) = self.input.record_motion(dx, dy) {
            self.camera.apply_mouse_delta(dx, dy);
        }
    }

    /// Drop held keys when the window loses focus; key-up events go elsewhere.
    pub fn handle_focus_lost(&mut self) {
        self.input.reset();
    }

    /// One frame: arrow-key rotation, then movement over the terrain.
    pub fn tick(&mut self) {
        self.camera.apply_rotation_keys(&self.input.rotation);
        self.camera.movement_tick(&self.input.movement, &self.terrain);
    }
}
