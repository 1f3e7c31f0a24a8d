//! Input Module
//!
//! Records which directional keys are held and where the pointer was last
//! seen. Platform callbacks mutate an [`InputState`]; the frame update reads
//! it once per tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use relief_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//! input.set_key_held(KeyCode::W, true);
//! if let Some((dx, dy)) = input.record_pointer(320.0, 200.0) {
//!     camera.apply_mouse_delta(dx, dy);
//! }
//! ```

pub mod cursor_manager;
pub mod keyboard;
pub mod mouse_state;

pub use cursor_manager::{CursorAction, CursorManager};
pub use keyboard::{KeyCode, MovementKeys, RotationKeys};
pub use mouse_state::PointerTracker;

/// Combined keyboard and pointer state.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub rotation: RotationKeys,
    pub movement: MovementKeys,
    pub pointer: PointerTracker,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key held or released.
    ///
    /// Returns `true` if the key is one of the tracked directional keys.
    pub fn set_key_held(&mut self, key: KeyCode, held: bool) -> bool {
        self.rotation.handle_key(key, held) || self.movement.handle_key(key, held)
    }

    /// Record an absolute pointer position; `None` on the first sample.
    pub fn record_pointer(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        self.pointer.record(x, y)
    }

    /// Record raw pointer motion (grabbed cursor); `None` on the first sample.
    pub fn record_motion(&mut self, dx: f32, dy: f32) -> Option<(f32, f32)> {
        self.pointer.accumulate_motion(dx, dy)
    }

    /// Release every key and re-arm first-sample suppression.
    pub fn reset(&mut self) {
        self.rotation.reset();
        self.movement.reset();
        self.pointer.reset();
    }

    pub fn is_moving(&self) -> bool {
        self.movement.any_pressed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_default() {
        let input = InputState::new();
        assert!(!input.is_moving());
        assert!(!input.rotation.any_pressed());
        assert!(input.pointer.awaiting_first_sample());
    }

    #[test]
    fn test_set_key_held_routes_keys() {
        let mut input = InputState::new();
        assert!(input.set_key_held(KeyCode::ArrowLeft, true));
        assert!(input.set_key_held(KeyCode::D, true));
        assert!(!input.set_key_held(KeyCode::Escape, true));

        assert!(input.rotation.left);
        assert!(input.movement.right);
        assert!(input.is_moving());
    }

    #[test]
    fn test_reset_releases_everything() {
        let mut input = InputState::new();
        input.set_key_held(KeyCode::W, true);
        input.set_key_held(KeyCode::ArrowUp, true);
        input.record_pointer(10.0, 10.0);

        input.reset();
        assert!(!input.is_moving());
        assert!(!input.rotation.any_pressed());
        assert_eq!(input.record_pointer(99.0, 99.0), None);
    }
}
