//! Keyboard Input Module
//!
//! Tracks the held state of the rotation (arrow) and movement (WASD) keys.
//! Decoupled from winit to use generic key codes; [`KeyCode::from_winit`]
//! performs the translation at the platform boundary.

/// Generic key codes recognized by the viewer, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Control keys
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Translate a winit physical key code.
    pub fn from_winit(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as Winit;

        match key {
            Winit::KeyW => KeyCode::W,
            Winit::KeyA => KeyCode::A,
            Winit::KeyS => KeyCode::S,
            Winit::KeyD => KeyCode::D,
            Winit::ArrowUp => KeyCode::ArrowUp,
            Winit::ArrowDown => KeyCode::ArrowDown,
            Winit::ArrowLeft => KeyCode::ArrowLeft,
            Winit::ArrowRight => KeyCode::ArrowRight,
            Winit::Escape => KeyCode::Escape,
            _ => KeyCode::Unknown,
        }
    }
}

/// Held arrow keys, which turn the camera a fixed step per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotationKeys {
    /// Left arrow - turn left (yaw up)
    pub left: bool,
    /// Right arrow - turn right (yaw down)
    pub right: bool,
    /// Up arrow - pitch down
    pub up: bool,
    /// Down arrow - pitch up
    pub down: bool,
}

impl RotationKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update rotation state based on key press/release.
    ///
    /// Returns `true` if the key was an arrow key and was handled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::ArrowLeft => self.left = pressed,
            KeyCode::ArrowRight => self.right = pressed,
            KeyCode::ArrowUp => self.up = pressed,
            KeyCode::ArrowDown => self.down = pressed,
            _ => return false,
        }
        true
    }

    pub fn any_pressed(&self) -> bool {
        self.left || self.right || self.up || self.down
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Held WASD keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// W key - move forward
    pub forward: bool,
    /// S key - move backward
    pub backward: bool,
    /// A key - strafe left
    pub left: bool,
    /// D key - strafe right
    pub right: bool,
}

impl MovementKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => self.forward = pressed,
            KeyCode::S => self.backward = pressed,
            KeyCode::A => self.left = pressed,
            KeyCode::D => self.right = pressed,
            _ => return false,
        }
        true
    }

    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_default() {
        let keys = MovementKeys::new();
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_movement_keys_press_release() {
        let mut keys = MovementKeys::new();
        assert!(keys.handle_key(KeyCode::W, true));
        assert!(keys.forward);
        assert!(keys.any_pressed());

        assert!(keys.handle_key(KeyCode::W, false));
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_arrows_are_not_movement() {
        let mut keys = MovementKeys::new();
        assert!(!keys.handle_key(KeyCode::ArrowUp, true));
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_rotation_keys() {
        let mut keys = RotationKeys::new();
        assert!(keys.handle_key(KeyCode::ArrowLeft, true));
        assert!(keys.handle_key(KeyCode::ArrowDown, true));
        assert!(keys.left && keys.down);
        assert!(!keys.right && !keys.up);

        keys.reset();
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_escape_is_not_held_state() {
        let mut keys = RotationKeys::new();
        assert!(!keys.handle_key(KeyCode::Escape, true));
    }

    #[test]
    fn test_from_winit() {
        use winit::keyboard::KeyCode as Winit;
        assert_eq!(KeyCode::from_winit(Winit::KeyW), KeyCode::W);
        assert_eq!(KeyCode::from_winit(Winit::ArrowRight), KeyCode::ArrowRight);
        assert_eq!(KeyCode::from_winit(Winit::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from_winit(Winit::Space), KeyCode::Unknown);
    }
}
