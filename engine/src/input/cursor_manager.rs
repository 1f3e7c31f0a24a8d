//! Cursor Manager Module
//!
//! Keeps the pointer hidden and grabbed while the viewer window has focus,
//! and releases it when focus moves elsewhere.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut cursor = CursorManager::new();
//!
//! // Focus events from the platform
//! if cursor.handle_focus_changed(focused) == CursorAction::ApplyState {
//!     cursor.apply_to_window(&window);
//! }
//! ```

use winit::window::{CursorGrabMode, Window};

/// Actions that the CursorManager recommends after handling events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    /// No action needed
    None,
    /// Apply cursor state to window (call apply_to_window)
    ApplyState,
}

/// Tracks whether the pointer should currently be captured.
#[derive(Debug, Clone)]
pub struct CursorManager {
    /// Whether the window currently has focus
    has_focus: bool,
    /// Tracks if state changed and needs to be applied to window
    state_dirty: bool,
}

impl Default for CursorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorManager {
    /// Starts focused and dirty, so the first apply hides the cursor.
    pub fn new() -> Self {
        Self {
            has_focus: true,
            state_dirty: true,
        }
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn is_dirty(&self) -> bool {
        self.state_dirty
    }

    /// Handle a focus change from the platform.
    pub fn handle_focus_changed(&mut self, focused: bool) -> CursorAction {
        if self.has_focus == focused {
            return CursorAction::None;
        }
        self.has_focus = focused;
        self.state_dirty = true;
        CursorAction::ApplyState
    }

    /// The cursor is captured only while the window has focus.
    pub fn should_cursor_be_grabbed(&self) -> bool {
        self.has_focus
    }

    /// Push the desired grab/visibility state to the window.
    ///
    /// Locked mode is preferred; platforms without it fall back to confined.
    pub fn apply_to_window(&mut self, window: &Window) {
        if self.should_cursor_be_grabbed() {
            if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
                if let Err(err) = window.set_cursor_grab(CursorGrabMode::Confined) {
                    tracing::warn!("cursor grab unavailable: {err}");
                }
            }
            window.set_cursor_visible(false);
        } else {
            if let Err(err) = window.set_cursor_grab(CursorGrabMode::None) {
                tracing::debug!("cursor release failed: {err}");
            }
            window.set_cursor_visible(true);
        }
        self.state_dirty = false;
    }
}
