//! Pointer Tracker
//!
//! Turns absolute pointer coordinates into look deltas. The first sample only
//! records the position, so the camera does not jump to wherever the cursor
//! happened to be when the session started.
//!
//! With the cursor grabbed, the platform reports raw motion instead of
//! positions; [`PointerTracker::accumulate_motion`] integrates it into an
//! unbounded virtual pointer and feeds that through the same path.

/// Pointer state with first-sample suppression.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    /// Last observed pointer position
    last: (f32, f32),
    /// Virtual pointer driven by raw motion
    virtual_position: (f32, f32),
    /// Set until the first sample has been consumed
    first_sample: bool,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            last: (0.0, 0.0),
            virtual_position: (0.0, 0.0),
            first_sample: true,
        }
    }

    /// Record a pointer position.
    ///
    /// Returns `None` for the first sample, otherwise `(last_x - x, last_y - y)`.
    /// The inverted sign gives natural mouse-look when added to yaw/pitch.
    pub fn record(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        if self.first_sample {
            self.first_sample = false;
            self.last = (x, y);
            return None;
        }

        let delta = (self.last.0 - x, self.last.1 - y);
        self.last = (x, y);
        Some(delta)
    }

    /// Advance the virtual pointer by raw motion and record its new position.
    pub fn accumulate_motion(&mut self, dx: f32, dy: f32) -> Option<(f32, f32)> {
        self.virtual_position.0 += dx;
        self.virtual_position.1 += dy;
        let (x, y) = self.virtual_position;
        self.record(x, y)
    }

    /// Last recorded pointer position.
    #[inline]
    pub fn last_position(&self) -> (f32, f32) {
        self.last
    }

    /// Whether the next sample will be swallowed.
    #[inline]
    pub fn awaiting_first_sample(&self) -> bool {
        self.first_sample
    }

    /// Re-arm first-sample suppression.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
