//! Camera Module
//!
//! First-person terrain camera. Window-system agnostic: it only deals with
//! camera state, input-driven updates and the resulting matrices.

pub mod controller;

pub use controller::{CameraController, CameraSettings, PITCH_LIMIT};
