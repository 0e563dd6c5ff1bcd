//! Input mapping: key bindings and camera-relative directions turned into
//! abstract movement actions.
//!
//! # Invariants
//! - The agent consumes actions, never raw input events.
//! - Unknown input is reported to the caller and never fatal.

pub mod action;
pub mod camera;

pub use action::{Action, InputError, KeyBindings, parse_direction, parse_path};
pub use camera::camera_relative;

pub fn crate_info() -> &'static str {
    "hexworld-input v0.1.0"
}
