use glam::Quat;

use hexworld_common::HexDirection;

/// Re-express a requested direction relative to the camera's facing.
///
/// The direction's `(dq, 0, dr)` vector is rotated by the camera orientation
/// and snapped back to the nearest of the six hex directions, so "up" on the
/// keyboard keeps meaning "away from the camera" as the camera orbits.
pub fn camera_relative(direction: HexDirection, camera_rotation: Quat) -> HexDirection {
    let rotated = camera_rotation * direction.vector();
    let snapped = HexDirection::snap(rotated);
    if snapped != direction {
        tracing::trace!(%direction, %snapped, "direction adjusted for camera");
    }
    snapped
}
