//! WASM bindings for orientation arithmetic.
//!
//! Thin wrappers over `orientation_core` so the preview and capture pipelines
//! in JavaScript share the same degree conventions as native callers.

use crate::console::to_js_error;
use orientation_core::{
    compute_display_orientation as core_display, compute_image_orientation as core_image,
    compute_preview_orientation as core_preview, nearest_right_angle as core_nearest,
    ExifOrientation, ORIENTATION_UNKNOWN,
};
use wasm_bindgen::prelude::*;

/// Round an angle to the closest of 0, 90, 180 or 270 (ties round down).
#[wasm_bindgen]
pub fn nearest_right_angle(degrees: i32) -> i32 {
    core_nearest(degrees)
}

/// Sentinel screen orientation meaning "could not be determined" (-1).
#[wasm_bindgen]
pub fn orientation_unknown() -> i32 {
    ORIENTATION_UNKNOWN
}

/// Rotation to apply to the live preview surface, in `[0, 360)`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const degrees = compute_display_orientation(screen.orientation.angle, 90, false);
/// video.style.transform = `rotate(${degrees}deg)`;
/// ```
#[wasm_bindgen]
pub fn compute_display_orientation(
    screen_rotation: i32,
    camera_rotation: i32,
    mirrored: bool,
) -> i32 {
    core_display(screen_rotation, camera_rotation, mirrored)
}

/// Clockwise rotation of preview frames, in `[0, 360)`.
#[wasm_bindgen]
pub fn compute_preview_orientation(
    screen_rotation: i32,
    camera_rotation: i32,
    mirrored: bool,
) -> i32 {
    core_preview(screen_rotation, camera_rotation, mirrored)
}

/// Clockwise rotation for a captured still, in `(0, 360]`.
///
/// Returns 361 when `screen_orientation` is the unknown sentinel.
#[wasm_bindgen]
pub fn compute_image_orientation(
    screen_orientation: i32,
    camera_rotation: i32,
    mirrored: bool,
) -> i32 {
    core_image(screen_orientation, camera_rotation, mirrored)
}

/// Convert a capture rotation into an EXIF orientation tag value (1-8).
///
/// # Errors
///
/// Returns an `Error` if the rotation is not a multiple of 90 degrees.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const degrees = compute_image_orientation(screenAngle, 90, false);
/// const tag = exif_orientation_for_rotation(degrees); // 1, 3, 6 or 8
/// ```
#[wasm_bindgen]
pub fn exif_orientation_for_rotation(degrees: i32) -> Result<u8, JsValue> {
    ExifOrientation::from_clockwise_degrees(degrees)
        .map(ExifOrientation::tag_value)
        .map_err(to_js_error)
}
