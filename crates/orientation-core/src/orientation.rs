//! Display, preview and capture orientation for a camera sensor.
//!
//! Each function combines three inputs:
//! - the current screen rotation in degrees,
//! - the sensor's fixed mounting rotation relative to the device's natural
//!   orientation,
//! - whether the sensor output is mirrored (typically front cameras).
//!
//! # Sign conventions
//!
//! A mirrored sensor reflects the image, so the combined rotation is negated
//! rather than subtracted. Every result is a clockwise rotation in degrees.
//!
//! | Function                        | Screen input        | Result range |
//! |---------------------------------|---------------------|--------------|
//! | [`compute_display_orientation`] | rounded to 0/90/... | `[0, 360)`   |
//! | [`compute_preview_orientation`] | raw                 | `[0, 360)`   |
//! | [`compute_image_orientation`]   | raw or unknown      | `(0, 360]`   |

use crate::angle::{nearest_right_angle, wrap_degrees, FULL_TURN, ORIENTATION_UNKNOWN};

/// Rotation to apply to the live preview so it appears upright on screen.
///
/// The screen rotation is first snapped to the nearest right angle.
///
/// # Arguments
///
/// * `screen_rotation` - Rotation of the display in degrees
/// * `camera_rotation` - Mounting rotation of the sensor in degrees
/// * `mirrored` - `true` if the sensor output is horizontally flipped
///
/// # Returns
///
/// Display orientation in `[0, 360)`.
pub fn compute_display_orientation(
    screen_rotation: i32,
    camera_rotation: i32,
    mirrored: bool,
) -> i32 {
    let screen = i64::from(nearest_right_angle(screen_rotation));
    let camera = i64::from(camera_rotation);
    let full_turn = i64::from(FULL_TURN);

    if mirrored {
        let combined = wrap_degrees(camera + screen);
        wrap_degrees(full_turn - i64::from(combined))
    } else {
        wrap_degrees(camera - screen + full_turn)
    }
}

/// Clockwise rotation of preview frames relative to the current device
/// orientation.
///
/// Unlike [`compute_display_orientation`], the screen rotation is used as-is
/// so continuous sensor readings pass straight through.
///
/// # Returns
///
/// Preview orientation in `[0, 360)`.
pub fn compute_preview_orientation(
    screen_rotation: i32,
    camera_rotation: i32,
    mirrored: bool,
) -> i32 {
    let screen = i64::from(screen_rotation);
    let camera = i64::from(camera_rotation);

    let rotation = if mirrored {
        -(screen + camera)
    } else {
        screen - camera
    };

    wrap_degrees(rotation + 2 * i64::from(FULL_TURN))
}

/// Clockwise rotation to record for a captured still image.
///
/// Follows the capture-rotation convention of the platform camera stack:
/// the result is `360 - rotation` without a final reduction, so an unrotated
/// capture reports `360` rather than `0`.
///
/// When `screen_orientation` is [`ORIENTATION_UNKNOWN`] the other arguments
/// are ignored and `360 - screen_orientation` is returned unreduced, which
/// for the conventional sentinel is `361`.
///
/// # Returns
///
/// Image orientation in `(0, 360]`, or `361` for an unknown orientation.
pub fn compute_image_orientation(
    screen_orientation: i32,
    camera_rotation: i32,
    mirrored: bool,
) -> i32 {
    if screen_orientation == ORIENTATION_UNKNOWN {
        return FULL_TURN - screen_orientation;
    }

    let screen = i64::from(screen_orientation);
    let camera = i64::from(camera_rotation);

    let rotation = if mirrored {
        wrap_degrees(camera - screen + i64::from(FULL_TURN))
    } else {
        wrap_degrees(camera + screen)
    };

    FULL_TURN - rotation
}


// ============================================================================
// Property-Based Tests
// ============================================================================
