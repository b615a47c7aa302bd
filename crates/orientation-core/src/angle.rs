//! Degree arithmetic shared by the orientation computations.
//!
//! All angles are plain `i32` degrees. Intermediate sums are widened to `i64`
//! so that no input, however large, can overflow before it is reduced back
//! into a single turn.

/// Reserved screen orientation meaning "orientation could not be determined".
///
/// Matches the value orientation sensors report when the device is lying flat
/// or the reading is unreliable.
pub const ORIENTATION_UNKNOWN: i32 = -1;

/// Degrees in a full turn.
pub const FULL_TURN: i32 = 360;

const RIGHT_ANGLE: i64 = 90;

/// Remainders strictly above this value round up to the next right angle.
const ROUND_UP_THRESHOLD: i64 = 45;

/// Reduce a widened angle into `[0, 360)`.
#[inline]
pub(crate) fn wrap_degrees(degrees: i64) -> i32 {
    // rem_euclid(360) is always in [0, 360), so the narrowing cast is lossless.
    degrees.rem_euclid(i64::from(FULL_TURN)) as i32
}

/// Round an angle to the closest right angle: 0, 90, 180 or 270.
///
/// The remainder against 90 uses truncating division, so a remainder of
/// exactly 45 rounds down (45 -> 0, 135 -> 90) and negative inputs round
/// toward zero before being folded back into a single turn.
///
/// # Example
///
/// ```ignore
/// use orientation_core::nearest_right_angle;
///
/// assert_eq!(nearest_right_angle(44), 0);
/// assert_eq!(nearest_right_angle(46), 90);
/// assert_eq!(nearest_right_angle(359), 0);
/// ```
pub fn nearest_right_angle(degrees: i32) -> i32 {
    let degrees = i64::from(degrees);
    let round_up = degrees % RIGHT_ANGLE > ROUND_UP_THRESHOLD;
    let quarter_turns = degrees / RIGHT_ANGLE + i64::from(round_up);

    wrap_degrees(quarter_turns * RIGHT_ANGLE)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
