//! Per-camera sensor profile.
//!
//! A sensor's mounting rotation and mirroring never change at runtime, so
//! callers typically build one [`CameraSensor`] per camera and feed it the
//! current screen rotation as it changes.

use serde::{Deserialize, Serialize};

use crate::orientation::{
    compute_display_orientation, compute_image_orientation, compute_preview_orientation,
};

/// Direction a camera lens faces relative to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LensFacing {
    /// Facing away from the user.
    #[default]
    Back,
    /// Facing the user (selfie camera).
    Front,
    /// Attached externally; direction unknown.
    External,
}

impl LensFacing {
    /// Front cameras are mirrored by convention; everything else is not.
    #[inline]
    pub fn is_mirrored_by_default(self) -> bool {
        matches!(self, LensFacing::Front)
    }
}

/// Fixed mounting parameters of a camera sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSensor {
    /// Rotation of the sensor relative to the device's natural orientation
    /// (typically 0, 90, 180 or 270).
    pub rotation_degrees: i32,
    /// Whether the sensor output is horizontally flipped.
    #[serde(default)]
    pub mirrored: bool,
}

/// All three orientations for one screen rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationSet {
    /// Rotation for the live preview surface.
    pub display: i32,
    /// Clockwise rotation of preview frames.
    pub preview: i32,
    /// Clockwise rotation to record for captured stills.
    pub image: i32,
}

impl CameraSensor {
    pub fn new(rotation_degrees: i32, mirrored: bool) -> Self {
        Self {
            rotation_degrees,
            mirrored,
        }
    }

    /// Create a sensor whose mirroring follows the lens convention.
    pub fn for_lens(facing: LensFacing, rotation_degrees: i32) -> Self {
        Self::new(rotation_degrees, facing.is_mirrored_by_default())
    }

    /// See [`compute_display_orientation`].
    pub fn display_orientation(&self, screen_rotation: i32) -> i32 {
        compute_display_orientation(screen_rotation, self.rotation_degrees, self.mirrored)
    }

    /// See [`compute_preview_orientation`].
    pub fn preview_orientation(&self, screen_rotation: i32) -> i32 {
        compute_preview_orientation(screen_rotation, self.rotation_degrees, self.mirrored)
    }

    /// See [`compute_image_orientation`].
    pub fn image_orientation(&self, screen_orientation: i32) -> i32 {
        compute_image_orientation(screen_orientation, self.rotation_degrees, self.mirrored)
    }

    pub fn orientations(&self, screen_rotation: i32) -> OrientationSet {
        OrientationSet {
            display: self.display_orientation(screen_rotation),
            preview: self.preview_orientation(screen_rotation),
            image: self.image_orientation(screen_rotation),
        }
    }
}
