//! Orientation Core - Camera orientation arithmetic
//!
//! This crate computes the rotations needed to show and store a camera
//! sensor's image stream correctly, given the current screen rotation, the
//! sensor's mounting rotation and whether the sensor is mirrored.
//!
//! # Module Structure
//!
//! - `angle` - Right-angle rounding and the unknown-orientation sentinel
//! - `orientation` - Display, preview and capture orientation
//! - `sensor` - Typed per-camera profile built on the free functions
//! - `metadata` - Mapping capture rotations to EXIF orientation tags
//!
//! All functions are pure and operate on plain `i32` degrees, so they can be
//! called from any thread without coordination.

pub mod angle;
pub mod metadata;
pub mod orientation;
pub mod sensor;

pub use angle::{nearest_right_angle, FULL_TURN, ORIENTATION_UNKNOWN};
pub use metadata::{ExifOrientation, OrientationError};
pub use orientation::{
    compute_display_orientation, compute_image_orientation, compute_preview_orientation,
};
pub use sensor::{CameraSensor, LensFacing, OrientationSet};
