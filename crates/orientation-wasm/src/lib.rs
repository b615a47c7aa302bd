//! Orientation WASM - WebAssembly bindings for camera orientation
//!
//! This crate provides WASM bindings to expose the orientation-core
//! functionality to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `orientation` - Display, preview and capture orientation functions
//! - `sensor` - `JsCameraSensor` wrapper for a per-camera profile
//!
//! # Usage
//!
//! ```typescript
//! import init, { compute_display_orientation, JsCameraSensor } from '@camera-orientation/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const sensor = JsCameraSensor.forLens('environment', 90);
//! const degrees = sensor.displayOrientation(screen.orientation.angle);
//! ```

use wasm_bindgen::prelude::*;

mod console;
mod orientation;
mod sensor;

// Re-export public types
pub use orientation::{
    compute_display_orientation, compute_image_orientation, compute_preview_orientation,
    exif_orientation_for_rotation, nearest_right_angle, orientation_unknown,
};
pub use sensor::JsCameraSensor;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
