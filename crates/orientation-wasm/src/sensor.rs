//! WASM-compatible wrapper for a camera sensor profile.
//!
//! JavaScript code usually learns a camera's mounting rotation and facing
//! once (from a device table or a capabilities query) and then asks for
//! orientations every time the screen rotates.

use crate::console::to_js_error;
use orientation_core::{CameraSensor, LensFacing};
use wasm_bindgen::prelude::*;

/// Parse a lens facing name as used by `MediaTrackSettings.facingMode`.
///
/// Accepts `"back"`/`"environment"`, `"front"`/`"user"` and `"external"`,
/// ignoring case.
pub(crate) fn parse_lens_facing(facing: &str) -> Option<LensFacing> {
    match facing.to_ascii_lowercase().as_str() {
        "back" | "environment" => Some(LensFacing::Back),
        "front" | "user" => Some(LensFacing::Front),
        "external" => Some(LensFacing::External),
        _ => None,
    }
}

/// A camera sensor profile for JavaScript.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const sensor = JsCameraSensor.forLens('user', 270);
/// const { display, preview, image } = sensor.orientations(screenAngle);
///
/// // Or from a stored profile
/// const stored = JsCameraSensor.fromObject({ rotationDegrees: 90, mirrored: false });
/// ```
#[wasm_bindgen]
pub struct JsCameraSensor {
    inner: CameraSensor,
}

#[wasm_bindgen]
impl JsCameraSensor {
    /// Create a sensor from its mounting rotation and mirror flag.
    #[wasm_bindgen(constructor)]
    pub fn new(rotation_degrees: i32, mirrored: bool) -> JsCameraSensor {
        JsCameraSensor {
            inner: CameraSensor::new(rotation_degrees, mirrored),
        }
    }

    /// Create a sensor whose mirroring follows the lens facing.
    ///
    /// # Errors
    /// Returns error if `facing` is not a known lens facing
    #[wasm_bindgen(js_name = forLens)]
    pub fn for_lens(facing: &str, rotation_degrees: i32) -> Result<JsCameraSensor, JsValue> {
        let facing = parse_lens_facing(facing)
            .ok_or_else(|| to_js_error(format!("Unknown lens facing: {}", facing)))?;

        Ok(JsCameraSensor {
            inner: CameraSensor::for_lens(facing, rotation_degrees),
        })
    }

    /// Create a sensor from a `{ rotationDegrees, mirrored }` object.
    ///
    /// # Errors
    /// Returns error if the object cannot be deserialized
    #[wasm_bindgen(js_name = fromObject)]
    pub fn from_object(value: JsValue) -> Result<JsCameraSensor, JsValue> {
        let inner: CameraSensor = serde_wasm_bindgen::from_value(value)
            .map_err(|e| to_js_error(format!("Invalid camera sensor: {}", e)))?;

        Ok(JsCameraSensor { inner })
    }

    /// Serialize back to a `{ rotationDegrees, mirrored }` object.
    #[wasm_bindgen(js_name = toObject)]
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(to_js_error)
    }

    /// Mounting rotation in degrees
    #[wasm_bindgen(getter, js_name = rotationDegrees)]
    pub fn rotation_degrees(&self) -> i32 {
        self.inner.rotation_degrees
    }

    /// Whether the sensor output is mirrored
    #[wasm_bindgen(getter)]
    pub fn mirrored(&self) -> bool {
        self.inner.mirrored
    }

    #[wasm_bindgen(js_name = displayOrientation)]
    pub fn display_orientation(&self, screen_rotation: i32) -> i32 {
        self.inner.display_orientation(screen_rotation)
    }

    #[wasm_bindgen(js_name = previewOrientation)]
    pub fn preview_orientation(&self, screen_rotation: i32) -> i32 {
        self.inner.preview_orientation(screen_rotation)
    }

    #[wasm_bindgen(js_name = imageOrientation)]
    pub fn image_orientation(&self, screen_orientation: i32) -> i32 {
        self.inner.image_orientation(screen_orientation)
    }

    /// All three orientations as a `{ display, preview, image }` object.
    pub fn orientations(&self, screen_rotation: i32) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.orientations(screen_rotation))
            .map_err(to_js_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lens_facing() {
        assert_eq!(parse_lens_facing("back"), Some(LensFacing::Back));
        assert_eq!(parse_lens_facing("environment"), Some(LensFacing::Back));
        assert_eq!(parse_lens_facing("User"), Some(LensFacing::Front));
        assert_eq!(parse_lens_facing("FRONT"), Some(LensFacing::Front));
        assert_eq!(parse_lens_facing("external"), Some(LensFacing::External));
        assert_eq!(parse_lens_facing("sideways"), None);
    }

    #[test]
    fn test_new_sensor() {
        let sensor = JsCameraSensor::new(90, false);
        assert_eq!(sensor.rotation_degrees(), 90);
        assert!(!sensor.mirrored());
        assert_eq!(sensor.display_orientation(0), 90);
        assert_eq!(sensor.preview_orientation(0), 270);
        assert_eq!(sensor.image_orientation(0), 270);
    }

    #[test]
    fn test_for_lens_front_is_mirrored() {
        let sensor = JsCameraSensor::for_lens("user", 270).ok().unwrap();
        assert!(sensor.mirrored());
        assert_eq!(sensor.display_orientation(90), 0);
        assert_eq!(sensor.image_orientation(90), 180);
    }
}
