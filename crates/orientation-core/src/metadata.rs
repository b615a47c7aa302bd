//! EXIF orientation tags for captured images.
//!
//! [`compute_image_orientation`](crate::compute_image_orientation) produces a
//! clockwise rotation in degrees. Encoders that write EXIF metadata need the
//! equivalent `Orientation` tag value (1-8) instead.
//! See: https://exiftool.org/TagNames/EXIF.html

use exif::{Field, In, Tag, Value};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::angle::FULL_TURN;

/// Error types for orientation tag conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrientationError {
    /// The rotation is not a multiple of 90 degrees.
    #[error("Rotation of {0} degrees is not a right angle")]
    NotRightAngle(i32),

    /// The raw tag value is outside 1-8.
    #[error("Invalid EXIF orientation value: {0}")]
    InvalidTagValue(u32),

    /// The EXIF field is not an orientation field.
    #[error("Expected Orientation tag, found {0}")]
    UnexpectedTag(String),

    /// The EXIF field carries no integer value.
    #[error("Orientation field has no integer value")]
    MissingValue,
}

/// EXIF orientation values (1-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ExifOrientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl ExifOrientation {
    /// Map a clockwise capture rotation to its orientation tag.
    ///
    /// The rotation is reduced to a single turn first, so the `360` that
    /// [`compute_image_orientation`](crate::compute_image_orientation) reports
    /// for an unrotated capture maps to [`ExifOrientation::Normal`].
    ///
    /// # Errors
    ///
    /// Returns `OrientationError::NotRightAngle` for any rotation that is not
    /// a multiple of 90, including the `361` produced for an unknown screen
    /// orientation.
    pub fn from_clockwise_degrees(degrees: i32) -> Result<Self, OrientationError> {
        match degrees.rem_euclid(FULL_TURN) {
            0 => Ok(ExifOrientation::Normal),
            90 => Ok(ExifOrientation::Rotate90CW),
            180 => Ok(ExifOrientation::Rotate180),
            270 => Ok(ExifOrientation::Rotate270CW),
            _ => Err(OrientationError::NotRightAngle(degrees)),
        }
    }

    /// Clockwise rotation component of this orientation (0, 90, 180 or 270).
    pub fn clockwise_degrees(self) -> i32 {
        match self {
            ExifOrientation::Normal | ExifOrientation::FlipHorizontal => 0,
            ExifOrientation::Rotate90CW | ExifOrientation::Transverse => 90,
            ExifOrientation::Rotate180 | ExifOrientation::FlipVertical => 180,
            ExifOrientation::Rotate270CW | ExifOrientation::Transpose => 270,
        }
    }

    /// Returns true if this orientation includes a horizontal flip.
    #[inline]
    pub fn is_mirrored(self) -> bool {
        matches!(
            self,
            ExifOrientation::FlipHorizontal
                | ExifOrientation::FlipVertical
                | ExifOrientation::Transpose
                | ExifOrientation::Transverse
        )
    }

    /// Returns true if this orientation swaps width and height dimensions.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            ExifOrientation::Transpose
                | ExifOrientation::Rotate90CW
                | ExifOrientation::Transverse
                | ExifOrientation::Rotate270CW
        )
    }

    /// Same rotation with the horizontal flip toggled.
    pub fn mirrored(self) -> Self {
        match self {
            ExifOrientation::Normal => ExifOrientation::FlipHorizontal,
            ExifOrientation::FlipHorizontal => ExifOrientation::Normal,
            ExifOrientation::Rotate180 => ExifOrientation::FlipVertical,
            ExifOrientation::FlipVertical => ExifOrientation::Rotate180,
            ExifOrientation::Rotate90CW => ExifOrientation::Transverse,
            ExifOrientation::Transverse => ExifOrientation::Rotate90CW,
            ExifOrientation::Rotate270CW => ExifOrientation::Transpose,
            ExifOrientation::Transpose => ExifOrientation::Rotate270CW,
        }
    }

    /// Raw tag value (1-8).
    #[inline]
    pub fn tag_value(self) -> u8 {
        self as u8
    }

    /// Build the primary-IFD `Orientation` field for an EXIF writer.
    pub fn to_exif_field(self) -> Field {
        Field {
            tag: Tag::Orientation,
            ifd_num: In::PRIMARY,
            value: Value::Short(vec![u16::from(self.tag_value())]),
        }
    }

    /// Read the orientation from an EXIF `Orientation` field.
    pub fn from_exif_field(field: &Field) -> Result<Self, OrientationError> {
        if field.tag != Tag::Orientation {
            return Err(OrientationError::UnexpectedTag(field.tag.to_string()));
        }

        let value = field
            .value
            .get_uint(0)
            .ok_or(OrientationError::MissingValue)?;
        Self::try_from(value)
    }
}

impl TryFrom<u32> for ExifOrientation {
    type Error = OrientationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ExifOrientation::Normal),
            2 => Ok(ExifOrientation::FlipHorizontal),
            3 => Ok(ExifOrientation::Rotate180),
            4 => Ok(ExifOrientation::FlipVertical),
            5 => Ok(ExifOrientation::Transpose),
            6 => Ok(ExifOrientation::Rotate90CW),
            7 => Ok(ExifOrientation::Transverse),
            8 => Ok(ExifOrientation::Rotate270CW),
            _ => Err(OrientationError::InvalidTagValue(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_image_orientation, ORIENTATION_UNKNOWN};

    const ALL: [ExifOrientation; 8] = [
        ExifOrientation::Normal,
        ExifOrientation::FlipHorizontal,
        ExifOrientation::Rotate180,
        ExifOrientation::FlipVertical,
        ExifOrientation::Transpose,
        ExifOrientation::Rotate90CW,
        ExifOrientation::Transverse,
        ExifOrientation::Rotate270CW,
    ];

    #[test]
    fn test_from_right_angles() {
        assert_eq!(
            ExifOrientation::from_clockwise_degrees(0),
            Ok(ExifOrientation::Normal)
        );
        assert_eq!(
            ExifOrientation::from_clockwise_degrees(90),
            Ok(ExifOrientation::Rotate90CW)
        );
        assert_eq!(
            ExifOrientation::from_clockwise_degrees(180),
            Ok(ExifOrientation::Rotate180)
        );
        assert_eq!(
            ExifOrientation::from_clockwise_degrees(270),
            Ok(ExifOrientation::Rotate270CW)
        );
    }

    #[test]
    fn test_full_turn_is_normal() {
        assert_eq!(
            ExifOrientation::from_clockwise_degrees(360),
            Ok(ExifOrientation::Normal)
        );
        assert_eq!(
            ExifOrientation::from_clockwise_degrees(-90),
            Ok(ExifOrientation::Rotate270CW)
        );
    }

    #[test]
    fn test_unknown_capture_orientation_is_rejected() {
        let degrees = compute_image_orientation(ORIENTATION_UNKNOWN, 90, false);
        assert_eq!(
            ExifOrientation::from_clockwise_degrees(degrees),
            Err(OrientationError::NotRightAngle(361))
        );
    }

    #[test]
    fn test_unrotated_capture_is_normal() {
        let degrees = compute_image_orientation(0, 0, false);
        assert_eq!(degrees, 360);
        assert_eq!(
            ExifOrientation::from_clockwise_degrees(degrees),
            Ok(ExifOrientation::Normal)
        );
    }

    #[test]
    fn test_clockwise_degrees_matches_from() {
        for degrees in [0, 90, 180, 270] {
            let orientation = ExifOrientation::from_clockwise_degrees(degrees).unwrap();
            assert_eq!(orientation.clockwise_degrees(), degrees);
            assert!(!orientation.is_mirrored());
        }
    }

    #[test]
    fn test_mirrored_is_involution() {
        for orientation in ALL {
            let flipped = orientation.mirrored();
            assert_ne!(flipped.is_mirrored(), orientation.is_mirrored());
            assert_eq!(flipped.clockwise_degrees(), orientation.clockwise_degrees());
            assert_eq!(flipped.swaps_dimensions(), orientation.swaps_dimensions());
            assert_eq!(flipped.mirrored(), orientation);
        }
    }

    #[test]
    fn test_swaps_dimensions() {
        assert!(!ExifOrientation::Normal.swaps_dimensions());
        assert!(!ExifOrientation::Rotate180.swaps_dimensions());
        assert!(ExifOrientation::Rotate90CW.swaps_dimensions());
        assert!(ExifOrientation::Transpose.swaps_dimensions());
    }

    #[test]
    fn test_try_from_u32() {
        for orientation in ALL {
            let value = u32::from(orientation.tag_value());
            assert_eq!(ExifOrientation::try_from(value), Ok(orientation));
        }
        assert_eq!(
            ExifOrientation::try_from(0),
            Err(OrientationError::InvalidTagValue(0))
        );
        assert_eq!(
            ExifOrientation::try_from(9),
            Err(OrientationError::InvalidTagValue(9))
        );
    }

    #[test]
    fn test_exif_field() {
        let field = ExifOrientation::Rotate90CW.to_exif_field();
        assert_eq!(field.tag, Tag::Orientation);
        assert_eq!(field.ifd_num, In::PRIMARY);
        assert_eq!(field.value.get_uint(0), Some(6));
        assert_eq!(
            ExifOrientation::from_exif_field(&field),
            Ok(ExifOrientation::Rotate90CW)
        );
    }

    #[test]
    fn test_exif_field_wrong_tag() {
        let field = Field {
            tag: Tag::ImageWidth,
            ifd_num: In::PRIMARY,
            value: Value::Short(vec![6]),
        };
        assert!(matches!(
            ExifOrientation::from_exif_field(&field),
            Err(OrientationError::UnexpectedTag(_))
        ));
    }

    #[test]
    fn test_exif_field_missing_value() {
        let field = Field {
            tag: Tag::Orientation,
            ifd_num: In::PRIMARY,
            value: Value::Short(vec![]),
        };
        assert_eq!(
            ExifOrientation::from_exif_field(&field),
            Err(OrientationError::MissingValue)
        );
    }

    #[test]
    fn test_error_display() {
        let err = OrientationError::NotRightAngle(361);
        assert_eq!(err.to_string(), "Rotation of 361 degrees is not a right angle");

        let err = OrientationError::InvalidTagValue(12);
        assert_eq!(err.to_string(), "Invalid EXIF orientation value: 12");
    }
}
