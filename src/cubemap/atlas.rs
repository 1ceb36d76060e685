//! Composition of six faces into the 3x2 atlas

use image::{RgbImage, imageops};

use crate::cubemap::extract::{FaceImages, validate_face_size};
use crate::geometry::FaceId;
use crate::geometry::layout::{ATLAS_COLUMNS, ATLAS_LAYOUT, ATLAS_ROWS};
use crate::io::error::{Result, SkyboxError, invalid_parameter};

/// Paste a complete face set into a new `3 * face_size` by `2 * face_size` atlas
///
/// Faces are copied opaquely onto an RGB canvas; any alpha channel is dropped.
/// The input faces are left untouched.
///
/// # Errors
///
/// Returns an error if:
/// - `face_size` is zero or exceeds `MAX_FACE_SIZE`
/// - Any of the six faces is missing (`IncompleteFaceSet`)
/// - A face is not exactly `face_size x face_size`
pub fn assemble_atlas(faces: &FaceImages, face_size: u32) -> Result<RgbImage> {
    validate_face_size(face_size)?;

    let missing: Vec<FaceId> = FaceId::ALL
        .into_iter()
        .filter(|face| !faces.contains_key(face))
        .collect();
    if !missing.is_empty() {
        return Err(SkyboxError::IncompleteFaceSet { missing });
    }

    for (face, image) in faces {
        let (width, height) = (image.width(), image.height());
        if (width, height) != (face_size, face_size) {
            return Err(invalid_parameter(
                "face",
                &format!("{face} {width}x{height}"),
                &format!("every face must be {face_size}x{face_size}"),
            ));
        }
    }

    let mut atlas = RgbImage::new(ATLAS_COLUMNS * face_size, ATLAS_ROWS * face_size);

    for (face, cell) in ATLAS_LAYOUT {
        if let Some(image) = faces.get(&face) {
            let (x, y) = cell.pixel_offset(face_size);
            imageops::replace(&mut atlas, &image.to_rgb8(), i64::from(x), i64::from(y));
        }
    }

    Ok(atlas)
}
