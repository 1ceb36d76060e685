//! Cropping cube faces out of a cross-layout source and resampling them

use std::collections::BTreeMap;

use image::DynamicImage;
use image::imageops::FilterType;

use crate::geometry::{CropRect, CrossGeometry, FaceId};
use crate::io::configuration::MAX_FACE_SIZE;
use crate::io::error::{Result, invalid_geometry, invalid_parameter};

/// Square face images keyed by face
pub type FaceImages = BTreeMap<FaceId, DynamicImage>;

// Lanczos3 with support widened by the downscale ratio, so large sources
// are area-averaged rather than point sampled
/// Resampling filter applied to every face
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Check that a face size is positive and within `MAX_FACE_SIZE`
///
/// # Errors
///
/// Returns `InvalidParameter` for zero or oversized face sizes
pub fn validate_face_size(face_size: u32) -> Result<()> {
    if face_size == 0 {
        return Err(invalid_parameter(
            "face_size",
            &face_size,
            &"must be a positive number of pixels",
        ));
    }
    if face_size > MAX_FACE_SIZE {
        return Err(invalid_parameter(
            "face_size",
            &face_size,
            &format!("must not exceed {MAX_FACE_SIZE}"),
        ));
    }
    Ok(())
}

/// Crop one rectangle from the source and resample it to `face_size x face_size`
///
/// # Errors
///
/// Returns `InvalidGeometry` if the rectangle is empty or reaches past the
/// source edges
pub fn extract_face(
    source: &DynamicImage,
    rect: CropRect,
    face_size: u32,
) -> Result<DynamicImage> {
    let (width, height) = (source.width(), source.height());
    if !rect.fits_within(width, height) {
        return Err(invalid_geometry(
            width,
            height,
            &format!(
                "crop {}..{} x {}..{} is empty or outside the source",
                rect.left, rect.right, rect.top, rect.bottom
            ),
        ));
    }

    Ok(source
        .crop_imm(rect.left, rect.top, rect.width(), rect.height())
        .resize_exact(face_size, face_size, RESAMPLE_FILTER))
}

/// Extract all six faces from a horizontal cross source
///
/// The source is only read. Calling this twice with the same inputs yields
/// pixel-identical faces.
///
/// # Errors
///
/// Returns an error if:
/// - `face_size` is zero or exceeds `MAX_FACE_SIZE`
/// - The source is empty or too small to slice into a cross
pub fn extract_faces(source: &DynamicImage, face_size: u32) -> Result<FaceImages> {
    validate_face_size(face_size)?;

    let geometry = CrossGeometry::new(source.width(), source.height())?;

    geometry
        .crop_rects()
        .into_iter()
        .map(|(face, rect)| extract_face(source, rect, face_size).map(|image| (face, image)))
        .collect()
}
