//! Face extraction and atlas assembly
//!
//! Turns a decoded cross-layout source into six square face images and
//! composes those faces into the 3x2 atlas.

/// Atlas assembly from a complete face set
pub mod atlas;
/// Face cropping and resampling
pub mod extract;

pub use atlas::assemble_atlas;
pub use extract::{FaceImages, extract_faces};

use crate::io::error::Result;
use image::{DynamicImage, RgbImage};

/// Extract all faces at `face_size` and assemble them into an atlas
///
/// # Errors
///
/// Propagates geometry and parameter errors from extraction
pub fn build_atlas(source: &DynamicImage, face_size: u32) -> Result<RgbImage> {
    let faces = extract_faces(source, face_size)?;
    assemble_atlas(&faces, face_size)
}
