//! Source image decoding and face/atlas encoding

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use image::{DynamicImage, ImageFormat};

use crate::io::error::{Result, SkyboxError};

/// Encoded format for written skybox files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Lossless PNG, alpha preserved on separate faces
    #[default]
    Png,
    /// JPEG, alpha dropped
    Jpeg,
    /// Uncompressed BMP
    Bmp,
}

impl OutputFormat {
    /// Corresponding `image` crate format
    pub const fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Bmp => ImageFormat::Bmp,
        }
    }

    /// File extension without the leading dot
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
        }
    }
}

/// Decode the source image at `path`
///
/// # Errors
///
/// Returns `ImageDecode` if the file cannot be opened, its format is not
/// recognised, or decoding fails
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| SkyboxError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })
}

// Convert only when the encoder cannot take the source colour type
fn encodable(image: &DynamicImage, format: OutputFormat) -> DynamicImage {
    match format {
        OutputFormat::Png => match image {
            DynamicImage::ImageRgba32F(_) => DynamicImage::ImageRgba16(image.to_rgba16()),
            DynamicImage::ImageRgb32F(_) => DynamicImage::ImageRgb16(image.to_rgb16()),
            _ => image.clone(),
        },
        OutputFormat::Jpeg => match image {
            DynamicImage::ImageLuma8(_) => image.clone(),
            DynamicImage::ImageLuma16(_) => DynamicImage::ImageLuma8(image.to_luma8()),
            _ => DynamicImage::ImageRgb8(image.to_rgb8()),
        },
        OutputFormat::Bmp if image.color().has_alpha() => {
            DynamicImage::ImageRgba8(image.to_rgba8())
        }
        OutputFormat::Bmp => DynamicImage::ImageRgb8(image.to_rgb8()),
    }
}

/// Encode `image` to `path` in the given format
///
/// `written` lists files the current operation has already produced and is
/// carried into the error so callers can report partial output.
///
/// # Errors
///
/// Returns `OutputWrite` if encoding or writing fails
pub fn save_image(
    image: &DynamicImage,
    path: &Path,
    format: OutputFormat,
    written: &[PathBuf],
) -> Result<()> {
    encodable(image, format)
        .save_with_format(path, format.image_format())
        .map_err(|source| SkyboxError::OutputWrite {
            path: path.to_path_buf(),
            source,
            written: written.to_vec(),
        })
}
