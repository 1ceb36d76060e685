//! Error types for skybox extraction, assembly and export

use std::fmt;
use std::path::PathBuf;

use crate::geometry::FaceId;

/// Main error type for all skybox operations
#[derive(Debug)]
pub enum SkyboxError {
    /// Source image could not be read or decoded
    ImageDecode {
        /// Path to the source image
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Source dimensions cannot be sliced into a cube cross
    InvalidGeometry {
        /// Source width in pixels
        width: u32,
        /// Source height in pixels
        height: u32,
        /// Description of what's wrong with the dimensions
        reason: String,
    },

    /// Atlas assembly was given fewer than six faces
    IncompleteFaceSet {
        /// Faces absent from the provided set
        missing: Vec<FaceId>,
    },

    /// Neither atlas nor separate-file output was requested
    NoOutputSelected,

    /// Output directory is unusable or a file could not be written
    ///
    /// Files written before the failure are left on disk and listed in `written`.
    OutputWrite {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying encoding or I/O error
        source: image::ImageError,
        /// Files already written by the same operation
        written: Vec<PathBuf>,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for SkyboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageDecode { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidGeometry {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid source geometry {width}x{height}: {reason}")
            }
            Self::IncompleteFaceSet { missing } => {
                let names = missing
                    .iter()
                    .map(|face| face.short_name())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Incomplete face set, missing: {names}")
            }
            Self::NoOutputSelected => {
                write!(f, "Please select at least one output format")
            }
            Self::OutputWrite {
                path,
                source,
                written,
            } => {
                write!(
                    f,
                    "Failed to write '{}': {source} ({} file(s) already written)",
                    path.display(),
                    written.len()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for SkyboxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageDecode { source, .. } | Self::OutputWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for skybox results
pub type Result<T> = std::result::Result<T, SkyboxError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SkyboxError {
    SkyboxError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid geometry error for the given source dimensions
pub fn invalid_geometry(width: u32, height: u32, reason: &impl ToString) -> SkyboxError {
    SkyboxError::InvalidGeometry {
        width,
        height,
        reason: reason.to_string(),
    }
}

/// Create an output write error from an I/O failure
pub fn output_io_error(path: PathBuf, source: std::io::Error, written: &[PathBuf]) -> SkyboxError {
    SkyboxError::OutputWrite {
        path,
        source: image::ImageError::IoError(source),
        written: written.to_vec(),
    }
}
