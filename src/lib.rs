//! Cube-cross to skybox conversion
//!
//! Slices a source image laid out as a 4x2 horizontal cross into six square
//! cube faces, then either composes them into a 3x2 atlas or writes them as
//! six separate images.

#![forbid(unsafe_code)]

/// Face extraction and atlas assembly
pub mod cubemap;
/// Face identifiers, crop rectangles and atlas layout tables
pub mod geometry;
/// Input/output operations, orchestration and error handling
pub mod io;

pub use cubemap::{FaceImages, assemble_atlas, extract_faces};
pub use geometry::FaceId;
pub use io::error::{Result, SkyboxError};
pub use io::generate::{GeneratedFiles, OutputConfig, generate, preview};
