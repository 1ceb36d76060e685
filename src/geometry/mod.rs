//! Cube face identifiers and the fixed tables that place them
//!
//! This module contains:
//! - Face identifiers and their file names
//! - Crop rectangles over a 4x2 horizontal cross source
//! - The 3x2 atlas cell layout

/// Crop rectangle computation over a horizontal cross source
pub mod cross;
/// Cube face identifiers
pub mod face;
/// Fixed face-to-cell layout of the 3x2 atlas
pub mod layout;

pub use cross::{CropRect, CrossGeometry};
pub use face::FaceId;
pub use layout::AtlasCell;
