//! Fixed placement of cube faces in the 3x2 atlas
//!
//! ```text
//! +--------+-------+-------+
//! | bottom |  top  | back  |
//! +--------+-------+-------+
//! |  left  | front | right |
//! +--------+-------+-------+
//! ```

use crate::geometry::FaceId;

/// Number of face columns in the atlas
pub const ATLAS_COLUMNS: u32 = 3;
/// Number of face rows in the atlas
pub const ATLAS_ROWS: u32 = 2;

/// Grid cell in the atlas, in face units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtlasCell {
    /// Column index (0..3)
    pub col: u32,
    /// Row index (0..2)
    pub row: u32,
}

impl AtlasCell {
    /// Pixel offset of the cell's top-left corner for a given face size
    pub const fn pixel_offset(self, face_size: u32) -> (u32, u32) {
        (self.col * face_size, self.row * face_size)
    }
}

/// Face-to-cell table
pub const ATLAS_LAYOUT: [(FaceId, AtlasCell); 6] = [
    (FaceId::NegY, AtlasCell { col: 0, row: 0 }),
    (FaceId::PosY, AtlasCell { col: 1, row: 0 }),
    (FaceId::NegZ, AtlasCell { col: 2, row: 0 }),
    (FaceId::NegX, AtlasCell { col: 0, row: 1 }),
    (FaceId::PosZ, AtlasCell { col: 1, row: 1 }),
    (FaceId::PosX, AtlasCell { col: 2, row: 1 }),
];

/// Atlas cell assigned to a face
pub fn cell_of(face: FaceId) -> Option<AtlasCell> {
    ATLAS_LAYOUT
        .iter()
        .find(|(candidate, _)| *candidate == face)
        .map(|&(_, cell)| cell)
}
