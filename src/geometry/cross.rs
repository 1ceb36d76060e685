//! Crop rectangles for a 4x2-unit horizontal cross source
//!
//! The source is split into four columns of `width / 4` and two rows of
//! `height / 2`. The four lateral faces share one horizontal strip that is a
//! full row tall but starts half a row down, the top face takes the half row
//! above that strip and the bottom face takes the last half row. All divisions
//! truncate, and the rightmost column always extends to the source edge.

use crate::geometry::FaceId;
use crate::io::error::{Result, invalid_geometry};

/// Vertical strip of the source a face is cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    /// `0 .. half_row`
    Upper,
    /// `half_row .. half_row + row`
    Middle,
    /// `height - half_row .. height`
    Lower,
}

// Column index and vertical strip of a face
const fn cross_cell(face: FaceId) -> (u32, Band) {
    match face {
        FaceId::NegX => (0, Band::Middle),
        FaceId::PosZ => (1, Band::Middle),
        FaceId::PosY => (1, Band::Upper),
        FaceId::NegY => (1, Band::Lower),
        FaceId::PosX => (2, Band::Middle),
        FaceId::NegZ => (3, Band::Middle),
    }
}

/// Axis-aligned rectangle in source pixel space (right and bottom exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    /// Left edge (inclusive)
    pub left: u32,
    /// Top edge (inclusive)
    pub top: u32,
    /// Right edge (exclusive)
    pub right: u32,
    /// Bottom edge (exclusive)
    pub bottom: u32,
}

impl CropRect {
    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Area in pixels
    pub const fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Check whether the rectangle is non-empty and lies within `width x height`
    pub const fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left < self.right
            && self.right <= width
            && self.top < self.bottom
            && self.bottom <= height
    }
}

/// Cell dimensions derived from a source image size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossGeometry {
    /// Source width in pixels
    pub width: u32,
    /// Source height in pixels
    pub height: u32,
    /// Width of one cross column (`width / 4`)
    pub side_width: u32,
    /// Height of one cross row (`height / 2`)
    pub side_height: u32,
    /// Offset of the lateral strip and height of the top and bottom faces (`side_height / 2`)
    pub half_row: u32,
}

impl CrossGeometry {
    /// Derive cross geometry for a source of the given size
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` if either dimension is zero or too small to
    /// give every face a positive area (width below 4 or height below 4)
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_geometry(width, height, &"source has no pixels"));
        }

        let side_width = width / 4;
        let side_height = height / 2;
        let half_row = side_height / 2;

        if side_width == 0 {
            return Err(invalid_geometry(
                width,
                height,
                &"width must be at least 4 pixels for four cross columns",
            ));
        }
        if half_row == 0 {
            return Err(invalid_geometry(
                width,
                height,
                &"height must be at least 4 pixels for the top and bottom faces",
            ));
        }

        Ok(Self {
            width,
            height,
            side_width,
            side_height,
            half_row,
        })
    }

    /// Crop rectangle for a single face
    pub const fn crop_rect(&self, face: FaceId) -> CropRect {
        let (column, band) = cross_cell(face);

        let left = column * self.side_width;
        let right = if column == 3 {
            self.width
        } else {
            (column + 1) * self.side_width
        };

        let (top, bottom) = match band {
            Band::Upper => (0, self.half_row),
            Band::Middle => (self.half_row, self.half_row + self.side_height),
            Band::Lower => (self.height - self.half_row, self.height),
        };

        CropRect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Crop rectangles for all six faces in write order
    pub fn crop_rects(&self) -> [(FaceId, CropRect); 6] {
        FaceId::WRITE_ORDER.map(|face| (face, self.crop_rect(face)))
    }
}
