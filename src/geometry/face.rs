//! Cube face identification and enumeration

use std::fmt;

/// One of the six cube faces
///
/// Ordering follows the axis order (+X, -X, +Y, -Y, +Z, -Z) so face sets
/// stored in ordered maps iterate predictably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FaceId {
    /// +X face (right)
    PosX,
    /// -X face (left)
    NegX,
    /// +Y face (top)
    PosY,
    /// -Y face (bottom)
    NegY,
    /// +Z face (front)
    PosZ,
    /// -Z face (back)
    NegZ,
}

impl FaceId {
    /// All six faces in axis order
    pub const ALL: [Self; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Order in which separate face files are written
    pub const WRITE_ORDER: [Self; 6] = [
        Self::PosZ,
        Self::NegX,
        Self::NegZ,
        Self::PosX,
        Self::PosY,
        Self::NegY,
    ];

    /// Short name used in output file names (e.g. "posx", "negy")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::PosX => "posx",
            Self::NegX => "negx",
            Self::PosY => "posy",
            Self::NegY => "negy",
            Self::PosZ => "posz",
            Self::NegZ => "negz",
        }
    }

    /// Human-readable direction name
    pub const fn label(self) -> &'static str {
        match self {
            Self::PosX => "right",
            Self::NegX => "left",
            Self::PosY => "top",
            Self::NegY => "bottom",
            Self::PosZ => "front",
            Self::NegZ => "back",
        }
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
