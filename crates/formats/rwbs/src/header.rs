use crate::cursor::{Cursor, Writer};
use crate::error::Result;

/// Known section type codes.
///
/// The numbering follows the RenderWare convention the asset files use;
/// codes above 0x0200 are engine-specific extensions carried in the same
/// container.
pub mod section_id {
    pub const STRUCT: u32 = 0x0001;
    pub const STRING: u32 = 0x0002;
    pub const EXTENSION: u32 = 0x0003;
    pub const FRAME_LIST: u32 = 0x000E;
    pub const GEOMETRY: u32 = 0x000F;
    pub const CLUMP: u32 = 0x0010;
    pub const LIGHT: u32 = 0x0012;
    pub const ATOMIC: u32 = 0x0014;
    pub const GEOMETRY_LIST: u32 = 0x001A;
    pub const SKIN_PLG: u32 = 0x0116;
    pub const MOVING_PLANES: u32 = 0x0245;

    /// Human-readable name for a known type code (for display).
    pub fn name(id: u32) -> Option<&'static str> {
        Some(match id {
            STRUCT => "Struct",
            STRING => "String",
            EXTENSION => "Extension",
            FRAME_LIST => "FrameList",
            GEOMETRY => "Geometry",
            CLUMP => "Clump",
            LIGHT => "Light",
            ATOMIC => "Atomic",
            GEOMETRY_LIST => "GeometryList",
            SKIN_PLG => "SkinPLG",
            MOVING_PLANES => "MovingPlanes",
            _ => return None,
        })
    }
}

/// Fixed 12-byte prefix of every section: type code, body length, version.
///
/// `size` excludes the header itself. It is recomputed from the live
/// content on every encode; a stored value is only trusted during decode,
/// where it bounds the section's body region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    pub id: u32,
    pub size: u32,
    pub version: u32,
}

impl SectionHeader {
    pub const SIZE: usize = 12;

    /// Decode a header, consuming exactly [`Self::SIZE`] bytes.
    /// No semantic validation happens here; `size` is checked against the
    /// enclosing region by the section decoder.
    pub fn decode(c: &mut Cursor) -> Result<Self> {
        Ok(Self {
            id: c.read_u32()?,
            size: c.read_u32()?,
            version: c.read_u32()?,
        })
    }

    /// Encode the three fields in fixed order and width.
    pub fn encode(&self, w: &mut Writer) {
        w.write_u32(self.id);
        w.write_u32(self.size);
        w.write_u32(self.version);
    }

    /// Type code name if known (for display).
    pub fn id_name(&self) -> Option<&'static str> {
        section_id::name(self.id)
    }
}
