use crate::cursor::{Cursor, Writer};
use crate::error::Result;

/// Geometry-list payload: a bare geometry count.
///
/// The geometries themselves are sibling sections handled by the composite
/// path, not by this leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeometryList {
    pub geometry_count: u32,
}

impl GeometryList {
    pub fn read(c: &mut Cursor) -> Result<Self> {
        Ok(Self {
            geometry_count: c.read_u32()?,
        })
    }

    pub fn write(&self, w: &mut Writer) {
        w.write_u32(self.geometry_count);
    }
}
