use crate::cursor::{Cursor, Writer};
use crate::error::Result;
use crate::primitives::Vec3;

/// One frame of a model's frame hierarchy.
///
/// `rotation` is a row-major 3×3 basis. `frame_index` refers to another
/// frame in the same list (the hierarchy parent); `creation_flags` is
/// carried verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub rotation: [f32; 9],
    pub position: Vec3,
    pub frame_index: u32,
    pub creation_flags: u32,
}

impl Frame {
    /// Serialized size of one frame: 9 + 3 floats and 2 u32 fields.
    pub const WIRE_SIZE: usize = 9 * 4 + 3 * 4 + 4 + 4;

    pub fn read(c: &mut Cursor) -> Result<Self> {
        let mut rotation = [0.0f32; 9];
        for v in rotation.iter_mut() {
            *v = c.read_f32()?;
        }
        Ok(Self {
            rotation,
            position: Vec3::read(c)?,
            frame_index: c.read_u32()?,
            creation_flags: c.read_u32()?,
        })
    }

    pub fn write(&self, w: &mut Writer) {
        for v in self.rotation {
            w.write_f32(v);
        }
        self.position.write(w);
        w.write_u32(self.frame_index);
        w.write_u32(self.creation_flags);
    }
}

/// Frame-list payload: `count:u32` followed by `count` frames.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameList {
    pub frames: Vec<Frame>,
}

impl FrameList {
    pub fn read(c: &mut Cursor) -> Result<Self> {
        let count = c.read_u32()? as usize;
        // Cap the preallocation by what the region can actually hold, so a
        // hostile count cannot request gigabytes up front.
        let mut frames = Vec::with_capacity(count.min(c.remaining() / Frame::WIRE_SIZE));
        for _ in 0..count {
            frames.push(Frame::read(c)?);
        }
        Ok(Self { frames })
    }

    /// The count is always recomputed from the live sequence, never taken
    /// from a stored field.
    pub fn write(&self, w: &mut Writer) {
        w.write_u32(self.frames.len() as u32);
        for frame in &self.frames {
            frame.write(w);
        }
    }
}
