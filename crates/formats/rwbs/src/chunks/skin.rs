use crate::cursor::{Cursor, Writer};
use crate::error::Result;

/// One bone of a skin: identity, hierarchy slot, flags and the inverse
/// bind matrix (4×4, row-major).
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    pub id: u32,
    pub index: u32,
    pub flags: u32,
    pub inv_bind: [f32; 16],
}

impl Bone {
    pub fn read(c: &mut Cursor) -> Result<Self> {
        let id = c.read_u32()?;
        let index = c.read_u32()?;
        let flags = c.read_u32()?;
        let mut inv_bind = [0.0f32; 16];
        for v in inv_bind.iter_mut() {
            *v = c.read_f32()?;
        }
        Ok(Self {
            id,
            index,
            flags,
            inv_bind,
        })
    }

    pub fn write(&self, w: &mut Writer) {
        w.write_u32(self.id);
        w.write_u32(self.index);
        w.write_u32(self.flags);
        for v in self.inv_bind {
            w.write_f32(v);
        }
    }

    const WIRE_SIZE: usize = 3 * 4 + 16 * 4;
}

/// Skin metadata: up to four bone influences per vertex.
///
/// Wire layout: `bone_count:u32`, `vertex_count:u32`, then per vertex
/// 4×u8 bone indices, then per vertex 4×f32 weights, then the bones.
/// Counts are recomputed from the live vectors on write.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Skin {
    /// 4 bone indices per vertex.
    pub vertex_indices: Vec<[u8; 4]>,
    /// 4 weights per vertex, parallel to `vertex_indices`.
    pub weights: Vec<[f32; 4]>,
    pub bones: Vec<Bone>,
}

impl Skin {
    pub fn read(c: &mut Cursor) -> Result<Self> {
        let bone_count = c.read_u32()? as usize;
        let vertex_count = c.read_u32()? as usize;

        let mut vertex_indices = Vec::with_capacity(vertex_count.min(c.remaining() / 4));
        for _ in 0..vertex_count {
            let bytes = c.read_bytes(4)?;
            vertex_indices.push([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        let mut weights = Vec::with_capacity(vertex_count.min(c.remaining() / 16));
        for _ in 0..vertex_count {
            let mut quad = [0.0f32; 4];
            for v in quad.iter_mut() {
                *v = c.read_f32()?;
            }
            weights.push(quad);
        }

        let mut bones = Vec::with_capacity(bone_count.min(c.remaining() / Bone::WIRE_SIZE));
        for _ in 0..bone_count {
            bones.push(Bone::read(c)?);
        }

        Ok(Self {
            vertex_indices,
            weights,
            bones,
        })
    }

    pub fn write(&self, w: &mut Writer) {
        w.write_u32(self.bones.len() as u32);
        w.write_u32(self.vertex_indices.len() as u32);
        for indices in &self.vertex_indices {
            w.write_bytes(indices);
        }
        for quad in &self.weights {
            for &v in quad {
                w.write_f32(v);
            }
        }
        for bone in &self.bones {
            bone.write(w);
        }
    }
}
