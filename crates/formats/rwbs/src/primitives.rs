use crate::cursor::{Cursor, Writer};
use crate::error::Result;

/// Three-component float vector, stored on the wire as 3×f32.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn read(c: &mut Cursor) -> Result<Self> {
        Ok(Self {
            x: c.read_f32()?,
            y: c.read_f32()?,
            z: c.read_f32()?,
        })
    }

    pub fn write(&self, w: &mut Writer) {
        w.write_f32(self.x);
        w.write_f32(self.y);
        w.write_f32(self.z);
    }
}

/// RGBA float color, stored on the wire as 4×f32.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn read(c: &mut Cursor) -> Result<Self> {
        Ok(Self {
            r: c.read_f32()?,
            g: c.read_f32()?,
            b: c.read_f32()?,
            a: c.read_f32()?,
        })
    }

    pub fn write(&self, w: &mut Writer) {
        w.write_f32(self.r);
        w.write_f32(self.g);
        w.write_f32(self.b);
        w.write_f32(self.a);
    }
}
