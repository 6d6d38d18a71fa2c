use crate::cursor::{Cursor, Writer};
use crate::error::Result;
use crate::primitives::{Color, Vec3};

/// Light type discriminant. The value selects which of the optional fields
/// follow the fixed prefix on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Directional,
    Ambient,
    Point,
    Spot,
    /// Unrecognized discriminant; no optional fields are read. The raw
    /// value is retained so re-encoding reproduces it.
    Unknown(i32),
}

impl LightKind {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Directional,
            2 => Self::Ambient,
            128 => Self::Point,
            129 => Self::Spot,
            other => Self::Unknown(other),
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            Self::Directional => 1,
            Self::Ambient => 2,
            Self::Point => 128,
            Self::Spot => 129,
            Self::Unknown(raw) => raw,
        }
    }
}

/// Flag bit: the light affects atomics (models).
pub const LIGHT_ATOMICS: u32 = 1 << 0;
/// Flag bit: the light affects the world geometry.
pub const LIGHT_WORLD: u32 = 1 << 1;

/// Scene light record.
///
/// Fields not called for by the discriminant stay at their zero defaults
/// and are never read from or written to the wire:
/// - Directional: `pos` + `vec` (direction)
/// - Ambient: neither vector nor radius
/// - Point: `radius` + `pos`
/// - Spot: `radius` + `pos` + `vec` (look-at target)
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub idx: u32,
    pub kind: LightKind,
    pub color: Color,
    /// Combination of the `LIGHT_*` flag bits.
    pub flags: u32,
    pub pos: Vec3,
    /// Direction for directional lights, look-at target for spot lights.
    pub vec: Vec3,
    pub radius: f32,
}

impl Light {
    pub fn read(c: &mut Cursor) -> Result<Self> {
        let idx = c.read_u32()?;
        let kind = LightKind::from_raw(c.read_i32()?);
        let color = Color::read(c)?;
        let flags = c.read_u32()?;

        let mut pos = Vec3::default();
        let mut vec = Vec3::default();
        let mut radius = 0.0f32;
        match kind {
            LightKind::Directional => {
                pos = Vec3::read(c)?;
                vec = Vec3::read(c)?;
            }
            LightKind::Point => {
                radius = c.read_f32()?;
                pos = Vec3::read(c)?;
            }
            LightKind::Spot => {
                radius = c.read_f32()?;
                pos = Vec3::read(c)?;
                vec = Vec3::read(c)?;
            }
            LightKind::Ambient | LightKind::Unknown(_) => {}
        }

        Ok(Self {
            idx,
            kind,
            color,
            flags,
            pos,
            vec,
            radius,
        })
    }

    /// Mirrors the discriminant branching of `read` — fields the
    /// discriminant does not call for are never written.
    pub fn write(&self, w: &mut Writer) {
        w.write_u32(self.idx);
        w.write_i32(self.kind.raw());
        self.color.write(w);
        w.write_u32(self.flags);
        match self.kind {
            LightKind::Directional => {
                self.pos.write(w);
                self.vec.write(w);
            }
            LightKind::Point => {
                w.write_f32(self.radius);
                self.pos.write(w);
            }
            LightKind::Spot => {
                w.write_f32(self.radius);
                self.pos.write(w);
                self.vec.write(w);
            }
            LightKind::Ambient | LightKind::Unknown(_) => {}
        }
    }
}
