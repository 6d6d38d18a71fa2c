use crate::cursor::{Cursor, Writer};
use crate::error::{Error, Result};

/// Render blend mode for effect parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    NormalBlend,
    Additive,
    AdditiveAlpha,
    /// Unrecognized mode; raw value retained for round-trip.
    Unknown(i32),
}

impl RenderMode {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::NormalBlend,
            1 => Self::Additive,
            2 => Self::AdditiveAlpha,
            other => Self::Unknown(other),
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            Self::NormalBlend => 0,
            Self::Additive => 1,
            Self::AdditiveAlpha => 2,
            Self::Unknown(raw) => raw,
        }
    }
}

/// Byte length of the fixed layout after the size field itself.
const BASE_SIZE: u32 = 136;
/// The two valid values of the record's leading size field.
const ALLOWED_SIZES: &[u32] = &[BASE_SIZE, BASE_SIZE + 4];

/// "Moving planes" visual effect part: a flat, non-nested record with an
/// explicit leading size field.
///
/// The wire layout is fixed-order with structural padding gaps (2–3 unused
/// bytes at set points) that carry no data but must be reproduced on write.
/// A declared size of 140 appends one 32-bit field documented as unused;
/// its value is discarded on read and written back as zeroes.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingPlanes {
    pub phase1: u32,
    pub phase2: u32,
    pub width: f32,
    pub height: f32,
    pub size_mod_speed: f32,
    pub target_size: f32,
    pub rotation: f32,
    pub tex_shift: f32,
    pub tex_name: String,
    pub tile_id: u32,
    pub tile_w: u32,
    pub tile_h: u32,
    pub manual_progress: bool,
    pub color: u32,
    pub name: String,
    pub min_progress: f32,
    pub disable_second_plane: bool,
    pub circles_around: bool,
    pub y_offset: f32,
    pub render_mode: RenderMode,
    pub use_direction: bool,
    /// Whether the record was declared with the larger (140-byte) layout.
    /// Controls which size is written back; the extra field itself is unused.
    pub extended: bool,
}

impl Default for MovingPlanes {
    fn default() -> Self {
        Self {
            phase1: 1000,
            phase2: 1000,
            width: 0.1,
            height: 0.1,
            size_mod_speed: 0.0,
            target_size: 0.0,
            rotation: 0.0,
            tex_shift: 0.0,
            tex_name: "standard".to_string(),
            tile_id: 0,
            tile_w: 64,
            tile_h: 64,
            manual_progress: false,
            color: 0xffff_ffff,
            name: "Moving Planes".to_string(),
            min_progress: 1.0,
            disable_second_plane: false,
            circles_around: false,
            y_offset: 0.0,
            render_mode: RenderMode::AdditiveAlpha,
            use_direction: false,
            extended: false,
        }
    }
}

impl MovingPlanes {
    pub fn read(c: &mut Cursor) -> Result<Self> {
        let declared = c.read_u32()?;
        if !ALLOWED_SIZES.contains(&declared) {
            return Err(Error::UnexpectedSize {
                allowed: ALLOWED_SIZES,
                actual: declared,
            });
        }

        let phase1 = c.read_u32()?;
        let phase2 = c.read_u32()?;
        let width = c.read_f32()?;
        let height = c.read_f32()?;
        let size_mod_speed = c.read_f32()?;
        let target_size = c.read_f32()?;
        let rotation = c.read_f32()?;
        let tex_shift = c.read_f32()?;
        let tex_name = c.read_fixed_cstr(32)?;
        let tile_id = c.read_u32()?;
        let tile_w = c.read_u32()?;
        let tile_h = c.read_u32()?;
        let manual_progress = c.read_bool()?;
        let color = c.read_u32()?;
        let name = c.read_fixed_cstr(32)?;
        c.skip(3)?;
        let min_progress = c.read_f32()?;
        let disable_second_plane = c.read_bool()?;
        let circles_around = c.read_bool()?;
        c.skip(2)?;
        let y_offset = c.read_f32()?;
        let render_mode = RenderMode::from_raw(c.read_i32()?);
        let use_direction = c.read_bool()?;
        c.skip(3)?;
        let extended = declared > BASE_SIZE;
        if extended {
            // Trailing field of the 140-byte layout; documented unused.
            c.skip(4)?;
        }

        Ok(Self {
            phase1,
            phase2,
            width,
            height,
            size_mod_speed,
            target_size,
            rotation,
            tex_shift,
            tex_name,
            tile_id,
            tile_w,
            tile_h,
            manual_progress,
            color,
            name,
            min_progress,
            disable_second_plane,
            circles_around,
            y_offset,
            render_mode,
            use_direction,
            extended,
        })
    }

    pub fn write(&self, w: &mut Writer) {
        let declared = if self.extended { BASE_SIZE + 4 } else { BASE_SIZE };
        w.write_u32(declared);
        w.write_u32(self.phase1);
        w.write_u32(self.phase2);
        w.write_f32(self.width);
        w.write_f32(self.height);
        w.write_f32(self.size_mod_speed);
        w.write_f32(self.target_size);
        w.write_f32(self.rotation);
        w.write_f32(self.tex_shift);
        w.write_fixed_cstr(&self.tex_name, 32);
        w.write_u32(self.tile_id);
        w.write_u32(self.tile_w);
        w.write_u32(self.tile_h);
        w.write_bool(self.manual_progress);
        w.write_u32(self.color);
        w.write_fixed_cstr(&self.name, 32);
        w.write_zeroes(3);
        w.write_f32(self.min_progress);
        w.write_bool(self.disable_second_plane);
        w.write_bool(self.circles_around);
        w.write_zeroes(2);
        w.write_f32(self.y_offset);
        w.write_i32(self.render_mode.raw());
        w.write_bool(self.use_direction);
        w.write_zeroes(3);
        if self.extended {
            w.write_zeroes(4);
        }
    }
}
