//! Typed payload decoders, one module per chunk kind.
//!
//! Each decoder is a pure `read(&mut Cursor) -> Result<T>` with a matching
//! `write(&self, &mut Writer)` inverse. Decoders never touch the registry
//! or the section tree; nesting is the composite path's job.

pub mod frame_list;
pub mod geometry_list;
pub mod light;
pub mod moving_planes;
pub mod skin;

pub use frame_list::{Frame, FrameList};
pub use geometry_list::GeometryList;
pub use light::{Light, LightKind};
pub use moving_planes::{MovingPlanes, RenderMode};
pub use skin::{Bone, Skin};
