//! Reader/writer for a versioned, recursively nested binary section tree.
//!
//! Every section starts with a fixed 12-byte header (type code, body
//! length, version tag). Composite sections hold an ordered run of child
//! sections; leaf sections hold one typed record plus any undecoded
//! trailing bytes; unregistered type codes decode as opaque sections that
//! round-trip byte-for-byte.
//!
//! Three-layer architecture:
//! - **Layer 1** (`cursor`/`header`): bounded little-endian I/O and the
//!   fixed header codec
//! - **Layer 2** (`chunks`): typed decoders for individual payload kinds
//! - **Layer 3** (`section`/`registry`): the recursive tree, driven by an
//!   explicit type registry
//!
//! The flat key-value store (`db`) lives alongside the tree but shares no
//! code with it.

pub mod chunks;
pub mod cursor;
pub mod db;
pub mod error;
pub mod header;
pub mod primitives;
pub mod registry;
pub mod section;

pub use cursor::{Cursor, Writer};
pub use error::{Error, Result};
pub use header::{section_id, SectionHeader};
pub use registry::{Registry, SectionKind};
pub use section::{Content, Payload, Section, MAX_DEPTH};
