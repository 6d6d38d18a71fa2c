use std::collections::HashMap;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::header::section_id;
use crate::section::Payload;

/// Decoder for one leaf payload kind. Runs inside the section's bounded
/// body region; bytes it leaves unconsumed become the section's trailing
/// bytes.
pub type PayloadDecoder = fn(&mut Cursor) -> Result<Payload>;

/// How a registered type code shapes its section's content.
#[derive(Clone, Copy)]
pub enum SectionKind {
    /// The body is an ordered sequence of child sections.
    Composite,
    /// The body is one typed record (plus optional trailing bytes).
    Leaf(PayloadDecoder),
}

/// Maps type codes to section kinds during decode.
///
/// A registry is an explicit value, never ambient state: build one per
/// embedding (or per test), extend it with custom codes, and pass it into
/// [`crate::Section::decode`]. Codes with no entry decode as opaque
/// sections that round-trip their bytes verbatim.
#[derive(Clone, Default)]
pub struct Registry {
    entries: HashMap<u32, SectionKind>,
}

impl Registry {
    /// An empty registry: every section decodes as opaque.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with all chunk kinds this crate knows about.
    ///
    /// `STRUCT` and `STRING` stay unregistered on purpose: their
    /// interpretation depends on the enclosing section, so they are kept
    /// opaque at this layer.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(section_id::CLUMP, SectionKind::Composite);
        registry.register(section_id::ATOMIC, SectionKind::Composite);
        registry.register(section_id::GEOMETRY, SectionKind::Composite);
        registry.register(section_id::EXTENSION, SectionKind::Composite);
        registry.register(
            section_id::FRAME_LIST,
            SectionKind::Leaf(Payload::decode_frame_list),
        );
        registry.register(
            section_id::GEOMETRY_LIST,
            SectionKind::Leaf(Payload::decode_geometry_list),
        );
        registry.register(section_id::SKIN_PLG, SectionKind::Leaf(Payload::decode_skin));
        registry.register(section_id::LIGHT, SectionKind::Leaf(Payload::decode_light));
        registry.register(
            section_id::MOVING_PLANES,
            SectionKind::Leaf(Payload::decode_moving_planes),
        );
        registry
    }

    /// Register (or replace) the kind for a type code.
    pub fn register(&mut self, id: u32, kind: SectionKind) {
        self.entries.insert(id, kind);
    }

    /// Look up the kind for a type code. `None` means the section decodes
    /// as opaque.
    pub fn resolve(&self, id: u32) -> Option<&SectionKind> {
        self.entries.get(&id)
    }

    /// Number of registered type codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
