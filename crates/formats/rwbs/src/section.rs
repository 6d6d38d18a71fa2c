use crate::chunks::{FrameList, GeometryList, Light, MovingPlanes, Skin};
use crate::cursor::{Cursor, Writer};
use crate::error::{Error, Result};
use crate::header::SectionHeader;
use crate::registry::{Registry, SectionKind};

/// Maximum section nesting depth accepted during decode.
///
/// Real asset files nest well under ten levels; the cap exists so a
/// malformed or hostile file fails with [`Error::DepthLimitExceeded`]
/// instead of exhausting the stack.
pub const MAX_DEPTH: usize = 32;

/// One typed leaf record. Closed set: new chunk kinds are new variants
/// here plus a decoder registration, not new trait impls.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    FrameList(FrameList),
    GeometryList(GeometryList),
    Skin(Skin),
    Light(Light),
    MovingPlanes(MovingPlanes),
}

impl Payload {
    pub fn write(&self, w: &mut Writer) {
        match self {
            Payload::FrameList(p) => p.write(w),
            Payload::GeometryList(p) => p.write(w),
            Payload::Skin(p) => p.write(w),
            Payload::Light(p) => p.write(w),
            Payload::MovingPlanes(p) => p.write(w),
        }
    }

    // Registry decoder entry points, one per kind. Public so embeddings
    // can register them under their own type codes.

    pub fn decode_frame_list(c: &mut Cursor) -> Result<Self> {
        FrameList::read(c).map(Payload::FrameList)
    }

    pub fn decode_geometry_list(c: &mut Cursor) -> Result<Self> {
        GeometryList::read(c).map(Payload::GeometryList)
    }

    pub fn decode_skin(c: &mut Cursor) -> Result<Self> {
        Skin::read(c).map(Payload::Skin)
    }

    pub fn decode_light(c: &mut Cursor) -> Result<Self> {
        Light::read(c).map(Payload::Light)
    }

    pub fn decode_moving_planes(c: &mut Cursor) -> Result<Self> {
        MovingPlanes::read(c).map(Payload::MovingPlanes)
    }
}

/// A section's body, exactly one of three shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Ordered child sections. Order is semantically meaningful and
    /// preserved through decode/encode.
    Composite(Vec<Section>),
    /// One typed record plus any bytes the decoder left unconsumed,
    /// kept verbatim for forward compatibility.
    Leaf { payload: Payload, trailing: Vec<u8> },
    /// Raw body of a section whose type code has no registered kind.
    Opaque(Vec<u8>),
}

/// One node of the section tree: a header plus its content.
///
/// `header.size` is only meaningful during decode; [`Section::encode`]
/// always recomputes it from the live content, so mutations through the
/// public fields can never produce a stale length on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub header: SectionHeader,
    pub content: Content,
}

impl Section {
    /// A composite section with the given children.
    pub fn composite(id: u32, version: u32, children: Vec<Section>) -> Self {
        Self {
            header: SectionHeader { id, size: 0, version },
            content: Content::Composite(children),
        }
    }

    /// A leaf section with the given payload and no trailing bytes.
    pub fn leaf(id: u32, version: u32, payload: Payload) -> Self {
        Self {
            header: SectionHeader { id, size: 0, version },
            content: Content::Leaf {
                payload,
                trailing: Vec::new(),
            },
        }
    }

    /// An opaque section carrying raw bytes.
    pub fn opaque(id: u32, version: u32, bytes: Vec<u8>) -> Self {
        Self {
            header: SectionHeader { id, size: 0, version },
            content: Content::Opaque(bytes),
        }
    }

    /// Decode one section (and, recursively, its children) from the
    /// cursor. The cursor advances past exactly the section's header and
    /// declared body.
    pub fn decode(c: &mut Cursor, registry: &Registry) -> Result<Self> {
        Self::decode_at(c, registry, 0)
    }

    /// Decode a section from a complete byte buffer.
    pub fn decode_bytes(data: &[u8], registry: &Registry) -> Result<Self> {
        Self::decode(&mut Cursor::new(data), registry)
    }

    fn decode_at(c: &mut Cursor, registry: &Registry, depth: usize) -> Result<Self> {
        if depth >= MAX_DEPTH {
            return Err(Error::DepthLimitExceeded { limit: MAX_DEPTH });
        }

        let header = SectionHeader::decode(c)?;
        let body_len = header.size as usize;
        // Inside a parent region, a child claiming more than remains is a
        // length inconsistency; at the top level it is plain truncation.
        if depth > 0 && body_len > c.remaining() {
            return Err(Error::InvalidLength {
                id: header.id,
                declared: header.size,
                available: c.remaining(),
            });
        }
        let mut body = c.sub_cursor(body_len)?;

        let content = match registry.resolve(header.id) {
            None => Content::Opaque(body.read_rest().to_vec()),
            Some(SectionKind::Composite) => {
                let mut children = Vec::new();
                while !body.is_empty() {
                    children.push(Self::decode_at(&mut body, registry, depth + 1)?);
                }
                Content::Composite(children)
            }
            Some(SectionKind::Leaf(decode)) => {
                let payload = decode(&mut body)?;
                Content::Leaf {
                    payload,
                    trailing: body.read_rest().to_vec(),
                }
            }
        };

        Ok(Self { header, content })
    }

    /// Encode this section and its whole subtree. The body is measured
    /// into a temporary buffer first so the written header always carries
    /// the exact body length.
    pub fn encode(&self, w: &mut Writer) {
        let mut body = Writer::new();
        match &self.content {
            Content::Composite(children) => {
                for child in children {
                    child.encode(&mut body);
                }
            }
            Content::Leaf { payload, trailing } => {
                payload.write(&mut body);
                body.write_bytes(trailing);
            }
            Content::Opaque(bytes) => body.write_bytes(bytes),
        }
        let body = body.into_bytes();

        SectionHeader {
            id: self.header.id,
            size: body.len() as u32,
            version: self.header.version,
        }
        .encode(w);
        w.write_bytes(&body);
    }

    /// Encode into a fresh byte buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut w = Writer::with_capacity(SectionHeader::SIZE + self.header.size as usize);
        self.encode(&mut w);
        w.into_bytes()
    }

    /// Child sections, or an empty slice for leaf/opaque sections.
    pub fn children(&self) -> &[Section] {
        match &self.content {
            Content::Composite(children) => children,
            _ => &[],
        }
    }

    /// The typed payload, if this is a decoded leaf.
    pub fn payload(&self) -> Option<&Payload> {
        match &self.content {
            Content::Leaf { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Pre-order depth-first search of this section's descendants for the
    /// first one whose type code matches. The receiver itself is never a
    /// match; absence is an ordinary `None`, not an error.
    pub fn find_first(&self, id: u32) -> Option<&Section> {
        for child in self.children() {
            if child.header.id == id {
                return Some(child);
            }
            if let Some(found) = child.find_first(id) {
                return Some(found);
            }
        }
        None
    }

    /// Mutable twin of [`Section::find_first`].
    pub fn find_first_mut(&mut self, id: u32) -> Option<&mut Section> {
        let children = match &mut self.content {
            Content::Composite(children) => children,
            _ => return None,
        };
        for child in children {
            if child.header.id == id {
                return Some(child);
            }
            if let Some(found) = child.find_first_mut(id) {
                return Some(found);
            }
        }
        None
    }

    /// Find the parent of `descendant` within this tree, by identity.
    ///
    /// The tree stores no upward links (ownership flows strictly
    /// downward); the parent is recomputed by walking from the root.
    pub fn parent_of<'a>(&'a self, descendant: &Section) -> Option<&'a Section> {
        for child in self.children() {
            if std::ptr::eq(child, descendant) {
                return Some(self);
            }
            if let Some(parent) = child.parent_of(descendant) {
                return Some(parent);
            }
        }
        None
    }
}
