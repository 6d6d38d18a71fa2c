use rwbs::chunks::{Frame, FrameList, GeometryList, Light, LightKind, Skin};
use rwbs::primitives::{Color, Vec3};
use rwbs::{section_id, Content, Cursor, Error, Payload, Registry, Section, SectionHeader, Writer};

/// Wrap a raw body in a section header by hand.
fn raw_section(id: u32, version: u32, body: &[u8]) -> Vec<u8> {
    let mut w = Writer::new();
    SectionHeader {
        id,
        size: body.len() as u32,
        version,
    }
    .encode(&mut w);
    w.write_bytes(body);
    w.into_bytes()
}

fn sample_frame(seed: f32) -> Frame {
    Frame {
        rotation: [
            seed,
            seed + 1.0,
            seed + 2.0,
            seed + 3.0,
            seed + 4.0,
            seed + 5.0,
            seed + 6.0,
            seed + 7.0,
            seed + 8.0,
        ],
        position: Vec3::new(seed, -seed, 2.0 * seed),
        frame_index: seed as u32,
        creation_flags: 0x0003,
    }
}

#[test]
fn nested_tree_round_trips_byte_for_byte() {
    let frame_list = Section::leaf(
        section_id::FRAME_LIST,
        0x0310,
        Payload::FrameList(FrameList {
            frames: vec![sample_frame(1.0), sample_frame(2.0)],
        }),
    );
    let geometry_list = Section::leaf(
        section_id::GEOMETRY_LIST,
        0x0310,
        Payload::GeometryList(GeometryList { geometry_count: 2 }),
    );
    let strukt = Section::opaque(section_id::STRUCT, 0x0310, vec![0xAA; 7]);
    let clump = Section::composite(
        section_id::CLUMP,
        0x0310,
        vec![strukt, frame_list, geometry_list],
    );

    let bytes = clump.to_bytes();
    let decoded = Section::decode_bytes(&bytes, &Registry::standard()).expect("decode");
    assert_eq!(decoded.children().len(), 3);
    assert_eq!(decoded.to_bytes(), bytes);

    // The decoded header carries the measured body length.
    assert_eq!(
        decoded.header.size as usize,
        bytes.len() - SectionHeader::SIZE
    );
}

#[test]
fn frame_list_exactness() {
    for n in [0usize, 1, 3, 17] {
        let frames: Vec<Frame> = (0..n).map(|i| sample_frame(i as f32)).collect();
        let mut w = Writer::new();
        FrameList {
            frames: frames.clone(),
        }
        .write(&mut w);
        let bytes = w.into_bytes();
        assert_eq!(bytes.len(), 4 + n * Frame::WIRE_SIZE);

        let decoded = FrameList::read(&mut Cursor::new(&bytes)).expect("read");
        assert_eq!(decoded.frames, frames);
    }
}

#[test]
fn unknown_type_is_preserved_verbatim() {
    let body: Vec<u8> = (0..37u8).collect();
    let bytes = raw_section(0x7777, 0x0001, &body);

    let decoded = Section::decode_bytes(&bytes, &Registry::standard()).expect("decode");
    match &decoded.content {
        Content::Opaque(raw) => assert_eq!(raw, &body),
        other => panic!("expected opaque content, got {other:?}"),
    }
    assert_eq!(decoded.to_bytes(), bytes);
}

#[test]
fn leaf_trailing_bytes_survive_round_trip() {
    // A geometry list body with 5 forward-compatible extra bytes.
    let mut body = Writer::new();
    GeometryList { geometry_count: 9 }.write(&mut body);
    body.write_bytes(&[1, 2, 3, 4, 5]);
    let bytes = raw_section(section_id::GEOMETRY_LIST, 0x0310, &body.into_bytes());

    let decoded = Section::decode_bytes(&bytes, &Registry::standard()).expect("decode");
    match &decoded.content {
        Content::Leaf { payload, trailing } => {
            assert_eq!(
                payload,
                &Payload::GeometryList(GeometryList { geometry_count: 9 })
            );
            assert_eq!(trailing, &[1, 2, 3, 4, 5]);
        }
        other => panic!("expected leaf content, got {other:?}"),
    }
    assert_eq!(decoded.to_bytes(), bytes);
}

#[test]
fn child_longer_than_parent_region_is_invalid_length() {
    // Parent declares a 20-byte body; the child header inside claims 100.
    let mut parent_body = Writer::new();
    SectionHeader {
        id: 0x0009,
        size: 100,
        version: 0,
    }
    .encode(&mut parent_body);
    parent_body.write_bytes(&[0u8; 8]); // only 8 bytes actually follow
    let bytes = raw_section(section_id::CLUMP, 0, &parent_body.into_bytes());

    let err = Section::decode_bytes(&bytes, &Registry::standard()).unwrap_err();
    match err {
        Error::InvalidLength {
            id,
            declared,
            available,
        } => {
            assert_eq!(id, 0x0009);
            assert_eq!(declared, 100);
            assert_eq!(available, 8);
        }
        other => panic!("expected InvalidLength, got {other}"),
    }
}

#[test]
fn one_byte_short_stream_is_truncation() {
    let section = Section::opaque(0x1234, 0, vec![0u8; 16]);
    let mut bytes = section.to_bytes();
    bytes.pop();

    let err = Section::decode_bytes(&bytes, &Registry::standard()).unwrap_err();
    assert!(
        matches!(err, Error::UnexpectedEof { .. }),
        "expected UnexpectedEof, got {err}"
    );
}

#[test]
fn nesting_beyond_the_depth_limit_fails() {
    // Wrap an empty composite in MAX_DEPTH + 1 further composites.
    let mut bytes = raw_section(section_id::CLUMP, 0, &[]);
    for _ in 0..rwbs::MAX_DEPTH {
        bytes = raw_section(section_id::CLUMP, 0, &bytes);
    }

    let err = Section::decode_bytes(&bytes, &Registry::standard()).unwrap_err();
    match err {
        Error::DepthLimitExceeded { limit } => assert_eq!(limit, rwbs::MAX_DEPTH),
        other => panic!("expected DepthLimitExceeded, got {other}"),
    }
}

#[test]
fn registries_are_independent() {
    let frame_list = Section::leaf(
        section_id::FRAME_LIST,
        0x0310,
        Payload::FrameList(FrameList {
            frames: vec![sample_frame(4.0)],
        }),
    );
    let bytes = frame_list.to_bytes();

    // The standard registry decodes the payload...
    let decoded = Section::decode_bytes(&bytes, &Registry::standard()).expect("decode");
    assert!(matches!(
        decoded.content,
        Content::Leaf {
            payload: Payload::FrameList(_),
            ..
        }
    ));

    // ...an empty registry keeps the same bytes opaque, losslessly.
    let opaque = Section::decode_bytes(&bytes, &Registry::new()).expect("decode");
    assert!(matches!(opaque.content, Content::Opaque(_)));
    assert_eq!(opaque.to_bytes(), bytes);
}

#[test]
fn custom_registry_extends_the_standard_set() {
    use rwbs::SectionKind;

    // An embedding application maps its own code to an existing decoder.
    const CUSTOM: u32 = 0x0801;
    let mut registry = Registry::standard();
    registry.register(CUSTOM, SectionKind::Leaf(Payload::decode_light));

    let mut body = Writer::new();
    point_light().write(&mut body);
    let bytes = raw_section(CUSTOM, 0, &body.into_bytes());

    let decoded = Section::decode_bytes(&bytes, &registry).expect("decode");
    match decoded.payload() {
        Some(Payload::Light(light)) => assert_eq!(light.kind, LightKind::Point),
        other => panic!("expected light payload, got {other:?}"),
    }
}

#[test]
fn find_first_is_preorder_and_descendants_only() {
    let inner_geo = Section::leaf(
        section_id::GEOMETRY_LIST,
        0,
        Payload::GeometryList(GeometryList { geometry_count: 1 }),
    );
    let atomic = Section::composite(section_id::ATOMIC, 0, vec![inner_geo]);
    let sibling_geo = Section::leaf(
        section_id::GEOMETRY_LIST,
        0,
        Payload::GeometryList(GeometryList { geometry_count: 2 }),
    );
    let clump = Section::composite(section_id::CLUMP, 0, vec![atomic, sibling_geo]);

    // The nested one comes first in pre-order.
    let found = clump.find_first(section_id::GEOMETRY_LIST).expect("found");
    assert_eq!(
        found.payload(),
        Some(&Payload::GeometryList(GeometryList { geometry_count: 1 }))
    );

    // A section never matches itself.
    assert!(clump.find_first(section_id::CLUMP).is_none());

    // Absence is None, not an error.
    assert!(clump.find_first(section_id::SKIN_PLG).is_none());
}

#[test]
fn parent_of_walks_by_identity() {
    let skin = Section::leaf(section_id::SKIN_PLG, 0, Payload::Skin(Skin::default()));
    let extension = Section::composite(section_id::EXTENSION, 0, vec![skin]);
    let clump = Section::composite(section_id::CLUMP, 0, vec![extension]);

    let skin_ref = clump.find_first(section_id::SKIN_PLG).expect("skin");
    let parent = clump.parent_of(skin_ref).expect("parent");
    assert_eq!(parent.header.id, section_id::EXTENSION);
    assert!(clump.parent_of(&clump).is_none());
}

fn point_light() -> Light {
    Light {
        idx: 3,
        kind: LightKind::Point,
        color: Color::new(1.0, 0.5, 0.25, 1.0),
        flags: rwbs::chunks::light::LIGHT_ATOMICS,
        pos: Vec3::new(10.0, 20.0, 30.0),
        vec: Vec3::default(),
        radius: 45.5,
    }
}
