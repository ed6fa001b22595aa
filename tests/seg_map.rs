//! Host-level tests for the mapping session.

use segmap595::{
    BitPositions, Error, GlyphSetId, INVALID_DOT_BIT_POS, MapStr, Polarity, SegMap, Segment,
    Status,
};

/// Index of `ch` in the session's glyph set; panics if the set lacks it.
fn index_of(seg_map: &SegMap, ch: char) -> usize {
    seg_map
        .glyph_set()
        .and_then(|id| id.glyph_set().index_of(ch))
        .unwrap_or_else(|| panic!("glyph {ch:?} not in set"))
}

fn assert_sentinels(seg_map: &SegMap) {
    assert!(!seg_map.is_valid());
    assert_eq!(seg_map.mapped_byte(0), 0);
    assert_eq!(seg_map.mapped_byte_for('8'), 0);
    assert_eq!(seg_map.mapped_byte_for('0'), 0);
    assert_eq!(seg_map.dot_bit_pos(), INVALID_DOT_BIT_POS);
    assert_eq!(seg_map.glyph_count(), 0);
    assert_eq!(seg_map.map_str(), None);
    assert_eq!(seg_map.bit_positions(), None);
    assert_eq!(seg_map.output_table(), None);
    assert_eq!(seg_map.polarity(), None);
    assert_eq!(seg_map.glyph_set(), None);
    assert_eq!(seg_map.glyphs().next(), None);
}

#[test]
fn scenario_a_common_cathode_eight() {
    let mut seg_map = SegMap::new();
    seg_map
        .load("ABCDEFG@", Polarity::CommonCathode)
        .expect("valid map string");
    assert_eq!(seg_map.status(), Status::Valid);
    assert_eq!(seg_map.mapped_byte_for('8'), 0b_1111_1110);
    assert_eq!(seg_map.mapped_byte_for('8'), 254);
    assert_eq!(seg_map.mapped_byte(index_of(&seg_map, '8')), 254);
    assert_eq!(seg_map.dot_bit_pos(), 0);
}

#[test]
fn scenario_b_common_anode_eight() {
    let mut seg_map = SegMap::new();
    seg_map
        .load("ABCDEFG@", Polarity::CommonAnode)
        .expect("valid map string");
    assert_eq!(seg_map.mapped_byte_for('8'), 0b_0000_0001);
}

#[test]
fn scenario_c_bad_map_strings_leave_sentinels() {
    let mut seg_map = SegMap::new();
    for (raw, expected) in [
        ("AABCDEFG", Error::DuplicateChar),
        ("ZABCDEFG", Error::InvalidChar),
        ("@ABCDEF", Error::BadLength),
    ] {
        seg_map
            .load("@ABCDEFG", Polarity::CommonCathode)
            .expect("valid map string");
        assert!(seg_map.is_valid());

        assert_eq!(seg_map.load(raw, Polarity::CommonCathode), Err(expected));
        assert_eq!(seg_map.status(), Status::Invalid(expected));
        assert_eq!(seg_map.status().code(), expected.code());
        assert_sentinels(&seg_map);
    }
}

#[test]
fn scenario_d_absent_character_returns_zero() {
    let mut seg_map = SegMap::new();
    seg_map
        .load_with("@ABCDEFG", Polarity::CommonCathode, GlyphSetId::Set2)
        .expect("valid map string");
    let glyph_set = GlyphSetId::Set2.glyph_set();
    let absent = ['M', 'W', '!', '#', ' ']
        .into_iter()
        .find(|&ch| glyph_set.index_of(ch).is_none())
        .expect("set 2 lacks at least one of these");
    assert!(seg_map.is_valid());
    assert_eq!(seg_map.mapped_byte_for(absent), 0);
    // Out-of-range index is a sentinel too.
    assert_eq!(seg_map.mapped_byte(seg_map.glyph_count()), 0);
}

#[test]
fn uninitialized_session() {
    let seg_map = SegMap::new();
    assert_eq!(seg_map.status(), Status::Uninitialized);
    assert_sentinels(&seg_map);
}

#[test]
fn identity_map_string_reproduces_reference() {
    for id in GlyphSetId::ALL {
        let mut seg_map = SegMap::new();
        seg_map
            .load_with(MapStr::IDENTITY, Polarity::CommonCathode, id)
            .expect("valid map string");
        assert_eq!(seg_map.bit_positions(), Some(&BitPositions::IDENTITY));
        for (glyph, (ch, bits)) in id.glyph_set().iter().zip(seg_map.glyphs()) {
            assert_eq!(glyph.ch, ch);
            assert_eq!(glyph.reference, bits, "glyph {ch:?}");
        }
    }
}

#[test]
fn case_insensitive_map_string() {
    let mut upper = SegMap::new();
    let mut lower = SegMap::new();
    upper
        .load("@ABCDEFG", Polarity::CommonCathode)
        .expect("valid map string");
    lower
        .load("@abcdefg", Polarity::CommonCathode)
        .expect("valid map string");
    assert_eq!(upper.map_str(), lower.map_str());
    assert_eq!(upper.bit_positions(), lower.bit_positions());
    assert_eq!(upper.output_table(), lower.output_table());
}

#[test]
fn character_lookup_ignores_case() {
    let mut seg_map = SegMap::new();
    seg_map
        .load("GFEDCBA@", Polarity::CommonCathode)
        .expect("valid map string");
    assert_ne!(seg_map.mapped_byte_for('A'), 0);
    assert_eq!(seg_map.mapped_byte_for('a'), seg_map.mapped_byte_for('A'));
}

#[test]
fn polarities_are_complements() {
    for raw in ["ABCDEFG@", "@GFEDCBA", "DC@EFBAG"] {
        let mut cathode = SegMap::new();
        let mut anode = SegMap::new();
        cathode
            .load_with(raw, Polarity::CommonCathode, GlyphSetId::Set1)
            .expect("valid map string");
        anode
            .load_with(raw, Polarity::CommonAnode, GlyphSetId::Set1)
            .expect("valid map string");
        assert_eq!(cathode.glyph_count(), anode.glyph_count());
        for index in 0..cathode.glyph_count() {
            assert_eq!(cathode.mapped_byte(index), !anode.mapped_byte(index));
        }
    }
}

#[test]
fn dot_bit_is_clear_in_cathode_output() {
    let mut seg_map = SegMap::new();
    seg_map
        .load("C@AGBDFE", Polarity::CommonCathode)
        .expect("valid map string");
    let dot_mask = 1_u8 << seg_map.dot_bit_pos();
    assert_eq!(seg_map.dot_bit_pos(), 6);
    for (ch, bits) in seg_map.glyphs() {
        assert_eq!(bits & dot_mask, 0, "glyph {ch:?}");
    }
}

/// Calls `visit` once for each of the 8! orderings of `symbols` (Heap's algorithm).
#[allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]
fn for_each_permutation(mut symbols: [u8; 8], mut visit: impl FnMut(&str)) {
    let mut counters = [0_usize; 8];
    visit(core::str::from_utf8(&symbols).expect("ascii"));
    let mut level = 1;
    while level < symbols.len() {
        if counters[level] < level {
            let other = if level % 2 == 0 { 0 } else { counters[level] };
            symbols.swap(other, level);
            visit(core::str::from_utf8(&symbols).expect("ascii"));
            counters[level] += 1;
            level = 1;
        } else {
            counters[level] = 0;
            level += 1;
        }
    }
}

#[test]
fn every_permutation_maps_segments_to_distinct_bits() {
    let mut seg_map = SegMap::new();
    let mut count = 0_usize;
    for_each_permutation(*b"@ABCDEFG", |raw| {
        count += 1;
        seg_map
            .load(raw, Polarity::CommonCathode)
            .expect("valid map string");
        let bit_positions = seg_map.bit_positions().expect("valid session");

        let mut covered = 0_u8;
        for segment in Segment::ALL {
            covered |= bit_positions.mask(segment);
        }
        assert_eq!(covered, 0xFF, "{raw}");

        let dot_index = raw.find('@').expect("has a dot");
        assert_eq!(usize::from(seg_map.dot_bit_pos()), 7 - dot_index, "{raw}");

        // '8' lights every lettered segment.
        assert_eq!(
            seg_map.mapped_byte_for('8'),
            !bit_positions.mask(Segment::Dot),
            "{raw}"
        );
    });
    assert_eq!(count, 40_320);
}

#[test]
fn multibyte_map_string_is_bad_length() {
    let mut seg_map = SegMap::new();
    // Eight characters, nine bytes.
    assert_eq!(
        seg_map.load("@ABCDEF\u{e9}", Polarity::CommonCathode),
        Err(Error::BadLength)
    );
    assert_eq!(seg_map.status().code(), -4);
    assert_sentinels(&seg_map);

    // Seven characters, eight bytes.
    assert_eq!(
        seg_map.load("@ABCDE\u{e9}", Polarity::CommonCathode),
        Err(Error::InvalidChar)
    );
    assert_eq!(seg_map.status().code(), -5);
}

#[test]
fn reload_replaces_previous_mapping() {
    let mut seg_map = SegMap::new();
    seg_map
        .load("ABCDEFG@", Polarity::CommonCathode)
        .expect("valid map string");
    let first = seg_map.output_table().cloned();

    seg_map
        .load_with("@ABCDEFG", Polarity::CommonAnode, GlyphSetId::Set2)
        .expect("valid map string");
    assert_ne!(seg_map.output_table().cloned(), first);
    assert_eq!(seg_map.map_str(), Some("@ABCDEFG"));
    assert_eq!(seg_map.polarity(), Some(Polarity::CommonAnode));
    assert_eq!(seg_map.glyph_count(), GlyphSetId::Set2.glyph_set().len());

    // Loading the same inputs again is idempotent.
    let before = seg_map.clone();
    seg_map
        .load_with("@ABCDEFG", Polarity::CommonAnode, GlyphSetId::Set2)
        .expect("valid map string");
    assert_eq!(seg_map, before);
}

#[test]
fn unknown_glyph_set_number() {
    let mut seg_map = SegMap::new();
    seg_map
        .load("@ABCDEFG", Polarity::CommonCathode)
        .expect("valid map string");
    assert_eq!(
        seg_map.load_with("@ABCDEFG", Polarity::CommonCathode, 0_u32),
        Err(Error::UnknownGlyphSet)
    );
    assert_sentinels(&seg_map);
}

#[test]
fn missing_map_string() {
    let mut seg_map = SegMap::new();
    assert_eq!(
        seg_map.load(None, Polarity::CommonAnode),
        Err(Error::NullInput)
    );
    assert_eq!(seg_map.status().code(), -3);
    assert_sentinels(&seg_map);
}
