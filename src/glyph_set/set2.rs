use super::{Glyph, GlyphSet, GlyphSetId};

/// Drops letters that have no passable 7-segment form (K, M, V, W, X).
pub(super) static GLYPH_SET: GlyphSet = GlyphSet::new(GlyphSetId::Set2, &GLYPHS);

static GLYPHS: [Glyph; 35] = [
    // Digits
    Glyph::new(0b_0111_1110, '0'),
    Glyph::new(0b_0011_0000, '1'),
    Glyph::new(0b_0110_1101, '2'),
    Glyph::new(0b_0111_1001, '3'),
    Glyph::new(0b_0011_0011, '4'),
    Glyph::new(0b_0101_1011, '5'),
    Glyph::new(0b_0101_1111, '6'),
    Glyph::new(0b_0111_0000, '7'),
    Glyph::new(0b_0111_1111, '8'),
    Glyph::new(0b_0111_1011, '9'),
    // Letters
    Glyph::new(0b_0111_0111, 'A'),
    Glyph::new(0b_0001_1111, 'B'), // like 'b'
    Glyph::new(0b_0100_1110, 'C'),
    Glyph::new(0b_0011_1101, 'D'), // like 'd'
    Glyph::new(0b_0100_1111, 'E'),
    Glyph::new(0b_0100_0111, 'F'),
    Glyph::new(0b_0101_1110, 'G'),
    Glyph::new(0b_0011_0111, 'H'),
    Glyph::new(0b_0011_0000, 'I'), // same as '1'
    Glyph::new(0b_0011_1100, 'J'),
    Glyph::new(0b_0000_1110, 'L'),
    Glyph::new(0b_0001_0101, 'N'), // like 'n'
    Glyph::new(0b_0001_1101, 'O'), // like 'o'
    Glyph::new(0b_0110_0111, 'P'),
    Glyph::new(0b_0111_0011, 'Q'), // like 'q'
    Glyph::new(0b_0000_0101, 'R'), // like 'r'
    Glyph::new(0b_0101_1011, 'S'),
    Glyph::new(0b_0000_1111, 'T'), // like 't'
    Glyph::new(0b_0011_1110, 'U'),
    Glyph::new(0b_0011_1011, 'Y'),
    Glyph::new(0b_0110_1101, 'Z'),
    // Symbols
    Glyph::new(0b_0000_0001, '-'),
    Glyph::new(0b_0000_1001, '='),
    Glyph::new(0b_0110_0011, '*'), // degree sign
    Glyph::new(0b_0000_1000, '_'),
];
