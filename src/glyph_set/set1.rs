use super::{Glyph, GlyphSet, GlyphSetId};

/// Some glyphs resemble their characters, some are sketchy, a few are arbitrary.
pub(super) static GLYPH_SET: GlyphSet = GlyphSet::new(GlyphSetId::Set1, &GLYPHS);

static GLYPHS: [Glyph; 40] = [
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
    Glyph::new(0b_0101_1110, 'G'), // no short horizontal stroke
    Glyph::new(0b_0001_0111, 'H'), // like 'h', 'X' takes the full 'H'
    Glyph::new(0b_0001_0000, 'I'), // short stroke, not '1'
    Glyph::new(0b_0011_1100, 'J'),
    Glyph::new(0b_0101_0111, 'K'), // barely
    Glyph::new(0b_0000_1110, 'L'),
    Glyph::new(0b_0101_0101, 'M'), // 'n' with a bar over it
    Glyph::new(0b_0001_0101, 'N'), // like 'n'
    Glyph::new(0b_0001_1101, 'O'), // like 'o', distinct from zero
    Glyph::new(0b_0110_0111, 'P'),
    Glyph::new(0b_0111_0011, 'Q'), // like 'q'
    Glyph::new(0b_0000_0101, 'R'), // like 'r'
    Glyph::new(0b_0101_1011, 'S'), // same as '5'
    Glyph::new(0b_0000_1111, 'T'), // like 't'
    Glyph::new(0b_0011_1110, 'U'),
    Glyph::new(0b_0001_1100, 'V'), // like 'u'
    Glyph::new(0b_0010_1011, 'W'), // raised 'u' over a bar
    Glyph::new(0b_0011_0111, 'X'), // like 'H'
    Glyph::new(0b_0011_1011, 'Y'),
    Glyph::new(0b_0110_1101, 'Z'), // same as '2'
    // Symbols
    Glyph::new(0b_0000_0001, '-'),
    Glyph::new(0b_0000_1001, '='),
    Glyph::new(0b_0110_0011, '*'), // degree sign
    Glyph::new(0b_0000_1000, '_'),
];
