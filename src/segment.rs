//! The eight segments of a 7-segment display, dot included.
//!
//! Segments have a fixed canonical order: the dot first, then A through G. In the
//! reference ("alphabetical") encoding used by the bundled glyph sets, the segment at
//! canonical index `i` occupies bit `7 - i`, which is the wiring described by the map
//! string `"@ABCDEFG"`.

/// The number of segments per digit, including the dot.
pub const SEGMENT_COUNT: usize = 8;

/// The most significant bit index of a shift register output byte.
pub const MSB: u8 = 7;

/// One controllable element of a 7-segment display.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Decimal point, written as `'@'` in a map string.
    Dot,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    /// All segments in canonical order.
    pub const ALL: [Self; SEGMENT_COUNT] = [
        Self::Dot,
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    /// The seven lettered segments in canonical order.
    pub const LETTERS: [Self; SEGMENT_COUNT - 1] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    /// Position of the segment in canonical order (dot = 0, G = 7).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Map string symbol of the segment.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Dot => '@',
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
        }
    }

    /// Parses an (already upper-cased) map string symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '@' => Some(Self::Dot),
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            _ => None,
        }
    }

    /// Bit index of the segment in the reference encoding.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::arithmetic_side_effects,
        reason = "index() is at most 7"
    )]
    pub const fn reference_bit(self) -> u8 {
        MSB - self.index() as u8
    }

    /// Single-bit mask of the segment in the reference encoding.
    #[must_use]
    pub const fn reference_mask(self) -> u8 {
        1 << self.reference_bit()
    }
}
