//! Bundled glyph sets: reference segment patterns and the characters they stand for.
//!
//! Reference bytes are written as if the map string were `"@ABCDEFG"`, so bit 7 is the
//! dot and bit 0 is segment G. The dot bit is always 0; callers light the dot themselves
//! through [`SegMap::dot_bit_pos`](crate::SegMap::dot_bit_pos).
//!
//! Which characters a set supports is a property of its data. Look a character up with
//! [`GlyphSet::index_of`] rather than assuming it is present.

mod set1;
mod set2;

use crate::{Error, Result};

/// Highest glyph count among the bundled glyph sets.
pub const MAX_GLYPH_COUNT: usize = 40;

/// One glyph: a reference segment pattern and the character it represents.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Segment pattern in the reference encoding.
    pub reference: u8,
    /// Character the pattern represents (upper case for letters).
    pub ch: char,
}

impl Glyph {
    #[must_use]
    pub const fn new(reference: u8, ch: char) -> Self {
        Self { reference, ch }
    }
}

/// Selects one of the bundled glyph sets.
///
/// Numbered from 1, as in `GlyphSetId::try_from(2_u8)`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSetId {
    /// 40 glyphs: digits, A–Z (some only sketchy), `-`, `=`, degree (`*`), `_`.
    #[default]
    Set1,
    /// 35 glyphs: like [`GlyphSetId::Set1`] without K, M, V, W and X, and with closer
    /// renditions of H and I.
    Set2,
}

impl GlyphSetId {
    /// All bundled glyph sets.
    pub const ALL: [Self; 2] = [Self::Set1, Self::Set2];

    /// 1-based number of the glyph set.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Set1 => 1,
            Self::Set2 => 2,
        }
    }

    /// The glyph data behind this identifier.
    #[must_use]
    pub fn glyph_set(self) -> &'static GlyphSet {
        match self {
            Self::Set1 => &set1::GLYPH_SET,
            Self::Set2 => &set2::GLYPH_SET,
        }
    }
}

impl TryFrom<u8> for GlyphSetId {
    type Error = Error;

    fn try_from(number: u8) -> Result<Self> {
        match number {
            1 => Ok(Self::Set1),
            2 => Ok(Self::Set2),
            _ => Err(Error::UnknownGlyphSet),
        }
    }
}

impl TryFrom<u32> for GlyphSetId {
    type Error = Error;

    fn try_from(number: u32) -> Result<Self> {
        u8::try_from(number)
            .map_err(|_| Error::UnknownGlyphSet)
            .and_then(<Self as TryFrom<u8>>::try_from)
    }
}

/// An ordered, compiled-in list of glyphs.
#[derive(Debug, PartialEq, Eq)]
pub struct GlyphSet {
    id: GlyphSetId,
    glyphs: &'static [Glyph],
}

impl GlyphSet {
    pub(crate) const fn new(id: GlyphSetId, glyphs: &'static [Glyph]) -> Self {
        assert!(glyphs.len() <= MAX_GLYPH_COUNT, "glyph set too large");
        Self { id, glyphs }
    }

    #[must_use]
    pub const fn id(&self) -> GlyphSetId {
        self.id
    }

    /// Number of glyphs in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    #[must_use]
    pub const fn glyphs(&self) -> &'static [Glyph] {
        self.glyphs
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Glyph> {
        self.glyphs.iter()
    }

    /// Index of the glyph for `ch`, ignoring ASCII case.
    #[must_use]
    pub fn index_of(&self, ch: char) -> Option<usize> {
        let ch = ch.to_ascii_uppercase();
        self.glyphs.iter().position(|glyph| glyph.ch == ch)
    }

    /// Glyph for `ch`, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, ch: char) -> Option<&'static Glyph> {
        self.index_of(ch).and_then(|index| self.glyphs.get(index))
    }
}
