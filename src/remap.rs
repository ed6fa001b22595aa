//! Scatters reference segment patterns onto the physical wiring.

use core::ops::Index;

use heapless::Vec;

use crate::bit_pos::BitPositions;
use crate::glyph_set::{GlyphSet, MAX_GLYPH_COUNT};
use crate::segment::Segment;

/// Electrical polarity of the display's common pin.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Segments light when driven high. Output bytes are used as mapped.
    #[default]
    CommonCathode,
    /// Segments light when driven low. Output bytes are inverted.
    CommonAnode,
}

impl Polarity {
    /// Converts a common-cathode byte to this polarity.
    #[must_use]
    pub const fn apply(self, cathode_bits: u8) -> u8 {
        match self {
            Self::CommonCathode => cathode_bits,
            Self::CommonAnode => !cathode_bits,
        }
    }
}

/// Wiring-specific output bytes, one per glyph, in glyph set order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputTable(Vec<u8, MAX_GLYPH_COUNT>);

impl OutputTable {
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &u8> {
        self.0.iter()
    }
}

impl Index<usize> for OutputTable {
    type Output = u8;

    #[expect(clippy::indexing_slicing, reason = "Panics on out-of-range, as slices do")]
    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

/// Maps one reference byte to common-cathode output bits.
///
/// Only the lettered segments are read; the reference dot bit is ignored and the
/// output dot bit is left clear.
#[must_use]
pub fn remap_byte(reference: u8, bit_positions: &BitPositions) -> u8 {
    Segment::LETTERS.into_iter().fold(0, |bits, segment| {
        let mask = bit_positions.mask(segment);
        if reference & segment.reference_mask() == 0 {
            bits & !mask
        } else {
            bits | mask
        }
    })
}

/// Builds the output table for `glyph_set` under `bit_positions` and `polarity`.
///
/// ```
/// use segmap595::{BitPositions, GlyphSetId, Polarity, remap};
///
/// let glyph_set = GlyphSetId::Set1.glyph_set();
/// let bit_positions = BitPositions::resolve("ABCDEFG@")?;
/// let output = remap(glyph_set, &bit_positions, Polarity::CommonCathode);
/// let eight = glyph_set.index_of('8').expect("set 1 has '8'");
/// assert_eq!(output.get(eight), Some(0b_1111_1110));
/// # Ok::<(), segmap595::Error>(())
/// ```
#[must_use]
pub fn remap(
    glyph_set: &GlyphSet,
    bit_positions: &BitPositions,
    polarity: Polarity,
) -> OutputTable {
    // GlyphSet::new rejects sets longer than MAX_GLYPH_COUNT, so collecting cannot overflow.
    OutputTable(
        glyph_set
            .iter()
            .map(|glyph| polarity.apply(remap_byte(glyph.reference, bit_positions)))
            .collect(),
    )
}
