//! Segment → physical bit position table.

use core::ops::Index;

use crate::segment::{MSB, SEGMENT_COUNT, Segment};
use crate::{Error, Result};

/// Physical shift register bit for each segment, indexed in canonical segment order.
///
/// Always a permutation of `0..=7`.
///
/// ```
/// use segmap595::{BitPositions, Segment};
///
/// let bit_positions = BitPositions::resolve("ABCDEFG@")?;
/// assert_eq!(bit_positions[Segment::A], 7);
/// assert_eq!(bit_positions.dot(), 0);
/// # Ok::<(), segmap595::Error>(())
/// ```
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitPositions([u8; SEGMENT_COUNT]);

impl BitPositions {
    /// Bit positions for the map string `"@ABCDEFG"`.
    pub const IDENTITY: Self = Self([7, 6, 5, 4, 3, 2, 1, 0]);

    /// Derives bit positions from a map string.
    ///
    /// For each segment in canonical order, the first matching character at index `k`
    /// gives bit `7 - k`. Any string is accepted; a string that came through
    /// [`MapStr::parse`](crate::MapStr::parse) always resolves.
    ///
    /// # Errors
    /// Returns [`Error::BitPositionIncomplete`] if some segment symbol does not appear
    /// among the first 8 characters.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::arithmetic_side_effects,
        reason = "index < SEGMENT_COUNT, so it fits in u8 and MSB - index >= 0"
    )]
    pub fn resolve(descriptor: &str) -> Result<Self> {
        let mut positions = [u8::MAX; SEGMENT_COUNT];
        let mut resolved_count = 0_usize;

        for (segment, position) in Segment::ALL.into_iter().zip(positions.iter_mut()) {
            if let Some(index) = descriptor
                .chars()
                .take(SEGMENT_COUNT)
                .position(|ch| ch == segment.symbol())
            {
                *position = MSB - index as u8;
                resolved_count += 1;
            }
        }

        if resolved_count == SEGMENT_COUNT {
            Ok(Self(positions))
        } else {
            Err(Error::BitPositionIncomplete)
        }
    }

    /// Physical bit of `segment`.
    #[must_use]
    #[expect(clippy::indexing_slicing, reason = "Segment::index() < SEGMENT_COUNT")]
    pub const fn get(&self, segment: Segment) -> u8 {
        self.0[segment.index()]
    }

    /// Physical bit of the dot segment.
    #[must_use]
    pub const fn dot(&self) -> u8 {
        self.get(Segment::Dot)
    }

    #[must_use]
    pub const fn as_array(&self) -> &[u8; SEGMENT_COUNT] {
        &self.0
    }

    /// Single-bit output mask for `segment`.
    #[must_use]
    pub const fn mask(&self, segment: Segment) -> u8 {
        1 << self.get(segment)
    }
}

impl Index<Segment> for BitPositions {
    type Output = u8;

    #[expect(clippy::indexing_slicing, reason = "Segment::index() < SEGMENT_COUNT")]
    fn index(&self, segment: Segment) -> &u8 {
        &self.0[segment.index()]
    }
}
