//! The mapping session: validates a map string and keeps the resulting output table.
//!
//! See [`SegMap`] for usage examples.

use crate::bit_pos::BitPositions;
use crate::glyph_set::{GlyphSet, GlyphSetId};
use crate::map_str::MapStr;
use crate::remap::{OutputTable, Polarity, remap};
use crate::segment::MSB;
use crate::{Error, Result};

/// Dot bit position reported by a session that holds no valid mapping.
pub const INVALID_DOT_BIT_POS: u8 = MSB + 1;

/// Observable state of a [`SegMap`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// No `load` has run yet.
    #[default]
    Uninitialized,
    /// The last `load` succeeded.
    Valid,
    /// The last `load` failed with this error.
    Invalid(Error),
}

impl Status {
    /// Firmware-facing status code: `0` when valid, negative otherwise.
    ///
    /// `-1` means uninitialized; errors use [`Error::code`].
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Valid => 0,
            Self::Uninitialized => -1,
            Self::Invalid(error) => error.code(),
        }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Everything derived by one successful `load`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Mapping {
    map_str: MapStr,
    glyph_set: &'static GlyphSet,
    bit_positions: BitPositions,
    output_table: OutputTable,
    polarity: Polarity,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum State {
    #[default]
    Uninitialized,
    Valid(Mapping),
    Invalid(Error),
}

/// A 74HC595 → 7-segment mapping session.
///
/// [`SegMap::load`] validates a map string, resolves the bit position of every segment
/// and builds the output byte for every glyph of the chosen glyph set. Accessors then
/// return those bytes, or a sentinel (`0`, `None`, [`INVALID_DOT_BIT_POS`]) while the
/// session holds no valid mapping. A failing `load` drops the previous mapping.
///
/// Sessions are plain values: create as many as needed. Shared use across threads
/// needs outside locking, since `load` takes `&mut self`.
///
/// # Examples
/// ```
/// use segmap595::{Error, GlyphSetId, Polarity, SegMap, Status};
///
/// let mut seg_map = SegMap::new();
/// assert_eq!(seg_map.status(), Status::Uninitialized);
///
/// // Q7 drives segment A, ..., Q1 drives segment G, Q0 drives the dot.
/// seg_map.load("ABCDEFG@", Polarity::CommonCathode)?;
/// assert_eq!(seg_map.mapped_byte_for('8'), 0b_1111_1110);
/// assert_eq!(seg_map.dot_bit_pos(), 0);
///
/// // Light the dot as well.
/// let eight_with_dot = seg_map.mapped_byte_for('8') | 1 << seg_map.dot_bit_pos();
/// assert_eq!(eight_with_dot, 0b_1111_1111);
///
/// // A bad map string invalidates the session.
/// assert_eq!(
///     seg_map.load_with("ABCDEFGA", Polarity::CommonAnode, GlyphSetId::Set2),
///     Err(Error::DuplicateChar)
/// );
/// assert_eq!(seg_map.mapped_byte_for('8'), 0);
/// assert_eq!(seg_map.status().code(), -6);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegMap {
    state: State,
}

impl SegMap {
    /// Creates an uninitialized session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: State::Uninitialized,
        }
    }

    /// Loads a map string for the default glyph set ([`GlyphSetId::Set1`]).
    ///
    /// `map_str` is a `&str`, or `None` for a missing map string.
    ///
    /// # Errors
    /// See [`SegMap::load_with`].
    pub fn load<'a>(
        &mut self,
        map_str: impl Into<Option<&'a str>>,
        polarity: Polarity,
    ) -> Result<()> {
        self.load_with(map_str, polarity, GlyphSetId::default())
    }

    /// Loads a map string, choosing a polarity and a glyph set.
    ///
    /// `glyph_set` is a [`GlyphSetId`] or its 1-based number (`u8` or `u32`). Calling
    /// again fully replaces the previous mapping, whatever the outcome.
    ///
    /// # Errors
    /// The first failing step is returned and recorded in [`SegMap::status`]:
    /// - [`Error::UnknownGlyphSet`] if a glyph set number names no bundled set.
    /// - [`Error::NullInput`], [`Error::BadLength`], [`Error::InvalidChar`] or
    ///   [`Error::DuplicateChar`] from [`MapStr::parse`].
    /// - [`Error::BitPositionIncomplete`] from [`BitPositions::resolve`].
    pub fn load_with<'a, G>(
        &mut self,
        map_str: impl Into<Option<&'a str>>,
        polarity: Polarity,
        glyph_set: G,
    ) -> Result<()>
    where
        G: TryInto<GlyphSetId>,
        Error: From<G::Error>,
    {
        match Self::build(map_str.into(), polarity, glyph_set) {
            Ok(mapping) => {
                #[cfg(feature = "defmt")]
                defmt::info!(
                    "SegMap loaded {=str} (glyph set {}, {})",
                    mapping.map_str.as_str(),
                    mapping.glyph_set.id(),
                    mapping.polarity
                );
                self.state = State::Valid(mapping);
                Ok(())
            }
            Err(error) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("SegMap load failed: {}", error);
                self.state = State::Invalid(error);
                Err(error)
            }
        }
    }

    fn build<G>(map_str: Option<&str>, polarity: Polarity, glyph_set: G) -> Result<Mapping>
    where
        G: TryInto<GlyphSetId>,
        Error: From<G::Error>,
    {
        let glyph_set_id: GlyphSetId = glyph_set.try_into()?;
        let glyph_set = glyph_set_id.glyph_set();
        let map_str = MapStr::parse(map_str)?;
        let bit_positions = BitPositions::resolve(&map_str)?;
        let output_table = remap(glyph_set, &bit_positions, polarity);
        Ok(Mapping {
            map_str,
            glyph_set,
            bit_positions,
            output_table,
            polarity,
        })
    }

    const fn mapping(&self) -> Option<&Mapping> {
        match &self.state {
            State::Valid(mapping) => Some(mapping),
            State::Uninitialized | State::Invalid(_) => None,
        }
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        match &self.state {
            State::Uninitialized => Status::Uninitialized,
            State::Valid(_) => Status::Valid,
            State::Invalid(error) => Status::Invalid(*error),
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.status().is_valid()
    }

    /// Output byte at `index` in glyph set order, or `0` if invalid or out of range.
    #[must_use]
    pub fn mapped_byte(&self, index: usize) -> u8 {
        self.mapping()
            .and_then(|mapping| mapping.output_table.get(index))
            .unwrap_or(0)
    }

    /// Output byte for `ch` (ASCII case ignored), or `0` if invalid or `ch` has no
    /// glyph in the chosen set.
    #[must_use]
    pub fn mapped_byte_for(&self, ch: char) -> u8 {
        self.mapping()
            .and_then(|mapping| {
                let index = mapping.glyph_set.index_of(ch)?;
                mapping.output_table.get(index)
            })
            .unwrap_or(0)
    }

    /// Physical bit of the dot segment, or [`INVALID_DOT_BIT_POS`] if invalid.
    #[must_use]
    pub fn dot_bit_pos(&self) -> u8 {
        self.mapping()
            .map_or(INVALID_DOT_BIT_POS, |mapping| mapping.bit_positions.dot())
    }

    /// Number of glyphs in the chosen set, or `0` if invalid.
    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.mapping()
            .map_or(0, |mapping| mapping.glyph_set.len())
    }

    /// The normalized (upper-case) map string, or `None` if invalid.
    #[must_use]
    pub fn map_str(&self) -> Option<&str> {
        self.mapping().map(|mapping| mapping.map_str.as_str())
    }

    #[must_use]
    pub fn bit_positions(&self) -> Option<&BitPositions> {
        self.mapping().map(|mapping| &mapping.bit_positions)
    }

    #[must_use]
    pub fn output_table(&self) -> Option<&OutputTable> {
        self.mapping().map(|mapping| &mapping.output_table)
    }

    #[must_use]
    pub fn polarity(&self) -> Option<Polarity> {
        self.mapping().map(|mapping| mapping.polarity)
    }

    #[must_use]
    pub fn glyph_set(&self) -> Option<GlyphSetId> {
        self.mapping().map(|mapping| mapping.glyph_set.id())
    }

    /// `(character, output byte)` pairs in glyph set order; empty if invalid.
    pub fn glyphs(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.mapping().into_iter().flat_map(|mapping| {
            mapping
                .glyph_set
                .iter()
                .zip(mapping.output_table.iter())
                .map(|(glyph, &bits)| (glyph.ch, bits))
        })
    }
}
