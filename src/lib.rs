//! Maps the outputs of a 74HC595 shift register to the segments of a 7-segment display.
//!
//! Describe the wiring with an 8-character map string, then read one ready-made output
//! byte per glyph. See [`SegMap`] for the main entry point and usage examples.
#![cfg_attr(not(test), no_std)]

mod bit_pos;
mod bits;
mod error;
pub mod glyph_set;
mod map_str;
mod remap;
mod seg_map;
pub mod segment;

// Re-export commonly used items
pub use bit_pos::BitPositions;
pub use bits::{BINARY_STRING_LEN, to_binary_string};
pub use error::{Error, Result};
pub use glyph_set::{Glyph, GlyphSet, GlyphSetId, MAX_GLYPH_COUNT};
pub use map_str::MapStr;
pub use remap::{OutputTable, Polarity, remap, remap_byte};
pub use seg_map::{INVALID_DOT_BIT_POS, SegMap, Status};
pub use segment::{MSB, SEGMENT_COUNT, Segment};
