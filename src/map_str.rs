//! Wiring descriptors ("map strings").
//!
//! A map string names, from left to right, the segment wired to each shift register
//! output from Q7 (bit 7) down to Q0 (bit 0). `'@'` stands for the dot. For example
//! `"ABCDEFG@"` puts segment A on bit 7 and the dot on bit 0.

use core::fmt;
use core::ops::Deref;
use core::str::FromStr;

use heapless::String;
use itertools::Itertools;

use crate::segment::{SEGMENT_COUNT, Segment};
use crate::{Error, Result};

/// A validated, upper-cased map string.
///
/// Holds each of `'@'` and `'A'..='G'` exactly once.
///
/// ```
/// use segmap595::MapStr;
///
/// let map_str: MapStr = "abcdefg@".parse()?;
/// assert_eq!(map_str.as_str(), "ABCDEFG@");
/// # Ok::<(), segmap595::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapStr(String<SEGMENT_COUNT>);

impl MapStr {
    /// The map string for which output bytes equal the reference bytes.
    pub const IDENTITY: &'static str = "@ABCDEFG";

    /// Validates and normalizes a map string.
    ///
    /// Lowercase `'a'..='g'` are accepted and stored upper-case.
    ///
    /// # Errors
    /// Checks run in this order and the first failure is returned:
    /// - [`Error::NullInput`] if `raw` is `None`.
    /// - [`Error::BadLength`] if `raw` is not exactly 8 bytes long.
    /// - [`Error::InvalidChar`] if a character is not `'@'` or `'A'..='G'`.
    /// - [`Error::DuplicateChar`] if a symbol appears more than once.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let raw = raw.ok_or(Error::NullInput)?;
        // Counted in bytes, so the normalized copy always fits its buffer.
        if raw.len() != SEGMENT_COUNT {
            return Err(Error::BadLength);
        }

        // Upper-casing 'a'..='g' keeps the byte length unchanged.
        let normalized: String<SEGMENT_COUNT> = raw
            .chars()
            .map(|ch| {
                if ('a'..='g').contains(&ch) {
                    ch.to_ascii_uppercase()
                } else {
                    ch
                }
            })
            .collect();

        if normalized
            .chars()
            .any(|ch| Segment::from_symbol(ch).is_none())
        {
            return Err(Error::InvalidChar);
        }

        if normalized
            .chars()
            .tuple_combinations()
            .any(|(left, right)| left == right)
        {
            return Err(Error::DuplicateChar);
        }

        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Segments in the order they appear, from bit 7 down to bit 0.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.0.chars().filter_map(Segment::from_symbol)
    }
}

impl Deref for MapStr {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for MapStr {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MapStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapStr {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        Self::parse(Some(raw))
    }
}

impl TryFrom<&str> for MapStr {
    type Error = Error;

    fn try_from(raw: &str) -> Result<Self> {
        Self::parse(Some(raw))
    }
}
