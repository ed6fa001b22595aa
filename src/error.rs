use core::convert::Infallible;

use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// Every variant is terminal for the [`SegMap::load`](crate::SegMap::load) call that
/// produced it. The session records it in [`Status::Invalid`](crate::Status::Invalid).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The glyph set selector does not name a bundled glyph set.
    #[display("Unknown glyph set")]
    UnknownGlyphSet,

    /// No map string was given.
    #[display("Map string is missing")]
    NullInput,

    /// The map string is not exactly 8 characters long.
    #[display("Map string must be exactly 8 characters long")]
    BadLength,

    /// The map string holds a character other than '@' and 'A'..='G'.
    #[display("Map string contains an invalid character")]
    InvalidChar,

    /// A segment symbol appears more than once in the map string.
    #[display("Map string contains a duplicated character")]
    DuplicateChar,

    /// Not every segment received a bit position.
    #[display("Bit position could not be resolved for every segment")]
    BitPositionIncomplete,
}

impl Error {
    /// Firmware-facing status code of this error (always negative).
    ///
    /// `-1` is reserved for an uninitialized session, see [`Status::code`](crate::Status::code).
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::UnknownGlyphSet => -2,
            Self::NullInput => -3,
            Self::BadLength => -4,
            Self::InvalidChar => -5,
            Self::DuplicateChar => -6,
            Self::BitPositionIncomplete => -7,
        }
    }
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
