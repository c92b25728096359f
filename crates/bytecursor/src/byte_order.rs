use core::fmt;
use core::str::FromStr;

use crate::CursorError;

/// Byte order used to assemble and decompose multi-byte values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    LittleEndian,
    /// Most significant byte first.
    BigEndian,
}

impl ByteOrder {
    /// Byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::LittleEndian;

    /// Byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::BigEndian;

    /// Returns `true` for [`ByteOrder::LittleEndian`].
    #[must_use]
    #[inline]
    pub const fn is_little_endian(self) -> bool {
        matches!(self, Self::LittleEndian)
    }

    /// Returns `true` for [`ByteOrder::BigEndian`].
    #[must_use]
    #[inline]
    pub const fn is_big_endian(self) -> bool {
        matches!(self, Self::BigEndian)
    }

    /// Returns the other byte order.
    #[must_use]
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Self::LittleEndian => Self::BigEndian,
            Self::BigEndian => Self::LittleEndian,
        }
    }

    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::LittleEndian => "little-endian",
            Self::BigEndian => "big-endian",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ByteOrder {
    type Err = CursorError;

    /// Parses `little`, `le`, `little-endian`, `big`, `be` or `big-endian`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let is_any_of = |candidates: &[&str]| candidates.iter().any(|c| c.eq_ignore_ascii_case(s));

        if s.is_empty() {
            Err(CursorError::invalid_argument(function!(), "byte_order", "missing value"))
        } else if is_any_of(&["little", "le", "little-endian", "little_endian", "littleendian"]) {
            Ok(Self::LittleEndian)
        } else if is_any_of(&["big", "be", "big-endian", "big_endian", "bigendian"]) {
            Ok(Self::BigEndian)
        } else {
            Err(CursorError::invalid_argument(
                function!(),
                "byte_order",
                "expected `little-endian` or `big-endian`",
            ))
        }
    }
}
