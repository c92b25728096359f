use core::fmt;

/// Result type returned by fallible cursor and writer operations.
pub type CursorResult<T> = Result<T, CursorError>;

/// Error raised by [`ByteCursor`](crate::ByteCursor) and [`ByteWriter`](crate::ByteWriter).
///
/// Holds the name of the failing operation along with the domain-specific kind.
/// An operation returning this error has not mutated its receiver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CursorError {
    context: &'static str,
    kind: CursorErrorKind,
}

/// What went wrong.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CursorErrorKind {
    /// The byte range required by the operation falls outside of the underlying storage.
    Bounds {
        /// First index (or target position) requested.
        offset: usize,
        /// Number of bytes requested from `offset`.
        requested: usize,
        /// Length of the underlying storage.
        length: usize,
    },
    /// A required configuration value is missing or malformed.
    InvalidArgument {
        /// Name of the argument.
        name: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl CursorError {
    #[cold]
    #[must_use]
    pub(crate) const fn bounds(context: &'static str, offset: usize, requested: usize, length: usize) -> Self {
        Self {
            context,
            kind: CursorErrorKind::Bounds {
                offset,
                requested,
                length,
            },
        }
    }

    #[cold]
    #[must_use]
    pub(crate) const fn invalid_argument(context: &'static str, name: &'static str, reason: &'static str) -> Self {
        Self {
            context,
            kind: CursorErrorKind::InvalidArgument { name, reason },
        }
    }

    /// Name of the operation which failed.
    #[must_use]
    #[inline]
    pub const fn context(&self) -> &'static str {
        self.context
    }

    /// Returns the error kind.
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> &CursorErrorKind {
        &self.kind
    }

    /// Returns `true` for out-of-bounds errors.
    #[must_use]
    #[inline]
    pub const fn is_bounds(&self) -> bool {
        matches!(self.kind, CursorErrorKind::Bounds { .. })
    }

    /// Returns `true` for invalid argument errors.
    #[must_use]
    #[inline]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, CursorErrorKind::InvalidArgument { .. })
    }
}

impl fmt::Display for CursorErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounds {
                offset,
                requested,
                length,
            } => write!(
                f,
                "out of bounds: {requested} byte(s) at offset {offset} do not fit in a sequence of {length} byte(s)"
            ),
            Self::InvalidArgument { name, reason } => write!(f, "invalid argument `{name}`: {reason}"),
        }
    }
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.context, self.kind)
    }
}

#[cfg(feature = "std")]
impl core::error::Error for CursorError {}

#[cfg(feature = "std")]
impl From<CursorError> for std::io::Error {
    fn from(error: CursorError) -> Self {
        let kind = match error.kind {
            CursorErrorKind::Bounds { .. } => std::io::ErrorKind::UnexpectedEof,
            CursorErrorKind::InvalidArgument { .. } => std::io::ErrorKind::InvalidInput,
        };

        Self::new(kind, error)
    }
}
