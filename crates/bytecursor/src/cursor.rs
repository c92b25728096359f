use alloc::vec::Vec;
use core::mem::size_of;
use core::ops::Range;

use crate::{ByteOrder, CursorError, CursorResult, Exploration};

/// Generates the `read_*`, `peek_*` and `peek_offset_*` accessors of a fixed-width numeric type.
///
/// Bytes are assembled according to the byte order configured on the cursor at call time.
macro_rules! numeric_accessors {
    ($( $ty:ident => $read:ident, $peek:ident, $peek_offset:ident; )+) => {
        $(
            #[doc = concat!("Reads a `", stringify!($ty), "` in the configured byte order and advances past it.")]
            #[inline]
            pub fn $read(&mut self) -> CursorResult<$ty> {
                let bytes = self.array_at::<{ size_of::<$ty>() }>(function!(), 0)?;
                self.pos += size_of::<$ty>();
                Ok(match self.byte_order {
                    ByteOrder::LittleEndian => $ty::from_le_bytes(bytes),
                    ByteOrder::BigEndian => $ty::from_be_bytes(bytes),
                })
            }

            #[doc = concat!("Peeks a `", stringify!($ty), "` in the configured byte order without consuming it.")]
            #[inline]
            pub fn $peek(&self) -> CursorResult<$ty> {
                let bytes = self.array_at::<{ size_of::<$ty>() }>(function!(), 0)?;
                Ok(match self.byte_order {
                    ByteOrder::LittleEndian => $ty::from_le_bytes(bytes),
                    ByteOrder::BigEndian => $ty::from_be_bytes(bytes),
                })
            }

            #[doc = concat!("Peeks a `", stringify!($ty), "` located `delta` bytes past the current position.")]
            #[inline]
            pub fn $peek_offset(&self, delta: usize) -> CursorResult<$ty> {
                let bytes = self.array_at::<{ size_of::<$ty>() }>(function!(), delta)?;
                Ok(match self.byte_order {
                    ByteOrder::LittleEndian => $ty::from_le_bytes(bytes),
                    ByteOrder::BigEndian => $ty::from_be_bytes(bytes),
                })
            }
        )+
    };
}

/// A cursor reading fixed-width primitives and byte runs from an immutable byte sequence.
///
/// The cursor keeps a position (`0 <= pos <= len`) and a [`ByteOrder`] used to assemble multi-byte values.
/// `pos == len` is the exhausted state, reachable only by reading the last byte.
///
/// Three families of accessors are provided:
///
/// - `read_*` returns the value at the current position and advances past it,
/// - `peek_*` returns the value at the current position and leaves the position untouched,
/// - `peek_offset_*` returns the value located `delta` bytes after the current position, leaving it untouched.
///
/// A failing accessor never moves the cursor.
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    inner: &'a [u8],
    pos: usize,
    byte_order: ByteOrder,
}

impl<'a> ByteCursor<'a> {
    /// Creates a little-endian cursor positioned at the start of `bytes`.
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self::with_byte_order(ByteOrder::LittleEndian, bytes)
    }

    /// Creates a cursor positioned at the start of `bytes` using the given byte order.
    #[inline]
    pub const fn with_byte_order(byte_order: ByteOrder, bytes: &'a [u8]) -> Self {
        Self {
            inner: bytes,
            pos: 0,
            byte_order,
        }
    }

    /// Returns the current position.
    #[inline]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the byte order used for multi-byte values.
    #[inline]
    pub const fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Sets the byte order used by subsequent multi-byte accesses.
    #[inline]
    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
    }

    /// Returns the number of bytes remaining.
    #[inline]
    pub const fn len(&self) -> usize {
        self.inner.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no bytes remaining.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if there are no bytes remaining.
    #[inline]
    pub const fn eof(&self) -> bool {
        self.is_empty()
    }

    /// Returns a slice of the remaining bytes.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        self.inner.get(self.pos..).unwrap_or_default()
    }

    /// Returns the whole underlying byte sequence.
    #[inline]
    pub const fn inner(&self) -> &'a [u8] {
        self.inner
    }

    /// Moves the position forward by `count` bytes.
    ///
    /// At least one byte must remain readable at the new position: `pos + count < len`.
    pub fn skip(&mut self, count: usize) -> CursorResult<()> {
        match self.pos.checked_add(count) {
            Some(target) if target < self.inner.len() => {
                self.pos = target;
                Ok(())
            }
            _ => Err(bounds_err!(self.pos, count.saturating_add(1), self.inner.len())),
        }
    }

    /// Sets the position to `offset`, which must address an existing byte.
    pub fn jump(&mut self, offset: usize) -> CursorResult<()> {
        if offset < self.inner.len() {
            self.pos = offset;
            Ok(())
        } else {
            Err(bounds_err!(offset, 1, self.inner.len()))
        }
    }

    /// Reads the byte at the current position and advances past it.
    #[inline]
    pub fn read_u8(&mut self) -> CursorResult<u8> {
        let byte = self.byte_at(function!(), 0)?;
        self.pos += 1;
        Ok(byte)
    }

    /// Returns the byte at the current position without consuming it.
    #[inline]
    pub fn peek_u8(&self) -> CursorResult<u8> {
        self.byte_at(function!(), 0)
    }

    /// Moves the position forward by `delta` bytes, then returns the byte at the new position.
    ///
    /// The returned byte is not consumed: the position ends up on it, not past it.
    pub fn read_offset_u8(&mut self, delta: usize) -> CursorResult<u8> {
        let range = self.range_at(function!(), delta, 1)?;
        self.pos = range.start;
        Ok(self.inner[range.start])
    }

    /// Returns the byte located `delta` bytes after the current position.
    #[inline]
    pub fn peek_offset_u8(&self, delta: usize) -> CursorResult<u8> {
        self.byte_at(function!(), delta)
    }

    /// Reads a signed byte and advances past it.
    #[inline]
    pub fn read_i8(&mut self) -> CursorResult<i8> {
        let byte = self.byte_at(function!(), 0)?;
        self.pos += 1;
        Ok(i8::from_le_bytes([byte]))
    }

    /// Returns the signed byte at the current position without consuming it.
    #[inline]
    pub fn peek_i8(&self) -> CursorResult<i8> {
        self.byte_at(function!(), 0).map(|byte| i8::from_le_bytes([byte]))
    }

    /// Returns the signed byte located `delta` bytes after the current position.
    #[inline]
    pub fn peek_offset_i8(&self, delta: usize) -> CursorResult<i8> {
        self.byte_at(function!(), delta).map(|byte| i8::from_le_bytes([byte]))
    }

    /// Reads a boolean and advances past it.
    ///
    /// Only `0x01` decodes to `true`; any other value decodes to `false`.
    #[inline]
    pub fn read_bool(&mut self) -> CursorResult<bool> {
        let byte = self.byte_at(function!(), 0)?;
        self.pos += 1;
        Ok(byte == 0x01)
    }

    /// Returns the boolean at the current position without consuming it.
    #[inline]
    pub fn peek_bool(&self) -> CursorResult<bool> {
        self.byte_at(function!(), 0).map(|byte| byte == 0x01)
    }

    /// Returns the boolean located `delta` bytes after the current position.
    #[inline]
    pub fn peek_offset_bool(&self, delta: usize) -> CursorResult<bool> {
        self.byte_at(function!(), delta).map(|byte| byte == 0x01)
    }

    /// Reads a slice of `n` bytes and advances past it.
    #[inline]
    pub fn read_slice(&mut self, n: usize) -> CursorResult<&'a [u8]> {
        let range = self.range_at(function!(), 0, n)?;
        self.pos = range.end;
        Ok(&self.inner[range])
    }

    /// Returns a slice of the next `n` bytes without consuming them.
    #[inline]
    pub fn peek_slice(&self, n: usize) -> CursorResult<&'a [u8]> {
        let range = self.range_at(function!(), 0, n)?;
        Ok(&self.inner[range])
    }

    /// Copies `n` bytes from the current position into a new buffer and advances past them.
    pub fn read_bytes(&mut self, n: usize) -> CursorResult<Vec<u8>> {
        let range = self.range_at(function!(), 0, n)?;
        self.pos = range.end;
        Ok(self.inner[range].to_vec())
    }

    /// Copies `n` bytes from the current position into a new buffer without consuming them.
    pub fn peek_bytes(&self, n: usize) -> CursorResult<Vec<u8>> {
        let range = self.range_at(function!(), 0, n)?;
        Ok(self.inner[range].to_vec())
    }

    /// Copies `n` bytes starting `delta` bytes after the current position into a new buffer.
    ///
    /// The position is advanced by `delta + n`.
    pub fn read_offset_bytes(&mut self, n: usize, delta: usize) -> CursorResult<Vec<u8>> {
        let range = self.range_at(function!(), delta, n)?;
        self.pos = range.end;
        Ok(self.inner[range].to_vec())
    }

    /// Copies `n` bytes starting `delta` bytes after the current position into a new buffer,
    /// without moving the position.
    pub fn peek_offset_bytes(&self, n: usize, delta: usize) -> CursorResult<Vec<u8>> {
        let range = self.range_at(function!(), delta, n)?;
        Ok(self.inner[range].to_vec())
    }

    numeric_accessors! {
        u16 => read_u16, peek_u16, peek_offset_u16;
        i16 => read_i16, peek_i16, peek_offset_i16;
        u32 => read_u32, peek_u32, peek_offset_u32;
        i32 => read_i32, peek_i32, peek_offset_i32;
        u64 => read_u64, peek_u64, peek_offset_u64;
        i64 => read_i64, peek_i64, peek_offset_i64;
        f32 => read_f32, peek_f32, peek_offset_f32;
        f64 => read_f64, peek_f64, peek_offset_f64;
    }

    /// Opens an exploration scope positioned at `offset`, keeping the current byte order.
    ///
    /// The previous position is restored when the returned guard is dropped.
    pub fn explore_at(&mut self, offset: usize) -> CursorResult<Exploration<'_, 'a>> {
        let mut exploration = Exploration::new(self);
        exploration.jump(offset)?;
        Ok(exploration)
    }

    /// Opens an exploration scope using `byte_order`, keeping the current position.
    ///
    /// The previous byte order is restored when the returned guard is dropped.
    pub fn explore_order(&mut self, byte_order: ByteOrder) -> Exploration<'_, 'a> {
        let mut exploration = Exploration::new(self);
        exploration.set_byte_order(byte_order);
        exploration
    }

    /// Opens an exploration scope positioned at `offset` and using `byte_order`.
    ///
    /// Both the previous position and byte order are restored when the returned guard is dropped.
    /// If `offset` is out of bounds, the cursor is left untouched.
    pub fn explore(&mut self, byte_order: ByteOrder, offset: usize) -> CursorResult<Exploration<'_, 'a>> {
        let mut exploration = Exploration::new(self);
        exploration.jump(offset)?;
        exploration.set_byte_order(byte_order);
        Ok(exploration)
    }

    /// Puts the cursor back into a previously captured state.
    ///
    /// `pos` may be the exhausted position, which `jump` would reject.
    pub(crate) fn restore(&mut self, pos: usize, byte_order: ByteOrder) {
        debug_assert!(pos <= self.inner.len());
        self.pos = pos;
        self.byte_order = byte_order;
    }

    fn range_at(&self, context: &'static str, delta: usize, size: usize) -> CursorResult<Range<usize>> {
        let length = self.inner.len();

        let Some(start) = self.pos.checked_add(delta) else {
            return Err(CursorError::bounds(context, usize::MAX, size, length));
        };

        match start.checked_add(size) {
            Some(end) if end <= length => Ok(start..end),
            _ => Err(CursorError::bounds(context, start, size, length)),
        }
    }

    #[inline]
    fn byte_at(&self, context: &'static str, delta: usize) -> CursorResult<u8> {
        let range = self.range_at(context, delta, 1)?;
        Ok(self.inner[range.start])
    }

    #[inline]
    fn array_at<const N: usize>(&self, context: &'static str, delta: usize) -> CursorResult<[u8; N]> {
        let range = self.range_at(context, delta, N)?;
        let mut bytes = [0; N];
        bytes.copy_from_slice(&self.inner[range]);
        Ok(bytes)
    }
}

#[cfg(feature = "std")]
impl std::io::Read for ByteCursor<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let remaining = self.remaining();
        let n_to_copy = core::cmp::min(buf.len(), remaining.len());
        buf[..n_to_copy].copy_from_slice(&remaining[..n_to_copy]);
        self.pos += n_to_copy;
        Ok(n_to_copy)
    }
}
