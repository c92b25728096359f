use alloc::vec;
use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::{ByteOrder, CursorError, CursorResult};

/// Initial capacity of a [`ByteWriter`] created with [`ByteWriter::new`].
pub const DEFAULT_CAPACITY: usize = 64;

/// Growable byte buffer accumulating primitives in a configurable byte order.
///
/// Memory layout can be visualized as:
///
/// ```not_rust
/// [        backing store (capacity)        ]
/// [ written (len) |        zeroed          ]
/// ```
///
/// Multi-byte values are decomposed least significant byte first, then handed to [`ByteWriter::put_bytes`],
/// which appends them as-is for little-endian and in reverse for big-endian.
#[derive(Clone, Debug)]
pub struct ByteWriter {
    inner: Vec<u8>,
    size: usize,
    byte_order: ByteOrder,
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWriter {
    /// Creates a little-endian writer with an initial capacity of [`DEFAULT_CAPACITY`] bytes.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a little-endian writer with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: vec![0; capacity],
            size: 0,
            byte_order: ByteOrder::LittleEndian,
        }
    }

    /// Sets the byte order at construction.
    #[must_use]
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Returns the byte order used for multi-byte values and byte runs.
    #[inline]
    pub const fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Sets the byte order used by subsequent writes.
    #[inline]
    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
    }

    /// Returns the number of bytes written so far.
    #[inline]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if nothing was written yet.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the size of the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.len()
    }

    /// Appends a single byte.
    pub fn put_u8(&mut self, value: u8) {
        self.ensure_size(1);
        self.inner[self.size] = value;
        self.size += 1;
    }

    /// Appends a signed byte.
    pub fn put_i8(&mut self, value: i8) {
        self.put_u8(value.to_le_bytes()[0]);
    }

    /// Appends a boolean as `0x01` or `0x00`.
    pub fn put_bool(&mut self, value: bool) {
        self.put_u8(u8::from(value));
    }

    /// Appends a run of bytes.
    ///
    /// For little-endian, bytes are appended in the given order; for big-endian, in reverse.
    pub fn put_bytes(&mut self, values: &[u8]) {
        self.ensure_size(values.len());

        let dst = &mut self.inner[self.size..self.size + values.len()];
        dst.copy_from_slice(values);
        if self.byte_order.is_big_endian() {
            dst.reverse();
        }

        self.size += values.len();
    }

    /// Appends a `u16` in the configured byte order.
    pub fn put_u16(&mut self, value: u16) {
        self.put_bytes(&value.to_le_bytes());
    }

    /// Appends an `i16` in the configured byte order.
    pub fn put_i16(&mut self, value: i16) {
        self.put_bytes(&value.to_le_bytes());
    }

    /// Appends a `u32` in the configured byte order.
    pub fn put_u32(&mut self, value: u32) {
        self.put_bytes(&value.to_le_bytes());
    }

    /// Appends an `i32` in the configured byte order.
    pub fn put_i32(&mut self, value: i32) {
        self.put_bytes(&value.to_le_bytes());
    }

    /// Appends a `u64` in the configured byte order.
    pub fn put_u64(&mut self, value: u64) {
        self.put_bytes(&value.to_le_bytes());
    }

    /// Appends an `i64` in the configured byte order.
    pub fn put_i64(&mut self, value: i64) {
        self.put_bytes(&value.to_le_bytes());
    }

    /// Appends the IEEE-754 bit pattern of an `f32` in the configured byte order.
    pub fn put_f32(&mut self, value: f32) {
        self.put_bytes(&value.to_bits().to_le_bytes());
    }

    /// Appends the IEEE-754 bit pattern of an `f64` in the configured byte order.
    pub fn put_f64(&mut self, value: f64) {
        self.put_bytes(&value.to_bits().to_le_bytes());
    }

    /// Overwrites the byte at `index`.
    ///
    /// `index` must fall within the backing store. Bytes between the written length and the capacity may be set,
    /// but are only exported once the written length moves past them.
    pub fn set(&mut self, index: usize, value: u8) -> CursorResult<()> {
        let capacity = self.inner.len();

        match self.inner.get_mut(index) {
            Some(byte) => {
                *byte = value;
                Ok(())
            }
            None => Err(CursorError::bounds(function!(), index, 1, capacity)),
        }
    }

    /// Returns the bytes written so far.
    ///
    /// The backing store is trimmed to the written length, so repeated calls are cheap.
    pub fn get(&mut self) -> &[u8] {
        if self.inner.len() != self.size {
            debug!(from = self.inner.len(), to = self.size, "Trim backing store");
            self.inner.truncate(self.size);
            self.inner.shrink_to_fit();
        }

        &self.inner
    }

    /// Consumes the writer, returning the bytes written so far.
    pub fn into_inner(mut self) -> Vec<u8> {
        self.inner.truncate(self.size);
        self.inner
    }

    /// Grows the backing store so that `additional` more bytes fit.
    ///
    /// Growth is the larger of the missing room and the current capacity.
    fn ensure_size(&mut self, additional: usize) {
        let needed = self.size + additional;
        let capacity = self.inner.len();

        if capacity >= needed {
            return;
        }

        let growth = core::cmp::max(needed - capacity, capacity);
        trace!(from = capacity, to = capacity + growth, "Grow backing store");
        self.inner.resize(capacity + growth, 0);
    }
}

#[cfg(feature = "std")]
impl std::io::Write for ByteWriter {
    /// Appends `buf` verbatim: opaque byte runs ignore the configured byte order.
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.ensure_size(buf.len());
        self.inner[self.size..self.size + buf.len()].copy_from_slice(buf);
        self.size += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
