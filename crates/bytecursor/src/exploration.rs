use core::ops::{Deref, DerefMut};

use tracing::trace;

use crate::{ByteCursor, ByteOrder};

/// A scope temporarily repositioning a [`ByteCursor`] and/or changing its byte order.
///
/// The position and byte order of the cursor are captured when the scope is opened and put back when the
/// scope ends, whatever happened to the cursor in between. The scope dereferences to the cursor it was opened
/// from, so reads go through the guard:
///
/// ```ignore
/// let mut cursor = ByteCursor::new(&bytes);
/// cursor.skip(6)?;
///
/// {
///     let mut scope = cursor.explore(ByteOrder::BigEndian, 2)?;
///     let header = scope.read_u32()?;
/// }
///
/// assert_eq!(cursor.pos(), 6);
/// ```
///
/// Scopes nest: opening a scope on a scope captures the state current at that moment. Because a scope
/// mutably borrows what it was opened from, inner scopes always end before outer ones.
#[derive(Debug)]
pub struct Exploration<'c, 'a> {
    cursor: &'c mut ByteCursor<'a>,
    retreat_offset: usize,
    retreat_byte_order: ByteOrder,
}

impl<'c, 'a> Exploration<'c, 'a> {
    pub(crate) fn new(cursor: &'c mut ByteCursor<'a>) -> Self {
        let retreat_offset = cursor.pos();
        let retreat_byte_order = cursor.byte_order();

        trace!(offset = retreat_offset, byte_order = %retreat_byte_order, "Open exploration");

        Self {
            cursor,
            retreat_offset,
            retreat_byte_order,
        }
    }

    /// Position the cursor goes back to when the scope ends.
    #[inline]
    pub fn retreat_offset(&self) -> usize {
        self.retreat_offset
    }

    /// Byte order the cursor goes back to when the scope ends.
    #[inline]
    pub fn retreat_byte_order(&self) -> ByteOrder {
        self.retreat_byte_order
    }

    /// Ends the scope, restoring the captured position and byte order.
    ///
    /// Equivalent to dropping the guard.
    #[inline]
    pub fn close(self) {
        drop(self);
    }
}

impl<'a> Deref for Exploration<'_, 'a> {
    type Target = ByteCursor<'a>;

    fn deref(&self) -> &Self::Target {
        self.cursor
    }
}

impl DerefMut for Exploration<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cursor
    }
}

impl Drop for Exploration<'_, '_> {
    fn drop(&mut self) {
        trace!(
            offset = self.retreat_offset,
            byte_order = %self.retreat_byte_order,
            "Restore explored cursor"
        );

        self.cursor.restore(self.retreat_offset, self.retreat_byte_order);
    }
}
