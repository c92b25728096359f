//! Shared helpers for the integration tests.

use bytecursor::{ByteOrder, ByteWriter};

/// Returns `[1, 2, ..., n]`.
pub fn counting_bytes(n: u8) -> Vec<u8> {
    (1..=n).collect()
}

/// Runs `f` against a fresh writer configured with `byte_order` and returns the bytes it produced.
pub fn encode_with(byte_order: ByteOrder, f: impl FnOnce(&mut ByteWriter)) -> Vec<u8> {
    let mut writer = ByteWriter::with_capacity(1).with_byte_order(byte_order);
    f(&mut writer);
    writer.into_inner()
}

/// Formats bytes the way snapshot tests expect them: `[01, 02, FF]`.
pub fn hex(bytes: &[u8]) -> String {
    format!("{bytes:02X?}")
}
