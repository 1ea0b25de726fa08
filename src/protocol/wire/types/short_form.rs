//! The short-form strategy: one u16 little-endian length field
//! immediately followed by the whole payload. Used whenever a
//! MAX-capable type's resolved length stays within its threshold.

use bytes::{BufMut, Bytes};

use crate::protocol::wire::ValueChunks;

/// Length-field sentinel for SQL NULL. Never a legal payload length;
/// a length at or above it pushes the type into PLP territory instead.
pub(crate) const NULL_LENGTH: u16 = 0xffff;

/// The length prefix: the exact byte count of the payload that follows.
pub(crate) fn value_length<B: BufMut>(byte_len: usize, dst: &mut B) {
    dst.put_u16_le(byte_len as u16);
}

/// The NULL form: the sentinel length and nothing else.
pub(crate) fn null<B: BufMut>(dst: &mut B) {
    dst.put_u16_le(NULL_LENGTH);
}

/// The whole value travels as a single chunk, with no terminator. A
/// present-but-empty value still yields its zero-length chunk; only NULL
/// yields nothing (see [`null`]).
pub(crate) fn data(payload: Bytes) -> ValueChunks {
    ValueChunks::eager(vec![payload])
}
