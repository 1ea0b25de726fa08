//! Fixed-size little-endian scratch buffers.
//!
//! Chunk producers hand out owned [`Bytes`], so the small length fields
//! embedded in a chunk sequence are minted here instead of being written
//! into a caller buffer.

use bytes::{BufMut, Bytes, BytesMut};

pub(crate) fn u32_le_bytes(value: u32) -> Bytes {
    let mut buf = BytesMut::with_capacity(4);
    buf.put_u32_le(value);
    buf.freeze()
}

pub(crate) fn i32_le_bytes(value: i32) -> Bytes {
    let mut buf = BytesMut::with_capacity(4);
    buf.put_i32_le(value);
    buf.freeze()
}
