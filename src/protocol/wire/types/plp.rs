//! The partially length-prefixed (PLP) strategy for values whose length
//! exceeds the short-form threshold, the `(max)` declaration case.
//!
//! Wire shape: an eight-byte "unknown length" header, zero or more
//! `[u32 LE chunk length][chunk bytes]` pairs, then a four-byte zero
//! terminator. The receiver is never told the total length up front.
//! NULL is the dedicated all-ones header with no chunks and no
//! terminator.

use bytes::{BufMut, Bytes};

use crate::protocol::wire::ValueChunks;

/// Total value length unknown; chunks follow.
pub(crate) const UNKNOWN_LEN: [u8; 8] = [0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];

/// SQL NULL under PLP. Nothing follows.
pub(crate) const NULL_LEN: [u8; 8] = [0xff; 8];

/// End-of-value marker, emitted exactly once per non-null value.
pub(crate) const TERMINATOR: [u8; 4] = [0x00; 4];

pub(crate) fn unknown_header<B: BufMut>(dst: &mut B) {
    dst.put_slice(&UNKNOWN_LEN);
}

pub(crate) fn null_header<B: BufMut>(dst: &mut B) {
    dst.put_slice(&NULL_LEN);
}

/// Frame the payload as PLP chunks. A defined-but-empty payload yields
/// the terminator alone, never a zero-length chunk.
pub(crate) fn data(payload: Bytes) -> ValueChunks {
    ValueChunks::plp(vec![payload])
}
