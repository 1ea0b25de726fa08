//! `image`. Legacy large binary object: a four-byte length field on
//! both sides of the metadata, then the raw bytes with no terminator.

use bytes::BufMut;

use crate::protocol::wire::{ParamValue, Parameter, ResolvedLength, ValueChunks};

pub(crate) fn declaration(_parameter: &Parameter<'_>) -> String {
    "image".to_string()
}

/// The value decides; declared lengths are ignored and NULL is
/// unbounded.
pub(crate) fn resolve_length(parameter: &Parameter<'_>) -> ResolvedLength {
    match &parameter.value {
        ParamValue::Null => ResolvedLength::Unbounded,
        ParamValue::Bytes(b) => ResolvedLength::Limited(b.len()),
        ParamValue::Text(s) => ResolvedLength::Limited(super::utf16_len(s) * 2),
    }
}

pub(crate) fn value_length<B: BufMut>(len: ResolvedLength, dst: &mut B) {
    match len {
        ResolvedLength::Limited(len) => dst.put_i32_le(len as i32),
        ResolvedLength::Unbounded => dst.put_i32_le(-1),
    }
}

pub(crate) fn chunks(parameter: &Parameter<'_>) -> ValueChunks {
    match &parameter.value {
        ParamValue::Null => ValueChunks::empty(),
        ParamValue::Bytes(b) => ValueChunks::eager(vec![super::owned_bytes(b)]),
        // Unreachable after validation; kept total for internal callers.
        ParamValue::Text(s) => ValueChunks::eager(vec![super::utf16_bytes(s)]),
    }
}
