//! `text`. Legacy large single-byte character object: the declared
//! length always travels as a four-byte field, and the value itself
//! opens with the five-byte pointer preamble.

use bytes::{BufMut, Bytes};

use crate::protocol::wire::{ParamValue, Parameter, ResolvedLength, ValueChunks, builder};

pub(crate) fn declaration(_parameter: &Parameter<'_>) -> String {
    "text".to_string()
}

/// Legacy types carry their length with the value, so the declared
/// length is ignored: the value decides, and NULL is unbounded.
pub(crate) fn resolve_length(parameter: &Parameter<'_>) -> ResolvedLength {
    match &parameter.value {
        ParamValue::Null => ResolvedLength::Unbounded,
        ParamValue::Bytes(b) => ResolvedLength::Limited(b.len()),
        ParamValue::Text(s) => ResolvedLength::Limited(super::utf16_len(s)),
    }
}

fn length_field(len: ResolvedLength) -> i32 {
    match len {
        ResolvedLength::Limited(len) => len as i32,
        ResolvedLength::Unbounded => -1,
    }
}

pub(crate) fn value_length<B: BufMut>(len: ResolvedLength, dst: &mut B) {
    dst.put_i32_le(length_field(len));
}

pub(crate) fn chunks(
    parameter: &Parameter<'_>,
    len: ResolvedLength,
) -> crate::Result<ValueChunks> {
    let mut chunks = vec![
        Bytes::from_static(&super::LEGACY_PREAMBLE),
        builder::i32_le_bytes(length_field(len)),
    ];

    match &parameter.value {
        ParamValue::Null => {}
        ParamValue::Bytes(b) => chunks.push(super::owned_bytes(b)),
        ParamValue::Text(s) => {
            chunks.push(super::single_byte_bytes(s, parameter.options.collation)?)
        }
    }

    Ok(ValueChunks::eager(chunks))
}
