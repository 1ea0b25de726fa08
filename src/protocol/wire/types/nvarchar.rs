//! `nvarchar(n)` / `nvarchar(max)`. The UCS-2 workhorse: two bytes per
//! character, short-form up to 4000 characters, PLP beyond.

use bytes::{BufMut, Bytes};

use super::{plp, short_form};
use crate::protocol::wire::{ParamValue, Parameter, ResolvedLength, ValueChunks};

/// Largest declarable character count before the type becomes
/// `nvarchar(max)`.
pub(crate) const MAXIMUM_LENGTH: usize = 4000;

pub(crate) fn declaration(parameter: &Parameter<'_>) -> String {
    let length = match parameter.length {
        Some(length) => length,
        None => match &parameter.value {
            ParamValue::Text(s) => super::utf16_len(s).max(1),
            ParamValue::Bytes(b) => (b.len() / 2).max(1),
            ParamValue::Null if !parameter.output => 1,
            ParamValue::Null => MAXIMUM_LENGTH,
        },
    };

    if length <= MAXIMUM_LENGTH {
        format!("nvarchar({})", length)
    } else {
        "nvarchar(max)".to_string()
    }
}

pub(crate) fn resolve_length(parameter: &Parameter<'_>) -> ResolvedLength {
    let length = match parameter.length {
        Some(length) => length,
        None => match &parameter.value {
            // A byte payload is text already encoded as UCS-2.
            ParamValue::Bytes(b) => (b.len() / 2).max(1),
            ParamValue::Text(s) => super::utf16_len(s).max(1),
            ParamValue::Null => MAXIMUM_LENGTH,
        },
    };

    ResolvedLength::Limited(length)
}

/// The payload bytes, produced with the same transcoding the length
/// prefix is computed from.
fn payload(value: &ParamValue<'_>) -> Option<Bytes> {
    match value {
        ParamValue::Null => None,
        ParamValue::Bytes(b) => Some(super::owned_bytes(b)),
        ParamValue::Text(s) => Some(super::utf16_bytes(s)),
    }
}

pub(crate) fn value_length<B: BufMut>(
    parameter: &Parameter<'_>,
    len: ResolvedLength,
    dst: &mut B,
) {
    let short = len.within(MAXIMUM_LENGTH);

    match payload(&parameter.value) {
        Some(data) if short => short_form::value_length(data.len(), dst),
        Some(_) => plp::unknown_header(dst),
        None if short => short_form::null(dst),
        None => plp::null_header(dst),
    }
}

pub(crate) fn chunks(parameter: &Parameter<'_>, len: ResolvedLength) -> ValueChunks {
    match payload(&parameter.value) {
        None => ValueChunks::empty(),
        Some(data) if len.within(MAXIMUM_LENGTH) => short_form::data(data),
        Some(data) => plp::data(data),
    }
}
