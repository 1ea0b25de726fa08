pub(crate) mod image;
pub(crate) mod ntext;
pub(crate) mod nvarchar;
pub(crate) mod plp;
pub(crate) mod short_form;
pub(crate) mod text;
pub(crate) mod varbinary;
pub(crate) mod varchar;

use crate::{Error, protocol::Collation};
use bytes::{BufMut, Bytes, BytesMut};
use std::borrow::Cow;

use super::ParamValue;

/// Legacy large-object values open with five zero bytes where a text
/// pointer would sit.
pub(crate) const LEGACY_PREAMBLE: [u8; 5] = [0x00; 5];

/// The length of a string in UTF-16 code units, which is also the
/// character count the declared lengths of the two-byte family are
/// measured in.
pub(crate) fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Transcode to UTF-16LE, two bytes per code unit.
pub(crate) fn utf16_bytes(s: &str) -> Bytes {
    let mut buf = BytesMut::with_capacity(s.len() * 2);

    for chr in s.encode_utf16() {
        buf.put_u16_le(chr);
    }

    buf.freeze()
}

/// Transcode through the collation's byte encoder; the default collation
/// encodes as windows-1252.
pub(crate) fn single_byte_bytes(s: &str, collation: Option<Collation>) -> crate::Result<Bytes> {
    let encoding = match collation {
        Some(collation) => collation.encoding()?,
        None => encoding_rs::WINDOWS_1252,
    };

    let mut encoder = encoding.new_encoder();
    let capacity = encoder
        .max_buffer_length_from_utf8_without_replacement(s.len())
        .ok_or_else(|| Error::Encoding("value too large to encode".into()))?;

    let mut bytes = Vec::with_capacity(capacity);
    let (res, _) = encoder.encode_from_utf8_to_vec_without_replacement(s, &mut bytes, true);

    if let encoding_rs::EncoderResult::Unmappable(_) = res {
        return Err(Error::Encoding("unrepresentable character".into()));
    }

    Ok(bytes.into())
}

/// Detach a borrowed byte payload into an owned chunk.
pub(crate) fn owned_bytes(bytes: &Cow<'_, [u8]>) -> Bytes {
    Bytes::copy_from_slice(bytes.as_ref())
}

/// Byte-oriented types take byte payloads only.
pub(crate) fn validate_binary(value: &ParamValue<'_>) -> crate::Result<()> {
    match value {
        ParamValue::Text(_) => Err(Error::Conversion("invalid buffer".into())),
        _ => Ok(()),
    }
}

/// Character types take text, or a byte payload already encoded in the
/// type's character encoding.
pub(crate) fn validate_character(_value: &ParamValue<'_>) -> crate::Result<()> {
    Ok(())
}
