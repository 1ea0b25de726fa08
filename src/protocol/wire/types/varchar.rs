//! `varchar(n)` / `varchar(max)`. Single-byte character data; payloads go
//! through the collation's byte encoder, so an unmappable character fails
//! the bind instead of reaching the wire.

use bytes::{BufMut, Bytes};

use super::{plp, short_form};
use crate::protocol::wire::{ParamValue, Parameter, ResolvedLength, ValueChunks};

pub(crate) const MAXIMUM_LENGTH: usize = 8000;

pub(crate) fn declaration(parameter: &Parameter<'_>) -> String {
    let length = match parameter.length {
        Some(length) => length,
        None => match &parameter.value {
            ParamValue::Text(s) => super::utf16_len(s).max(1),
            ParamValue::Bytes(b) => b.len().max(1),
            ParamValue::Null if !parameter.output => 1,
            ParamValue::Null => MAXIMUM_LENGTH,
        },
    };

    if length <= MAXIMUM_LENGTH {
        format!("varchar({})", length)
    } else {
        "varchar(max)".to_string()
    }
}

pub(crate) fn resolve_length(parameter: &Parameter<'_>) -> ResolvedLength {
    let length = match parameter.length {
        Some(length) => length,
        None => match &parameter.value {
            // A byte payload is text already in the target code page.
            ParamValue::Bytes(b) => b.len().max(1),
            ParamValue::Text(s) => super::utf16_len(s).max(1),
            ParamValue::Null => MAXIMUM_LENGTH,
        },
    };

    ResolvedLength::Limited(length)
}

fn payload(parameter: &Parameter<'_>) -> crate::Result<Option<Bytes>> {
    match &parameter.value {
        ParamValue::Null => Ok(None),
        ParamValue::Bytes(b) => Ok(Some(super::owned_bytes(b))),
        ParamValue::Text(s) => {
            super::single_byte_bytes(s, parameter.options.collation).map(Some)
        }
    }
}

pub(crate) fn value_length<B: BufMut>(
    parameter: &Parameter<'_>,
    len: ResolvedLength,
    dst: &mut B,
) -> crate::Result<()> {
    let short = len.within(MAXIMUM_LENGTH);

    match payload(parameter)? {
        Some(data) if short => short_form::value_length(data.len(), dst),
        Some(_) => plp::unknown_header(dst),
        None if short => short_form::null(dst),
        None => plp::null_header(dst),
    }

    Ok(())
}

pub(crate) fn chunks(
    parameter: &Parameter<'_>,
    len: ResolvedLength,
) -> crate::Result<ValueChunks> {
    let chunks = match payload(parameter)? {
        None => ValueChunks::empty(),
        Some(data) if len.within(MAXIMUM_LENGTH) => short_form::data(data),
        Some(data) => plp::data(data),
    };

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use bytes::BytesMut;

    #[test]
    fn declaration_from_value() {
        assert_eq!("varchar(5)", declaration(&Parameter::new("hello")));
    }

    #[test]
    fn declaration_over_threshold_is_max() {
        assert_eq!(
            "varchar(max)",
            declaration(&Parameter::new("x").with_length(8001))
        );
    }

    #[test]
    fn resolve_counts_characters() {
        assert_eq!(
            ResolvedLength::Limited(5),
            resolve_length(&Parameter::new("hello"))
        );
    }

    #[test]
    fn value_length_counts_encoded_bytes() {
        let param = Parameter::new("caf\u{e9}");
        let mut buf = BytesMut::new();
        value_length(&param, resolve_length(&param), &mut buf).unwrap();
        assert_eq!(&[0x04, 0x00][..], buf.as_ref());
    }

    #[test]
    fn chunks_encode_through_the_code_page() {
        let param = Parameter::new("caf\u{e9}");
        let produced: Vec<_> = chunks(&param, resolve_length(&param)).unwrap().collect();
        assert_eq!(vec![Bytes::from_static(&[b'c', b'a', b'f', 0xe9])], produced);
    }

    #[test]
    fn unmappable_character_fails_the_bind() {
        let param = Parameter::new("\u{4e16}\u{754c}");
        let err = chunks(&param, resolve_length(&param)).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn null_short_form_sentinel() {
        let param = Parameter::new(None::<&str>);
        let mut buf = BytesMut::new();
        value_length(&param, ResolvedLength::Limited(40), &mut buf).unwrap();
        assert_eq!(&[0xff, 0xff][..], buf.as_ref());
    }

    #[test]
    fn long_value_uses_plp() {
        let long = "a".repeat(8001);
        let param = Parameter::new(long.as_str());
        let produced: Vec<_> = chunks(&param, resolve_length(&param)).unwrap().collect();

        assert_eq!(3, produced.len());
        assert_eq!(&[0x41, 0x1f, 0x00, 0x00][..], produced[0]);
        assert_eq!(8001, produced[1].len());
        assert_eq!(&[0x00, 0x00, 0x00, 0x00][..], produced[2]);
    }
}
