//! `ntext`. The UCS-2 sibling of `text`: lengths are declared in
//! characters, the wire fields carry bytes at two per character.

use bytes::{BufMut, Bytes};

use crate::protocol::wire::{ParamValue, Parameter, ResolvedLength, ValueChunks, builder};

pub(crate) fn declaration(_parameter: &Parameter<'_>) -> String {
    "ntext".to_string()
}

pub(crate) fn resolve_length(parameter: &Parameter<'_>) -> ResolvedLength {
    match &parameter.value {
        ParamValue::Null => ResolvedLength::Unbounded,
        // A byte payload is text already encoded as UCS-2.
        ParamValue::Bytes(b) => ResolvedLength::Limited(b.len() / 2),
        ParamValue::Text(s) => ResolvedLength::Limited(super::utf16_len(s)),
    }
}

fn byte_length_field(len: ResolvedLength) -> i32 {
    match len {
        ResolvedLength::Limited(len) => (len * 2) as i32,
        ResolvedLength::Unbounded => -1,
    }
}

pub(crate) fn value_length<B: BufMut>(len: ResolvedLength, dst: &mut B) {
    dst.put_i32_le(byte_length_field(len));
}

pub(crate) fn chunks(parameter: &Parameter<'_>, len: ResolvedLength) -> ValueChunks {
    let mut chunks = vec![
        Bytes::from_static(&super::LEGACY_PREAMBLE),
        builder::i32_le_bytes(byte_length_field(len)),
    ];

    match &parameter.value {
        ParamValue::Null => {}
        ParamValue::Bytes(b) => chunks.push(super::owned_bytes(b)),
        ParamValue::Text(s) => chunks.push(super::utf16_bytes(s)),
    }

    ValueChunks::eager(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn declaration_is_bare_keyword() {
        assert_eq!("ntext", declaration(&Parameter::new("abc")));
    }

    #[test]
    fn resolve_counts_characters() {
        assert_eq!(
            ResolvedLength::Limited(3),
            resolve_length(&Parameter::new("abc"))
        );
    }

    #[test]
    fn resolve_halves_encoded_buffers() {
        let param = Parameter::new(vec![b'a', 0x00, b'b', 0x00]);
        assert_eq!(ResolvedLength::Limited(2), resolve_length(&param));
    }

    #[test]
    fn value_length_doubles_to_bytes() {
        let mut buf = BytesMut::new();
        value_length(ResolvedLength::Limited(3), &mut buf);
        assert_eq!(&[0x06, 0x00, 0x00, 0x00][..], buf.as_ref());
    }

    #[test]
    fn chunks_carry_ucs2_payload() {
        let param = Parameter::new("ab");
        let produced: Vec<_> = chunks(&param, resolve_length(&param)).collect();

        assert_eq!(
            vec![
                Bytes::from_static(&[0x00; 5]),
                Bytes::from_static(&[0x04, 0x00, 0x00, 0x00]),
                Bytes::from_static(&[b'a', 0, b'b', 0]),
            ],
            produced,
        );
    }

    #[test]
    fn null_chunks_stop_after_the_length_field() {
        let param = Parameter::new(None::<&str>);
        let produced: Vec<_> = chunks(&param, resolve_length(&param)).collect();

        assert_eq!(
            vec![
                Bytes::from_static(&[0x00; 5]),
                Bytes::from_static(&[0xff, 0xff, 0xff, 0xff]),
            ],
            produced,
        );
    }
}
