//! End-to-end byte-level checks of the composed encode pipeline, one per
//! documented wire scenario.

use bytes::BytesMut;
use manx::{Encode, ParamType, Parameter};

fn encode(ty: ParamType, param: &Parameter<'_>) -> Vec<u8> {
    let mut buf = BytesMut::new();
    ty.encode(param, &mut buf).unwrap();
    buf.to_vec()
}

#[test]
fn nvarchar_short_string() {
    let param = Parameter::new("hi");

    assert_eq!("nvarchar(2)", ParamType::NVarChar.declaration(&param));

    let bytes = encode(ParamType::NVarChar, &param);
    assert_eq!(
        vec![
            0xE7, 0x04, 0x00, // id, length field: 2 chars * 2 bytes
            0x00, 0x00, 0x00, 0x00, 0x00, // collation
            0x04, 0x00, // byte length prefix
            b'h', 0x00, b'i', 0x00, // UCS-2 payload
        ],
        bytes
    );
}

#[test]
fn nvarchar_null_with_declared_length() {
    let param = Parameter::new(None::<&str>).with_length(10);

    let len = ParamType::NVarChar.resolve_length(&param);
    let mut buf = BytesMut::new();
    ParamType::NVarChar
        .encode_value_length(&param, len, &mut buf)
        .unwrap();
    assert_eq!(&[0xff, 0xff][..], buf.as_ref());

    let mut chunks = ParamType::NVarChar.value_chunks(&param, len).unwrap();
    assert!(chunks.next().is_none());
}

#[test]
fn varbinary_oversize_buffer_streams_as_plp() {
    let payload = vec![0x5au8; 9000];
    let param = Parameter::new(payload.as_slice());

    assert_eq!("varbinary(max)", ParamType::VarBinary.declaration(&param));

    let len = ParamType::VarBinary.resolve_length(&param);

    let mut buf = BytesMut::new();
    ParamType::VarBinary
        .type_info(len, &param.options)
        .encode(&mut buf)
        .unwrap();
    assert_eq!(&[0xA5, 0xff, 0xff][..], buf.as_ref());

    let mut buf = BytesMut::new();
    ParamType::VarBinary
        .encode_value_length(&param, len, &mut buf)
        .unwrap();
    assert_eq!(
        &[0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff][..],
        buf.as_ref()
    );

    let chunks: Vec<_> = ParamType::VarBinary
        .value_chunks(&param, len)
        .unwrap()
        .collect();
    assert_eq!(3, chunks.len());
    assert_eq!(&[0x28, 0x23, 0x00, 0x00][..], chunks[0]); // 9000 LE
    assert_eq!(payload, chunks[1].to_vec());
    assert_eq!(&[0x00, 0x00, 0x00, 0x00][..], chunks[2]);
}

#[test]
fn varbinary_empty_buffer_short_form() {
    let param = Parameter::new(Vec::<u8>::new());
    let len = ParamType::VarBinary.resolve_length(&param);

    let mut buf = BytesMut::new();
    ParamType::VarBinary
        .encode_value_length(&param, len, &mut buf)
        .unwrap();
    assert_eq!(&[0x00, 0x00][..], buf.as_ref());

    let chunks: Vec<_> = ParamType::VarBinary
        .value_chunks(&param, len)
        .unwrap()
        .collect();
    assert_eq!(1, chunks.len());
    assert!(chunks[0].is_empty());
}

#[test]
fn image_four_byte_buffer() {
    let param = Parameter::new(vec![0x01u8, 0x02, 0x03, 0x04]);

    assert_eq!("image", ParamType::Image.declaration(&param));

    let bytes = encode(ParamType::Image, &param);
    assert_eq!(
        vec![
            0x22, 0x04, 0x00, 0x00, 0x00, // TYPE_INFO: id, i32 length
            0x04, 0x00, 0x00, 0x00, // value length
            0x01, 0x02, 0x03, 0x04, // raw payload, no terminator
        ],
        bytes
    );
}

#[test]
fn text_null() {
    let param = Parameter::new(None::<&str>);

    let len = ParamType::Text.resolve_length(&param);

    let mut buf = BytesMut::new();
    ParamType::Text
        .encode_value_length(&param, len, &mut buf)
        .unwrap();
    assert_eq!(&[0xff, 0xff, 0xff, 0xff][..], buf.as_ref());

    let chunks: Vec<_> = ParamType::Text.value_chunks(&param, len).unwrap().collect();
    assert_eq!(2, chunks.len());
    assert_eq!(&[0x00, 0x00, 0x00, 0x00, 0x00][..], chunks[0]);
    assert_eq!(&[0xff, 0xff, 0xff, 0xff][..], chunks[1]);
}

#[test]
fn text_value_embeds_its_length() {
    let param = Parameter::new("abc");

    let bytes = encode(ParamType::Text, &param);
    assert_eq!(
        vec![
            0x23, 0x03, 0x00, 0x00, 0x00, // TYPE_INFO
            0x03, 0x00, 0x00, 0x00, // value length
            0x00, 0x00, 0x00, 0x00, 0x00, // pointer preamble
            0x03, 0x00, 0x00, 0x00, // embedded length
            b'a', b'b', b'c',
        ],
        bytes
    );
}

#[test]
fn ntext_value_doubles_its_length() {
    let param = Parameter::new("ab");

    let bytes = encode(ParamType::NText, &param);
    assert_eq!(
        vec![
            0x63, 0x02, 0x00, 0x00, 0x00, // TYPE_INFO carries characters
            0x04, 0x00, 0x00, 0x00, // value length carries bytes
            0x00, 0x00, 0x00, 0x00, 0x00, // pointer preamble
            0x04, 0x00, 0x00, 0x00, // embedded byte length
            b'a', 0x00, b'b', 0x00,
        ],
        bytes
    );
}

#[test]
fn varchar_transcodes_through_the_code_page() {
    let param = Parameter::new("caf\u{e9}");

    let bytes = encode(ParamType::VarChar, &param);
    assert_eq!(
        vec![
            0xA7, 0x40, 0x1f, // id, capacity 8000
            0x00, 0x00, 0x00, 0x00, 0x00, // collation
            0x04, 0x00, // byte length prefix
            b'c', b'a', b'f', 0xe9,
        ],
        bytes
    );
}
