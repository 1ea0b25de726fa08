use bytes::BufMut;
use tracing::{Level, event};

use super::{Encode, EncodeOptions, ParamValue, Parameter, ResolvedLength, ValueChunks, types};
use crate::protocol::Collation;

/// The `(max)` marker in a u16 length field.
const MAX: u16 = 0xffff;

uint_enum! {
    /// The parameter type catalog, tagged with the wire type ids. [2.2.5.4.2]
    ///
    /// One immutable variant per SQL type; ids are fixed by the protocol
    /// and unique across the catalog. A variant is selected by id or
    /// keyword once at binding time and then drives the whole encode.
    #[repr(u8)]
    pub enum ParamType {
        /// `image`, a legacy large binary object.
        Image = 0x22,
        /// `text`, a legacy large single-byte character object.
        Text = 0x23,
        /// `ntext`, a legacy large UCS-2 character object.
        NText = 0x63,
        /// `varbinary(n)` / `varbinary(max)`.
        VarBinary = 0xA5,
        /// `varchar(n)` / `varchar(max)` in a single-byte code page.
        VarChar = 0xA7,
        /// `nvarchar(n)` / `nvarchar(max)`, UCS-2.
        NVarChar = 0xE7,
    }
}

impl ParamType {
    const CATALOG: [ParamType; 6] = [
        ParamType::Image,
        ParamType::Text,
        ParamType::NText,
        ParamType::VarBinary,
        ParamType::VarChar,
        ParamType::NVarChar,
    ];

    /// The single-byte wire type tag.
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            ParamType::Image => "Image",
            ParamType::Text => "Text",
            ParamType::NText => "NText",
            ParamType::VarBinary => "VarBinary",
            ParamType::VarChar => "VarChar",
            ParamType::NVarChar => "NVarChar",
        }
    }

    /// The keyword used in SQL declarations.
    pub fn sql_keyword(self) -> &'static str {
        match self {
            ParamType::Image => "image",
            ParamType::Text => "text",
            ParamType::NText => "ntext",
            ParamType::VarBinary => "varbinary",
            ParamType::VarChar => "varchar",
            ParamType::NVarChar => "nvarchar",
        }
    }

    /// Find a catalog entry by keyword or name, case-insensitively.
    pub fn from_sql_keyword(keyword: &str) -> Option<ParamType> {
        Self::CATALOG.iter().copied().find(|ty| {
            ty.sql_keyword().eq_ignore_ascii_case(keyword) || ty.name().eq_ignore_ascii_case(keyword)
        })
    }

    /// The short-form threshold of the MAX-capable types, in the type's
    /// logical units. The legacy types have none: they always carry the
    /// legacy four-byte length field.
    pub fn maximum_length(self) -> Option<usize> {
        match self {
            ParamType::NVarChar => Some(types::nvarchar::MAXIMUM_LENGTH),
            ParamType::VarChar => Some(types::varchar::MAXIMUM_LENGTH),
            ParamType::VarBinary => Some(types::varbinary::MAXIMUM_LENGTH),
            ParamType::Image | ParamType::Text | ParamType::NText => None,
        }
    }

    /// Bytes per character for the character types.
    pub fn char_width(self) -> Option<usize> {
        match self {
            ParamType::NVarChar | ParamType::NText => Some(2),
            ParamType::VarChar | ParamType::Text => Some(1),
            ParamType::Image | ParamType::VarBinary => None,
        }
    }

    /// Legacy metadata flag consumed by callers assembling result
    /// metadata; it never changes the parameter bytes.
    pub fn has_table_name(self) -> bool {
        matches!(self, ParamType::Image | ParamType::Text | ParamType::NText)
    }

    /// Check the value against the type before anything is emitted. A
    /// failure here short-circuits the whole encode; no partial bytes.
    pub fn validate(self, value: &ParamValue<'_>) -> crate::Result<()> {
        match self {
            ParamType::Image | ParamType::VarBinary => types::validate_binary(value),
            ParamType::Text | ParamType::NText | ParamType::VarChar | ParamType::NVarChar => {
                types::validate_character(value)
            }
        }
    }

    /// The SQL type declaration for this value, e.g. `nvarchar(30)` or
    /// `varbinary(max)`.
    pub fn declaration(self, parameter: &Parameter<'_>) -> String {
        match self {
            ParamType::Image => types::image::declaration(parameter),
            ParamType::Text => types::text::declaration(parameter),
            ParamType::NText => types::ntext::declaration(parameter),
            ParamType::VarBinary => types::varbinary::declaration(parameter),
            ParamType::VarChar => types::varchar::declaration(parameter),
            ParamType::NVarChar => types::nvarchar::declaration(parameter),
        }
    }

    /// Resolve the canonical effective length. Every length field written
    /// afterwards derives from this one result; pass the same value to
    /// [`type_info`](Self::type_info),
    /// [`encode_value_length`](Self::encode_value_length) and
    /// [`value_chunks`](Self::value_chunks).
    pub fn resolve_length(self, parameter: &Parameter<'_>) -> ResolvedLength {
        match self {
            ParamType::Image => types::image::resolve_length(parameter),
            ParamType::Text => types::text::resolve_length(parameter),
            ParamType::NText => types::ntext::resolve_length(parameter),
            ParamType::VarBinary => types::varbinary::resolve_length(parameter),
            ParamType::VarChar => types::varchar::resolve_length(parameter),
            ParamType::NVarChar => types::nvarchar::resolve_length(parameter),
        }
    }

    /// The TYPE_INFO header for this type and resolved length.
    pub fn type_info(self, len: ResolvedLength, options: &EncodeOptions) -> TypeInfo {
        TypeInfo {
            ty: self,
            len,
            collation: options.collation,
        }
    }

    /// The length-prefix half of the value: a short-form length field, a
    /// PLP header, or the legacy four-byte length.
    pub fn encode_value_length<B: BufMut>(
        self,
        parameter: &Parameter<'_>,
        len: ResolvedLength,
        dst: &mut B,
    ) -> crate::Result<()> {
        match self {
            ParamType::Image => types::image::value_length(len, dst),
            ParamType::Text => types::text::value_length(len, dst),
            ParamType::NText => types::ntext::value_length(len, dst),
            ParamType::VarBinary => types::varbinary::value_length(parameter, len, dst),
            ParamType::VarChar => types::varchar::value_length(parameter, len, dst)?,
            ParamType::NVarChar => types::nvarchar::value_length(parameter, len, dst),
        }

        Ok(())
    }

    /// The payload half of the value, as a lazy chunk sequence the caller
    /// drains onto its transport.
    pub fn value_chunks(
        self,
        parameter: &Parameter<'_>,
        len: ResolvedLength,
    ) -> crate::Result<ValueChunks> {
        let chunks = match self {
            ParamType::Image => types::image::chunks(parameter),
            ParamType::Text => types::text::chunks(parameter, len)?,
            ParamType::NText => types::ntext::chunks(parameter, len),
            ParamType::VarBinary => types::varbinary::chunks(parameter, len),
            ParamType::VarChar => types::varchar::chunks(parameter, len)?,
            ParamType::NVarChar => types::nvarchar::chunks(parameter, len),
        };

        Ok(chunks)
    }

    /// Run the whole pipeline into one buffer: validate, resolve, then
    /// TYPE_INFO, length prefix and payload chunks in wire order.
    ///
    /// Callers that stream large values use the granular operations
    /// instead and drain [`value_chunks`](Self::value_chunks) themselves.
    pub fn encode<B: BufMut>(self, parameter: &Parameter<'_>, dst: &mut B) -> crate::Result<()> {
        self.validate(&parameter.value)?;

        let len = self.resolve_length(parameter);

        event!(
            Level::TRACE,
            "Encoding a {} parameter ({:?})",
            self.name(),
            len,
        );

        self.type_info(len, &parameter.options).encode(dst)?;
        self.encode_value_length(parameter, len, dst)?;

        for chunk in self.value_chunks(parameter, len)? {
            dst.put_slice(&chunk);
        }

        Ok(())
    }
}

/// The TYPE_INFO header of one parameter: the type tag, a width-specific
/// length field, and for the MAX-capable character types the five-byte
/// collation.
///
/// Byte-for-byte stable for a given `(type, resolved length, collation)`
/// triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    ty: ParamType,
    len: ResolvedLength,
    collation: Option<Collation>,
}

impl TypeInfo {
    pub fn r#type(&self) -> ParamType {
        self.ty
    }

    pub fn len(&self) -> ResolvedLength {
        self.len
    }

    pub fn collation(&self) -> Option<Collation> {
        self.collation
    }
}

impl<B: BufMut> Encode<B> for TypeInfo {
    fn encode(self, dst: &mut B) -> crate::Result<()> {
        dst.put_u8(self.ty as u8);

        match self.ty {
            // Legacy types: the declared maximum is the resolved length
            // itself, -1 when the value is NULL.
            ParamType::Image | ParamType::Text | ParamType::NText => match self.len {
                ResolvedLength::Limited(len) => dst.put_i32_le(len as i32),
                ResolvedLength::Unbounded => dst.put_i32_le(-1),
            },
            // nvarchar declares the byte width of the resolved length.
            ParamType::NVarChar => match self.len {
                ResolvedLength::Limited(len) if len <= types::nvarchar::MAXIMUM_LENGTH => {
                    dst.put_u16_le((len * 2) as u16)
                }
                _ => dst.put_u16_le(MAX),
            },
            // varchar and varbinary declare their full short-form
            // capacity whenever the value fits it.
            ParamType::VarChar => match self.len {
                ResolvedLength::Limited(len) if len <= types::varchar::MAXIMUM_LENGTH => {
                    dst.put_u16_le(types::varchar::MAXIMUM_LENGTH as u16)
                }
                _ => dst.put_u16_le(MAX),
            },
            ParamType::VarBinary => match self.len {
                ResolvedLength::Limited(len) if len <= types::varbinary::MAXIMUM_LENGTH => {
                    dst.put_u16_le(types::varbinary::MAXIMUM_LENGTH as u16)
                }
                _ => dst.put_u16_le(MAX),
            },
        }

        if let ParamType::NVarChar | ParamType::VarChar = self.ty {
            let options = EncodeOptions {
                collation: self.collation,
            };
            options.encode_collation(dst);
        }

        Ok(())
    }
}
