use crate::{IntoParamOwned, protocol::Collation};
use bytes::BufMut;
use std::borrow::Cow;

/// A container of a value that can be bound to a parameter slot.
///
/// The closed set of shapes the encoder accepts: SQL NULL, a raw byte
/// payload, or text. Anything else must be converted at the
/// [`IntoParam`](crate::IntoParam) boundary before it reaches the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue<'a> {
    /// SQL NULL.
    Null,
    /// A raw byte payload. Byte-oriented types pass it through unmodified;
    /// character types treat it as text already encoded in their character
    /// encoding.
    Bytes(Cow<'a, [u8]>),
    /// A textual payload, transcoded to the target type's character
    /// encoding when bytes are emitted.
    Text(Cow<'a, str>),
}

impl ParamValue<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }
}

/// One parameter of one call: the application value, the declared length,
/// and per-call options. Plain data with no behavior of its own; it is
/// consumed by the operations on [`ParamType`](crate::ParamType).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter<'a> {
    /// The application value. The encoder only reads it.
    pub value: ParamValue<'a>,
    /// Declared length in the owning type's logical units (characters for
    /// character types, bytes for byte types). Inferred from the value
    /// when absent.
    pub length: Option<usize>,
    /// Output/INOUT marker. Only affects default-length inference for
    /// NULL values in declarations.
    pub output: bool,
    /// Variant-specific knobs.
    pub options: EncodeOptions,
}

impl<'a> Parameter<'a> {
    pub fn new(value: impl IntoParamOwned<'a>) -> Self {
        Self {
            value: value.into_param(),
            length: None,
            output: false,
            options: EncodeOptions::default(),
        }
    }

    /// Set the declared length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Mark as an output parameter.
    pub fn output(mut self) -> Self {
        self.output = true;
        self
    }

    /// Set the collation driving the byte encoder and the TYPE_INFO
    /// collation field.
    pub fn with_collation(mut self, collation: Collation) -> Self {
        self.options.collation = Some(collation);
        self
    }
}

/// The canonical effective length of one parameter.
///
/// Computed once per encode by [`ParamType::resolve_length`] and threaded
/// through every later step; no later step recomputes a length on its own,
/// so the declared and emitted lengths cannot drift apart.
///
/// [`ParamType::resolve_length`]: crate::ParamType::resolve_length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedLength {
    /// A concrete length in the type's logical units.
    Limited(usize),
    /// The legacy types' "length travels with the value" marker, `-1` on
    /// the wire.
    Unbounded,
}

impl ResolvedLength {
    /// True when this length selects the short-form strategy for a type
    /// with the given short-form threshold.
    pub fn within(self, max: usize) -> bool {
        matches!(self, ResolvedLength::Limited(len) if len <= max)
    }
}

/// Variant-specific encode knobs. Currently only charset selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Collation for character types: drives the byte encoder of the
    /// single-byte family and the TYPE_INFO collation field. `None`
    /// leaves the TYPE_INFO collation zeroed and encodes through
    /// windows-1252.
    pub collation: Option<Collation>,
}

impl EncodeOptions {
    /// The fixed five-byte TYPE_INFO collation field.
    pub(crate) fn encode_collation<B: BufMut>(&self, dst: &mut B) {
        match self.collation {
            Some(collation) => {
                dst.put_u32_le(collation.info());
                dst.put_u8(collation.sort_id());
            }
            None => dst.put_slice(&[0u8; 5]),
        }
    }
}
