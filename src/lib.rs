//! Client-side parameter value encoding for the TDS wire protocol (TDS 7.4).
//!
//! Given an application value (SQL NULL, a byte payload, or text), a declared
//! SQL type and an optional declared length, this crate produces the exact
//! byte sequence the server expects for an RPC parameter: the TYPE_INFO
//! metadata, a length prefix or PLP header, and a lazily produced sequence of
//! payload chunks the caller can drain onto a transport without materializing
//! large values twice.
//!
//! ```
//! use bytes::BytesMut;
//! use manx::{ParamType, Parameter};
//!
//! # fn main() -> manx::Result<()> {
//! let param = Parameter::new("hi");
//! let mut buf = BytesMut::new();
//!
//! ParamType::NVarChar.encode(&param, &mut buf)?;
//!
//! assert_eq!(
//!     &[0xE7, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, b'h', 0x00, b'i', 0x00],
//!     buf.as_ref(),
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Transport, login, and the result-row decode path are out of scope; this
//! crate never touches a socket.

#[macro_use]
mod macros;

pub mod error;
mod into_param;
mod protocol;

pub use error::Error;
pub use into_param::{IntoParam, IntoParamOwned};
pub use protocol::{
    Collation,
    wire::{
        Encode, EncodeOptions, ParamType, ParamValue, Parameter, PlpChunks, ResolvedLength,
        TypeInfo, ValueChunks,
    },
};

/// An alias for a result that holds this module's error type as the error.
pub type Result<T> = std::result::Result<T, Error>;
