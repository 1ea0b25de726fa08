use crate::ParamValue;
use std::borrow::Cow;

/// A conversion trait to a parameter value.
///
/// An `IntoParam` implementation for a Rust type is needed for binding it as
/// a parameter value by reference. The following Rust types are already
/// implemented to match the given server types:
///
/// |Rust type|Server type|
/// |--------|--------|
/// |`String`/`&str`|character types (`nvarchar`, `varchar`, `text`, `ntext`)|
/// |`Vec<u8>`/`&[u8]`|byte types (`varbinary`, `image`), or a pre-encoded character payload|
/// |`Option<T>` of the above|SQL `NULL` when `None`|
pub trait IntoParam: Send + Sync {
    /// Convert to a value understood by the server. Conversion
    /// by-reference.
    fn to_param(&self) -> ParamValue<'_>;
}

/// A by-value conversion trait to a parameter value.
pub trait IntoParamOwned<'a>: Send + Sync {
    /// Convert to a value understood by the server. Conversion by-value.
    fn into_param(self) -> ParamValue<'a>;
}

impl<'a> IntoParamOwned<'a> for ParamValue<'a> {
    fn into_param(self) -> ParamValue<'a> {
        self
    }
}

impl<'a> IntoParamOwned<'a> for &'a str {
    fn into_param(self) -> ParamValue<'a> {
        ParamValue::Text(Cow::Borrowed(self))
    }
}

impl<'a> IntoParamOwned<'a> for Option<&'a str> {
    fn into_param(self) -> ParamValue<'a> {
        match self {
            Some(s) => ParamValue::Text(Cow::Borrowed(s)),
            None => ParamValue::Null,
        }
    }
}

impl<'a> IntoParamOwned<'a> for &'a String {
    fn into_param(self) -> ParamValue<'a> {
        ParamValue::Text(Cow::Borrowed(self))
    }
}

impl<'a> IntoParamOwned<'a> for Option<&'a String> {
    fn into_param(self) -> ParamValue<'a> {
        match self {
            Some(s) => ParamValue::Text(Cow::from(s)),
            None => ParamValue::Null,
        }
    }
}

impl<'a> IntoParamOwned<'a> for &'a [u8] {
    fn into_param(self) -> ParamValue<'a> {
        ParamValue::Bytes(Cow::Borrowed(self))
    }
}

impl<'a> IntoParamOwned<'a> for Option<&'a [u8]> {
    fn into_param(self) -> ParamValue<'a> {
        match self {
            Some(b) => ParamValue::Bytes(Cow::Borrowed(b)),
            None => ParamValue::Null,
        }
    }
}

impl<'a> IntoParamOwned<'a> for &'a Vec<u8> {
    fn into_param(self) -> ParamValue<'a> {
        ParamValue::Bytes(Cow::from(self))
    }
}

impl<'a> IntoParamOwned<'a> for Option<&'a Vec<u8>> {
    fn into_param(self) -> ParamValue<'a> {
        match self {
            Some(b) => ParamValue::Bytes(Cow::from(b)),
            None => ParamValue::Null,
        }
    }
}

impl<'a> IntoParamOwned<'a> for Cow<'a, str> {
    fn into_param(self) -> ParamValue<'a> {
        ParamValue::Text(self)
    }
}

impl<'a> IntoParamOwned<'a> for Option<Cow<'a, str>> {
    fn into_param(self) -> ParamValue<'a> {
        match self {
            Some(s) => ParamValue::Text(s),
            None => ParamValue::Null,
        }
    }
}

impl<'a> IntoParamOwned<'a> for Cow<'a, [u8]> {
    fn into_param(self) -> ParamValue<'a> {
        ParamValue::Bytes(self)
    }
}

impl<'a> IntoParamOwned<'a> for Option<Cow<'a, [u8]>> {
    fn into_param(self) -> ParamValue<'a> {
        match self {
            Some(b) => ParamValue::Bytes(b),
            None => ParamValue::Null,
        }
    }
}

impl<T> IntoParam for Option<T>
where
    T: IntoParam,
{
    fn to_param(&self) -> ParamValue<'_> {
        match self {
            Some(inner) => inner.to_param(),
            None => ParamValue::Null,
        }
    }
}

into_param!(self_,
            String: crate::ParamValue::Text(Cow::from(self_));
            Vec<u8>: crate::ParamValue::Bytes(Cow::from(self_));
);

to_param!(self_,
          &str: crate::ParamValue::Text(Cow::from(*self_));
          String: crate::ParamValue::Text(Cow::from(self_));
          Cow<'_, str>: crate::ParamValue::Text(self_.clone());
          &[u8]: crate::ParamValue::Bytes(Cow::from(*self_));
          Vec<u8>: crate::ParamValue::Bytes(Cow::from(self_));
          Cow<'_, [u8]>: crate::ParamValue::Bytes(self_.clone());
);
