macro_rules! uint_enum {
    ($( #[$gattr:meta] )* pub enum $ty:ident { $( $( #[$attr:meta] )* $variant:ident = $val:expr,)* }) => {
        uint_enum!($( #[$gattr] )* (pub) enum $ty { $( $( #[$attr] )* $variant = $val, )* });
    };
    ($( #[$gattr:meta] )* enum $ty:ident { $( $( #[$attr:meta] )* $variant:ident = $val:expr,)* }) => {
        uint_enum!($( #[$gattr] )* () enum $ty { $( $( #[$attr] )* $variant = $val, )* });
    };

    ($( #[$gattr:meta] )* ( $($vis:tt)* ) enum $ty:ident { $( $( #[$attr:meta] )* $variant:ident = $val:expr, )* }) => {
        #[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
        $( #[$gattr] )*
        $( $vis )* enum $ty {
            $( $( #[$attr] )* $variant = $val, )*
        }

        impl ::std::convert::TryFrom<u8> for $ty {
            type Error = ();

            fn try_from(n: u8) -> ::std::result::Result<$ty, ()> {
                match n {
                    $( x if x == $ty::$variant as u8 => Ok($ty::$variant), )*
                    _ => Err(()),
                }
            }
        }
    }
}

macro_rules! into_param {
    ($target:ident, $( $ty:ty: $val:expr ;)* ) => {
        $(
            impl<'a> crate::IntoParamOwned<'a> for $ty {
                fn into_param(self) -> crate::ParamValue<'a> {
                    let $target = self;
                    $val
                }
            }

            impl<'a> crate::IntoParamOwned<'a> for Option<$ty> {
                fn into_param(self) -> crate::ParamValue<'a> {
                    match self {
                        Some($target) => $val,
                        None => crate::ParamValue::Null,
                    }
                }
            }
        )*
    };
}

macro_rules! to_param {
    ($target:ident, $( $ty:ty: $val:expr ;)* ) => {
        $(
            impl crate::IntoParam for $ty {
                fn to_param(&self) -> crate::ParamValue<'_> {
                    let $target = self;
                    $val
                }
            }
        )*
    };
}
