//! Macro for declaring driven-port error enums.
//!
//! `define_port_error!` emits a `thiserror` enum plus one snake_case
//! constructor per variant, so adapters write
//! `UserPersistenceError::query("...")` instead of struct literals.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),+ }) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                Self::$variant { $($field: $field.into()),+ }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),+ $(,)? } )? => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),+ } )?,
            )+
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),+ } )?);
            )+
        }
    };
}

pub(crate) use define_port_error;
