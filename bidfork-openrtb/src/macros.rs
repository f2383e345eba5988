/// Declares an OpenRTB object and derives its copy from the same field list.
///
/// Every object gets `Debug`, `Default`, `PartialEq` and serde support, with
/// zero-valued or absent members left out when serializing. Objects are only
/// ever held behind `Option`, so their own `OmitEmpty` never omits. The generated
/// `DeepCopy` impl copies each field through its own `DeepCopy`, and `Clone`
/// delegates to it, so a field whose type could alias storage fails to compile
/// instead of producing a shallow copy.
macro_rules! openrtb_object {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(skip_serializing_if = "bidfork_types::is_omitted")]
                pub $field: $ty,
            )*
        }

        impl bidfork_types::DeepCopy for $name {
            fn deep_copy(&self) -> Self {
                Self {
                    $($field: bidfork_types::DeepCopy::deep_copy(&self.$field),)*
                }
            }
        }

        impl bidfork_types::OmitEmpty for $name {
            fn omit(&self) -> bool {
                false
            }
        }

        impl Clone for $name {
            fn clone(&self) -> Self {
                bidfork_types::DeepCopy::deep_copy(self)
            }
        }
    };
}

pub(crate) use openrtb_object;
