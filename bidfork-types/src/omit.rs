//! Zero-value detection for `skip_serializing_if`.
//!
//! OpenRTB omits members that carry their default. Optional members are
//! omitted when absent, so a present-but-empty sequence survives a JSON
//! round trip as `[]`. The one exception is a present but zero-length `ext`,
//! which has no JSON form and is left out.

use crate::Extension;

/// Whether a member holds the value that is left out on the wire.
pub trait OmitEmpty {
    fn omit(&self) -> bool;

    /// Whether the value is left out even when wrapped in `Some`.
    fn omit_when_present(&self) -> bool {
        false
    }
}

macro_rules! zero_omit {
    ($($ty:ty),* $(,)?) => {
        $(
            impl OmitEmpty for $ty {
                #[inline]
                fn omit(&self) -> bool {
                    *self == 0 as $ty
                }
            }
        )*
    };
}

zero_omit!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl OmitEmpty for bool {
    fn omit(&self) -> bool {
        !*self
    }
}

impl OmitEmpty for String {
    fn omit(&self) -> bool {
        self.is_empty()
    }
}

impl OmitEmpty for Extension {
    fn omit(&self) -> bool {
        self.is_empty()
    }

    fn omit_when_present(&self) -> bool {
        self.is_empty()
    }
}

impl<T> OmitEmpty for Vec<T> {
    fn omit(&self) -> bool {
        self.is_empty()
    }
}

impl<T: OmitEmpty> OmitEmpty for Option<T> {
    fn omit(&self) -> bool {
        self.as_ref().is_none_or(T::omit_when_present)
    }
}

/// Serde `skip_serializing_if` adapter for [`OmitEmpty`].
#[inline]
pub fn is_omitted<T: OmitEmpty>(value: &T) -> bool {
    value.omit()
}
