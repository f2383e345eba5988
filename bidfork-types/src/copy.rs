//! Aliasing-free copying.
//!
//! [`DeepCopy`] is implemented for owned scalars, `String`, [`Extension`],
//! and the owning containers `Option`, `Vec` and `Box`. It is deliberately not
//! implemented for `Rc`, `Arc`, `Cell` or borrowed data: a type that compiles
//! with a field-wise `DeepCopy` impl cannot share storage with its copy.

use crate::Extension;

/// A copy that shares no storage with its source.
///
/// After `let b = a.deep_copy();`, no holder, sequence buffer or payload
/// buffer reachable from `b` is reachable from `a`. Presence is preserved at
/// every depth: `None` stays `None` and `Some(vec![])` stays `Some(vec![])`.
pub trait DeepCopy: Sized {
    /// Returns an independent copy of `self`.
    #[must_use]
    fn deep_copy(&self) -> Self;
}

macro_rules! scalar_deep_copy {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DeepCopy for $ty {
                #[inline]
                fn deep_copy(&self) -> Self {
                    *self
                }
            }
        )*
    };
}

scalar_deep_copy!(bool, char, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl DeepCopy for String {
    #[inline]
    fn deep_copy(&self) -> Self {
        self.as_str().to_owned()
    }
}

impl DeepCopy for Extension {
    #[inline]
    fn deep_copy(&self) -> Self {
        Extension::from(self.as_bytes())
    }
}

impl<T: DeepCopy> DeepCopy for Option<T> {
    #[inline]
    fn deep_copy(&self) -> Self {
        self.as_ref().map(T::deep_copy)
    }
}

impl<T: DeepCopy> DeepCopy for Vec<T> {
    fn deep_copy(&self) -> Self {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.iter().map(T::deep_copy));
        out
    }
}

impl<T: DeepCopy> DeepCopy for Box<T> {
    #[inline]
    fn deep_copy(&self) -> Self {
        Box::new(T::deep_copy(self))
    }
}

/// Copies an entity that may be absent.
///
/// This is the `clone(entity-or-absent)` entry point: absent in, absent out.
#[must_use]
pub fn copy_opt<T: DeepCopy>(value: Option<&T>) -> Option<T> {
    value.map(T::deep_copy)
}

/// Copies an optional extension payload into a fresh buffer.
#[must_use]
pub fn copy_ext(ext: Option<&Extension>) -> Option<Extension> {
    ext.map(Extension::deep_copy)
}

/// Copies an optional scalar holder.
#[must_use]
pub fn copy_scalar<T: DeepCopy + Copy>(value: Option<&T>) -> Option<T> {
    value.copied()
}

/// Copies an optional sequence element-wise into new storage.
#[must_use]
pub fn copy_seq<T: DeepCopy>(seq: Option<&[T]>) -> Option<Vec<T>> {
    seq.map(|items| items.iter().map(T::deep_copy).collect())
}
