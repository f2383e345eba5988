//! Core value types for bidfork.
//!
//! This crate defines the leaf-level building blocks shared by the OpenRTB
//! object model:
//! - [`Extension`], the opaque `ext` payload carried by almost every object
//! - [`DeepCopy`], the aliasing-free copy capability, with the copier helpers
//!   for payloads, optional scalars and sequences
//! - [`codes`], transparent newtypes for enumerated AdCOM codes
//!
//! Nothing here interprets request contents. Enumerated codes are copied by
//! value and extension payloads are copied byte-for-byte.

pub mod codes;
mod copy;
mod ext;
mod omit;

pub use copy::{DeepCopy, copy_ext, copy_opt, copy_scalar, copy_seq};
pub use ext::Extension;
pub use omit::{OmitEmpty, is_omitted};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
