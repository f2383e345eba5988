//! Opaque extension payloads.
//!
//! Every OpenRTB object may carry an `ext` member holding exchange- or
//! bidder-specific JSON. The object model keeps it as raw bytes and never
//! looks inside; only the owner of the extension format decodes it.

use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;

/// An uninterpreted `ext` payload.
///
/// Holds the exact bytes it was built from. An empty payload is distinct from
/// an absent one, which is modeled as `Option<Extension>::None` by the owner.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Extension(Vec<u8>);

impl Extension {
    /// Creates an empty payload.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Encodes `value` as JSON into a new payload.
    pub fn encode<T: Serialize>(value: &T) -> crate::Result<Self> {
        Ok(Self(serde_json::to_vec(value)?))
    }

    /// Decodes the payload as JSON into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> crate::Result<T> {
        Ok(serde_json::from_slice(&self.0)?)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the raw bytes for in-place editing.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }

    /// Consumes the payload, returning its buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Returns the payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the payload holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Extension {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Extension {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for Extension {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl From<String> for Extension {
    fn from(text: String) -> Self {
        Self(text.into_bytes())
    }
}

impl AsRef<[u8]> for Extension {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Extension({:?})", String::from_utf8_lossy(&self.0))
    }
}

/// Embeds the payload verbatim. An empty payload is written as `null`; object
/// members holding one are skipped by [`is_omitted`](crate::is_omitted).
impl Serialize for Extension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            return serializer.serialize_unit();
        }
        let text = std::str::from_utf8(&self.0).map_err(S::Error::custom)?;
        let raw: &RawValue = serde_json::from_str(text).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

/// Captures the member's JSON text byte-for-byte, whitespace included.
impl<'de> Deserialize<'de> for Extension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Ok(Self(raw.get().as_bytes().to_vec()))
    }
}
