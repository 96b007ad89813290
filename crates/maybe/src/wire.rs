//! Null-aware JSON encoding for both containers.
//!
//! Absent and null containers serialize as `null`; present ones serialize
//! exactly like their element. Deserializing `null` yields an absent
//! container, anything else goes through the element's own `Deserialize`
//! and its errors surface unchanged. A missing struct field decodes the
//! same as `null`.
//!
//! ```rust
//! use maybe::{Nullable, Optional};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Patch {
//!     name: Optional<String>,
//!     age: Nullable<u8>,
//! }
//!
//! let patch: Patch = serde_json::from_str(r#"{"age": null}"#)?;
//! assert!(patch.name.is_none());
//! assert!(patch.age.is_null());
//! assert_eq!(serde_json::to_string(&patch)?, r#"{"name":null,"age":null}"#);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::nullable::Nullable;
use crate::optional::Optional;

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.get() {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.get() {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Nullable<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
