//! Database driver value vocabulary.
//!
//! Drivers speak a small, fixed set of storage types. [`DriverValue`] is
//! that set; [`element`] describes how Rust element types map onto it and
//! [`coerce`] implements the loss-aware conversions in both directions.
//!
//! | Rust element                           | Encoded as            |
//! |----------------------------------------|-----------------------|
//! | `i8`, `i16`, `i32`, `i64`, `isize`     | `Int64`               |
//! | `u8`, `u16`, `u32`, `u64`, `usize`     | `Int64` (checked)     |
//! | `f32`, `f64`                           | `Float64`             |
//! | `bool`                                 | `Bool`                |
//! | `Vec<u8>`                              | `Bytes`               |
//! | `String`                               | `String`              |
//! | `chrono::DateTime<Utc>`                | `Timestamp`           |
//!
//! Some drivers hand numeric columns back as text; the decode path accepts
//! `Bytes` holding a base-10 rendering wherever a number is expected.

pub mod coerce;
pub mod element;

use std::fmt;

#[cfg(feature = "temporal")]
use chrono::{DateTime, Utc};

/// A value in the driver's native vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    /// SQL `NULL`.
    Null,
    Int64(i64),
    Float64(f64),
    Bool(bool),
    /// Raw bytes; also the carrier for textual encodings of numbers.
    Bytes(Vec<u8>),
    String(String),
    #[cfg(feature = "temporal")]
    #[cfg_attr(docsrs, doc(cfg(feature = "temporal")))]
    Timestamp(DateTime<Utc>),
}

/// Category tag of a [`DriverValue`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DriverKind {
    Null,
    Int64,
    Float64,
    Bool,
    Bytes,
    String,
    #[cfg(feature = "temporal")]
    #[cfg_attr(docsrs, doc(cfg(feature = "temporal")))]
    Timestamp,
}

impl DriverKind {
    /// Lowercase name used in error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::Bool => "bool",
            Self::Bytes => "bytes",
            Self::String => "string",
            #[cfg(feature = "temporal")]
            Self::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl DriverValue {
    /// Returns the category tag of this value.
    pub const fn kind(&self) -> DriverKind {
        match self {
            Self::Null => DriverKind::Null,
            Self::Int64(_) => DriverKind::Int64,
            Self::Float64(_) => DriverKind::Float64,
            Self::Bool(_) => DriverKind::Bool,
            Self::Bytes(_) => DriverKind::Bytes,
            Self::String(_) => DriverKind::String,
            #[cfg(feature = "temporal")]
            Self::Timestamp(_) => DriverKind::Timestamp,
        }
    }

    /// Returns `true` for [`DriverValue::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Wraps text the way drivers return numeric columns: as bytes.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Bytes(s.into().into_bytes())
    }
}

impl From<i64> for DriverValue {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f64> for DriverValue {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<bool> for DriverValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<&[u8]> for DriverValue {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<String> for DriverValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for DriverValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

#[cfg(feature = "temporal")]
#[cfg_attr(docsrs, doc(cfg(feature = "temporal")))]
impl From<DateTime<Utc>> for DriverValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Timestamp(v)
    }
}

impl<V: Into<DriverValue>> From<Option<V>> for DriverValue {
    fn from(v: Option<V>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
