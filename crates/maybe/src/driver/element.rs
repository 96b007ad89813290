//! Element categories and conversion hooks.
//!
//! The coercion engine never inspects a value at runtime to discover its
//! type. Each element type declares a static [`ElementKind`] and exposes a
//! typed [`Native`] view of itself; the engine picks a conversion by
//! matching on those tags.
//!
//! Types outside the fixed vocabulary implement [`DriverType`] with the
//! default `KIND` (`Other`) and override the hooks:
//!
//! ```rust
//! use maybe::{DriverType, DriverValue, MaybeError, MaybeResult, Nullable};
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct Cents(i64);
//!
//! impl DriverType for Cents {
//!     fn custom_encode(&self) -> Option<MaybeResult<DriverValue>> {
//!         Some(Ok(DriverValue::String(format!("{}.{:02}", self.0 / 100, self.0 % 100))))
//!     }
//!
//!     fn custom_decode(src: &DriverValue) -> Option<MaybeResult<Self>> {
//!         let DriverValue::Int64(v) = src else {
//!             return Some(Err(MaybeError::custom("cents must be stored as int64")));
//!         };
//!         Some(Ok(Cents(*v)))
//!     }
//! }
//!
//! let price = Nullable::valid(Cents(1999));
//! assert_eq!(price.to_driver_value()?, DriverValue::String("19.99".into()));
//!
//! let back = Nullable::<Cents>::from_driver_value(1999_i64)?;
//! assert_eq!(back, price);
//! # Ok::<(), MaybeError>(())
//! ```

use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "temporal")]
use chrono::{DateTime, Utc};

use super::{DriverKind, DriverValue};
use crate::error::MaybeResult;

/// Static category of an element type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ElementKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Bool,
    Bytes,
    String,
    #[cfg(feature = "temporal")]
    #[cfg_attr(docsrs, doc(cfg(feature = "temporal")))]
    Timestamp,
    /// No built-in conversion; only the element's hooks apply.
    Other,
}

impl ElementKind {
    /// Check if this kind is a signed integer
    pub const fn is_signed(&self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize
        )
    }

    /// Check if this kind is an unsigned integer
    pub const fn is_unsigned(&self) -> bool {
        matches!(
            self,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize
        )
    }

    /// Check if this kind is any integer
    pub const fn is_integer(&self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    /// Check if this kind is floating point
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// The driver category this kind is stored as without conversion.
    ///
    /// `None` for kinds that always need widening or a hook.
    pub const fn storage_kind(&self) -> Option<DriverKind> {
        match self {
            Self::I64 => Some(DriverKind::Int64),
            Self::F64 => Some(DriverKind::Float64),
            Self::Bool => Some(DriverKind::Bool),
            Self::Bytes => Some(DriverKind::Bytes),
            Self::String => Some(DriverKind::String),
            #[cfg(feature = "temporal")]
            Self::Timestamp => Some(DriverKind::Timestamp),
            _ => None,
        }
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
            Self::Bytes => "bytes",
            Self::String => "string",
            #[cfg(feature = "temporal")]
            Self::Timestamp => "timestamp",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed view of an element, one variant per [`ElementKind`].
///
/// Bytes and text borrow from the element when encoding and own their
/// buffer when decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Native<'a> {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Bool(bool),
    Bytes(Cow<'a, [u8]>),
    String(Cow<'a, str>),
    #[cfg(feature = "temporal")]
    #[cfg_attr(docsrs, doc(cfg(feature = "temporal")))]
    Timestamp(DateTime<Utc>),
    /// The element has no typed view.
    Opaque,
}

impl Native<'static> {
    /// Takes ownership of a driver value without converting it.
    ///
    /// `Null` has no typed view and maps to [`Native::Opaque`].
    pub fn from_driver(value: DriverValue) -> Self {
        match value {
            DriverValue::Null => Self::Opaque,
            DriverValue::Int64(v) => Self::I64(v),
            DriverValue::Float64(v) => Self::F64(v),
            DriverValue::Bool(v) => Self::Bool(v),
            DriverValue::Bytes(v) => Self::Bytes(Cow::Owned(v)),
            DriverValue::String(v) => Self::String(Cow::Owned(v)),
            #[cfg(feature = "temporal")]
            DriverValue::Timestamp(v) => Self::Timestamp(v),
        }
    }
}

/// Element types that can cross the driver boundary.
///
/// Built-in implementations cover the integer, float, bool, byte, string
/// and timestamp types. Custom types leave [`KIND`](Self::KIND) at
/// [`ElementKind::Other`] and override the hooks; a hook that returns
/// `Some` takes over the conversion entirely, including its errors.
pub trait DriverType: Default + Sized {
    /// Static category used to pick a built-in conversion.
    const KIND: ElementKind = ElementKind::Other;

    /// Borrows this value as its typed view.
    fn as_native(&self) -> Native<'_> {
        Native::Opaque
    }

    /// Rebuilds a value from a view of the same kind.
    ///
    /// Returns `None` if the variant does not match [`KIND`](Self::KIND).
    fn from_native(native: Native<'static>) -> Option<Self> {
        let _ = native;
        None
    }

    /// Self-describing encode hook.
    fn custom_encode(&self) -> Option<MaybeResult<DriverValue>> {
        None
    }

    /// Self-describing decode hook. Never called with `Null`.
    fn custom_decode(src: &DriverValue) -> Option<MaybeResult<Self>> {
        let _ = src;
        None
    }
}

macro_rules! copy_element {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl DriverType for $ty {
            const KIND: ElementKind = ElementKind::$kind;

            #[inline]
            fn as_native(&self) -> Native<'_> {
                Native::$kind(*self)
            }

            #[inline]
            fn from_native(native: Native<'static>) -> Option<Self> {
                match native {
                    Native::$kind(v) => Some(v),
                    _ => None,
                }
            }
        }
    )*};
}

copy_element! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    bool => Bool,
}

#[cfg(feature = "temporal")]
copy_element! {
    DateTime<Utc> => Timestamp,
}

impl DriverType for Vec<u8> {
    const KIND: ElementKind = ElementKind::Bytes;

    fn as_native(&self) -> Native<'_> {
        Native::Bytes(Cow::Borrowed(self.as_slice()))
    }

    fn from_native(native: Native<'static>) -> Option<Self> {
        match native {
            Native::Bytes(v) => Some(v.into_owned()),
            _ => None,
        }
    }
}

impl DriverType for String {
    const KIND: ElementKind = ElementKind::String;

    fn as_native(&self) -> Native<'_> {
        Native::String(Cow::Borrowed(self.as_str()))
    }

    fn from_native(native: Native<'static>) -> Option<Self> {
        match native {
            Native::String(v) => Some(v.into_owned()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classification() {
        assert!(ElementKind::I16.is_signed());
        assert!(ElementKind::Usize.is_unsigned());
        assert!(ElementKind::U8.is_integer());
        assert!(!ElementKind::F32.is_integer());
        assert!(ElementKind::F32.is_float());
        assert!(!ElementKind::Other.is_integer());
    }

    #[test]
    fn storage_kinds() {
        assert_eq!(ElementKind::I64.storage_kind(), Some(DriverKind::Int64));
        assert_eq!(ElementKind::String.storage_kind(), Some(DriverKind::String));
        assert_eq!(ElementKind::I32.storage_kind(), None);
        assert_eq!(ElementKind::F32.storage_kind(), None);
        assert_eq!(ElementKind::Other.storage_kind(), None);
    }

    #[test]
    fn builtin_kinds() {
        assert_eq!(<u16 as DriverType>::KIND, ElementKind::U16);
        assert_eq!(<Vec<u8> as DriverType>::KIND, ElementKind::Bytes);
        assert_eq!(<String as DriverType>::KIND, ElementKind::String);
    }

    #[test]
    fn native_view_borrows() {
        let s = String::from("abc");
        assert_eq!(s.as_native(), Native::String(Cow::Borrowed("abc")));
        assert_eq!(7_i8.as_native(), Native::I8(7));
    }

    #[test]
    fn from_native_rejects_other_variants() {
        assert_eq!(i32::from_native(Native::I32(5)), Some(5));
        assert_eq!(i32::from_native(Native::I64(5)), None);
        assert_eq!(String::from_native(Native::Bytes(Cow::Owned(vec![]))), None);
    }

    #[test]
    fn from_driver_keeps_category() {
        assert_eq!(Native::from_driver(DriverValue::Int64(1)), Native::I64(1));
        assert_eq!(Native::from_driver(DriverValue::Null), Native::Opaque);
        assert_eq!(
            Native::from_driver(DriverValue::text("9")),
            Native::Bytes(Cow::Owned(b"9".to_vec()))
        );
    }
}
