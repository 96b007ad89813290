//! Loss-aware conversion between elements and [`DriverValue`].
//!
//! Both directions run a fixed sequence of steps and stop at the first one
//! that applies:
//!
//! | Step | Encode (element → driver)       | Decode (driver → element)            |
//! |------|---------------------------------|--------------------------------------|
//! | 1    | null container → `Null`         | `Null` → null container              |
//! | 2    | `custom_encode` hook            | `custom_decode` hook                 |
//! | 3    | native storage kind passthrough | same category → store directly       |
//! | 4    | widen (unsigned: checked)       | per-category parse and range check   |
//!
//! Nothing is truncated or wrapped. A `u64` above `i64::MAX` fails to
//! encode, an `Int64(300)` fails to decode into `u8`, and an `f64` beyond
//! `f32::MAX` fails to decode into `f32`.

use std::borrow::Cow;
use std::str::FromStr;

use tracing::trace;

use super::DriverValue;
use super::element::{DriverType, ElementKind, Native};
use crate::error::{MaybeError, MaybeResult};
use crate::nullable::Nullable;
use crate::primitives::is_absent;

// ============================================================================
// ENCODE
// ============================================================================

/// Encodes a present element into the driver vocabulary.
pub fn encode<T: DriverType>(value: &T) -> MaybeResult<DriverValue> {
    if let Some(result) = value.custom_encode() {
        trace!(target: "maybe::driver", kind = %T::KIND, "encode via hook");
        return result;
    }

    match passthrough(value.as_native()) {
        Ok(encoded) => {
            trace!(target: "maybe::driver", kind = %T::KIND, "encode passthrough");
            Ok(encoded)
        }
        Err(native) => {
            trace!(target: "maybe::driver", kind = %T::KIND, "encode via widening");
            widen::<T>(native)
        }
    }
}

/// Passes storage-native views through; hands everything else back.
fn passthrough(native: Native<'_>) -> Result<DriverValue, Native<'_>> {
    match native {
        Native::I64(v) => Ok(DriverValue::Int64(v)),
        Native::F64(v) => Ok(DriverValue::Float64(v)),
        Native::Bool(v) => Ok(DriverValue::Bool(v)),
        Native::Bytes(v) => Ok(DriverValue::Bytes(v.into_owned())),
        Native::String(v) => Ok(DriverValue::String(v.into_owned())),
        #[cfg(feature = "temporal")]
        Native::Timestamp(v) => Ok(DriverValue::Timestamp(v)),
        other => Err(other),
    }
}

/// Widens narrower numeric views to the 64-bit storage types.
fn widen<T: DriverType>(native: Native<'_>) -> MaybeResult<DriverValue> {
    match native {
        Native::I8(v) => Ok(DriverValue::Int64(i64::from(v))),
        Native::I16(v) => Ok(DriverValue::Int64(i64::from(v))),
        Native::I32(v) => Ok(DriverValue::Int64(i64::from(v))),
        Native::Isize(v) => i64::try_from(v)
            .map(DriverValue::Int64)
            .map_err(|_| MaybeError::overflow::<i64>(v)),
        Native::U8(v) => unsigned_to_int64(u64::from(v)),
        Native::U16(v) => unsigned_to_int64(u64::from(v)),
        Native::U32(v) => unsigned_to_int64(u64::from(v)),
        Native::U64(v) => unsigned_to_int64(v),
        Native::Usize(v) => u64::try_from(v)
            .map_err(|_| MaybeError::overflow::<u64>(v))
            .and_then(unsigned_to_int64),
        Native::F32(v) => Ok(DriverValue::Float64(f64::from(v))),
        _ => Err(MaybeError::unsupported_type::<T>()),
    }
}

fn unsigned_to_int64(v: u64) -> MaybeResult<DriverValue> {
    i64::try_from(v)
        .map(DriverValue::Int64)
        .map_err(|_| MaybeError::overflow::<i64>(v))
}

// ============================================================================
// DECODE
// ============================================================================

/// Decodes a driver value into an element.
///
/// Returns `Ok(None)` for an absent source.
pub fn decode<T: DriverType>(src: DriverValue) -> MaybeResult<Option<T>> {
    if is_absent(&src) {
        trace!(target: "maybe::driver", kind = %T::KIND, "decode null");
        return Ok(None);
    }

    if let Some(result) = T::custom_decode(&src) {
        trace!(target: "maybe::driver", kind = %T::KIND, "decode via hook");
        return result.map(Some);
    }

    if T::KIND.storage_kind() == Some(src.kind()) {
        trace!(target: "maybe::driver", kind = %T::KIND, "decode passthrough");
        return rebuild::<T>(Native::from_driver(src)).map(Some);
    }

    trace!(target: "maybe::driver", kind = %T::KIND, source = %src.kind(), "decode via conversion");
    let native = if T::KIND.is_integer() {
        narrow_integer::<T>(integer_source::<T>(src)?)?
    } else if T::KIND.is_float() {
        narrow_float::<T>(float_source::<T>(src)?)?
    } else if T::KIND == ElementKind::String {
        Native::String(Cow::Owned(string_source::<T>(src)?))
    } else {
        return Err(MaybeError::unsupported_type::<T>());
    };

    rebuild::<T>(native).map(Some)
}

fn rebuild<T: DriverType>(native: Native<'static>) -> MaybeResult<T> {
    T::from_native(native).ok_or_else(MaybeError::unsupported_type::<T>)
}

/// Accepts `Int64`, or `Bytes` holding a base-10 integer.
fn integer_source<T>(src: DriverValue) -> MaybeResult<i64> {
    match src {
        DriverValue::Int64(v) => Ok(v),
        DriverValue::Bytes(raw) => parse_text::<i64, T>(&raw),
        other => Err(MaybeError::unsupported_source::<T>(other.kind().name())),
    }
}

/// Accepts `Float64`, or `Bytes` holding a base-10 float.
fn float_source<T>(src: DriverValue) -> MaybeResult<f64> {
    match src {
        DriverValue::Float64(v) => Ok(v),
        DriverValue::Bytes(raw) => parse_text::<f64, T>(&raw),
        other => Err(MaybeError::unsupported_source::<T>(other.kind().name())),
    }
}

/// Accepts `Bytes` holding UTF-8 text.
fn string_source<T>(src: DriverValue) -> MaybeResult<String> {
    match src {
        DriverValue::Bytes(raw) => String::from_utf8(raw).map_err(|err| {
            let reason = err.utf8_error();
            MaybeError::parse::<T>(err.as_bytes(), reason)
        }),
        other => Err(MaybeError::unsupported_source::<T>(other.kind().name())),
    }
}

fn parse_text<N, T>(raw: &[u8]) -> MaybeResult<N>
where
    N: FromStr,
    N::Err: std::fmt::Display,
{
    let text = std::str::from_utf8(raw).map_err(|err| MaybeError::parse::<T>(raw, err))?;
    text.parse::<N>().map_err(|err| MaybeError::parse::<T>(raw, err))
}

/// Bounds-checks a 64-bit integer against the destination width.
fn narrow_integer<T: DriverType>(v: i64) -> MaybeResult<Native<'static>> {
    let overflow = |_| MaybeError::overflow::<T>(v);
    match T::KIND {
        ElementKind::I8 => i8::try_from(v).map(Native::I8).map_err(overflow),
        ElementKind::I16 => i16::try_from(v).map(Native::I16).map_err(overflow),
        ElementKind::I32 => i32::try_from(v).map(Native::I32).map_err(overflow),
        ElementKind::I64 => Ok(Native::I64(v)),
        ElementKind::Isize => isize::try_from(v).map(Native::Isize).map_err(overflow),
        ElementKind::U8 => u8::try_from(v).map(Native::U8).map_err(overflow),
        ElementKind::U16 => u16::try_from(v).map(Native::U16).map_err(overflow),
        ElementKind::U32 => u32::try_from(v).map(Native::U32).map_err(overflow),
        ElementKind::U64 => u64::try_from(v).map(Native::U64).map_err(overflow),
        ElementKind::Usize => usize::try_from(v).map(Native::Usize).map_err(overflow),
        _ => Err(MaybeError::unsupported_type::<T>()),
    }
}

/// Checks the `f32` magnitude bound; `f64` passes unchanged.
fn narrow_float<T: DriverType>(v: f64) -> MaybeResult<Native<'static>> {
    match T::KIND {
        ElementKind::F64 => Ok(Native::F64(v)),
        ElementKind::F32 if v.abs() > f64::from(f32::MAX) => Err(MaybeError::overflow::<T>(v)),
        ElementKind::F32 => Ok(Native::F32(v as f32)),
        _ => Err(MaybeError::unsupported_type::<T>()),
    }
}

// ============================================================================
// NULLABLE BOUNDARY
// ============================================================================

impl<T: DriverType> Nullable<T> {
    /// Encodes this container for a database driver.
    ///
    /// A null container encodes as [`DriverValue::Null`].
    pub fn to_driver_value(&self) -> MaybeResult<DriverValue> {
        if self.is_null() {
            return Ok(DriverValue::Null);
        }
        encode(&self.value)
    }

    /// Populates this container from a driver value.
    ///
    /// On error the container is left null.
    pub fn scan(&mut self, src: impl Into<DriverValue>) -> MaybeResult<()> {
        self.reset();
        if let Some(value) = decode::<T>(src.into())? {
            self.populate(value);
        }
        Ok(())
    }

    /// Builds a container from a driver value.
    pub fn from_driver_value(src: impl Into<DriverValue>) -> MaybeResult<Self> {
        let mut out = Self::null();
        out.scan(src)?;
        Ok(out)
    }
}

impl<T: DriverType> TryFrom<DriverValue> for Nullable<T> {
    type Error = MaybeError;

    fn try_from(src: DriverValue) -> MaybeResult<Self> {
        Self::from_driver_value(src)
    }
}

impl<T: DriverType> TryFrom<&Nullable<T>> for DriverValue {
    type Error = MaybeError;

    fn try_from(value: &Nullable<T>) -> MaybeResult<Self> {
        value.to_driver_value()
    }
}
