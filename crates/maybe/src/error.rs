//! Error types for container access and driver-value coercion.
//!
//! Every fallible operation in this crate returns [`MaybeResult`]. The
//! coercion engine never retries and never returns a partially populated
//! container, so each variant is final from the caller's point of view.

use std::error::Error as StdError;

/// Result alias used throughout the crate.
pub type MaybeResult<T> = Result<T, MaybeError>;

/// Errors produced by the containers and the coercion engine.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum MaybeError {
    /// A value-or-abort accessor was called on an absent container.
    ///
    /// This is a caller error. [`Optional::unwrap`](crate::Optional::unwrap)
    /// panics with this message; [`Optional::try_unwrap`](crate::Optional::try_unwrap)
    /// returns it instead.
    #[error("expected a value, but none was present")]
    MissingValue,

    /// The element type has no conversion into or out of the driver vocabulary.
    #[error("unsupported type: {type_name}")]
    UnsupportedType {
        /// Rust type name of the element.
        type_name: &'static str,
    },

    /// The driver value's category cannot be converted into the element type.
    #[error("unsupported source type {source_kind} for {target}")]
    UnsupportedSourceType {
        /// Driver category of the source value.
        source_kind: &'static str,
        /// Rust type name of the destination.
        target: &'static str,
    },

    /// A numeric value does not fit the destination.
    #[error("value {value} overflows {target}")]
    Overflow {
        /// The offending value, rendered as text.
        value: String,
        /// Rust type name of the destination.
        target: &'static str,
    },

    /// A textual source could not be parsed into the destination.
    #[error("cannot parse {input:?} as {target}: {reason}")]
    Parse {
        /// The rejected input (lossily decoded if it was not UTF-8).
        input: String,
        /// Rust type name of the destination.
        target: &'static str,
        /// Parser diagnostic.
        reason: String,
    },

    /// Error raised by an element type's own encode or decode hook.
    #[error(transparent)]
    Custom(Box<dyn StdError + Send + Sync + 'static>),
}

impl MaybeError {
    /// Convenience constructor for [`MaybeError::UnsupportedType`].
    pub fn unsupported_type<T: ?Sized>() -> Self {
        Self::UnsupportedType {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Convenience constructor for [`MaybeError::UnsupportedSourceType`].
    pub fn unsupported_source<T: ?Sized>(source_kind: &'static str) -> Self {
        Self::UnsupportedSourceType {
            source_kind,
            target: std::any::type_name::<T>(),
        }
    }

    /// Convenience constructor for [`MaybeError::Overflow`].
    pub fn overflow<T: ?Sized>(value: impl ToString) -> Self {
        Self::Overflow {
            value: value.to_string(),
            target: std::any::type_name::<T>(),
        }
    }

    /// Convenience constructor for [`MaybeError::Parse`].
    pub fn parse<T: ?Sized>(input: &[u8], reason: impl ToString) -> Self {
        Self::Parse {
            input: String::from_utf8_lossy(input).into_owned(),
            target: std::any::type_name::<T>(),
            reason: reason.to_string(),
        }
    }

    /// Wraps an error raised by an element's own conversion hook.
    pub fn custom(err: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        Self::Custom(err.into())
    }

    /// Returns `true` if the error reports a numeric overflow.
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    /// Returns `true` if the element or source type has no defined coercion.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedType { .. } | Self::UnsupportedSourceType { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Construction ────────────────────────────────────────────────────

    #[test]
    fn overflow_names_value_and_target() {
        let err = MaybeError::overflow::<u8>(300);
        match &err {
            MaybeError::Overflow { value, target } => {
                assert_eq!(value, "300");
                assert_eq!(*target, "u8");
            }
            other => panic!("expected Overflow, got {other:?}"),
        }
        assert_eq!(err.to_string(), "value 300 overflows u8");
    }

    #[test]
    fn unsupported_source_names_both_types() {
        let err = MaybeError::unsupported_source::<i32>("bool");
        assert_eq!(err.to_string(), "unsupported source type bool for i32");
        assert!(err.is_unsupported());
    }

    #[test]
    fn parse_keeps_lossy_input() {
        let err = MaybeError::parse::<i64>(b"abc", "invalid digit found in string");
        assert_eq!(
            err.to_string(),
            "cannot parse \"abc\" as i64: invalid digit found in string"
        );
    }

    #[test]
    fn custom_is_transparent() {
        let err = MaybeError::custom("bad currency code");
        assert_eq!(err.to_string(), "bad currency code");
        assert!(!err.is_overflow());
    }

    #[test]
    fn missing_value_message() {
        assert_eq!(
            MaybeError::MissingValue.to_string(),
            "expected a value, but none was present"
        );
    }
}
