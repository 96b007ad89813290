//! In-program optional values.
//!
//! [`Optional<T>`] is a value plus a presence flag. Unlike
//! [`std::option::Option`] it keeps the slot initialised when empty: an
//! absent container always holds `T::default()`, so its layout and zero
//! state line up with [`Nullable<T>`](crate::Nullable) and the two convert
//! into each other without reallocation.
//!
//! ```rust
//! use maybe::Optional;
//!
//! let mut port = Optional::<u16>::none();
//! assert!(port.is_none());
//!
//! port.set(8080);
//! assert_eq!(port.try_get(), (&8080, true));
//!
//! port.clear();
//! assert_eq!(port.try_get(), (&0, false));
//! ```

use crate::error::{MaybeError, MaybeResult};
use crate::nullable::Nullable;

/// A value that is either present or absent.
///
/// Invariant: when absent, the stored value equals `T::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    value: T,
    present: bool,
}

impl<T: Default> Optional<T> {
    /// Creates a present container holding `value`.
    #[inline]
    pub fn some(value: T) -> Self {
        Self {
            value,
            present: true,
        }
    }

    /// Creates an absent container.
    #[inline]
    pub fn none() -> Self {
        Self {
            value: T::default(),
            present: false,
        }
    }

    /// Builds a container from a borrowed pointee, cloning it.
    ///
    /// `None` yields an absent container.
    pub fn from_ptr(ptr: Option<&T>) -> Self
    where
        T: Clone,
    {
        match ptr {
            Some(value) => Self::some(value.clone()),
            None => Self::none(),
        }
    }

    /// Stores `value` and marks the container present.
    ///
    /// Replaces any previous value.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.present = true;
    }

    /// Marks the container absent and resets the value to its default.
    #[inline]
    pub fn clear(&mut self) {
        self.value = T::default();
        self.present = false;
    }

    /// Moves the value out, leaving the container absent.
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::none())
    }

    /// Returns the value, or [`MaybeError::MissingValue`] if absent.
    pub fn try_unwrap(self) -> MaybeResult<T> {
        if self.present {
            Ok(self.value)
        } else {
            Err(MaybeError::MissingValue)
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with the [`MaybeError::MissingValue`] message if the container
    /// is absent. Calling this on an absent container is a caller error;
    /// check [`is_some`](Self::is_some) first or use
    /// [`try_unwrap`](Self::try_unwrap).
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the value, or `default` if absent.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        if self.present { self.value } else { default }
    }

    /// Applies `f` to the value, substituting `default` first when absent.
    ///
    /// `f` is always called.
    pub fn and_then_or<U, F>(self, default: T, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        f(self.unwrap_or(default))
    }

    /// Converts into a [`Nullable`] with the same presence.
    #[inline]
    pub fn to_nullable(self) -> Nullable<T> {
        Nullable::from(self.into_option())
    }
}

impl<T> Optional<T> {
    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        self.present
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.present
    }

    /// Returns the stored value together with the presence flag.
    ///
    /// When absent the value is `T::default()`.
    #[inline]
    pub const fn try_get(&self) -> (&T, bool) {
        (&self.value, self.present)
    }

    /// Returns a clone of the value, or `default` if absent.
    pub fn get_or(&self, default: T) -> T
    where
        T: Clone,
    {
        if self.present {
            self.value.clone()
        } else {
            default
        }
    }

    /// Borrows the value, or `None` if absent.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.present.then_some(&self.value)
    }

    /// Mutably borrows the value, or `None` if absent.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.present {
            Some(&mut self.value)
        } else {
            None
        }
    }

    /// Converts into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.present.then_some(self.value)
    }

    /// Applies `f` to the value if present; absence propagates unchanged.
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        U: Default,
        F: FnOnce(T) -> Optional<U>,
    {
        match self.into_option() {
            Some(value) => f(value),
            None => Optional::none(),
        }
    }

    /// Maps the value if present.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        U: Default,
        F: FnOnce(T) -> U,
    {
        match self.into_option() {
            Some(value) => Optional::some(f(value)),
            None => Optional::none(),
        }
    }
}

impl<T: Default> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T: Default> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::none(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T: Default> From<Nullable<T>> for Optional<T> {
    #[inline]
    fn from(value: Nullable<T>) -> Self {
        value.to_optional()
    }
}
