//! Null-aware values for external systems.
//!
//! [`Nullable<T>`] models a database `NULL` or a JSON `null`. It has the
//! same shape as [`Optional<T>`](crate::Optional) but offers no in-place
//! mutation: a nullable is either built valid or null, or rebuilt wholesale
//! by a decode path ([`Nullable::scan`] or serde deserialization).

use std::hash::{Hash, Hasher};

use crate::optional::Optional;

/// A value that may be null.
///
/// Invariant: when null, the stored value equals `T::default()`.
///
/// Equality follows SQL-ish container semantics without three-valued
/// logic: two nulls are equal, two valid values compare with `T`'s
/// equality, and a null never equals a valid value.
#[derive(Debug, Clone, Copy)]
pub struct Nullable<T> {
    pub(crate) value: T,
    pub(crate) valid: bool,
}

impl<T: Default> Nullable<T> {
    /// Creates a valid (non-null) container.
    #[inline]
    pub fn valid(value: T) -> Self {
        Self { value, valid: true }
    }

    /// Creates a null container.
    #[inline]
    pub fn null() -> Self {
        Self {
            value: T::default(),
            valid: false,
        }
    }

    /// Builds a container from a borrowed pointee, cloning it.
    pub fn from_ptr(ptr: Option<&T>) -> Self
    where
        T: Clone,
    {
        match ptr {
            Some(value) => Self::valid(value.clone()),
            None => Self::null(),
        }
    }

    /// Returns the value, or `default` if null.
    #[inline]
    pub fn extract_or(self, default: T) -> T {
        if self.valid { self.value } else { default }
    }

    /// Converts into an [`Optional`]: null becomes absent.
    #[inline]
    pub fn to_optional(self) -> Optional<T> {
        Optional::from(self.into_option())
    }

    /// Resets to null, discarding the value.
    pub(crate) fn reset(&mut self) {
        self.value = T::default();
        self.valid = false;
    }

    /// Stores a decoded value and marks the container valid.
    pub(crate) fn populate(&mut self, value: T) {
        self.value = value;
        self.valid = true;
    }
}

impl<T> Nullable<T> {
    /// Returns `true` if the container is null.
    #[inline]
    pub const fn is_null(&self) -> bool {
        !self.valid
    }

    /// Returns `true` if the container holds a value.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the stored value together with the validity flag.
    ///
    /// When null the value is `T::default()`.
    #[inline]
    pub const fn extract(&self) -> (&T, bool) {
        (&self.value, self.valid)
    }

    /// Borrows the value, or `None` if null.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    /// Converts into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }
}

impl<T: PartialEq> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.valid, other.valid) {
            (false, false) => true,
            (true, true) => self.value == other.value,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Nullable<T> {}

impl<T: Hash> Hash for Nullable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.valid.hash(state);
        if self.valid {
            self.value.hash(state);
        }
    }
}

impl<T: Default> Default for Nullable<T> {
    #[inline]
    fn default() -> Self {
        Self::null()
    }
}

impl<T: Default> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::valid(value),
            None => Self::null(),
        }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    #[inline]
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}

impl<T: Default> From<Optional<T>> for Nullable<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.to_nullable()
    }
}
