//! Null and zero predicates.
//!
//! "Absent" and "zero" are different questions: a `0_i64` read from a
//! column is a real value, a `NULL` is not. The coercion engine only asks
//! [`is_absent`]; [`is_zero`] backs the selection helpers.

use crate::driver::DriverValue;

/// Types whose runtime value may be "nothing".
///
/// Implemented for the nil-capable shapes that reach the container
/// constructors and the driver boundary: `Option`, raw pointers,
/// [`DriverValue`] and `serde_json::Value`.
pub trait Absent {
    /// Returns `true` if this value represents absence.
    fn is_absent(&self) -> bool;
}

impl<T> Absent for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Absent for *const T {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Absent for *mut T {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<A: Absent + ?Sized> Absent for &A {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl Absent for DriverValue {
    #[inline]
    fn is_absent(&self) -> bool {
        matches!(self, DriverValue::Null)
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Absent for serde_json::Value {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

/// Returns `true` if `x` represents absence.
#[inline]
pub fn is_absent<A: Absent + ?Sized>(x: &A) -> bool {
    x.is_absent()
}

/// Returns `true` if `v` equals its type's default value.
#[inline]
pub fn is_zero<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}

/// Returns the first value that is not [`is_zero`].
///
/// ```rust
/// use maybe::first_non_zero;
///
/// assert_eq!(first_non_zero(["", "", "fallback", "other"]), Some("fallback"));
/// assert_eq!(first_non_zero([0, 0]), None);
/// ```
pub fn first_non_zero<T, I>(values: I) -> Option<T>
where
    T: Default + PartialEq,
    I: IntoIterator<Item = T>,
{
    values.into_iter().find(|v| !is_zero(v))
}
