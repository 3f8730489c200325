//! The [`Opt`] value type.
//!
//! An [`Opt<T>`] is either `Some` (holding a payload of type `T`) or
//! `None`. The payload is stored inline next to the presence flag, so an
//! `Opt<T>` is `Copy`, `Eq` and `Hash` whenever `T` is, and can be used as
//! a map key or set member without any extra indirection.
//!
//! Methods never mutate the receiver. The only in-place writes are the
//! codec entry points in [`crate::json`] and [`crate::yaml`].

use crate::error::OptError;
use std::fmt;

/// A value that is either `Some` (present) or `None` (absent).
///
/// A default-constructed `Opt<T>` is `None`, for every `T`. That makes
/// it safe to embed as a struct field without explicit initialization.
///
/// # Examples
///
/// ```
/// use opt::Opt;
///
/// let present = Opt::some(123);
/// assert!(present.is_some());
/// assert_eq!(present.unwrap(), 123);
///
/// let absent: Opt<i32> = Opt::default();
/// assert!(absent.is_none());
/// assert_eq!(absent.unwrap(), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opt<T> {
    inner: Option<T>,
}

/// Shorthand for [`Opt::some`].
pub fn some<T>(value: T) -> Opt<T> {
    Opt::some(value)
}

/// Shorthand for [`Opt::none`].
pub fn none<T>() -> Opt<T> {
    Opt::none()
}

impl<T> Opt<T> {
    /// Wrap `value` as a present `Opt`.
    pub const fn some(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// An absent `Opt`.
    pub const fn none() -> Self {
        Self { inner: None }
    }

    /// Returns `true` if the value is absent.
    pub const fn is_none(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns `true` if the value is present.
    pub const fn is_some(&self) -> bool {
        self.inner.is_some()
    }

    /// Borrow the payload in place, or `None` when absent.
    ///
    /// The reference points into this `Opt`, so it lives only as long as
    /// the borrow of `self`.
    ///
    /// ```
    /// use opt::Opt;
    ///
    /// let o = Opt::some(String::from("foo"));
    /// assert_eq!(o.unwrap_as_ref().map(String::as_str), Some("foo"));
    ///
    /// let n: Opt<String> = Opt::none();
    /// assert!(n.unwrap_as_ref().is_none());
    /// ```
    pub fn unwrap_as_ref(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    /// Take the payload out, failing with [`OptError::NoneValueTaken`]
    /// when the value is absent.
    ///
    /// ```
    /// use opt::{Opt, OptError};
    ///
    /// assert_eq!(Opt::some(123).take(), Ok(123));
    /// assert_eq!(Opt::<i32>::none().take(), Err(OptError::NoneValueTaken));
    /// ```
    pub fn take(self) -> Result<T, OptError> {
        self.inner.ok_or(OptError::NoneValueTaken)
    }

    /// The payload, or `fallback` when absent.
    ///
    /// ```
    /// use opt::Opt;
    ///
    /// assert_eq!(Opt::some(123).take_or(666), 123);
    /// assert_eq!(Opt::none().take_or(666), 666);
    /// ```
    pub fn take_or(self, fallback: T) -> T {
        match self.inner {
            Some(value) => value,
            None => fallback,
        }
    }

    /// The payload, or the result of `fallback` when absent.
    ///
    /// `fallback` is only called for an absent value.
    ///
    /// ```
    /// use opt::Opt;
    ///
    /// assert_eq!(Opt::some(123).take_or_else(|| 666), 123);
    /// assert_eq!(Opt::none().take_or_else(|| 666), 666);
    /// ```
    pub fn take_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.inner {
            Some(value) => value,
            None => fallback(),
        }
    }

    /// `self` if present, otherwise `fallback`.
    ///
    /// ```
    /// use opt::Opt;
    ///
    /// assert_eq!(Opt::some("actual").or(Opt::some("fallback")), Opt::some("actual"));
    /// assert_eq!(Opt::none().or(Opt::some("fallback")), Opt::some("fallback"));
    /// ```
    pub fn or(self, fallback: Opt<T>) -> Opt<T> {
        if self.is_some() { self } else { fallback }
    }

    /// `self` if present, otherwise the result of `fallback`.
    ///
    /// `fallback` is only called for an absent value.
    ///
    /// ```
    /// use opt::Opt;
    ///
    /// let fallback = || Opt::some("fallback");
    /// assert_eq!(Opt::some("actual").or_else(fallback), Opt::some("actual"));
    /// assert_eq!(Opt::none().or_else(fallback), Opt::some("fallback"));
    /// ```
    pub fn or_else<F>(self, fallback: F) -> Opt<T>
    where
        F: FnOnce() -> Opt<T>,
    {
        if self.is_some() { self } else { fallback() }
    }

    /// Call `f` with the payload if present.
    ///
    /// ```
    /// use opt::Opt;
    ///
    /// let mut seen = Vec::new();
    /// Opt::some("foo").if_some(|v| seen.push(*v));
    /// Opt::<&str>::none().if_some(|v| seen.push(*v));
    /// assert_eq!(seen, ["foo"]);
    /// ```
    pub fn if_some<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.inner {
            f(value);
        }
    }

    /// Call `f` with the payload if present and return its result.
    /// Returns `Ok(())` without calling `f` when absent.
    ///
    /// ```
    /// use opt::Opt;
    ///
    /// let check = |v: &i32| if *v > 0 { Ok(()) } else { Err("not positive") };
    /// assert_eq!(Opt::some(1).if_some_with_error(check), Ok(()));
    /// assert_eq!(Opt::some(-1).if_some_with_error(check), Err("not positive"));
    /// assert_eq!(Opt::none().if_some_with_error(check), Ok(()));
    /// ```
    pub fn if_some_with_error<F, E>(&self, f: F) -> Result<(), E>
    where
        F: FnOnce(&T) -> Result<(), E>,
    {
        match &self.inner {
            Some(value) => f(value),
            None => Ok(()),
        }
    }

    /// Call `f` if absent.
    pub fn if_none<F>(&self, f: F)
    where
        F: FnOnce(),
    {
        if self.is_none() {
            f();
        }
    }

    /// Call `f` if absent and return its result.
    /// Returns `Ok(())` without calling `f` when present.
    ///
    /// ```
    /// use opt::Opt;
    ///
    /// let missing = || Err("value is missing");
    /// assert_eq!(Opt::some(1).if_none_with_error(missing), Ok(()));
    /// assert_eq!(Opt::<i32>::none().if_none_with_error(missing), Err("value is missing"));
    /// ```
    pub fn if_none_with_error<F, E>(&self, f: F) -> Result<(), E>
    where
        F: FnOnce() -> Result<(), E>,
    {
        match self.inner {
            Some(_) => Ok(()),
            None => f(),
        }
    }

    /// Borrow as a standard [`Option`]. Alias of [`Opt::unwrap_as_ref`].
    pub fn as_option(&self) -> Option<&T> {
        self.unwrap_as_ref()
    }

    /// Convert into a standard [`Option`].
    pub fn into_option(self) -> Option<T> {
        self.inner
    }
}

impl<T: Default> Opt<T> {
    /// The payload, or `T::default()` when absent. Never panics.
    ///
    /// ```
    /// use opt::Opt;
    ///
    /// assert_eq!(Opt::some(String::from("foo")).unwrap(), "foo");
    /// assert_eq!(Opt::<String>::none().unwrap(), "");
    /// ```
    pub fn unwrap(self) -> T {
        self.inner.unwrap_or_default()
    }
}

impl<T: Clone> Opt<T> {
    /// Build an `Opt` from a possibly-missing reference, cloning the
    /// referent.
    ///
    /// The result owns its payload: later changes to the original value
    /// are not visible through it. Use [`Opt::ptr_from_nillable`] to keep
    /// the reference instead.
    ///
    /// ```
    /// use opt::Opt;
    ///
    /// let mut n = 123;
    /// let o = Opt::from_nillable(Some(&n));
    /// n += 1;
    /// assert_eq!(o.unwrap(), 123);
    /// assert_eq!(n, 124);
    ///
    /// assert!(Opt::<i32>::from_nillable(None).is_none());
    /// ```
    pub fn from_nillable(value: Option<&T>) -> Self {
        Self {
            inner: value.cloned(),
        }
    }
}

impl<'a, T: ?Sized> Opt<&'a T> {
    /// Build an `Opt` from a possibly-missing reference without cloning.
    ///
    /// The result shares the referent with its owner, so changes made
    /// through interior mutability are observed through the `Opt`.
    ///
    /// ```
    /// use opt::Opt;
    /// use std::cell::Cell;
    ///
    /// let n = Cell::new(123);
    /// let o = Opt::ptr_from_nillable(Some(&n));
    /// n.set(124);
    /// assert_eq!(o.take().map(Cell::get), Ok(124));
    /// ```
    pub fn ptr_from_nillable(value: Option<&'a T>) -> Self {
        Self { inner: value }
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        Self { inner: value }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(value: Opt<T>) -> Self {
        value.inner
    }
}

/// Renders `None[]` or `Some[<payload>]` using the payload's own
/// `Display` implementation. Formatter flags are passed to the payload.
impl<T: fmt::Display> fmt::Display for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => {
                f.write_str("Some[")?;
                fmt::Display::fmt(value, f)?;
                f.write_str("]")
            }
            None => f.write_str("None[]"),
        }
    }
}

/// Same shape as `Display`, with the payload's `Debug` representation.
impl<T: fmt::Debug> fmt::Debug for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => {
                f.write_str("Some[")?;
                fmt::Debug::fmt(value, f)?;
                f.write_str("]")
            }
            None => f.write_str("None[]"),
        }
    }
}
