//! Checked values: a result or the code explaining its absence.
//!
//! [`CheckedValue<E, T>`] holds either a `T` (success) or an `E::Code`
//! (failure), where `E` is an [`ErrorInfo`] domain. Exactly one alternative
//! is populated at any time.
//!
//! # Construction
//!
//! There is deliberately no constructor that guesses the branch from the
//! argument type. When `T` and `E::Code` are the same (or convertible) type,
//! such a guess would be ambiguous, so the branch is always named:
//!
//! ```rust
//! use errcodes::CheckedCValue;
//!
//! let ok = CheckedCValue::<i32>::success(5);
//! assert!(ok.has_value());
//! assert_eq!(*ok.value(), 5);
//!
//! let failed = CheckedCValue::<i32>::failure(-1);
//! assert!(!failed.has_value());
//! assert_eq!(failed.code(), -1);
//! ```
//!
//! Bare conversions are rejected at compile time:
//!
//! ```compile_fail
//! use errcodes::CheckedCValue;
//!
//! let guessed: CheckedCValue<i32> = 5.into();
//! ```
//!
//! A `Result<T, E::Code>` already names its branch and converts directly.
//!
//! # Payload access
//!
//! [`CheckedValue::value`], [`CheckedValue::into_value`] and the `Deref`
//! impls panic when the failure alternative is populated. Use
//! [`CheckedValue::ok`] or [`CheckedValue::as_result`] for non-panicking
//! access.

use crate::error_info::ErrorInfo;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use thiserror::Error;

// ─── Shared Inspection Trait ────────────────────────────────────────

/// Common inspection surface of [`CheckedValue`] and
/// [`CheckedCode`](crate::CheckedCode).
///
/// The value-checking propagation macros accept anything implementing this.
pub trait Checked {
    /// Error domain of the value.
    type Info: ErrorInfo;

    /// True if the success alternative is populated.
    fn has_value(&self) -> bool;

    /// Code describing the value.
    fn code(&self) -> <Self::Info as ErrorInfo>::Code;

    /// Decoded description of [`Checked::code`].
    fn decode_error(&self) -> String {
        Self::Info::decode(self.code())
    }
}

impl<C: Checked + ?Sized> Checked for &C {
    type Info = C::Info;

    fn has_value(&self) -> bool {
        (**self).has_value()
    }

    fn code(&self) -> <Self::Info as ErrorInfo>::Code {
        (**self).code()
    }

    fn decode_error(&self) -> String {
        (**self).decode_error()
    }
}

// ─── Error Interop ──────────────────────────────────────────────────

/// A failure code together with its decoded description.
///
/// Produced by [`CheckedValue::into_error_result`] for callers that want to
/// leave the checked world and use `?` with `std::error::Error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description} (code {code:?})")]
pub struct CodeError<C> {
    /// The failure code.
    pub code: C,
    /// Decoded description at the time of conversion.
    pub description: String,
}

// ─── CheckedValue ───────────────────────────────────────────────────

/// Either a successfully produced `T` or an `E::Code` explaining the failure.
pub struct CheckedValue<E: ErrorInfo, T> {
    inner: Result<T, E::Code>,
    info: PhantomData<fn() -> E>,
}

impl<E: ErrorInfo, T> CheckedValue<E, T> {
    /// Create a successful value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self {
            inner: Ok(value),
            info: PhantomData,
        }
    }

    /// Create a successful value by converting `args` into `T`.
    ///
    /// # Arguments
    ///
    /// * `args` - Anything `T` can be built from with `From`
    ///
    /// # Returns
    ///
    /// The success alternative holding `T::from(args)`.
    #[inline]
    pub fn success_from<A>(args: A) -> Self
    where
        T: From<A>,
    {
        Self::success(T::from(args))
    }

    /// Create a failed value.
    ///
    /// # Arguments
    ///
    /// * `code` - Failure code of domain `E`
    ///
    /// The tag is trusted: `code` is stored as a failure even if
    /// `E::is_success(code)` holds. Callers must pass a failure code for
    /// [`code`](Self::code) and [`has_value`](Self::has_value) to agree.
    #[inline]
    pub const fn failure(code: E::Code) -> Self {
        Self {
            inner: Err(code),
            info: PhantomData,
        }
    }

    /// Build from a `Result` whose variant names the branch.
    ///
    /// # Arguments
    ///
    /// * `result` - `Ok(value)` for success, `Err(code)` for failure
    ///
    /// # Returns
    ///
    /// A checked value populated on the same branch; `code` is not
    /// re-classified with `E::is_success`.
    #[inline]
    pub const fn from_result(result: Result<T, E::Code>) -> Self {
        Self {
            inner: result,
            info: PhantomData,
        }
    }

    /// True if the success alternative is populated.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.inner.is_ok()
    }

    /// True if the failure alternative is populated.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.inner.is_err()
    }

    /// The stored failure code, or `E::success()` if there is a value.
    ///
    /// Which success code originally produced the value is not retained;
    /// use [`CheckedCode`](crate::CheckedCode) when it matters.
    #[inline]
    pub fn code(&self) -> E::Code {
        match &self.inner {
            Ok(_) => E::success(),
            Err(code) => *code,
        }
    }

    /// `E::decode(self.code())`.
    pub fn decode_error(&self) -> String {
        E::decode(self.code())
    }

    /// The held value.
    ///
    /// # Panics
    ///
    /// Panics if the failure alternative is populated.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.inner {
            Ok(value) => value,
            Err(code) => access_failed::<E>(*code),
        }
    }

    /// The held value, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the failure alternative is populated.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.inner {
            Ok(value) => value,
            Err(code) => access_failed::<E>(*code),
        }
    }

    /// Consume and return the held value.
    ///
    /// # Panics
    ///
    /// Panics if the failure alternative is populated.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.inner {
            Ok(value) => value,
            Err(code) => access_failed::<E>(code),
        }
    }

    /// The held value, if any.
    #[inline]
    pub fn ok(self) -> Option<T> {
        self.inner.ok()
    }

    /// Borrow the held value, if any.
    #[inline]
    pub fn as_ref_value(&self) -> Option<&T> {
        self.inner.as_ref().ok()
    }

    /// Borrow as a `Result`.
    #[inline]
    pub const fn as_result(&self) -> Result<&T, &E::Code> {
        self.inner.as_ref()
    }

    /// Convert into the underlying `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E::Code> {
        self.inner
    }

    /// Convert into a `Result` whose error implements `std::error::Error`.
    ///
    /// The description is decoded now, so errno-backed domains must call
    /// this before errno is overwritten.
    ///
    /// # Errors
    ///
    /// `CodeError { code, description }` if the failure alternative is
    /// populated.
    pub fn into_error_result(self) -> Result<T, CodeError<E::Code>> {
        self.inner.map_err(|code| CodeError {
            code,
            description: E::decode(code),
        })
    }

    /// Transform the held value, keeping any failure code.
    pub fn map<U, F>(self, f: F) -> CheckedValue<E, U>
    where
        F: FnOnce(T) -> U,
    {
        CheckedValue::from_result(self.inner.map(f))
    }
}

#[cold]
#[track_caller]
fn access_failed<E: ErrorInfo>(code: E::Code) -> ! {
    panic!(
        "value accessed on a failed CheckedValue (code {code:?}): {}",
        E::decode(code)
    )
}

impl<E: ErrorInfo, T> From<Result<T, E::Code>> for CheckedValue<E, T> {
    fn from(result: Result<T, E::Code>) -> Self {
        Self::from_result(result)
    }
}

impl<E: ErrorInfo, T> Checked for CheckedValue<E, T> {
    type Info = E;

    fn has_value(&self) -> bool {
        CheckedValue::has_value(self)
    }

    fn code(&self) -> E::Code {
        CheckedValue::code(self)
    }
}

impl<E: ErrorInfo, T> Deref for CheckedValue<E, T> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        self.value()
    }
}

impl<E: ErrorInfo, T> DerefMut for CheckedValue<E, T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        self.value_mut()
    }
}

// Value semantics follow `T` and `E::Code`; the marker `E` carries no bounds.

impl<E: ErrorInfo, T: Clone> Clone for CheckedValue<E, T> {
    fn clone(&self) -> Self {
        Self::from_result(self.inner.clone())
    }
}

impl<E: ErrorInfo, T: Copy> Copy for CheckedValue<E, T> {}

impl<E: ErrorInfo, T: PartialEq> PartialEq for CheckedValue<E, T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<E: ErrorInfo, T: Eq> Eq for CheckedValue<E, T> where E::Code: Eq {}

impl<E: ErrorInfo, T: Hash> Hash for CheckedValue<E, T>
where
    E::Code: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<E: ErrorInfo, T: fmt::Debug> fmt::Debug for CheckedValue<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => f.debug_tuple("Success").field(value).finish(),
            Err(code) => f.debug_tuple("Failure").field(code).finish(),
        }
    }
}
