//! Checked codes: the code itself is the meaningful result.
//!
//! Many C calls return a single integer that is either a payload (a file
//! descriptor, a byte count) or a failure marker. [`CheckedCode<E>`] holds
//! such a code and classifies it with `E::is_success` at construction:
//!
//! ```rust
//! use errcodes::CheckedCCode;
//!
//! let fd = CheckedCCode::new(7);
//! assert!(fd.has_value());
//! assert_eq!(fd.code(), 7);
//!
//! let failed = CheckedCCode::new(-1);
//! assert!(!failed.has_value());
//! assert_eq!(failed.code(), -1);
//! ```
//!
//! Unlike [`CheckedValue::code`], [`CheckedCode::code`] returns the original
//! code on the success branch too. The generic view with the canonical
//! success code is available through [`CheckedCode::as_checked_value`].

use crate::checked::{Checked, CheckedValue};
use crate::error_info::ErrorInfo;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A code of domain `E`, classified as success or failure by `E::is_success`.
pub struct CheckedCode<E: ErrorInfo> {
    inner: CheckedValue<E, E::Code>,
}

impl<E: ErrorInfo> CheckedCode<E> {
    /// Classify `code`: success if `E::is_success(code)`, failure otherwise.
    ///
    /// # Arguments
    ///
    /// * `code` - Raw result of a call in domain `E`
    ///
    /// # Returns
    ///
    /// A checked code whose [`code`](Self::code) is `code` on either branch.
    #[inline]
    pub fn new(code: E::Code) -> Self {
        let inner = if E::is_success(code) {
            CheckedValue::success(code)
        } else {
            CheckedValue::failure(code)
        };
        Self { inner }
    }

    /// Wrap a failure code without classifying it.
    #[inline]
    pub(crate) const fn from_failure(code: E::Code) -> Self {
        Self {
            inner: CheckedValue::failure(code),
        }
    }

    /// True if the code was classified as success.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.inner.has_value()
    }

    /// True if the code was classified as failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.inner.is_failure()
    }

    /// The original code, on either branch.
    #[inline]
    pub fn code(&self) -> E::Code {
        match self.inner.as_result() {
            Ok(code) | Err(code) => *code,
        }
    }

    /// `E::decode(self.code())`.
    pub fn decode_error(&self) -> String {
        E::decode(self.code())
    }

    /// The successful code.
    ///
    /// # Panics
    ///
    /// Panics if the code was classified as failure.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> E::Code {
        *self.inner.value()
    }

    /// The successful code, if any.
    #[inline]
    pub fn ok(self) -> Option<E::Code> {
        self.inner.ok()
    }

    /// Generic view; its `code()` reports `E::success()` on success.
    #[inline]
    pub const fn as_checked_value(&self) -> &CheckedValue<E, E::Code> {
        &self.inner
    }

    /// Convert into the generic checked value.
    #[inline]
    pub fn into_checked_value(self) -> CheckedValue<E, E::Code> {
        self.inner
    }

    /// Convert into a `Result` carrying the original code on both branches.
    #[inline]
    pub fn into_result(self) -> Result<E::Code, E::Code> {
        self.inner.into_result()
    }
}

impl<E: ErrorInfo> Checked for CheckedCode<E> {
    type Info = E;

    fn has_value(&self) -> bool {
        CheckedCode::has_value(self)
    }

    fn code(&self) -> E::Code {
        CheckedCode::code(self)
    }
}

impl<E: ErrorInfo> Clone for CheckedCode<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ErrorInfo> Copy for CheckedCode<E> {}

impl<E: ErrorInfo> PartialEq for CheckedCode<E> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<E: ErrorInfo> Eq for CheckedCode<E> where E::Code: Eq {}

impl<E: ErrorInfo> Hash for CheckedCode<E>
where
    E::Code: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<E: ErrorInfo> fmt::Debug for CheckedCode<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}
