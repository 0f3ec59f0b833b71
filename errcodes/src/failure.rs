//! Deferred failure carrier.
//!
//! [`Failure<C>`] holds a failure code that has not yet been bound to an
//! [`ErrorInfo`] domain or a payload type. The propagation macros return it
//! through `.into()`, so the enclosing function's declared return type picks
//! the concrete [`CheckedValue`] or [`CheckedCode`]:
//!
//! ```rust
//! use errcodes::{CheckedCValue, Failure};
//!
//! fn parse_port(raw: &str) -> CheckedCValue<u16> {
//!     match raw.parse() {
//!         Ok(port) => CheckedCValue::success(port),
//!         Err(_) => Failure::new(-libc::EINVAL).into(),
//!     }
//! }
//!
//! assert_eq!(parse_port("x").code(), -libc::EINVAL);
//! ```
//!
//! Conversion always yields the failure alternative.

use crate::checked::CheckedValue;
use crate::checked_code::CheckedCode;
use crate::error_info::ErrorInfo;

/// A failure code in transit to its destination checked type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a Failure does nothing unless converted into a checked value"]
pub struct Failure<C> {
    code: C,
}

impl<C> Failure<C> {
    /// Wrap a failure code.
    #[inline]
    pub const fn new(code: C) -> Self {
        Self { code }
    }

    /// The carried code.
    #[inline]
    pub const fn code(&self) -> &C {
        &self.code
    }

    /// Unwrap the carried code.
    #[inline]
    pub fn into_code(self) -> C {
        self.code
    }

    /// Convert into the failure alternative of `CheckedValue<E, T>`.
    ///
    /// # Type Parameters
    ///
    /// * `E` - Destination domain; the code is widened with `Into<E::Code>`
    /// * `T` - Payload type of the destination, never populated
    ///
    /// # Returns
    ///
    /// `CheckedValue::failure(code.into())`, whatever `E::is_success` says
    /// about the code.
    #[inline]
    pub fn into_checked<E, T>(self) -> CheckedValue<E, T>
    where
        E: ErrorInfo,
        C: Into<E::Code>,
    {
        CheckedValue::failure(self.code.into())
    }

    /// Convert into the failure alternative of `CheckedCode<E>`.
    ///
    /// Unlike [`CheckedCode::new`], the code is not classified.
    #[inline]
    pub fn into_checked_code<E>(self) -> CheckedCode<E>
    where
        E: ErrorInfo,
        C: Into<E::Code>,
    {
        CheckedCode::from_failure(self.code.into())
    }
}

impl<E, T, C> From<Failure<C>> for CheckedValue<E, T>
where
    E: ErrorInfo,
    C: Into<E::Code>,
{
    fn from(failure: Failure<C>) -> Self {
        failure.into_checked()
    }
}

impl<E, C> From<Failure<C>> for CheckedCode<E>
where
    E: ErrorInfo,
    C: Into<E::Code>,
{
    fn from(failure: Failure<C>) -> Self {
        failure.into_checked_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct WideInfo;

    impl ErrorInfo for WideInfo {
        type Code = i64;

        fn success() -> i64 {
            0
        }

        fn is_success(code: i64) -> bool {
            code == 0
        }

        fn decode(code: i64) -> String {
            format!("wide {code}")
        }
    }

    #[test]
    fn converts_into_checked_value_as_failure() {
        let v: CheckedValue<WideInfo, String> = Failure::new(-3i64).into();
        assert!(!v.has_value());
        assert_eq!(v.code(), -3);
        assert_eq!(v.decode_error(), "wide -3");
    }

    #[test]
    fn widens_code_type() {
        let v: CheckedValue<WideInfo, ()> = Failure::new(-7i32).into();
        assert_eq!(v.code(), -7i64);
    }

    #[test]
    fn converts_into_checked_code_as_failure() {
        let c: CheckedCode<WideInfo> = Failure::new(5i8).into();
        assert!(!c.has_value());
        assert_eq!(c.code(), 5);
    }

    #[test]
    fn yields_raw_code() {
        let f = Failure::new(-1);
        assert_eq!(*f.code(), -1);
        assert_eq!(f.into_code(), -1);
    }
}
