//! Error domain contract.
//!
//! An [`ErrorInfo`] implementor describes one family of error codes: the
//! type used to carry a code, which codes mean "no error", the canonical
//! success code, and how to turn a code into text.
//!
//! Implementors are zero-sized marker types. Every operation is an
//! associated function, so a domain is selected purely at the type level
//! (`CheckedValue<CErrorInfo, T>`) and never stored at runtime.
//!
//! # Requirements
//!
//! - `is_success(success())` must be `true`.
//! - `is_success` may accept more than one code (e.g. "non-negative is
//!   success" for C return values).
//! - `decode` must return a descriptive string for `success()` and for every
//!   code the domain handles.
//!
//! # Example
//!
//! ```rust
//! use errcodes::ErrorInfo;
//!
//! /// HTTP-ish status codes: 2xx is success.
//! struct HttpInfo;
//!
//! impl ErrorInfo for HttpInfo {
//!     type Code = u16;
//!
//!     fn success() -> u16 {
//!         200
//!     }
//!
//!     fn is_success(code: u16) -> bool {
//!         (200..300).contains(&code)
//!     }
//!
//!     fn decode(code: u16) -> String {
//!         match code {
//!             200..=299 => "ok".to_string(),
//!             404 => "not found".to_string(),
//!             other => format!("status {other}"),
//!         }
//!     }
//! }
//!
//! assert!(HttpInfo::is_success(HttpInfo::success()));
//! assert!(HttpInfo::is_failure(404));
//! ```

use std::fmt;

/// Contract for an error-code domain.
pub trait ErrorInfo {
    /// Representation of a status code in this domain.
    type Code: Copy + PartialEq + fmt::Debug;

    /// The code meaning "no error".
    fn success() -> Self::Code;

    /// Returns true if `code` denotes success.
    fn is_success(code: Self::Code) -> bool;

    /// Human-readable description of `code`.
    fn decode(code: Self::Code) -> String;

    /// Returns true if `code` denotes failure.
    #[inline]
    fn is_failure(code: Self::Code) -> bool {
        !Self::is_success(code)
    }
}
