//! errcodes: checked values for coded error domains.
//!
//! C-style APIs report failure through a status code whose meaning depends
//! on the API family. This crate gives such codes a type-level home and a
//! small propagation layer on top.
//!
//! # Module Structure
//!
//! - [`error_info`] - The [`ErrorInfo`] contract describing a code domain
//! - [`checked`] - [`CheckedValue`]: a value or the code explaining its absence
//! - [`checked_code`] - [`CheckedCode`]: a code that is itself the result
//! - [`failure`] - [`Failure`]: a failure code on its way to a checked type
//! - [`sink`] - Diagnostic sinks written by the propagation macros, [`LogLevel`]
//! - [`posix`] - errno-based domains ([`CErrorInfo`] and friends)
//! - [`prelude`] - Common re-exports
//!
//! Propagation macros: [`check_ret!`], [`check!`], [`check_value_ret!`],
//! [`check_value!`].
//!
//! # Usage
//!
//! ```rust
//! use errcodes::prelude::*;
//! use std::ffi::CString;
//!
//! fn open_dir(path: &str, sink: &mut MemorySink) -> CheckedCCode {
//!     let Ok(c_path) = CString::new(path) else {
//!         return CheckedCCode::new(-1);
//!     };
//!     let fd = unsafe { libc::open(c_path.as_ptr(), libc::O_RDONLY | libc::O_DIRECTORY) };
//!     check!(fd, CErrorInfo, sink);
//!     CheckedCCode::new(fd)
//! }
//!
//! let mut sink = MemorySink::new();
//! let fd = open_dir("/", &mut sink);
//! assert!(fd.has_value());
//! assert!(sink.is_empty());
//! unsafe { libc::close(fd.code()) };
//!
//! let missing = open_dir("/nonexistent/errcodes", &mut sink);
//! assert_eq!(missing.code(), -1);
//! assert_eq!(sink.len(), 1);
//! ```

pub mod checked;
pub mod checked_code;
pub mod error_info;
pub mod failure;
mod macros;
pub mod posix;
pub mod prelude;
pub mod sink;

pub use checked::{Checked, CheckedValue, CodeError};
pub use checked_code::CheckedCode;
pub use error_info::ErrorInfo;
pub use failure::Failure;
pub use posix::{
    CErrorInfo, CheckedCCode, CheckedCValue, CheckedErrno, CheckedNegErrno, ErrnoInfo,
    NegErrnoInfo,
};
pub use sink::{DiagnosticSink, LogLevel};
