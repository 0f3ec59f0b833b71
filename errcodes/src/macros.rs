//! Early-return propagation macros.
//!
//! Each macro inspects a code or a checked value and, on failure, writes one
//! diagnostic line to a [`DiagnosticSink`](crate::DiagnosticSink) and
//! returns from the *enclosing function*.
//!
//! | Macro | Inspects | Returns on failure |
//! |-------|----------|--------------------|
//! | [`check_ret!`] | expression yielding a code | the given fallback |
//! | [`check!`] | expression yielding a code | `Failure::new(code).into()` |
//! | [`check_value_ret!`] | [`Checked`](crate::Checked) value | the given fallback |
//! | [`check_value!`] | [`Checked`](crate::Checked) value | `Failure::new(value.code()).into()` |
//!
//! The `Failure` variants let a function propagate without naming its own
//! error type: the declared return type picks the conversion.
//!
//! ```rust
//! use errcodes::{check, check_value, CErrorInfo, CheckedCCode, CheckedCValue};
//! use errcodes::sink::MemorySink;
//!
//! fn duplicate(fd: libc::c_int, sink: &mut MemorySink) -> CheckedCCode {
//!     let copy = CheckedCCode::new(unsafe { libc::dup(fd) });
//!     check_value!(copy, "Failed to duplicate descriptor", sink);
//!     copy
//! }
//!
//! fn close_copy(fd: libc::c_int, sink: &mut MemorySink) -> CheckedCValue<()> {
//!     let copy = duplicate(fd, sink);
//!     check_value!(copy, "No copy to close", sink);
//!     check!(unsafe { libc::close(copy.code()) }, CErrorInfo, sink);
//!     CheckedCValue::success(())
//! }
//!
//! let mut sink = MemorySink::new();
//! assert!(!close_copy(-1, &mut sink).has_value());
//! assert_eq!(sink.len(), 2);
//! assert!(sink.lines()[0].starts_with("Failed to duplicate descriptor with error "));
//! ```

/// Check a code and return `$fail_ret` if it denotes failure.
///
/// `$exp` is converted into `<$info as ErrorInfo>::Code` with `Into`. On
/// failure the line `Call '<exp>' failed with error: <decoded>` is written
/// to `$sink`.
///
/// ```rust
/// use errcodes::{check_ret, CErrorInfo};
///
/// fn status(code: i32, out: &mut Vec<u8>) -> i32 {
///     check_ret!(code, CErrorInfo, out, 42);
///     0
/// }
///
/// let mut out = Vec::new();
/// assert_eq!(status(-1, &mut out), 42);
/// assert!(String::from_utf8(out).unwrap().starts_with("Call 'code' failed with error: "));
/// ```
#[macro_export]
macro_rules! check_ret {
    ($exp:expr, $info:ty, $sink:expr, $fail_ret:expr $(,)?) => {{
        let code: <$info as $crate::ErrorInfo>::Code = ::core::convert::Into::into($exp);
        if !<$info as $crate::ErrorInfo>::is_success(code) {
            let description = <$info as $crate::ErrorInfo>::decode(code);
            #[allow(unused_imports)]
            use $crate::DiagnosticSink as _;
            $sink.report(::core::format_args!(
                "Call '{}' failed with error: {}",
                ::core::stringify!($exp),
                description
            ));
            return $fail_ret;
        }
    }};
}

/// Check a code and propagate it as a [`Failure`](crate::Failure).
///
/// Like [`check_ret!`], but returns `Failure::new(code).into()`, so the
/// enclosing function may return any type implementing
/// `From<Failure<Code>>`, such as `CheckedValue<E, T>` or `CheckedCode<E>`.
#[macro_export]
macro_rules! check {
    ($exp:expr, $info:ty, $sink:expr $(,)?) => {{
        let code: <$info as $crate::ErrorInfo>::Code = ::core::convert::Into::into($exp);
        if !<$info as $crate::ErrorInfo>::is_success(code) {
            let description = <$info as $crate::ErrorInfo>::decode(code);
            #[allow(unused_imports)]
            use $crate::DiagnosticSink as _;
            $sink.report(::core::format_args!(
                "Call '{}' failed with error: {}",
                ::core::stringify!($exp),
                description
            ));
            return ::core::convert::Into::into($crate::Failure::new(code));
        }
    }};
}

/// Check a [`Checked`](crate::Checked) value and return `$fail_ret` if it
/// holds no value.
///
/// On failure `<msg> with error <decoded>` is written to `$sink`. `$msg` is
/// anything implementing `Display`. `$value` is evaluated once and only
/// borrowed.
///
/// ```rust
/// use errcodes::{check_value_ret, CheckedNegErrno};
/// use errcodes::sink::MemorySink;
///
/// fn fd_or_stdin(fd: CheckedNegErrno, sink: &mut MemorySink) -> i32 {
///     check_value_ret!(fd, "Falling back to stdin", sink, 0);
///     fd.value()
/// }
///
/// let mut sink = MemorySink::new();
/// assert_eq!(fd_or_stdin(CheckedNegErrno::new(5), &mut sink), 5);
/// assert_eq!(fd_or_stdin(CheckedNegErrno::new(-libc::EMFILE), &mut sink), 0);
/// assert!(sink.lines()[0].starts_with("Falling back to stdin with error "));
/// ```
#[macro_export]
macro_rules! check_value_ret {
    ($value:expr, $msg:expr, $sink:expr, $fail_ret:expr $(,)?) => {{
        let checked = &$value;
        if !$crate::Checked::has_value(checked) {
            let description = $crate::Checked::decode_error(checked);
            #[allow(unused_imports)]
            use $crate::DiagnosticSink as _;
            $sink.report(::core::format_args!("{} with error {}", $msg, description));
            return $fail_ret;
        }
    }};
}

/// Check a [`Checked`](crate::Checked) value and propagate its code as a
/// [`Failure`](crate::Failure).
///
/// Like [`check_value_ret!`], but returns `Failure::new(value.code()).into()`.
#[macro_export]
macro_rules! check_value {
    ($value:expr, $msg:expr, $sink:expr $(,)?) => {{
        let checked = &$value;
        if !$crate::Checked::has_value(checked) {
            let description = $crate::Checked::decode_error(checked);
            #[allow(unused_imports)]
            use $crate::DiagnosticSink as _;
            $sink.report(::core::format_args!("{} with error {}", $msg, description));
            return ::core::convert::Into::into($crate::Failure::new(
                $crate::Checked::code(checked),
            ));
        }
    }};
}
