//! POSIX error domains.
//!
//! - [`CErrorInfo`]: classic libc convention. Non-negative returns are
//!   success; a negative return (usually `-1`) means failure and the reason
//!   is in the thread's `errno`.
//! - [`NegErrnoInfo`]: kernel convention. A negative return is `-errno`
//!   itself, so decoding needs no thread-local state.
//! - [`ErrnoInfo`]: codes are raw errno values as stored in `errno`; only
//!   `0` succeeds. Values the platform does not know stay failures and decode
//!   to the platform's "unknown" text.
//!
//! Descriptions come from the platform's `strerror` table via
//! [`Errno::desc`].

use crate::checked::CheckedValue;
use crate::checked_code::CheckedCode;
use crate::error_info::ErrorInfo;
use libc::c_int;
use nix::errno::Errno;

/// Description used for every successful code.
pub const SUCCESS_DESCRIPTION: &str = "success";

/// libc return values: `>= 0` succeeds, failures are explained by `errno`.
///
/// `decode` reads the *current* `errno`, so it must run before anything
/// else can overwrite it. The propagation macros decode first and write to
/// the sink afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CErrorInfo;

impl ErrorInfo for CErrorInfo {
    type Code = c_int;

    #[inline]
    fn success() -> c_int {
        0
    }

    #[inline]
    fn is_success(code: c_int) -> bool {
        code >= 0
    }

    fn decode(code: c_int) -> String {
        if Self::is_success(code) {
            SUCCESS_DESCRIPTION.to_string()
        } else {
            Errno::last().desc().to_string()
        }
    }
}

/// Kernel-style return values: `>= 0` succeeds, `-errno` on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NegErrnoInfo;

impl ErrorInfo for NegErrnoInfo {
    type Code = c_int;

    #[inline]
    fn success() -> c_int {
        0
    }

    #[inline]
    fn is_success(code: c_int) -> bool {
        code >= 0
    }

    fn decode(code: c_int) -> String {
        if Self::is_success(code) {
            SUCCESS_DESCRIPTION.to_string()
        } else {
            Errno::from_raw(code.saturating_neg()).desc().to_string()
        }
    }
}

/// Raw errno values: `0` is success, anything else (unknown or negative
/// values included) is a failure.
///
/// The code is kept as `c_int` rather than [`Errno`]: `Errno::from_raw`
/// folds every unrecognised value into `Errno::UnknownErrno`, which is raw
/// `0` and would read as success. Convert a typed value with `errno as c_int`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ErrnoInfo;

impl ErrorInfo for ErrnoInfo {
    type Code = c_int;

    #[inline]
    fn success() -> c_int {
        0
    }

    #[inline]
    fn is_success(code: c_int) -> bool {
        code == 0
    }

    fn decode(code: c_int) -> String {
        if Self::is_success(code) {
            SUCCESS_DESCRIPTION.to_string()
        } else {
            Errno::from_raw(code).desc().to_string()
        }
    }
}

/// libc return value checked under [`CErrorInfo`].
pub type CheckedCCode = CheckedCode<CErrorInfo>;

/// Value or libc failure code.
pub type CheckedCValue<T> = CheckedValue<CErrorInfo, T>;

/// Kernel-style return value checked under [`NegErrnoInfo`].
pub type CheckedNegErrno = CheckedCode<NegErrnoInfo>;

/// Value or raw errno.
pub type CheckedErrno<T> = CheckedValue<ErrnoInfo, T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_info_classifies_by_sign() {
        assert!(CErrorInfo::is_success(CErrorInfo::success()));
        assert!(CErrorInfo::is_success(42));
        assert!(CErrorInfo::is_failure(-1));
        assert_eq!(CErrorInfo::decode(3), SUCCESS_DESCRIPTION);
    }

    #[test]
    fn c_info_decodes_current_errno() {
        Errno::set_raw(libc::ENOENT);
        assert_eq!(CErrorInfo::decode(-1), Errno::ENOENT.desc());
        Errno::set_raw(libc::EACCES);
        assert_eq!(CErrorInfo::decode(-1), Errno::EACCES.desc());
    }

    #[test]
    fn neg_errno_decodes_the_code_itself() {
        Errno::set_raw(libc::EPERM);
        assert_eq!(NegErrnoInfo::decode(-libc::ENOENT), Errno::ENOENT.desc());
        assert_eq!(NegErrnoInfo::decode(0), SUCCESS_DESCRIPTION);
        assert!(NegErrnoInfo::is_failure(-libc::EAGAIN));
    }

    #[test]
    fn neg_errno_survives_min_value() {
        // Must not overflow on negation.
        let text = NegErrnoInfo::decode(c_int::MIN);
        assert!(!text.is_empty());
    }

    #[test]
    fn errno_info_only_zero_succeeds() {
        assert!(ErrnoInfo::is_success(ErrnoInfo::success()));
        assert!(ErrnoInfo::is_failure(libc::EINVAL));
        assert_eq!(ErrnoInfo::decode(libc::EINVAL), Errno::EINVAL.desc());
        assert_eq!(ErrnoInfo::decode(0), SUCCESS_DESCRIPTION);
    }

    #[test]
    fn errno_info_unknown_and_negative_values_fail() {
        for code in [4000, -1, c_int::MIN] {
            assert!(ErrnoInfo::is_failure(code), "{code} classified as success");
            assert_eq!(ErrnoInfo::decode(code), Errno::UnknownErrno.desc());
            assert_ne!(ErrnoInfo::decode(code), SUCCESS_DESCRIPTION);
        }

        let v = CheckedErrno::<()>::failure(4000);
        assert!(!v.has_value());
        assert_ne!(v.decode_error(), SUCCESS_DESCRIPTION);
    }

    #[test]
    fn aliases_select_domains() {
        let fd = CheckedCCode::new(3);
        assert_eq!(fd.code(), 3);

        let failed = CheckedNegErrno::new(-libc::EBADF);
        assert_eq!(failed.decode_error(), Errno::EBADF.desc());

        let raw = CheckedErrno::<u32>::failure(Errno::EIO as c_int);
        assert_eq!(raw.code(), libc::EIO);
        assert_eq!(CheckedCValue::<u8>::success(1).code(), 0);
    }
}
