//! Checked file operations on raw libc calls.
//!
//! Every operation reports failures to the caller's sink through the
//! `errcodes` propagation macros and returns a checked value or a fallback.
//! Paths containing an interior NUL byte fail with `EINVAL`, the same way
//! the kernel rejects malformed arguments.

use errcodes::prelude::*;
use libc::c_int;
use nix::errno::Errno;
use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Descriptor owned by the probe, closed on drop.
#[derive(Debug)]
struct OwnedFd(c_int);

impl OwnedFd {
    fn raw(&self) -> c_int {
        self.0
    }
}

impl Drop for OwnedFd {
    fn drop(&mut self) {
        // SAFETY: the guard is the only owner of this open descriptor.
        if unsafe { libc::close(self.0) } < 0 {
            tracing::debug!(fd = self.0, error = %Errno::last(), "close failed");
        }
    }
}

fn to_c_path(path: &Path) -> Option<CString> {
    CString::new(path.as_os_str().as_bytes()).ok()
}

/// `open(2)` returning the raw libc result (`-1` + errno on failure).
fn open_raw(path: &Path, flags: c_int) -> c_int {
    let Some(c_path) = to_c_path(path) else {
        Errno::set_raw(libc::EINVAL);
        return -1;
    };
    // SAFETY: c_path is NUL-terminated and outlives the call.
    unsafe { libc::open(c_path.as_ptr(), flags) }
}

/// `access(2)` with `R_OK`, raw libc result.
fn access_readable(path: &Path) -> c_int {
    let Some(c_path) = to_c_path(path) else {
        Errno::set_raw(libc::EINVAL);
        return -1;
    };
    // SAFETY: c_path is NUL-terminated and outlives the call.
    unsafe { libc::access(c_path.as_ptr(), libc::R_OK) }
}

/// `fstat(2)` into `out`, raw libc result.
fn fstat_raw(fd: &OwnedFd, out: &mut libc::stat) -> c_int {
    // SAFETY: fd is open and out is valid writable storage for one `struct stat`.
    unsafe { libc::fstat(fd.raw(), out) }
}

/// Open `path` read-only; the descriptor is the checked code.
///
/// # Arguments
///
/// * `path` - File to open; an interior NUL fails with `EINVAL`
/// * `sink` - Receives one line if the open fails
///
/// # Returns
///
/// * success: the new descriptor, owned by the caller, who must close it
/// * failure: `-1`, with the reason already written to `sink`
pub fn open_readonly<S>(path: &Path, sink: &mut S) -> CheckedCCode
where
    S: DiagnosticSink + ?Sized,
{
    let fd = CheckedCCode::new(open_raw(path, libc::O_RDONLY | libc::O_CLOEXEC));
    check_value!(fd, format!("Failed to open {}", path.display()), sink);
    tracing::trace!(path = %path.display(), fd = fd.code(), "opened");
    fd
}

/// Size of the file at `path` in bytes.
///
/// An open failure is already reported by [`open_readonly`] and is passed
/// upward without a second diagnostic.
pub fn file_size<S>(path: &Path, sink: &mut S) -> CheckedCValue<u64>
where
    S: DiagnosticSink + ?Sized,
{
    let fd = match open_readonly(path, sink).into_result() {
        Ok(fd) => OwnedFd(fd),
        Err(code) => return Failure::new(code).into(),
    };

    // SAFETY: `struct stat` holds only integers; all-zeros is valid.
    let mut stat: libc::stat = unsafe { std::mem::zeroed() };
    check!(fstat_raw(&fd, &mut stat), CErrorInfo, sink);

    CheckedCValue::success(u64::try_from(stat.st_size).unwrap_or(0))
}

/// Size of the file at `path`, or `fallback` if it cannot be determined.
///
/// The failure itself is reported to `sink` once, by [`file_size`]; the
/// substitution is only a `tracing` event.
///
/// # Returns
///
/// * the file size on success
/// * `fallback` on any open or `fstat` failure
pub fn file_size_or<S>(path: &Path, fallback: u64, sink: &mut S) -> u64
where
    S: DiagnosticSink + ?Sized,
{
    let size = file_size(path, sink);
    match size.ok() {
        Some(size) => size,
        None => {
            tracing::info!(path = %path.display(), fallback, "using fallback size");
            fallback
        }
    }
}

/// True if the current process may read `path`.
///
/// Any `access(2)` failure (missing file, permission, bad path) yields
/// `false` after one line to `sink`.
pub fn is_readable<S>(path: &Path, sink: &mut S) -> bool
where
    S: DiagnosticSink + ?Sized,
{
    check_ret!(access_readable(path), CErrorInfo, sink, false);
    true
}
