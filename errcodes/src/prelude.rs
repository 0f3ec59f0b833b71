//! Prelude module for common re-exports.
//!
//! ```rust
//! use errcodes::prelude::*;
//! ```

// ─── Contract & Values ──────────────────────────────────────────────
pub use crate::checked::{Checked, CheckedValue, CodeError};
pub use crate::checked_code::CheckedCode;
pub use crate::error_info::ErrorInfo;
pub use crate::failure::Failure;

// ─── POSIX Domains ──────────────────────────────────────────────────
pub use crate::posix::{
    CErrorInfo, CheckedCCode, CheckedCValue, CheckedErrno, CheckedNegErrno, ErrnoInfo,
    NegErrnoInfo,
};

// ─── Diagnostics ────────────────────────────────────────────────────
pub use crate::sink::{DiagnosticSink, LogLevel, MemorySink, TracingSink};

// ─── Propagation Macros ─────────────────────────────────────────────
pub use crate::{check, check_ret, check_value, check_value_ret};
