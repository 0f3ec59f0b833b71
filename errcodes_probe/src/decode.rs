//! Code decoding under a selectable error domain.

use errcodes::{ErrnoInfo, ErrorInfo, NegErrnoInfo};
use serde::{Deserialize, Serialize};

/// Error domain a numeric code is interpreted in.
///
/// `c`-style codes (`-1` plus thread errno) carry no information in the
/// number itself, so only the self-describing domains are offered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    /// Kernel-style: negative errno on failure, non-negative on success.
    #[default]
    NegErrno,
    /// Raw positive errno value, `0` for success.
    Errno,
}

impl Domain {
    /// True if `code` denotes success in this domain.
    pub fn is_success(self, code: i32) -> bool {
        match self {
            Self::NegErrno => NegErrnoInfo::is_success(code),
            Self::Errno => ErrnoInfo::is_success(code),
        }
    }
}

/// Describe `code` under `domain`.
///
/// # Returns
///
/// `"success"` for success codes, otherwise the platform's errno text
/// (`"Unknown errno"` for values it does not know).
pub fn decode_code(domain: Domain, code: i32) -> String {
    match domain {
        Domain::NegErrno => NegErrnoInfo::decode(code),
        Domain::Errno => ErrnoInfo::decode(code),
    }
}
