//! # errcodes probe
//!
//! Diagnostic tool built on `errcodes`: decodes error codes and probes files
//! through raw libc calls wrapped in checked values.
//!
//! # Module Structure
//!
//! - [`ops`] - checked file operations (`open`, `fstat`, `access`)
//! - [`decode`] - code decoding per error domain
//! - [`config`] - TOML loading, validation and sink selection
//! - [`error`] - run-ending errors

#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod decode;
pub mod error;
pub mod ops;

pub use config::{ConfigError, ProbeConfig, ProbeSettings, SharedSettings, SinkKind};
pub use decode::{Domain, decode_code};
pub use error::ProbeError;
