//! Probe configuration.
//!
//! ```toml
//! [shared]
//! log_level = "debug"
//! service_name = "errcodes-probe"
//!
//! [probe]
//! sink = "tracing"
//! sink_level = "warn"
//! fallback_size = 0
//! domain = "neg-errno"
//! ```
//!
//! Both tables and every key are optional; unknown keys are rejected so a
//! misspelled setting does not silently fall back to its default.
//! [`ProbeConfig::load`] and [`ProbeConfig::from_toml_str`] return only
//! validated configurations.

use crate::decode::Domain;
use errcodes::prelude::*;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading the probe configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No file at the given path.
    #[error("configuration file {} not found", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("cannot read {}: {reason}", .path.display())]
    Unreadable {
        /// File that failed to read.
        path: PathBuf,
        /// I/O error text.
        reason: String,
    },

    /// Not valid TOML, or a key or value the probe does not accept.
    #[error("invalid configuration: {0}")]
    Syntax(String),

    /// Well-formed, but a setting is out of range or inconsistent.
    #[error("invalid [{section}] setting: {reason}")]
    Invalid {
        /// Table holding the offending setting.
        section: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

// ─── [shared] ───────────────────────────────────────────────────────

/// `[shared]` section: settings every errcodes tool understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SharedSettings {
    /// Subscriber filter level.
    pub log_level: LogLevel,
    /// Instance name attached to the startup log line.
    pub service_name: String,
}

impl Default for SharedSettings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            service_name: "errcodes-probe".to_string(),
        }
    }
}

// ─── [probe] ────────────────────────────────────────────────────────

/// Where propagation diagnostics go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// One plain line per failure on standard error.
    #[default]
    Stderr,
    /// `tracing` events at `sink_level`.
    Tracing,
}

/// `[probe]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeSettings {
    /// Diagnostic destination.
    pub sink: SinkKind,
    /// Event level for `SinkKind::Tracing`.
    pub sink_level: LogLevel,
    /// Size reported for unreadable files with `size --allow-missing`.
    pub fallback_size: u64,
    /// Domain used by `decode` when `--domain` is omitted.
    pub domain: Domain,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            sink: SinkKind::Stderr,
            sink_level: LogLevel::Warn,
            fallback_size: 0,
            domain: Domain::NegErrno,
        }
    }
}

impl ProbeSettings {
    /// Build the configured diagnostic sink.
    pub fn build_sink(&self) -> Box<dyn DiagnosticSink> {
        match self.sink {
            SinkKind::Stderr => Box::new(io::stderr()),
            SinkKind::Tracing => Box::new(TracingSink::new(self.sink_level)),
        }
    }
}

// ─── ProbeConfig ────────────────────────────────────────────────────

/// Complete probe configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeConfig {
    /// Settings common to all tools.
    pub shared: SharedSettings,
    /// Probe specific settings.
    pub probe: ProbeSettings,
}

impl ProbeConfig {
    /// Load and validate a configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file
    ///
    /// # Errors
    ///
    /// * `ConfigError::NotFound` - no file at `path`
    /// * `ConfigError::Unreadable` - any other read failure
    /// * `ConfigError::Syntax` / `ConfigError::Invalid` - see [`Self::from_toml_str`]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read probe configuration");
        Self::from_toml_str(&text)
    }

    /// Parse and validate TOML text.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Syntax` - malformed TOML, unknown keys or bad values
    /// * `ConfigError::Invalid` - see [`Self::validate`]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Syntax(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings that parse but cannot work.
    ///
    /// - `[shared] service_name` must be non-empty and free of whitespace
    ///   (it is logged as a single field).
    /// - With `sink = "tracing"`, `sink_level` must not be below
    ///   `[shared] log_level`, or every diagnostic would be filtered out.
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` naming the offending section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = &self.shared.service_name;
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid {
                section: "shared",
                reason: format!("service_name {name:?} must be a non-empty word"),
            });
        }

        if self.probe.sink == SinkKind::Tracing && self.probe.sink_level < self.shared.log_level {
            return Err(ConfigError::Invalid {
                section: "probe",
                reason: format!(
                    "sink_level {} is below log_level {}, diagnostics would be dropped",
                    self.probe.sink_level, self.shared.log_level
                ),
            });
        }
        Ok(())
    }
}
