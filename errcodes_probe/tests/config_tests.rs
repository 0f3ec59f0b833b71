//! Probe configuration loading from files.

use errcodes::prelude::*;
use errcodes_probe::{ConfigError, Domain, ProbeConfig, SinkKind};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn load_full_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[shared]
log_level = "debug"
service_name = "probe-test"

[probe]
sink = "tracing"
sink_level = "error"
fallback_size = 512
domain = "errno"
"#
    )
    .unwrap();

    let cfg = ProbeConfig::load(file.path()).unwrap();
    assert_eq!(cfg.shared.log_level, LogLevel::Debug);
    assert_eq!(cfg.shared.service_name, "probe-test");
    assert_eq!(cfg.probe.sink, SinkKind::Tracing);
    assert_eq!(cfg.probe.sink_level, LogLevel::Error);
    assert_eq!(cfg.probe.fallback_size, 512);
    assert_eq!(cfg.probe.domain, Domain::Errno);
}

#[test]
fn missing_config_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("probe.toml");

    let err = ProbeConfig::load(&path).unwrap_err();
    assert_eq!(err, ConfigError::NotFound(path.clone()));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn directory_is_unreadable() {
    let dir = TempDir::new().unwrap();
    let err = ProbeConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Unreadable { ref path, .. } if path == dir.path()));
}

#[test]
fn malformed_file_is_a_syntax_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "shared = [[[").unwrap();

    let err = ProbeConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Syntax(_)));
}

#[test]
fn load_validates_across_sections() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "[shared]\nlog_level = \"warn\"\n\n[probe]\nsink = \"tracing\"\nsink_level = \"info\"\n"
    )
    .unwrap();

    let err = ProbeConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { section: "probe", .. }));
}
