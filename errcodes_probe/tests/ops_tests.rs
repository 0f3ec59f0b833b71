//! Probe operations against real files.

use errcodes::prelude::*;
use errcodes_probe::ops;
use errcodes_probe::{ProbeConfig, SinkKind};
use nix::errno::Errno;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

fn file_with(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

// ─── open_readonly ──────────────────────────────────────────────────

#[test]
fn open_existing_file_yields_descriptor() {
    let file = file_with(b"abc");
    let mut sink = MemorySink::new();

    let fd = ops::open_readonly(file.path(), &mut sink);
    assert!(fd.has_value());
    assert!(fd.code() >= 0);
    assert!(sink.is_empty());

    // SAFETY: the descriptor was just opened and is owned by this test.
    assert_eq!(unsafe { libc::close(fd.value()) }, 0);
}

#[test]
fn open_missing_file_reports_enoent() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.bin");
    let mut sink = MemorySink::new();

    let fd = ops::open_readonly(&missing, &mut sink);
    assert!(!fd.has_value());
    assert_eq!(fd.code(), -1);
    assert_eq!(
        sink.lines(),
        [format!(
            "Failed to open {} with error {}",
            missing.display(),
            Errno::ENOENT.desc()
        )]
    );
}

#[test]
fn open_path_with_nul_reports_einval() {
    let mut sink = MemorySink::new();
    let fd = ops::open_readonly(Path::new("bad\0name"), &mut sink);
    assert_eq!(fd.code(), -1);
    assert_eq!(sink.len(), 1);
    assert!(sink.lines()[0].ends_with(Errno::EINVAL.desc()));
}

// ─── file_size / file_size_or ───────────────────────────────────────

#[test]
fn file_size_of_regular_file() {
    let file = file_with(b"hello");
    let mut sink = MemorySink::new();

    let size = ops::file_size(file.path(), &mut sink);
    assert_eq!(size.into_value(), 5);
    assert!(sink.is_empty());
}

#[test]
fn file_size_of_empty_file() {
    let file = file_with(b"");
    let mut sink = MemorySink::new();
    assert_eq!(*ops::file_size(file.path(), &mut sink).value(), 0);
}

#[test]
fn file_size_failure_is_reported_once() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");
    let mut sink = MemorySink::new();

    let size = ops::file_size(&missing, &mut sink);
    assert!(!size.has_value());
    assert_eq!(size.code(), -1);
    assert_eq!(sink.len(), 1);
    assert!(sink.lines()[0].starts_with("Failed to open "));
}

#[test]
fn file_size_or_returns_fallback_and_reports_once() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");
    let mut sink = MemorySink::new();

    assert_eq!(ops::file_size_or(&missing, 4096, &mut sink), 4096);
    assert_eq!(
        sink.lines(),
        [format!(
            "Failed to open {} with error {}",
            missing.display(),
            Errno::ENOENT.desc()
        )]
    );
}

#[test]
fn file_size_or_returns_real_size_on_success() {
    let file = file_with(&[0u8; 64]);
    let mut sink = MemorySink::new();
    assert_eq!(ops::file_size_or(file.path(), 1, &mut sink), 64);
    assert!(sink.is_empty());
}

// ─── is_readable ────────────────────────────────────────────────────

#[test]
fn readable_file() {
    let file = file_with(b"x");
    let mut sink = MemorySink::new();
    assert!(ops::is_readable(file.path(), &mut sink));
    assert!(sink.is_empty());
}

#[test]
fn missing_file_is_not_readable() {
    let dir = TempDir::new().unwrap();
    let mut sink = MemorySink::new();

    assert!(!ops::is_readable(&dir.path().join("nope"), &mut sink));
    assert_eq!(sink.len(), 1);
    assert!(sink.lines()[0].starts_with("Call '"));
    assert!(sink.lines()[0].ends_with(Errno::ENOENT.desc()));
}

// ─── Sinks ──────────────────────────────────────────────────────────

#[test]
fn ops_accept_writer_sinks() {
    let dir = TempDir::new().unwrap();
    let mut out: Vec<u8> = Vec::new();

    assert!(!ops::is_readable(&dir.path().join("nope"), &mut out));
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.ends_with('\n'));
}

#[test]
fn ops_accept_configured_sink() {
    let mut config = ProbeConfig::default();
    config.probe.sink = SinkKind::Tracing;
    let mut sink = config.probe.build_sink();

    let dir = TempDir::new().unwrap();
    assert_eq!(
        ops::file_size_or(&dir.path().join("nope"), 7, sink.as_mut()),
        7
    );
}
