//! # errcodes probe binary
//!
//! # Usage
//!
//! ```bash
//! # Describe a kernel-style code
//! errcodes_probe decode -- -2
//!
//! # Raw errno value
//! errcodes_probe decode 13 --domain errno
//!
//! # File sizes, fallback for unreadable files
//! errcodes_probe size --allow-missing /etc/hostname /nonexistent
//!
//! # Read access with config and JSON logs
//! errcodes_probe --config probe.toml --json readable /etc/shadow
//! ```

#![deny(warnings)]

use clap::{Parser, Subcommand};
use errcodes::prelude::*;
use errcodes_probe::{Domain, ProbeConfig, ProbeError, decode_code, ops};
use std::path::PathBuf;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

/// errcodes probe - decode error codes and probe files
#[derive(Parser, Debug)]
#[command(name = "errcodes_probe")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Decode error codes and probe files through checked libc calls")]
#[command(long_about = None)]
struct Args {
    /// Path to probe configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Describe an error code
    Decode {
        /// Numeric code
        #[arg(allow_negative_numbers = true)]
        code: i32,

        /// Error domain (defaults to the configured one)
        #[arg(short, long, value_enum)]
        domain: Option<Domain>,
    },

    /// Print the size of each file
    Size {
        /// Files to measure
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Print the configured fallback size instead of failing
        #[arg(long)]
        allow_missing: bool,
    },

    /// Check read access to each path
    Readable {
        /// Paths to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = run() {
        error!("probe failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => ProbeConfig::load(path),
        None => Ok(ProbeConfig::default()),
    };

    // Tracing first, so a config error is still logged.
    let level = loaded
        .as_ref()
        .map(|c| c.shared.log_level)
        .unwrap_or_default();
    setup_tracing(&args, level);

    let config = loaded.map_err(ProbeError::from)?;

    info!(
        service = %config.shared.service_name,
        "errcodes probe v{} starting",
        env!("CARGO_PKG_VERSION")
    );
    debug!(?config, "configuration");

    let mut sink = config.probe.build_sink();

    match args.command {
        Command::Decode { code, domain } => {
            let domain = domain.unwrap_or(config.probe.domain);
            debug!(code, ?domain, success = domain.is_success(code), "decoding");
            println!("{}", decode_code(domain, code));
        }
        Command::Size {
            paths,
            allow_missing,
        } => {
            let mut failed = 0;
            for path in &paths {
                if allow_missing {
                    let size = ops::file_size_or(path, config.probe.fallback_size, sink.as_mut());
                    println!("{size}\t{}", path.display());
                    continue;
                }
                let size = ops::file_size(path, sink.as_mut());
                match size.ok() {
                    Some(size) => println!("{size}\t{}", path.display()),
                    None => failed += 1,
                }
            }
            ProbeError::check_paths(failed, paths.len())?;
        }
        Command::Readable { paths } => {
            let mut failed = 0;
            for path in &paths {
                let readable = ops::is_readable(path, sink.as_mut());
                println!("{}\t{}", if readable { "yes" } else { "no" }, path.display());
                if !readable {
                    failed += 1;
                }
            }
            ProbeError::check_paths(failed, paths.len())?;
        }
    }

    Ok(())
}

/// Setup tracing subscriber from CLI arguments and configured level.
fn setup_tracing(args: &Args, configured: LogLevel) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        configured.into()
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
