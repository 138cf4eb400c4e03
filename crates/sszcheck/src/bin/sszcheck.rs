//! `sszcheck` CLI entrypoint.
//!
//! Scans a spec-test fixture tree for one type's `ssz_random` cases and
//! round-trip-verifies each of them, printing one hash tree root per case.
//! Exits non-zero on the first error at any stage.

#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use sszcheck::{HarnessError, VerifyOptions, KNOWN_TYPES};

/// SSZ spec-test round-trip checker.
#[derive(Parser, Debug)]
#[command(name = "sszcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory to scan for spec-test fixtures.
    #[arg(long, value_name = "DIR")]
    path: PathBuf,

    /// Name of the type to test (must be a registered type).
    #[arg(long = "type", value_name = "NAME")]
    type_name: String,

    /// Also compare each computed root against the case's roots.yaml
    /// sidecar, where present.
    #[arg(long, default_value_t = false)]
    check_roots: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for the hash output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    info!(path = %cli.path.display(), type_name = %cli.type_name, "scanning spec-test fixtures");

    let opts = VerifyOptions {
        check_roots: cli.check_roots,
    };
    match sszcheck::run(&cli.path, &cli.type_name, &opts) {
        Ok(summary) => {
            info!(cases = summary.cases, "all cases verified");
            Ok(())
        }
        Err(err) => {
            if matches!(err, HarnessError::UnknownType { .. }) {
                eprintln!("known types: {}", KNOWN_TYPES.join(", "));
            }
            Err(err.into())
        }
    }
}
