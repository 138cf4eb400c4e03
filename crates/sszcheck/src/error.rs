//! Harness error taxonomy.
//!
//! Every variant is fatal: fixture data is static, so every failure is
//! deterministic and reproducible by rerunning on the single case named in
//! the error. Nothing is retried. Per-entry walk errors are deliberately not
//! represented here; discovery logs them at `warn` and keeps walking.
//!
//! The re-encode and hash stages of the pipeline cannot fail in the chosen
//! codec (`ssz::Encode` and `tree_hash::TreeHash` are infallible), so the
//! encode/hash error classes have no inhabitant in this implementation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// The requested or discovered type name has no registry entry.
    #[error("no registered ssz type named {name:?}")]
    UnknownType { name: String },

    /// The fixture root itself cannot be walked.
    #[error("failed to walk fixture root {}: {source}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A matched case's fixture file is missing or unreadable.
    #[error("failed to read fixture {}: {source}", path.display())]
    FixtureLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The fixture file is not valid snappy block data.
    #[error("failed to decompress fixture {}: {source}", path.display())]
    Decompress {
        path: PathBuf,
        #[source]
        source: snap::Error,
    },

    /// The decompressed bytes do not decode as the case's type.
    #[error("failed to decode {type_name} from {}: {reason}", path.display())]
    Decode {
        path: PathBuf,
        type_name: String,
        reason: String,
    },

    /// Decode → re-encode did not reproduce the fixture bytes. This is the
    /// primary defect the harness exists to catch.
    #[error(
        "round-trip mismatch for {}: re-encoded {actual_len} bytes vs fixture {expected_len} bytes, first difference at offset {first_diff}",
        path.display()
    )]
    RoundTripMismatch {
        path: PathBuf,
        expected_len: usize,
        actual_len: usize,
        first_diff: usize,
    },

    /// Computed hash tree root disagrees with the `roots.yaml` sidecar
    /// (opt-in cross-check).
    #[error("hash tree root mismatch for {}: computed {computed}, expected {expected}", path.display())]
    RootMismatch {
        path: PathBuf,
        expected: String,
        computed: String,
    },

    /// The `roots.yaml` sidecar exists but cannot be parsed.
    #[error("failed to parse roots sidecar {}: {reason}", path.display())]
    SidecarParse { path: PathBuf, reason: String },
}
