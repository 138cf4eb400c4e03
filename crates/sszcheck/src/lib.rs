//! Round-trip conformance harness for SSZ consensus spec-test fixtures.
//!
//! The harness discovers `ssz_static`/`ssz_random` test vectors on disk,
//! snappy-decompresses each fixture, decodes it into its registered
//! container type, re-encodes it, demands byte-for-byte equality with the
//! fixture, and emits the value's hash tree root for cross-implementation
//! comparison. The first violation aborts the run.
//!
//! Three components, composed linearly:
//! - [`registry`]: closed name → decoder mapping for the supported types
//! - [`discovery`]: fixture-tree walk producing [`discovery::TestCase`]s
//! - [`verify`]: the per-case decode → encode → compare → hash pipeline
//!
//! The SSZ codec and Merkleization are external (`ethereum_ssz`,
//! `tree_hash`); the harness only drives them.

#![forbid(unsafe_code)]

pub mod discovery;
pub mod error;
pub mod registry;
pub mod verify;

pub use discovery::{discover, ConfigPreset, ExpectedRoots, ForkPhase, TestCase};
pub use error::HarnessError;
pub use registry::{resolve, CaseDecoder, SszCase, KNOWN_TYPES};
pub use verify::{run, verify_case, RunSummary, VerifyOptions};
