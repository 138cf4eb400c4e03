//! Round-trip verification pipeline.
//!
//! For each discovered case: load → decompress → decode → re-encode →
//! byte-exact compare → hash tree root. Any failure at any stage is fatal
//! and carries the case directory and stage, so the failure can be
//! reproduced by rerunning on that single case. This is a batch-verification
//! tool run until it finds the first violation; there is no
//! skip-and-continue mode and no retry (fixture data is static, so failures
//! are deterministic).
//!
//! Cases are verified strictly in discovery order, single-threaded, with no
//! state shared between cases.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;
use tree_hash::Hash256;

use crate::discovery::{self, TestCase};
use crate::error::HarnessError;
use crate::registry::{self, CaseDecoder};

/// Pipeline knobs. `check_roots` wires in the optional `roots.yaml`
/// cross-check; it is off by default to match the base pipeline, which
/// consults only the canonical bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
    pub check_roots: bool,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Number of cases verified.
    pub cases: usize,
}

/// Run the full pipeline for one case and return its hash tree root.
///
/// # Errors
///
/// Returns the first fatal error of the pipeline: `FixtureLoad`,
/// `Decompress`, `Decode`, `RoundTripMismatch`, or (with `check_roots`)
/// `SidecarParse`/`RootMismatch`.
pub fn verify_case(
    case: &TestCase,
    decode: CaseDecoder,
    opts: &VerifyOptions,
) -> Result<Hash256, HarnessError> {
    let fixture = case.fixture_bytes()?;

    let value = decode(&fixture).map_err(|err| HarnessError::Decode {
        path: case.dir.clone(),
        type_name: case.type_name.clone(),
        reason: format!("{err:?}"),
    })?;

    let reencoded = value.to_ssz();
    if reencoded != fixture {
        let first_diff = reencoded
            .iter()
            .zip(fixture.iter())
            .position(|(a, b)| a != b)
            .unwrap_or_else(|| reencoded.len().min(fixture.len()));
        return Err(HarnessError::RoundTripMismatch {
            path: case.dir.clone(),
            expected_len: fixture.len(),
            actual_len: reencoded.len(),
            first_diff,
        });
    }

    let root = value.hash_tree_root();

    if opts.check_roots {
        if let Some(expected) = case.expected_roots()? {
            check_expected_root(case, &expected.root, root)?;
        }
    }

    Ok(root)
}

fn check_expected_root(
    case: &TestCase,
    expected: &str,
    computed: Hash256,
) -> Result<(), HarnessError> {
    let stripped = expected.strip_prefix("0x").unwrap_or(expected);
    let bytes = hex::decode(stripped).map_err(|err| HarnessError::SidecarParse {
        path: case.dir.clone(),
        reason: format!("malformed root {expected:?}: {err}"),
    })?;
    if bytes.len() != 32 {
        return Err(HarnessError::SidecarParse {
            path: case.dir.clone(),
            reason: format!("root {expected:?} is {} bytes, want 32", bytes.len()),
        });
    }
    if Hash256::from_slice(&bytes) != computed {
        return Err(HarnessError::RootMismatch {
            path: case.dir.clone(),
            expected: expected.to_owned(),
            computed: format!("0x{}", hex::encode(computed)),
        });
    }
    Ok(())
}

/// Discover every case for `type_name` under `root` and verify them in
/// order, printing one `htr = 0x…` line per case on stdout.
///
/// The requested type is resolved before any scanning, so an unknown name
/// fails without touching the filesystem. Each discovered case re-resolves
/// its own name; that lookup cannot fail for cases the discoverer filtered,
/// but is still treated as fatal if it does.
///
/// # Errors
///
/// Returns `UnknownType`, `Discovery`, or the first per-case pipeline error.
pub fn run(
    root: &Path,
    type_name: &str,
    opts: &VerifyOptions,
) -> Result<RunSummary, HarnessError> {
    registry::resolve(type_name)?;

    let wanted: HashSet<String> = std::iter::once(type_name.to_owned()).collect();
    let cases = discovery::discover(root, &wanted)?;

    for case in &cases {
        info!(
            case = %case.dir.display(),
            config = case.config.as_str(),
            phase = case.phase.as_str(),
            "verifying"
        );
        let decoder = registry::resolve(&case.type_name)?;
        let htr = verify_case(case, decoder, opts)?;
        println!("htr = 0x{}", hex::encode(htr));
    }

    Ok(RunSummary { cases: cases.len() })
}
