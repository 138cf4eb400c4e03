//! End-to-end harness tests over synthetic fixture trees.
//!
//! These build real on-disk trees in the canonical spec-test layout, with
//! snappy-compressed SSZ fixtures, and drive discovery and verification the
//! way the CLI does.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use ssz::Encode;
use tempfile::TempDir;
use tree_hash::{Hash256, TreeHash};

use sszcheck::{discover, resolve, verify_case, HarnessError, VerifyOptions};
use sszcheck_types::{Checkpoint, Fork};

fn wanted(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

fn sample_fork() -> Fork {
    Fork {
        previous_version: vec![0, 0, 0, 1].into(),
        current_version: vec![0, 0, 0, 2].into(),
        epoch: 5,
    }
}

/// Create `tests/{config}/{phase}/ssz_static/{type}/ssz_random/{case}` under
/// `root` and write the snappy-compressed fixture into it.
fn write_case(
    root: &Path,
    config: &str,
    phase: &str,
    type_name: &str,
    case_id: &str,
    ssz_bytes: &[u8],
) -> PathBuf {
    let dir = root
        .join("tests")
        .join(config)
        .join(phase)
        .join("ssz_static")
        .join(type_name)
        .join("ssz_random")
        .join(case_id);
    fs::create_dir_all(&dir).unwrap();
    let compressed = snap::raw::Encoder::new().compress_vec(ssz_bytes).unwrap();
    fs::write(dir.join("serialized.ssz_snappy"), compressed).unwrap();
    dir
}

#[test]
fn single_fork_case_discovers_and_verifies() {
    let root = TempDir::new().unwrap();
    let fork = sample_fork();
    write_case(
        root.path(),
        "minimal",
        "phase0",
        "Fork",
        "case_0",
        &fork.as_ssz_bytes(),
    );

    let cases = discover(root.path(), &wanted(&["Fork"])).unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].type_name, "Fork");
    assert_eq!(cases[0].case_id, "case_0");

    let decoder = resolve("Fork").unwrap();
    let htr = verify_case(&cases[0], decoder, &VerifyOptions::default()).unwrap();
    assert_eq!(htr, fork.tree_hash_root());
}

#[test]
fn discovery_ignores_non_matching_directories() {
    let root = TempDir::new().unwrap();
    let fork_bytes = sample_fork().as_ssz_bytes();
    write_case(root.path(), "mainnet", "altair", "Fork", "case_1", &fork_bytes);

    // Irrelevant entries the walk must skip silently.
    fs::create_dir_all(root.path().join("tests/mainnet/altair/ssz_static/Fork/ssz_random/notacase"))
        .unwrap();
    fs::create_dir_all(root.path().join("tests/mainnet/altair/operations/Fork/ssz_random/case_0"))
        .unwrap();
    fs::create_dir_all(root.path().join("unrelated/deeply/nested/dirs")).unwrap();
    fs::write(root.path().join("tests/README.md"), "not a case").unwrap();

    let cases = discover(root.path(), &wanted(&["Fork"])).unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].case_id, "case_1");
}

#[test]
fn discovery_filters_unwanted_types() {
    let root = TempDir::new().unwrap();
    let fork_bytes = sample_fork().as_ssz_bytes();
    let checkpoint = Checkpoint {
        epoch: 9,
        root: Hash256::repeat_byte(0x31),
    };
    write_case(root.path(), "mainnet", "phase0", "Fork", "case_0", &fork_bytes);
    write_case(
        root.path(),
        "mainnet",
        "phase0",
        "Checkpoint",
        "case_0",
        &checkpoint.as_ssz_bytes(),
    );

    let cases = discover(root.path(), &wanted(&["Checkpoint"])).unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].type_name, "Checkpoint");
}

#[test]
fn discovery_order_is_stable_walk_order() {
    let root = TempDir::new().unwrap();
    let fork_bytes = sample_fork().as_ssz_bytes();
    // Created out of order; sorted entry listing must yield case_0, case_1, case_10.
    for case_id in ["case_10", "case_0", "case_1"] {
        write_case(root.path(), "minimal", "merge", "Fork", case_id, &fork_bytes);
    }

    let cases = discover(root.path(), &wanted(&["Fork"])).unwrap();
    let ids: Vec<&str> = cases.iter().map(|case| case.case_id.as_str()).collect();
    assert_eq!(ids, ["case_0", "case_1", "case_10"]);
}

#[cfg(unix)]
#[test]
fn unreadable_sibling_directory_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let root = TempDir::new().unwrap();
    let fork = sample_fork();
    write_case(
        root.path(),
        "mainnet",
        "phase0",
        "Fork",
        "case_0",
        &fork.as_ssz_bytes(),
    );

    let locked = root.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root can read mode-000 directories; the skip branch is only reachable
    // when the read actually fails.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = discover(root.path(), &wanted(&["Fork"]));
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let cases = result.unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].type_name, "Fork");
    assert_eq!(cases[0].case_id, "case_0");
}

#[test]
fn empty_root_yields_no_cases_and_no_error() {
    let root = TempDir::new().unwrap();
    let cases = discover(root.path(), &wanted(&["Fork"])).unwrap();
    assert!(cases.is_empty());

    let summary = sszcheck::run(root.path(), "Fork", &VerifyOptions::default()).unwrap();
    assert_eq!(summary.cases, 0);
}

#[test]
fn run_rejects_unknown_type_before_scanning() {
    // A nonexistent root would fail discovery, so a passing UnknownType
    // proves the type check happens first.
    let err = sszcheck::run(
        Path::new("/nonexistent/fixture/root"),
        "NotAType",
        &VerifyOptions::default(),
    )
    .expect_err("unknown type must fail");
    assert!(matches!(err, HarnessError::UnknownType { .. }));
}

#[test]
fn run_verifies_all_cases_for_requested_type() {
    let root = TempDir::new().unwrap();
    let fork_bytes = sample_fork().as_ssz_bytes();
    write_case(root.path(), "mainnet", "phase0", "Fork", "case_0", &fork_bytes);
    write_case(root.path(), "minimal", "altair", "Fork", "case_3", &fork_bytes);

    let summary = sszcheck::run(root.path(), "Fork", &VerifyOptions::default()).unwrap();
    assert_eq!(summary.cases, 2);
}

#[test]
fn truncated_fixture_fails_decode() {
    let root = TempDir::new().unwrap();
    let mut bytes = sample_fork().as_ssz_bytes();
    bytes.truncate(bytes.len() - 1);
    write_case(root.path(), "mainnet", "merge", "Fork", "case_0", &bytes);

    let err = sszcheck::run(root.path(), "Fork", &VerifyOptions::default())
        .expect_err("truncated fixture must fail");
    assert!(matches!(err, HarnessError::Decode { .. }));
}

#[test]
fn roots_sidecar_cross_check_end_to_end() {
    let root = TempDir::new().unwrap();
    let fork = sample_fork();
    let dir = write_case(
        root.path(),
        "mainnet",
        "phase0",
        "Fork",
        "case_0",
        &fork.as_ssz_bytes(),
    );
    fs::write(
        dir.join("roots.yaml"),
        format!("root: '0x{}'\n", hex::encode(fork.tree_hash_root())),
    )
    .unwrap();

    let opts = VerifyOptions { check_roots: true };
    let summary = sszcheck::run(root.path(), "Fork", &opts).unwrap();
    assert_eq!(summary.cases, 1);

    // Corrupt the sidecar; the same run must now fail.
    fs::write(
        dir.join("roots.yaml"),
        format!("root: '0x{}'\n", "fe".repeat(32)),
    )
    .unwrap();
    let err = sszcheck::run(root.path(), "Fork", &opts).expect_err("bad sidecar root must fail");
    assert!(matches!(err, HarnessError::RootMismatch { .. }));
}
