//! Spec-test fixture discovery.
//!
//! Walks a fixture root and matches directories against the canonical
//! spec-test layout:
//!
//! ```text
//! tests/{mainnet|minimal}/{phase0|altair|merge}/ssz_static/{Type}/ssz_random/case_{N}/
//! ```
//!
//! Discovery is a permissive filter: fixture trees legitimately contain many
//! directories that are not `ssz_random` cases (other test suites, sidecar
//! files), so anything that does not match the pattern, or matches it with
//! an unwanted type name, is dropped silently. Only an unreadable fixture
//! root is an error; unreadable entries deeper in the tree are logged at
//! `warn` and skipped.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::warn;

use crate::error::HarnessError;

/// Compressed canonical-bytes file inside each case directory.
const FIXTURE_FILE: &str = "serialized.ssz_snappy";

/// Optional precomputed-roots sidecar inside each case directory.
const ROOTS_FILE: &str = "roots.yaml";

/// Five-group structural pattern for a case directory. The type segment must
/// be a single path component and the case id must close the path, so nested
/// or malformed layouts never match.
static CASE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|/)tests/(mainnet|minimal)/(altair|merge|phase0)/ssz_static/([^/]+)/ssz_random/(case_[0-9]+)$",
    )
    .expect("valid case pattern")
});

/// Environment-size preset a fixture was generated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    Mainnet,
    Minimal,
}

impl ConfigPreset {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "mainnet" => Some(Self::Mainnet),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Minimal => "minimal",
        }
    }
}

/// Protocol phase a fixture was generated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkPhase {
    Phase0,
    Altair,
    Merge,
}

impl ForkPhase {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "phase0" => Some(Self::Phase0),
            "altair" => Some(Self::Altair),
            "merge" => Some(Self::Merge),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Phase0 => "phase0",
            Self::Altair => "altair",
            Self::Merge => "merge",
        }
    }
}

/// One discovered fixture directory. Constructed only from a fully matched
/// path, so every tag field is non-empty by construction. Immutable after
/// discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Case directory (the unit of a single test vector).
    pub dir: PathBuf,
    pub config: ConfigPreset,
    pub phase: ForkPhase,
    /// Registry name of the type under test.
    pub type_name: String,
    /// Opaque case identifier, for diagnostics only.
    pub case_id: String,
}

/// Precomputed roots from the optional `roots.yaml` sidecar, hex-encoded
/// with a `0x` prefix.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedRoots {
    pub root: String,
    #[serde(default)]
    pub signing_root: Option<String>,
}

impl TestCase {
    /// Read and snappy-decompress the case's canonical fixture bytes.
    ///
    /// The bytes are transient: read on every call, never cached.
    ///
    /// # Errors
    ///
    /// Returns `FixtureLoad` if the fixture file cannot be read and
    /// `Decompress` if it is not valid snappy block data.
    pub fn fixture_bytes(&self) -> Result<Vec<u8>, HarnessError> {
        let path = self.dir.join(FIXTURE_FILE);
        let compressed = fs::read(&path).map_err(|source| HarnessError::FixtureLoad {
            path: path.clone(),
            source,
        })?;
        snap::raw::Decoder::new()
            .decompress_vec(&compressed)
            .map_err(|source| HarnessError::Decompress { path, source })
    }

    /// Parse the optional `roots.yaml` sidecar. A missing sidecar is `None`,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns `FixtureLoad` if the sidecar exists but cannot be read and
    /// `SidecarParse` if it cannot be parsed.
    pub fn expected_roots(&self) -> Result<Option<ExpectedRoots>, HarnessError> {
        let path = self.dir.join(ROOTS_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(HarnessError::FixtureLoad { path, source }),
        };
        serde_yaml::from_str(&raw)
            .map(Some)
            .map_err(|err| HarnessError::SidecarParse {
                path,
                reason: err.to_string(),
            })
    }
}

/// Walk `root` and collect every case directory whose type name is in
/// `wanted`, in walk order (directory entries sorted by name, so the order
/// is stable for a stable filesystem listing).
///
/// # Errors
///
/// Returns `Discovery` only if `root` itself cannot be read. An empty root
/// or a root with no matches yields an empty `Vec`.
pub fn discover(
    root: &Path,
    wanted: &HashSet<String>,
) -> Result<Vec<TestCase>, HarnessError> {
    let mut cases = Vec::new();
    visit(root, wanted, &mut cases, true)?;
    Ok(cases)
}

fn visit(
    dir: &Path,
    wanted: &HashSet<String>,
    out: &mut Vec<TestCase>,
    is_root: bool,
) -> Result<(), HarnessError> {
    if let Some(case) = case_from_path(dir, wanted) {
        out.push(case);
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) if is_root => {
            return Err(HarnessError::Discovery {
                path: dir.to_path_buf(),
                source,
            });
        }
        Err(err) => {
            warn!(dir = %dir.display(), error = %err, "skipping unreadable directory");
            return Ok(());
        }
    };

    let mut children = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => children.push(entry.path()),
            Ok(_) => {}
            Err(err) => {
                warn!(entry = %entry.path().display(), error = %err, "skipping entry without file type");
            }
        }
    }
    children.sort();

    for child in &children {
        visit(child, wanted, out, false)?;
    }
    Ok(())
}

/// Match one directory path against the case pattern. Returns `None` for
/// anything that is not a wanted case; non-matches are not errors.
fn case_from_path(dir: &Path, wanted: &HashSet<String>) -> Option<TestCase> {
    let text = dir.to_str()?;
    let caps = CASE_PATTERN.captures(text)?;
    let config = ConfigPreset::from_segment(&caps[1])?;
    let phase = ForkPhase::from_segment(&caps[2])?;
    let type_name = &caps[3];
    if !wanted.contains(type_name) {
        return None;
    }
    Some(TestCase {
        dir: dir.to_path_buf(),
        config,
        phase,
        type_name: type_name.to_owned(),
        case_id: caps[4].to_owned(),
    })
}
