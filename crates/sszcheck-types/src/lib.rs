//! Beacon-chain SSZ container catalog for the sszcheck conformance harness.
//!
//! This crate defines the closed set of consensus message shapes the harness
//! can round-trip, spanning the phase0, altair, and bellatrix ("merge")
//! protocol phases. The containers are plain data definitions; the SSZ
//! encode/decode algorithm and the Merkleization algorithm live entirely in
//! the external codec crates (`ethereum_ssz`, `tree_hash`, `ssz_types`).
//!
//! Only the mainnet preset's length parameters are compiled in. A
//! minimal-preset fixture decoded against these shapes fails with a layout
//! error, which is the harness doing its job.

#![forbid(unsafe_code)]

pub mod altair;
pub mod bellatrix;
pub mod phase0;
pub mod preset;

use ssz_types::typenum::{U4, U20, U48, U96};
use ssz_types::FixedVector;

pub use altair::{
    ContributionAndProof, SignedContributionAndProof, SyncAggregate,
    SyncAggregatorSelectionData, SyncCommittee, SyncCommitteeContribution, SyncCommitteeMessage,
};
pub use bellatrix::{
    BeaconBlock, BeaconBlockBody, BeaconState, ExecutionPayload, ExecutionPayloadHeader,
    SignedBeaconBlock,
};
pub use phase0::{
    AggregateAndProof, Attestation, AttestationData, AttesterSlashing, BeaconBlockHeader,
    Checkpoint, Deposit, DepositData, DepositMessage, Eth1Data, Fork, ForkData, HistoricalBatch,
    IndexedAttestation, PendingAttestation, ProposerSlashing, SignedAggregateAndProof,
    SignedBeaconBlockHeader, SignedVoluntaryExit, SigningData, Validator, VoluntaryExit,
};

/// 32-byte root / digest, shared with the codec crates.
pub use tree_hash::Hash256;

/// 4-byte fork version.
pub type ForkVersion = FixedVector<u8, U4>;

/// BLS12-381 public key bytes. Opaque to the harness; signatures are never
/// verified here.
pub type BlsPubkey = FixedVector<u8, U48>;

/// BLS12-381 signature bytes, equally opaque.
pub type BlsSignature = FixedVector<u8, U96>;

/// 20-byte execution-layer address.
pub type ExecutionAddress = FixedVector<u8, U20>;
